pub mod prompt;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{self, BufRead};
use std::path::Path;

use crate::assessment::AssessmentData;
use crate::deal::{
    Answer, BusinessSnapshot, DealInput, FinancingStructure, Industry, OwnerInvolvementProfile,
    SopStatus,
};
use prompt::{ask_yes_no, prompt_amount, prompt_choice, prompt_in_range, prompt_with_default, read_answer};

const ANSWERS: [(&str, &str); 3] = [("yes", "Yes"), ("somewhat", "Somewhat"), ("no", "No")];

const SOPS: [(&str, &str); 3] = [
    ("well-documented", "Well documented"),
    ("somewhat-documented", "Somewhat documented"),
    ("not-documented", "Not documented"),
];

const MOTIVATIONS: [(&str, &str); 5] = [
    ("entrepreneurship", "I want to be my own boss"),
    ("career-change", "I want a career change"),
    ("wealth-building", "I want to build wealth"),
    ("lifestyle", "I want more control over my lifestyle"),
    ("exploring", "Just exploring"),
];

const TIME_COMMITMENTS: [(&str, &str); 4] = [
    ("full-time", "Full-time"),
    ("part-time", "Part-time"),
    ("evenings-weekends", "Evenings and weekends"),
    ("undecided", "Undecided"),
];

const RISK_TOLERANCES: [(&str, &str); 3] = [("high", "High"), ("medium", "Medium"), ("low", "Low")];

const BACKGROUNDS: [(&str, &str); 7] = [
    ("executive", "Executive / general management"),
    ("operations", "Operations"),
    ("finance", "Finance / accounting"),
    ("sales-marketing", "Sales and marketing"),
    ("technical", "Technical / engineering"),
    ("consulting", "Consulting"),
    ("other", "Other"),
];

const EXPERIENCE: [(&str, &str); 5] = [
    ("multiple-businesses", "I have owned several businesses"),
    ("owner", "I have owned a business"),
    ("manager", "I have managed a business or P&L"),
    ("employee", "I have worked in a small business"),
    ("none", "No business experience"),
];

const CAPITAL: [(&str, &str); 5] = [
    ("under-100k", "Under $100K"),
    ("100k-250k", "$100K-$250K"),
    ("250k-500k", "$250K-$500K"),
    ("500k-1m", "$500K-$1M"),
    ("over-1m", "Over $1M"),
];

const INCOME: [(&str, &str); 5] = [
    ("50k-100k", "$50K-$100K"),
    ("100k-150k", "$100K-$150K"),
    ("150k-250k", "$150K-$250K"),
    ("250k-500k", "$250K-$500K"),
    ("over-500k", "Over $500K"),
];

/// Map a kebab-case answer onto its enum through serde, so unknown values
/// land in the same fallback variant a hand-written file would.
fn choice<T: DeserializeOwned + Default>(value: &str) -> T {
    serde_json::from_value(serde_json::Value::String(value.to_string())).unwrap_or_default()
}

fn industry_choices() -> Vec<(&'static str, &'static str)> {
    Industry::ALL.iter().map(|i| (i.label(), i.label())).collect()
}

/// Walk through the deal questionnaire on `input`
pub fn collect_deal<R: BufRead>(input: &mut R) -> Result<DealInput> {
    println!("Deal details");
    let name = prompt_with_default(input, "Business name", "")?;

    let industry = Industry::from_label(prompt_choice(input, "Industry:", &industry_choices())?);
    let business = BusinessSnapshot {
        industry,
        years_in_business: prompt_amount(input, "Years in business", 0.0)?,
        annual_revenue: prompt_amount(input, "Annual revenue", 0.0)?,
        ebitda: prompt_amount(input, "EBITDA", 0.0)?,
        owner_salary: prompt_amount(input, "Owner salary added back", 0.0)?,
        has_real_estate: ask_yes_no(input, "Does the sale include real estate?", false)?,
        has_equipment: ask_yes_no(input, "Does the sale include equipment?", false)?,
        asset_value: prompt_amount(input, "Value of included assets", 0.0)?,
        purchase_price: prompt_amount(input, "Asking price", 0.0)?,
    };

    println!();
    println!("Owner involvement");
    let involvement = OwnerInvolvementProfile {
        owner_involvement: prompt_in_range(
            input,
            "How involved is the owner day to day (1 = barely, 5 = runs everything)",
            1,
            5,
            3,
        )?,
        runs_without_owner: Answer::parse(prompt_choice(input, "Does the business run without the owner?", &ANSWERS)?)
            .unwrap_or_default(),
        has_second_in_command: Answer::parse(prompt_choice(input, "Is there a second in command?", &ANSWERS)?)
            .unwrap_or_default(),
        financial_records: Answer::parse(prompt_choice(input, "Are the financial records verified?", &ANSWERS)?)
            .unwrap_or_default(),
        sops: SopStatus::parse(prompt_choice(input, "How well documented are the SOPs?", &SOPS)?)
            .unwrap_or_default(),
    };

    println!();
    let financing = if ask_yes_no(input, "Add a financing structure?", true)? {
        Some(FinancingStructure {
            down_payment: prompt_amount(input, "Down payment", 0.0)?,
            conventional_loan: prompt_amount(input, "Conventional loan", 0.0)?,
            sba_7a: prompt_amount(input, "SBA 7(a) loan", 0.0)?,
            sba_504: prompt_amount(input, "SBA 504 loan", 0.0)?,
            seller_note: prompt_amount(input, "Seller note", 0.0)?,
        })
    } else {
        None
    };

    Ok(DealInput {
        name: if name.is_empty() { None } else { Some(name) },
        business,
        involvement,
        financing,
    })
}

/// Walk through the buyer self-assessment on `input`
pub fn collect_assessment<R: BufRead>(input: &mut R) -> Result<AssessmentData> {
    println!("Buyer self-assessment");
    let name = prompt_with_default(input, "Your name", "")?;

    let motivation = choice(prompt_choice(input, "Why do you want to buy a business?", &MOTIVATIONS)?);
    let time_commitment = choice(prompt_choice(input, "How much time will you commit?", &TIME_COMMITMENTS)?);
    let risk_tolerance = choice(prompt_choice(input, "What is your risk tolerance?", &RISK_TOLERANCES)?);
    let professional_background = choice(prompt_choice(input, "Professional background:", &BACKGROUNDS)?);

    let skills = read_answer(input, "Transferable skills (comma separated): ")?;
    let transferable_skills = skills
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    let business_experience = choice(prompt_choice(input, "Business experience:", &EXPERIENCE)?);
    let available_capital = choice(prompt_choice(input, "Capital available to invest:", &CAPITAL)?);
    let desired_income = choice(prompt_choice(input, "Income you want from the business:", &INCOME)?);
    let target_industry = Industry::from_label(prompt_choice(input, "Target industry:", &industry_choices())?);

    Ok(AssessmentData {
        name: if name.is_empty() { None } else { Some(name) },
        motivation,
        time_commitment,
        risk_tolerance,
        professional_background,
        transferable_skills,
        business_experience,
        available_capital,
        desired_income,
        target_industry,
    })
}

/// Serialize a record as YAML to `output`, or print it when no file is given
pub fn write_record<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    let yaml = serde_saphyr::to_string(value)
        .map_err(|e| anyhow::anyhow!("Failed to serialize answers: {}", e))?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {}", parent.display()))?;
            }
            std::fs::write(path, &yaml)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::debug!("wrote answers to {}", path.display());
        }
        None => print!("{}", yaml),
    }
    Ok(())
}

/// Interactive deal questionnaire on stdin
pub fn run_deal_intake(output: Option<&Path>) -> Result<DealInput> {
    let stdin = io::stdin();
    let deal = collect_deal(&mut stdin.lock())?;
    write_record(&deal, output)?;
    Ok(deal)
}

/// Interactive buyer assessment on stdin
pub fn run_assessment_intake(output: Option<&Path>) -> Result<AssessmentData> {
    let stdin = io::stdin();
    let data = collect_assessment(&mut stdin.lock())?;
    write_record(&data, output)?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{BusinessExperience, CapitalBand, IncomeBand, Motivation, TimeCommitment};
    use std::env;
    use std::io::Cursor;

    #[test]
    fn test_collect_deal() {
        let answers = [
            "Acme HVAC",  // name
            "Home Services",
            "12",         // years
            "1.2m",       // revenue
            "250k",       // ebitda
            "50k",        // owner salary
            "n",          // real estate
            "y",          // equipment
            "100k",       // assets
            "1,100,000",  // price
            "2",          // involvement
            "1",          // runs without owner: yes
            "2",          // second in command: somewhat
            "yes",        // records
            "1",          // sops: well documented
            "y",          // financing
            "110k",
            "",
            "880k",
            "",
            "110k",
        ]
        .join("\n")
            + "\n";
        let deal = collect_deal(&mut Cursor::new(answers)).unwrap();

        assert_eq!(deal.name.as_deref(), Some("Acme HVAC"));
        assert_eq!(deal.business.industry, Industry::HomeServices);
        assert_eq!(deal.business.annual_revenue, 1_200_000.0);
        assert_eq!(deal.business.owner_salary, 50_000.0);
        assert!(deal.business.has_equipment);
        assert!(!deal.business.has_real_estate);
        assert_eq!(deal.business.purchase_price, 1_100_000.0);
        assert_eq!(deal.involvement.owner_involvement, 2);
        assert_eq!(deal.involvement.runs_without_owner, Answer::Yes);
        assert_eq!(deal.involvement.has_second_in_command, Answer::Somewhat);
        assert_eq!(deal.involvement.financial_records, Answer::Yes);
        assert_eq!(deal.involvement.sops, SopStatus::WellDocumented);

        let financing = deal.financing.unwrap();
        assert_eq!(financing.sba_7a, 880_000.0);
        assert_eq!(financing.conventional_loan, 0.0);
        assert_eq!(financing.total(), 1_100_000.0);
    }

    #[test]
    fn test_collect_deal_without_financing() {
        let answers = ["", "Retail", "", "", "80k", "", "", "", "", "200k", "", "no", "no", "no", "3", "n"]
            .join("\n")
            + "\n";
        let deal = collect_deal(&mut Cursor::new(answers)).unwrap();
        assert!(deal.name.is_none());
        assert_eq!(deal.business.industry, Industry::Retail);
        assert_eq!(deal.involvement.owner_involvement, 3);
        assert!(deal.financing.is_none());
    }

    #[test]
    fn test_collect_assessment() {
        let answers = [
            "Sam",
            "3",
            "full-time",
            "2",
            "3",
            "leadership, negotiation, ,accounting",
            "2",
            "4",
            "3",
            "Healthcare",
        ]
        .join("\n")
            + "\n";
        let data = collect_assessment(&mut Cursor::new(answers)).unwrap();

        assert_eq!(data.name.as_deref(), Some("Sam"));
        assert_eq!(data.motivation, Motivation::WealthBuilding);
        assert_eq!(data.time_commitment, TimeCommitment::FullTime);
        assert_eq!(data.transferable_skills, vec!["leadership", "negotiation", "accounting"]);
        assert_eq!(data.business_experience, BusinessExperience::Owner);
        assert_eq!(data.available_capital, CapitalBand::From500kTo1m);
        assert_eq!(data.desired_income, IncomeBand::From150kTo250k);
        assert_eq!(data.target_industry, Industry::Healthcare);
    }

    #[test]
    fn test_truncated_input_is_error() {
        assert!(collect_assessment(&mut Cursor::new("Sam\n1\n")).is_err());
    }

    #[test]
    fn test_written_deal_loads_back() {
        let path = env::temp_dir().join("deal_scope_test_intake").join("deal.yaml");
        let deal = DealInput {
            name: Some("Corner Cafe".to_string()),
            business: BusinessSnapshot {
                industry: Industry::Restaurant,
                ebitda: 90_000.0,
                purchase_price: 200_000.0,
                ..Default::default()
            },
            ..Default::default()
        };

        write_record(&deal, Some(&path)).unwrap();
        let loaded = crate::deal::load_deal(&path).unwrap();
        assert_eq!(loaded, deal);

        let _ = std::fs::remove_file(&path);
    }
}
