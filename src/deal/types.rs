use serde::{Deserialize, Serialize};
use std::fmt;

/// Industry category of the business being acquired.
///
/// Unrecognized names deserialize to `Other`, which uses the default
/// multiple range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Deserialize, Serialize)]
pub enum Industry {
    Technology,
    Healthcare,
    Manufacturing,
    #[serde(rename = "E-commerce")]
    Ecommerce,
    #[serde(rename = "Professional Services")]
    ProfessionalServices,
    Distribution,
    #[serde(rename = "Home Services")]
    HomeServices,
    Transportation,
    Construction,
    Retail,
    Restaurant,
    #[default]
    #[serde(other)]
    Other,
}

impl Industry {
    pub const ALL: [Industry; 12] = [
        Industry::Technology,
        Industry::Healthcare,
        Industry::Manufacturing,
        Industry::Ecommerce,
        Industry::ProfessionalServices,
        Industry::Distribution,
        Industry::HomeServices,
        Industry::Transportation,
        Industry::Construction,
        Industry::Retail,
        Industry::Restaurant,
        Industry::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Industry::Technology => "Technology",
            Industry::Healthcare => "Healthcare",
            Industry::Manufacturing => "Manufacturing",
            Industry::Ecommerce => "E-commerce",
            Industry::ProfessionalServices => "Professional Services",
            Industry::Distribution => "Distribution",
            Industry::HomeServices => "Home Services",
            Industry::Transportation => "Transportation",
            Industry::Construction => "Construction",
            Industry::Retail => "Retail",
            Industry::Restaurant => "Restaurant",
            Industry::Other => "Other",
        }
    }

    /// Case-insensitive lookup by label. Anything unrecognized maps to `Other`.
    pub fn from_label(s: &str) -> Industry {
        let s = s.trim();
        Industry::ALL
            .iter()
            .copied()
            .find(|i| i.label().eq_ignore_ascii_case(s))
            .unwrap_or(Industry::Other)
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Three-way answer used by the owner involvement questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Answer {
    Yes,
    Somewhat,
    #[default]
    No,
}

impl Answer {
    pub fn parse(s: &str) -> Option<Answer> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" => Some(Answer::Yes),
            "somewhat" | "s" => Some(Answer::Somewhat),
            "no" | "n" => Some(Answer::No),
            _ => None,
        }
    }
}

/// How well the business documents its standard operating procedures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SopStatus {
    WellDocumented,
    SomewhatDocumented,
    #[default]
    NotDocumented,
}

impl SopStatus {
    pub fn parse(s: &str) -> Option<SopStatus> {
        match s.trim().to_ascii_lowercase().as_str() {
            "well-documented" | "well" => Some(SopStatus::WellDocumented),
            "somewhat-documented" | "somewhat" => Some(SopStatus::SomewhatDocumented),
            "not-documented" | "none" | "not" => Some(SopStatus::NotDocumented),
            _ => None,
        }
    }
}

/// Financial snapshot of the target business.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BusinessSnapshot {
    #[serde(default)]
    pub industry: Industry,
    #[serde(default)]
    pub years_in_business: f64,
    #[serde(default)]
    pub annual_revenue: f64,
    #[serde(default)]
    pub ebitda: f64,
    #[serde(default)]
    pub owner_salary: f64,
    #[serde(default)]
    pub has_real_estate: bool,
    #[serde(default)]
    pub has_equipment: bool,
    /// Value of hard assets (real estate, equipment) included in the sale
    #[serde(default)]
    pub asset_value: f64,
    #[serde(default)]
    pub purchase_price: f64,
}

fn default_involvement() -> u8 {
    3
}

/// How much the business depends on its current owner.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OwnerInvolvementProfile {
    /// 1 (barely involved) to 5 (does everything)
    #[serde(default = "default_involvement")]
    pub owner_involvement: u8,
    #[serde(default)]
    pub runs_without_owner: Answer,
    #[serde(default)]
    pub has_second_in_command: Answer,
    #[serde(default)]
    pub financial_records: Answer,
    #[serde(default)]
    pub sops: SopStatus,
}

impl Default for OwnerInvolvementProfile {
    fn default() -> Self {
        Self {
            owner_involvement: default_involvement(),
            runs_without_owner: Answer::No,
            has_second_in_command: Answer::No,
            financial_records: Answer::No,
            sops: SopStatus::NotDocumented,
        }
    }
}

/// Capital stack used to fund the purchase.
///
/// `down_payment` is buyer equity; the other fields are loan principals.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FinancingStructure {
    #[serde(default)]
    pub down_payment: f64,
    #[serde(default)]
    pub conventional_loan: f64,
    #[serde(default)]
    pub sba_7a: f64,
    #[serde(default)]
    pub sba_504: f64,
    #[serde(default)]
    pub seller_note: f64,
}

impl FinancingStructure {
    /// Total funding including equity
    pub fn total(&self) -> f64 {
        self.down_payment + self.conventional_loan + self.sba_7a + self.sba_504 + self.seller_note
    }
}

/// A complete deal file: the business, its owner profile and optional financing.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DealInput {
    /// Optional display name for the deal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub business: BusinessSnapshot,
    #[serde(default)]
    pub involvement: OwnerInvolvementProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financing: Option<FinancingStructure>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_industry_from_label_case_insensitive() {
        assert_eq!(Industry::from_label("technology"), Industry::Technology);
        assert_eq!(Industry::from_label("  Home Services "), Industry::HomeServices);
        assert_eq!(Industry::from_label("e-commerce"), Industry::Ecommerce);
    }

    #[test]
    fn test_industry_from_label_unknown() {
        assert_eq!(Industry::from_label("Underwater Basket Weaving"), Industry::Other);
    }

    #[test]
    fn test_unknown_industry_deserializes_to_other() {
        let snapshot: BusinessSnapshot =
            serde_json::from_str(r#"{"industry": "Space Mining", "ebitda": 100000}"#).unwrap();
        assert_eq!(snapshot.industry, Industry::Other);
        assert_eq!(snapshot.ebitda, 100000.0);
    }

    #[test]
    fn test_renamed_industry_deserializes() {
        let snapshot: BusinessSnapshot =
            serde_json::from_str(r#"{"industry": "Professional Services"}"#).unwrap();
        assert_eq!(snapshot.industry, Industry::ProfessionalServices);
    }

    #[test]
    fn test_deal_input_yaml_defaults() {
        let yaml = r#"
business:
  industry: Retail
  ebitda: 150000
  purchase_price: 400000
"#;
        let input: DealInput = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(input.business.industry, Industry::Retail);
        assert_eq!(input.business.owner_salary, 0.0);
        assert_eq!(input.involvement.owner_involvement, 3);
        assert_eq!(input.involvement.sops, SopStatus::NotDocumented);
        assert!(input.financing.is_none());
    }

    #[test]
    fn test_deal_input_full_yaml() {
        let yaml = r#"
name: Main Street HVAC
business:
  industry: Home Services
  years_in_business: 12
  annual_revenue: 2400000
  ebitda: 380000
  owner_salary: 120000
  has_equipment: true
  asset_value: 150000
  purchase_price: 1700000
involvement:
  owner_involvement: 2
  runs_without_owner: somewhat
  has_second_in_command: "yes"
  financial_records: "yes"
  sops: well-documented
financing:
  down_payment: 170000
  sba_7a: 1360000
  seller_note: 170000
"#;
        let input: DealInput = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(input.name.as_deref(), Some("Main Street HVAC"));
        assert_eq!(input.involvement.runs_without_owner, Answer::Somewhat);
        assert_eq!(input.involvement.sops, SopStatus::WellDocumented);
        let financing = input.financing.unwrap();
        assert_eq!(financing.total(), 1_700_000.0);
        assert_eq!(financing.conventional_loan, 0.0);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = r#"
business:
  ebitda: 1
  favourite_colour: blue
"#;
        let result: Result<DealInput, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_answer_parse() {
        assert_eq!(Answer::parse("YES"), Some(Answer::Yes));
        assert_eq!(Answer::parse("s"), Some(Answer::Somewhat));
        assert_eq!(Answer::parse("maybe"), None);
    }

    #[test]
    fn test_sop_status_parse() {
        assert_eq!(SopStatus::parse("well-documented"), Some(SopStatus::WellDocumented));
        assert_eq!(SopStatus::parse("none"), Some(SopStatus::NotDocumented));
        assert_eq!(SopStatus::parse("kind of"), None);
    }
}
