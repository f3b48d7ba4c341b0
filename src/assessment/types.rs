use serde::{Deserialize, Serialize};

use crate::deal::Industry;

/// Why the buyer wants to own a business
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Motivation {
    Entrepreneurship,
    CareerChange,
    WealthBuilding,
    Lifestyle,
    Exploring,
    #[default]
    #[serde(other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeCommitment {
    FullTime,
    PartTime,
    EveningsWeekends,
    Undecided,
    #[default]
    #[serde(other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskTolerance {
    High,
    Medium,
    Low,
    #[default]
    #[serde(other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfessionalBackground {
    Executive,
    Operations,
    Finance,
    SalesMarketing,
    Technical,
    Consulting,
    Other,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl ProfessionalBackground {
    /// Phrase used in the elevator pitch, `None` when there is nothing to say
    pub fn pitch_phrase(&self) -> Option<&'static str> {
        match self {
            ProfessionalBackground::Executive => Some("executive leadership"),
            ProfessionalBackground::Operations => Some("operations"),
            ProfessionalBackground::Finance => Some("finance"),
            ProfessionalBackground::SalesMarketing => Some("sales and marketing"),
            ProfessionalBackground::Technical => Some("technology"),
            ProfessionalBackground::Consulting => Some("consulting"),
            ProfessionalBackground::Other | ProfessionalBackground::Unspecified => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BusinessExperience {
    MultipleBusinesses,
    Owner,
    Manager,
    Employee,
    #[serde(rename = "none")]
    NoExperience,
    #[default]
    #[serde(other)]
    Unspecified,
}

/// Liquid capital the buyer can put toward a purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum CapitalBand {
    #[serde(rename = "under-100k")]
    Under100k,
    #[serde(rename = "100k-250k")]
    From100kTo250k,
    #[serde(rename = "250k-500k")]
    From250kTo500k,
    #[serde(rename = "500k-1m")]
    From500kTo1m,
    #[serde(rename = "over-1m")]
    Over1m,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl CapitalBand {
    /// Dollar bounds of the band. Open-ended bands get a nominal ceiling.
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            CapitalBand::Under100k | CapitalBand::Unspecified => (0.0, 100_000.0),
            CapitalBand::From100kTo250k => (100_000.0, 250_000.0),
            CapitalBand::From250kTo500k => (250_000.0, 500_000.0),
            CapitalBand::From500kTo1m => (500_000.0, 1_000_000.0),
            CapitalBand::Over1m => (1_000_000.0, 1_500_000.0),
        }
    }

    pub fn midpoint(&self) -> f64 {
        let (low, high) = self.bounds();
        (low + high) / 2.0
    }
}

/// Annual income the buyer wants to take home from the business
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum IncomeBand {
    #[serde(rename = "50k-100k")]
    From50kTo100k,
    #[serde(rename = "100k-150k")]
    From100kTo150k,
    #[serde(rename = "150k-250k")]
    From150kTo250k,
    #[serde(rename = "250k-500k")]
    From250kTo500k,
    #[serde(rename = "over-500k")]
    Over500k,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl IncomeBand {
    /// Dollar bounds of the band. Unspecified falls back to 100k-150k.
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            IncomeBand::From50kTo100k => (50_000.0, 100_000.0),
            IncomeBand::From100kTo150k | IncomeBand::Unspecified => (100_000.0, 150_000.0),
            IncomeBand::From150kTo250k => (150_000.0, 250_000.0),
            IncomeBand::From250kTo500k => (250_000.0, 500_000.0),
            IncomeBand::Over500k => (500_000.0, 750_000.0),
        }
    }

    pub fn midpoint(&self) -> f64 {
        let (low, high) = self.bounds();
        (low + high) / 2.0
    }
}

/// Buyer self-assessment answers.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AssessmentData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub motivation: Motivation,
    #[serde(default)]
    pub time_commitment: TimeCommitment,
    #[serde(default)]
    pub risk_tolerance: RiskTolerance,
    #[serde(default)]
    pub professional_background: ProfessionalBackground,
    #[serde(default)]
    pub transferable_skills: Vec<String>,
    #[serde(default)]
    pub business_experience: BusinessExperience,
    #[serde(default)]
    pub available_capital: CapitalBand,
    #[serde(default)]
    pub desired_income: IncomeBand,
    #[serde(default)]
    pub target_industry: Industry,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assessment_yaml_parse() {
        let yaml = r#"
motivation: wealth-building
time_commitment: full-time
risk_tolerance: medium
professional_background: finance
transferable_skills: [leadership, negotiation, accounting]
business_experience: owner
available_capital: 500k-1m
desired_income: 150k-250k
target_industry: Healthcare
"#;
        let data: AssessmentData = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(data.motivation, Motivation::WealthBuilding);
        assert_eq!(data.time_commitment, TimeCommitment::FullTime);
        assert_eq!(data.professional_background, ProfessionalBackground::Finance);
        assert_eq!(data.transferable_skills.len(), 3);
        assert_eq!(data.available_capital, CapitalBand::From500kTo1m);
        assert_eq!(data.desired_income, IncomeBand::From150kTo250k);
        assert_eq!(data.target_industry, Industry::Healthcare);
    }

    #[test]
    fn test_unknown_answers_fall_back() {
        let data: AssessmentData = serde_json::from_str(
            r#"{"motivation": "fame", "available_capital": "lots", "desired_income": "a million"}"#,
        )
        .unwrap();
        assert_eq!(data.motivation, Motivation::Unspecified);
        assert_eq!(data.available_capital, CapitalBand::Unspecified);
        assert_eq!(data.desired_income, IncomeBand::Unspecified);
    }

    #[test]
    fn test_empty_assessment() {
        let data: AssessmentData = serde_json::from_str("{}").unwrap();
        assert_eq!(data, AssessmentData::default());
    }

    #[test]
    fn test_band_midpoints() {
        assert_eq!(IncomeBand::From100kTo150k.midpoint(), 125_000.0);
        assert_eq!(IncomeBand::Over500k.midpoint(), 625_000.0);
        assert_eq!(CapitalBand::From250kTo500k.midpoint(), 375_000.0);
        assert_eq!(CapitalBand::Unspecified.midpoint(), 50_000.0);
    }
}
