use serde::Serialize;

use super::types::{
    AssessmentData, BusinessExperience, CapitalBand, Motivation, ProfessionalBackground,
    RiskTolerance, TimeCommitment,
};

const POINTS_PER_SKILL: u32 = 2;
const MAX_SKILL_POINTS: u32 = 10;

/// Readiness bands, highest first. A score lands in the first band whose
/// minimum it meets.
const LEVELS: [(u32, &str, &str); 5] = [
    (
        85,
        "Ready to Buy",
        "You have the capital, experience and commitment to start making offers. Line up financing and begin evaluating deals now.",
    ),
    (
        70,
        "Almost Ready",
        "You are close. Close the remaining gaps in capital or experience while you build your deal flow.",
    ),
    (
        55,
        "Developing Interest",
        "You have a solid foundation. Spend the next few months sharpening your criteria, talking to lenders and studying live listings.",
    ),
    (
        40,
        "Early Exploration",
        "You are early in the journey. Focus on learning how acquisitions work and what kind of business fits your life.",
    ),
    (
        0,
        "Not Ready Yet",
        "Buying a business is not the right move today. Build savings, operating experience and a clear reason for owning before revisiting.",
    ),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadinessComponent {
    pub label: &'static str,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadinessResult {
    pub score: u32,
    pub level: String,
    pub description: String,
    pub components: Vec<ReadinessComponent>,
}

/// Sum the weighted answers and map the total onto a readiness level.
pub fn calculate_readiness_score(data: &AssessmentData) -> ReadinessResult {
    let components = vec![
        ReadinessComponent {
            label: "Motivation",
            points: motivation_points(data.motivation),
        },
        ReadinessComponent {
            label: "Time commitment",
            points: time_points(data.time_commitment),
        },
        ReadinessComponent {
            label: "Risk tolerance",
            points: risk_points(data.risk_tolerance),
        },
        ReadinessComponent {
            label: "Professional background",
            points: background_points(data.professional_background),
        },
        ReadinessComponent {
            label: "Transferable skills",
            points: skill_points(&data.transferable_skills),
        },
        ReadinessComponent {
            label: "Business experience",
            points: experience_points(data.business_experience),
        },
        ReadinessComponent {
            label: "Available capital",
            points: capital_points(data.available_capital),
        },
    ];

    let score: u32 = components.iter().map(|c| c.points).sum();
    let (level, description) = readiness_level(score);
    log::debug!("readiness score {} -> {}", score, level);

    ReadinessResult {
        score,
        level: level.to_string(),
        description: description.to_string(),
        components,
    }
}

/// Level name and description for a readiness score
pub fn readiness_level(score: u32) -> (&'static str, &'static str) {
    LEVELS
        .iter()
        .find(|(min, _, _)| score >= *min)
        .map(|(_, level, description)| (*level, *description))
        .unwrap_or((LEVELS[4].1, LEVELS[4].2))
}

fn motivation_points(motivation: Motivation) -> u32 {
    match motivation {
        Motivation::Entrepreneurship => 15,
        Motivation::CareerChange => 12,
        Motivation::WealthBuilding => 10,
        Motivation::Lifestyle => 8,
        Motivation::Exploring | Motivation::Unspecified => 5,
    }
}

fn time_points(time: TimeCommitment) -> u32 {
    match time {
        TimeCommitment::FullTime => 10,
        TimeCommitment::PartTime => 6,
        TimeCommitment::EveningsWeekends => 3,
        TimeCommitment::Undecided | TimeCommitment::Unspecified => 0,
    }
}

fn risk_points(risk: RiskTolerance) -> u32 {
    match risk {
        RiskTolerance::High => 15,
        RiskTolerance::Medium => 10,
        RiskTolerance::Low | RiskTolerance::Unspecified => 5,
    }
}

fn background_points(background: ProfessionalBackground) -> u32 {
    match background {
        ProfessionalBackground::Executive => 15,
        ProfessionalBackground::Operations => 12,
        ProfessionalBackground::Finance | ProfessionalBackground::SalesMarketing => 10,
        ProfessionalBackground::Technical | ProfessionalBackground::Consulting => 8,
        ProfessionalBackground::Other | ProfessionalBackground::Unspecified => 5,
    }
}

fn skill_points(skills: &[String]) -> u32 {
    let count = skills.iter().filter(|s| !s.trim().is_empty()).count() as u32;
    (count * POINTS_PER_SKILL).min(MAX_SKILL_POINTS)
}

fn experience_points(experience: BusinessExperience) -> u32 {
    match experience {
        BusinessExperience::MultipleBusinesses => 15,
        BusinessExperience::Owner => 10,
        BusinessExperience::Manager => 8,
        BusinessExperience::Employee => 4,
        BusinessExperience::NoExperience | BusinessExperience::Unspecified => 0,
    }
}

fn capital_points(capital: CapitalBand) -> u32 {
    match capital {
        CapitalBand::Over1m => 15,
        CapitalBand::From500kTo1m => 10,
        CapitalBand::From250kTo500k => 8,
        CapitalBand::From100kTo250k => 5,
        CapitalBand::Under100k | CapitalBand::Unspecified => 2,
    }
}
