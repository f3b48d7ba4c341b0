use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Comparison used to match a value against a tier.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeOp {
    LessThan(f64),
    LessEqual(f64),
    GreaterThan(f64),
    GreaterEqual(f64),
    Between(f64, f64), // Inclusive range: N-M
}

impl RangeOp {
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(val) = s.strip_prefix(">=") {
            Ok(RangeOp::GreaterEqual(parse_bound(val)?))
        } else if let Some(val) = s.strip_prefix("<=") {
            Ok(RangeOp::LessEqual(parse_bound(val)?))
        } else if let Some(val) = s.strip_prefix('>') {
            Ok(RangeOp::GreaterThan(parse_bound(val)?))
        } else if let Some(val) = s.strip_prefix('<') {
            Ok(RangeOp::LessThan(parse_bound(val)?))
        } else if let Some((low, high)) = s.split_once('-') {
            let low = parse_bound(low)?;
            let high = parse_bound(high)?;
            if low > high {
                bail!("Range lower bound exceeds upper bound: {}", s)
            }
            Ok(RangeOp::Between(low, high))
        } else {
            bail!("Range must start with <, <=, >, >= or be N-M: {}", s)
        }
    }

    pub fn matches(&self, value: f64) -> bool {
        match self {
            RangeOp::LessThan(n) => value < *n,
            RangeOp::LessEqual(n) => value <= *n,
            RangeOp::GreaterThan(n) => value > *n,
            RangeOp::GreaterEqual(n) => value >= *n,
            RangeOp::Between(low, high) => value >= *low && value <= *high,
        }
    }
}

fn parse_bound(s: &str) -> Result<f64> {
    let value: f64 = s.trim().parse()?;
    if !value.is_finite() {
        bail!("Range bound must be finite: {}", s.trim())
    }
    Ok(value)
}

/// A score tier: values matching `range` earn `score`.
///
/// Range format: "<N", "<=N", ">N", ">=N", "N-M" (inclusive range)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScoreTier {
    pub range: String,
    pub score: u32,
}

impl ScoreTier {
    pub fn new(range: &str, score: u32) -> Self {
        Self {
            range: range.to_string(),
            score,
        }
    }
}

/// Score of the first tier whose range matches `value`. Tiers that fail to
/// parse are skipped; `None` if nothing matches.
pub fn score_for(value: f64, tiers: &[ScoreTier]) -> Option<&ScoreTier> {
    tiers.iter().find(|tier| {
        RangeOp::parse(&tier.range)
            .map(|range| range.matches(value))
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range_less_than() {
        let range = RangeOp::parse("<1.25").unwrap();
        assert!(range.matches(1.0));
        assert!(!range.matches(1.25));
        assert!(!range.matches(2.0));
    }

    #[test]
    fn test_parse_range_less_equal() {
        let range = RangeOp::parse("<=1.25").unwrap();
        assert!(range.matches(1.25));
        assert!(!range.matches(1.26));
    }

    #[test]
    fn test_parse_range_greater_than() {
        let range = RangeOp::parse(">1.5").unwrap();
        assert!(!range.matches(1.5));
        assert!(range.matches(1.51));
    }

    #[test]
    fn test_parse_range_greater_equal() {
        let range = RangeOp::parse(">= 1.5").unwrap();
        assert!(range.matches(1.5));
        assert!(!range.matches(1.49));
    }

    #[test]
    fn test_parse_range_between() {
        let range = RangeOp::parse("1.0-1.25").unwrap();
        assert!(!range.matches(0.99));
        assert!(range.matches(1.0));
        assert!(range.matches(1.25));
        assert!(!range.matches(1.26));
    }

    #[test]
    fn test_parse_range_inverted_between() {
        assert!(RangeOp::parse("2-1").is_err());
    }

    #[test]
    fn test_parse_range_invalid() {
        assert!(RangeOp::parse("1.5").is_err());
        assert!(RangeOp::parse("<abc").is_err());
        assert!(RangeOp::parse("").is_err());
    }

    #[test]
    fn test_score_for_first_match_wins() {
        let tiers = vec![ScoreTier::new("<1.0", 0), ScoreTier::new("<2.0", 50)];
        assert_eq!(score_for(0.5, &tiers).unwrap().score, 0);
        assert_eq!(score_for(1.5, &tiers).unwrap().score, 50);
        assert!(score_for(3.0, &tiers).is_none());
    }

    #[test]
    fn test_score_for_skips_invalid_tier() {
        let tiers = vec![ScoreTier::new("bogus", 99), ScoreTier::new(">=0", 10)];
        assert_eq!(score_for(1.0, &tiers).unwrap().score, 10);
    }
}
