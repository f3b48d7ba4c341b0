use serde::{Deserialize, Serialize};
use std::fmt;

use crate::deal::FinancingStructure;

/// Loan tranche kinds that carry debt service. Buyer equity is not a tranche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrancheKind {
    Conventional,
    #[serde(rename = "sba_7a")]
    Sba7a,
    #[serde(rename = "sba_504")]
    Sba504,
    SellerNote,
}

impl TrancheKind {
    pub const ALL: [TrancheKind; 4] = [
        TrancheKind::Conventional,
        TrancheKind::Sba7a,
        TrancheKind::Sba504,
        TrancheKind::SellerNote,
    ];

    /// Principal borrowed under this tranche
    pub fn principal(&self, financing: &FinancingStructure) -> f64 {
        match self {
            TrancheKind::Conventional => financing.conventional_loan,
            TrancheKind::Sba7a => financing.sba_7a,
            TrancheKind::Sba504 => financing.sba_504,
            TrancheKind::SellerNote => financing.seller_note,
        }
    }
}

impl fmt::Display for TrancheKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TrancheKind::Conventional => "Conventional loan",
            TrancheKind::Sba7a => "SBA 7(a)",
            TrancheKind::Sba504 => "SBA 504",
            TrancheKind::SellerNote => "Seller note",
        };
        f.write_str(label)
    }
}

/// Longest amortization term a config may ask for
pub const MAX_TERM_YEARS: u32 = 50;

/// Fixed annual rate and amortization term for a tranche.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoanTerms {
    /// Annual interest rate as a fraction (0.10 = 10%)
    pub rate: f64,
    /// Amortization term in years
    pub years: u32,
}

impl LoanTerms {
    pub const fn new(rate: f64, years: u32) -> Self {
        Self { rate, years }
    }

    /// Standard amortized monthly payment for `principal` under these terms.
    ///
    /// A zero rate degrades to straight-line repayment. Zero principal or a
    /// zero-length term yields no payment.
    pub fn monthly_payment(&self, principal: f64) -> f64 {
        let months = f64::from(self.years.saturating_mul(12));
        if principal <= 0.0 || months == 0.0 {
            return 0.0;
        }

        let r = self.rate / 12.0;
        if r == 0.0 {
            return principal / months;
        }

        let growth = (1.0 + r).powf(months);
        if !growth.is_finite() {
            return principal * r;
        }
        principal * r * growth / (growth - 1.0)
    }
}

/// Rate/term pairs for every tranche kind.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FinancingTerms {
    #[serde(default = "FinancingTerms::default_conventional")]
    pub conventional: LoanTerms,
    #[serde(default = "FinancingTerms::default_sba_7a")]
    pub sba_7a: LoanTerms,
    #[serde(default = "FinancingTerms::default_sba_504")]
    pub sba_504: LoanTerms,
    #[serde(default = "FinancingTerms::default_seller_note")]
    pub seller_note: LoanTerms,
}

impl FinancingTerms {
    fn default_conventional() -> LoanTerms {
        LoanTerms::new(0.10, 10)
    }

    fn default_sba_7a() -> LoanTerms {
        LoanTerms::new(0.10, 10)
    }

    fn default_sba_504() -> LoanTerms {
        LoanTerms::new(0.06, 20)
    }

    fn default_seller_note() -> LoanTerms {
        LoanTerms::new(0.06, 7)
    }

    pub fn terms_for(&self, kind: TrancheKind) -> &LoanTerms {
        match kind {
            TrancheKind::Conventional => &self.conventional,
            TrancheKind::Sba7a => &self.sba_7a,
            TrancheKind::Sba504 => &self.sba_504,
            TrancheKind::SellerNote => &self.seller_note,
        }
    }
}

impl Default for FinancingTerms {
    fn default() -> Self {
        Self {
            conventional: Self::default_conventional(),
            sba_7a: Self::default_sba_7a(),
            sba_504: Self::default_sba_504(),
            seller_note: Self::default_seller_note(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranchePayment {
    pub kind: TrancheKind,
    pub principal: f64,
    pub monthly_payment: f64,
}

/// Monthly debt service across all funded tranches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebtService {
    pub tranches: Vec<TranchePayment>,
    pub monthly_total: f64,
}

impl DebtService {
    pub fn annual_total(&self) -> f64 {
        self.monthly_total * 12.0
    }
}

/// Compute debt service for every tranche with a positive principal.
/// Returns `None` when nothing is borrowed.
pub fn debt_service(financing: &FinancingStructure, terms: &FinancingTerms) -> Option<DebtService> {
    let tranches: Vec<TranchePayment> = TrancheKind::ALL
        .iter()
        .filter_map(|&kind| {
            let principal = kind.principal(financing);
            if principal > 0.0 {
                Some(TranchePayment {
                    kind,
                    principal,
                    monthly_payment: terms.terms_for(kind).monthly_payment(principal),
                })
            } else {
                None
            }
        })
        .collect();

    if tranches.is_empty() {
        return None;
    }

    let monthly_total = tranches.iter().map(|t| t.monthly_payment).sum();
    Some(DebtService {
        tranches,
        monthly_total,
    })
}
