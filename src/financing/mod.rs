pub mod amortization;

pub use amortization::{
    debt_service, DebtService, FinancingTerms, LoanTerms, TrancheKind, TranchePayment, MAX_TERM_YEARS,
};
