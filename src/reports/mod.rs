pub mod storage;
pub mod types;

pub use storage::{append_report, load_report_log, reports_path_for, save_or_warn, save_report_log};
pub use types::{ReportKind, ReportLog, SavedReport};
