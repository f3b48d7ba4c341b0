use super::types::{ReportLog, SavedReport, REPORT_LOG_VERSION};
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Get the default report log path (~/.config/deal-scope/reports.json)
pub fn get_reports_path() -> PathBuf {
    crate::config::get_config_dir().join("reports.json")
}

/// Report log path for this config, honoring `reports_path`
pub fn reports_path_for(config: &Config) -> PathBuf {
    config.reports_path.clone().unwrap_or_else(get_reports_path)
}

/// Load the report log from a JSON file
///
/// If the file doesn't exist, returns a new empty log.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_report_log(path: &Path) -> Result<ReportLog> {
    if !path.exists() {
        return Ok(ReportLog::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open report log at {}", path.display()))?;

    let log: ReportLog = serde_json::from_reader(file).context("Failed to load report log")?;

    if log.version != REPORT_LOG_VERSION {
        anyhow::bail!("Unsupported report log version: {}", log.version);
    }

    Ok(log)
}

/// Save the report log to a JSON file atomically
///
/// Uses atomic-write-file so the log is never left half written.
/// Creates the parent directory if it doesn't exist.
pub fn save_report_log(path: &Path, log: &ReportLog) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, log).context("Failed to serialize report log")?;

    file.commit().context("Failed to save report log")?;

    Ok(())
}

/// Append one report to the log on disk
pub fn append_report(path: &Path, report: SavedReport) -> Result<()> {
    let mut log = load_report_log(path)?;
    log.push(report);
    save_report_log(path, &log)
}

/// Append a report, logging instead of failing when storage is unavailable.
///
/// Saving is a side effect of scoring; the caller's result stands either way.
/// Returns whether the report was stored.
pub fn save_or_warn(path: &Path, report: Result<SavedReport>) -> bool {
    let outcome = report.and_then(|report| append_report(path, report));
    match outcome {
        Ok(()) => {
            log::debug!("Saved report to {}", path.display());
            true
        }
        Err(e) => {
            log::warn!("Could not save report to {}: {:#}", path.display(), e);
            false
        }
    }
}
