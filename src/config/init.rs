use anyhow::{Context, Result};
use std::path::Path;

use crate::config::Config;
use crate::intake::prompt::prompt_yes_no;
use crate::scoring::ScoringConfig;

/// Write a config file populated with the built-in scoring tables.
///
/// Asks before overwriting an existing file unless `force` is set.
/// Returns `false` if the user declined.
pub fn write_default_config(path: &Path, force: bool) -> Result<bool> {
    if path.exists() && !force {
        let overwrite = prompt_yes_no(
            &format!("Config already exists at {}. Overwrite?", path.display()),
            false,
        )?;
        if !overwrite {
            return Ok(false);
        }
    }

    let config = Config {
        save_reports: false,
        reports_path: None,
        scoring: Some(ScoringConfig::default()),
    };

    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(path, &yaml)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(true)
}
