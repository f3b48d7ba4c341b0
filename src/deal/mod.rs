mod types;
pub mod validation;

pub use types::{
    Answer, BusinessSnapshot, DealInput, FinancingStructure, Industry, OwnerInvolvementProfile,
    SopStatus,
};
pub use validation::validate_deal_input;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read a YAML or JSON record from disk. Files ending in `.json` are parsed
/// as JSON, everything else as YAML.
pub fn read_record<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}: invalid JSON", path.display()))
    } else {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse {}: invalid YAML", path.display()))
    }
}

/// Load a deal file from disk
pub fn load_deal(path: &Path) -> Result<DealInput> {
    read_record(path)
}
