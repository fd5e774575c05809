//! Pipeline config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use sluice_core::error::{Result, SluiceError};

pub use schema::{BoundsCheckConfig, ConditionConfig, PipelineConfig};

/// Load a config file; `.json` files parse as JSON, anything else as YAML.
pub fn load_from_file(path: &str) -> Result<PipelineConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| SluiceError::Internal(format!("read config failed: {e}")))?;
    if Path::new(path).extension().is_some_and(|ext| ext == "json") {
        load_from_json_str(&s)
    } else {
        load_from_str(&s)
    }
}

pub fn load_from_str(s: &str) -> Result<PipelineConfig> {
    let cfg: PipelineConfig = serde_yaml::from_str(s)
        .map_err(|e| SluiceError::InvalidConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_from_json_str(s: &str) -> Result<PipelineConfig> {
    let cfg: PipelineConfig = serde_json::from_str(s)
        .map_err(|e| SluiceError::InvalidConfig(format!("invalid json: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
