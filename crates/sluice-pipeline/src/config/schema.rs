use serde::Deserialize;
use sluice_core::error::{Result, SluiceError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    pub version: u32,

    #[serde(default)]
    pub condition: ConditionConfig,
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SluiceError::UnsupportedVersion);
        }
        Ok(())
    }
}

/// Condition section: a `type` discriminator plus per-type fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConditionConfig {
    #[serde(rename = "type", default = "default_condition_type")]
    pub kind: String,

    #[serde(default)]
    pub bounds_check: BoundsCheckConfig,
}

impl Default for ConditionConfig {
    fn default() -> Self {
        Self {
            kind: default_condition_type(),
            bounds_check: BoundsCheckConfig::default(),
        }
    }
}

fn default_condition_type() -> String {
    "bounds_check".into()
}

/// Inclusive limits applied by the bounds check condition.
///
/// `min_parts <= max_parts` and `min_part_size <= max_part_size` are
/// expected to hold by construction; an inverted range is not an
/// error, it just yields a condition that rejects every message on
/// that axis.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoundsCheckConfig {
    #[serde(default = "default_max_parts")]
    pub max_parts: usize,

    #[serde(default = "default_min_parts")]
    pub min_parts: usize,

    #[serde(default = "default_max_part_size")]
    pub max_part_size: usize,

    #[serde(default = "default_min_part_size")]
    pub min_part_size: usize,
}

impl Default for BoundsCheckConfig {
    fn default() -> Self {
        Self {
            max_parts: default_max_parts(),
            min_parts: default_min_parts(),
            max_part_size: default_max_part_size(),
            min_part_size: default_min_part_size(),
        }
    }
}

fn default_max_parts() -> usize {
    100
}
fn default_min_parts() -> usize {
    1
}
fn default_max_part_size() -> usize {
    1024 * 1024 * 1024 // 1 GiB
}
fn default_min_part_size() -> usize {
    1
}
