//! Reporter configuration stored in `reporter.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::types::OverflowPolicy;
use crate::io::render::OutputFormat;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "reporter.toml";

/// Reporter configuration (TOML).
///
/// Missing fields default to wrapping arithmetic and text output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReporterConfig {
    pub overflow: OverflowPolicy,

    pub format: OutputFormat,

    /// Reject stdin operand input larger than this many bytes.
    pub input_limit_bytes: usize,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            overflow: OverflowPolicy::default(),
            format: OutputFormat::default(),
            input_limit_bytes: 4096,
        }
    }
}

impl ReporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.input_limit_bytes == 0 {
            return Err(anyhow!("input_limit_bytes must be > 0"));
        }
        Ok(())
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub checked: bool,
    pub format: Option<OutputFormat>,
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ReporterConfig::default()`.
pub fn load_config(path: &Path) -> Result<ReporterConfig> {
    if !path.exists() {
        let cfg = ReporterConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ReporterConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Apply command-line overrides to a loaded config.
pub fn apply_overrides(
    mut base: ReporterConfig,
    overrides: &CliOverrides,
) -> Result<ReporterConfig> {
    if overrides.checked {
        base.overflow = OverflowPolicy::Checked;
    }
    if let Some(format) = overrides.format {
        base.format = format;
    }
    base.validate()?;
    Ok(base)
}
