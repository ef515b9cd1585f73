//! Loading and resolving config files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use engine::SimulationConfig;
use serde::Deserialize;
use tracing::debug;

use crate::{ConfigError, ConfigFormat, ConfigResult};

/// Options read from a config file.
///
/// Every field is optional; see [`FileConfig::resolve`] for how gaps are filled.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FileConfig {
    pub steps: Option<u32>,
    pub step_delay_sec: Option<f64>,
    /// Keys the engine does not recognize, kept so callers can report them.
    #[serde(flatten)]
    pub unknown: BTreeMap<String, serde_json::Value>,
}

impl FileConfig {
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.unknown.keys().map(String::as_str)
    }

    /// Builds the engine config, preferring file values over the fallbacks.
    pub fn resolve(
        &self,
        fallback_steps: u32,
        fallback_delay_sec: f64,
    ) -> ConfigResult<SimulationConfig> {
        let steps = self.steps.unwrap_or(fallback_steps);
        let step_delay = step_delay_from_secs(self.step_delay_sec.unwrap_or(fallback_delay_sec))?;
        Ok(SimulationConfig::new(steps, step_delay))
    }
}

/// Converts a seconds value into a step delay.
///
/// Negative, NaN and out-of-range values are rejected.
pub fn step_delay_from_secs(secs: f64) -> ConfigResult<Duration> {
    Duration::try_from_secs_f64(secs).map_err(|err| ConfigError::InvalidValue {
        key: "step_delay_sec",
        reason: format!("{secs}: {err}"),
    })
}

/// Reads a JSON or YAML config file, choosing the parser by extension.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<FileConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let format = ConfigFormat::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), %format, "loading config");

    match format {
        ConfigFormat::Json => serde_json::from_str(&text).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            format,
            message: err.to_string(),
        }),
        ConfigFormat::Yaml => parse_yaml(path, &text),
    }
}

#[cfg(feature = "yaml")]
fn parse_yaml(path: &Path, text: &str) -> ConfigResult<FileConfig> {
    if text.trim().is_empty() {
        return Ok(FileConfig::default());
    }
    // A document that is only `null` (or `~`) means "no options".
    let parsed: Option<FileConfig> =
        serde_yaml::from_str(text).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            format: ConfigFormat::Yaml,
            message: err.to_string(),
        })?;
    Ok(parsed.unwrap_or_default())
}

#[cfg(not(feature = "yaml"))]
fn parse_yaml(_path: &Path, _text: &str) -> ConfigResult<FileConfig> {
    Err(ConfigError::MissingDependency {
        format: ConfigFormat::Yaml,
        feature: "yaml",
    })
}
