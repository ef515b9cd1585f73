//! Run configuration files for simloop.
//!
//! A config file is JSON (`.json`) or YAML (`.yaml`/`.yml`, behind the
//! default `yaml` feature) and may set:
//!
//! - `steps` - number of loop iterations
//! - `step_delay_sec` - pause after each step, in seconds
//!
//! Both keys are optional; values given on the command line fill the gaps.
//! Any other key is kept in [`FileConfig::unknown_keys`] and otherwise ignored.

mod error;
mod file;
mod format;

pub use error::{ConfigError, ConfigResult};
pub use file::{load_config, step_delay_from_secs, FileConfig};
pub use format::ConfigFormat;
