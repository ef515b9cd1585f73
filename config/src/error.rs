//! Config loading errors.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::ConfigFormat;

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading or resolving a config file.
#[derive(Debug)]
pub enum ConfigError {
    /// The config path does not exist.
    NotFound { path: PathBuf },

    /// The format is recognized but its parser was compiled out.
    MissingDependency {
        format: ConfigFormat,
        /// Cargo feature that enables the parser.
        feature: &'static str,
    },

    /// The file extension does not map to a supported format.
    UnsupportedFormat {
        path: PathBuf,
        extension: Option<String>,
    },

    /// Reading the file failed.
    Io { path: PathBuf, source: io::Error },

    /// The file contents are not valid for the format.
    Parse {
        path: PathBuf,
        format: ConfigFormat,
        message: String,
    },

    /// A recognized key holds a value the engine cannot use.
    InvalidValue { key: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => write!(f, "config file not found: {}", path.display()),
            Self::MissingDependency { format, feature } => write!(
                f,
                "{format} support not available; rebuild with the `{feature}` feature to use {format} configs"
            ),
            Self::UnsupportedFormat { path, extension } => match extension {
                Some(ext) => write!(
                    f,
                    "unsupported config format `.{ext}` for {}",
                    path.display()
                ),
                None => write!(
                    f,
                    "unsupported config format (no extension) for {}",
                    path.display()
                ),
            },
            Self::Io { path, source } => write!(f, "failed to read {}: {source}", path.display()),
            Self::Parse {
                path,
                format,
                message,
            } => write!(f, "invalid {format} in {}: {message}", path.display()),
            Self::InvalidValue { key, reason } => write!(f, "invalid value for `{key}`: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
