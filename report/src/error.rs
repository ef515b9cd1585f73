//! Report I/O errors.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Errors that can occur while writing or reading run artifacts.
#[derive(Debug)]
pub enum ReportError {
    /// Filesystem operation failed.
    Io { path: PathBuf, source: io::Error },

    /// Summary JSON could not be produced or parsed.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Event CSV could not be written.
    Csv { path: PathBuf, source: csv::Error },
}

impl ReportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "i/o error on {}: {source}", path.display()),
            Self::Json { path, source } => {
                write!(f, "summary json error in {}: {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "events csv error in {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn error_display_io() {
        let err = ReportError::io(
            "out/run_1_steps",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("out/run_1_steps"), "should mention the path");
        assert!(msg.contains("denied"), "should include the cause");
        assert!(err.source().is_some());
    }

    #[test]
    fn error_display_json() {
        let source = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = ReportError::Json {
            path: PathBuf::from("run_summary.json"),
            source,
        };
        assert!(err.to_string().contains("run_summary.json"));
        assert!(err.source().is_some());
    }
}
