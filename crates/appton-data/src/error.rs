//! Error types for data loading.

use std::fmt;
use std::path::PathBuf;

/// Error loading or parsing the static data files.
#[derive(Debug)]
pub enum DataError {
    /// JSON parsing error
    Json {
        /// File the error came from, when known
        file: Option<PathBuf>,
        /// Underlying parser error
        source: serde_json::Error,
    },
    /// I/O error reading a data file
    Io {
        /// File that failed to read
        file: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl DataError {
    /// Attach a file path to a JSON error.
    #[must_use]
    pub fn json_in(file: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            file: Some(file.into()),
            source,
        }
    }

    /// Wrap an I/O error with the file it came from.
    #[must_use]
    pub fn io(file: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            file: file.into(),
            source,
        }
    }
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { file: Some(p), source } => {
                write!(f, "invalid JSON in {}: {source}", p.display())
            }
            Self::Json { file: None, source } => write!(f, "invalid JSON: {source}"),
            Self::Io { file, source } => {
                write!(f, "failed to read {}: {source}", file.display())
            }
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for DataError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json { file: None, source }
    }
}
