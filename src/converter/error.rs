use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ConvertError {
    Io(io::Error),
    File {
        path: PathBuf,
        source: io::Error,
    },
    Parse(serde_json::Error),
    MissingField {
        index: usize,
        field: String,
    },
    Format {
        index: usize,
        field: String,
        found: String,
    },
    DuplicateKey {
        index: usize,
        key: String,
        first_index: usize,
    },
    Verify {
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Io(err) => write!(f, "I/O error: {}", err),
            ConvertError::File { path, source } => {
                write!(f, "I/O error on '{}': {}", path.display(), source)
            }
            ConvertError::Parse(err) => write!(f, "JSON parse error: {}", err),
            ConvertError::MissingField { index, field } => {
                write!(f, "record {}: missing field '{}'", index, field)
            }
            ConvertError::Format {
                index,
                field,
                found,
            } => write!(
                f,
                "record {}: field '{}' must be a string of at least 2 characters, found {}",
                index, field, found
            ),
            ConvertError::DuplicateKey {
                index,
                key,
                first_index,
            } => write!(
                f,
                "record {}: key '{}' already produced by record {}",
                index, key, first_index
            ),
            ConvertError::Verify { expected, found } => write!(
                f,
                "output verification failed: expected {} entries, found {}",
                expected, found
            ),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Io(err) => Some(err),
            ConvertError::File { source, .. } => Some(source),
            ConvertError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl ConvertError {
    /// Attaches the file being read or written to a bare I/O error.
    pub fn at_path(self, path: &Path) -> Self {
        match self {
            ConvertError::Io(source) => ConvertError::File {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        }
    }
}

impl From<io::Error> for ConvertError {
    fn from(err: io::Error) -> Self {
        ConvertError::Io(err)
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        // serde_json reports write failures through its own error type.
        if err.is_io() {
            return ConvertError::Io(err.into());
        }
        ConvertError::Parse(err)
    }
}
