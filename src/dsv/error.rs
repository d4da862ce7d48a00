//! Error taxonomy for dialect detection.

#[cfg(not(feature = "std"))]
use alloc::string::String;
use core::fmt;

/// Everything that can go wrong while detecting a CSV dialect.
#[derive(Debug, Clone)]
pub enum DialectError {
    /// Sniffing ran to completion with an empty candidate list.
    InvalidInput {
        /// Path of the file being sniffed, for diagnostics.
        file_path: Option<String>,
    },
    /// The buffer manager raised an I/O fault. Propagated unchanged; never retried.
    BufferIoFault(BufferIoError),
    /// The user pinned incompatible options (e.g. `escape = 0` with `quote = '\''`).
    /// Detected at search-space construction, before any sniffing runs.
    OptionsConflict {
        /// Human-readable explanation of the conflict.
        reason: &'static str,
    },
}

impl fmt::Display for DialectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { file_path: Some(path) } => write!(
                f,
                "Error in file \"{}\": CSV options could not be auto-detected. \
                 Consider setting parser options manually.",
                path
            ),
            Self::InvalidInput { file_path: None } => write!(
                f,
                "CSV options could not be auto-detected. Consider setting parser options manually."
            ),
            Self::BufferIoFault(err) => write!(f, "buffer I/O fault: {}", err),
            Self::OptionsConflict { reason } => write!(f, "conflicting CSV options: {}", reason),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DialectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::BufferIoFault(err) => Some(err),
            _ => None,
        }
    }
}

/// An I/O fault raised by a [`BufferManager`](super::BufferManager).
///
/// Carries the formatted message of the underlying fault so this type stays
/// usable in `no_std` builds, where `std::io::Error` does not exist.
#[derive(Debug, Clone)]
pub struct BufferIoError {
    message: alloc::string::String,
}

impl BufferIoError {
    /// Build from a formatted message.
    pub fn new(message: impl Into<alloc::string::String>) -> Self {
        Self { message: message.into() }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for BufferIoError {
    fn from(err: std::io::Error) -> Self {
        Self { message: err.to_string() }
    }
}

impl fmt::Display for BufferIoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BufferIoError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_message_matches_spec() {
        let err = DialectError::InvalidInput { file_path: None };
        assert_eq!(
            err.to_string(),
            "CSV options could not be auto-detected. Consider setting parser options manually."
        );
    }

    #[test]
    fn invalid_input_includes_file_path() {
        let err = DialectError::InvalidInput {
            file_path: Some("data.csv".to_string()),
        };
        assert!(err.to_string().contains("data.csv"));
    }
}
