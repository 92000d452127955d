//! Errors raised while ingesting a sensor log

use std::path::PathBuf;

use thiserror::Error;

use crate::traits::StatsError;

/// Error from an ingestion run
#[derive(Debug, Error)]
pub enum IngestError {
    /// The input is missing, unreadable or not a regular file
    #[error("{} does not exist", .path.display())]
    SourceUnavailable {
        /// Path that was requested
        path: PathBuf,
        /// Underlying open error
        #[source]
        source: std::io::Error,
    },

    /// Reading from an opened source failed
    #[error("failed to read input: {0}")]
    Read(#[from] std::io::Error),

    /// A line of the source is not valid UTF-8
    #[error("line {line}: not valid UTF-8 text")]
    InvalidText {
        /// One-based line number in the source
        line: usize,
    },

    /// A data row is too short to contain a tracked field
    #[error("line {line}: expected a value at field {index}, but the row has only {found} fields")]
    MissingField {
        /// One-based line number in the source
        line: usize,
        /// Zero-based token index that was requested
        index: usize,
        /// Number of tokens the row actually has
        found: usize,
    },

    /// A tracked field is not a finite real number
    #[error("line {line}: field {index} is not a number: {token:?}")]
    InvalidNumber {
        /// One-based line number in the source
        line: usize,
        /// Zero-based token index
        index: usize,
        /// The offending token
        token: String,
    },

    /// Statistics could not be computed
    #[error(transparent)]
    Stats(#[from] StatsError),
}

impl IngestError {
    /// True for malformed-row errors
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            IngestError::InvalidText { .. }
                | IngestError::MissingField { .. }
                | IngestError::InvalidNumber { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_unavailable_names_path() {
        let err = IngestError::SourceUnavailable {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.to_string(), "missing.txt does not exist");
        assert!(!err.is_parse_error());
    }

    #[test]
    fn test_parse_error_messages() {
        let err = IngestError::InvalidNumber {
            line: 3,
            index: 2,
            token: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "line 3: field 2 is not a number: \"abc\"");
        assert!(err.is_parse_error());

        let err = IngestError::MissingField {
            line: 2,
            index: 8,
            found: 4,
        };
        assert!(err.to_string().contains("only 4 fields"));
        assert!(err.is_parse_error());

        let err = IngestError::InvalidText { line: 7 };
        assert_eq!(err.to_string(), "line 7: not valid UTF-8 text");
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_stats_error_is_transparent() {
        let err = IngestError::from(StatsError::EmptyInput);
        assert_eq!(err.to_string(), StatsError::EmptyInput.to_string());
    }
}
