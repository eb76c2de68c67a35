//! Error types for token decoding and codec configuration.

use thiserror::Error;

/// Errors that can occur when decoding tokens or configuring a codec.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The token string is empty.
    #[error("token cannot be empty")]
    Empty,

    /// The input was not text at all (legacy dynamic values only).
    #[error("token is not a string")]
    NotAString,

    /// The token is missing the required prefix.
    #[error("token missing prefix: expected '{expected}', got '{actual}'")]
    MissingPrefix { expected: String, actual: String },

    /// The part after the prefix is empty or contains characters outside `[0-9A-Z]`.
    #[error("unparsable token body: '{body}'")]
    UnparsableBody { body: String },

    /// The body decodes to a value smaller than the codec offset.
    #[error("token value {value} is below the offset {offset}")]
    BelowOffset { value: u128, offset: u64 },

    /// The decoded identifier does not fit in a `u64`.
    #[error("identifier out of range: '{input}'")]
    OutOfRange { input: String },

    /// The token decodes, but is not the canonical encoding of its identifier.
    #[error("non-canonical token '{token}', expected '{canonical}'")]
    NonCanonical { token: String, canonical: String },

    /// A legacy decode fell back to stripping non-digit characters.
    #[error("legacy digit fallback produced '{digits}'")]
    LegacyDigitFallback { digits: String },

    /// The path does not start with a known resource prefix.
    #[error("unknown resource path: '{path}'")]
    UnknownResource { path: String },

    /// The codec configuration is invalid.
    #[error("invalid codec configuration: {message}")]
    InvalidConfig { message: String },
}

impl IdError {
    /// Returns true if this error indicates the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, IdError::Empty)
    }

    /// Returns true if this error indicates a prefix mismatch.
    pub fn is_prefix_error(&self) -> bool {
        matches!(self, IdError::MissingPrefix { .. })
    }

    /// Returns true if this error stands in for one of the degenerate values
    /// the legacy front-end decoder used to return (`null`, `NaN`, digit strings).
    pub fn is_legacy_degenerate(&self) -> bool {
        matches!(
            self,
            IdError::NotAString | IdError::UnparsableBody { .. } | IdError::LegacyDigitFallback { .. }
        )
    }

    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        IdError::InvalidConfig {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifiers() {
        assert!(IdError::Empty.is_empty());
        assert!(IdError::MissingPrefix {
            expected: "CR".to_string(),
            actual: "AB123".to_string(),
        }
        .is_prefix_error());
        assert!(IdError::NotAString.is_legacy_degenerate());
        assert!(!IdError::Empty.is_legacy_degenerate());
    }

    #[test]
    fn test_display_names_offending_input() {
        let err = IdError::UnparsableBody {
            body: "a-b".to_string(),
        };
        assert_eq!(err.to_string(), "unparsable token body: 'a-b'");
    }
}
