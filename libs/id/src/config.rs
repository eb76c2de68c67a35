//! Codec configuration.

use serde::{Deserialize, Serialize};

use crate::codec::{DEFAULT_MIN_WIDTH, DEFAULT_OFFSET, DEFAULT_PREFIX, MAX_MIN_WIDTH};
use crate::IdError;

/// Serializable codec parameters.
///
/// Every field has a default, so a partial document such as
/// `{"prefix": "CX"}` is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Token prefix. ASCII uppercase letters and digits, starting with a letter
    /// so that bare decimal identifiers stay distinguishable from tokens.
    pub prefix: String,

    /// Added to the identifier before radix conversion.
    pub offset: u64,

    /// Minimum number of base-36 digits after the prefix.
    pub min_width: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            offset: DEFAULT_OFFSET,
            min_width: DEFAULT_MIN_WIDTH,
        }
    }
}

impl CodecConfig {
    /// Checks the parameters without building a codec.
    pub fn validate(&self) -> Result<(), IdError> {
        if self.prefix.is_empty() {
            return Err(IdError::invalid_config("prefix cannot be empty"));
        }

        if !self
            .prefix
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        {
            return Err(IdError::invalid_config(format!(
                "prefix '{}' must contain only A-Z and 0-9",
                self.prefix
            )));
        }

        if !self.prefix.as_bytes()[0].is_ascii_uppercase() {
            return Err(IdError::invalid_config(format!(
                "prefix '{}' must start with a letter",
                self.prefix
            )));
        }

        if self.min_width == 0 {
            return Err(IdError::invalid_config("min_width must be at least 1"));
        }

        if self.min_width > MAX_MIN_WIDTH {
            return Err(IdError::invalid_config(format!(
                "min_width {} exceeds the maximum of {MAX_MIN_WIDTH}",
                self.min_width
            )));
        }

        Ok(())
    }
}
