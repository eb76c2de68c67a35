//! The strict token codec.
//!
//! A token is `PREFIX + BASE36(id + OFFSET)`, uppercase, with the base-36
//! body left-padded with `'0'` to a minimum width. The standard codec uses
//! prefix `CR`, offset 1000 and width 3, so `1` encodes as `CR0RT`.
//!
//! The scheme is an obfuscation, not a secret: anyone can invert it.

use std::borrow::Cow;

use crate::config::CodecConfig;
use crate::radix::{self, RadixError};
use crate::IdError;

/// Prefix of the standard codec.
pub const DEFAULT_PREFIX: &str = "CR";

/// Offset of the standard codec.
pub const DEFAULT_OFFSET: u64 = 1000;

/// Minimum body width of the standard codec.
pub const DEFAULT_MIN_WIDTH: usize = 3;

/// Largest accepted minimum body width. `u64::MAX` plus any offset needs at
/// most 14 base-36 digits.
pub const MAX_MIN_WIDTH: usize = 64;

/// The codec every platform URL uses.
pub static STANDARD: IdCodec = IdCodec::standard();

/// Bidirectional mapping between `u64` identifiers and opaque tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdCodec {
    prefix: Cow<'static, str>,
    offset: u64,
    min_width: usize,
}

impl IdCodec {
    /// The `CR` / 1000 / 3 codec.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            prefix: Cow::Borrowed(DEFAULT_PREFIX),
            offset: DEFAULT_OFFSET,
            min_width: DEFAULT_MIN_WIDTH,
        }
    }

    /// Builds a codec from validated configuration.
    pub fn from_config(config: CodecConfig) -> Result<Self, IdError> {
        config.validate()?;
        Ok(Self {
            prefix: Cow::Owned(config.prefix),
            offset: config.offset,
            min_width: config.min_width,
        })
    }

    /// Returns the configuration this codec was built from.
    #[must_use]
    pub fn config(&self) -> CodecConfig {
        CodecConfig {
            prefix: self.prefix.to_string(),
            offset: self.offset,
            min_width: self.min_width,
        }
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.offset
    }

    #[must_use]
    pub const fn min_width(&self) -> usize {
        self.min_width
    }

    /// Encodes an identifier. Total: every `u64`, including zero, has a token.
    #[must_use]
    pub fn encode(&self, id: u64) -> String {
        let shifted = u128::from(id) + u128::from(self.offset);
        let body = radix::pad_start(&radix::encode_u128(shifted), self.min_width);
        format!("{}{}", self.prefix, body)
    }

    /// Encodes an optional identifier; an absent identifier has no token.
    #[must_use]
    pub fn encode_opt(&self, id: Option<u64>) -> Option<String> {
        id.map(|id| self.encode(id))
    }

    /// Decodes a token back to its identifier.
    ///
    /// A string of ASCII digits without the prefix is accepted as a bare
    /// decimal identifier, which is how older URLs referenced resources.
    /// Anything else must be the canonical encoding of some identifier.
    pub fn decode(&self, token: &str) -> Result<u64, IdError> {
        if token.is_empty() {
            return Err(IdError::Empty);
        }

        let Some(body) = token.strip_prefix(self.prefix()) else {
            return self.decode_bare(token);
        };

        let value = radix::decode_u128(body).map_err(|e| match e {
            RadixError::Invalid => IdError::UnparsableBody {
                body: body.to_string(),
            },
            RadixError::Overflow => IdError::OutOfRange {
                input: token.to_string(),
            },
        })?;

        let shifted = value
            .checked_sub(u128::from(self.offset))
            .ok_or(IdError::BelowOffset {
                value,
                offset: self.offset,
            })?;

        let id = u64::try_from(shifted).map_err(|_| IdError::OutOfRange {
            input: token.to_string(),
        })?;

        let canonical = self.encode(id);
        if canonical != token {
            return Err(IdError::NonCanonical {
                token: token.to_string(),
                canonical,
            });
        }

        Ok(id)
    }

    fn decode_bare(&self, token: &str) -> Result<u64, IdError> {
        if !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdError::MissingPrefix {
                expected: self.prefix.to_string(),
                actual: token.to_string(),
            });
        }

        token.parse::<u64>().map_err(|_| IdError::OutOfRange {
            input: token.to_string(),
        })
    }

    /// Returns true if `token` is the prefix followed by one or more `[0-9A-Z]`.
    ///
    /// This is a format check only: `CR00RS` passes even though [`decode`]
    /// rejects it as non-canonical.
    ///
    /// [`decode`]: IdCodec::decode
    #[must_use]
    pub fn is_encoded_id(&self, token: &str) -> bool {
        token
            .strip_prefix(self.prefix())
            .is_some_and(|body| !body.is_empty() && body.bytes().all(radix::is_digit))
    }
}

impl Default for IdCodec {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<CodecConfig> for IdCodec {
    type Error = IdError;

    fn try_from(config: CodecConfig) -> Result<Self, Self::Error> {
        Self::from_config(config)
    }
}

/// Encodes with the standard codec.
#[must_use]
pub fn encode(id: u64) -> String {
    STANDARD.encode(id)
}

/// Decodes with the standard codec.
pub fn decode(token: &str) -> Result<u64, IdError> {
    STANDARD.decode(token)
}

/// Checks the token format of the standard codec.
#[must_use]
pub fn is_encoded_id(token: &str) -> bool {
    STANDARD.is_encoded_id(token)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "CR0RS")]
    #[case(1, "CR0RT")]
    #[case(5, "CR0RX")]
    #[case(35, "CR0SR")]
    #[case(45_655, "CRZZZ")]
    #[case(45_656, "CR1000")]
    fn test_encode_known_tokens(#[case] id: u64, #[case] token: &str) {
        assert_eq!(encode(id), token);
        assert_eq!(decode(token), Ok(id));
    }

    #[test]
    fn test_encode_max_is_total() {
        let token = encode(u64::MAX);
        assert!(is_encoded_id(&token));
        assert_eq!(decode(&token), Ok(u64::MAX));
    }

    #[test]
    fn test_encode_opt() {
        assert_eq!(STANDARD.encode_opt(None), None);
        assert_eq!(STANDARD.encode_opt(Some(0)), Some("CR0RS".to_string()));
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode(""), Err(IdError::Empty));
    }

    #[test]
    fn test_decode_bare_decimal() {
        assert_eq!(decode("42"), Ok(42));
        assert_eq!(decode("0"), Ok(0));
        assert!(matches!(
            decode("99999999999999999999999"),
            Err(IdError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_decode_missing_prefix() {
        let err = decode("not-a-token").unwrap_err();
        assert!(err.is_prefix_error());
        assert_eq!(
            err,
            IdError::MissingPrefix {
                expected: "CR".to_string(),
                actual: "not-a-token".to_string(),
            }
        );
    }

    #[test]
    fn test_decode_unparsable_body() {
        assert!(matches!(decode("CR"), Err(IdError::UnparsableBody { .. })));
        assert!(matches!(decode("CR0rs"), Err(IdError::UnparsableBody { .. })));
        assert!(matches!(decode("CRNAN-"), Err(IdError::UnparsableBody { .. })));
    }

    #[test]
    fn test_decode_below_offset() {
        assert_eq!(
            decode("CR001"),
            Err(IdError::BelowOffset {
                value: 1,
                offset: 1000,
            })
        );
    }

    #[test]
    fn test_decode_out_of_range() {
        let too_big = format!("CR{}", "Z".repeat(40));
        assert!(matches!(decode(&too_big), Err(IdError::OutOfRange { .. })));

        let past_u64 = STANDARD.encode(u64::MAX);
        let next = radix::encode_u128(radix::decode_u128(&past_u64[2..]).unwrap() + 1);
        assert!(matches!(
            decode(&format!("CR{next}")),
            Err(IdError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_non_canonical_padding() {
        assert_eq!(
            decode("CR00RS"),
            Err(IdError::NonCanonical {
                token: "CR00RS".to_string(),
                canonical: "CR0RS".to_string(),
            })
        );
        assert!(matches!(decode("CRRS"), Err(IdError::NonCanonical { .. })));
    }

    #[rstest]
    #[case("CRAB1", true)]
    #[case("CR0RS", true)]
    #[case("CR00RS", true)]
    #[case("AB123", false)]
    #[case("", false)]
    #[case("CR", false)]
    #[case("CRab1", false)]
    #[case("CR-12", false)]
    #[case("xCRAB1", false)]
    fn test_is_encoded_id(#[case] token: &str, #[case] expected: bool) {
        assert_eq!(is_encoded_id(token), expected);
    }

    #[test]
    fn test_custom_codec() {
        let codec = IdCodec::from_config(CodecConfig {
            prefix: "PX".to_string(),
            offset: 0,
            min_width: 6,
        })
        .unwrap();
        assert_eq!(codec.encode(35), "PX00000Z");
        assert_eq!(codec.decode("PX00000Z"), Ok(35));
        assert!(codec.decode("CR0RS").unwrap_err().is_prefix_error());
        assert_eq!(codec.config().min_width, 6);
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let result = IdCodec::try_from(CodecConfig {
            prefix: String::new(),
            ..CodecConfig::default()
        });
        assert!(matches!(result, Err(IdError::InvalidConfig { .. })));
    }

    #[test]
    fn test_codec_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IdCodec>();
    }

    proptest! {
        #[test]
        fn prop_roundtrip(id in any::<u64>()) {
            prop_assert_eq!(decode(&encode(id)), Ok(id));
        }

        #[test]
        fn prop_token_format(id in any::<u64>()) {
            let token = encode(id);
            prop_assert!(is_encoded_id(&token));
            prop_assert!(token.len() >= 5);
        }

        #[test]
        fn prop_custom_codec_roundtrip(
            id in any::<u64>(),
            offset in any::<u64>(),
            min_width in 1usize..12,
        ) {
            let codec = IdCodec::from_config(CodecConfig {
                prefix: "T".to_string(),
                offset,
                min_width,
            }).unwrap();
            let token = codec.encode(id);
            prop_assert!(token.len() > min_width);
            prop_assert_eq!(codec.decode(&token), Ok(id));
        }

        #[test]
        fn prop_decode_accepts_only_canonical(body in "[0-9A-Z]{1,8}") {
            let token = format!("CR{body}");
            if let Ok(id) = decode(&token) {
                prop_assert_eq!(encode(id), token);
            }
        }
    }
}
