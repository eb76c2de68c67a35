//! # coursehub-id
//!
//! Opaque ID tokens for the coursehub online-course platform.
//!
//! ## Design Principles
//!
//! - URLs never carry raw database primary keys, only tokens
//! - Encoding is total; decoding is strict and returns a typed error
//! - Every identifier has exactly one token (parse → format → parse)
//! - IDs are typed to prevent mixing resource kinds
//!
//! ## Token Format
//!
//! `{prefix}{base36(id + offset)}`, uppercase, body left-padded with `0` to
//! at least three digits. The standard codec uses prefix `CR` and offset 1000:
//!
//! - `0` → `CR0RS`
//! - `5` → `CR0RX`
//! - `45656` → `CR1000`
//!
//! Tokens are obfuscation only. They are trivially invertible and must not
//! be treated as unguessable.
//!
//! ## Legacy behaviour
//!
//! The [`legacy`] module reproduces the web front-end's original helpers,
//! including their degenerate outputs, for call sites not yet migrated.

mod codec;
mod config;
mod error;
pub mod legacy;
mod macros;
mod paths;
mod radix;
mod types;

pub use codec::{
    decode, encode, is_encoded_id, IdCodec, DEFAULT_MIN_WIDTH, DEFAULT_OFFSET, DEFAULT_PREFIX,
    MAX_MIN_WIDTH, STANDARD,
};
pub use config::CodecConfig;
pub use error::IdError;
pub use paths::{
    course_detail_url, id_from_url, instructor_profile_url, last_segment, product_detail_url,
    resolve_path, resource_path, ResourceKind,
};
pub use types::*;
