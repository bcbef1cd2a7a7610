//! Convenient re-exports for glob imports.
//!
//! This module provides a single import for all common types, making it easy
//! to get started with the crate:
//!
//! ```rust
//! use digital_link::prelude::*;
//!
//! let dl = DigitalLinkUri::parse("https://id.gs1.org/01/09520123456788").unwrap();
//! assert_eq!(dl.to_bracketed(false), "(01)09520123456788");
//! ```

pub use crate::{
    // Core types
    AiElement, DigitalLinkUri,
    // Errors
    ParseError, ParseErrorKind,
    // Lookup tables
    FIXED_LENGTH_AI_PREFIXES, PRIMARY_KEYS, fnc1_required, is_primary_key,
    // Constants
    MAX_AI_COUNT, MAX_AI_LENGTH, MAX_AI_VALUE_LENGTH, MAX_BRACKETED_LENGTH, MAX_JSON_LENGTH,
    MAX_UNBRACKETED_LENGTH, MIN_AI_LENGTH, SCHEME_HTTP, SCHEME_HTTPS,
};
