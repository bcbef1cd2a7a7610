//! Parser and element string writer for GS1 Digital Link URIs.
//!
//! This crate extracts GS1 Application Identifier (AI) data from Digital
//! Link URIs and renders it in the element string forms used by barcode
//! messages.
//!
//! # Overview
//!
//! A Digital Link URI carries AI data in an ordinary web URI:
//!
//! ```text
//! http(s)://<domain>[/<stem>]/<key-AI>/<value>[/<AI>/<value>]*[?AI=value&...][#fragment]
//! ```
//!
//! The path is anchored at the rightmost `/AI/value` pair whose AI is a
//! Digital Link primary key (GTIN, SSCC, GRAI, ...). Qualifier pairs
//! follow it; query parameters with numeric names carry non-hierarchical
//! AIs; any other path segments, query parameters, and the fragment are
//! ignored.
//!
//! # Quick Start
//!
//! ```rust
//! use digital_link::DigitalLinkUri;
//!
//! // Parse a Digital Link URI
//! let dl = DigitalLinkUri::parse(
//!     "https://id.gs1.org/01/09520123456788/21/12345?17=180426"
//! ).unwrap();
//!
//! // Access extracted elements
//! assert_eq!(dl.len(), 3);
//! assert_eq!(dl.elements()[0].ai(), "01");
//! assert_eq!(dl.elements()[0].value(), "09520123456788");
//!
//! // Render element strings
//! assert_eq!(
//!     dl.to_unbracketed(false, false),
//!     "^01095201234567882112345^17180426"
//! );
//! assert_eq!(
//!     dl.to_bracketed(false),
//!     "(01)09520123456788(21)12345(17)180426"
//! );
//! assert_eq!(
//!     dl.to_json(false),
//!     r#"{"01":"09520123456788","21":"12345","17":"180426"}"#
//! );
//! ```
//!
//! # Output Forms
//!
//! Each writer takes a `fixed_first` flag that moves elements with
//! fixed-length AIs ahead of those needing FNC1 separators (a stable
//! partition of extraction order):
//!
//! ```rust
//! # use digital_link::DigitalLinkUri;
//! # let dl = DigitalLinkUri::parse(
//! #     "https://id.gs1.org/01/09520123456788/21/12345?17=180426"
//! # ).unwrap();
//! assert_eq!(
//!     dl.to_bracketed(true),
//!     "(01)09520123456788(17)180426(21)12345"
//! );
//! ```
//!
//! # Limits
//!
//! | Component | Limit |
//! |-----------|-------|
//! | AI elements per URI | 64 |
//! | AI code | 2 to 4 digits |
//! | Decoded AI value | 90 chars |

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod constants;
mod element;
mod error;
mod format;
#[cfg(kani)]
mod kani_impls;
mod percent;
pub mod prelude;
mod tables;
mod uri;

pub use constants::{
    MAX_AI_COUNT, MAX_AI_LENGTH, MAX_AI_VALUE_LENGTH, MAX_BRACKETED_LENGTH, MAX_JSON_LENGTH,
    MAX_UNBRACKETED_LENGTH, MIN_AI_LENGTH, SCHEME_HTTP, SCHEME_HTTPS,
};
pub use element::AiElement;
pub use error::{ParseError, ParseErrorKind};
pub use tables::{FIXED_LENGTH_AI_PREFIXES, PRIMARY_KEYS, fnc1_required, is_primary_key};
pub use uri::DigitalLinkUri;
