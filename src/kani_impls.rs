//! Kani proof harnesses for parser and writer properties.
//!
//! This module builds small Digital Link URIs from arbitrary parts and
//! verifies parser and writer properties with the Kani model checker.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{DigitalLinkUri, PRIMARY_KEYS, fnc1_required};

/// Value characters used by the harnesses: no escapes, no separators
const VALUE_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a valid value character
fn arbitrary_value_char() -> char {
    let idx: usize = kani::any();
    let idx = idx % VALUE_CHARS.len();
    VALUE_CHARS[idx] as char
}

/// Pick any Digital Link primary key
fn arbitrary_key() -> &'static str {
    let idx: usize = kani::any();
    PRIMARY_KEYS[idx % PRIMARY_KEYS.len()]
}

/// Generate a 1-4 character value for tractability
fn arbitrary_value() -> String {
    let len: usize = kani::any();
    let len = 1 + (len % 4);
    (0..len).map(|_| arbitrary_value_char()).collect()
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: a minimal key/value URI parses to exactly that element
#[kani::proof]
#[kani::unwind(40)]
fn proof_parse_extracts_the_key_pair() {
    let key = arbitrary_key();
    let value = arbitrary_value();
    let uri = format!("https://a/{key}/{value}");

    let dl = DigitalLinkUri::parse(&uri).expect("valid URI by construction");
    assert_eq!(dl.len(), 1);
    assert_eq!(dl.elements()[0].ai(), key);
    // Values this short are never GTIN-padded.
    assert_eq!(dl.elements()[0].value(), value);
    assert_eq!(dl.elements()[0].fnc1_required(), fnc1_required(key));
}

/// Proof: an eight-digit GTIN is padded to fourteen digits
#[kani::proof]
#[kani::unwind(40)]
fn proof_gtin8_pads_to_fourteen() {
    let digits = b"0123456789";
    let value: String = (0..8)
        .map(|_| {
            let idx: usize = kani::any();
            digits[idx % digits.len()] as char
        })
        .collect();
    let uri = format!("https://a/01/{value}");

    let dl = DigitalLinkUri::parse(&uri).expect("valid URI by construction");
    let padded = dl.elements()[0].value();
    assert_eq!(padded.len(), 14);
    assert!(padded.starts_with("000000"));
    assert!(padded.ends_with(&value));
}

/// Proof: single-element unbracketed output is `^` + AI + value for
/// every flag combination (the trailing separator is always stripped)
#[kani::proof]
#[kani::unwind(40)]
fn proof_unbracketed_single_element_shape() {
    let key = arbitrary_key();
    let value = arbitrary_value();
    let uri = format!("https://a/{key}/{value}");
    let dl = DigitalLinkUri::parse(&uri).expect("valid URI by construction");

    let expected = format!("^{key}{value}");
    let fixed_first: bool = kani::any();
    let extra_fnc1: bool = kani::any();
    assert_eq!(dl.to_unbracketed(fixed_first, extra_fnc1), expected);
}

/// Proof: fixed-first ordering puts a fixed-length query AI ahead of a
/// variable-length path qualifier
#[kani::proof]
#[kani::unwind(60)]
fn proof_fixed_first_partitions() {
    let key = arbitrary_key();
    let uri = format!("https://a/{key}/X/10/Y?17=Z");
    let dl = DigitalLinkUri::parse(&uri).expect("valid URI by construction");

    let out = dl.to_bracketed(true);
    let seventeen = out.find("(17)").expect("17 is present");
    let ten = out.find("(10)").expect("10 is present");
    assert!(seventeen < ten);
}

/// Proof: single-element JSON output is one key/value member
#[kani::proof]
#[kani::unwind(40)]
fn proof_json_single_element_shape() {
    let key = arbitrary_key();
    let value = arbitrary_value();
    let uri = format!("https://a/{key}/{value}");
    let dl = DigitalLinkUri::parse(&uri).expect("valid URI by construction");

    let expected = format!(r#"{{"{key}":"{value}"}}"#);
    let fixed_first: bool = kani::any();
    assert_eq!(dl.to_json(fixed_first), expected);
}

/// Proof: writers are idempotent
#[kani::proof]
#[kani::unwind(40)]
fn proof_writers_are_idempotent() {
    let key = arbitrary_key();
    let value = arbitrary_value();
    let uri = format!("https://a/{key}/{value}");
    let dl = DigitalLinkUri::parse(&uri).expect("valid URI by construction");

    assert_eq!(dl.to_unbracketed(true, true), dl.to_unbracketed(true, true));
    assert_eq!(dl.to_bracketed(false), dl.to_bracketed(false));
    assert_eq!(dl.to_json(true), dl.to_json(true));
}
