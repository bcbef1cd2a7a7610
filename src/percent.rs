//! Percent-decoding for AI values.
//!
//! Digital Link values arrive percent-encoded in the URI path and query
//! string. Decoding here is deliberately forgiving: a well-formed `%XX`
//! escape becomes its byte, while a malformed escape (non-hex digits, or a
//! `%` within two characters of the end of input) passes through
//! literally. Output is capped at the per-value maximum; excess input is
//! dropped rather than reported.

use crate::constants::MAX_AI_VALUE_LENGTH;

/// Decodes a raw value taken from a path segment. `+` stays literal.
pub(crate) fn decode_path_value(raw: &str) -> String {
    decode(raw, MAX_AI_VALUE_LENGTH, false)
}

/// Decodes a raw value taken from a query parameter. `+` becomes a space.
pub(crate) fn decode_query_value(raw: &str) -> String {
    decode(raw, MAX_AI_VALUE_LENGTH, true)
}

/// Core decoder. Emits at most `max_len` characters.
///
/// Callers ensure `input` is ASCII; the URI character set is validated
/// before any value reaches this point. Decoded bytes above 0x7F are
/// pushed as single characters of the same scalar value.
fn decode(input: &str, max_len: usize, plus_to_space: bool) -> String {
    let bytes = input.as_bytes();
    let mut decoded = String::with_capacity(input.len().min(max_len));
    let mut written = 0;
    let mut i = 0;
    while i < bytes.len() && written < max_len {
        if i + 2 < bytes.len()
            && bytes[i] == b'%'
            && bytes[i + 1].is_ascii_hexdigit()
            && bytes[i + 2].is_ascii_hexdigit()
        {
            if let Ok(byte) = u8::from_str_radix(&input[i + 1..i + 3], 16) {
                decoded.push(char::from(byte));
                written += 1;
                i += 3;
                continue;
            }
        }
        let byte = bytes[i];
        if plus_to_space && byte == b'+' {
            decoded.push(' ');
        } else {
            decoded.push(char::from(byte));
        }
        written += 1;
        i += 1;
    }
    decoded
}
