//! Static AI lookup tables.
//!
//! Two read-only tables drive parsing: the Digital Link primary keys that
//! may anchor a URI path, and the two-digit AI prefixes that denote
//! fixed-length fields (which need no FNC1 separator in unbracketed
//! element strings).

/// AIs that may serve as a Digital Link primary key.
pub const PRIMARY_KEYS: [&str; 15] = [
    "00",   // SSCC
    "01",   // GTIN
    "253",  // GDTI
    "255",  // GCN
    "401",  // GINC
    "402",  // GSIN
    "414",  // LOC NO.
    "417",  // PARTY
    "8003", // GRAI
    "8004", // GIAI
    "8006", // ITIP
    "8010", // CPID
    "8013", // GMN
    "8017", // GSRN - PROVIDER
    "8018", // GSRN - RECIPIENT
];

/// Two-digit AI prefixes whose fields have a fixed length.
pub const FIXED_LENGTH_AI_PREFIXES: [&str; 22] = [
    "00", "01", "02", "03", "04", //
    "11", "12", "13", "14", "15", "16", "17", "18", "19", "20", //
    "31", "32", "33", "34", "35", "36", //
    "41",
];

/// Returns true if `ai` is a Digital Link primary key.
#[must_use]
pub fn is_primary_key(ai: &str) -> bool {
    PRIMARY_KEYS.contains(&ai)
}

/// Returns true if an element with this AI needs an FNC1 separator in an
/// unbracketed element string.
///
/// Only the first two characters of the AI are consulted: an AI whose
/// two-digit prefix is in [`FIXED_LENGTH_AI_PREFIXES`] has a fixed-length
/// value and needs no separator.
#[must_use]
pub fn fnc1_required(ai: &str) -> bool {
    let Some(prefix) = ai.get(..2) else {
        return true;
    };
    !FIXED_LENGTH_AI_PREFIXES.contains(&prefix)
}
