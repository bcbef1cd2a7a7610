//! Constants for Digital Link parsing and element string output.

/// Maximum number of AI elements a single URI may carry.
pub const MAX_AI_COUNT: usize = 64;

/// Minimum AI code length in digits.
pub const MIN_AI_LENGTH: usize = 2;

/// Maximum AI code length in digits.
pub const MAX_AI_LENGTH: usize = 4;

/// Maximum decoded AI value length in characters.
pub const MAX_AI_VALUE_LENGTH: usize = 90;

/// Worst-case unbracketed element string length: one leading separator,
/// then per element the AI, the value, and at most one separator.
pub const MAX_UNBRACKETED_LENGTH: usize =
    MAX_AI_COUNT * (MAX_AI_LENGTH + MAX_AI_VALUE_LENGTH + 1) + 1;

/// Worst-case bracketed element string length: per element the
/// parenthesised AI and the value with every character escaped.
pub const MAX_BRACKETED_LENGTH: usize =
    MAX_AI_COUNT * (MAX_AI_LENGTH + 2 + MAX_AI_VALUE_LENGTH * 2);

/// Worst-case JSON output length: per element the quoted AI, colon, quoted
/// value with every character escaped, and a comma, plus the braces.
pub const MAX_JSON_LENGTH: usize =
    MAX_AI_COUNT * (MAX_AI_LENGTH + MAX_AI_VALUE_LENGTH * 2 + 6) + 2;

/// The plain-HTTP scheme prefix.
pub const SCHEME_HTTP: &str = "http://";

/// The HTTPS scheme prefix.
pub const SCHEME_HTTPS: &str = "https://";
