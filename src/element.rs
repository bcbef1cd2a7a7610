//! A single extracted AI element.

use std::fmt;

use crate::tables;

/// One `(AI, value)` pair extracted from a Digital Link URI.
///
/// The value is stored percent-decoded (and GTIN-padded where that
/// applies). The FNC1 flag is fixed at extraction time from the AI's
/// two-digit prefix and drives separator placement in unbracketed element
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AiElement {
    ai: String,
    value: String,
    fnc1: bool,
}

impl AiElement {
    pub(crate) fn new(ai: &str, value: String) -> Self {
        Self {
            fnc1: tables::fnc1_required(ai),
            ai: ai.to_string(),
            value,
        }
    }

    /// The AI code (2 to 4 digits).
    #[must_use]
    pub fn ai(&self) -> &str {
        &self.ai
    }

    /// The decoded value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// True if this element needs an FNC1 separator after it in an
    /// unbracketed element string.
    #[must_use]
    pub const fn fnc1_required(&self) -> bool {
        self.fnc1
    }
}

impl fmt::Display for AiElement {
    /// Renders as `(AI)value` without escaping.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}){}", self.ai, self.value)
    }
}
