//! Error types for Digital Link URI parsing.

use std::fmt;

/// Errors that can occur when parsing a Digital Link URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Character outside the URI allow-list
    IllegalCharacter {
        /// The illegal character
        char: char,
        /// Position in the input
        position: usize,
    },
    /// Scheme is not literal `http://` or `https://`
    InvalidScheme,
    /// No domain followed by a path
    MissingPathInfo,
    /// The backward scan found no primary-key pair in the path
    NoPrimaryKey,
    /// A path pair's value segment is missing or empty
    EmptyPathValue {
        /// AI code of the pair
        ai: String,
    },
    /// A query parameter's value is empty
    EmptyQueryValue {
        /// AI code of the parameter
        ai: String,
    },
    /// An all-digit query parameter name is not a structurally valid AI
    IllegalNumericParam {
        /// The name, truncated to its first 10 characters
        name: String,
    },
    /// Decoding produced no output for a non-empty raw value
    ValueTooLong {
        /// AI code of the element
        ai: String,
    },
    /// The element count cap was exceeded
    TooManyAis {
        /// Maximum allowed element count
        max: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse Digital Link URI '{}': ", self.input)?;
        match &self.kind {
            ParseErrorKind::IllegalCharacter { char, position } => {
                write!(
                    f,
                    "URI contains illegal characters: '{char}' at position {position}"
                )
            }
            ParseErrorKind::InvalidScheme => {
                write!(f, "scheme must be http:// or https://")
            }
            ParseErrorKind::MissingPathInfo => {
                write!(f, "URI must contain a domain and path info")
            }
            ParseErrorKind::NoPrimaryKey => {
                write!(f, "no GS1 DL keys found in path info")
            }
            ParseErrorKind::EmptyPathValue { ai } => {
                write!(f, "AI ({ai}) value path element is empty")
            }
            ParseErrorKind::EmptyQueryValue { ai } => {
                write!(f, "AI ({ai}) value query element is empty")
            }
            ParseErrorKind::IllegalNumericParam { name } => {
                write!(
                    f,
                    "numeric query parameter that is not a valid AI is illegal: {name}..."
                )
            }
            ParseErrorKind::ValueTooLong { ai } => {
                write!(f, "decoded AI ({ai}) value too long")
            }
            ParseErrorKind::TooManyAis { max } => {
                write!(f, "too many AIs; at most {max} allowed")
            }
        }
    }
}

impl std::error::Error for ParseError {}
