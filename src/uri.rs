//! Main Digital Link URI type.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::constants::{MAX_AI_COUNT, MAX_AI_LENGTH, MIN_AI_LENGTH, SCHEME_HTTP, SCHEME_HTTPS};
use crate::element::AiElement;
use crate::error::{ParseError, ParseErrorKind};
use crate::percent;
use crate::tables;

/// A parsed GS1 Digital Link URI.
///
/// Digital Link URIs carry GS1 Application Identifier data in an ordinary
/// web URI.
///
/// # Structure
///
/// ```text
/// http(s)://<domain>[/<stem>]/<key-AI>/<value>[/<AI>/<value>]*[?AI=value&...][#fragment]
/// ```
///
/// The path is anchored at the rightmost `/AI/value` pair whose AI is a
/// Digital Link primary key; anything to the left of the anchor (the stem)
/// is ignored. Query parameters with numeric names carry additional AI
/// data; other parameters and the fragment are dropped.
///
/// # Examples
///
/// ```
/// use digital_link::DigitalLinkUri;
///
/// let dl = DigitalLinkUri::parse("https://id.gs1.org/01/09520123456788/21/12345?17=180426").unwrap();
/// assert_eq!(dl.len(), 3);
/// assert_eq!(dl.elements()[0].ai(), "01");
/// assert_eq!(dl.elements()[0].value(), "09520123456788");
/// assert_eq!(dl.to_bracketed(false), "(01)09520123456788(21)12345(17)180426");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitalLinkUri {
    /// The original URI, kept intact
    uri: String,
    elements: Vec<AiElement>,
}

impl DigitalLinkUri {
    /// Parses a Digital Link URI from a string.
    ///
    /// Validates the character set, scheme, and domain/path shape, locates
    /// the primary-key pair by scanning path-segment pairs right to left,
    /// then extracts AI elements from the path and the query string.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - the URI contains characters outside the URI allow-list
    /// - the scheme is not literal `http://` or `https://`
    /// - no domain followed by a path is present
    /// - no path pair carries a Digital Link primary key
    /// - an AI value is missing, empty, or decodes to nothing
    /// - a numeric query parameter name is not a structurally valid AI
    /// - more than [`MAX_AI_COUNT`](crate::MAX_AI_COUNT) elements appear
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_inner(input).map_err(|kind| ParseError {
            input: input.to_string(),
            kind,
        })
    }

    /// Returns the extracted AI elements in extraction order: path pairs
    /// from the primary key onward, then query parameters left to right.
    #[must_use]
    pub fn elements(&self) -> &[AiElement] {
        &self.elements
    }

    /// Returns the number of extracted elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if no elements were extracted. A successful parse
    /// always yields at least the primary-key element, so this is false
    /// for any value obtained from [`parse`](Self::parse).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns an iterator over the extracted elements.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, AiElement> {
        self.elements.iter()
    }

    /// Returns the original URI string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.uri
    }

    fn parse_inner(input: &str) -> Result<Self, ParseErrorKind> {
        if let Some((position, char)) = input.chars().enumerate().find(|&(_, c)| !is_uri_char(c))
        {
            return Err(ParseErrorKind::IllegalCharacter { char, position });
        }

        // Check and strip scheme
        let rest = input
            .strip_prefix(SCHEME_HTTPS)
            .or_else(|| input.strip_prefix(SCHEME_HTTP))
            .ok_or(ParseErrorKind::InvalidScheme)?;

        // Split domain from path info
        let path_info = Self::split_path_info(rest)?;

        // Cut the fragment, then the query string
        let path_info = Self::strip_fragment(path_info);
        let (path_info, query) = Self::split_query(path_info);

        // Locate the primary-key pair
        let segments: Vec<&str> = path_info[1..].split('/').collect();
        let anchor = Self::locate_primary_key(&segments).ok_or(ParseErrorKind::NoPrimaryKey)?;

        // Extract AI elements
        let mut elements = Vec::new();
        Self::extract_path_pairs(&segments[anchor..], &mut elements)?;
        if let Some(query) = query {
            Self::extract_query_params(query, &mut elements)?;
        }

        Ok(Self {
            uri: input.to_string(),
            elements,
        })
    }

    /// Splits the domain from the path info. The path info keeps its
    /// leading slash.
    fn split_path_info(rest: &str) -> Result<&str, ParseErrorKind> {
        let slash_idx = rest.find('/').ok_or(ParseErrorKind::MissingPathInfo)?;
        if slash_idx == 0 {
            return Err(ParseErrorKind::MissingPathInfo);
        }
        Ok(&rest[slash_idx..])
    }

    /// Cuts the fragment at the first `#`. The fragment is never
    /// interpreted.
    fn strip_fragment(path_info: &str) -> &str {
        path_info.find('#').map_or(path_info, |idx| &path_info[..idx])
    }

    /// Cuts the query string at the first `?` without copying either side.
    fn split_query(path_info: &str) -> (&str, Option<&str>) {
        match path_info.find('?') {
            Some(idx) => (&path_info[..idx], Some(&path_info[idx + 1..])),
            None => (path_info, None),
        }
    }

    /// Scans segment pairs right to left for the rightmost pair whose AI
    /// is a Digital Link primary key, returning the AI's segment index.
    ///
    /// The candidate AI of each pair is the second-to-last remaining
    /// segment; each step moves left by two. The first candidate that is
    /// not structurally valid ends the scan.
    fn locate_primary_key(segments: &[&str]) -> Option<usize> {
        let mut end = segments.len();
        while end >= 2 {
            let candidate = segments[end - 2];
            if !is_valid_ai(candidate) {
                return None;
            }
            if tables::is_primary_key(candidate) {
                return Some(end - 2);
            }
            end -= 2;
        }
        None
    }

    /// Walks `/AI/value` pairs from the anchor to the end of the path.
    /// Every AI in this range was already validated by the backward scan.
    fn extract_path_pairs(
        segments: &[&str],
        elements: &mut Vec<AiElement>,
    ) -> Result<(), ParseErrorKind> {
        let mut iter = segments.iter();
        while let Some(&ai) = iter.next() {
            let raw_value = iter.next().copied().unwrap_or("");
            if raw_value.is_empty() {
                return Err(ParseErrorKind::EmptyPathValue { ai: ai.to_string() });
            }
            let value = percent::decode_path_value(raw_value);
            if value.is_empty() {
                return Err(ParseErrorKind::ValueTooLong { ai: ai.to_string() });
            }
            Self::push_element(elements, ai, value)?;
        }
        Ok(())
    }

    /// Walks query parameters left to right. Parameters without `=` and
    /// parameters with non-numeric names carry no AI data and are
    /// skipped; a numeric name must be a structurally valid AI.
    fn extract_query_params(
        query: &str,
        elements: &mut Vec<AiElement>,
    ) -> Result<(), ParseErrorKind> {
        for param in query.split('&') {
            if param.is_empty() {
                continue;
            }
            let Some((name, raw_value)) = param.split_once('=') else {
                continue;
            };
            if !name.bytes().all(|b| b.is_ascii_digit()) {
                continue;
            }
            if !(MIN_AI_LENGTH..=MAX_AI_LENGTH).contains(&name.len()) {
                return Err(ParseErrorKind::IllegalNumericParam {
                    name: name[..name.len().min(10)].to_string(),
                });
            }
            if raw_value.is_empty() {
                return Err(ParseErrorKind::EmptyQueryValue {
                    ai: name.to_string(),
                });
            }
            let value = percent::decode_query_value(raw_value);
            if value.is_empty() {
                return Err(ParseErrorKind::ValueTooLong {
                    ai: name.to_string(),
                });
            }
            Self::push_element(elements, name, value)?;
        }
        Ok(())
    }

    fn push_element(
        elements: &mut Vec<AiElement>,
        ai: &str,
        value: String,
    ) -> Result<(), ParseErrorKind> {
        if elements.len() >= MAX_AI_COUNT {
            return Err(ParseErrorKind::TooManyAis { max: MAX_AI_COUNT });
        }
        elements.push(AiElement::new(ai, normalize_gtin(ai, value)));
        Ok(())
    }
}

/// Characters permitted anywhere in a Digital Link URI.
const fn is_uri_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '-' | '.'
                | '_'
                | '~'
                | ':'
                | '/'
                | '?'
                | '#'
                | '['
                | ']'
                | '@'
                | '!'
                | '$'
                | '&'
                | '\''
                | '('
                | ')'
                | '*'
                | '+'
                | ','
                | ';'
                | '='
                | '%'
        )
}

/// True for a 2 to 4 digit AI code.
fn is_valid_ai(s: &str) -> bool {
    (MIN_AI_LENGTH..=MAX_AI_LENGTH).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

/// Left-pads GTIN-8/12/13 values of AI 01 to full GTIN-14 width.
fn normalize_gtin(ai: &str, value: String) -> String {
    if ai == "01" && matches!(value.chars().count(), 8 | 12 | 13) {
        format!("{value:0>14}")
    } else {
        value
    }
}

impl fmt::Display for DigitalLinkUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.uri)
    }
}

impl FromStr for DigitalLinkUri {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for DigitalLinkUri {
    fn as_ref(&self) -> &str {
        &self.uri
    }
}

impl TryFrom<&str> for DigitalLinkUri {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl PartialOrd for DigitalLinkUri {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DigitalLinkUri {
    fn cmp(&self, other: &Self) -> Ordering {
        self.uri.cmp(&other.uri)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DigitalLinkUri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.uri)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DigitalLinkUri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
