//! Element string and JSON writers.
//!
//! Three renditions of the extracted AI data: the machine-oriented
//! unbracketed element string, the human-readable bracketed form, and a
//! flat JSON object. Each can reorder output so that fixed-length AIs
//! come first, a stable two-way partition of the extraction order.

use crate::element::AiElement;
use crate::uri::DigitalLinkUri;

impl DigitalLinkUri {
    /// Writes the unbracketed element string: a leading `^`, then each
    /// element's AI and value, with a `^` after every element that needs
    /// an FNC1 separator (or after every element when `extra_fnc1` is
    /// set). A single trailing separator is stripped.
    ///
    /// With `fixed_first`, elements whose AI has a fixed-length prefix
    /// come first; both groups keep extraction order.
    ///
    /// # Examples
    ///
    /// ```
    /// use digital_link::DigitalLinkUri;
    ///
    /// let dl = DigitalLinkUri::parse("https://id.gs1.org/01/09520123456788/10/ABC1/21/12345?17=180426").unwrap();
    /// assert_eq!(
    ///     dl.to_unbracketed(false, false),
    ///     "^010952012345678810ABC1^2112345^17180426"
    /// );
    /// assert_eq!(
    ///     dl.to_unbracketed(true, false),
    ///     "^01095201234567881718042610ABC1^2112345"
    /// );
    /// ```
    #[must_use]
    pub fn to_unbracketed(&self, fixed_first: bool, extra_fnc1: bool) -> String {
        let mut out = String::with_capacity(
            self.elements()
                .iter()
                .map(|e| e.ai().len() + e.value().len() + 1)
                .sum::<usize>()
                + 1,
        );
        out.push('^');
        for element in self.ordered_elements(fixed_first) {
            out.push_str(element.ai());
            out.push_str(element.value());
            if extra_fnc1 || element.fnc1_required() {
                out.push('^');
            }
        }
        if out.ends_with('^') {
            out.pop();
        }
        out
    }

    /// Writes the bracketed element string: `(AI)` then the value for
    /// each element, with every `(` in a value escaped as `\(`. No
    /// separators; `)` is not escaped.
    ///
    /// # Examples
    ///
    /// ```
    /// use digital_link::DigitalLinkUri;
    ///
    /// let dl = DigitalLinkUri::parse("https://id.gs1.org/01/09520123456788/10/ABC1/21/12345?17=180426").unwrap();
    /// assert_eq!(
    ///     dl.to_bracketed(false),
    ///     "(01)09520123456788(10)ABC1(21)12345(17)180426"
    /// );
    /// assert_eq!(
    ///     dl.to_bracketed(true),
    ///     "(01)09520123456788(17)180426(10)ABC1(21)12345"
    /// );
    /// ```
    #[must_use]
    pub fn to_bracketed(&self, fixed_first: bool) -> String {
        let mut out = String::with_capacity(
            self.elements()
                .iter()
                .map(|e| e.ai().len() + e.value().len() + 2)
                .sum(),
        );
        for element in self.ordered_elements(fixed_first) {
            out.push('(');
            out.push_str(element.ai());
            out.push(')');
            for c in element.value().chars() {
                if c == '(' {
                    out.push('\\');
                }
                out.push(c);
            }
        }
        out
    }

    /// Writes the AI data as a flat JSON object: AI codes as keys, values
    /// as strings, both with `\` and `"` escaped. Keys appear in the
    /// chosen order; duplicate AIs produce duplicate keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use digital_link::DigitalLinkUri;
    ///
    /// let dl = DigitalLinkUri::parse("https://id.gs1.org/01/09520123456788/10/ABC1/21/12345?17=180426").unwrap();
    /// assert_eq!(
    ///     dl.to_json(false),
    ///     r#"{"01":"09520123456788","10":"ABC1","21":"12345","17":"180426"}"#
    /// );
    /// ```
    #[must_use]
    pub fn to_json(&self, fixed_first: bool) -> String {
        let mut out = String::with_capacity(
            self.elements()
                .iter()
                .map(|e| e.ai().len() + e.value().len() + 6)
                .sum::<usize>()
                + 2,
        );
        out.push('{');
        for element in self.ordered_elements(fixed_first) {
            out.push('"');
            push_json_escaped(&mut out, element.ai());
            out.push_str("\":\"");
            push_json_escaped(&mut out, element.value());
            out.push_str("\",");
        }
        // Gobble the trailing comma
        out.pop();
        out.push('}');
        out
    }

    /// Iterates elements in output order: extraction order, or, with
    /// `fixed_first`, a stable partition with fixed-length AIs ahead of
    /// separator-requiring ones.
    fn ordered_elements(&self, fixed_first: bool) -> impl Iterator<Item = &AiElement> {
        let fixed = self
            .elements()
            .iter()
            .filter(move |e| !fixed_first || !e.fnc1_required());
        let variable = self
            .elements()
            .iter()
            .filter(move |e| fixed_first && e.fnc1_required());
        fixed.chain(variable)
    }
}

/// Appends `s` with `\` and `"` escaped by a preceding backslash.
fn push_json_escaped(out: &mut String, s: &str) {
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
}
