/// Separates a directive's key from its value.
pub const SEPARATOR: char = '=';


/// A single `key=value` line, split but not yet interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

/// Whitespace as the C locale's `isspace` sees it. Unlike
/// [`char::is_ascii_whitespace`] this includes the vertical tab.
pub fn is_c_space(character: char) -> bool {
    matches!(character, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// `line` without trailing [`is_c_space`] characters.
pub fn trim_trailing_space(line: &str) -> &str {
    line.trim_end_matches(is_c_space)
}

/// The line had nothing after its separator (or no separator at all).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyValue;

impl<'a> Directive<'a> {
    /// Split `line` at the first separator.
    ///
    /// The key is taken verbatim. The value loses its trailing whitespace
    /// (including the line terminator) but keeps any leading whitespace.
    pub fn split(line: &'a str) -> Result<Self, EmptyValue> {
        let (key, raw_value) = line.split_once(SEPARATOR).ok_or(EmptyValue)?;

        let value = trim_trailing_space(raw_value);
        if value.is_empty() {
            return Err(EmptyValue);
        }

        Ok(Self { key, value })
    }
}
