//! Product codes as entered on the keypad.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Row letters available on the keypad.
pub const LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Column digits available on the keypad.
pub const DIGITS: [char; 4] = ['1', '2', '3', '4'];

/// Error returned when text is not a `[A-D][1-4]` product code.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid product code '{0}': expected a letter A-D followed by a digit 1-4")]
pub struct ParseCodeError(pub String);

/// A two character product code, a row letter followed by a column digit.
///
/// The letter is normalized to upper case.
///
/// ```rust
/// use mealy_vend::catalog::ProductCode;
///
/// let code: ProductCode = "b3".parse().unwrap();
/// assert_eq!(code.to_string(), "B3");
/// assert!("E1".parse::<ProductCode>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductCode {
    letter: char,
    digit: char,
}

impl ProductCode {
    /// Build a code from its two keys, or `None` if either is off the grid.
    pub fn new(letter: char, digit: char) -> Option<Self> {
        let letter = letter.to_ascii_uppercase();
        (is_valid_letter(letter) && DIGITS.contains(&digit)).then_some(Self { letter, digit })
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn digit(&self) -> char {
        self.digit
    }
}

/// Whether `letter` selects a row, ignoring case.
pub fn is_valid_letter(letter: char) -> bool {
    LETTERS.contains(&letter.to_ascii_uppercase())
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.digit)
    }
}

impl FromStr for ProductCode {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(letter), Some(digit), None) => Self::new(letter, digit),
            _ => None,
        }
        .ok_or_else(|| ParseCodeError(s.to_string()))
    }
}

impl TryFrom<String> for ProductCode {
    type Error = ParseCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProductCode> for String {
    fn from(code: ProductCode) -> Self {
        code.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_grid_code() {
        for letter in LETTERS {
            for digit in DIGITS {
                let text = format!("{letter}{digit}");
                let code: ProductCode = text.parse().unwrap();
                assert_eq!(code.to_string(), text);
            }
        }
    }

    #[test]
    fn lower_case_letter_is_normalized() {
        let code = ProductCode::new('c', '2').unwrap();
        assert_eq!(code.letter(), 'C');
        assert_eq!(code.digit(), '2');
    }

    #[test]
    fn rejects_codes_off_the_grid() {
        for text in ["", "A", "A0", "A5", "A9", "E1", "1A", "A12", "AA"] {
            assert_eq!(
                text.parse::<ProductCode>(),
                Err(ParseCodeError(text.to_string())),
                "{text} should not parse"
            );
        }
    }

    #[test]
    fn codes_order_by_row_then_column() {
        let a4: ProductCode = "A4".parse().unwrap();
        let b1: ProductCode = "B1".parse().unwrap();
        assert!(a4 < b1);
    }

    #[test]
    fn serializes_as_text() {
        let code: ProductCode = "D4".parse().unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"D4\"");
        assert_eq!(serde_json::from_str::<ProductCode>("\"d4\"").unwrap(), code);
        assert!(serde_json::from_str::<ProductCode>("\"Z9\"").is_err());
    }
}
