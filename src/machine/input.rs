//! Keypad and coin-slot inputs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Coin denominations the slot accepts.
pub const DENOMINATIONS: [u32; 4] = [1, 5, 10, 20];

/// Whether the coin slot accepts `amount`.
pub fn is_accepted_denomination(amount: u32) -> bool {
    DENOMINATIONS.contains(&amount)
}

/// A single event sent to the machine by its collaborator.
///
/// Values are carried raw; the engine decides whether they are valid in the
/// current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Input {
    Letter(char),
    Digit(char),
    InsertCoin(u32),
    Confirm,
    Cancel,
}

/// Input discriminant, used by the transition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputKind {
    Letter,
    Digit,
    InsertCoin,
    Confirm,
    Cancel,
}

impl Input {
    pub fn kind(&self) -> InputKind {
        match self {
            Self::Letter(_) => InputKind::Letter,
            Self::Digit(_) => InputKind::Digit,
            Self::InsertCoin(_) => InputKind::InsertCoin,
            Self::Confirm => InputKind::Confirm,
            Self::Cancel => InputKind::Cancel,
        }
    }
}

impl InputKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Letter => "LETTER",
            Self::Digit => "DIGIT",
            Self::InsertCoin => "INSERT_COIN",
            Self::Confirm => "CONFIRM",
            Self::Cancel => "CANCEL",
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(letter) => write!(f, "{} '{letter}'", self.kind().label()),
            Self::Digit(digit) => write!(f, "{} '{digit}'", self.kind().label()),
            Self::InsertCoin(amount) => write!(f, "{} ${amount}", self.kind().label()),
            Self::Confirm | Self::Cancel => f.write_str(self.kind().label()),
        }
    }
}

/// Error returned when keypad text cannot be read as an input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognized input '{0}'")]
pub struct ParseInputError(pub String);

/// Parses one keypad token.
///
/// Accepted forms, case-insensitive:
/// - a single letter (`A`) or decimal digit (`1`)
/// - `letter X` / `digit X` to send any character
/// - `$N` or `coin N` for a coin
/// - `ok` / `confirm` and `cancel`
///
/// ```rust
/// use mealy_vend::machine::Input;
///
/// assert_eq!("a".parse(), Ok(Input::Letter('a')));
/// assert_eq!("$10".parse(), Ok(Input::InsertCoin(10)));
/// assert_eq!("coin 5".parse(), Ok(Input::InsertCoin(5)));
/// assert_eq!("OK".parse(), Ok(Input::Confirm));
/// assert!("".parse::<Input>().is_err());
/// ```
impl FromStr for Input {
    type Err = ParseInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let err = || ParseInputError(token.to_string());
        let lower = token.to_ascii_lowercase();

        match lower.as_str() {
            "ok" | "confirm" => return Ok(Self::Confirm),
            "cancel" => return Ok(Self::Cancel),
            _ => {}
        }

        if let Some(amount) = lower.strip_prefix('$') {
            return amount.trim().parse().map(Self::InsertCoin).map_err(|_| err());
        }

        if let Some((command, value)) = token.split_once(char::is_whitespace) {
            let value = value.trim();
            return match command.to_ascii_lowercase().as_str() {
                "coin" => value.parse().map(Self::InsertCoin).map_err(|_| err()),
                "letter" => single_char(value).map(Self::Letter).ok_or_else(err),
                "digit" => single_char(value).map(Self::Digit).ok_or_else(err),
                _ => Err(err()),
            };
        }

        match single_char(token) {
            Some(c) if c.is_alphabetic() => Ok(Self::Letter(c)),
            Some(c) if c.is_ascii_digit() => Ok(Self::Digit(c)),
            _ => Err(err()),
        }
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
