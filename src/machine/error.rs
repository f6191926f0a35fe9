//! Refusals the engine reports back to the collaborator.
//!
//! None of these are fatal: each one becomes a `ShowMessage` output and the
//! machine keeps running. Catalog invariant violations are not in here; they
//! are [`CatalogError`](crate::catalog::CatalogError)s and abort the process.

use crate::catalog::ProductCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Why an input was refused.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    #[error("invalid letter")]
    InvalidLetter(char),

    #[error("invalid digit")]
    InvalidDigit(char),

    #[error("invalid coin")]
    InvalidCoin(u32),

    #[error("select a letter first")]
    SelectLetterFirst,

    #[error("select a product first")]
    SelectProductFirst,

    #[error("no transaction in progress")]
    NoTransaction,

    /// The entered code has no product slot
    #[error("code not found")]
    CodeNotFound(String),

    #[error("out of stock")]
    OutOfStock(ProductCode),

    #[error("missing ${shortfall}")]
    InsufficientCredit { shortfall: u32 },
}

/// Broad class of a [`Rejection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionKind {
    /// Malformed or out-of-sequence key or coin
    InvalidInput,
    /// Unknown code or sold-out product; the selection is reset
    ProductUnavailable,
    /// Not enough credit yet; the transaction stays open
    InsufficientCredit,
}

impl Rejection {
    pub fn kind(&self) -> RejectionKind {
        match self {
            Self::InvalidLetter(_)
            | Self::InvalidDigit(_)
            | Self::InvalidCoin(_)
            | Self::SelectLetterFirst
            | Self::SelectProductFirst
            | Self::NoTransaction => RejectionKind::InvalidInput,
            Self::CodeNotFound(_) | Self::OutOfStock(_) => RejectionKind::ProductUnavailable,
            Self::InsufficientCredit { .. } => RejectionKind::InsufficientCredit,
        }
    }
}

/// Payload of a `ShowMessage` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "notice", content = "reason", rename_all = "snake_case")]
pub enum Notice {
    Rejected(Rejection),
    /// Cancel pressed with no credit to return
    Cancelled,
}

impl Notice {
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Rejected(rejection) => Some(rejection),
            Self::Cancelled => None,
        }
    }
}

impl From<Rejection> for Notice {
    fn from(rejection: Rejection) -> Self {
        Self::Rejected(rejection)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(rejection) => fmt::Display::fmt(rejection, f),
            Self::Cancelled => f.write_str("operation cancelled"),
        }
    }
}
