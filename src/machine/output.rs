//! Outputs emitted to the collaborator, one per processed input.

use super::error::{Notice, Rejection};
use serde::{Deserialize, Serialize};

/// What the collaborator should render after a step.
///
/// The set is closed: a collaborator handles it with one exhaustive `match`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum Output {
    /// Partial or complete code typed so far
    ShowCode(String),

    /// A product was just selected
    ShowPrice { name: String, price: u32 },

    /// Running credit for the current selection
    UpdateTotal(u32),

    /// Product dispensed; catalog-derived displays (stock) are stale
    Deliver {
        name: String,
        price: u32,
        change: u32,
    },

    /// Transaction cancelled, credit refunded
    ReturnChange(u32),

    /// Transient informational or error text
    ShowMessage(Notice),
}

/// Output discriminant, used by the transition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputKind {
    ShowCode,
    ShowPrice,
    UpdateTotal,
    Deliver,
    ReturnChange,
    ShowMessage,
}

impl Output {
    pub fn kind(&self) -> OutputKind {
        match self {
            Self::ShowCode(_) => OutputKind::ShowCode,
            Self::ShowPrice { .. } => OutputKind::ShowPrice,
            Self::UpdateTotal(_) => OutputKind::UpdateTotal,
            Self::Deliver { .. } => OutputKind::Deliver,
            Self::ReturnChange(_) => OutputKind::ReturnChange,
            Self::ShowMessage(_) => OutputKind::ShowMessage,
        }
    }

    /// The refusal carried by a `ShowMessage`, if any.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::ShowMessage(notice) => notice.rejection(),
            _ => None,
        }
    }

    /// Text of a `ShowMessage`, if this is one.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::ShowMessage(notice) => Some(notice.to_string()),
            _ => None,
        }
    }
}

impl From<Rejection> for Output {
    fn from(rejection: Rejection) -> Self {
        Self::ShowMessage(Notice::Rejected(rejection))
    }
}

impl OutputKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ShowCode => "SHOW_CODE",
            Self::ShowPrice => "SHOW_PRICE",
            Self::UpdateTotal => "UPDATE_TOTAL",
            Self::Deliver => "DELIVER",
            Self::ReturnChange => "RETURN_CHANGE",
            Self::ShowMessage => "SHOW_MESSAGE",
        }
    }
}
