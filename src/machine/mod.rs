//! The vending machine as a Mealy machine.
//!
//! Every input produces exactly one output, computed from the current state
//! and the input together.
//!
//! # Key Concepts
//!
//! - **Inputs**: the closed set of key presses and coins in [`Input`]
//! - **Outputs**: the closed set of collaborator instructions in [`Output`]
//! - **Engine**: [`VendingMachine`] owns the catalog and the session
//! - **Table**: [`rules::TRANSITION_TABLE`] describes every step as data

pub mod diagram;
mod engine;
mod error;
mod input;
mod output;
pub mod rules;

pub use diagram::Diagram;
pub use engine::{Selection, VendingMachine};
pub use error::{Notice, Rejection, RejectionKind};
pub use input::{is_accepted_denomination, Input, InputKind, ParseInputError, DENOMINATIONS};
pub use output::{Output, OutputKind};
pub use rules::{find_rule, TransitionRule, TRANSITION_TABLE};
