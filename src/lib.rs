//! Mealy Vend: a vending machine modeled as a pure Mealy state machine
//!
//! The engine consumes one input at a time (a letter, a digit, a coin,
//! confirm or cancel) and returns exactly one output describing what the
//! display or the dispenser should do. It owns no I/O: rendering is left to
//! whoever drives it, such as the `vend` binary in this crate.
//!
//! # Core Concepts
//!
//! - **Catalog**: products keyed by a two-character code (`A1` to `D4`)
//! - **State**: three control states via [`MachineState`]
//! - **Engine**: [`VendingMachine`] applies the transition table
//! - **History**: every step is recorded in a [`TransitionLog`]
//!
//! # Example
//!
//! ```rust
//! use mealy_vend::{Catalog, Input, MachineState, Output, VendingMachine};
//!
//! let mut machine = VendingMachine::new(Catalog::standard());
//!
//! assert_eq!(machine.process_input(Input::Letter('A')), Output::ShowCode("A".into()));
//! assert_eq!(
//!     machine.process_input(Input::Digit('1')),
//!     Output::ShowPrice { name: "Agua Ciel".into(), price: 12 }
//! );
//! assert_eq!(machine.process_input(Input::InsertCoin(20)), Output::UpdateTotal(20));
//! assert_eq!(
//!     machine.process_input(Input::Confirm),
//!     Output::Deliver { name: "Agua Ciel".into(), price: 12, change: 8 }
//! );
//! assert_eq!(machine.state(), MachineState::Idle);
//! ```

pub mod builder;
pub mod catalog;
pub mod config;
pub mod core;
pub mod logging;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, CatalogBuilder};
pub use catalog::{Catalog, Product, ProductCode};
pub use config::{Config, ConfigError};
pub use core::{MachineState, TransitionLog, TransitionRecord};
pub use machine::{Input, Notice, Output, Rejection, VendingMachine};
