//! Core state machine types.
//!
//! This module contains the vocabulary shared by the engine and its
//! collaborators:
//! - Control states via [`MachineState`]
//! - The transition log recording every Mealy step

mod history;
mod state;

pub use history::{TransitionLog, TransitionRecord};
pub use state::MachineState;
