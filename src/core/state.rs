//! The vending machine's control states.
//!
//! States are plain data: inspecting one never has side effects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Control state of the vending machine.
///
/// Dispensing is an atomic step of the `Confirm` transition, so there is no
/// separate delivering or finished state: a successful purchase lands back
/// in [`MachineState::Idle`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum MachineState {
    /// Waiting for a letter.
    Idle,
    /// A letter was entered, waiting for the digit.
    BuildingCode,
    /// A product is selected; coins are accepted until confirm or cancel.
    AwaitingPayment,
}

impl MachineState {
    /// Every control state, in the order a purchase visits them.
    pub const ALL: [MachineState; 3] = [
        MachineState::Idle,
        MachineState::BuildingCode,
        MachineState::AwaitingPayment,
    ];

    /// Stable, human readable name of the state.
    ///
    /// ```rust
    /// use mealy_vend::core::MachineState;
    ///
    /// assert_eq!(MachineState::AwaitingPayment.name(), "AwaitingPayment");
    /// assert!(MachineState::Idle.is_initial());
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::BuildingCode => "BuildingCode",
            Self::AwaitingPayment => "AwaitingPayment",
        }
    }

    /// Whether this is the state the machine starts in and rests in between
    /// transactions.
    pub fn is_initial(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

impl fmt::Display for MachineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
