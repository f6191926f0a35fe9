//! The transition table as data.
//!
//! The engine implements these rows in code; the table exists so the
//! machine can be drawn and so observed steps can be checked against it.

use super::input::InputKind;
use super::output::OutputKind;
use crate::core::MachineState;

/// Which current states a rule applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateMatch {
    Any,
    Is(MachineState),
    Not(MachineState),
}

impl StateMatch {
    pub fn matches(&self, state: MachineState) -> bool {
        match self {
            Self::Any => true,
            Self::Is(expected) => *expected == state,
            Self::Not(excluded) => *excluded != state,
        }
    }

    /// Concrete states covered by this match.
    pub fn states(&self) -> impl Iterator<Item = MachineState> + '_ {
        MachineState::ALL
            .into_iter()
            .filter(move |state| self.matches(*state))
    }
}

/// Where a rule leaves the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// Stays in whatever state it was in
    Unchanged,
    To(MachineState),
}

impl Target {
    pub fn resolve(&self, from: MachineState) -> MachineState {
        match self {
            Self::Unchanged => from,
            Self::To(state) => *state,
        }
    }
}

/// One row of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionRule {
    pub from: StateMatch,
    pub input: InputKind,
    /// Human readable guard, empty when unconditional
    pub guard: &'static str,
    pub to: Target,
    pub output: OutputKind,
}

impl TransitionRule {
    /// Whether an observed step is an instance of this rule.
    pub fn covers(
        &self,
        from: MachineState,
        input: InputKind,
        to: MachineState,
        output: OutputKind,
    ) -> bool {
        self.from.matches(from)
            && self.input == input
            && self.to.resolve(from) == to
            && self.output == output
    }
}

const fn rule(
    from: StateMatch,
    input: InputKind,
    guard: &'static str,
    to: Target,
    output: OutputKind,
) -> TransitionRule {
    TransitionRule {
        from,
        input,
        guard,
        to,
        output,
    }
}

use MachineState::{AwaitingPayment, BuildingCode, Idle};
use StateMatch::{Any, Is, Not};
use Target::{To, Unchanged};

/// Every (state, input) → (state, output) row the engine implements.
pub const TRANSITION_TABLE: &[TransitionRule] = &[
    rule(Any, InputKind::Letter, "letter A-D", To(BuildingCode), OutputKind::ShowCode),
    rule(Any, InputKind::Letter, "not A-D", Unchanged, OutputKind::ShowMessage),
    rule(Is(BuildingCode), InputKind::Digit, "in stock", To(AwaitingPayment), OutputKind::ShowPrice),
    rule(Is(BuildingCode), InputKind::Digit, "code not found", To(Idle), OutputKind::ShowMessage),
    rule(Is(BuildingCode), InputKind::Digit, "out of stock", To(Idle), OutputKind::ShowMessage),
    rule(Is(BuildingCode), InputKind::Digit, "not a digit", To(Idle), OutputKind::ShowMessage),
    rule(Not(BuildingCode), InputKind::Digit, "", Unchanged, OutputKind::ShowMessage),
    rule(Is(AwaitingPayment), InputKind::InsertCoin, "accepted coin", To(AwaitingPayment), OutputKind::UpdateTotal),
    rule(Is(AwaitingPayment), InputKind::InsertCoin, "unknown coin", Unchanged, OutputKind::ShowMessage),
    rule(Not(AwaitingPayment), InputKind::InsertCoin, "", Unchanged, OutputKind::ShowMessage),
    rule(Is(AwaitingPayment), InputKind::Confirm, "credit >= price", To(Idle), OutputKind::Deliver),
    rule(Is(AwaitingPayment), InputKind::Confirm, "credit < price", Unchanged, OutputKind::ShowMessage),
    rule(Not(AwaitingPayment), InputKind::Confirm, "", Unchanged, OutputKind::ShowMessage),
    rule(Any, InputKind::Cancel, "credit > 0", To(Idle), OutputKind::ReturnChange),
    rule(Any, InputKind::Cancel, "credit = 0", To(Idle), OutputKind::ShowMessage),
];

/// First table row covering an observed step.
pub fn find_rule(
    from: MachineState,
    input: InputKind,
    to: MachineState,
    output: OutputKind,
) -> Option<&'static TransitionRule> {
    TRANSITION_TABLE
        .iter()
        .find(|rule| rule.covers(from, input, to, output))
}
