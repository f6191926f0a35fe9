//! Transition log.
//!
//! Keeps an ordered record of every step the machine has taken: the state
//! it left, the input that drove it, the output it emitted and the state it
//! landed in.

use super::state::MachineState;
use crate::machine::{Input, Output};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single Mealy step.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use mealy_vend::core::{MachineState, TransitionRecord};
/// use mealy_vend::machine::{Input, Output};
///
/// let record = TransitionRecord {
///     from: MachineState::Idle,
///     to: MachineState::BuildingCode,
///     input: Input::Letter('A'),
///     output: Output::ShowCode("A".to_string()),
///     timestamp: Utc::now(),
/// };
/// assert!(record.changed_state());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state being transitioned from
    pub from: MachineState,
    /// The state being transitioned to
    pub to: MachineState,
    /// Input consumed by the step
    pub input: Input,
    /// Output emitted by the step
    pub output: Output,
    /// When the step was processed
    pub timestamp: DateTime<Utc>,
}

impl TransitionRecord {
    /// Whether the step moved the machine to a different control state.
    pub fn changed_state(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered log of transitions, optionally bounded.
///
/// When a capacity is set, recording past it drops the oldest records.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use mealy_vend::core::{MachineState, TransitionLog, TransitionRecord};
/// use mealy_vend::machine::{Input, Output};
///
/// let mut log = TransitionLog::new();
/// log.record(TransitionRecord {
///     from: MachineState::Idle,
///     to: MachineState::BuildingCode,
///     input: Input::Letter('B'),
///     output: Output::ShowCode("B".to_string()),
///     timestamp: Utc::now(),
/// });
///
/// let path = log.get_path();
/// assert_eq!(path, vec![MachineState::Idle, MachineState::BuildingCode]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransitionLog {
    records: VecDeque<TransitionRecord>,
    capacity: Option<usize>,
}

impl TransitionLog {
    /// Create a new, unbounded, empty log.
    pub fn new() -> Self {
        Self {
            records: VecDeque::new(),
            capacity: None,
        }
    }

    /// Create an empty log that keeps at most `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    /// Maximum number of records kept, if bounded.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Append a record, evicting the oldest one when full.
    pub fn record(&mut self, record: TransitionRecord) {
        if let Some(capacity) = self.capacity {
            if capacity == 0 {
                return;
            }
            while self.records.len() >= capacity {
                self.records.pop_front();
            }
        }
        self.records.push_back(record);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained record followed by
    /// the `to` state of each record.
    pub fn get_path(&self) -> Vec<MachineState> {
        let mut path = Vec::with_capacity(self.records.len() + 1);

        if let Some(first) = self.records.front() {
            path.push(first.from);
        }

        path.extend(self.records.iter().map(|r| r.to));
        path
    }

    /// Time elapsed between the oldest and newest retained records.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.front(), self.records.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Retained records, oldest first.
    pub fn records(&self) -> impl ExactSizeIterator<Item = &TransitionRecord> + '_ {
        self.records.iter()
    }

    /// Most recent record.
    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.back()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
