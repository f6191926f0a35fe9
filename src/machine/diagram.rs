//! Graphviz export of the transition table.
//!
//! Produces DOT text only; turning it into an image is up to the caller
//! (`dot -Tpng`).

use super::output::OutputKind;
use super::rules::{TransitionRule, TRANSITION_TABLE};
use crate::core::MachineState;
use std::fmt::Write;

/// Options for rendering the state graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Diagram {
    include_messages: bool,
}

impl Default for Diagram {
    fn default() -> Self {
        Self::new()
    }
}

impl Diagram {
    /// A diagram of every table row.
    pub fn new() -> Self {
        Self {
            include_messages: true,
        }
    }

    /// Leave out rows whose output is `SHOW_MESSAGE`, keeping only the
    /// purchase flow.
    pub fn without_messages(mut self) -> Self {
        self.include_messages = false;
        self
    }

    fn shows(&self, rule: &TransitionRule) -> bool {
        self.include_messages || rule.output != OutputKind::ShowMessage
    }

    /// Render as a DOT digraph, one edge per (rule, source state). The
    /// initial state is drawn as a double circle.
    ///
    /// ```rust
    /// use mealy_vend::machine::Diagram;
    ///
    /// let dot = Diagram::new().without_messages().to_dot();
    /// assert!(dot.starts_with("digraph vending_machine {"));
    /// assert!(dot.contains("AwaitingPayment -> Idle [label=\"CONFIRM [credit >= price] / DELIVER\"]"));
    /// ```
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph vending_machine {\n");
        dot.push_str("    rankdir=LR;\n");
        dot.push_str("    node [shape=circle, style=filled];\n");

        for state in MachineState::ALL {
            let shape = if state.is_initial() {
                ", shape=doublecircle"
            } else {
                ""
            };
            let _ = writeln!(
                dot,
                "    {} [fillcolor={}{}];",
                state.name(),
                fill_color(state),
                shape
            );
        }

        for rule in TRANSITION_TABLE.iter().filter(|rule| self.shows(rule)) {
            for from in rule.from.states() {
                let to = rule.to.resolve(from);
                let style = if rule.output == OutputKind::ShowMessage {
                    ", style=dashed"
                } else {
                    ""
                };
                let _ = writeln!(
                    dot,
                    "    {} -> {} [label=\"{}\"{}];",
                    from.name(),
                    to.name(),
                    edge_label(rule),
                    style
                );
            }
        }

        dot.push_str("}\n");
        dot
    }
}

fn fill_color(state: MachineState) -> &'static str {
    match state {
        MachineState::Idle => "lightblue",
        MachineState::BuildingCode => "lightgreen",
        MachineState::AwaitingPayment => "yellow",
    }
}

fn edge_label(rule: &TransitionRule) -> String {
    if rule.guard.is_empty() {
        format!("{} / {}", rule.input.label(), rule.output.label())
    } else {
        format!(
            "{} [{}] / {}",
            rule.input.label(),
            rule.guard,
            rule.output.label()
        )
    }
}
