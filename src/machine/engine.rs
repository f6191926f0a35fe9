//! The transition engine.

use super::error::{Notice, Rejection};
use super::input::{is_accepted_denomination, Input};
use super::output::Output;
use crate::catalog::{is_valid_letter, Catalog, ProductCode};
use crate::core::{MachineState, TransitionLog, TransitionRecord};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Immutable copy of the selected product, taken when the digit is entered.
///
/// Later catalog changes do not show up here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub code: ProductCode,
    pub name: String,
    pub price: u32,
}

/// Per-state data. A letter exists only while building a code; a selection
/// exists only while awaiting payment.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Session {
    Idle,
    BuildingCode { letter: char },
    AwaitingPayment { selection: Selection },
}

/// Mealy machine driving the vending machine.
///
/// Each call to [`process_input`](Self::process_input) consumes one input,
/// updates the session and possibly the catalog, and returns exactly one
/// [`Output`].
///
/// # Example
///
/// ```rust
/// use mealy_vend::catalog::Catalog;
/// use mealy_vend::core::MachineState;
/// use mealy_vend::machine::{Input, Output, VendingMachine};
///
/// let mut machine = VendingMachine::new(Catalog::standard());
///
/// machine.process_input(Input::Letter('D'));
/// machine.process_input(Input::Digit('3'));
/// machine.process_input(Input::InsertCoin(20));
///
/// let output = machine.process_input(Input::Confirm);
/// assert_eq!(
///     output,
///     Output::Deliver { name: "Bubulubu".to_string(), price: 10, change: 10 }
/// );
/// assert_eq!(machine.state(), MachineState::Idle);
/// ```
#[derive(Clone, Debug)]
pub struct VendingMachine {
    catalog: Catalog,
    session: Session,
    /// Money inserted and not yet spent or refunded. Survives a change of
    /// selection; only a delivery or a cancel clears it.
    credit: u32,
    log: TransitionLog,
}

impl VendingMachine {
    /// Create a machine in `Idle` that owns `catalog`, with an unbounded log.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_log(catalog, TransitionLog::new())
    }

    /// Create a machine that records steps into `log`.
    pub fn with_log(catalog: Catalog, log: TransitionLog) -> Self {
        Self {
            catalog,
            session: Session::Idle,
            credit: 0,
            log,
        }
    }

    /// Current control state (pure)
    pub fn state(&self) -> MachineState {
        match self.session {
            Session::Idle => MachineState::Idle,
            Session::BuildingCode { .. } => MachineState::BuildingCode,
            Session::AwaitingPayment { .. } => MachineState::AwaitingPayment,
        }
    }

    /// Letter typed so far, only while building a code
    pub fn code_buffer(&self) -> Option<char> {
        match self.session {
            Session::BuildingCode { letter } => Some(letter),
            _ => None,
        }
    }

    pub fn selected_code(&self) -> Option<ProductCode> {
        self.selected_product().map(|selection| selection.code)
    }

    /// Snapshot of the selected product, only while awaiting payment
    pub fn selected_product(&self) -> Option<&Selection> {
        match &self.session {
            Session::AwaitingPayment { selection, .. } => Some(selection),
            _ => None,
        }
    }

    /// Credit inserted and not yet spent or refunded
    pub fn credit(&self) -> u32 {
        self.credit
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Steps processed so far
    pub fn log(&self) -> &TransitionLog {
        &self.log
    }

    /// Hand the catalog back, ending the machine.
    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }

    /// Consume one input and return the single output it produces.
    ///
    /// # Panics
    ///
    /// Panics if the catalog refuses a dispense the engine has already
    /// guarded, which means the catalog was corrupted behind its back.
    pub fn process_input(&mut self, input: Input) -> Output {
        let from = self.state();

        let output = match input {
            Input::Letter(letter) => self.enter_letter(letter),
            Input::Digit(digit) => self.enter_digit(digit),
            Input::InsertCoin(amount) => self.insert_coin(amount),
            Input::Confirm => self.confirm(),
            Input::Cancel => self.cancel(),
        };

        let to = self.state();
        debug!(%from, %to, %input, output = output.kind().label(), "processed input");

        self.log.record(TransitionRecord {
            from,
            to,
            input,
            output: output.clone(),
            timestamp: Utc::now(),
        });

        output
    }

    fn enter_letter(&mut self, letter: char) -> Output {
        if !is_valid_letter(letter) {
            return rejected(Rejection::InvalidLetter(letter));
        }

        let letter = letter.to_ascii_uppercase();
        self.session = Session::BuildingCode { letter };
        Output::ShowCode(letter.to_string())
    }

    fn enter_digit(&mut self, digit: char) -> Output {
        let Session::BuildingCode { letter } = self.session else {
            return rejected(Rejection::SelectLetterFirst);
        };

        // Every outcome below either completes the code or abandons it.
        self.session = Session::Idle;

        if !digit.is_ascii_digit() {
            return rejected(Rejection::InvalidDigit(digit));
        }

        let product = ProductCode::new(letter, digit).and_then(|code| self.catalog.lookup(&code));
        let Some(product) = product else {
            return rejected(Rejection::CodeNotFound(format!("{letter}{digit}")));
        };

        if !product.in_stock() {
            return rejected(Rejection::OutOfStock(product.code));
        }

        let selection = Selection {
            code: product.code,
            name: product.name.clone(),
            price: product.price,
        };
        let output = Output::ShowPrice {
            name: selection.name.clone(),
            price: selection.price,
        };

        self.session = Session::AwaitingPayment { selection };
        output
    }

    fn insert_coin(&mut self, amount: u32) -> Output {
        if !matches!(self.session, Session::AwaitingPayment { .. }) {
            return rejected(Rejection::SelectProductFirst);
        }

        if !is_accepted_denomination(amount) {
            return rejected(Rejection::InvalidCoin(amount));
        }

        let Some(total) = self.credit.checked_add(amount) else {
            return rejected(Rejection::InvalidCoin(amount));
        };

        self.credit = total;
        Output::UpdateTotal(total)
    }

    fn confirm(&mut self) -> Output {
        let Session::AwaitingPayment { selection } = &self.session else {
            return rejected(Rejection::NoTransaction);
        };

        let Some(change) = self.credit.checked_sub(selection.price) else {
            return rejected(Rejection::InsufficientCredit {
                shortfall: selection.price - self.credit,
            });
        };

        let remaining = self
            .catalog
            .decrement_stock(&selection.code)
            .unwrap_or_else(|err| panic!("dispense of a guarded selection failed: {err}"));

        info!(
            code = %selection.code,
            price = selection.price,
            change,
            remaining,
            "dispensed product"
        );

        let output = Output::Deliver {
            name: selection.name.clone(),
            price: selection.price,
            change,
        };
        self.session = Session::Idle;
        self.credit = 0;
        output
    }

    fn cancel(&mut self) -> Output {
        let refund = std::mem::take(&mut self.credit);
        self.session = Session::Idle;

        if refund > 0 {
            info!(refund, "returned credit");
            Output::ReturnChange(refund)
        } else {
            Output::ShowMessage(Notice::Cancelled)
        }
    }
}

fn rejected(rejection: Rejection) -> Output {
    debug!(%rejection, kind = ?rejection.kind(), "input rejected");
    Output::from(rejection)
}
