//! Property-based tests for the vending machine engine.
//!
//! These tests use proptest to drive the machine with random keypad
//! sequences and check that its invariants hold after every step.

use mealy_vend::catalog::{Catalog, DIGITS};
use mealy_vend::core::MachineState;
use mealy_vend::machine::{find_rule, Input, Output, VendingMachine};
use proptest::prelude::*;

fn arbitrary_letter() -> impl Strategy<Value = char> {
    prop_oneof![
        8 => prop::sample::select(vec!['A', 'B', 'C', 'D', 'a', 'd']),
        1 => prop::sample::select(vec!['E', 'z', 'Q']),
    ]
}

fn arbitrary_digit() -> impl Strategy<Value = char> {
    prop_oneof![
        8 => prop::sample::select(vec!['1', '2', '3', '4']),
        1 => prop::sample::select(vec!['0', '9', 'x', '#']),
    ]
}

fn arbitrary_coin() -> impl Strategy<Value = u32> {
    prop_oneof![
        8 => prop::sample::select(vec![1u32, 5, 10, 20]),
        1 => prop::sample::select(vec![0u32, 2, 3, 50]),
    ]
}

prop_compose! {
    fn arbitrary_input()(
        variant in 0..10u8,
        letter in arbitrary_letter(),
        digit in arbitrary_digit(),
        coin in arbitrary_coin(),
    ) -> Input {
        match variant {
            0 | 1 => Input::Letter(letter),
            2 | 3 => Input::Digit(digit),
            4..=6 => Input::InsertCoin(coin),
            7 | 8 => Input::Confirm,
            _ => Input::Cancel,
        }
    }
}

fn small_catalog() -> Catalog {
    mealy_vend::catalog! {
        A1 => "Water", 12, 2;
        B2 => "Chips", 20, 1;
        C3 => "Gum", 5, 0;
        D4 => "Bar", 17, 3;
    }
    .unwrap()
}

proptest! {
    #[test]
    fn session_data_matches_state(inputs in prop::collection::vec(arbitrary_input(), 0..120)) {
        let mut machine = VendingMachine::new(Catalog::standard());

        for input in inputs {
            machine.process_input(input);
            let state = machine.state();

            prop_assert_eq!(machine.code_buffer().is_some(), state == MachineState::BuildingCode);
            prop_assert_eq!(machine.selected_code().is_some(), state == MachineState::AwaitingPayment);
            prop_assert_eq!(machine.selected_product().is_some(), machine.selected_code().is_some());
        }
    }

    #[test]
    fn credit_moves_only_with_money_outputs(inputs in prop::collection::vec(arbitrary_input(), 0..150)) {
        let mut machine = VendingMachine::new(Catalog::standard());

        for input in inputs {
            let before = machine.credit();
            let output = machine.process_input(input);

            match output {
                Output::UpdateTotal(total) => prop_assert_eq!(machine.credit(), total),
                Output::Deliver { .. } | Output::ReturnChange(_) => {
                    prop_assert_eq!(machine.credit(), 0);
                    prop_assert_eq!(machine.state(), MachineState::Idle);
                }
                _ => prop_assert_eq!(machine.credit(), before),
            }
        }
    }

    #[test]
    fn any_non_grid_digit_after_letter_resets(
        letter in prop::sample::select(vec!['A', 'B', 'C', 'D', 'b', 'c']),
        digit in any::<char>(),
    ) {
        prop_assume!(!DIGITS.contains(&digit));
        let mut machine = VendingMachine::new(Catalog::standard());
        machine.process_input(Input::Letter(letter));

        let output = machine.process_input(Input::Digit(digit));

        prop_assert!(output.message().is_some());
        prop_assert!(output.rejection().is_some());
        prop_assert_eq!(machine.state(), MachineState::Idle);
        prop_assert_eq!(machine.code_buffer(), None);
        prop_assert_eq!(machine.selected_code(), None);
    }

    #[test]
    fn stock_only_falls_by_deliveries(inputs in prop::collection::vec(arbitrary_input(), 0..200)) {
        let mut machine = VendingMachine::new(small_catalog());
        let initial = machine.catalog().total_stock();
        let mut delivered = 0u64;
        let mut previous = initial;

        for input in inputs {
            if let Output::Deliver { .. } = machine.process_input(input) {
                delivered += 1;
            }
            let now = machine.catalog().total_stock();
            prop_assert!(now <= previous);
            previous = now;
        }

        prop_assert_eq!(initial - previous, delivered);
    }

    #[test]
    fn money_is_conserved(inputs in prop::collection::vec(arbitrary_input(), 0..200)) {
        let mut machine = VendingMachine::new(small_catalog());
        let mut inserted = 0u64;
        let mut paid_out = 0u64;

        for input in inputs {
            let credit_before = machine.credit();
            let output = machine.process_input(input);

            match output {
                Output::UpdateTotal(total) => {
                    inserted += u64::from(total - credit_before);
                }
                Output::Deliver { price, change, .. } => {
                    prop_assert_eq!(credit_before, price + change);
                    paid_out += u64::from(price) + u64::from(change);
                }
                Output::ReturnChange(amount) => {
                    prop_assert_eq!(amount, credit_before);
                    paid_out += u64::from(amount);
                }
                _ => {}
            }
        }

        prop_assert_eq!(inserted, paid_out + u64::from(machine.credit()));
    }

    #[test]
    fn every_step_matches_a_rule(inputs in prop::collection::vec(arbitrary_input(), 1..120)) {
        let mut machine = VendingMachine::new(small_catalog());
        for input in inputs {
            machine.process_input(input);
        }

        for record in machine.log().records() {
            let rule = find_rule(record.from, record.input.kind(), record.to, record.output.kind());
            prop_assert!(
                rule.is_some(),
                "no rule for {} --{}--> {} / {}",
                record.from.name(),
                record.input,
                record.to.name(),
                record.output.kind().label()
            );
        }
    }

    #[test]
    fn cancel_always_returns_to_idle(inputs in prop::collection::vec(arbitrary_input(), 0..60)) {
        let mut machine = VendingMachine::new(Catalog::standard());
        for input in inputs {
            machine.process_input(input);
        }

        machine.process_input(Input::Cancel);

        prop_assert_eq!(machine.state(), MachineState::Idle);
        prop_assert_eq!(machine.credit(), 0);
        prop_assert!(machine.state().is_initial());
    }

    #[test]
    fn coins_without_selection_are_refused(coins in prop::collection::vec(arbitrary_coin(), 1..20)) {
        let mut machine = VendingMachine::new(Catalog::standard());

        for coin in coins {
            let output = machine.process_input(Input::InsertCoin(coin));
            prop_assert!(output.rejection().is_some());
            prop_assert_eq!(machine.state(), MachineState::Idle);
            prop_assert_eq!(machine.credit(), 0);
        }
    }

    #[test]
    fn log_path_follows_states(inputs in prop::collection::vec(arbitrary_input(), 1..80)) {
        let mut machine = VendingMachine::new(Catalog::standard());
        let mut states = vec![machine.state()];

        for input in inputs {
            machine.process_input(input);
            states.push(machine.state());
        }

        prop_assert_eq!(machine.log().get_path(), states);
    }
}
