mod test_helpers;

use mealy_vend::catalog::{Catalog, ProductCode};
use mealy_vend::core::MachineState::{self, AwaitingPayment, BuildingCode, Idle};
use mealy_vend::machine::{Input, Notice, Output, Rejection, VendingMachine};
use test_helpers::{last_output, run_inputs};

use Input::{Cancel, Confirm, Digit, InsertCoin, Letter};

fn show_code(code: &str) -> Output {
    Output::ShowCode(code.to_string())
}

fn show_price(name: &str, price: u32) -> Output {
    Output::ShowPrice {
        name: name.to_string(),
        price,
    }
}

fn deliver(name: &str, price: u32, change: u32) -> Output {
    Output::Deliver {
        name: name.to_string(),
        price,
        change,
    }
}

fn code(text: &str) -> ProductCode {
    text.parse().unwrap()
}

mod purchase_scenarios {
    use super::*;
    use test_case::test_case;

    #[test_case(
        vec![Letter('A'), Digit('1')],
        vec![show_code("A"), show_price("Agua Ciel", 12)],
        vec![BuildingCode, AwaitingPayment]
        ; "select product"
    )]
    #[test_case(
        vec![Letter('A'), Digit('1'), InsertCoin(10), Confirm],
        vec![
            show_code("A"),
            show_price("Agua Ciel", 12),
            Output::UpdateTotal(10),
            Rejection::InsufficientCredit { shortfall: 2 }.into(),
        ],
        vec![BuildingCode, AwaitingPayment, AwaitingPayment, AwaitingPayment]
        ; "confirm short of price"
    )]
    #[test_case(
        vec![Letter('A'), Digit('1'), InsertCoin(10), Confirm, InsertCoin(5), Confirm],
        vec![
            show_code("A"),
            show_price("Agua Ciel", 12),
            Output::UpdateTotal(10),
            Rejection::InsufficientCredit { shortfall: 2 }.into(),
            Output::UpdateTotal(15),
            deliver("Agua Ciel", 12, 3),
        ],
        vec![BuildingCode, AwaitingPayment, AwaitingPayment, AwaitingPayment, AwaitingPayment, Idle]
        ; "top up and deliver"
    )]
    #[test_case(
        vec![Letter('A'), Digit('1'), InsertCoin(20), Cancel],
        vec![
            show_code("A"),
            show_price("Agua Ciel", 12),
            Output::UpdateTotal(20),
            Output::ReturnChange(20),
        ],
        vec![BuildingCode, AwaitingPayment, AwaitingPayment, Idle]
        ; "cancel refunds credit"
    )]
    #[test_case(
        vec![Digit('1')],
        vec![Rejection::SelectLetterFirst.into()],
        vec![Idle]
        ; "digit before letter"
    )]
    #[test_case(
        vec![Letter('A'), Digit('9')],
        vec![show_code("A"), Rejection::CodeNotFound("A9".to_string()).into()],
        vec![BuildingCode, Idle]
        ; "unknown code"
    )]
    #[test_case(
        vec![Letter('b'), Cancel],
        vec![show_code("B"), Output::ShowMessage(Notice::Cancelled)],
        vec![BuildingCode, Idle]
        ; "cancel while building code"
    )]
    #[test_case(
        vec![Letter('A'), Digit('1'), InsertCoin(5), Letter('B'), Cancel],
        vec![
            show_code("A"),
            show_price("Agua Ciel", 12),
            Output::UpdateTotal(5),
            show_code("B"),
            Output::ReturnChange(5),
        ],
        vec![BuildingCode, AwaitingPayment, AwaitingPayment, BuildingCode, Idle]
        ; "reselect with credit then cancel"
    )]
    #[test_case(
        vec![Letter('A'), Digit('1'), InsertCoin(10), Letter('d'), Digit('3'), InsertCoin(1), Confirm],
        vec![
            show_code("A"),
            show_price("Agua Ciel", 12),
            Output::UpdateTotal(10),
            show_code("D"),
            show_price("Bubulubu", 10),
            Output::UpdateTotal(11),
            deliver("Bubulubu", 10, 1),
        ],
        vec![BuildingCode, AwaitingPayment, AwaitingPayment, BuildingCode, AwaitingPayment, AwaitingPayment, Idle]
        ; "reselect with credit then buy"
    )]
    fn scenario(inputs: Vec<Input>, outputs: Vec<Output>, states: Vec<MachineState>) {
        let mut machine = VendingMachine::new(Catalog::standard());
        run_inputs(&mut machine, inputs, outputs, states);
    }

    #[test]
    fn delivery_decrements_stock_once() {
        let mut machine = VendingMachine::new(Catalog::standard());
        last_output(
            &mut machine,
            [Letter('A'), Digit('1'), InsertCoin(10), Confirm, InsertCoin(5), Confirm],
        );

        assert_eq!(machine.catalog().lookup(&code("A1")).unwrap().stock, 9);
        assert_eq!(machine.catalog().total_stock(), Catalog::standard().total_stock() - 1);
        assert_eq!(machine.credit(), 0);
        assert_eq!(machine.selected_code(), None);
    }

    #[test]
    fn cancel_clears_selection() {
        let mut machine = VendingMachine::new(Catalog::standard());
        last_output(&mut machine, [Letter('A'), Digit('1'), InsertCoin(20), Cancel]);

        assert_eq!(machine.credit(), 0);
        assert_eq!(machine.selected_code(), None);
        assert_eq!(machine.catalog(), &Catalog::standard());
    }
}

mod rejections {
    use super::*;
    use test_case::test_case;

    #[test_case(vec![], Letter('E') => Some(Rejection::InvalidLetter('E')) ; "letter outside grid")]
    #[test_case(vec![Letter('A')], Digit('x') => Some(Rejection::InvalidDigit('x')) ; "non numeric digit")]
    #[test_case(vec![], Digit('1') => Some(Rejection::SelectLetterFirst) ; "digit in idle")]
    #[test_case(vec![Letter('A'), Digit('1')], Digit('2') => Some(Rejection::SelectLetterFirst) ; "digit while paying")]
    #[test_case(vec![], InsertCoin(10) => Some(Rejection::SelectProductFirst) ; "coin in idle")]
    #[test_case(vec![Letter('C')], InsertCoin(5) => Some(Rejection::SelectProductFirst) ; "coin while building code")]
    #[test_case(vec![Letter('C'), Digit('2')], InsertCoin(2) => Some(Rejection::InvalidCoin(2)) ; "unknown denomination")]
    #[test_case(vec![], Confirm => Some(Rejection::NoTransaction) ; "confirm in idle")]
    #[test_case(vec![Letter('D'), Digit('2'), InsertCoin(10)], Letter('A') => None ; "letter with credit held")]
    #[test_case(vec![Letter('D'), Digit('2')], Letter('A') => None ; "letter before any coin")]
    #[test_case(vec![], Cancel => None ; "cancel in idle")]
    fn last_rejection(prefix: Vec<Input>, input: Input) -> Option<Rejection> {
        let mut machine = VendingMachine::new(Catalog::standard());
        last_output(&mut machine, prefix);
        machine.process_input(input).rejection().cloned()
    }

    #[test_case(vec![], Letter('E') ; "invalid letter")]
    #[test_case(vec![Letter('B')], InsertCoin(1) ; "early coin")]
    #[test_case(vec![Letter('B'), Digit('1'), InsertCoin(5)], InsertCoin(7) ; "odd coin")]
    #[test_case(vec![Letter('B'), Digit('1'), InsertCoin(5)], Confirm ; "short confirm")]
    fn rejection_keeps_session(prefix: Vec<Input>, input: Input) {
        let mut machine = VendingMachine::new(Catalog::standard());
        last_output(&mut machine, prefix);
        let state = machine.state();
        let credit = machine.credit();
        let buffer = machine.code_buffer();
        let selected = machine.selected_code();

        let output = machine.process_input(input);

        assert!(output.rejection().is_some());
        assert_eq!(machine.state(), state);
        assert_eq!(machine.credit(), credit);
        assert_eq!(machine.code_buffer(), buffer);
        assert_eq!(machine.selected_code(), selected);
    }

    #[test]
    fn sold_out_slot_resets_to_idle() {
        let catalog = mealy_vend::catalog! {
            B3 => "Cheetos", 21, 0;
        }
        .unwrap();
        let mut machine = VendingMachine::new(catalog);

        let output = last_output(&mut machine, [Letter('B'), Digit('3')]);

        assert_eq!(output, Some(Output::from(Rejection::OutOfStock(code("B3")))));
        assert_eq!(output.unwrap().message().as_deref(), Some("out of stock"));
        assert_eq!(machine.state(), Idle);
    }
}
