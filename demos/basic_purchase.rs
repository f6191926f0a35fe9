//! Basic Purchase
//!
//! This example walks one customer through the standard catalog.
//!
//! Key concepts:
//! - One output per input
//! - Refusals are ordinary outputs, the machine keeps running
//! - Stock only changes on delivery
//!
//! Run with: cargo run --example basic_purchase

use mealy_vend::{Catalog, Input, Output, VendingMachine};

fn main() {
    println!("=== Basic Purchase Example ===\n");

    let mut machine = VendingMachine::new(Catalog::standard());

    let inputs = [
        Input::Letter('A'),
        Input::Digit('1'),
        Input::InsertCoin(10),
        Input::Confirm,
        Input::InsertCoin(5),
        Input::Confirm,
    ];

    for input in inputs {
        let from = machine.state();
        let output = machine.process_input(input);
        println!(
            "{:>15} --{input}--> {:<15} {output:?}",
            from.to_string(),
            machine.state().to_string()
        );

        if let Output::Deliver { name, change, .. } = &output {
            println!("\nDispensed {name}, change ${change}");
        }
    }

    let water = machine
        .catalog()
        .products()
        .next()
        .expect("standard catalog is not empty");
    println!("{} left in stock: {}", water.name, water.stock);

    println!("\n=== Example Complete ===");
}
