//! Custom Catalog
//!
//! This example builds a small catalog from TOML, sells it out, and prints
//! the transition graph.
//!
//! Key concepts:
//! - Catalog validation reports every bad entry at once
//! - A sold-out slot is refused at selection time
//! - The transition table renders as Graphviz DOT
//!
//! Run with: cargo run --example custom_catalog

use mealy_vend::machine::Diagram;
use mealy_vend::{Config, Input, MachineState};

const CONFIG: &str = r#"
history_limit = 32

[[products]]
code = "A1"
name = "Espresso"
price = 15
stock = 1

[[products]]
code = "B2"
name = "Croissant"
price = 20
stock = 3
"#;

const BROKEN: &str = r#"
[[products]]
code = "Z9"
name = ""
price = 0
stock = 1
"#;

fn main() {
    println!("=== Custom Catalog Example ===\n");

    let config = Config::from_toml_str(CONFIG).expect("example config parses");
    let mut machine = config.machine().expect("example catalog is valid");

    for input in [
        Input::Letter('A'),
        Input::Digit('1'),
        Input::InsertCoin(20),
        Input::Confirm,
        Input::Letter('A'),
        Input::Digit('1'),
    ] {
        let output = machine.process_input(input);
        println!("{:<16} => {output:?}", input.to_string());
    }
    assert_eq!(machine.state(), MachineState::Idle);

    println!("\nStates visited: {:?}", machine.log().get_path());

    match Config::from_toml_str(BROKEN).and_then(|config| config.catalog()) {
        Ok(_) => println!("\nunexpectedly valid"),
        Err(err) => println!("\nRejected config: {err}"),
    }

    println!("\n{}", Diagram::new().without_messages().to_dot());

    println!("=== Example Complete ===");
}
