//! Terminal front end for the vending machine.
//!
//! Reads keypad tokens from stdin and prints one rendered line per output.

mod cli;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use mealy_vend::machine::Diagram;
use mealy_vend::{logging, Catalog, Config, Input, Output, VendingMachine};
use tracing::{debug, info, warn};

use crate::cli::{Cli, Commands};

/// Token that lists the catalog instead of feeding the machine.
const STOCK_TOKEN: &str = "stock";

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };
    logging::init(config.logger());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let machine = config.machine().context("building catalog")?;
            run(machine, io::stdin().lock(), &mut out, cli.json)
        }
        Commands::Diagram { flow_only } => {
            let diagram = if flow_only {
                Diagram::new().without_messages()
            } else {
                Diagram::new()
            };
            write!(out, "{}", diagram.to_dot())?;
            Ok(())
        }
        Commands::Catalog => {
            let catalog = config.catalog().context("building catalog")?;
            print_catalog(&catalog, &mut out, cli.json)
        }
    }
}

fn run(
    mut machine: VendingMachine,
    input: impl BufRead,
    out: &mut impl Write,
    json: bool,
) -> Result<()> {
    info!(products = machine.catalog().len(), "vending machine ready");

    for line in input.lines() {
        let line = line.context("reading stdin")?;
        let token = line.trim();
        if token.is_empty() || token.starts_with('#') {
            continue;
        }

        if token.eq_ignore_ascii_case(STOCK_TOKEN) {
            print_catalog(machine.catalog(), out, json)?;
            continue;
        }

        let input: Input = match token.parse() {
            Ok(input) => input,
            Err(err) => {
                warn!(%err, "skipping token");
                continue;
            }
        };

        let output = machine.process_input(input);
        if json {
            writeln!(out, "{}", serde_json::to_string(&output)?)?;
        } else {
            writeln!(out, "{}", render(&output))?;
        }
    }

    debug!(steps = machine.log().len(), state = %machine.state(), "input exhausted");
    Ok(())
}

/// One display line per output.
fn render(output: &Output) -> String {
    match output {
        Output::ShowCode(code) => format!("code   {code}"),
        Output::ShowPrice { name, price } => format!("price  {name} ${price}"),
        Output::UpdateTotal(credit) => format!("credit ${credit}"),
        Output::Deliver {
            name,
            price,
            change,
        } => format!("enjoy  {name} (${price}), change ${change}"),
        Output::ReturnChange(amount) => format!("refund ${amount}"),
        Output::ShowMessage(notice) => format!("note   {notice}"),
    }
}

fn print_catalog(catalog: &Catalog, out: &mut impl Write, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(catalog)?)?;
        return Ok(());
    }

    for product in catalog.products() {
        writeln!(
            out,
            "{}  {:<20} ${:>3}  stock {}",
            product.code, product.name, product.price, product.stock
        )?;
    }
    Ok(())
}
