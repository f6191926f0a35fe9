use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "vend",
    about = "Drive a Mealy-machine vending machine from the terminal",
    version
)]
pub(crate) struct Cli {
    #[arg(long, env = "VEND_CONFIG", help = "the path to a TOML config file")]
    pub(crate) config: Option<PathBuf>,

    #[arg(long, help = "print outputs as JSON lines")]
    pub(crate) json: bool,

    #[command(subcommand)]
    pub(crate) command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
    /// Read keypad tokens from stdin, one per line
    Run,

    /// Print the transition graph in Graphviz DOT
    Diagram {
        #[arg(long, help = "leave out SHOW_MESSAGE edges")]
        flow_only: bool,
    },

    /// Print the configured catalog
    Catalog,
}
