//! Builds pizzas through a hierarchy of builders.
//!
//! Run without a subcommand (or with `demo`) to print the two sample pizzas.
//! `ny` and `calzone` build one pizza from command-line arguments.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pizza_builder::builders::ny_pizza::Size;
use pizza_builder::builders::pizza::Topping;
use pizza_builder::builders::reporter::OutputFormat;
use pizza_builder::core::order::OrderKind;
use pizza_builder::utils;

#[derive(Parser)]
#[command(name = "pizza-builder")]
#[command(about = "Build pizzas with hierarchical builders")]
struct Cli {
    /// text, json, yaml or toml
    #[arg(long, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print debug logs and a summary after the pizzas
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and print the two sample pizzas (the default)
    Demo,
    /// Build a New York pizza
    Ny {
        /// small, medium or large
        size: Size,
        /// Topping to add (repeatable)
        #[arg(short, long = "topping")]
        toppings: Vec<Topping>,
    },
    /// Build a calzone
    Calzone {
        /// Topping to add (repeatable)
        #[arg(short, long = "topping")]
        toppings: Vec<Topping>,
        /// Put the sauce inside
        #[arg(long)]
        sauce_inside: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("pizza_builder=debug")
    } else {
        EnvFilter::new("pizza_builder=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => utils::run_demo(cli.format, cli.verbose),
        Commands::Ny { size, toppings } => utils::place_order(
            OrderKind::NyPizza { size, toppings },
            cli.format,
            cli.verbose,
        ),
        Commands::Calzone {
            toppings,
            sauce_inside,
        } => utils::place_order(
            OrderKind::Calzone {
                toppings,
                sauce_inside,
            },
            cli.format,
            cli.verbose,
        ),
    }
}
