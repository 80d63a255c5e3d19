//! Fills in a small inventory then prints how many items it holds. The last update has a negative
//! quantity, so the program stops before it gets to the total.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use debug_demos::cli;
use debug_demos::exit_code;
use debug_demos::inventory;
use debug_demos::inventory::Inventory;

/// Records some tool quantities and prints the total.
#[derive(Parser, Debug, Clone)]
#[clap(version)]
struct Args {
    #[clap(flatten)]
    options: cli::Options,
}

fn main() {
    let args = Args::parse();
    exit_code::exit(cli::run(env!("CARGO_BIN_NAME"), &args.options, run));
}

fn run() -> Result<()> {
    let mut inv = Inventory::new();

    inventory::update_inventory(&mut inv, "Hammer", 5)?;
    inventory::update_inventory(&mut inv, "Nails", 200)?;
    inventory::update_inventory(&mut inv, "Screwdriver", 10)?;
    inventory::update_inventory(&mut inv, "Screws", -100)?;

    println!(
        "The total number of items is {}",
        inventory::total_items(&inv)
    );
    Ok(())
}
