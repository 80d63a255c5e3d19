//! Sums two arrays. The second one was never allocated, so summing it fails.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use debug_demos::array::add_array;
use debug_demos::cli;
use debug_demos::exit_code;

/// Prints the sums of two arrays, one of which is missing.
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
    let a1 = vec![10, 20, 30, 40];
    println!("The sum of a1 is {}", add_array(Some(a1.as_slice()), 4)?);

    let a2: Option<Vec<i32>> = None;
    println!("The sum of a2 is {}", add_array(a2.as_deref(), 4)?);
    Ok(())
}
