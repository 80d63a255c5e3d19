//! Divides two integers given on the command line. Dividing by zero panics two calls deep and the
//! panic is left to take the process down.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use debug_demos::cli;
use debug_demos::divider;
use debug_demos::exit_code;

const USAGE: &str = "USAGE: runtime-error.py NUM1 NUM2";

/// Prints NUM1 / NUM2, rounded down.
#[derive(Parser, Debug, Clone)]
#[clap(version)]
struct Args {
    #[clap(flatten)]
    numbers: cli::Positional,

    #[clap(flatten)]
    options: cli::Options,
}

fn main() {
    let args = Args::parse();
    exit_code::exit(cli::run(env!("CARGO_BIN_NAME"), &args.options, || run(&args)));
}

fn run(args: &Args) -> Result<()> {
    let values = args.numbers.expect(2, USAGE);
    let a: i64 = cli::parse_value("NUM1", &values[0])?;
    let b: i64 = cli::parse_value("NUM2", &values[1])?;

    let x = divider::bar(a, b);

    println!("a / b = {x}");
    Ok(())
}
