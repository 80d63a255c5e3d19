//! Prints the distance between two points given on the command line. The formula is wrong: it
//! adds the coordinates instead of subtracting them.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use debug_demos::cli;
use debug_demos::distance;
use debug_demos::exit_code;
use log::info;

const USAGE: &str = "USAGE: distance.py X1 Y1 X2 Y2";

const COORDINATE_NAMES: [&str; 4] = ["X1", "Y1", "X2", "Y2"];

/// Prints the distance between (X1, Y1) and (X2, Y2).
#[derive(Parser, Debug, Clone)]
#[clap(version)]
struct Args {
    #[clap(flatten)]
    coordinates: cli::Positional,

    #[clap(flatten)]
    options: cli::Options,
}

fn main() {
    let args = Args::parse();
    exit_code::exit(cli::run(env!("CARGO_BIN_NAME"), &args.options, || run(&args)));
}

fn run(args: &Args) -> Result<()> {
    let values = args.coordinates.expect(COORDINATE_NAMES.len(), USAGE);
    let mut coordinates = [0.0_f64; 4];
    for ((coordinate, name), text) in coordinates.iter_mut().zip(COORDINATE_NAMES).zip(values) {
        *coordinate = cli::parse_value(name, text)?;
    }
    let [x1, y1, x2, y2] = coordinates;
    info!("Computing distance from ({x1}, {y1}) to ({x2}, {y2})");
    println!("{}", distance::report(x1, y1, x2, y2));
    Ok(())
}
