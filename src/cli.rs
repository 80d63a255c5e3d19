//! Argument handling and error reporting shared by the demo binaries.

use crate::colour::Colour;
use crate::exit_code;
use crate::exit_code::ExitCode;
use anyhow::Context;
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;
use std::str::FromStr;

// Not doc comments on the flattened structs: clap would use them as the binary's `about` text.

// Options accepted by every demo. None of these count towards a demo's positional arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct Options {
    /// Write a log of what the program does to this file.
    #[clap(long)]
    pub log_file: Option<PathBuf>,

    /// Whether to use coloured output.
    #[clap(long, alias = "color", default_value = "auto")]
    pub colour: Colour,
}

// Positional values for demos that take them. Everything from the first value onwards is collected
// verbatim, including values that start with `-`, so the count is always checked by `expect` and
// bad values are reported by `parse_value` rather than by clap.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct Positional {
    #[clap(value_name = "VALUES", allow_hyphen_values = true, trailing_var_arg = true)]
    pub values: Vec<String>,
}

impl Positional {
    /// Returns the values if there are exactly `count` of them. Otherwise prints `usage` to stdout
    /// and exits with status 1.
    pub fn expect(&self, count: usize, usage: &str) -> &[String] {
        match check_positional(&self.values, count, usage) {
            Ok(values) => values,
            Err(usage) => {
                println!("{usage}");
                exit_code::exit(exit_code::FAILURE)
            }
        }
    }
}

/// Sets up colour and logging for the program `name`, then runs `body`. An error returned from
/// `body` is reported on stderr and turned into a failing exit code. Panics are not caught.
pub fn run(name: &str, options: &Options, body: impl FnOnce() -> Result<()>) -> ExitCode {
    options.colour.detect();
    let result = init_logging(name, options).and_then(|()| body());
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(error) => {
            eprintln!("{} {:#}", "ERROR:".red(), error);
            exit_code::FAILURE
        }
    }
}

fn init_logging(name: &str, options: &Options) -> Result<()> {
    if let Some(path) = &options.log_file {
        crate::logging::init(name, path)?;
    }
    Ok(())
}

fn check_positional<'a, 'u>(
    values: &'a [String],
    count: usize,
    usage: &'u str,
) -> Result<&'a [String], &'u str> {
    if values.len() == count {
        Ok(values)
    } else {
        Err(usage)
    }
}

/// Parses the command-line value `text`, which was supplied for the argument called `name`.
pub fn parse_value<T>(name: &str, text: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    text.parse()
        .with_context(|| format!("Invalid value for {name}: `{text}`"))
}
