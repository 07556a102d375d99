//! Command-line interface over the squish operations.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;

use crate::{
    ops::{dense_squish, imperfect_squish, sparse_squish, squish, squish_list, squish_object},
    record::SquishableRecord,
    value::Value,
};

/// Concatenate values after rendering them as text
///
/// Values are read as JSON scalars when that is lossless (`5`, `2.5`, `true`,
/// `"quoted text"`); anything else is taken as text exactly as written.
#[derive(Parser, Debug)]
#[command(name = "squish")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add two values without converting them to text
    Imperfect {
        #[arg(value_parser = parse_value, allow_negative_numbers = true)]
        thing1: Value,
        #[arg(value_parser = parse_value, allow_negative_numbers = true)]
        thing2: Value,
    },
    /// Concatenate two values
    Squish {
        #[arg(value_parser = parse_value, allow_negative_numbers = true)]
        thing1: Value,
        #[arg(value_parser = parse_value, allow_negative_numbers = true)]
        thing2: Value,
    },
    /// Concatenate two values with every space removed
    Dense {
        #[arg(value_parser = parse_value, allow_negative_numbers = true)]
        thing1: Value,
        #[arg(value_parser = parse_value, allow_negative_numbers = true)]
        thing2: Value,
    },
    /// Concatenate two values separated by one space
    Sparse {
        #[arg(value_parser = parse_value, allow_negative_numbers = true)]
        thing1: Value,
        #[arg(value_parser = parse_value, allow_negative_numbers = true)]
        thing2: Value,
    },
    /// Concatenate every value
    List {
        #[arg(value_parser = parse_value, value_name = "VALUE", allow_negative_numbers = true)]
        things: Vec<Value>,
    },
    /// Build a record from up to three values and concatenate its fields
    Object {
        #[arg(value_parser = parse_value, value_name = "VALUE", allow_negative_numbers = true)]
        things: Vec<Value>,
    },
}

/// Parses one command-line value.
///
/// JSON strings are unquoted. Other JSON scalars are decoded only when they
/// render back to exactly the argument, so ` 5 ` and `1.0` stay text.
/// Arguments that are not JSON at all are kept verbatim.
pub fn parse_value(arg: &str) -> Result<Value, String> {
    let Ok(json) = serde_json::from_str::<serde_json::Value>(arg) else {
        return Ok(Value::from(arg));
    };
    let value: Value =
        serde_json::from_value(json).map_err(|_| format!("unsupported value: {arg}"))?;

    match value {
        Value::Text(_) => Ok(value),
        value if value.to_string() == arg => Ok(value),
        _ => Ok(Value::from(arg)),
    }
}

/// Runs `command` and renders its result.
pub fn run(command: Command) -> Result<String> {
    debug!("Running {command:?}");

    match command {
        Command::Imperfect { thing1, thing2 } => {
            let result = imperfect_squish(thing1, thing2).context("imperfect squish failed")?;
            Ok(result.to_string())
        }
        Command::Squish { thing1, thing2 } => Ok(squish(thing1, thing2)),
        Command::Dense { thing1, thing2 } => Ok(dense_squish(thing1, thing2)),
        Command::Sparse { thing1, thing2 } => Ok(sparse_squish(thing1, thing2)),
        Command::List { things } => Ok(squish_list(things)),
        Command::Object { things } => {
            let record = SquishableRecord::from_values(things)?;
            Ok(squish_object(&record))
        }
    }
}
