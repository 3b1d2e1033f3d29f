use slices_core::SliceRange;

use clap::Parser;
use thiserror::Error;

/// Defines and parses the command-line arguments accepted by the driver.
///
/// This struct uses `clap::Parser` to automatically generate a parser from
/// its definition. With no items given, the driver falls back to a built-in
/// demo sequence and range set.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The items of the backing sequence to slice.
    /// Leave empty to run the built-in demo.
    pub items: Vec<String>,

    /// A half-open range START..END to slice out of the items.
    /// May be repeated; slices are printed in the order given.
    /// Bounds may be negative to count back from the end.
    #[clap(short, long = "range", value_parser = parse_range, allow_hyphen_values = true)]
    pub ranges: Vec<SliceRange>,

    /// The separator used to join the items of each slice.
    #[clap(long, default_value = " + ")]
    pub sep: String,
}

/// Errors produced while parsing a `--range` argument.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeParseError {
    /// The argument did not contain the `..` separator.
    #[error("expected START..END, got `{0}`")]
    MissingSeparator(String),
    /// One of the bounds was not an integer.
    #[error("invalid range bound `{0}`")]
    InvalidBound(String),
}

/// Parses a `START..END` argument into a [`SliceRange`].
///
/// Bounds are signed, so `-3..-1` is accepted. No ordering or bounds
/// validation happens here; degenerate ranges resolve to empty slices later.
pub fn parse_range(arg: &str) -> Result<SliceRange, RangeParseError> {
    let (start, end) = arg
        .split_once("..")
        .ok_or_else(|| RangeParseError::MissingSeparator(arg.to_string()))?;
    let start = start
        .trim()
        .parse()
        .map_err(|_| RangeParseError::InvalidBound(start.to_string()))?;
    let end = end
        .trim()
        .parse()
        .map_err(|_| RangeParseError::InvalidBound(end.to_string()))?;
    Ok(SliceRange::new(start, end))
}
