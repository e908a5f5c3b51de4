use std::path::PathBuf;

use clap::{Parser, Subcommand};
use core_types::{DateFormat, DatePattern};

#[derive(Parser, Debug)]
#[command(
    name = "sortkit",
    version,
    about = "Normalize titles, sort credits by surname and read loosely written dates"
)]
pub struct Cli {
    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the comparison key of each text
    Normalize {
        #[arg(required = true)]
        texts: Vec<String>,
    },

    /// Print the surname sort key of each name
    Surname {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Sort names by surname. Names come from the arguments, a file (one
    /// per line) or stdin.
    Sort {
        names: Vec<String>,

        /// Read names from this file, one per line
        #[arg(long, conflicts_with = "names")]
        file: Option<PathBuf>,

        /// Sort by normalized title instead of surname
        #[arg(long)]
        neutral: bool,

        /// Drop repeated entries, keeping the first
        #[arg(long)]
        unique: bool,

        /// Print this many entries per line, tab separated (1 to 12)
        #[arg(long, default_value_t = 1)]
        columns: usize,
    },

    /// Parse a date written in one of the supported patterns
    ParseDate {
        input: String,

        /// Only try this pattern, e.g. "MM/dd/yyyy"
        #[arg(long, value_parser = parse_date_pattern)]
        pattern: Option<DatePattern>,

        /// Display format: full, short, month-year, short-month-year or year
        #[arg(long, value_parser = parse_date_format)]
        format: Option<DateFormat>,
    },

    /// Print the year of each date, or "-" when it cannot be parsed
    Year {
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Print a number as a roman numeral
    Roman {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },

    /// Print a number of seconds as H:MM:SS
    Duration {
        seconds: f64,

        /// Always print two-digit hours, minutes and seconds
        #[arg(long)]
        padded: bool,
    },
}

fn parse_date_pattern(value: &str) -> Result<DatePattern, String> {
    DatePattern::try_from(value).map_err(|e| e.to_string())
}

fn parse_date_format(value: &str) -> Result<DateFormat, String> {
    DateFormat::try_from(value).map_err(|e| e.to_string())
}
