use std::{path::PathBuf, str::FromStr};

use clap::Parser;
use log::LevelFilter;

use crate::{codebook::parse_key, CodeLengthsError, DEFAULT_BOOK_SIZE};

/// Encode text with a character codebook.
#[derive(Debug, Parser)]
#[clap(name = "codebook", version)]
pub struct Options {
    /// Text to encode
    pub text: String,

    /// Code table file, one `<char> <bits>` pair per line
    #[clap(
        short,
        long,
        value_name = "PATH",
        conflicts_with = "lengths",
        required_unless_present = "lengths"
    )]
    pub table: Option<PathBuf>,

    /// Canonical code lengths, e.g. `a=2,b=2,c=3`
    #[clap(short, long, value_name = "LIST")]
    pub lengths: Option<CodeLengths>,

    /// Initial number of buckets
    #[clap(short, long, default_value_t = DEFAULT_BOOK_SIZE)]
    pub book_size: usize,

    /// Print the codebook's bucket layout before encoding
    #[clap(short, long)]
    pub dump: bool,

    /// Print the encoding as zero-padded hex bytes instead of bits
    #[clap(long)]
    pub hex: bool,

    /// More log output; repeat for more detail
    #[clap(short, long, parse(from_occurrences))]
    pub verbose: u8,
}

impl Options {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// A comma-separated list of `<char>=<length>` pairs.
///
/// Keys use the same names as code tables (`space`, `comma`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeLengths(pub Vec<(char, u8)>);

impl FromStr for CodeLengths {
    type Err = CodeLengthsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(|pair| -> Result<(char, u8), CodeLengthsError> {
                let (key, length) = pair
                    .trim()
                    .rsplit_once('=')
                    .ok_or_else(|| CodeLengthsError::Malformed(pair.to_owned()))?;
                let key =
                    parse_key(key).ok_or_else(|| CodeLengthsError::Malformed(pair.to_owned()))?;
                let length = length
                    .parse()
                    .map_err(|_| CodeLengthsError::BadLength(pair.to_owned()))?;
                Ok((key, length))
            })
            .collect::<Result<_, _>>()
            .map(CodeLengths)
    }
}
