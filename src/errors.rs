use std::io;

/// A codebook that can't be built as requested.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeBookError {
    #[error("a codebook needs at least one bucket")]
    ZeroBookSize,

    #[error("code length for {0:?} is zero")]
    ZeroLength(char),

    #[error("code length {length} for {key:?} is longer than 32 bits")]
    CodeTooLong { key: char, length: u8 },

    /// The lengths' Kraft sum exceeds 1, so no prefix code has them.
    #[error("code lengths are over-subscribed")]
    OverSubscribed,
}

/// A bit string containing something other than `0` and `1`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBitsError {
    #[error("invalid bit digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },
}

/// A malformed line in a code table listing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("line {line}: missing code after key")]
    MissingCode { line: usize },

    #[error("line {line}: key {key:?} is not a single character or known name")]
    BadKey { line: usize, key: String },

    #[error("line {line}: {source}")]
    BadCode {
        line: usize,
        #[source]
        source: ParseBitsError,
    },

    #[error("line {line}: unexpected trailing text {extra:?}")]
    TrailingText { line: usize, extra: String },
}

/// A malformed `<char>=<length>` list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeLengthsError {
    #[error("expected <char>=<length>, got {0:?}")]
    Malformed(String),

    #[error("bad code length in {0:?}")]
    BadLength(String),
}

impl From<CodeBookError> for io::Error {
    fn from(e: CodeBookError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, e)
    }
}

impl From<TableError> for io::Error {
    fn from(e: TableError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, e)
    }
}
