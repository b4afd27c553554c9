//! A character codebook for Huffman-style encoders.
//!
//! [`CodeBook`] maps characters to their codes, and encodes text by
//! concatenating them into a [`BitSequence`]. Building the codes (from
//! frequencies, or a tree) is up to the caller; [`canonical_codes`] covers the
//! common case where only code lengths are known.

mod bits;
pub mod cli;
mod codebook;
mod errors;

pub use crate::bits::BitSequence;
pub use crate::codebook::{
    canonical_codes, CodeBook, Structure, DEFAULT_BOOK_SIZE, MAX_CODE_LENGTH,
};
pub use crate::errors::{CodeBookError, CodeLengthsError, ParseBitsError, TableError};
