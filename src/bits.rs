use std::{fmt, str::FromStr};

use bitvec::{order::Msb0, slice::BitSlice, vec::BitVec};

use crate::ParseBitsError;

/// An ordered, appendable run of bits.
///
/// Holds a single code, or the concatenation of many codes after encoding.
/// Renders as a string of `0` and `1` digits, first bit first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitSequence {
    bits: BitVec<u8, Msb0>,
}

impl BitSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// The low `length` bits of `bits`, most significant first.
    ///
    /// `from_code(0b_101, 4)` is `0101`.
    pub fn from_code(bits: u32, length: u8) -> Self {
        assert!(length <= 32, "code length {length} exceeds 32 bits");

        let mut sequence = Self::new();
        for shift in (0..length).rev() {
            sequence.push((bits >> shift) & 1 == 1);
        }
        sequence
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Append all of `other`, in order, to the end of this sequence.
    pub fn append(&mut self, other: &BitSequence) {
        self.bits.extend_from_bitslice(other.as_bitslice());
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_bitslice(&self) -> &BitSlice<u8, Msb0> {
        &self.bits
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }

    /// Pack the bits into bytes, first bit in the high bit of the first byte.
    ///
    /// The final byte is zero-padded.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bits = self.bits.clone();
        bits.set_uninitialized(false);
        bits.into_vec()
    }
}

impl From<BitVec<u8, Msb0>> for BitSequence {
    fn from(bits: BitVec<u8, Msb0>) -> Self {
        Self { bits }
    }
}

impl FromIterator<bool> for BitSequence {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for BitSequence {
    type Err = ParseBitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, digit)| match digit {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(ParseBitsError::InvalidDigit { digit, position }),
            })
            .collect()
    }
}
