use crate::{BitSequence, CodeBook, CodeBookError};

/// Longest code [`canonical_codes`] will assign.
pub const MAX_CODE_LENGTH: u8 = 32;

/// Assign canonical prefix codes to characters, given each one's code length.
///
/// Characters are ordered by `(length, char)`. The first gets all zeros; each
/// following code is the previous one plus one, shifted left by however much
/// longer it is. Codes come back in that order.
///
/// A character listed twice gets two codes.
pub fn canonical_codes(
    lengths: &[(char, u8)],
) -> Result<Vec<(char, BitSequence)>, CodeBookError> {
    let mut sorted = lengths.to_vec();
    sorted.sort_unstable_by_key(|&(key, length)| (length, key));

    for &(key, length) in &sorted {
        if length == 0 {
            return Err(CodeBookError::ZeroLength(key));
        }
        if length > MAX_CODE_LENGTH {
            return Err(CodeBookError::CodeTooLong { key, length });
        }
    }

    // Kraft sum, in units of 2^-MAX_CODE_LENGTH.
    let kraft = sorted.iter().fold(0u64, |sum, &(_, length)| {
        sum.saturating_add(1 << (MAX_CODE_LENGTH - length))
    });
    if kraft > 1 << MAX_CODE_LENGTH {
        return Err(CodeBookError::OverSubscribed);
    }

    let mut codes = Vec::with_capacity(sorted.len());
    let mut code = 0u64;
    let mut prev_length = sorted.first().map_or(0, |&(_, length)| length);
    for (i, &(key, length)) in sorted.iter().enumerate() {
        if i > 0 {
            code = (code + 1) << (length - prev_length);
        }
        debug_assert!(code < 1 << length);

        codes.push((key, BitSequence::from_code(code as u32, length)));
        prev_length = length;
    }

    Ok(codes)
}

impl CodeBook {
    /// A default-sized codebook holding the [`canonical_codes`] for `lengths`.
    pub fn from_code_lengths(lengths: &[(char, u8)]) -> Result<Self, CodeBookError> {
        Ok(canonical_codes(lengths)?.into_iter().collect())
    }
}
