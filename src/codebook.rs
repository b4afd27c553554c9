mod canonical;
mod table;

use std::fmt;

use log::{debug, trace};

use crate::{BitSequence, CodeBookError};

pub use self::canonical::{canonical_codes, MAX_CODE_LENGTH};
pub(crate) use self::table::parse_key;

/// Number of buckets in a codebook built with [`CodeBook::new`].
pub const DEFAULT_BOOK_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    key: char,
    code: BitSequence,
}

/// Maps characters to their codes.
///
/// A hash table with chained buckets. A character hashes to its scalar value,
/// and lands in slot `hash % book_size`. Once there are at least twice as many
/// entries as buckets, the next insertion first rebuilds the table at the
/// smallest prime size that is at least `2 * book_size + 1`.
///
/// Keys are not deduplicated. Inserting a character twice stores both
/// entries; lookups see whichever was inserted first.
#[derive(Debug, Clone)]
pub struct CodeBook {
    buckets: Vec<Vec<Entry>>,
    item_count: usize,
}

impl CodeBook {
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BOOK_SIZE)
    }

    /// An empty codebook with `book_size` buckets.
    ///
    /// The size needn't be prime; only sizes chosen by growth are.
    pub fn with_book_size(book_size: usize) -> Result<Self, CodeBookError> {
        if book_size == 0 {
            return Err(CodeBookError::ZeroBookSize);
        }
        Ok(Self::with_buckets(book_size))
    }

    fn with_buckets(book_size: usize) -> Self {
        debug_assert_ne!(book_size, 0);

        Self {
            buckets: vec![Vec::new(); book_size],
            item_count: 0,
        }
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.item_count
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Number of buckets.
    pub fn book_size(&self) -> usize {
        self.buckets.len()
    }

    /// Entries per bucket, rounded down.
    pub fn load_factor(&self) -> usize {
        self.item_count / self.book_size()
    }

    /// Store `code` as the code for `key`.
    ///
    /// Existing entries for `key` are left in place, and keep shadowing this one.
    pub fn add_sequence(&mut self, key: char, code: BitSequence) {
        if self.load_factor() > 1 {
            self.grow();
        }

        let index = self.slot(key);
        trace!("adding {key:?} => {code} at slot {index}");
        self.buckets[index].push(Entry { key, code });
        self.item_count += 1;

        self.debug_check_count();
    }

    pub fn contains(&self, key: char) -> bool {
        self.find(key).is_some()
    }

    /// The code for `key`, or `None` if it has none.
    pub fn get_sequence(&self, key: char) -> Option<&BitSequence> {
        self.find(key).map(|entry| &entry.code)
    }

    /// Check `text` against the codebook.
    ///
    /// Empty text is always accepted, and a single character is accepted if it
    /// has a code. For longer text, this does *not* check every character: it
    /// finds the first character with a code, and returns whether the one
    /// right after it also has a code. If no character before the last has a
    /// code, the text is rejected.
    pub fn contains_all(&self, text: &str) -> bool {
        let chars: Vec<char> = text.chars().collect();
        match chars.as_slice() {
            [] => true,
            &[only] => self.contains(only),
            _ => chars
                .windows(2)
                .find(|pair| self.contains(pair[0]))
                .map_or(false, |pair| self.contains(pair[1])),
        }
    }

    /// Every stored key, in slot order, then insertion order within a slot.
    pub fn huffman_chars(&self) -> Vec<char> {
        let chars: Vec<char> = self.iter().map(|(key, _)| key).collect();

        // A shortfall means the count and the buckets disagree.
        assert_eq!(
            chars.len(),
            self.item_count,
            "codebook holds {} entries but counts {}",
            chars.len(),
            self.item_count
        );
        chars
    }

    /// Entries in the same order as [`CodeBook::huffman_chars`].
    pub fn iter(&self) -> impl Iterator<Item = (char, &BitSequence)> + '_ {
        self.buckets
            .iter()
            .flatten()
            .map(|entry| (entry.key, &entry.code))
    }

    /// Concatenate the codes of each character of `text`, in order.
    ///
    /// Characters without a code are skipped.
    pub fn encode(&self, text: &str) -> BitSequence {
        let mut encoded = BitSequence::new();
        for c in text.chars() {
            if let Some(code) = self.get_sequence(c) {
                encoded.append(code);
            }
        }
        encoded
    }

    /// A printable dump of the table's layout, for debugging.
    pub fn show_structure(&self) -> Structure<'_> {
        Structure { book: self }
    }

    /// Log [`CodeBook::show_structure`] at debug level.
    pub fn log_structure(&self) {
        debug!("codebook structure:\n{}", self.show_structure());
    }

    fn slot(&self, key: char) -> usize {
        hash(key) as usize % self.book_size()
    }

    fn find(&self, key: char) -> Option<&Entry> {
        self.buckets[self.slot(key)]
            .iter()
            .find(|entry| entry.key == key)
    }

    /// Rebuild into a larger table, then take its place.
    ///
    /// Entries are moved over in slot order, then chain order.
    fn grow(&mut self) {
        let old_size = self.book_size();
        let mut rebuilt = Self::with_buckets(next_prime(2 * old_size + 1));

        for Entry { key, code } in self.buckets.drain(..).flatten() {
            rebuilt.add_sequence(key, code);
        }

        debug!(
            "grew codebook from {old_size} to {} buckets ({} entries)",
            rebuilt.book_size(),
            rebuilt.item_count
        );
        debug_assert_eq!(rebuilt.item_count, self.item_count);

        *self = rebuilt;
    }

    fn debug_check_count(&self) {
        debug_assert_eq!(
            self.item_count,
            self.buckets.iter().map(Vec::len).sum::<usize>()
        );
    }
}

impl Default for CodeBook {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<(char, BitSequence)> for CodeBook {
    fn extend<I: IntoIterator<Item = (char, BitSequence)>>(&mut self, iter: I) {
        for (key, code) in iter {
            self.add_sequence(key, code);
        }
    }
}

impl FromIterator<(char, BitSequence)> for CodeBook {
    fn from_iter<I: IntoIterator<Item = (char, BitSequence)>>(iter: I) -> Self {
        let mut book = Self::new();
        book.extend(iter);
        book
    }
}

/// See [`CodeBook::show_structure`].
#[derive(Debug)]
pub struct Structure<'a> {
    book: &'a CodeBook,
}

impl fmt::Display for Structure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let book = self.book;
        writeln!(f, "ItemCount: {}", book.item_count)?;
        writeln!(f, "BookSize: {}", book.book_size())?;
        writeln!(f, "LoadFactor: {}", book.load_factor())?;

        for (index, bucket) in book.buckets.iter().enumerate() {
            write!(f, " : {index} [")?;
            for Entry { key, code } in bucket {
                write!(f, "({} :: '{key}' : {code}) ", hash(*key))?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

fn hash(key: char) -> u32 {
    u32::from(key)
}

/// The first `n` or above with no divisor in `2..n / 2`.
///
/// Only exact for odd `n`, and `4` passes; growth only ever asks for odd
/// sizes of at least 3.
fn next_prime(mut n: usize) -> usize {
    while (2..n / 2).any(|divisor| n % divisor == 0) {
        n += 1;
    }
    n
}
