use std::io::Cursor;

use codebook::{BitSequence, CodeBook, DEFAULT_BOOK_SIZE};

fn bits(s: &str) -> BitSequence {
    s.parse().unwrap()
}

#[test]
fn every_char_round_trips() {
    let mut book = CodeBook::new();
    for (i, c) in ('!'..='~').enumerate() {
        book.add_sequence(c, BitSequence::from_code(i as u32, 7));
    }

    for (i, c) in ('!'..='~').enumerate() {
        assert!(book.contains(c));
        assert_eq!(book.get_sequence(c), Some(&BitSequence::from_code(i as u32, 7)));
    }
    assert_eq!(book.huffman_chars().len(), ('!'..='~').count());
    assert!(book.book_size() > DEFAULT_BOOK_SIZE);
}

#[test]
fn fresh_book_knows_nothing() {
    let book = CodeBook::default();
    assert_eq!(book.book_size(), DEFAULT_BOOK_SIZE);
    assert!(('\0'..='\u{ff}').all(|c| !book.contains(c) && book.get_sequence(c).is_none()));
}

#[test]
fn encode_with_table() -> anyhow::Result<()> {
    let book = CodeBook::read_table(Cursor::new("a 0\nb 1\n"))?;

    assert_eq!(book.encode("abc"), bits("01"));
    assert_eq!(book.encode(""), BitSequence::new());
    Ok(())
}

#[test]
fn canonical_book_encodes() -> anyhow::Result<()> {
    let book = CodeBook::from_code_lengths(&[('a', 2), ('b', 2), ('c', 2), ('d', 2)])?;
    let encoded = book.encode("dcba");

    assert_eq!(encoded.to_string(), "11100100");
    assert_eq!(encoded.to_bytes(), vec![0b_1110_0100]);
    Ok(())
}

#[test]
fn contains_all_only_checks_first_known_pair() {
    let book: CodeBook = [('a', bits("0")), ('b', bits("1"))].into_iter().collect();

    assert!(book.contains_all(""));
    assert!(book.contains_all("ab"));
    // 'x' is never looked at.
    assert!(book.contains_all("abx"));
    assert!(!book.contains_all("xy"));
}
