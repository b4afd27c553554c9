use std::io::{self, BufRead};

use log::debug;

use crate::{BitSequence, CodeBook, TableError};

impl CodeBook {
    /// Read a code table into a new default-sized codebook.
    ///
    /// See [`CodeBook::load_table`] for the format.
    pub fn read_table(input: impl BufRead) -> io::Result<Self> {
        let mut book = Self::new();
        book.load_table(input)?;
        Ok(book)
    }

    /// Add every entry of a code table, returning how many were added.
    ///
    /// One `<key> <bits>` pair per line, e.g. `e 010`. A key is a single
    /// character, or one of the names accepted for whitespace and separators
    /// (`space`, `tab`, `newline`, `return`, `hash`, `comma`). Blank lines and
    /// lines starting with `#` are skipped.
    pub fn load_table(&mut self, input: impl BufRead) -> io::Result<usize> {
        let mut added = 0;
        for (index, line) in input.lines().enumerate() {
            if let Some((key, code)) = parse_line(&line?, index + 1)? {
                self.add_sequence(key, code);
                added += 1;
            }
        }

        debug!("loaded {added} codes from table");
        Ok(added)
    }
}

fn parse_line(line: &str, number: usize) -> Result<Option<(char, BitSequence)>, TableError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut fields = line.split_whitespace();
    let (Some(key_field), Some(code_field)) = (fields.next(), fields.next()) else {
        return Err(TableError::MissingCode { line: number });
    };
    if let Some(extra) = fields.next() {
        return Err(TableError::TrailingText {
            line: number,
            extra: extra.to_owned(),
        });
    }

    let key = parse_key(key_field).ok_or_else(|| TableError::BadKey {
        line: number,
        key: key_field.to_owned(),
    })?;
    let code = code_field
        .parse()
        .map_err(|source| TableError::BadCode {
            line: number,
            source,
        })?;

    Ok(Some((key, code)))
}

/// A single character, or the name of one that's awkward to write inline.
pub(crate) fn parse_key(field: &str) -> Option<char> {
    match field {
        "space" => Some(' '),
        "tab" => Some('\t'),
        "newline" => Some('\n'),
        "return" => Some('\r'),
        "hash" => Some('#'),
        "comma" => Some(','),
        _ => {
            let mut chars = field.chars();
            let key = chars.next()?;
            chars.next().is_none().then_some(key)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use test_case::test_case;

    use super::*;
    use crate::ParseBitsError;

    #[test]
    fn reads_table() -> anyhow::Result<()> {
        let table = "\
# letters
a 0
b 10

space 110
hash  111
";
        let book = CodeBook::read_table(Cursor::new(table))?;

        assert_eq!(book.len(), 4);
        assert_eq!(book.get_sequence(' '), Some(&"110".parse()?));
        assert_eq!(book.get_sequence('#'), Some(&"111".parse()?));
        assert_eq!(book.encode("a b#").to_string(), "011010111");
        Ok(())
    }

    #[test]
    fn load_table_appends() -> anyhow::Result<()> {
        let mut book = CodeBook::with_book_size(7)?;
        book.add_sequence('z', "1".parse()?);

        let added = book.load_table(Cursor::new("y 0\nx 01\n"))?;
        assert_eq!(added, 2);
        assert_eq!(book.len(), 3);
        Ok(())
    }

    #[test_case("a", TableError::MissingCode { line: 1 }; "missing code")]
    #[test_case("ab 01", TableError::BadKey { line: 1, key: "ab".into() }; "bad key")]
    #[test_case("a 01 b", TableError::TrailingText { line: 1, extra: "b".into() }; "trailing text")]
    #[test_case(
        "a 0x1",
        TableError::BadCode {
            line: 1,
            source: ParseBitsError::InvalidDigit { digit: 'x', position: 1 },
        };
        "bad code"
    )]
    fn bad_lines(line: &str, expected: TableError) {
        assert_eq!(parse_line(line, 1), Err(expected));
    }

    #[test]
    fn error_reports_line_number() {
        let err = CodeBook::read_table(Cursor::new("a 0\n\nb 2\n")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().starts_with("line 3:"), "{err}");
    }

    #[test_case("space" => Some(' '); "space")]
    #[test_case("comma" => Some(','); "comma")]
    #[test_case("é" => Some('é'); "accented")]
    #[test_case("#" => Some('#'); "literal hash")]
    #[test_case("spaces" => None; "unknown name")]
    #[test_case("" => None; "empty")]
    fn keys(field: &str) -> Option<char> {
        parse_key(field)
    }
}
