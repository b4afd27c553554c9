use std::{
    fs::File,
    io::{self, BufReader},
};

use clap::Parser;
use codebook::{canonical_codes, cli::Options, CodeBook};
use log::{info, warn};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() -> io::Result<()> {
    let options = Options::parse();

    TermLogger::init(
        options.log_level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let mut book = CodeBook::with_book_size(options.book_size)?;
    if let Some(path) = &options.table {
        let reader = BufReader::new(File::open(path)?);
        let added = book.load_table(reader)?;
        info!("{added} codes from {}", path.display());
    } else if let Some(lengths) = &options.lengths {
        book.extend(canonical_codes(&lengths.0)?);
        info!("{} canonical codes", book.len());
    }
    book.log_structure();

    if options.dump {
        print!("{}", book.show_structure());
    }

    let unknown: Vec<char> = options.text.chars().filter(|&c| !book.contains(c)).collect();
    if !unknown.is_empty() {
        warn!("no code for {unknown:?}; skipping");
    }

    let encoded = book.encode(&options.text);
    info!(
        "{} chars -> {} bits",
        options.text.chars().count(),
        encoded.len()
    );

    if options.hex {
        println!("{}", hex::encode(encoded.to_bytes()));
    } else {
        println!("{encoded}");
    }

    Ok(())
}
