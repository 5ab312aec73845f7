//! Writes the 52 ordinal cards as a grid of symbols, one suit per line.
//!
//! Usage: `cargo run --example fill52 [PATH]`. Without a path the grid goes
//! to stdout.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use toydeck::{Card, DECK_SIZE};

const RANKS_PER_SUIT: usize = 13;

fn write_grid(out: &mut impl Write) -> io::Result<()> {
    for (i, card) in Card::ord52_deck().enumerate() {
        let suit = card.suit().symbol();
        match i % RANKS_PER_SUIT {
            0 => write!(out, "{suit}{}", card.symbol())?,
            n if n == RANKS_PER_SUIT - 1 => writeln!(out, "{}{suit}", card.symbol())?,
            _ => write!(out, "{}", card.symbol())?,
        }
    }
    out.flush()
}

fn main() {
    let result = match std::env::args().nth(1) {
        Some(path) => File::create(&path).and_then(|file| {
            write_grid(&mut BufWriter::new(file))?;
            println!("Wrote {DECK_SIZE} cards to {path}");
            Ok(())
        }),
        None => write_grid(&mut io::stdout().lock()),
    };

    if let Err(err) = result {
        eprintln!("fill52: {err}");
        std::process::exit(1);
    }
}
