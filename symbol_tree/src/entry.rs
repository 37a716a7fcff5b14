//! `(symbol, price)` entries and the preload file format.
//!
//! A preload file holds one entry per line, either `SYMBOL PRICE` or
//! `SYMBOL,PRICE`. Blank lines and lines starting with `#` are skipped.
use std::io::BufRead;

use log::debug;
use serde::Serialize;

use crate::error::TreeError;
use crate::result::Result;
use crate::symbol::{Symbol, SymbolRules};

/// A single symbol with its price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    /// Stock symbol.
    pub symbol: Symbol,
    /// Last known price.
    pub price: f32,
}

impl Entry {
    /// Creates a new entry.
    pub fn new(symbol: Symbol, price: f32) -> Self {
        Entry { symbol, price }
    }
}

/// Parses a price typed by a user or read from a file. Any sign is accepted,
/// NaN and infinities are not.
pub fn parse_price(raw: &str) -> Result<f32> {
    let trimmed = raw.trim();
    let price: f32 = trimmed
        .parse()
        .map_err(|_| TreeError::InvalidPrice(format!("{:?} is not a number", trimmed)))?;
    if !price.is_finite() {
        return Err(TreeError::InvalidPrice(format!("{:?} is not finite", trimmed)));
    }
    Ok(price)
}

/// Trait providing file parsing for entries.
pub trait EntryParser {
    /// Parses entries from a buffered reader, validating symbols with `rules`.
    ///
    /// Returns an error naming the 1-based line number of the first bad line.
    fn parse_from_file<R: BufRead>(reader: R, rules: &SymbolRules) -> Result<Vec<Entry>>;
}

impl EntryParser for Entry {
    fn parse_from_file<R: BufRead>(reader: R, rules: &SymbolRules) -> Result<Vec<Self>> {
        let mut entries = Vec::new();

        for (index, line_result) in reader.lines().enumerate() {
            let line = line_result.map_err(TreeError::Io)?;
            let trimmed_line = line.trim();
            if trimmed_line.is_empty() || trimmed_line.starts_with('#') {
                continue;
            }

            match parse_line(trimmed_line, rules) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    return Err(TreeError::ParseEntriesFile(format!(
                        "line {}: {}",
                        index + 1,
                        e
                    )));
                }
            }
        }
        debug!("Parsed {} entries", entries.len());
        Ok(entries)
    }
}

fn parse_line(line: &str, rules: &SymbolRules) -> Result<Entry> {
    let (symbol, price) = match line.split_once(',') {
        Some(pair) => pair,
        None => {
            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next(), parts.next()) {
                (Some(symbol), Some(price), None) => (symbol, price),
                _ => {
                    return Err(TreeError::ParseEntriesFile(format!(
                        "expected `SYMBOL PRICE`, got {:?}",
                        line
                    )));
                }
            }
        }
    };
    Ok(Entry::new(rules.parse(symbol)?, parse_price(price)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::OverlongPolicy;
    use std::io::Cursor;

    #[test]
    fn parses_both_separators_and_skips_comments() {
        let input = "# portfolio\nAAPL 150.00\n\n GOOG , 2800.5 \nNEG\t-3\n";
        let entries = Entry::parse_from_file(Cursor::new(input), &SymbolRules::default()).unwrap();
        let pairs: Vec<(&str, f32)> = entries
            .iter()
            .map(|entry| (entry.symbol.as_str(), entry.price))
            .collect();
        assert_eq!(pairs, vec![("AAPL", 150.0), ("GOOG", 2800.5), ("NEG", -3.0)]);
    }

    #[test]
    fn reports_line_number_of_bad_price() {
        let input = "AAPL 1\nMSFT abc\n";
        match Entry::parse_from_file(Cursor::new(input), &SymbolRules::default()) {
            Err(TreeError::ParseEntriesFile(message)) => assert!(message.starts_with("line 2:")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn rejects_extra_fields() {
        let input = "AAPL 1 2\n";
        assert!(matches!(
            Entry::parse_from_file(Cursor::new(input), &SymbolRules::default()),
            Err(TreeError::ParseEntriesFile(_))
        ));
    }

    #[test]
    fn applies_symbol_rules() {
        let rules = SymbolRules::new(3, OverlongPolicy::Truncate).unwrap();
        let entries = Entry::parse_from_file(Cursor::new("GOOGL,99.5\n"), &rules).unwrap();
        assert_eq!(entries[0].symbol.as_str(), "GOO");

        let strict = SymbolRules::new(3, OverlongPolicy::Reject).unwrap();
        assert!(Entry::parse_from_file(Cursor::new("GOOGL,99.5\n"), &strict).is_err());
    }

    #[test]
    fn price_must_be_finite() {
        assert_eq!(parse_price(" -0.5 ").unwrap(), -0.5);
        assert!(matches!(parse_price("NaN"), Err(TreeError::InvalidPrice(_))));
        assert!(matches!(parse_price("inf"), Err(TreeError::InvalidPrice(_))));
        assert!(matches!(parse_price(""), Err(TreeError::InvalidPrice(_))));
    }

    #[test]
    fn entry_serializes_symbol_as_plain_string() {
        let entry = Entry::new("AAPL".parse().unwrap(), 1.5);
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"symbol":"AAPL","price":1.5}"#
        );
    }
}
