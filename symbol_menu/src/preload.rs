//! Loading a tree from a preload file given on the command line.
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use log::info;
use symbol_tree::entry::EntryParser;
use symbol_tree::{Entry, Result, SymbolPriceTree, SymbolRules};

/// Builds a tree from the entries in `raw_path`. Later lines win over earlier ones
/// for the same symbol. A file that cannot be opened is an I/O error.
pub fn load_tree(raw_path: &str, rules: &SymbolRules) -> Result<SymbolPriceTree> {
    let path = clean_path(raw_path);
    let file = File::open(&path)?;
    let entries = Entry::parse_from_file(BufReader::new(file), rules)?;
    info!("Loaded {} entries from {}", entries.len(), path.display());
    Ok(entries
        .into_iter()
        .map(|entry| (entry.symbol, entry.price))
        .collect())
}

/// Trims the argument and drops one pair of surrounding double quotes, if present.
fn clean_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    match trimmed.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')) {
        Some(inner) => PathBuf::from(inner),
        None => PathBuf::from(trimmed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;
    use symbol_tree::TreeError;

    #[test]
    fn strips_matching_quotes() {
        assert_eq!(clean_path(" \"C:\\prices.txt\" "), PathBuf::from("C:\\prices.txt"));
        assert_eq!(clean_path("\"half"), PathBuf::from("\"half"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        match load_tree("/definitely/not/here.txt", &SymbolRules::default()) {
            Err(TreeError::Io(e)) => assert_eq!(e.kind(), ErrorKind::NotFound),
            other => panic!("unexpected result: {:?}", other.map(|tree| tree.len())),
        }
    }
}
