//! Command-line arguments for the stock menu.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::{Parser, ValueEnum};
use strum_macros::{Display, EnumString};
use symbol_tree::symbol::DEFAULT_MAX_SYMBOL_LEN;
use symbol_tree::{OverlongPolicy, Result, SymbolRules};

/// How option 4 prints the tree.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Display, EnumString, Eq, PartialEq)]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ListFormat {
    /// One `SYMBOL: PRICE` line per entry.
    #[default]
    Text,
    /// A JSON array of `{"symbol", "price"}` objects.
    Json,
}

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Maximum symbol length in characters.
    #[clap(long, default_value_t = DEFAULT_MAX_SYMBOL_LEN)]
    pub max_symbol_len: usize,

    /// What to do with symbols longer than `--max-symbol-len`.
    #[clap(long, value_enum, default_value_t = OverlongPolicy::Reject)]
    pub overlong: OverlongPolicy,

    /// Optional file with entries to load before the menu starts.
    /// One `SYMBOL PRICE` or `SYMBOL,PRICE` per line; `#` starts a comment line.
    #[clap(long)]
    pub preload: Option<String>,

    /// Output format for the full listing.
    #[clap(long, value_enum, default_value_t = ListFormat::Text)]
    pub list_format: ListFormat,
}

impl Args {
    /// Builds the symbol rules requested on the command line.
    pub fn symbol_rules(&self) -> Result<SymbolRules> {
        SymbolRules::new(self.max_symbol_len, self.overlong)
    }
}
