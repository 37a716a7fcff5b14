//! Stock Market Tree — an interactive menu for keeping stock prices in an ordered,
//! in-memory binary search tree.
//!
//! Usage example (CLI):
//! ```bash
//! symbol_menu --preload ./prices.txt --overlong truncate
//! ```
//!
//! Logs go to stderr; set `RUST_LOG=info` or `RUST_LOG=debug` to see them.
#![warn(missing_docs)]
use std::io;

use clap::Parser;
use log::info;
use symbol_menu::preload::load_tree;
use symbol_menu::{Args, Session};
use symbol_tree::{Result, SymbolPriceTree, TreeError};

fn main() -> Result<(), TreeError> {
    init_logger();
    let args = Args::parse();
    let rules = args.symbol_rules()?;
    info!(
        "Symbols up to {} characters, overlong: {}, listing: {}",
        rules.max_len(),
        rules.policy(),
        args.list_format
    );

    let tree = match &args.preload {
        Some(path) => load_tree(path, &rules)?,
        None => SymbolPriceTree::new(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), tree, rules, args.list_format);
    session.run()
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
