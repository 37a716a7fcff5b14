//!
//! In-memory stock symbol → price map backed by a binary search tree.
//!
//! This crate aggregates:
//! - `error` — unified error type `TreeError` used across the workspace.
//! - `result` — handy `Result<T, TreeError>` alias.
//! - `symbol` — validated `Symbol` keys and the `SymbolRules` that build them.
//! - `tree` — `SymbolPriceTree` with insert, search, update and in-order traversal.
//! - `entry` — `(symbol, price)` entries and the preload file parser.
//! - `shared` — mutex-protected handle for use from several threads.
#![warn(missing_docs)]
pub mod entry;
pub mod error;
pub mod result;
pub mod shared;
pub mod symbol;
pub mod tree;

pub use entry::Entry;
pub use error::TreeError;
pub use result::Result;
pub use shared::SharedSymbolTree;
pub use symbol::{OverlongPolicy, Symbol, SymbolRules};
pub use tree::SymbolPriceTree;
