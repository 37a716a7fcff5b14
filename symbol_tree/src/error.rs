//! Error type shared by the tree library and the menu binary.
//!
//! `TreeError` covers invalid input rejected at the boundary (symbols, prices,
//! limits), lookups that found nothing, preload file problems and the few I/O or
//! encoding failures the menu can hit.
use std::io;
use std::string::FromUtf8Error;
use std::sync::PoisonError;

use thiserror::Error;

/// Unified error type for the workspace.
#[derive(Error, Debug)]
pub enum TreeError {
    /// I/O error from stdin/stdout or a preload file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A line of user input was not valid UTF-8.
    #[error("Invalid input: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// The symbol was empty once surrounding whitespace was removed.
    #[error("Invalid symbol: symbol must not be empty")]
    EmptySymbol,

    /// The symbol is longer than the configured limit and the policy rejects it.
    #[error("Invalid symbol: {symbol} is longer than {max} characters")]
    SymbolTooLong {
        /// Symbol as it was supplied (trimmed).
        symbol: String,
        /// Configured maximum length in characters.
        max: usize,
    },

    /// The price could not be parsed or is not a finite number.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Symbol limits that cannot be satisfied by any symbol.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A line of the preload file could not be turned into an entry.
    #[error("Parse entries file error: {0}")]
    ParseEntriesFile(String),

    /// Failure while encoding the listing as JSON.
    #[error("JSON serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// A poisoned lock was encountered on the shared tree.
    #[error("Mutex Lock Poisoned: {0}")]
    MutexLock(String),

    /// The requested symbol is not present in the tree.
    #[error("Stock symbol not found: {0}")]
    NotFound(String),
}

impl<T> From<PoisonError<T>> for TreeError {
    fn from(err: PoisonError<T>) -> Self {
        TreeError::MutexLock(err.to_string())
    }
}
