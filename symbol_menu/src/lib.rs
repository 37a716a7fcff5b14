//! Text menu over a [`symbol_tree::SymbolPriceTree`].
//!
//! - `args` — clap arguments and the listing format.
//! - `menu` — numbered menu entries.
//! - `preload` — building the initial tree from a file.
//! - `session` — the interactive loop.
#![warn(missing_docs)]
pub mod args;
pub mod menu;
pub mod preload;
pub mod session;

pub use args::{Args, ListFormat};
pub use session::Session;
