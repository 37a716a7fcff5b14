//! Interactive menu loop over an owned [`SymbolPriceTree`].
//!
//! The session reads from any `BufRead` and writes to any `Write`, so the same loop
//! drives a terminal and the tests. Invalid symbols and prices are reported to the
//! user and the loop goes on; only I/O failures end it with an error. End of input
//! ends the session like option 5 does.
use std::io::{BufRead, Write};

use log::{debug, info};
use symbol_tree::entry::parse_price;
use symbol_tree::{Result, SymbolPriceTree, SymbolRules, TreeError};

use crate::args::ListFormat;
use crate::menu::{MenuChoice, render_menu};

enum Flow {
    Continue,
    Stop,
}

/// A running menu session.
pub struct Session<R, W> {
    input: R,
    output: W,
    tree: SymbolPriceTree,
    rules: SymbolRules,
    list_format: ListFormat,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session around `tree`.
    pub fn new(
        input: R,
        output: W,
        tree: SymbolPriceTree,
        rules: SymbolRules,
        list_format: ListFormat,
    ) -> Self {
        Session {
            input,
            output,
            tree,
            rules,
            list_format,
        }
    }

    /// Runs the menu until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            render_menu(&mut self.output)?;
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Stop) => {
                    self.output.flush()?;
                    return Ok(());
                }
                Err(e @ TreeError::Utf8(_)) => {
                    self.reject(e)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Ends the session, returning the tree and the output sink.
    pub fn into_parts(self) -> (SymbolPriceTree, W) {
        (self.tree, self.output)
    }

    fn step(&mut self) -> Result<Flow> {
        let Some(line) = self.ask("Choose an option (1-5): ")? else {
            info!("End of input, leaving the menu");
            return Ok(Flow::Stop);
        };

        match MenuChoice::from_input(&line) {
            Some(MenuChoice::Insert) => self.insert(),
            Some(MenuChoice::Search) => self.search(),
            Some(MenuChoice::Update) => self.update(),
            Some(MenuChoice::List) => self.list(),
            Some(MenuChoice::Exit) => {
                writeln!(self.output, "Exiting the program.")?;
                Ok(Flow::Stop)
            }
            None => {
                debug!("Unrecognised menu input: {:?}", line);
                writeln!(
                    self.output,
                    "Invalid choice, please select a number between 1 and 5."
                )?;
                Ok(Flow::Continue)
            }
        }
    }

    fn insert(&mut self) -> Result<Flow> {
        let Some(raw) = self.ask("Enter stock symbol (e.g., AAPL): ")? else {
            return Ok(Flow::Stop);
        };
        let symbol = match self.rules.parse(&raw) {
            Ok(symbol) => symbol,
            Err(e) => return self.reject(e),
        };
        let Some(raw_price) = self.ask(&format!("Enter price for {}: ", symbol))? else {
            return Ok(Flow::Stop);
        };
        let price = match parse_price(&raw_price) {
            Ok(price) => price,
            Err(e) => return self.reject(e),
        };

        info!("Insert {} at {:.2}", symbol, price);
        writeln!(self.output, "Stock {} inserted with price {:.2}.", symbol, price)?;
        self.tree.insert(symbol, price);
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        let Some(raw) = self.ask("Enter stock symbol to search (e.g., AAPL): ")? else {
            return Ok(Flow::Stop);
        };
        let symbol = match self.rules.parse(&raw) {
            Ok(symbol) => symbol,
            Err(e) => return self.reject(e),
        };

        match self.tree.search(symbol.as_str()) {
            Some(price) => writeln!(self.output, "Price of {}: {:.2}", symbol, price)?,
            None => writeln!(self.output, "Stock symbol {} not found.", symbol)?,
        }
        Ok(Flow::Continue)
    }

    fn update(&mut self) -> Result<Flow> {
        let Some(raw) = self.ask("Enter stock symbol to update price (e.g., AAPL): ")? else {
            return Ok(Flow::Stop);
        };
        let symbol = match self.rules.parse(&raw) {
            Ok(symbol) => symbol,
            Err(e) => return self.reject(e),
        };
        let Some(raw_price) = self.ask(&format!("Enter new price for {}: ", symbol))? else {
            return Ok(Flow::Stop);
        };
        let price = match parse_price(&raw_price) {
            Ok(price) => price,
            Err(e) => return self.reject(e),
        };

        match self.tree.try_update(symbol.as_str(), price) {
            Ok(()) => {
                info!("Update {} to {:.2}", symbol, price);
                writeln!(self.output, "Price of {} updated to {:.2}.", symbol, price)?;
            }
            Err(TreeError::NotFound(missing)) => {
                debug!("Update of absent symbol {}", missing);
                writeln!(self.output, "Stock symbol not found in the tree.")?;
            }
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }

    fn list(&mut self) -> Result<Flow> {
        match self.list_format {
            ListFormat::Text => {
                writeln!(self.output)?;
                writeln!(self.output, "All stocks:")?;
                if self.tree.is_empty() {
                    writeln!(self.output, "No stocks in the tree.")?;
                }
                for (symbol, price) in &self.tree {
                    writeln!(self.output, "{}: {:.2}", symbol, price)?;
                }
            }
            ListFormat::Json => {
                let json = serde_json::to_string_pretty(&self.tree.entries())?;
                writeln!(self.output, "{}", json)?;
            }
        }
        debug!("Listed {} stocks, depth {}", self.tree.len(), self.tree.depth());
        Ok(Flow::Continue)
    }

    fn reject(&mut self, err: TreeError) -> Result<Flow> {
        debug!("Rejected input: {}", err);
        writeln!(self.output, "{}", err)?;
        Ok(Flow::Continue)
    }

    /// Prints `prompt` and reads one line. `None` means end of input; bytes that are
    /// not UTF-8 come back as [`TreeError::Utf8`].
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8(buf)?;
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}
