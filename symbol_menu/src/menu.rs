//! Menu entries and their numeric selection.
use std::io::Write;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// One selectable line of the main menu.
#[derive(Debug, Clone, Copy, Display, EnumIter, Eq, PartialEq)]
pub enum MenuChoice {
    /// Insert a symbol or overwrite its price.
    #[strum(to_string = "Insert a stock")]
    Insert = 1,
    /// Look up a price.
    #[strum(to_string = "Search for a stock")]
    Search = 2,
    /// Change the price of an existing symbol.
    #[strum(to_string = "Update the price of a stock")]
    Update = 3,
    /// Print every entry in symbol order.
    #[strum(to_string = "Display all stocks")]
    List = 4,
    /// Leave the menu.
    #[strum(to_string = "Exit")]
    Exit = 5,
}

impl MenuChoice {
    /// Number the user types to pick this entry.
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Maps a line of user input to a menu entry.
    pub fn from_input(input: &str) -> Option<Self> {
        let number: u8 = input.trim().parse().ok()?;
        MenuChoice::iter().find(|choice| choice.number() == number)
    }
}

/// Writes the menu header and every entry.
pub fn render_menu<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Stock Market Tree Menu:")?;
    for choice in MenuChoice::iter() {
        writeln!(out, "{}. {}", choice.number(), choice)?;
    }
    Ok(())
}
