//! Stock symbols and the limits applied to them before they reach the tree.
//!
//! A [`Symbol`] can only be built through [`SymbolRules`], so every key stored in the
//! tree is non-empty and no longer than the configured maximum. Oversized input is
//! either rejected or truncated to the first `max_len` characters, depending on the
//! [`OverlongPolicy`].
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use log::info;
use serde::Serialize;
use strum_macros::{Display, EnumString};

use crate::error::TreeError;
use crate::result::Result;

/// Default maximum symbol length in characters.
pub const DEFAULT_MAX_SYMBOL_LEN: usize = 9;

/// What to do with a symbol longer than the configured maximum.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    ValueEnum,
    Display,
    EnumString,
    Eq,
    PartialEq,
)]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OverlongPolicy {
    /// Refuse the symbol with [`TreeError::SymbolTooLong`].
    #[default]
    Reject,
    /// Keep the first `max_len` characters.
    Truncate,
}

/// Length limit and overflow policy for symbols.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SymbolRules {
    max_len: usize,
    policy: OverlongPolicy,
}

impl Default for SymbolRules {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_SYMBOL_LEN,
            policy: OverlongPolicy::Reject,
        }
    }
}

impl SymbolRules {
    /// Creates rules with the given limit. A limit of zero admits no symbol and is refused.
    pub fn new(max_len: usize, policy: OverlongPolicy) -> Result<Self> {
        if max_len == 0 {
            return Err(TreeError::InvalidConfig(
                "maximum symbol length must be at least 1".to_string(),
            ));
        }
        Ok(Self { max_len, policy })
    }

    /// Maximum symbol length in characters.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Policy applied to symbols over the limit.
    pub fn policy(&self) -> OverlongPolicy {
        self.policy
    }

    /// Validates raw user input and turns it into a [`Symbol`].
    ///
    /// Surrounding whitespace is stripped first. Case is preserved. Length is counted
    /// in characters, and truncation never splits a multi-byte character.
    pub fn parse(&self, raw: &str) -> Result<Symbol> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TreeError::EmptySymbol);
        }

        match trimmed.char_indices().nth(self.max_len) {
            None => Ok(Symbol(trimmed.to_string())),
            Some((cut, _)) => match self.policy {
                OverlongPolicy::Reject => Err(TreeError::SymbolTooLong {
                    symbol: trimmed.to_string(),
                    max: self.max_len,
                }),
                OverlongPolicy::Truncate => {
                    let kept = &trimmed[..cut];
                    info!("Symbol {} truncated to {}", trimmed, kept);
                    Ok(Symbol(kept.to_string()))
                }
            },
        }
    }
}

/// Validated, owned stock symbol. Ordering is byte-wise on the underlying string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Returns the symbol text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Parses with the default rules (9 characters, reject overlong).
impl FromStr for Symbol {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self> {
        SymbolRules::default().parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_case_and_trims_whitespace() {
        let symbol: Symbol = "  aApl \n".parse().unwrap();
        assert_eq!(symbol.as_str(), "aApl");
    }

    #[test]
    fn empty_and_blank_symbols_are_rejected() {
        assert!(matches!("".parse::<Symbol>(), Err(TreeError::EmptySymbol)));
        assert!(matches!(" \t".parse::<Symbol>(), Err(TreeError::EmptySymbol)));
    }

    #[test]
    fn default_limit_is_nine_characters() {
        assert!("ABCDEFGHI".parse::<Symbol>().is_ok());
        match "ABCDEFGHIJ".parse::<Symbol>() {
            Err(TreeError::SymbolTooLong { symbol, max }) => {
                assert_eq!(symbol, "ABCDEFGHIJ");
                assert_eq!(max, 9);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn truncate_keeps_leading_characters() {
        let rules = SymbolRules::new(4, OverlongPolicy::Truncate).unwrap();
        assert_eq!(rules.parse("GOOGL").unwrap().as_str(), "GOOG");
        assert_eq!(rules.parse("IBM").unwrap().as_str(), "IBM");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let rules = SymbolRules::new(2, OverlongPolicy::Truncate).unwrap();
        assert_eq!(rules.parse("ÄÖÜ").unwrap().as_str(), "ÄÖ");
    }

    #[test]
    fn zero_limit_is_a_config_error() {
        assert!(matches!(
            SymbolRules::new(0, OverlongPolicy::Reject),
            Err(TreeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn policy_parses_case_insensitively() {
        assert_eq!("TRUNCATE".parse::<OverlongPolicy>().unwrap(), OverlongPolicy::Truncate);
        assert_eq!(OverlongPolicy::Reject.to_string(), "reject");
    }
}
