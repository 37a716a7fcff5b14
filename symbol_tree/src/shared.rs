//! A [`SymbolPriceTree`] that can be handed to several threads.
//!
//! The whole tree sits behind one `Mutex`; every operation takes the lock exactly
//! once. A poisoned lock is reported as [`TreeError::MutexLock`](crate::TreeError::MutexLock).
use std::sync::{Arc, Mutex};

use crate::entry::Entry;
use crate::result::Result;
use crate::symbol::Symbol;
use crate::tree::SymbolPriceTree;

/// Cloneable handle to a mutex-protected tree.
#[derive(Clone, Default)]
pub struct SharedSymbolTree {
    inner: Arc<Mutex<SymbolPriceTree>>,
}

impl SharedSymbolTree {
    /// Wraps an existing tree.
    pub fn new(tree: SymbolPriceTree) -> Self {
        Self {
            inner: Arc::new(Mutex::new(tree)),
        }
    }

    /// See [`SymbolPriceTree::insert`].
    pub fn insert(&self, symbol: Symbol, price: f32) -> Result<()> {
        self.inner.lock()?.insert(symbol, price);
        Ok(())
    }

    /// See [`SymbolPriceTree::search`].
    pub fn search(&self, symbol: &str) -> Result<Option<f32>> {
        Ok(self.inner.lock()?.search(symbol))
    }

    /// See [`SymbolPriceTree::update`].
    pub fn update(&self, symbol: &str, new_price: f32) -> Result<bool> {
        Ok(self.inner.lock()?.update(symbol, new_price))
    }

    /// Consistent, ordered copy of all entries taken under a single lock.
    pub fn snapshot(&self) -> Result<Vec<Entry>> {
        Ok(self.inner.lock()?.entries())
    }

    /// See [`SymbolPriceTree::len`].
    pub fn len(&self) -> Result<usize> {
        Ok(self.inner.lock()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn concurrent_inserts_are_all_visible() {
        let shared = SharedSymbolTree::default();
        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for i in 0..50 {
                        let symbol: Symbol = format!("W{}N{:03}", worker, i).parse().unwrap();
                        shared.insert(symbol, i as f32).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.len().unwrap(), 200);
        assert_eq!(shared.search("W3N049").unwrap(), Some(49.0));
        assert!(shared.update("W0N000", 7.0).unwrap());
        assert!(!shared.update("NOPE", 7.0).unwrap());

        let snapshot = shared.snapshot().unwrap();
        assert!(snapshot.windows(2).all(|pair| pair[0].symbol < pair[1].symbol));
    }
}
