//! Ordered symbol → price map backed by an unbalanced binary search tree.
//!
//! Keys are compared byte-wise. Inserting an existing symbol overwrites its price;
//! [`SymbolPriceTree::update`] never inserts. Nothing is ever removed.
//!
//! Design notes:
//! - No rebalancing is done, so every positional operation is O(depth) and depth
//!   degrades to O(n) when symbols arrive in sorted order. [`SymbolPriceTree::depth`]
//!   exposes the current height.
//! - Descent, traversal and drop are iterative, so a degenerate tree never grows the
//!   call stack.
use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use log::debug;

use crate::entry::Entry;
use crate::error::TreeError;
use crate::result::Result;
use crate::symbol::Symbol;

struct Node {
    symbol: Symbol,
    price: f32,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(symbol: Symbol, price: f32) -> Self {
        Node {
            symbol,
            price,
            left: None,
            right: None,
        }
    }
}

/// Binary search tree of stock symbols and their prices.
#[derive(Default)]
pub struct SymbolPriceTree {
    root: Option<Box<Node>>,
    len: usize,
}

impl SymbolPriceTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        SymbolPriceTree { root: None, len: 0 }
    }

    /// Number of distinct symbols stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no symbol has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `symbol` with `price`, or overwrites the price if the symbol is present.
    pub fn insert(&mut self, symbol: Symbol, price: f32) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match symbol.cmp(&node.symbol) {
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
                Ordering::Equal => {
                    debug!("{}: {:.2} -> {:.2}", symbol, node.price, price);
                    node.price = price;
                    return;
                }
            }
        }
        debug!("{}: new node at {:.2}", symbol, price);
        *link = Some(Box::new(Node::new(symbol, price)));
        self.len += 1;
    }

    /// Price stored for `symbol`, or `None` if it was never inserted.
    pub fn search(&self, symbol: &str) -> Option<f32> {
        self.find(symbol).map(|node| node.price)
    }

    /// Overwrites the price of an existing symbol. Returns `false` and leaves the tree
    /// untouched when the symbol is absent.
    pub fn update(&mut self, symbol: &str, new_price: f32) -> bool {
        match self.find_mut(symbol) {
            Some(node) => {
                debug!("{}: {:.2} -> {:.2}", symbol, node.price, new_price);
                node.price = new_price;
                true
            }
            None => false,
        }
    }

    /// Like [`update`](Self::update), but reports an absent symbol as
    /// [`TreeError::NotFound`].
    pub fn try_update(&mut self, symbol: &str, new_price: f32) -> Result<()> {
        if self.update(symbol, new_price) {
            Ok(())
        } else {
            Err(TreeError::NotFound(symbol.to_string()))
        }
    }

    /// In-order traversal: `(symbol, price)` pairs in ascending symbol order.
    ///
    /// Each call starts a fresh walk over the current contents.
    pub fn iter(&self) -> InOrder<'_> {
        InOrder::new(self.root.as_deref())
    }

    /// Owned copy of all entries in ascending symbol order.
    pub fn entries(&self) -> Vec<Entry> {
        self.iter()
            .map(|(symbol, price)| Entry::new(symbol.clone(), price))
            .collect()
    }

    /// Height of the tree: 0 when empty, 1 for a single node.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&Node, usize)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 1));
        }
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                stack.push((child, level + 1));
            }
        }
        deepest
    }

    fn find(&self, symbol: &str) -> Option<&Node> {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            match symbol.cmp(node.symbol.as_str()) {
                Ordering::Less => link = node.left.as_deref(),
                Ordering::Greater => link = node.right.as_deref(),
                Ordering::Equal => return Some(node),
            }
        }
        None
    }

    fn find_mut(&mut self, symbol: &str) -> Option<&mut Node> {
        let mut link = self.root.as_deref_mut();
        while let Some(node) = link {
            match symbol.cmp(node.symbol.as_str()) {
                Ordering::Less => link = node.left.as_deref_mut(),
                Ordering::Greater => link = node.right.as_deref_mut(),
                Ordering::Equal => return Some(node),
            }
        }
        None
    }
}

impl Drop for SymbolPriceTree {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl fmt::Debug for SymbolPriceTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(symbol, price)| (symbol.as_str(), price)))
            .finish()
    }
}

impl Extend<(Symbol, f32)> for SymbolPriceTree {
    fn extend<I: IntoIterator<Item = (Symbol, f32)>>(&mut self, iter: I) {
        for (symbol, price) in iter {
            self.insert(symbol, price);
        }
    }
}

impl FromIterator<(Symbol, f32)> for SymbolPriceTree {
    fn from_iter<I: IntoIterator<Item = (Symbol, f32)>>(iter: I) -> Self {
        let mut tree = SymbolPriceTree::new();
        tree.extend(iter);
        tree
    }
}

impl<'a> IntoIterator for &'a SymbolPriceTree {
    type Item = (&'a Symbol, f32);
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy in-order iterator over a [`SymbolPriceTree`], driven by an explicit stack.
pub struct InOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> InOrder<'a> {
    fn new(root: Option<&'a Node>) -> Self {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = (&'a Symbol, f32);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some((&node.symbol, node.price))
    }
}

impl FusedIterator for InOrder<'_> {}
