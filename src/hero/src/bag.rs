// src/hero/src/bag.rs
use items::{Item, ItemKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BagError {
    #[error("no item at slot {0}")]
    InvalidIndex(usize),
}

/// Ordered, shrink-only inventory of single-use items.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bag {
    items: Vec<Item>,
}

impl Bag {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Potion, Buff, Shield
    pub fn starting_kit() -> Self {
        Self::new(Item::starting_kit())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, kind: ItemKind) -> bool {
        self.items.iter().any(|item| item.kind() == kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = ItemKind> + '_ {
        self.items.iter().map(Item::kind)
    }

    /// Removes the item at `index`, keeping the order of the rest.
    pub fn take(&mut self, index: usize) -> Result<Item, BagError> {
        if index >= self.items.len() {
            return Err(BagError::InvalidIndex(index));
        }
        Ok(self.items.remove(index))
    }
}
