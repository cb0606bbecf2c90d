// src/hero/src/lib.rs
//! The hero: a unit with a single-use item bag and a fixed strike rule.

mod bag;
mod core;

pub use self::{
    bag::{Bag, BagError},
    core::{Hero, constants},
};
