//src/items/src/lib.rs
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

pub use crate::consumable::{ItemEffect, ItemKind, ItemTarget, constants};

pub mod consumable;

/// 一次性物品，使用后即被消耗
///
/// `Item` is deliberately neither `Clone` nor `Copy`: `consume` takes it by
/// value, so a used item cannot be applied twice.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    kind: ItemKind,
}

impl Item {
    pub fn new(kind: ItemKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Applies the item to `target` and returns the effect for logging.
    pub fn consume<T: ItemTarget + ?Sized>(self, target: &mut T) -> ItemEffect {
        match self.kind {
            ItemKind::Potion => {
                target.heal(constants::POTION_HEAL);
                ItemEffect::Healed(constants::POTION_HEAL)
            }
            ItemKind::Buff => {
                target.increase_damage(constants::BUFF_DAMAGE);
                ItemEffect::DamageIncreased(constants::BUFF_DAMAGE)
            }
            ItemKind::Shield => {
                target.activate_shield();
                ItemEffect::Shielded
            }
        }
    }

    /// One of each consumable, in kit order: Potion, Buff, Shield.
    pub fn starting_kit() -> Vec<Item> {
        ItemKind::iter().map(Item::new).collect()
    }
}
