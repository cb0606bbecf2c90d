//src/items/src/consumable.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::EnumIter;

/// 消耗品数值（与原版战斗平衡一致）
pub mod constants {
    /// Health restored by a potion
    pub const POTION_HEAL: u32 = 30;
    /// Damage added by a buff
    pub const BUFF_DAMAGE: u32 = 10;
}

/// Single-use consumables the hero starts the battle with.
///
/// Iteration order (`ItemKind::iter()`) is the order of the starting kit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
pub enum ItemKind {
    Potion,
    Buff,
    Shield,
}

impl ItemKind {
    pub fn name(self) -> &'static str {
        match self {
            ItemKind::Potion => "Potion",
            ItemKind::Buff => "Buff",
            ItemKind::Shield => "Shield",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What an item did to its user, reported back to the battle log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", content = "amount", rename_all = "snake_case")]
pub enum ItemEffect {
    Healed(u32),
    DamageIncreased(u32),
    Shielded,
}

/// Anything an item can be applied to.
pub trait ItemTarget {
    fn heal(&mut self, amount: u32);

    fn increase_damage(&mut self, amount: u32);

    fn activate_shield(&mut self);
}
