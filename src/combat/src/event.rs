// src/combat/src/event.rs
//! Structured battle events.
//!
//! The engine only produces these values; printing and persisting them is
//! left to whichever sink the caller plugs in. `Display` gives the canonical
//! one-line message for each event.

use items::{ItemEffect, ItemKind};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::unit::Faction;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BattleEvent {
    /// `damage` is the nominal strike, `dealt` what got past the target's shield.
    Strike {
        attacker: String,
        faction: Faction,
        target: String,
        damage: u32,
        dealt: u32,
    },
    ItemUsed {
        user: String,
        item: ItemKind,
        effect: ItemEffect,
    },
    Defended {
        unit: String,
    },
    Skipped {
        unit: String,
    },
    /// The actor wanted to strike but every other unit is dead.
    NoTarget {
        unit: String,
    },
}

impl BattleEvent {
    /// Name of the unit whose turn produced the event.
    pub fn actor(&self) -> &str {
        match self {
            BattleEvent::Strike { attacker, .. } => attacker,
            BattleEvent::ItemUsed { user, .. } => user,
            BattleEvent::Defended { unit }
            | BattleEvent::Skipped { unit }
            | BattleEvent::NoTarget { unit } => unit,
        }
    }
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleEvent::Strike {
                attacker,
                faction: Faction::Hero,
                target,
                ..
            } => write!(f, "{attacker} is attacking to {target}"),
            BattleEvent::Strike {
                attacker,
                faction: Faction::Monster,
                target,
                damage,
                ..
            } => write!(f, "{attacker} attacks to {target} with {damage} damage"),
            BattleEvent::ItemUsed { user, effect, .. } => match effect {
                ItemEffect::Healed(amount) => {
                    write!(f, "{user} uses a potion and heals {amount} HP!")
                }
                ItemEffect::DamageIncreased(amount) => {
                    write!(f, "{user} uses a buff and increase {amount} Damage!")
                }
                ItemEffect::Shielded => {
                    write!(f, "{user} raises a shield and will take half damage!")
                }
            },
            BattleEvent::Defended { unit } => write!(f, "{unit} defends and protect his health"),
            BattleEvent::Skipped { unit } => write!(f, "{unit} skips the turn"),
            BattleEvent::NoTarget { unit } => write!(f, "{unit} has no one left to fight"),
        }
    }
}
