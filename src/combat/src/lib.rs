// src/combat/src/lib.rs
//! Combat primitives: unit state, targeting, monster behaviour, events and
//! the deterministic RNG the battle loop injects into behaviours.

pub mod combatant;
pub mod event;
pub mod monster;
pub mod rng;
pub mod snapshot;
pub mod targeting;
pub mod unit;

#[cfg(test)]
mod tests;

pub use crate::combatant::{Combatant, Intent, TurnPlan};
pub use crate::event::BattleEvent;
pub use crate::monster::{Monster, MonsterAction, MonsterKind};
pub use crate::rng::BattleRng;
pub use crate::snapshot::{RoundSnapshot, UnitStatus};
pub use crate::targeting::find_strongest_target;
pub use crate::unit::{Faction, STAT_CAP, Unit, UnitId, UnitState};
