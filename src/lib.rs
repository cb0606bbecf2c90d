//! Turn-based battle simulator: one hero against a pack of monsters.
//!
//! The engine lives in the `combat`, `hero` and `items` crates plus the
//! scheduler in [`battle`]. Everything under [`log`] and [`render`] only
//! observes the events the engine emits.

pub mod battle;
pub mod config;
pub mod log;
pub mod render;
pub mod roster;

pub use crate::battle::{Battle, BattleStatus, DEFAULT_MAX_ROUNDS, RoundReport};
pub use crate::config::SimConfig;
pub use crate::log::{BattleLog, BattleSink, LogFormat, RecordingSink};
pub use crate::render::ConsoleRenderer;
pub use crate::roster::{Fighter, HERO_NAME, Roster};
