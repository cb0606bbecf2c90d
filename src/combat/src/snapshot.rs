// src/combat/src/snapshot.rs

use serde::{Deserialize, Serialize};

use crate::unit::{Faction, UnitState};

/// Read-only view of one unit at the end of a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitStatus {
    pub name: String,
    pub faction: Faction,
    pub health: u32,
    pub damage: u32,
    pub state: UnitState,
}

impl UnitStatus {
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// Full-roster status published after every round, in turn order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub round: u32,
    pub units: Vec<UnitStatus>,
}

impl RoundSnapshot {
    pub fn find(&self, name: &str) -> Option<&UnitStatus> {
        self.units.iter().find(|u| u.name == name)
    }
}
