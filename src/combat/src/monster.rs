// src/combat/src/monster.rs

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::combatant::{Combatant, TurnPlan};
use crate::event::BattleEvent;
use crate::rng::BattleRng;
use crate::unit::{Faction, Unit};

/// Monster balance values
pub mod constants {
    pub const HEALTH: u32 = 80;
    /// Displayed damage stat; strikes use the species value instead
    pub const DAMAGE: u32 = 20;
    pub const INITIATIVE: u32 = 5;
    /// Below this health the monster stops attacking on every turn
    pub const DESPERATE_BELOW: u32 = 30;
    /// Number of equally likely choices when desperate
    pub const DESPERATE_CHOICES: u32 = 3;
}

/// Monster species; iteration order is the standard roster order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
pub enum MonsterKind {
    Goblin,
    Orc,
    Troll,
}

impl MonsterKind {
    pub fn name(self) -> &'static str {
        match self {
            MonsterKind::Goblin => "Goblin",
            MonsterKind::Orc => "Orc",
            MonsterKind::Troll => "Troll",
        }
    }

    /// Damage of a monster strike
    pub fn base_damage(self) -> u32 {
        match self {
            MonsterKind::Goblin => 12,
            MonsterKind::Troll => 15,
            MonsterKind::Orc => 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonsterAction {
    Attack,
    Defend,
    Skip,
}

impl MonsterAction {
    /// Maps a desperate draw to an action. Total over `u32`: anything past the
    /// first two values is an attack.
    pub fn from_roll(roll: u32) -> Self {
        match roll {
            0 => MonsterAction::Defend,
            1 => MonsterAction::Skip,
            _ => MonsterAction::Attack,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Monster {
    kind: MonsterKind,
    unit: Unit,
}

impl Monster {
    pub fn new(kind: MonsterKind) -> Self {
        Self {
            kind,
            unit: Unit::new(
                kind.name(),
                Faction::Monster,
                constants::HEALTH,
                constants::DAMAGE,
                constants::INITIATIVE,
            ),
        }
    }

    pub fn kind(&self) -> MonsterKind {
        self.kind
    }

    /// Healthy monsters always attack; desperate ones pick uniformly among
    /// defend, skip and attack.
    pub fn decide_action(&self, rng: &mut BattleRng) -> MonsterAction {
        if self.unit.health() < constants::DESPERATE_BELOW {
            MonsterAction::from_roll(rng.random_range(0..constants::DESPERATE_CHOICES))
        } else {
            MonsterAction::Attack
        }
    }
}

impl Combatant for Monster {
    fn unit(&self) -> &Unit {
        &self.unit
    }

    fn unit_mut(&mut self) -> &mut Unit {
        &mut self.unit
    }

    fn prepare_turn(&mut self, rng: &mut BattleRng) -> TurnPlan {
        match self.decide_action(rng) {
            MonsterAction::Attack => TurnPlan::strike(),
            MonsterAction::Defend => {
                self.unit.activate_shield();
                TurnPlan::hold().with_event(BattleEvent::Defended {
                    unit: self.unit.name().to_string(),
                })
            }
            MonsterAction::Skip => TurnPlan::hold().with_event(BattleEvent::Skipped {
                unit: self.unit.name().to_string(),
            }),
        }
    }

    fn strike_damage(&self) -> u32 {
        self.kind.base_damage()
    }
}
