// src/combat/src/unit.rs

use items::ItemTarget;
use serde::{Deserialize, Serialize};

use crate::snapshot::UnitStatus;

/// Upper bound for both health and damage
pub const STAT_CAP: u32 = 100;

/// Stable handle of a unit inside the roster arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub usize);

/// 阵营（仅用于显示与事件描述，索敌不区分阵营）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Hero,
    Monster,
}

/// Cosmetic lifecycle tag, recomputed once per round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnitState {
    #[default]
    Idle,
    Attacking,
    Dead,
}

impl UnitState {
    pub fn label(self) -> &'static str {
        match self {
            UnitState::Idle => "Idle",
            UnitState::Attacking => "Attacking",
            UnitState::Dead => "Dead",
        }
    }
}

/// Mutable combat state shared by every combatant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    name: String,
    faction: Faction,
    health: u32,
    damage: u32,
    initiative: u32,
    shielded: bool,
    state: UnitState,
}

impl Unit {
    pub fn new(
        name: impl Into<String>,
        faction: Faction,
        health: u32,
        damage: u32,
        initiative: u32,
    ) -> Self {
        Self {
            name: name.into(),
            faction,
            health: health.min(STAT_CAP),
            damage: damage.min(STAT_CAP),
            initiative,
            shielded: false,
            state: UnitState::Idle,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn faction(&self) -> Faction {
        self.faction
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }

    pub fn initiative(&self) -> u32 {
        self.initiative
    }

    pub fn is_shielded(&self) -> bool {
        self.shielded
    }

    pub fn state(&self) -> UnitState {
        self.state
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn activate_shield(&mut self) {
        self.shielded = true;
    }

    pub fn increase_damage(&mut self, amount: u32) {
        self.damage = self.damage.saturating_add(amount).min(STAT_CAP);
    }

    /// Dead units are not guarded: a heal brings them back above zero health.
    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(STAT_CAP);
    }

    /// Applies an incoming hit and returns the amount that got past the shield.
    ///
    /// A raised shield halves the hit (truncating) and is spent even when the
    /// halved amount is zero.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let amount = if self.shielded {
            self.shielded = false;
            amount / 2
        } else {
            amount
        };
        self.health = self.health.saturating_sub(amount); // 使用saturating_sub防止下溢
        amount
    }

    /// Dead is terminal; living units flip between Idle and Attacking.
    pub fn update_state(&mut self) {
        self.state = if !self.is_alive() {
            UnitState::Dead
        } else {
            match self.state {
                UnitState::Idle => UnitState::Attacking,
                UnitState::Attacking => UnitState::Idle,
                UnitState::Dead => UnitState::Dead,
            }
        };
    }

    pub fn status(&self) -> UnitStatus {
        UnitStatus {
            name: self.name.clone(),
            faction: self.faction,
            health: self.health,
            damage: self.damage,
            state: self.state,
        }
    }
}

impl ItemTarget for Unit {
    fn heal(&mut self, amount: u32) {
        Unit::heal(self, amount);
    }

    fn increase_damage(&mut self, amount: u32) {
        Unit::increase_damage(self, amount);
    }

    fn activate_shield(&mut self) {
        Unit::activate_shield(self);
    }
}
