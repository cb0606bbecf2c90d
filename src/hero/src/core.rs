// src/hero/src/core.rs
use combat::{BattleEvent, BattleRng, Combatant, Faction, TurnPlan, Unit};
use items::{ItemEffect, ItemKind};

use crate::bag::Bag;

/// 英雄数值（与原版一致）
pub mod constants {
    pub const HEALTH: u32 = 100;
    pub const DAMAGE: u32 = 25;
    pub const INITIATIVE: u32 = 6;
    /// A potion is only drunk below this health
    pub const POTION_BELOW: u32 = 40;
    /// Strikes are strong while health is above this
    pub const STRONG_ABOVE: u32 = 50;
    pub const STRONG_STRIKE: u32 = 25;
    pub const WEAK_STRIKE: u32 = 15;
}

/// 英雄核心数据结构
#[derive(Debug, PartialEq)]
pub struct Hero {
    unit: Unit,
    bag: Bag,
}

impl Hero {
    /// A fresh hero carrying the starting kit.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_bag(name, Bag::starting_kit())
    }

    pub fn with_bag(name: impl Into<String>, bag: Bag) -> Self {
        Self {
            unit: Unit::new(
                name,
                Faction::Hero,
                constants::HEALTH,
                constants::DAMAGE,
                constants::INITIATIVE,
            ),
            bag,
        }
    }

    pub fn bag(&self) -> &Bag {
        &self.bag
    }

    /// Uses at most one item, scanning the bag in order.
    ///
    /// At each slot a potion wins if health is low, otherwise a buff is
    /// taken. Shields are carried but never picked by this rule.
    pub fn use_item_if_needed(&mut self) -> Option<(ItemKind, ItemEffect)> {
        let low = self.unit.health() < constants::POTION_BELOW;
        let index = self.bag.kinds().position(|kind| match kind {
            ItemKind::Potion => low,
            ItemKind::Buff => true,
            ItemKind::Shield => false,
        })?;

        let item = self.bag.take(index).ok()?;
        let kind = item.kind();
        Some((kind, item.consume(&mut self.unit)))
    }
}

impl Combatant for Hero {
    fn unit(&self) -> &Unit {
        &self.unit
    }

    fn unit_mut(&mut self) -> &mut Unit {
        &mut self.unit
    }

    /// Drinking a potion takes the whole turn; a buff is quick enough to
    /// strike afterwards.
    fn prepare_turn(&mut self, _rng: &mut BattleRng) -> TurnPlan {
        let Some((kind, effect)) = self.use_item_if_needed() else {
            return TurnPlan::strike();
        };

        let plan = match kind {
            ItemKind::Potion => TurnPlan::hold(),
            ItemKind::Buff | ItemKind::Shield => TurnPlan::strike(),
        };
        plan.with_event(BattleEvent::ItemUsed {
            user: self.unit.name().to_string(),
            item: kind,
            effect,
        })
    }

    fn strike_damage(&self) -> u32 {
        if self.unit.health() > constants::STRONG_ABOVE {
            constants::STRONG_STRIKE
        } else {
            constants::WEAK_STRIKE
        }
    }
}
