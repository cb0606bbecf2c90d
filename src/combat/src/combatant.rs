// src/combat/src/combatant.rs

use crate::event::BattleEvent;
use crate::rng::BattleRng;
use crate::unit::Unit;

/// Whether the actor still wants to strike once its self-directed work is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Strike,
    Hold,
}

/// Outcome of the self-directed half of a turn (item use, shield, decision).
#[derive(Debug, Clone, PartialEq)]
pub struct TurnPlan {
    pub intent: Intent,
    pub events: Vec<BattleEvent>,
}

impl TurnPlan {
    pub fn strike() -> Self {
        Self {
            intent: Intent::Strike,
            events: Vec::new(),
        }
    }

    pub fn hold() -> Self {
        Self {
            intent: Intent::Hold,
            events: Vec::new(),
        }
    }

    pub fn log(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn with_event(mut self, event: BattleEvent) -> Self {
        self.log(event);
        self
    }
}

/// 表示可以参加战斗的单位
///
/// A turn is split in two. `prepare_turn` only touches the actor itself; the
/// scheduler then resolves the strike against the rest of the roster using
/// `strike_damage`, which is read after preparation so it reflects any healing.
pub trait Combatant {
    fn unit(&self) -> &Unit;

    fn unit_mut(&mut self) -> &mut Unit;

    fn prepare_turn(&mut self, rng: &mut BattleRng) -> TurnPlan;

    /// Damage of this unit's strike in its current condition.
    fn strike_damage(&self) -> u32;

    fn name(&self) -> &str {
        self.unit().name()
    }

    fn is_alive(&self) -> bool {
        self.unit().is_alive()
    }
}
