//! Round-based scheduler driving the battle to a result.
//!
//! Each round sorts the roster by initiative, lets every living fighter act in
//! that order, then recomputes lifecycle states and publishes a snapshot.
//! Later actors always see the damage dealt earlier in the same round.

use combat::{
    BattleEvent, BattleRng, Combatant, Intent, RoundSnapshot, TurnPlan, UnitId,
    find_strongest_target,
};
use error::SimError;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::log::BattleSink;
use crate::roster::Roster;

/// Round cap used when the caller does not pick one
pub const DEFAULT_MAX_ROUNDS: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleStatus {
    Running,
    HeroWon,
    MonstersWon,
    /// Neither side was eliminated before the round cap.
    RoundLimitReached,
}

impl BattleStatus {
    pub fn is_over(self) -> bool {
        self != BattleStatus::Running
    }

    /// Final line shown to the player, if the battle has a winner.
    pub fn announcement(self) -> Option<&'static str> {
        match self {
            BattleStatus::HeroWon => Some("Hero wins!"),
            BattleStatus::MonstersWon => Some("Monsters win!"),
            BattleStatus::Running | BattleStatus::RoundLimitReached => None,
        }
    }
}

/// Everything that happened in one round.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundReport {
    pub round: u32,
    pub events: Vec<BattleEvent>,
    pub snapshot: RoundSnapshot,
    pub status: BattleStatus,
}

pub struct Battle {
    roster: Roster,
    rng: BattleRng,
    round: u32,
    max_rounds: u32,
}

impl Battle {
    pub fn new(roster: Roster, rng: BattleRng) -> Self {
        Self {
            roster,
            rng,
            round: 0,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }

    /// At least one round is always allowed.
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds.max(1);
        self
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    /// Rounds played so far
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    /// A dead hero loses even if monsters fell in the same round.
    pub fn status(&self) -> BattleStatus {
        if !self.roster.hero_alive() {
            BattleStatus::MonstersWon
        } else if self.roster.monsters_alive() == 0 {
            BattleStatus::HeroWon
        } else if self.round >= self.max_rounds {
            BattleStatus::RoundLimitReached
        } else {
            BattleStatus::Running
        }
    }

    /// Plays one full round regardless of the current status.
    pub fn run_round(&mut self) -> RoundReport {
        self.round += 1;
        self.roster.sort_by_initiative();
        debug!(round = self.round, order = ?self.roster.turn_order(), "round started");

        let order = self.roster.turn_order().to_vec();
        let mut events = Vec::new();
        for id in order {
            events.extend(self.take_turn(id));
        }

        self.roster.update_states();
        let status = self.status();
        RoundReport {
            round: self.round,
            events,
            snapshot: self.roster.snapshot(self.round),
            status,
        }
    }

    /// Resolves one fighter's turn. Dead fighters do nothing.
    pub fn take_turn(&mut self, id: UnitId) -> Vec<BattleEvent> {
        let Some(actor) = self.roster.get_mut(id) else {
            return Vec::new();
        };
        if !actor.is_alive() {
            return Vec::new();
        }

        let TurnPlan { intent, mut events } = actor.prepare_turn(&mut self.rng);
        if intent == Intent::Hold {
            return events;
        }

        let attacker = actor.name().to_string();
        let faction = actor.unit().faction();
        let damage = actor.strike_damage();

        let target = find_strongest_target(id, self.roster.units_in_turn_order())
            .and_then(|target_id| self.roster.get_mut(target_id));
        match target {
            Some(target) => {
                let dealt = target.unit_mut().take_damage(damage);
                trace!(%attacker, target = target.name(), damage, dealt, "strike");
                events.push(BattleEvent::Strike {
                    attacker,
                    faction,
                    target: target.name().to_string(),
                    damage,
                    dealt,
                });
            }
            None => events.push(BattleEvent::NoTarget { unit: attacker }),
        }
        events
    }

    /// Runs rounds until a side is eliminated or the round cap is hit,
    /// forwarding everything to `sink`.
    pub fn run<S: BattleSink + ?Sized>(&mut self, sink: &mut S) -> Result<BattleStatus, SimError> {
        let span = tracing::info_span!("battle", seed = self.rng.seed());
        let _enter = span.enter();

        loop {
            let status = self.status();
            if status.is_over() {
                debug!(?status, rounds = self.round, "battle finished");
                sink.on_finish(status, self.round)?;
                return Ok(status);
            }

            let report = self.run_round();
            for event in &report.events {
                sink.on_event(event)?;
            }
            sink.on_round(&report.snapshot)?;
        }
    }
}
