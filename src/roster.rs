//! Battle roster: an arena of fighters addressed by `UnitId`.
//!
//! Fighters never move inside the arena. Turn order is a separate list of ids
//! that is re-sorted by initiative before every round.

use std::cmp::Reverse;

use combat::{
    BattleRng, Combatant, Monster, MonsterKind, RoundSnapshot, TurnPlan, Unit, UnitId,
};
use hero::Hero;
use strum::IntoEnumIterator;

pub const HERO_NAME: &str = "Arthur";

/// Closed set of combatant kinds.
#[derive(Debug, PartialEq)]
pub enum Fighter {
    Hero(Hero),
    Monster(Monster),
}

impl Combatant for Fighter {
    fn unit(&self) -> &Unit {
        match self {
            Fighter::Hero(h) => h.unit(),
            Fighter::Monster(m) => m.unit(),
        }
    }

    fn unit_mut(&mut self) -> &mut Unit {
        match self {
            Fighter::Hero(h) => h.unit_mut(),
            Fighter::Monster(m) => m.unit_mut(),
        }
    }

    fn prepare_turn(&mut self, rng: &mut BattleRng) -> TurnPlan {
        match self {
            Fighter::Hero(h) => h.prepare_turn(rng),
            Fighter::Monster(m) => m.prepare_turn(rng),
        }
    }

    fn strike_damage(&self) -> u32 {
        match self {
            Fighter::Hero(h) => h.strike_damage(),
            Fighter::Monster(m) => m.strike_damage(),
        }
    }
}

#[derive(Debug)]
pub struct Roster {
    fighters: Vec<Fighter>,
    order: Vec<UnitId>,
}

impl Roster {
    /// Hero first, then the monsters in the given order.
    pub fn new(hero: Hero, monsters: impl IntoIterator<Item = Monster>) -> Self {
        let fighters: Vec<Fighter> = std::iter::once(Fighter::Hero(hero))
            .chain(monsters.into_iter().map(Fighter::Monster))
            .collect();
        let order = (0..fighters.len()).map(UnitId).collect();
        Self { fighters, order }
    }

    /// Arthur against a Goblin, an Orc and a Troll.
    pub fn standard() -> Self {
        Self::new(Hero::new(HERO_NAME), MonsterKind::iter().map(Monster::new))
    }

    pub fn len(&self) -> usize {
        self.fighters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fighters.is_empty()
    }

    pub fn get(&self, id: UnitId) -> Option<&Fighter> {
        self.fighters.get(id.0)
    }

    pub fn get_mut(&mut self, id: UnitId) -> Option<&mut Fighter> {
        self.fighters.get_mut(id.0)
    }

    pub fn find(&self, name: &str) -> Option<UnitId> {
        self.fighters
            .iter()
            .position(|f| f.name() == name)
            .map(UnitId)
    }

    pub fn hero(&self) -> Option<&Hero> {
        self.fighters.iter().find_map(|f| match f {
            Fighter::Hero(h) => Some(h),
            Fighter::Monster(_) => None,
        })
    }

    pub fn hero_mut(&mut self) -> Option<&mut Hero> {
        self.fighters.iter_mut().find_map(|f| match f {
            Fighter::Hero(h) => Some(h),
            Fighter::Monster(_) => None,
        })
    }

    pub fn monsters(&self) -> impl Iterator<Item = &Monster> {
        self.fighters.iter().filter_map(|f| match f {
            Fighter::Monster(m) => Some(m),
            Fighter::Hero(_) => None,
        })
    }

    pub fn hero_alive(&self) -> bool {
        self.hero().is_some_and(|h| h.is_alive())
    }

    pub fn monsters_alive(&self) -> usize {
        self.monsters().filter(|m| m.is_alive()).count()
    }

    /// Highest initiative first. Stable, so ties keep construction order.
    pub fn sort_by_initiative(&mut self) {
        let fighters = &self.fighters;
        self.order
            .sort_by_key(|id| Reverse(fighters[id.0].unit().initiative()));
    }

    pub fn turn_order(&self) -> &[UnitId] {
        &self.order
    }

    pub fn units_in_turn_order(&self) -> impl Iterator<Item = (UnitId, &Unit)> {
        self.order
            .iter()
            .filter_map(move |&id| self.get(id).map(|f| (id, f.unit())))
    }

    pub fn update_states(&mut self) {
        for fighter in &mut self.fighters {
            fighter.unit_mut().update_state();
        }
    }

    pub fn snapshot(&self, round: u32) -> RoundSnapshot {
        RoundSnapshot {
            round,
            units: self
                .units_in_turn_order()
                .map(|(_, unit)| unit.status())
                .collect(),
        }
    }
}
