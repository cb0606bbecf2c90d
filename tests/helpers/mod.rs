//! Builders shared by the battle integration tests.

#![allow(dead_code)]

use battle_simulator::{Battle, HERO_NAME, RecordingSink, Roster};
use combat::{BattleRng, Combatant, UnitId};

/// Standard Arthur vs Goblin/Orc/Troll battle with a fixed seed.
pub fn standard_battle(seed: u64) -> Battle {
    Battle::new(Roster::standard(), BattleRng::new(seed))
}

pub fn id_of(battle: &Battle, name: &str) -> UnitId {
    battle
        .roster()
        .find(name)
        .unwrap_or_else(|| panic!("no unit named {name}"))
}

pub fn hero_id(battle: &Battle) -> UnitId {
    id_of(battle, HERO_NAME)
}

/// Deals raw (unshielded unless a shield is up) damage to a named unit.
pub fn wound(battle: &mut Battle, name: &str, amount: u32) {
    let id = id_of(battle, name);
    battle
        .roster_mut()
        .get_mut(id)
        .expect("unit exists")
        .unit_mut()
        .take_damage(amount);
}

pub fn health_of(battle: &Battle, name: &str) -> u32 {
    let id = id_of(battle, name);
    battle.roster().get(id).expect("unit exists").unit().health()
}

pub fn run_recorded(battle: &mut Battle) -> RecordingSink {
    let mut sink = RecordingSink::new();
    battle.run(&mut sink).expect("recording sink never fails");
    sink
}
