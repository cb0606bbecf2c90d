#[cfg(test)]
mod combat_tests {
    use crate::combatant::{Combatant, Intent};
    use crate::event::BattleEvent;
    use crate::monster::{Monster, MonsterAction, MonsterKind};
    use crate::rng::BattleRng;
    use crate::targeting::find_strongest_target;
    use crate::unit::{Faction, Unit, UnitId, UnitState};
    use items::{ItemEffect, ItemKind};
    use proptest::prelude::*;

    fn unit(name: &str, health: u32) -> Unit {
        Unit::new(name, Faction::Monster, health, 20, 5)
    }

    fn roster(units: &[Unit]) -> impl Iterator<Item = (UnitId, &Unit)> {
        units.iter().enumerate().map(|(i, u)| (UnitId(i), u))
    }

    #[test]
    fn test_stats_are_capped_on_creation() {
        let u = Unit::new("Giant", Faction::Monster, 250, 180, 1);
        assert_eq!(u.health(), 100);
        assert_eq!(u.damage(), 100);
    }

    #[test]
    fn test_heal_and_buff_clamp() {
        let mut u = unit("Orc", 80);
        u.heal(30);
        assert_eq!(u.health(), 100);

        u.increase_damage(10);
        assert_eq!(u.damage(), 30);
        for _ in 0..10 {
            u.increase_damage(10);
        }
        assert_eq!(u.damage(), 100);
    }

    #[test]
    fn test_heal_revives_dead_unit() {
        // 原版未对死亡单位的治疗做保护
        let mut u = unit("Orc", 10);
        u.take_damage(50);
        assert!(!u.is_alive());
        u.heal(30);
        assert_eq!(u.health(), 30);
    }

    #[test]
    fn test_shield_halves_next_hit_only() {
        let mut troll = Monster::new(MonsterKind::Troll);
        troll.unit_mut().activate_shield();

        assert_eq!(troll.unit_mut().take_damage(20), 10);
        assert_eq!(troll.unit().health(), 70);
        assert!(!troll.unit().is_shielded());

        assert_eq!(troll.unit_mut().take_damage(20), 20);
        assert_eq!(troll.unit().health(), 50);
    }

    #[test]
    fn test_shield_truncates_and_is_spent_on_zero() {
        let mut u = unit("Goblin", 80);
        u.activate_shield();
        u.activate_shield();
        assert_eq!(u.take_damage(15), 7);
        assert_eq!(u.health(), 73);

        u.activate_shield();
        assert_eq!(u.take_damage(1), 0);
        assert_eq!(u.health(), 73);
        assert!(!u.is_shielded());
    }

    #[test]
    fn test_damage_floors_at_zero() {
        let mut u = unit("Goblin", 12);
        u.take_damage(20);
        assert_eq!(u.health(), 0);
        assert!(!u.is_alive());
    }

    #[test]
    fn test_state_transitions() {
        let mut u = unit("Orc", 80);
        assert_eq!(u.state(), UnitState::Idle);
        u.update_state();
        assert_eq!(u.state(), UnitState::Attacking);
        u.update_state();
        assert_eq!(u.state(), UnitState::Idle);

        u.take_damage(100);
        u.update_state();
        assert_eq!(u.state(), UnitState::Dead);
        u.update_state();
        assert_eq!(u.state(), UnitState::Dead);
    }

    #[test]
    fn test_targeting_picks_healthiest_living_other() {
        let units = vec![unit("Arthur", 40), unit("Goblin", 70), unit("Orc", 90), unit("Troll", 0)];
        assert_eq!(find_strongest_target(UnitId(0), roster(&units)), Some(UnitId(2)));
        // Orc cannot target itself
        assert_eq!(find_strongest_target(UnitId(2), roster(&units)), Some(UnitId(1)));
    }

    #[test]
    fn test_targeting_tie_keeps_first() {
        let units = vec![unit("Arthur", 100), unit("Goblin", 80), unit("Orc", 80)];
        assert_eq!(find_strongest_target(UnitId(0), roster(&units)), Some(UnitId(1)));
    }

    #[test]
    fn test_targeting_single_candidate_and_none() {
        let units = vec![unit("Arthur", 5), unit("Goblin", 0), unit("Orc", 1)];
        assert_eq!(find_strongest_target(UnitId(0), roster(&units)), Some(UnitId(2)));

        let units = vec![unit("Arthur", 5), unit("Goblin", 0)];
        assert_eq!(find_strongest_target(UnitId(0), roster(&units)), None);
        assert_eq!(find_strongest_target(UnitId(0), roster(&units[..1])), None);
    }

    #[test]
    fn test_species_damage() {
        assert_eq!(Monster::new(MonsterKind::Goblin).strike_damage(), 12);
        assert_eq!(Monster::new(MonsterKind::Orc).strike_damage(), 20);
        assert_eq!(Monster::new(MonsterKind::Troll).strike_damage(), 15);
        assert_eq!(Monster::new(MonsterKind::Troll).unit().damage(), 20);
    }

    #[test]
    fn test_roll_mapping_is_total() {
        assert_eq!(MonsterAction::from_roll(0), MonsterAction::Defend);
        assert_eq!(MonsterAction::from_roll(1), MonsterAction::Skip);
        assert_eq!(MonsterAction::from_roll(2), MonsterAction::Attack);
        assert_eq!(MonsterAction::from_roll(u32::MAX), MonsterAction::Attack);
    }

    #[test]
    fn test_healthy_monster_always_attacks() {
        let mut rng = BattleRng::new(7);
        let mut orc = Monster::new(MonsterKind::Orc);
        orc.unit_mut().take_damage(50); // 30 health: not yet desperate
        for _ in 0..100 {
            assert_eq!(orc.decide_action(&mut rng), MonsterAction::Attack);
        }
    }

    #[test]
    fn test_desperate_monster_uses_all_actions() {
        let mut rng = BattleRng::new(42);
        let mut orc = Monster::new(MonsterKind::Orc);
        orc.unit_mut().take_damage(51);

        let actions: Vec<_> = (0..200).map(|_| orc.decide_action(&mut rng)).collect();
        assert!(actions.contains(&MonsterAction::Attack));
        assert!(actions.contains(&MonsterAction::Defend));
        assert!(actions.contains(&MonsterAction::Skip));
    }

    #[test]
    fn test_defend_raises_own_shield() {
        let mut goblin = Monster::new(MonsterKind::Goblin);
        goblin.unit_mut().take_damage(60);

        let mut rng = BattleRng::new(1);
        for _ in 0..200 {
            let plan = goblin.prepare_turn(&mut rng);
            if plan.events.first() == Some(&BattleEvent::Defended { unit: "Goblin".into() }) {
                assert_eq!(plan.intent, Intent::Hold);
                assert!(goblin.unit().is_shielded());
                return;
            }
        }
        panic!("desperate goblin never defended in 200 turns");
    }

    #[test]
    fn test_event_messages() {
        let hero_strike = BattleEvent::Strike {
            attacker: "Arthur".into(),
            faction: Faction::Hero,
            target: "Goblin".into(),
            damage: 25,
            dealt: 25,
        };
        assert_eq!(hero_strike.to_string(), "Arthur is attacking to Goblin");

        let monster_strike = BattleEvent::Strike {
            attacker: "Troll".into(),
            faction: Faction::Monster,
            target: "Arthur".into(),
            damage: 15,
            dealt: 7,
        };
        assert_eq!(monster_strike.to_string(), "Troll attacks to Arthur with 15 damage");

        let potion = BattleEvent::ItemUsed {
            user: "Arthur".into(),
            item: ItemKind::Potion,
            effect: ItemEffect::Healed(30),
        };
        assert_eq!(potion.to_string(), "Arthur uses a potion and heals 30 HP!");
        assert_eq!(potion.actor(), "Arthur");

        let skip = BattleEvent::Skipped { unit: "Orc".into() };
        assert_eq!(skip.to_string(), "Orc skips the turn");
    }

    #[test]
    fn test_event_json_is_tagged() {
        let event = BattleEvent::Defended { unit: "Orc".into() };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"kind":"defended","unit":"Orc"}"#);
    }

    proptest! {
        #[test]
        fn prop_health_stays_in_range(start in 0u32..=100, hits in prop::collection::vec(0u32..500, 0..20), shield in any::<bool>()) {
            let mut u = unit("Orc", start);
            if shield {
                u.activate_shield();
            }
            for hit in hits {
                u.take_damage(hit);
                prop_assert!(u.health() <= 100);
            }
        }

        #[test]
        fn prop_shield_takes_exactly_half(start in 1u32..=100, hit in 0u32..200) {
            let mut u = unit("Orc", start);
            u.activate_shield();
            let dealt = u.take_damage(hit);
            prop_assert_eq!(dealt, hit / 2);
            prop_assert_eq!(u.health(), start.saturating_sub(hit / 2));
            prop_assert!(!u.is_shielded());
        }

        #[test]
        fn prop_target_is_never_dead_or_self(healths in prop::collection::vec(0u32..=100, 1..8), actor in 0usize..8) {
            let units: Vec<Unit> = healths.iter().map(|&h| unit("U", h)).collect();
            let actor = UnitId(actor % units.len());
            if let Some(target) = find_strongest_target(actor, roster(&units)) {
                prop_assert_ne!(target, actor);
                prop_assert!(units[target.0].is_alive());
            }
        }
    }
}
