// src/combat/src/targeting.rs

use crate::unit::{Unit, UnitId};

/// Picks the living unit with the most health, skipping `actor`.
///
/// Ties go to the first candidate in iteration order. The policy ignores
/// factions, so a monster will strike another monster that is healthier than
/// the hero.
pub fn find_strongest_target<'a, I>(actor: UnitId, roster: I) -> Option<UnitId>
where
    I: IntoIterator<Item = (UnitId, &'a Unit)>,
{
    let mut strongest: Option<(UnitId, u32)> = None;

    for (id, unit) in roster {
        if id == actor || !unit.is_alive() {
            continue;
        }
        // 严格大于：同血量时保留先遍历到的目标
        if strongest.is_none_or(|(_, best)| unit.health() > best) {
            strongest = Some((id, unit.health()));
        }
    }

    strongest.map(|(id, _)| id)
}
