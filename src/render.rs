//! Console renderer: `[LOG]` lines for events and a status table per round.

use std::io::{self, Stdout, Write};

use combat::{BattleEvent, Faction, RoundSnapshot, UnitState, UnitStatus};
use crossterm::style::Stylize;
use error::SimError;

use crate::battle::BattleStatus;
use crate::log::BattleSink;

/// Health bar geometry: one cell per 5 HP, 20 cells wide
const BAR_WIDTH: usize = 20;
const HP_PER_CELL: u32 = 5;

pub fn hp_bar(health: u32) -> String {
    let filled = ((health / HP_PER_CELL) as usize).min(BAR_WIDTH);
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

/// e.g. `Goblin      | HP: 55 | [###########.........] | DMG: 20  (Idle)`
pub fn status_line(status: &UnitStatus) -> String {
    format!(
        "{:<12}| HP: {:<3}| [{}] | DMG: {:<3} ({})",
        status.name,
        status.health,
        hp_bar(status.health),
        status.damage,
        status.state.label()
    )
}

pub struct ConsoleRenderer<W: Write> {
    out: W,
    color: bool,
}

impl ConsoleRenderer<Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    // 英雄绿色，怪物红色，死亡单位灰色
    fn paint(&self, status: &UnitStatus, line: String) -> String {
        if !self.color {
            return line;
        }
        match (status.state, status.faction) {
            (UnitState::Dead, _) => line.grey().to_string(),
            (_, Faction::Hero) => line.green().to_string(),
            (_, Faction::Monster) => line.red().to_string(),
        }
    }
}

impl<W: Write> BattleSink for ConsoleRenderer<W> {
    fn on_event(&mut self, event: &BattleEvent) -> Result<(), SimError> {
        writeln!(self.out, "[LOG] {event}")?;
        Ok(())
    }

    fn on_round(&mut self, snapshot: &RoundSnapshot) -> Result<(), SimError> {
        for status in &snapshot.units {
            let line = self.paint(status, status_line(status));
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out, "-----")?;
        Ok(())
    }

    fn on_finish(&mut self, status: BattleStatus, rounds: u32) -> Result<(), SimError> {
        match status.announcement() {
            Some(line) => writeln!(self.out, "{line}")?,
            None => writeln!(self.out, "No winner after {rounds} rounds.")?,
        }
        self.out.flush()?;
        Ok(())
    }
}
