//! Event sinks: where battle events go once the engine has produced them.
//!
//! Sinks only observe. Nothing they do feeds back into the simulation.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use combat::{BattleEvent, RoundSnapshot};
use error::{ConfigError, SimError};
use serde::Serialize;

use crate::battle::BattleStatus;

/// Default location of the battle log store
pub const DEFAULT_LOG_PATH: &str = "battle_log.txt";

/// Receives the stream produced by `Battle::run`.
pub trait BattleSink {
    fn on_event(&mut self, event: &BattleEvent) -> Result<(), SimError>;

    fn on_round(&mut self, _snapshot: &RoundSnapshot) -> Result<(), SimError> {
        Ok(())
    }

    fn on_finish(&mut self, _status: BattleStatus, _rounds: u32) -> Result<(), SimError> {
        Ok(())
    }
}

impl<S: BattleSink + ?Sized> BattleSink for &mut S {
    fn on_event(&mut self, event: &BattleEvent) -> Result<(), SimError> {
        (**self).on_event(event)
    }

    fn on_round(&mut self, snapshot: &RoundSnapshot) -> Result<(), SimError> {
        (**self).on_round(snapshot)
    }

    fn on_finish(&mut self, status: BattleStatus, rounds: u32) -> Result<(), SimError> {
        (**self).on_finish(status, rounds)
    }
}

/// Fan-out: the first sink sees every call before the second.
impl<A: BattleSink, B: BattleSink> BattleSink for (A, B) {
    fn on_event(&mut self, event: &BattleEvent) -> Result<(), SimError> {
        self.0.on_event(event)?;
        self.1.on_event(event)
    }

    fn on_round(&mut self, snapshot: &RoundSnapshot) -> Result<(), SimError> {
        self.0.on_round(snapshot)?;
        self.1.on_round(snapshot)
    }

    fn on_finish(&mut self, status: BattleStatus, rounds: u32) -> Result<(), SimError> {
        self.0.on_finish(status, rounds)?;
        self.1.on_finish(status, rounds)
    }
}

/// Keeps the whole transcript in memory.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingSink {
    pub events: Vec<BattleEvent>,
    pub snapshots: Vec<RoundSnapshot>,
    pub finish: Option<(BattleStatus, u32)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Event messages in emission order
    pub fn messages(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }
}

impl BattleSink for RecordingSink {
    fn on_event(&mut self, event: &BattleEvent) -> Result<(), SimError> {
        self.events.push(event.clone());
        Ok(())
    }

    fn on_round(&mut self, snapshot: &RoundSnapshot) -> Result<(), SimError> {
        self.snapshots.push(snapshot.clone());
        Ok(())
    }

    fn on_finish(&mut self, status: BattleStatus, rounds: u32) -> Result<(), SimError> {
        self.finish = Some((status, rounds));
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One message per line
    #[default]
    Text,
    /// One JSON record per line
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::InvalidValue {
                key: "BATTLE_LOG_FORMAT",
                value: s.to_string(),
                expected: "`text` or `json`",
            }),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum LogRecord<'a> {
    Event(&'a BattleEvent),
    Round(&'a RoundSnapshot),
    Finish { status: BattleStatus, rounds: u32 },
}

/// Append-only battle log file.
///
/// Text logs hold the event messages and the final result. JSON logs also
/// record each round's snapshot.
#[derive(Debug)]
pub struct BattleLog {
    path: PathBuf,
    file: File,
    format: LogFormat,
}

impl BattleLog {
    /// Opens (or creates) the log without touching existing contents.
    pub fn open(path: impl AsRef<Path>, format: LogFormat) -> Result<Self, SimError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self { path, file, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Clears the store before a new battle.
    pub fn reset(&mut self) -> Result<(), SimError> {
        self.file.set_len(0)?;
        Ok(())
    }

    fn write_record(&mut self, record: &LogRecord<'_>) -> Result<(), SimError> {
        let line = serde_json::to_string(record)?;
        writeln!(self.file, "{line}")?;
        Ok(())
    }
}

impl BattleSink for BattleLog {
    fn on_event(&mut self, event: &BattleEvent) -> Result<(), SimError> {
        match self.format {
            LogFormat::Text => writeln!(self.file, "{event}")?,
            LogFormat::Json => self.write_record(&LogRecord::Event(event))?,
        }
        Ok(())
    }

    fn on_round(&mut self, snapshot: &RoundSnapshot) -> Result<(), SimError> {
        match self.format {
            LogFormat::Text => Ok(()),
            LogFormat::Json => self.write_record(&LogRecord::Round(snapshot)),
        }
    }

    fn on_finish(&mut self, status: BattleStatus, rounds: u32) -> Result<(), SimError> {
        match self.format {
            LogFormat::Text => {
                if let Some(line) = status.announcement() {
                    writeln!(self.file, "{line}")?;
                }
            }
            LogFormat::Json => self.write_record(&LogRecord::Finish { status, rounds })?,
        }
        self.file.flush()?;
        Ok(())
    }
}
