use anyhow::{Context, Result};
use battle_simulator::{Battle, BattleLog, ConsoleRenderer, Roster, SimConfig};
use combat::BattleRng;
use error::handle_error;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SimConfig::from_env().context("Failed to load simulator settings")?;
    tracing::info!(seed = config.seed, max_rounds = config.max_rounds, "starting battle");

    let mut log = BattleLog::open(&config.log_path, config.log_format)
        .with_context(|| format!("Failed to open battle log {}", config.log_path.display()))?;
    log.reset().context("Failed to reset battle log")?;

    let mut sinks = (ConsoleRenderer::stdout(config.color), log);
    let mut battle = Battle::new(Roster::standard(), BattleRng::new(config.seed))
        .with_max_rounds(config.max_rounds);

    match battle.run(&mut sinks) {
        Ok(status) => {
            tracing::info!(?status, rounds = battle.round(), "battle over");
            Ok(())
        }
        Err(e) => {
            eprintln!("Battle aborted: {}", handle_error(&e));
            Err(e.into())
        }
    }
}
