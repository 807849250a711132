use anyhow::{Context, Result};
use clap::Parser;
use snake_arcade::game::GameConfig;
use snake_arcade::logging;
use snake_arcade::modes::HumanMode;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "snake_arcade")]
#[command(version, about = "Snake on a wrapping board with apples, poison and stones")]
struct Cli {
    /// JSON file with board and timing settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Ticks per second
    #[arg(long)]
    tick_rate: Option<u32>,

    /// Seed for reproducible boards
    #[arg(long)]
    seed: Option<u64>,

    /// Where log lines are written
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => GameConfig::default(),
        };

        if let Some(tick_rate) = self.tick_rate {
            config.tick_rate = tick_rate;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    logging::init(&log_path)?;

    let config = cli.game_config()?;
    info!(?config, "starting");

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    Ok(())
}
