use clap::Parser;
use std::path::PathBuf;

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// name announced to the game engine
    #[arg(long, env("HALITE_BOT_NAME"), default_value = "FleetDispatchBot")]
    pub bot_name: String,
    /// directory for the bot-<player-id>.log file. stdout is reserved for the engine protocol
    #[arg(long, env("HALITE_LOG_DIR"), default_value = ".")]
    pub log_dir: PathBuf,
    /// last turn in which new ships are spawned
    #[arg(long, env("HALITE_BUILD_CUTOFF_TURN"), default_value_t = 200)]
    pub build_cutoff_turn: usize,
    #[arg(long, env("HALITE_TURN_BUDGET_WARNING_MS"), default_value_t = 1500)]
    pub turn_budget_warning_ms: u64,
    /// seed handed over by the game environment, only logged
    pub seed: Option<u64>,
}
