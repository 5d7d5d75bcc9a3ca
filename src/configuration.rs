use crate::cli_args::Cli;
use hb_core::StrategyConfig;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct BotConfiguration {
    pub bot_name: String,
    pub log_dir: PathBuf,
    pub turn_budget_warning: Duration,
    pub seed: Option<u64>,
    pub strategy: StrategyConfig,
}

impl BotConfiguration {
    pub fn new(cli: Cli) -> Self {
        let Cli {
            bot_name,
            log_dir,
            build_cutoff_turn,
            turn_budget_warning_ms,
            seed,
        } = cli;

        Self {
            bot_name,
            log_dir,
            turn_budget_warning: Duration::from_millis(turn_budget_warning_ms),
            seed,
            strategy: StrategyConfig {
                build_cutoff_turn,
                ..StrategyConfig::default()
            },
        }
    }
}
