use anyhow::{Context, Result};
use clap::Parser;
use halite_fleet_bot::cli_args::Cli;
use halite_fleet_bot::configuration::BotConfiguration;
use halite_fleet_bot::engine_client::EngineClient;
use halite_fleet_bot::game::Game;
use hb_core::{FleetAdmiral, HaliteAwarePathOracle};
use hb_domain::PlayerId;
use std::io;
use std::path::Path;
use std::time::Instant;
use time::format_description;
use tracing::{event, info_span, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, registry::Registry, EnvFilter};

fn main() -> Result<()> {
    let cfg = BotConfiguration::new(Cli::parse());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut client = EngineClient::new(stdin.lock(), stdout.lock());

    let mut game = Game::initialize(&mut client).context("Failed to read the initial game state")?;

    // keep the guard alive until the end, it flushes the log file on drop
    let _guard = setup_tracing(&cfg.log_dir, game.my_id)?;

    client.send_name(&cfg.bot_name).context("Failed to send the bot name")?;
    event!(
        Level::INFO,
        "Successfully created bot! My Player ID is {}. Map is {}x{}, seed: {:?}",
        game.my_id,
        game.map.width,
        game.map.height,
        cfg.seed
    );

    let path_oracle = HaliteAwarePathOracle::new(game.constants.move_cost_ratio);
    let mut admiral = FleetAdmiral::new(cfg.strategy.clone(), Box::new(path_oracle));

    while game.update_frame(&mut client).context("Failed to read the turn update")? {
        let span = info_span!("turn", turn_number = game.turn_number);
        let _enter = span.enter();
        let started_at = Instant::now();

        let snapshot = game.snapshot()?;
        let report = admiral.dispatch_turn(&snapshot);
        client.send_commands(&report.commands).context("Failed to send commands")?;

        let elapsed = started_at.elapsed();
        if elapsed > cfg.turn_budget_warning {
            event!(Level::WARN, "Turn took {:?}, the warning threshold is {:?}", elapsed, cfg.turn_budget_warning);
        }
        event!(
            Level::INFO,
            "Dispatched {} ships with {} commands in {:?}",
            snapshot.ships.len(),
            report.commands.len(),
            elapsed
        );
    }

    event!(Level::INFO, "Engine closed the connection after turn {}", game.turn_number);
    Ok(())
}

fn setup_tracing(log_dir: &Path, player_id: PlayerId) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::never(log_dir, format!("bot-{}.log", player_id));
    let (non_blocking_appender, guard) = tracing_appender::non_blocking(file_appender);

    let time_format = format_description::parse("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]Z").context("Invalid time format")?;
    let timer = UtcTime::new(time_format);

    let file_layer = fmt::layer()
        .with_timer(timer)
        .with_ansi(false)
        .with_target(true)
        .with_writer(non_blocking_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    Registry::default()
        .with(filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install the tracing subscriber")?;

    Ok(guard)
}
