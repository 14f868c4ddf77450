use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::structs::cli::Cli;
use crate::structs::config::config::Config;
use clap::{Parser};
use crate::workers::command_runner::CommandRunner;

mod api;
mod structs;
mod services;
mod helpers;
mod enums;
mod errors;
mod constants;
mod logger;
mod config;
mod traits;
mod workers;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // `init` must work even when an existing file no longer parses.
    let config = match ConfigManager::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) if matches!(cli.command, Commands::Init) => {
            eprintln!("⚠️ Ignoring unreadable config: {}", e);
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.logging.level.as_str()))
        .format_timestamp_secs()
        .init();

    match ConfigManager::resolve_path(cli.config.as_deref()) {
        Some(path) => log::info!("📋 Loaded config from: {}", path.display()),
        None => log::info!("📋 No config file found, using defaults"),
    }

    let mut runner = CommandRunner::new(config, cli.config);
    runner.run_command(cli.command).await?;
    Ok(())
}
