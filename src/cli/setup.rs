use flexi_logger::LoggerHandle;

use crate::cli::commands::Cli;
use crate::io::config_io::{ConfigError, load_config};
use crate::io::logging::{LogError, init_file_logging};
use crate::model::AppConfig;
use crate::tui::app::RunOptions;

/// Load config and apply command-line overrides on top of it
pub fn resolve_config(cli: &Cli) -> Result<AppConfig, ConfigError> {
    let mut config = load_config(cli.config.as_deref())?;
    apply_overrides(&mut config, cli);
    Ok(config)
}

fn apply_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(policy) = cli.resync {
        config.list.resync = policy;
    }
    if let Some(dir) = &cli.log_dir {
        config.log.dir = Some(dir.clone());
    }
    if let Some(level) = &cli.log_level {
        config.log.level = level.clone();
    }
    if cli.no_hints {
        config.ui.show_key_hints = false;
    }
}

/// Start file logging when a log directory is configured. The handle must
/// outlive the TUI.
pub fn start_logging(config: &AppConfig) -> Result<Option<LoggerHandle>, LogError> {
    match &config.log.dir {
        Some(dir) => init_file_logging(&config.log.level, dir).map(Some),
        None => Ok(None),
    }
}

pub fn run_options(cli: Cli, config: AppConfig) -> RunOptions {
    RunOptions {
        config,
        seed: cli.tasks,
    }
}
