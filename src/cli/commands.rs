use std::path::PathBuf;

use clap::Parser;

use crate::model::config::ResyncPolicy;

#[derive(Parser, Debug)]
#[command(name = "tl", about = concat!("[x] tasklist v", env!("CARGO_PKG_VERSION"), " - a small to-do list for the terminal"), version)]
pub struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/tasklist/config.toml)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Start with this task in the list (repeatable)
    #[arg(short = 't', long = "task", value_name = "TITLE")]
    pub tasks: Vec<String>,

    /// What open edits do when the list changes: reset-all or keep-drafts
    #[arg(long, value_name = "POLICY")]
    pub resync: Option<ResyncPolicy>,

    /// Write logs to this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Hide key hints in the status row
    #[arg(long)]
    pub no_hints: bool,
}
