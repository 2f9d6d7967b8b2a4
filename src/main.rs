use clap::Parser;
use tasklist::cli::commands::Cli;
use tasklist::cli::setup;

fn main() {
    let cli = Cli::parse();

    let config = match setup::resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    // Held until exit so buffered log records are flushed
    let _logger = match setup::start_logging(&config) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = tasklist::tui::run(setup::run_options(cli, config)) {
        log::error!("event=tui_failed error={}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
