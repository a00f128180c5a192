use clap::Parser;

use snaplink::cli::Cli;
use snaplink::config::{get_config, init_config};
use snaplink::interfaces::cli::run_cli_command;
use snaplink::system::logging::init_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = init_config(&cli.config) {
        eprintln!("{}", e.format_colored());
        std::process::exit(1);
    }

    // Keep the guard alive until exit so buffered log lines are flushed
    let _log_guard = match init_logging(&get_config().logging) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("{}", e.format_colored());
            None
        }
    };

    if let Err(e) = run_cli_command(cli.command).await {
        eprintln!("{}", e.format_colored());
        drop(_log_guard);
        std::process::exit(1);
    }
}
