//! CLI interface module
//!
//! Each command catches nothing itself: errors bubble up to `main`, which
//! prints them once and exits non-zero.

pub mod commands;

use crate::cli::Commands;
use crate::client::LinkClient;
use crate::config::get_config;
use crate::errors::Result;

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands) -> Result<()> {
    // Config helpers don't need a backend or token store
    if let Commands::Config { action } = cmd {
        return commands::run_config_command(action);
    }

    let client = LinkClient::from_config(&get_config())?;
    dispatch(&client, cmd).await
}

/// Run a link/token command against an already built client
pub async fn dispatch(client: &LinkClient, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Shorten { url } => commands::shorten(client, &url).await,
        Commands::Stats { code, token, utc } => {
            commands::stats(client, &code, token.as_deref(), utc).await
        }
        Commands::Token { code } => commands::show_token(client, &code).await,
        Commands::Tokens => commands::list_tokens(client).await,
        Commands::Forget { code } => commands::forget_token(client, &code).await,
        Commands::Health => commands::health(client).await,
        Commands::Config { action } => commands::run_config_command(action),
    }
}
