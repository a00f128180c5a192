//! Local token store commands

use colored::Colorize;

use crate::client::LinkClient;
use crate::errors::Result;

pub fn render_token_list(tokens: &[(String, String)]) -> String {
    if tokens.is_empty() {
        return format!("{} No analytics tokens stored", "ℹ".bold().blue());
    }

    let width = tokens.iter().map(|(code, _)| code.len()).max().unwrap_or(0);
    let mut lines = vec!["Stored analytics tokens:".bold().green().to_string()];
    for (code, token) in tokens {
        let padded = format!("{:<width$}", code, width = width);
        lines.push(format!("  {}  {}", padded.cyan(), token.yellow()));
    }
    lines.push(format!(
        "{} Total {} tokens",
        "ℹ".bold().blue(),
        tokens.len().to_string().green()
    ));
    lines.join("\n")
}

pub async fn show_token(client: &LinkClient, code: &str) -> Result<()> {
    match client.get_token(code).await? {
        Some(token) => println!("{}", token),
        None => println!(
            "{} No token stored for {}",
            "ℹ".bold().blue(),
            code.trim().cyan()
        ),
    }
    Ok(())
}

pub async fn list_tokens(client: &LinkClient) -> Result<()> {
    let tokens = client.list_tokens().await?;
    println!("{}", render_token_list(&tokens));
    Ok(())
}

pub async fn forget_token(client: &LinkClient, code: &str) -> Result<()> {
    if client.forget_token(code).await? {
        println!("{} Forgot token for {}", "✓".bold().green(), code.trim().cyan());
    } else {
        println!(
            "{} No token stored for {}",
            "ℹ".bold().blue(),
            code.trim().cyan()
        );
    }
    Ok(())
}
