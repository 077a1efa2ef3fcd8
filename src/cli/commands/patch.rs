//! `linestamp patch`

use crate::app::AppConfig;
use crate::cli::commands::remote::connect;
use crate::control_room::patch_bot;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::path::Path;

fn confirm_replace() -> Result<bool> {
    print!("This will replace your bot. Have you backed it up? [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Replace a bot's content with a local JSON file
pub async fn run_patch_command(
    content: &Path,
    url: &str,
    token: Option<&str>,
    auto_accept: bool,
    app: &AppConfig,
) -> Result<()> {
    let raw = std::fs::read_to_string(content)
        .with_context(|| format!("Failed to read {}", content.display()))?;
    if raw.trim().is_empty() {
        anyhow::bail!("{} is empty", content.display());
    }
    serde_json::from_str::<serde_json::Value>(&raw)
        .with_context(|| format!("{} is not valid JSON", content.display()))?;

    let (client, location) = connect(url, token, &app.settings)?;

    if !auto_accept && !confirm_replace()? {
        println!("Patch cancelled");
        return Ok(());
    }

    patch_bot(&client, &location.file_id, &raw).await?;
    println!("Bot {} patched", location.file_id);
    Ok(())
}
