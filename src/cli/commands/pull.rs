//! `linestamp pull`

use crate::app::AppConfig;
use crate::cli::commands::remote::connect;
use crate::control_room::BotRepository;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

/// Download a bot and print or save it as pretty JSON
pub async fn run_pull_command(
    url: &str,
    token: Option<&str>,
    output: Option<PathBuf>,
    app: &AppConfig,
) -> Result<()> {
    let (client, location) = connect(url, token, &app.settings)?;
    let document = client.fetch(&location.file_id).await?;
    let json = document.to_pretty_json()?;

    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Saved bot {} to {}", location.file_id, path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
