//! `linestamp count`

use crate::app::AppConfig;
use crate::cli::args::{BotSource, BotTarget};
use crate::cli::commands::remote::connect;
use crate::control_room::{line_count, FileRepository};
use anyhow::{anyhow, Result};

/// Print the number of line-bearing steps in a bot
pub async fn run_count_command(source: BotSource, app: &AppConfig) -> Result<()> {
    let lines = match source.target() {
        Some(BotTarget::File(path)) => {
            let (repo, file_id) = FileRepository::for_file(path)?;
            line_count(&repo, &file_id).await?
        }
        Some(BotTarget::Remote(target)) => {
            let (client, location) = connect(target, source.token.as_deref(), &app.settings)?;
            line_count(&client, &location.file_id).await?
        }
        None => return Err(anyhow!("Please specify a bot file or --url")),
    };

    println!("{}", lines);
    Ok(())
}
