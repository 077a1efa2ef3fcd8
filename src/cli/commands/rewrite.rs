//! `linestamp rewrite`

use crate::app::AppConfig;
use crate::bot::{rewrite_log_lines, RewriteStats};
use crate::cli::args::{BotSource, BotTarget};
use crate::cli::commands::remote::connect;
use crate::control_room::{update_bot, BotRepository, FileRepository};
use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Arguments of `linestamp rewrite`
#[derive(Debug, Clone, Default)]
pub struct RewriteParams {
    pub source: BotSource,
    pub placeholder: Option<String>,
    pub output: Option<PathBuf>,
    pub json: bool,
    pub dry_run: bool,
}

/// Run a stamping pass and print its report
pub async fn run_rewrite_command(params: RewriteParams, app: &AppConfig) -> Result<()> {
    let placeholder = params
        .placeholder
        .clone()
        .or_else(|| app.settings.placeholder.clone());

    let stats = match params.source.target() {
        Some(BotTarget::File(path)) => {
            rewrite_file(path, placeholder.as_deref(), &params).await?
        }
        Some(BotTarget::Remote(target)) => {
            rewrite_remote(target, placeholder.as_deref(), &params, app).await?
        }
        None => return Err(anyhow!("Please specify a bot file or --url")),
    };

    print_report(&stats, params.json)?;
    Ok(())
}

async fn rewrite_file(
    path: &Path,
    placeholder: Option<&str>,
    params: &RewriteParams,
) -> Result<RewriteStats> {
    let (repo, file_id) = FileRepository::for_file(path)?;
    stamp_and_store(&repo, &file_id, placeholder, params).await
}

async fn rewrite_remote(
    target: &str,
    placeholder: Option<&str>,
    params: &RewriteParams,
    app: &AppConfig,
) -> Result<RewriteStats> {
    let (client, location) = connect(target, params.source.token.as_deref(), &app.settings)?;
    stamp_and_store(&client, &location.file_id, placeholder, params).await
}

/// Bots are saved back in place unless a dry run or a local output file is requested
async fn stamp_and_store(
    repo: &dyn BotRepository,
    file_id: &str,
    placeholder: Option<&str>,
    params: &RewriteParams,
) -> Result<RewriteStats> {
    if !params.dry_run && params.output.is_none() {
        return Ok(update_bot(repo, file_id, placeholder).await?);
    }

    let mut document = repo.fetch(file_id).await?;
    let stats = rewrite_log_lines(&mut document, placeholder)?;
    match (&params.output, params.dry_run) {
        (Some(output), false) => {
            document.write_to_path(output)?;
            info!("Wrote stamped bot {} to {}", file_id, output.display());
        }
        _ => info!("Dry run, bot {} left unchanged", file_id),
    }
    Ok(stats)
}

fn print_report(stats: &RewriteStats, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
    } else {
        println!("{}", stats);
    }
    Ok(())
}
