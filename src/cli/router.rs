//! Command routing and execution
//!
//! This module handles routing CLI commands to their respective implementations.

use crate::app::AppConfig;
use crate::cli::args::Commands;
use crate::cli::commands::*;
use anyhow::Result;

/// Execute a CLI command based on the parsed arguments
pub async fn execute_command(command: Commands, app: &AppConfig) -> Result<()> {
    match command {
        Commands::Count { source } => run_count_command(source, app).await,
        Commands::Rewrite {
            source,
            placeholder,
            output,
            json,
            dry_run,
        } => {
            run_rewrite_command(
                RewriteParams {
                    source,
                    placeholder,
                    output,
                    json,
                    dry_run,
                },
                app,
            )
            .await
        }
        Commands::Validate { placeholder } => run_validate_command(&placeholder),
        Commands::Pull { url, token, output } => {
            run_pull_command(&url, token.as_deref(), output, app).await
        }
        Commands::Patch {
            content,
            url,
            token,
            auto_accept,
        } => run_patch_command(&content, &url, token.as_deref(), auto_accept, app).await,
    }
}
