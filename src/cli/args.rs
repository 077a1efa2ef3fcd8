//! CLI argument structures
//!
//! This module defines the main CLI structure and all subcommand definitions.

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Stamp bot log statements with their line numbers
#[derive(Parser)]
#[command(name = "linestamp")]
#[command(about = "linestamp - Stamp bot log statements with their current line numbers", long_about = None)]
#[command(version)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where a bot document comes from: a local file or a control room
#[derive(Args, Debug, Clone, Default)]
pub struct BotSource {
    /// Bot JSON file on disk
    #[arg(required_unless_present = "url", conflicts_with = "url")]
    pub file: Option<PathBuf>,

    /// Bot editor page URL, or a bot file ID when an origin is configured
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Control room authorization token
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,
}

/// Resolved bot source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotTarget<'a> {
    File(&'a Path),
    Remote(&'a str),
}

impl BotSource {
    pub fn target(&self) -> Option<BotTarget<'_>> {
        match (&self.file, &self.url) {
            (Some(path), _) => Some(BotTarget::File(path)),
            (None, Some(url)) => Some(BotTarget::Remote(url)),
            (None, None) => None,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count the line-bearing steps of a bot
    #[command(name = "count")]
    Count {
        #[command(flatten)]
        source: BotSource,
    },

    /// Stamp line numbers into every log statement of a bot
    #[command(name = "rewrite")]
    Rewrite {
        #[command(flatten)]
        source: BotSource,

        /// Placeholder to replace, e.g. "[linenumber]"; omit to renumber existing "| n |" or "-n-" stamps
        #[arg(short = 'p', long, value_name = "TOKEN")]
        placeholder: Option<String>,

        /// Write the stamped bot here instead of back to its source
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,

        /// Report what would change without saving anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Check a placeholder token before using it
    #[command(name = "validate")]
    Validate {
        /// Placeholder token to check
        placeholder: String,
    },

    /// Download a bot's content as pretty JSON
    #[command(name = "pull")]
    Pull {
        /// Bot editor page URL, or a bot file ID when an origin is configured
        #[arg(long, value_name = "URL")]
        url: String,

        /// Control room authorization token
        #[arg(long, value_name = "TOKEN")]
        token: Option<String>,

        /// File to write instead of standard output
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Replace a bot's content with a JSON file
    #[command(name = "patch")]
    Patch {
        /// JSON file with the new bot content
        content: PathBuf,

        /// Bot editor page URL, or a bot file ID when an origin is configured
        #[arg(long, value_name = "URL")]
        url: String,

        /// Control room authorization token
        #[arg(long, value_name = "TOKEN")]
        token: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long = "yes")]
        auto_accept: bool,
    },
}
