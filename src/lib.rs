//! # linestamp
//!
//! Stamps log statements inside automation-bot definitions with the line number of
//! the step that emits them.
//!
//! ## Usage
//!
//! ```bash
//! linestamp rewrite bot.json --placeholder "[linenumber]"
//! linestamp count --url "https://cr.example.com/#/bots/repository/private/files/task/42/edit"
//! ```
//!
//! ## Modules
//!
//! - `bot` - Bot document model, line counting and the stamping pass
//! - `control_room` - Repository seam, control room client and end-to-end operations
//! - `config` - User configuration from file and environment
//! - `app` - Logging setup and fatal error reporting for the binary
//! - `cli` - Command-line interface
//! - `error` - Unified error type with error codes
pub mod app;
pub mod bot;
pub mod cli;
pub mod config;
pub mod control_room;
pub mod error;


pub use bot::{rewrite_log_lines, total_lines, BotDocument, RewriteStats};
pub use error::{LinestampError, Result};
