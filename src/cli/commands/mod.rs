//! Command implementation modules
//!
//! This module contains the implementation of each CLI command.
//! Each command is implemented as a separate module for better organization.

pub mod count;
pub mod patch;
pub mod pull;
pub mod remote;
pub mod rewrite;
pub mod validate;

// Re-export command execution functions
pub use count::run_count_command;
pub use patch::run_patch_command;
pub use pull::run_pull_command;
pub use rewrite::{run_rewrite_command, RewriteParams};
pub use validate::run_validate_command;
