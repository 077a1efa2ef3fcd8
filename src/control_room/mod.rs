//! Access to stored bot documents
//!
//! The stamping engine never touches storage itself. This module provides the
//! [`BotRepository`] seam together with a control room HTTP client and a
//! directory-backed repository, plus the read → rewrite → write orchestration
//! in [`session`].

pub mod client;
pub mod file;
pub mod location;
pub mod session;

use crate::bot::BotDocument;
use crate::error::Result;
use async_trait::async_trait;

pub use client::{normalize_auth_token, ControlRoomClient};
pub use file::FileRepository;
pub use location::BotLocation;
pub use session::{line_count, patch_bot, update_bot};

/// Storage for bot documents keyed by file ID
///
/// Implementations do not coordinate concurrent writers; callers run one
/// read → rewrite → write sequence per document at a time.
#[async_trait]
pub trait BotRepository: Send + Sync {
    /// Read a bot document
    async fn fetch(&self, file_id: &str) -> Result<BotDocument>;

    /// Replace a bot document with the given one
    async fn update(&self, file_id: &str, document: &BotDocument) -> Result<()>;

    /// Replace a bot document with already serialized JSON
    async fn replace_raw(&self, file_id: &str, content: &str) -> Result<()>;
}
