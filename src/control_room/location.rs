//! Identifying a bot from its editor URL

use crate::error::{ErrorCode, LinestampError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Fragment of a bot editor page: `#/bots/repository/private/<folders>/<fileId>/edit`
static EDITOR_FRAGMENT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/bots/repository/private/.*/([0-9]+)/edit$").expect("Valid regex pattern")
});

/// Control room origin and bot file ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotLocation {
    pub origin: String,
    pub file_id: String,
}

impl BotLocation {
    pub fn new(origin: impl Into<String>, file_id: impl Into<String>) -> Self {
        Self {
            origin: origin.into().trim_end_matches('/').to_string(),
            file_id: file_id.into(),
        }
    }

    /// Parse a bot editor page URL
    pub fn from_editor_url(raw: &str) -> Result<Self> {
        let invalid = || {
            LinestampError::validation_with_code(
                ErrorCode::VALIDATION_INVALID_URL,
                format!("'{}' is not a bot editor page", raw),
                Some("url".to_string()),
            )
        };

        let url = Url::parse(raw).map_err(|e| invalid().with_source(e))?;
        let fragment = url.fragment().ok_or_else(invalid)?;
        let file_id = EDITOR_FRAGMENT_REGEX
            .captures(fragment)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(invalid)?;

        Ok(Self::new(url.origin().ascii_serialization(), file_id))
    }

    /// Repository endpoint holding the bot content
    pub fn content_url(&self) -> String {
        format!(
            "{}/v2/repository/files/{}/content",
            self.origin, self.file_id
        )
    }
}
