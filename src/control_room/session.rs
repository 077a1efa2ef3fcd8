//! End-to-end operations against a bot repository

use super::BotRepository;
use crate::bot::{rewrite_log_lines, total_lines, validate_placeholder, RewriteStats};
use crate::error::{ErrorCode, LinestampError, Result};
use tracing::info;

/// Fetch a bot and count its lines
pub async fn line_count(repo: &dyn BotRepository, file_id: &str) -> Result<usize> {
    let document = repo.fetch(file_id).await?;
    let lines = total_lines(&document);
    info!("Bot {} has {} lines", file_id, lines);
    Ok(lines)
}

/// Stamp line numbers into a stored bot's logs and save it back
///
/// The token is validated before the bot is fetched, so a malformed token never
/// reaches the repository.
pub async fn update_bot(
    repo: &dyn BotRepository,
    file_id: &str,
    placeholder: Option<&str>,
) -> Result<RewriteStats> {
    if let Some(token) = placeholder {
        validate_placeholder(token)?;
    }

    let mut document = repo.fetch(file_id).await?;
    let stats = rewrite_log_lines(&mut document, placeholder)?;
    repo.update(file_id, &document).await?;

    info!(
        "Bot {} updated: {} of {} logs stamped",
        file_id, stats.logs_updated, stats.total_logs_found
    );
    Ok(stats)
}

/// Replace a stored bot with pasted JSON content
///
/// The content must parse as JSON; it is re-indented with two spaces before upload.
pub async fn patch_bot(repo: &dyn BotRepository, file_id: &str, content: &str) -> Result<()> {
    let value: serde_json::Value = serde_json::from_str(content).map_err(|e| {
        LinestampError::document_with_code(
            ErrorCode::DOCUMENT_INVALID_JSON,
            "Invalid JSON string",
            None,
        )
        .with_source(e)
    })?;
    let formatted = serde_json::to_string_pretty(&value)?;

    repo.replace_raw(file_id, &formatted).await?;
    info!("Bot {} replaced with pasted content", file_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::BotDocument;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory repository recording every write
    #[derive(Default)]
    struct MemoryRepository {
        bots: Mutex<HashMap<String, String>>,
        writes: Mutex<usize>,
    }

    impl MemoryRepository {
        fn with_bot(file_id: &str, json: &str) -> Self {
            let repo = Self::default();
            repo.bots
                .lock()
                .unwrap()
                .insert(file_id.to_string(), json.to_string());
            repo
        }

        fn raw(&self, file_id: &str) -> String {
            self.bots.lock().unwrap()[file_id].clone()
        }

        fn writes(&self) -> usize {
            *self.writes.lock().unwrap()
        }
    }

    #[async_trait]
    impl BotRepository for MemoryRepository {
        async fn fetch(&self, file_id: &str) -> Result<BotDocument> {
            let bots = self.bots.lock().unwrap();
            let json = bots.get(file_id).ok_or_else(|| {
                LinestampError::repository_with_code(
                    ErrorCode::REPOSITORY_NOT_FOUND,
                    "No such bot",
                    Some(file_id.to_string()),
                )
            })?;
            BotDocument::from_json_str(json)
        }

        async fn update(&self, file_id: &str, document: &BotDocument) -> Result<()> {
            let json = document.to_pretty_json()?;
            self.replace_raw(file_id, &json).await
        }

        async fn replace_raw(&self, file_id: &str, content: &str) -> Result<()> {
            *self.writes.lock().unwrap() += 1;
            self.bots
                .lock()
                .unwrap()
                .insert(file_id.to_string(), content.to_string());
            Ok(())
        }
    }

    const BOT: &str = r#"{
        "nodes": [
            {"commandName": "messageBox"},
            {"commandName": "logToFile", "attributes": [
                {"name": "logContent", "value": {"type": "STRING", "string": "step [ln]"}}
            ]}
        ]
    }"#;

    #[tokio::test]
    async fn test_line_count() {
        let repo = MemoryRepository::with_bot("1", BOT);
        assert_eq!(line_count(&repo, "1").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_update_bot_writes_stamped_document() {
        let repo = MemoryRepository::with_bot("1", BOT);
        let stats = update_bot(&repo, "1", Some("[ln]")).await.unwrap();

        assert_eq!(stats.logs_updated, 1);
        assert_eq!(repo.writes(), 1);
        assert!(repo.raw("1").contains("step [2]"));
    }

    #[tokio::test]
    async fn test_malformed_token_never_fetches() {
        let repo = MemoryRepository::default();
        let err = update_bot(&repo, "missing", Some("x")).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::VALIDATION_MALFORMED_TOKEN);
        assert_eq!(repo.writes(), 0);
    }

    #[tokio::test]
    async fn test_missing_bot_is_not_written() {
        let repo = MemoryRepository::default();
        let err = update_bot(&repo, "missing", None).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::REPOSITORY_NOT_FOUND);
        assert_eq!(repo.writes(), 0);
    }

    #[tokio::test]
    async fn test_patch_bot_pretty_prints() {
        let repo = MemoryRepository::default();
        patch_bot(&repo, "5", r#"{"nodes":[{"commandName":"x"}]}"#)
            .await
            .unwrap();
        let stored = repo.raw("5");
        assert!(stored.contains("\n  \"nodes\": ["));
    }

    #[tokio::test]
    async fn test_patch_bot_rejects_invalid_json() {
        let repo = MemoryRepository::default();
        let err = patch_bot(&repo, "5", "{nodes:").await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::DOCUMENT_INVALID_JSON);
        assert_eq!(repo.writes(), 0);
    }
}
