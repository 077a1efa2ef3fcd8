//! Directory-backed bot repository
//!
//! Stores each bot as a JSON file under a root directory. A file ID with an
//! extension names the file directly; a bare ID maps to `<root>/<file_id>.json`.
//! The CLI uses it for bots exported to local disk.

use super::BotRepository;
use crate::bot::BotDocument;
use crate::error::{ErrorCode, LinestampError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

#[derive(Debug)]
pub struct FileRepository {
    root: PathBuf,
}

impl FileRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Repository holding a single bot file, with the file ID that addresses it
    pub fn for_file(path: &Path) -> Result<(Self, String)> {
        let file_id = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                LinestampError::validation_with_code(
                    ErrorCode::VALIDATION_INVALID_PATH,
                    format!("'{}' does not name a bot file", path.display()),
                    Some("file".to_string()),
                )
            })?;
        let root = path.parent().unwrap_or_else(|| Path::new(""));
        Ok((Self::new(root), file_id.to_string()))
    }

    pub fn path_for(&self, file_id: &str) -> PathBuf {
        if Path::new(file_id).extension().is_some() {
            self.root.join(file_id)
        } else {
            self.root.join(format!("{}.json", file_id))
        }
    }

    async fn write(&self, file_id: &str, content: &str) -> Result<()> {
        let path = self.path_for(file_id);
        debug!("Writing bot {} to {}", file_id, path.display());
        fs::write(&path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl BotRepository for FileRepository {
    async fn fetch(&self, file_id: &str) -> Result<BotDocument> {
        let path = self.path_for(file_id);
        let content = fs::read_to_string(&path).await.map_err(|e| {
            LinestampError::repository_with_code(
                ErrorCode::REPOSITORY_NOT_FOUND,
                format!("Cannot read {}", path.display()),
                Some(file_id.to_string()),
            )
            .with_source(e)
        })?;
        BotDocument::from_json_str(&content).map_err(|e| e.with_path(path))
    }

    async fn update(&self, file_id: &str, document: &BotDocument) -> Result<()> {
        let json = document.to_pretty_json()?;
        self.write(file_id, &json).await
    }

    async fn replace_raw(&self, file_id: &str, content: &str) -> Result<()> {
        self.write(file_id, content).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_fetch_update_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileRepository::new(temp_dir.path());
        std::fs::write(
            repo.path_for("7"),
            r#"{"nodes": [{"commandName": "messageBox", "uid": "u1"}]}"#,
        )
        .unwrap();

        let document = repo.fetch("7").await.unwrap();
        assert_eq!(document.nodes().count(), 1);

        repo.update("7", &document).await.unwrap();
        let reloaded = repo.fetch("7").await.unwrap();
        assert_eq!(reloaded, document);
    }

    #[tokio::test]
    async fn test_missing_bot() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileRepository::new(temp_dir.path());
        let err = repo.fetch("404").await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::REPOSITORY_NOT_FOUND);
    }

    #[test]
    fn test_path_for_named_files() {
        let repo = FileRepository::new("bots");
        assert_eq!(repo.path_for("7"), Path::new("bots/7.json"));
        assert_eq!(repo.path_for("order.json"), Path::new("bots/order.json"));
        assert_eq!(repo.path_for("order.bot"), Path::new("bots/order.bot"));
    }

    #[tokio::test]
    async fn test_for_file_addresses_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("exported.bot");
        std::fs::write(&path, r#"{"nodes": [{"commandName": "a"}, {"commandName": "b"}]}"#)
            .unwrap();

        let (repo, file_id) = FileRepository::for_file(&path).unwrap();
        assert_eq!(file_id, "exported.bot");
        assert_eq!(repo.path_for(&file_id), path);
        assert_eq!(crate::control_room::line_count(&repo, &file_id).await.unwrap(), 2);
    }

    #[test]
    fn test_for_file_rejects_directory_like_paths() {
        let err = FileRepository::for_file(Path::new("..")).unwrap_err();
        assert_eq!(err.code(), ErrorCode::VALIDATION_INVALID_PATH);
    }
}
