//! Control room repository client

use super::location::BotLocation;
use super::BotRepository;
use crate::bot::BotDocument;
use crate::error::{ErrorCode, LinestampError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, error};

const AUTH_HEADER: &str = "X-Authorization";

/// Strip one pair of surrounding double quotes
///
/// Tokens copied out of browser storage are JSON strings and keep their quotes.
pub fn normalize_auth_token(token: &str) -> &str {
    let token = token.trim();
    token
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(token)
}

/// HTTP client for the control room file repository
pub struct ControlRoomClient {
    client: Client,
    origin: String,
    auth_token: String,
}

impl ControlRoomClient {
    /// Create a client for a control room origin
    pub fn new(origin: impl Into<String>, auth_token: &str, timeout: Duration) -> Result<Self> {
        let auth_token = normalize_auth_token(auth_token);
        if auth_token.is_empty() {
            return Err(LinestampError::validation_with_code(
                ErrorCode::VALIDATION_MISSING_AUTH,
                "Authorization token is empty",
                Some("token".to_string()),
            ));
        }

        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            LinestampError::config("Failed to create HTTP client").with_source(e)
        })?;

        Ok(Self {
            client,
            origin: origin.into().trim_end_matches('/').to_string(),
            auth_token: auth_token.to_string(),
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    fn content_url(&self, file_id: &str) -> String {
        BotLocation::new(self.origin.as_str(), file_id).content_url()
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("Content-Type", "application/json")
            .header(AUTH_HEADER, &self.auth_token)
    }

    /// Send a request and turn non-success statuses into repository errors
    async fn send(&self, request: RequestBuilder, file_id: &str) -> Result<Response> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| LinestampError::from(e).with_context(file_id))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        error!("Control room returned {} for bot {}", status, file_id);
        let code = match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ErrorCode::REPOSITORY_UNAUTHORIZED,
            StatusCode::NOT_FOUND => ErrorCode::REPOSITORY_NOT_FOUND,
            _ => ErrorCode::REPOSITORY_HTTP_STATUS,
        };
        Err(LinestampError::repository_with_code(
            code,
            format!("Control room returned {}", status),
            Some(file_id.to_string()),
        ))
    }

    async fn put(&self, file_id: &str, body: String) -> Result<()> {
        let url = self.content_url(file_id);
        debug!("PUT {}", url);
        self.send(self.client.put(&url).body(body), file_id).await?;
        Ok(())
    }
}

#[async_trait]
impl BotRepository for ControlRoomClient {
    async fn fetch(&self, file_id: &str) -> Result<BotDocument> {
        let url = self.content_url(file_id);
        debug!("GET {}", url);

        let response = self.send(self.client.get(&url), file_id).await?;
        let body = response
            .text()
            .await
            .map_err(|e| LinestampError::from(e).with_context(file_id))?;
        BotDocument::from_json_str(&body)
    }

    async fn update(&self, file_id: &str, document: &BotDocument) -> Result<()> {
        let body = serde_json::to_string(document)?;
        self.put(file_id, body).await
    }

    async fn replace_raw(&self, file_id: &str, content: &str) -> Result<()> {
        self.put(file_id, content.to_string()).await
    }
}
