//! Connecting to a control room from command-line arguments

use crate::config::LinestampConfig;
use crate::control_room::{BotLocation, ControlRoomClient};
use crate::error::{ErrorCode, LinestampError, Result};
use tracing::debug;

/// Resolve a bot from an editor URL, or from a bare file ID plus the configured origin
pub fn resolve_location(target: &str, settings: &LinestampConfig) -> Result<BotLocation> {
    let is_file_id = !target.is_empty() && target.chars().all(|c| c.is_ascii_digit());
    match (&settings.origin, is_file_id) {
        (Some(origin), true) => Ok(BotLocation::new(origin.as_str(), target)),
        _ => BotLocation::from_editor_url(target),
    }
}

/// Build a client for the control room hosting `target`
pub fn connect(
    target: &str,
    token: Option<&str>,
    settings: &LinestampConfig,
) -> Result<(ControlRoomClient, BotLocation)> {
    let location = resolve_location(target, settings)?;
    let token = token
        .or(settings.auth_token.as_deref())
        .ok_or_else(|| {
            LinestampError::validation_with_code(
                ErrorCode::VALIDATION_MISSING_AUTH,
                "Pass --token or set LINESTAMP_AUTH_TOKEN",
                Some("token".to_string()),
            )
        })?;

    debug!("Connecting to {} for bot {}", location.origin, location.file_id);
    let client = ControlRoomClient::new(location.origin.as_str(), token, settings.timeout())?;
    Ok((client, location))
}
