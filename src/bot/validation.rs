//! Up-front checks on a placeholder token before a rewrite pass

use crate::error::{LinestampError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Shortest token accepted, in characters
pub const MIN_TOKEN_LENGTH: usize = 2;

const LITERAL_KEYWORDS: [&str; 5] = [
    "line number",
    "line_number",
    "line-number",
    "linenumber",
    "linenum",
];

static LINE_NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)line[_-]?number").expect("Valid regex pattern"));

static LINENUM_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)linenum").expect("Valid regex pattern"));

static DIGITS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").expect("Valid regex pattern"));

/// Verdict for an accepted token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderCheck {
    /// No token, existing stamps will be detected
    AutoDetect,
    /// Token names the line number with a keyword such as `[linenumber]`
    Literal { example: String },
    /// Token is an existing numbered stamp such as `| 7 |`
    Pattern { example: String },
    /// Anything else; accepted, but may not occur in any log
    Custom,
}

impl PlaceholderCheck {
    pub fn message(&self) -> &'static str {
        match self {
            Self::AutoDetect => "Auto-detection enabled",
            Self::Literal { .. } => "Valid literal placeholder",
            Self::Pattern { .. } => "Valid pattern placeholder",
            Self::Custom => "Custom placeholder - verify it exists in logs",
        }
    }

    /// How the token would look with line 42 stamped in
    pub fn example(&self) -> Option<&str> {
        match self {
            Self::Literal { example } | Self::Pattern { example } => Some(example),
            Self::AutoDetect | Self::Custom => None,
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Custom)
    }
}

/// Classify a token, rejecting ones too short to be meaningful
pub fn validate_placeholder(token: &str) -> Result<PlaceholderCheck> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Ok(PlaceholderCheck::AutoDetect);
    }

    if trimmed.chars().count() < MIN_TOKEN_LENGTH {
        return Err(LinestampError::malformed_token(format!(
            "Too short (minimum {} characters)",
            MIN_TOKEN_LENGTH
        )));
    }

    let lowered = trimmed.to_lowercase();
    if LITERAL_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        let example = LINE_NUMBER_REGEX.replace_all(trimmed, "42");
        let example = LINENUM_REGEX.replace_all(&example, "42").into_owned();
        return Ok(PlaceholderCheck::Literal { example });
    }

    if DIGITS_REGEX.is_match(trimmed) {
        let example = DIGITS_REGEX.replace_all(trimmed, "42").into_owned();
        return Ok(PlaceholderCheck::Pattern { example });
    }

    Ok(PlaceholderCheck::Custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_blank_token_is_auto_detect() {
        assert_eq!(validate_placeholder("").unwrap(), PlaceholderCheck::AutoDetect);
        assert_eq!(validate_placeholder("  \t").unwrap(), PlaceholderCheck::AutoDetect);
    }

    #[test]
    fn test_single_character_is_rejected() {
        let err = validate_placeholder(" # ").unwrap_err();
        assert_eq!(err.code(), ErrorCode::VALIDATION_MALFORMED_TOKEN);
        assert!(err.to_string().contains("Too short"));
    }

    #[test]
    fn test_literal_keyword() {
        assert_eq!(
            validate_placeholder("[LineNumber]").unwrap(),
            PlaceholderCheck::Literal {
                example: "[42]".to_string()
            }
        );
        assert_eq!(
            validate_placeholder("| line_number |").unwrap(),
            PlaceholderCheck::Literal {
                example: "| 42 |".to_string()
            }
        );
        assert_eq!(
            validate_placeholder("(linenum)").unwrap().example(),
            Some("(42)")
        );
    }

    #[test]
    fn test_numbered_pattern() {
        let check = validate_placeholder("| 7 |").unwrap();
        assert_eq!(check.example(), Some("| 42 |"));
        assert_eq!(check.message(), "Valid pattern placeholder");
    }

    #[test]
    fn test_custom_token_warns() {
        let check = validate_placeholder("{{here}}").unwrap();
        assert_eq!(check, PlaceholderCheck::Custom);
        assert!(check.is_warning());
        assert_eq!(check.example(), None);
    }
}
