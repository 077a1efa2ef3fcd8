//! Placeholder resolution for log messages
//!
//! Turns a log message and a line number into the stamped message. Two modes:
//! - A user token is matched literally (case-insensitive, flexible whitespace) and
//!   every occurrence is replaced.
//! - Without a token, an existing `| n |` or `-n-` stamp is detected and its first
//!   occurrence is renumbered.
//!
//! # Examples
//!
//! ```
//! use linestamp::bot::placeholder::PlaceholderPattern;
//!
//! let pattern = PlaceholderPattern::compile(Some("[linenumber]")).unwrap();
//! assert_eq!(pattern.resolve("start [LineNumber]", 5).as_deref(), Some("start [5]"));
//!
//! let auto = PlaceholderPattern::compile(None).unwrap();
//! assert_eq!(auto.resolve("anand | 3 |", 9).as_deref(), Some("anand | 9 |"));
//! assert_eq!(auto.resolve("no stamp here", 9), None);
//! ```

use crate::error::{LinestampError, Result};
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex, RegexBuilder};

/// Label reported when no token was supplied
pub const AUTO_DETECT: &str = "auto-detect";

/// `| 7 |` style stamp
static BAR_STAMP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\|\s*[0-9]+\s*\|").expect("Valid regex pattern"));

/// `-7-` style stamp
static DASH_STAMP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-[0-9]+-").expect("Valid regex pattern"));

static WHITESPACE_RUN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Valid regex pattern"));

/// Surrounding characters kept around the number when a token is wrapped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wrapper {
    pub open: char,
    pub close: char,
    /// Inner text of the token contained whitespace, so the number is space padded
    pub padded: bool,
}

impl Wrapper {
    /// Detect wrapper characters on a trimmed token
    ///
    /// A token of at least three characters whose first and last characters are both
    /// non-alphanumeric is wrapped: `[X]`, `(X)`, `| X |`.
    pub fn detect(token: &str) -> Option<Self> {
        let chars: Vec<char> = token.chars().collect();
        if chars.len() < 3 {
            return None;
        }

        let open = chars[0];
        let close = chars[chars.len() - 1];
        if open.is_ascii_alphanumeric() || close.is_ascii_alphanumeric() {
            return None;
        }

        let padded = chars[1..chars.len() - 1].iter().any(|c| c.is_whitespace());
        Some(Self {
            open,
            close,
            padded,
        })
    }

    pub fn format(&self, line: usize) -> String {
        if self.padded {
            format!("{} {} {}", self.open, line, self.close)
        } else {
            format!("{}{}{}", self.open, line, self.close)
        }
    }
}

/// A compiled placeholder, built once per rewrite pass
#[derive(Debug, Clone)]
pub enum PlaceholderPattern {
    Token {
        token: String,
        matcher: Regex,
        wrapper: Option<Wrapper>,
    },
    AutoDetect,
}

impl PlaceholderPattern {
    /// Compile a user token; empty or whitespace-only tokens select auto-detect
    pub fn compile(user_token: Option<&str>) -> Result<Self> {
        let token = match user_token.map(str::trim) {
            Some(token) if !token.is_empty() => token,
            _ => return Ok(Self::AutoDetect),
        };

        Ok(Self::Token {
            token: token.to_string(),
            matcher: token_matcher(token)?,
            wrapper: Wrapper::detect(token),
        })
    }

    /// The token in use, or the auto-detect label
    pub fn label(&self) -> &str {
        match self {
            Self::Token { token, .. } => token,
            Self::AutoDetect => AUTO_DETECT,
        }
    }

    /// Text substituted for a token match at the given line
    fn replacement(wrapper: Option<&Wrapper>, line: usize) -> String {
        match wrapper {
            Some(wrapper) => wrapper.format(line),
            None => line.to_string(),
        }
    }

    /// Stamp `line` into `text`, or `None` when the placeholder does not occur
    pub fn resolve(&self, text: &str, line: usize) -> Option<String> {
        match self {
            Self::Token {
                matcher, wrapper, ..
            } => {
                if !matcher.is_match(text) {
                    return None;
                }
                let replacement = Self::replacement(wrapper.as_ref(), line);
                Some(matcher.replace_all(text, NoExpand(&replacement)).into_owned())
            }
            Self::AutoDetect => {
                if BAR_STAMP_REGEX.is_match(text) {
                    let stamp = format!("| {} |", line);
                    Some(BAR_STAMP_REGEX.replacen(text, 1, NoExpand(&stamp)).into_owned())
                } else if DASH_STAMP_REGEX.is_match(text) {
                    let stamp = format!("-{}-", line);
                    Some(DASH_STAMP_REGEX.replacen(text, 1, NoExpand(&stamp)).into_owned())
                } else {
                    None
                }
            }
        }
    }
}

/// Build the matcher for a trimmed token
///
/// The token is matched literally and case-insensitively; any run of whitespace in it
/// matches zero or more whitespace characters in the message.
pub fn token_matcher(token: &str) -> Result<Regex> {
    let escaped = regex::escape(token);
    let pattern = WHITESPACE_RUN_REGEX.replace_all(&escaped, NoExpand(r"\s*"));

    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| {
            LinestampError::malformed_token(format!("Cannot build matcher for '{}'", token))
                .with_source(e)
        })
}

/// One-shot resolution without keeping the compiled pattern around
pub fn resolve(text: &str, line: usize, user_token: Option<&str>) -> Result<Option<String>> {
    Ok(PlaceholderPattern::compile(user_token)?.resolve(text, line))
}
