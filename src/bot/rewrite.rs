//! Line stamping pass over a bot document
//!
//! Walks the tree depth-first (a step's own line, then its children, then its
//! branches), numbering every line-bearing step and stamping the current number
//! into the content of each `logToFile` step. Logs that cannot be stamped are
//! recorded in the returned [`RewriteStats`] and left untouched; the walk always
//! covers the whole tree.

use super::log_text::{read_log_text, write_log_text};
use super::model::{BotDocument, Step, LOG_CONTENT_ATTRIBUTE};
use super::placeholder::PlaceholderPattern;
use super::validation::validate_placeholder;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, warn};

/// Number of skipped logs shown in a human-readable report
pub const DISPLAYED_ERRORS: usize = 3;

/// Why a log step was left as is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    InvalidContent,
    PatternNotFound,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidContent => "invalid content",
            Self::PatternNotFound => "pattern not found",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A log that was found but not stamped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLog {
    pub line: usize,
    pub message: String,
}

/// Outcome of a rewrite pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteStats {
    pub total_logs_found: usize,
    pub logs_updated: usize,
    pub logs_skipped: usize,
    pub success_rate: String,
    pub placeholder_used: String,
    pub errors: Vec<SkippedLog>,
}

impl RewriteStats {
    /// Fraction of found logs that were stamped, 0 when none were found
    pub fn success_ratio(&self) -> f64 {
        if self.total_logs_found == 0 {
            0.0
        } else {
            self.logs_updated as f64 / self.total_logs_found as f64
        }
    }

    /// First `limit` skipped logs and how many more there are
    pub fn display_errors(&self, limit: usize) -> (&[SkippedLog], usize) {
        let shown = self.errors.len().min(limit);
        (&self.errors[..shown], self.errors.len() - shown)
    }
}

fn format_success_rate(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}

impl fmt::Display for RewriteStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Total: {}  Updated: {}  Skipped: {}  Rate: {}",
            self.total_logs_found, self.logs_updated, self.logs_skipped, self.success_rate
        )?;
        write!(f, "Pattern: {}", self.placeholder_used)?;

        let (shown, remaining) = self.display_errors(DISPLAYED_ERRORS);
        if !shown.is_empty() {
            write!(f, "\nErrors:")?;
            for error in shown {
                write!(f, "\n  Line {}: {}", error.line, error.message)?;
            }
            if remaining > 0 {
                write!(f, "\n  ...and {} more", remaining)?;
            }
        }
        Ok(())
    }
}

/// State of one pass: the running line counter and accumulated statistics
pub struct LineRewriter<'a> {
    pattern: &'a PlaceholderPattern,
    line: usize,
    stats: RewriteStats,
}

impl<'a> LineRewriter<'a> {
    pub fn new(pattern: &'a PlaceholderPattern) -> Self {
        Self {
            pattern,
            line: 0,
            stats: RewriteStats {
                placeholder_used: pattern.label().to_string(),
                ..RewriteStats::default()
            },
        }
    }

    /// Visit a step and everything beneath it
    pub fn visit(&mut self, step: &mut Step) {
        if step.is_line() {
            self.line += 1;
            if step.is_log_step() {
                self.stamp_log_step(step);
            }
        }

        for child in step.children_mut() {
            self.visit(child);
        }
        for branch in step.branches_mut() {
            self.visit(branch);
        }
    }

    fn stamp_log_step(&mut self, step: &mut Step) {
        let line = self.line;
        let pattern = self.pattern;

        for attribute in step
            .attributes_mut()
            .filter(|a| a.is_named(LOG_CONTENT_ATTRIBUTE))
        {
            self.stats.total_logs_found += 1;

            let Some((slot, text)) = read_log_text(attribute).filter(|(_, text)| !text.is_empty())
            else {
                warn!("Skipping log with invalid content at line {}", line);
                self.skip(line, SkipReason::InvalidContent);
                continue;
            };

            match pattern.resolve(text, line) {
                Some(updated) => {
                    debug!("Line {}: stamped log content as {:?}", line, updated);
                    if write_log_text(attribute, slot, updated) {
                        self.stats.logs_updated += 1;
                    } else {
                        self.skip(line, SkipReason::InvalidContent);
                    }
                }
                None => {
                    debug!(
                        "Line {}: no match for placeholder '{}' in {:?}",
                        line,
                        pattern.label(),
                        text
                    );
                    self.skip(line, SkipReason::PatternNotFound);
                }
            }
        }
    }

    fn skip(&mut self, line: usize, reason: SkipReason) {
        self.stats.logs_skipped += 1;
        self.stats.errors.push(SkippedLog {
            line,
            message: reason.to_string(),
        });
    }

    /// Line number of the most recently visited line-bearing step
    pub fn current_line(&self) -> usize {
        self.line
    }

    pub fn finish(mut self) -> RewriteStats {
        self.stats.success_rate = format_success_rate(self.stats.success_ratio());
        self.stats
    }
}

/// Stamp line numbers into every log step of a document
///
/// The token is validated before anything is touched; a malformed token aborts the
/// pass with a validation error and leaves the document unchanged.
pub fn rewrite_log_lines(
    document: &mut BotDocument,
    user_token: Option<&str>,
) -> Result<RewriteStats> {
    if let Some(token) = user_token {
        validate_placeholder(token)?;
    }
    let pattern = PlaceholderPattern::compile(user_token)?;

    let mut rewriter = LineRewriter::new(&pattern);
    for node in document.nodes_mut() {
        rewriter.visit(node);
    }
    let lines = rewriter.current_line();
    let stats = rewriter.finish();

    info!(
        "Stamped {} of {} logs across {} lines using {}",
        stats.logs_updated, stats.total_logs_found, lines, stats.placeholder_used
    );
    Ok(stats)
}
