//! Line counting over a bot tree
//!
//! A step occupies one line when it has a command name. Structural nodes without
//! one are still walked so their descendants are counted. Entries that are not
//! step objects, and collections that are not arrays, contribute nothing.

use super::model::{BotDocument, Step};

/// Number of line-bearing steps in a step and everything beneath it
pub fn count_lines(step: &Step) -> usize {
    let own = usize::from(step.is_line());
    let children: usize = step.children().map(count_lines).sum();
    let branches: usize = step.branches().map(count_lines).sum();
    own + children + branches
}

/// Total number of line-bearing steps in a document
pub fn total_lines(document: &BotDocument) -> usize {
    document.nodes().map(count_lines).sum()
}
