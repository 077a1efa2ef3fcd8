//! Bot documents and the line stamping engine
//!
//! - `lenient` - Fields that keep unexpected JSON shapes verbatim
//! - `model` - Typed view of a bot definition that round-trips unknown fields
//! - `lines` - Line counting over the step tree
//! - `placeholder` - Token and auto-detect matching of line stamps in log text
//! - `log_text` - Locating and writing back log message text
//! - `rewrite` - The depth-first stamping pass and its statistics
//! - `validation` - Up-front placeholder checks

pub mod lenient;
pub mod lines;
pub mod log_text;
pub mod model;
pub mod placeholder;
pub mod rewrite;
pub mod validation;

pub use lenient::Lenient;
pub use lines::{count_lines, total_lines};
pub use log_text::{read_log_text, write_log_text};
pub use model::{
    Attribute, BotDocument, LogField, LogSlot, Step, StepList, LOG_COMMAND, LOG_CONTENT_ATTRIBUTE,
};
pub use placeholder::{PlaceholderPattern, AUTO_DETECT};
pub use rewrite::{rewrite_log_lines, LineRewriter, RewriteStats, SkipReason, SkippedLog};
pub use validation::{validate_placeholder, PlaceholderCheck};
