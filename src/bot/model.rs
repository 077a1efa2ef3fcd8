//! Bot document model
//!
//! A bot definition is a JSON tree: an ordered list of top-level `nodes`, each of
//! which may carry nested `children` and alternate `branches`. Only the fields the
//! line stamper needs are typed, and those through [`Lenient`] so odd shapes and
//! explicit `null`s pass through. Everything else is kept in flattened maps. A
//! load/save round trip keeps the content intact; typed fields are written before
//! the other fields of the same object.

use super::lenient::{is_truthy, Lenient};
use crate::error::{ErrorCode, LinestampError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Command identifier of the step that writes a line to a log file
pub const LOG_COMMAND: &str = "logToFile";

/// Attribute of a log step that holds the message text
pub const LOG_CONTENT_ATTRIBUTE: &str = "logContent";

/// A list of steps where entries that are not step objects are carried through untouched
pub type StepList = Lenient<Vec<Lenient<Step>>>;

/// Root of a bot definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BotDocument {
    #[serde(default, skip_serializing_if = "Lenient::is_missing")]
    pub nodes: StepList,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One node of the workflow tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Step {
    #[serde(
        rename = "commandName",
        default,
        skip_serializing_if = "Lenient::is_missing"
    )]
    pub command_name: Lenient<String>,
    #[serde(default, skip_serializing_if = "Lenient::is_missing")]
    pub attributes: Lenient<Vec<Lenient<Attribute>>>,
    #[serde(default, skip_serializing_if = "Lenient::is_missing")]
    pub children: StepList,
    #[serde(default, skip_serializing_if = "Lenient::is_missing")]
    pub branches: StepList,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A named configuration entry of a step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(default, skip_serializing_if = "Lenient::is_missing")]
    pub name: Lenient<String>,
    #[serde(default, skip_serializing_if = "Lenient::is_missing")]
    pub value: Lenient<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn parsed_entries<T>(list: &Lenient<Vec<Lenient<T>>>) -> impl Iterator<Item = &T> {
    list.parsed().into_iter().flatten().filter_map(Lenient::parsed)
}

fn parsed_entries_mut<T>(list: &mut Lenient<Vec<Lenient<T>>>) -> impl Iterator<Item = &mut T> {
    list.parsed_mut()
        .into_iter()
        .flatten()
        .filter_map(Lenient::parsed_mut)
}

fn step_list(steps: Vec<Step>) -> StepList {
    Lenient::Parsed(steps.into_iter().map(Lenient::Parsed).collect())
}

/// Named fields a log value may carry its text under, in lookup priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogField {
    Expression,
    Literal,
    Value,
    String,
}

impl LogField {
    pub const PRIORITY: [LogField; 4] = [
        LogField::Expression,
        LogField::Literal,
        LogField::Value,
        LogField::String,
    ];

    pub fn key(self) -> &'static str {
        match self {
            LogField::Expression => "expression",
            LogField::Literal => "literal",
            LogField::Value => "value",
            LogField::String => "string",
        }
    }
}

/// Where the text of a log attribute lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogSlot {
    /// Under a named field of an object value
    Field(LogField),
    /// The attribute value is the string itself
    Raw,
}

impl BotDocument {
    pub fn new(nodes: Vec<Step>) -> Self {
        Self {
            nodes: step_list(nodes),
            extra: Map::new(),
        }
    }

    /// Parse a bot document from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize with 2-space indentation
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            LinestampError::document_with_code(
                ErrorCode::DOCUMENT_SERIALIZATION_ERROR,
                "Failed to serialize bot document",
                None,
            )
            .with_source(e)
        })
    }

    /// Write the document back to disk as pretty JSON
    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        let json = self.to_pretty_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Step> {
        parsed_entries(&self.nodes)
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Step> {
        parsed_entries_mut(&mut self.nodes)
    }
}

impl Step {
    /// Create a step that counts as a line
    pub fn command(name: impl Into<String>) -> Self {
        Self {
            command_name: Lenient::Parsed(name.into()),
            ..Self::default()
        }
    }

    /// Create a `logToFile` step whose log content is the given value
    pub fn log(content: Value) -> Self {
        Self::command(LOG_COMMAND).with_attribute(Attribute::new(LOG_CONTENT_ATTRIBUTE, content))
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        let mut attributes = match std::mem::take(&mut self.attributes) {
            Lenient::Parsed(attributes) => attributes,
            _ => Vec::new(),
        };
        attributes.push(Lenient::Parsed(attribute));
        self.attributes = Lenient::Parsed(attributes);
        self
    }

    pub fn with_children(mut self, children: Vec<Step>) -> Self {
        self.children = step_list(children);
        self
    }

    pub fn with_branches(mut self, branches: Vec<Step>) -> Self {
        self.branches = step_list(branches);
        self
    }

    /// A step occupies a line when its command name is present and truthy
    pub fn is_line(&self) -> bool {
        match &self.command_name {
            Lenient::Parsed(name) => !name.is_empty(),
            Lenient::Raw(value) => is_truthy(value),
            Lenient::Missing => false,
        }
    }

    pub fn is_log_step(&self) -> bool {
        self.command_name.parsed().map(String::as_str) == Some(LOG_COMMAND)
    }

    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        parsed_entries(&self.attributes)
    }

    pub fn attributes_mut(&mut self) -> impl Iterator<Item = &mut Attribute> {
        parsed_entries_mut(&mut self.attributes)
    }

    pub fn children(&self) -> impl Iterator<Item = &Step> {
        parsed_entries(&self.children)
    }

    pub fn children_mut(&mut self) -> impl Iterator<Item = &mut Step> {
        parsed_entries_mut(&mut self.children)
    }

    pub fn branches(&self) -> impl Iterator<Item = &Step> {
        parsed_entries(&self.branches)
    }

    pub fn branches_mut(&mut self) -> impl Iterator<Item = &mut Step> {
        parsed_entries_mut(&mut self.branches)
    }
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: Lenient::Parsed(name.into()),
            value: Lenient::Parsed(value),
            extra: Map::new(),
        }
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name.parsed().map(String::as_str) == Some(name)
    }

    /// The attribute value, `None` when the key is absent
    pub fn value(&self) -> Option<&Value> {
        self.value.parsed()
    }

    pub fn value_mut(&mut self) -> Option<&mut Value> {
        self.value.parsed_mut()
    }
}
