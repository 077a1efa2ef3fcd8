//! Reading and writing the message text of a log attribute
//!
//! Log content shows up in several shapes depending on how the step was authored:
//! `{"expression": ...}`, `{"literal": ...}`, `{"value": ...}`,
//! `{"type": "STRING", "string": ...}`, or the attribute value may be the bare
//! string. Reads report which slot the text came from so writes go back to the
//! same place.

use super::model::{Attribute, LogField, LogSlot};
use serde_json::Value;

/// Locate the message text of an attribute
///
/// Object fields are probed in [`LogField::PRIORITY`] order; the first one holding a
/// string wins. A string attribute value is returned as [`LogSlot::Raw`].
pub fn read_log_text(attribute: &Attribute) -> Option<(LogSlot, &str)> {
    match attribute.value()? {
        Value::Object(fields) => LogField::PRIORITY.iter().find_map(|field| {
            fields
                .get(field.key())
                .and_then(Value::as_str)
                .map(|text| (LogSlot::Field(*field), text))
        }),
        Value::String(text) => Some((LogSlot::Raw, text.as_str())),
        _ => None,
    }
}

/// Store message text back into the slot it was read from
///
/// Returns `false` when the attribute no longer has that shape. A raw slot is only
/// written over an existing string value.
pub fn write_log_text(attribute: &mut Attribute, slot: LogSlot, text: String) -> bool {
    match (slot, attribute.value_mut()) {
        (LogSlot::Field(field), Some(Value::Object(fields))) => {
            fields.insert(field.key().to_string(), Value::String(text));
            true
        }
        (LogSlot::Raw, Some(Value::String(existing))) => {
            *existing = text;
            true
        }
        _ => false,
    }
}
