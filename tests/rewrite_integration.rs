//! End-to-end stamping of fixture bots through the library API

mod common;

use common::{at, read_fixture};
use linestamp::bot::{rewrite_log_lines, total_lines, BotDocument, SkippedLog};
use serde_json::{json, Value};

fn load(name: &str) -> BotDocument {
    BotDocument::from_json_str(&read_fixture(name)).unwrap()
}

fn to_value(document: &BotDocument) -> Value {
    serde_json::from_str(&document.to_pretty_json().unwrap()).unwrap()
}

#[test]
fn test_fixture_line_count() {
    assert_eq!(total_lines(&load("order_bot.json")), 8);
    assert_eq!(total_lines(&load("stamped_bot.json")), 5);
}

#[test]
fn test_literal_token_pass() {
    let mut bot = load("order_bot.json");
    let stats = rewrite_log_lines(&mut bot, Some("[linenumber]")).unwrap();

    assert_eq!(stats.total_logs_found, 4);
    assert_eq!(stats.logs_updated, 2);
    assert_eq!(stats.logs_skipped, 2);
    assert_eq!(stats.success_rate, "50%");
    assert_eq!(stats.placeholder_used, "[linenumber]");
    assert_eq!(
        stats.errors,
        vec![
            SkippedLog {
                line: 5,
                message: "pattern not found".to_string()
            },
            SkippedLog {
                line: 7,
                message: "invalid content".to_string()
            },
        ]
    );

    let value = to_value(&bot);
    assert_eq!(
        at(&value, &["nodes", "0", "attributes", "1", "value", "string"]),
        "Bot started [1]"
    );
    assert_eq!(
        at(&value, &["nodes", "2", "children", "0", "attributes", "0", "value"]),
        "Bot finished [8]"
    );
    // Only log steps are stamped
    assert_eq!(
        at(
            &value,
            &["nodes", "1", "children", "0", "attributes", "0", "value", "string"]
        ),
        "Working [linenumber]"
    );
}

#[test]
fn test_padded_token_matches_flexible_spacing() {
    let mut bot = load("order_bot.json");
    let stats = rewrite_log_lines(&mut bot, Some("[ linenumber ]")).unwrap();

    assert_eq!(stats.total_logs_found, 4);
    assert_eq!(stats.logs_updated, 3);
    assert_eq!(stats.logs_skipped, 1);
    assert_eq!(stats.errors.len(), 1);

    let value = to_value(&bot);
    assert_eq!(
        at(&value, &["nodes", "0", "attributes", "1", "value", "string"]),
        "Bot started [ 1 ]"
    );
    assert_eq!(
        at(
            &value,
            &["nodes", "1", "children", "1", "children", "0", "attributes", "0", "value", "expression"]
        ),
        "Order $vOrder$ found [ 5 ]"
    );
    assert_eq!(
        at(&value, &["nodes", "2", "children", "0", "attributes", "0", "value"]),
        "Bot finished [ 8 ]"
    );
}

#[test]
fn test_only_log_text_changes() {
    let original: Value = serde_json::from_str(&read_fixture("order_bot.json")).unwrap();
    let mut bot = load("order_bot.json");
    rewrite_log_lines(&mut bot, Some("[linenumber]")).unwrap();

    let mut value = to_value(&bot);
    value["nodes"][0]["attributes"][1]["value"]["string"] = json!("Bot started [linenumber]");
    value["nodes"][2]["children"][0]["attributes"][0]["value"] = json!("Bot finished [LineNumber]");
    assert_eq!(value, original);
}

#[test]
fn test_auto_detect_pass_and_rerun() {
    let mut bot = load("stamped_bot.json");
    let first = rewrite_log_lines(&mut bot, None).unwrap();

    assert_eq!(first.placeholder_used, "auto-detect");
    assert_eq!(first.total_logs_found, 3);
    assert_eq!(first.logs_updated, 2);
    assert_eq!(first.errors[0].line, 5);
    assert_eq!(first.success_rate, "67%");

    let value = to_value(&bot);
    assert_eq!(
        at(&value, &["nodes", "0", "attributes", "0", "value", "string"]),
        "start | 1 |"
    );
    assert_eq!(
        at(&value, &["nodes", "1", "children", "1", "attributes", "0", "value", "string"]),
        "inside -4-"
    );

    let second = rewrite_log_lines(&mut bot, None).unwrap();
    assert_eq!(second, first);
}

#[test]
fn test_steps_inserted_upstream_shift_numbers() {
    let mut bot = load("stamped_bot.json");
    rewrite_log_lines(&mut bot, None).unwrap();

    let mut shifted: Value = to_value(&bot);
    shifted["nodes"]
        .as_array_mut()
        .unwrap()
        .insert(0, json!({"commandName": "delay"}));
    let mut bot: BotDocument = serde_json::from_value(shifted).unwrap();
    rewrite_log_lines(&mut bot, None).unwrap();

    let value = to_value(&bot);
    assert_eq!(
        at(&value, &["nodes", "1", "attributes", "0", "value", "string"]),
        "start | 2 |"
    );
    assert_eq!(
        at(&value, &["nodes", "2", "children", "1", "attributes", "0", "value", "string"]),
        "inside -5-"
    );
}
