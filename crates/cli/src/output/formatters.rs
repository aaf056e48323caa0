//! Output formatters

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

/// JSON formatter
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format a value as pretty JSON
    pub fn format<T: Serialize>(value: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }
}

/// Plain text formatter
///
/// Objects become `key: value` lines, nested values are indented below
/// their key.
pub struct PlainFormatter;

impl PlainFormatter {
    pub fn format<T: Serialize>(value: &T) -> Result<String> {
        let json = serde_json::to_value(value)?;
        let mut lines = Vec::new();
        Self::push_value(&json, 0, &mut lines);
        Ok(lines.join("\n"))
    }

    fn push_value(value: &Value, indent: usize, lines: &mut Vec<String>) {
        let pad = "  ".repeat(indent);
        match value {
            Value::Object(obj) => {
                for (key, item) in obj {
                    match item {
                        Value::Object(_) | Value::Array(_) => {
                            lines.push(format!("{}{}:", pad, key));
                            Self::push_value(item, indent + 1, lines);
                        }
                        _ => lines.push(format!("{}{}: {}", pad, key, Self::scalar(item))),
                    }
                }
            }
            Value::Array(items) => {
                for item in items {
                    match item {
                        Value::Object(_) | Value::Array(_) => Self::push_value(item, indent, lines),
                        _ => lines.push(format!("{}- {}", pad, Self::scalar(item))),
                    }
                }
            }
            _ => lines.push(format!("{}{}", pad, Self::scalar(value))),
        }
    }

    fn scalar(value: &Value) -> String {
        match value {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}
