//! # Structured Logger
//!
//! Single-line JSON events with deterministic key ordering (the map is
//! key-sorted) and synchronous, unbuffered writes. Logging failure is
//! swallowed: observability must never affect an evaluation.

use std::io::{self, Write};

use serde_json::{Map, Value};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warn,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

/// JSON-line event logger
pub struct Logger;

impl Logger {
    /// Log an event to stdout
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = Self::format(severity, event, fields);
        let mut out = io::stdout();
        let _ = writeln!(out, "{}", line);
        let _ = out.flush();
    }

    fn format(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        // serde_json's Map is BTreeMap-backed, so keys serialize sorted.
        let mut map = Map::new();
        map.insert("event".to_string(), Value::String(event.to_string()));
        map.insert(
            "severity".to_string(),
            Value::String(severity.as_str().to_string()),
        );
        for (key, value) in fields {
            map.insert(key.to_string(), Value::String(value.to_string()));
        }
        Value::Object(map).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_is_single_line_json() {
        let line = Logger::format(
            Severity::Info,
            "evaluation_complete",
            &[("fired", "3"), ("evaluation_id", "abc")],
        );
        assert!(!line.contains('\n'));
        let parsed: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["event"], "evaluation_complete");
        assert_eq!(parsed["severity"], "INFO");
        assert_eq!(parsed["fired"], "3");
    }

    #[test]
    fn test_format_key_order_is_deterministic() {
        let a = Logger::format(Severity::Warn, "e", &[("b", "2"), ("a", "1")]);
        let b = Logger::format(Severity::Warn, "e", &[("a", "1"), ("b", "2")]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_fields_with_quotes_stay_valid_json() {
        let line = Logger::format(Severity::Error, "e", &[("msg", "he said \"hi\"\n")]);
        assert!(serde_json::from_str::<Value>(&line).is_ok());
    }
}
