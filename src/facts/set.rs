//! # Fact Set
//!
//! The immutable per-evaluation mapping from fact name to value, with shape
//! validation against the recognized input contract.

use std::collections::BTreeMap;

use serde_json::Value;

use super::errors::{FactError, FactResult};

/// Recognized boolean facts
pub const BOOL_KEYS: &[&str] = &[
    "has_ac",
    "has_fans",
    "windows_closed",
    "has_rice_cooker",
    "has_water_heater",
    "peak_hour_use",
    "unplug_habit",
];

/// Recognized non-negative integer facts
pub const COUNT_KEYS: &[&str] = &[
    "incandescent_count",
    "cfl_count",
    "fan_count",
    "fridge_age",
    "fridge_door_opens",
];

/// Recognized non-negative floating-point hour facts
pub const HOUR_KEYS: &[&str] = &[
    "ac_hours",
    "fan_hours",
    "rice_cooker_keep_warm",
    "heater_hours",
    "lights_left_on",
    "iron_hours",
    "total_appliance_hours",
];

/// A single fact value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FactValue {
    Bool(bool),
    Int(i64),
    Float(f64),
}

/// One household's observations, immutable during evaluation.
///
/// Missing keys are not an error: accessors on [`super::FactView`] default
/// them. Unknown keys are retained untouched, mirroring the upstream form's
/// pass-through behavior.
#[derive(Debug, Clone, Default)]
pub struct FactSet {
    values: BTreeMap<String, FactValue>,
}

impl FactSet {
    /// Create an empty fact set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and shape-check a JSON object against the input contract.
    ///
    /// Recognized keys must carry their contracted type; anything else is an
    /// input-shape anomaly and fatal, to avoid masking upstream form bugs.
    pub fn from_json(input: &Value) -> FactResult<Self> {
        let obj = match input.as_object() {
            Some(obj) => obj,
            None => return Err(FactError::NotAnObject(type_name(input).to_string())),
        };

        let mut values = BTreeMap::new();
        for (key, value) in obj {
            let parsed = if BOOL_KEYS.contains(&key.as_str()) {
                match value.as_bool() {
                    Some(b) => FactValue::Bool(b),
                    None => {
                        return Err(FactError::ExpectedBool {
                            key: key.clone(),
                            got: value.to_string(),
                        })
                    }
                }
            } else if COUNT_KEYS.contains(&key.as_str()) {
                match value.as_i64() {
                    Some(n) if n >= 0 => FactValue::Int(n),
                    _ => {
                        return Err(FactError::ExpectedCount {
                            key: key.clone(),
                            got: value.to_string(),
                        })
                    }
                }
            } else if HOUR_KEYS.contains(&key.as_str()) {
                match value.as_f64() {
                    Some(h) if h >= 0.0 => FactValue::Float(h),
                    _ => {
                        return Err(FactError::ExpectedHours {
                            key: key.clone(),
                            got: value.to_string(),
                        })
                    }
                }
            } else {
                // Unrecognized key: keep it if it has a representable type.
                match value {
                    Value::Bool(b) => FactValue::Bool(*b),
                    Value::Number(n) => match n.as_i64() {
                        Some(i) => FactValue::Int(i),
                        None => FactValue::Float(n.as_f64().unwrap_or(0.0)),
                    },
                    other => {
                        return Err(FactError::UnsupportedValue {
                            key: key.clone(),
                            got: type_name(other).to_string(),
                        })
                    }
                }
            };
            values.insert(key.clone(), parsed);
        }

        Ok(Self { values })
    }

    /// Look up a raw value
    pub fn get(&self, key: &str) -> Option<FactValue> {
        self.values.get(key).copied()
    }

    /// Number of facts present
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Builder: set a boolean fact
    pub fn with_flag(mut self, key: &str, value: bool) -> Self {
        self.values.insert(key.to_string(), FactValue::Bool(value));
        self
    }

    /// Builder: set an integer count fact
    pub fn with_count(mut self, key: &str, value: i64) -> Self {
        self.values.insert(key.to_string(), FactValue::Int(value));
        self
    }

    /// Builder: set an hours fact
    pub fn with_hours(mut self, key: &str, value: f64) -> Self {
        self.values.insert(key.to_string(), FactValue::Float(value));
        self
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
