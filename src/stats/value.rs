//! Tagged representation of a raw box-score stat value.
//!
//! The MLB API mixes numbers and strings inside the same stat block
//! (`"inningsPitched": "6.2"`, `"note": "a-PH"`). The ambiguity is resolved
//! once at extraction time: anything numeric, including numeric-looking
//! strings, becomes [`StatValue::Number`]; everything else stays
//! [`StatValue::Text`].

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
}

impl StatValue {
    /// Resolve a raw JSON value into a tagged stat value.
    ///
    /// Strings that parse cleanly as non-negative decimal numbers are
    /// promoted to `Number`; other strings are carried as `Text`.
    /// Booleans, nulls, and containers have no stat meaning and yield `None`.
    pub fn from_json(raw: &Value) -> Option<Self> {
        match raw {
            Value::Number(n) => n.as_f64().map(StatValue::Number),
            Value::String(s) => {
                let trimmed = s.trim();
                match trimmed.parse::<f64>() {
                    Ok(n) if n.is_finite() && n >= 0.0 => Some(StatValue::Number(n)),
                    _ => Some(StatValue::Text(s.clone())),
                }
            }
            _ => None,
        }
    }

    /// Numeric view of the value, if it has one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StatValue::Number(n) => Some(*n),
            StatValue::Text(_) => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, StatValue::Number(_))
    }
}
