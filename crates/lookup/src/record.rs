//! Typed views over raw FMP array elements.
//!
//! FMP responds with arrays of loosely-typed JSON objects. Extraction is an
//! explicit parse step: a field is kept only when it carries the expected
//! JSON type, anything else degrades to `None` without failing the lookup.

use serde_json::Value;

/// Static company attributes taken from `/profile/{ticker}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileRecord {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ProfileRecord {
    pub fn from_value(value: &Value) -> Self {
        Self {
            name: string_field(value, "companyName"),
            description: string_field(value, "description"),
        }
    }
}

/// Current trading data taken from `/quote/{ticker}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteRecord {
    pub price: Option<f64>,
}

impl QuoteRecord {
    pub fn from_value(value: &Value) -> Self {
        Self {
            price: numeric_field(value, "price"),
        }
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

// Accepts both integer and floating-point JSON numbers.
fn numeric_field(value: &Value, key: &str) -> Option<f64> {
    value.get(key).and_then(Value::as_f64)
}
