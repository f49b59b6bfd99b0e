//! Payload definitions for the Beacon listener registry.
//!
//! A trigger may carry one optional value to its listeners. Because a
//! single registry serves many event names, the value is a discriminated
//! enum rather than an open-ended dynamic type.

use serde::{Deserialize, Serialize};

/// Value passed from a trigger to its with-payload listeners.
///
/// Structured data goes through the [`Json`](Payload::Json) variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Payload {
    /// Boolean flag
    Bool(bool),
    /// Signed integer
    Integer(i64),
    /// Floating-point number
    Float(f64),
    /// Text value
    Text(String),
    /// Arbitrary structured data
    Json(serde_json::Value),
}

impl From<bool> for Payload {
    fn from(value: bool) -> Self {
        Payload::Bool(value)
    }
}

impl From<i64> for Payload {
    fn from(value: i64) -> Self {
        Payload::Integer(value)
    }
}

impl From<f64> for Payload {
    fn from(value: f64) -> Self {
        Payload::Float(value)
    }
}

impl From<&str> for Payload {
    fn from(value: &str) -> Self {
        Payload::Text(value.to_string())
    }
}

impl From<String> for Payload {
    fn from(value: String) -> Self {
        Payload::Text(value)
    }
}

impl From<serde_json::Value> for Payload {
    fn from(value: serde_json::Value) -> Self {
        Payload::Json(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_conversions() {
        assert_eq!(Payload::from(42), Payload::Integer(42));
        assert_eq!(Payload::from(true), Payload::Bool(true));
        assert_eq!(Payload::from("hello"), Payload::Text("hello".to_string()));
        assert_eq!(
            Payload::from(serde_json::json!({"k": 1})),
            Payload::Json(serde_json::json!({"k": 1}))
        );
    }

    #[test]
    fn test_payload_round_trips_through_serde() {
        let payload = Payload::Text("status".to_string());
        let encoded = serde_json::to_string(&payload).unwrap();
        let decoded: Payload = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, payload);
    }
}
