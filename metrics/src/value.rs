//! Scalar metric values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A scalar value attached to a metric event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl MetricValue {
    /// Returns the value as a float if it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Self::Int(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            Self::Bool(_) | Self::Text(_) => None,
        }
    }

    /// Returns the value as an integer if it is an `Int`.
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<bool> for MetricValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for MetricValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for MetricValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for MetricValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_bare_scalars() {
        assert_eq!(MetricValue::Bool(true).to_string(), "true");
        assert_eq!(MetricValue::Int(-4).to_string(), "-4");
        assert_eq!(MetricValue::Float(0.5).to_string(), "0.5");
        assert_eq!(MetricValue::from("done").to_string(), "done");
    }

    #[test]
    fn numeric_accessors() {
        assert_eq!(MetricValue::Int(3).as_f64(), Some(3.0));
        assert_eq!(MetricValue::Float(1.25).as_f64(), Some(1.25));
        assert_eq!(MetricValue::Bool(false).as_f64(), None);
        assert_eq!(MetricValue::from("x").as_f64(), None);
        assert_eq!(MetricValue::Int(7).as_i64(), Some(7));
        assert_eq!(MetricValue::Float(7.0).as_i64(), None);
    }

    #[test]
    fn conversions() {
        assert_eq!(MetricValue::from(5u32), MetricValue::Int(5));
        assert_eq!(MetricValue::from(5i64), MetricValue::Int(5));
        assert_eq!(MetricValue::from(true), MetricValue::Bool(true));
        assert_eq!(
            MetricValue::from(String::from("a")),
            MetricValue::Text("a".into())
        );
    }

    #[test]
    fn serializes_untagged() {
        assert_eq!(serde_json::to_string(&MetricValue::Int(2)).unwrap(), "2");
        assert_eq!(
            serde_json::to_string(&MetricValue::Text("a".into())).unwrap(),
            "\"a\""
        );
        let parsed: MetricValue = serde_json::from_str("2.5").unwrap();
        assert_eq!(parsed, MetricValue::Float(2.5));
        let parsed: MetricValue = serde_json::from_str("2").unwrap();
        assert_eq!(parsed, MetricValue::Int(2));
    }
}
