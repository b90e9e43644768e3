// 🔎 Value Kinds - dynamic input checking
// Setters accept an `Input`: typed Rust numbers arrive as-is, while strings,
// booleans and parsed CLI/JSON values arrive as a serde_json::Value.
// This module decides whether such an input has the kind a field needs.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

// ============================================================================
// VALUE KIND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Classify a dynamic value
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// INPUT
// ============================================================================

/// Argument to a validated write
///
/// Rust numbers stay `Float`, so infinities and NaN are still numbers
/// (a JSON value cannot hold them). Everything else is `Dynamic`.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Float(f64),
    Dynamic(Value),
}

impl Input {
    pub fn kind(&self) -> ValueKind {
        match self {
            Input::Float(_) => ValueKind::Number,
            Input::Dynamic(value) => ValueKind::of(value),
        }
    }
}

impl From<f64> for Input {
    fn from(value: f64) -> Self {
        Input::Float(value)
    }
}

impl From<f32> for Input {
    fn from(value: f32) -> Self {
        Input::Float(f64::from(value))
    }
}

macro_rules! integer_input {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Input {
                fn from(value: $ty) -> Self {
                    Input::Float(value as f64)
                }
            }
        )*
    };
}

integer_input!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<Value> for Input {
    fn from(value: Value) -> Self {
        Input::Dynamic(value)
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Input::Dynamic(Value::from(value))
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Input::Dynamic(Value::from(value))
    }
}

impl From<bool> for Input {
    fn from(value: bool) -> Self {
        Input::Dynamic(Value::from(value))
    }
}

// ============================================================================
// TYPE ERROR
// ============================================================================

/// A write or construction received a value of the wrong kind.
///
/// `field` and `expected` render the user-facing message, e.g.
/// "Amount must be a number". `found` records what actually arrived.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} must be {expected}")]
pub struct TypeError {
    pub field: &'static str,
    pub expected: &'static str,
    pub found: ValueKind,
}

impl TypeError {
    pub fn new(field: &'static str, expected: &'static str, found: ValueKind) -> Self {
        let error = TypeError {
            field,
            expected,
            found,
        };
        log::debug!("rejected {} value: {}", error.found, error);
        error
    }
}

// ============================================================================
// EXTRACTORS
// ============================================================================

/// Extract a number, or fail with "<field> must be a number".
///
/// A `Value` built from a non-finite f64 is already `Null` and is rejected;
/// pass the f64 itself to keep it.
pub fn expect_number(field: &'static str, input: &Input) -> Result<f64, TypeError> {
    match input {
        Input::Float(number) => Ok(*number),
        Input::Dynamic(value) => value
            .as_f64()
            .ok_or_else(|| TypeError::new(field, "a number", input.kind())),
    }
}

/// Extract a string, or fail with "<field> must be a string"
pub fn expect_string(field: &'static str, input: &Input) -> Result<String, TypeError> {
    match input {
        Input::Dynamic(Value::String(text)) => Ok(text.clone()),
        _ => Err(TypeError::new(field, "a string", input.kind())),
    }
}

// ============================================================================
// NUMBER SERDE
// ============================================================================

/// Serde adapter for f64 fields
///
/// Finite values stay JSON numbers; infinities and NaN are written as
/// "inf", "-inf" and "NaN" so they survive a round trip.
pub(crate) mod number_serde {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if value.is_sign_positive() {
            serializer.serialize_str("inf")
        } else {
            serializer.serialize_str("-inf")
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(number) => Ok(number),
            Repr::Text(text) => match text.as_str() {
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                "NaN" => Ok(f64::NAN),
                other => Err(D::Error::custom(format!("expected a number, got {:?}", other))),
            },
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
