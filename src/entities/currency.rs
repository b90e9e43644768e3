// 💱 Currency Entity - code + human-readable name
//
// Price only relies on two things from a currency:
// - it can render itself for display ("Dollars (USD)")
// - a dynamic value can be recognised as one (object with `code` and `name`)

use crate::value_kind::{expect_string, Input, TypeError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// CURRENCY ENTITY
// ============================================================================

/// Currency - ISO-style code plus display name
///
/// The serde shape doubles as the type identity: a value is a Currency
/// exactly when it deserializes into this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Currency {
    /// Short code (e.g. "USD")
    code: String,

    /// Display name (e.g. "Dollars")
    name: String,
}

impl Currency {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Currency {
            code: code.into(),
            name: name.into(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the code; only strings are accepted
    pub fn set_code(&mut self, new_code: impl Into<Input>) -> Result<(), TypeError> {
        self.code = expect_string("Code", &new_code.into())?;
        Ok(())
    }

    /// Replace the name; only strings are accepted
    pub fn set_name(&mut self, new_name: impl Into<Input>) -> Result<(), TypeError> {
        self.name = expect_string("Name", &new_name.into())?;
        Ok(())
    }

    /// "<name> (<code>)"
    pub fn display_full_currency(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }

    /// Recognise a dynamic value as a Currency
    pub fn from_value(value: &Value) -> Option<Currency> {
        Currency::deserialize(value).ok()
    }
}

impl From<Currency> for Value {
    fn from(currency: Currency) -> Self {
        serde_json::json!({
            "code": currency.code,
            "name": currency.name,
        })
    }
}

impl From<Currency> for Input {
    fn from(currency: Currency) -> Self {
        Input::Dynamic(Value::from(currency))
    }
}

// ============================================================================
// TESTS
// ============================================================================
