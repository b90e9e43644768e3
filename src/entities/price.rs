// 💵 Price Entity - amount + currency with validated writes
//
// Construction trusts the caller (typed arguments).
// Every later write goes through a setter that re-checks the kind of the
// incoming value, so `amount` is always a number and `currency` always a Currency.

use crate::entities::currency::Currency;
use crate::value_kind::{expect_number, number_serde, Input, TypeError};
use serde::{Deserialize, Serialize};

// ============================================================================
// PRICE ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    #[serde(with = "number_serde")]
    amount: f64,
    currency: Currency,
}

impl Price {
    /// Create a price; no validation, the types already guarantee the invariant
    pub fn new(amount: f64, currency: Currency) -> Self {
        Price { amount, currency }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Replace the amount
    ///
    /// Fails with "Amount must be a number" for anything that is not a
    /// number (`"100"`, `null`, `true`, ...). The stored amount is untouched
    /// on failure.
    pub fn set_amount(&mut self, new_amount: impl Into<Input>) -> Result<(), TypeError> {
        self.amount = expect_number("Amount", &new_amount.into())?;
        Ok(())
    }

    /// Replace the currency
    ///
    /// Passing a [`Currency`] always succeeds. Any other value must have the
    /// Currency shape, otherwise this fails with "Currency must be a Currency".
    pub fn set_currency(&mut self, new_currency: impl Into<Input>) -> Result<(), TypeError> {
        let input = new_currency.into();
        let currency = match &input {
            Input::Dynamic(value) => Currency::from_value(value),
            Input::Float(_) => None,
        }
        .ok_or_else(|| TypeError::new("Currency", "a Currency", input.kind()))?;

        self.currency = currency;
        Ok(())
    }

    /// "<amount> <currency display>", e.g. "100 Dollars (USD)"
    pub fn display_full_price(&self) -> String {
        format!("{} {}", self.amount, self.currency.display_full_currency())
    }

    /// Multiply an amount by a conversion rate
    ///
    /// Both arguments are checked, amount first.
    pub fn convert_price(
        amount: impl Into<Input>,
        conversion_rate: impl Into<Input>,
    ) -> Result<f64, TypeError> {
        let amount = expect_number("Amount", &amount.into())?;
        let conversion_rate = expect_number("ConversionRate", &conversion_rate.into())?;

        Ok(amount * conversion_rate)
    }
}

// ============================================================================
// TESTS
// ============================================================================
