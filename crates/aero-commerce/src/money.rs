//! Money type for representing monetary values.
//!
//! Amounts are held as integer cents. The menu and the stored cart carry
//! prices as plain decimal numbers; [`decimal`] converts at that boundary.
//! The storefront sells in reais only, so [`Currency`] has a single variant
//! and every stored amount reads back unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    BRL,
}

impl Currency {
    /// Get the currency code (e.g., "BRL").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::BRL => "BRL",
        }
    }

    /// Get the currency symbol (e.g., "R$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::BRL => "R$",
        }
    }

    /// Number of decimal places.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "BRL" => Some(Currency::BRL),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Arithmetic saturates at the `i64` bounds rather than panicking, so totals
/// over untrusted catalog data never abort the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount, rounding to the nearest cent.
    ///
    /// ```
    /// use aero_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(49.99, Currency::BRL);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        // `as` saturates for out-of-range floats and maps NaN to 0.
        let amount_cents = (amount * multiplier as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_cents as f64 / divisor as f64
    }

    /// Format as a display string (e.g., "R$49.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        let divisor = divisor as u64;
        format!("{}{}.{:02}", sign, abs / divisor, abs % divisor)
    }

    /// Add another Money value, saturating at the `i64` bounds.
    pub fn saturating_add(&self, other: &Money) -> Money {
        Money::new(
            self.amount_cents.saturating_add(other.amount_cents),
            self.currency,
        )
    }

    /// Multiply by a quantity.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor), self.currency)
    }

    /// Sum an iterator of Money values. An empty iterator sums to zero.
    pub fn sum<I>(iter: I) -> Money
    where
        I: IntoIterator<Item = Money>,
    {
        iter.into_iter()
            .fold(Money::default(), |acc, m| acc.saturating_add(&m))
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Serde helpers for prices written as plain decimal numbers (`42.5`).
///
/// Deserialized amounts are in [`Currency::BRL`], the only currency, so a
/// written price reads back as the same [`Money`].
///
/// ```rust,ignore
/// #[serde(with = "crate::money::decimal")]
/// pub price: Money,
/// ```
pub mod decimal {
    use super::{Currency, Money};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(money.to_decimal())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Ok(Money::from_decimal(amount, Currency::BRL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(49.99, Currency::BRL).amount_cents, 4999);
        assert_eq!(Money::from_decimal(8.0, Currency::BRL).amount_cents, 800);
        assert_eq!(Money::from_decimal(0.1 + 0.2, Currency::BRL).amount_cents, 30);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4999, Currency::BRL).display(), "R$49.99");
        assert_eq!(Money::new(5, Currency::BRL).display(), "R$0.05");
        assert_eq!(Money::new(-250, Currency::BRL).display(), "R$-2.50");
    }

    #[test]
    fn test_money_addition_and_multiply() {
        let a = Money::new(1000, Currency::BRL);
        let b = Money::new(500, Currency::BRL);
        assert_eq!(a.saturating_add(&b).amount_cents, 1500);
        assert_eq!((a * 3).amount_cents, 3000);
    }

    #[test]
    fn test_money_saturates() {
        let big = Money::new(i64::MAX, Currency::BRL);
        assert_eq!(big.multiply(2).amount_cents, i64::MAX);
        assert_eq!(big.saturating_add(&big).amount_cents, i64::MAX);
    }

    #[test]
    fn test_sum() {
        let values = vec![Money::new(100, Currency::BRL), Money::new(250, Currency::BRL)];
        assert_eq!(Money::sum(values).amount_cents, 350);
        assert!(Money::sum(Vec::new()).is_zero());
    }

    #[test]
    fn test_decimal_serde() {
        #[derive(Serialize, Deserialize)]
        struct Priced {
            #[serde(with = "decimal")]
            price: Money,
        }

        let parsed: Priced = serde_json::from_str(r#"{"price": 35.9}"#).unwrap();
        assert_eq!(parsed.price, Money::new(3590, Currency::BRL));

        let json = serde_json::to_string(&parsed).unwrap();
        assert_eq!(json, r#"{"price":35.9}"#);
    }

    #[test]
    fn test_decimal_serde_keeps_amount_and_currency() {
        #[derive(Serialize, Deserialize)]
        struct Priced {
            #[serde(with = "decimal")]
            price: Money,
        }

        for cents in [0, 1, 999, 4490, 123_456] {
            let original = Priced {
                price: Money::new(cents, Currency::default()),
            };
            let json = serde_json::to_string(&original).unwrap();
            let back: Priced = serde_json::from_str(&json).unwrap();
            assert_eq!(back.price, original.price);
        }
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("brl"), Some(Currency::BRL));
        assert_eq!(Currency::from_code("USD"), None);
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
