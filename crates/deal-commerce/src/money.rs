//! Money type for deal prices.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues when comparing sale and original prices.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    CAD,
    EUR,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::CAD => "CAD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::CAD => "CA$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "CAD" => Some(Currency::CAD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
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
/// Amounts are stored in cents.
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

    /// Create a USD value from cents.
    pub fn usd(amount_cents: i64) -> Self {
        Self::new(amount_cents, Currency::USD)
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use deal_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(49.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        Self::new((amount * 100.0).round() as i64, currency)
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
        self.amount_cents as f64 / 100.0
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency.symbol(), self.to_decimal())
    }

    /// Try to subtract another Money value, returning None if currencies don't match.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_cents - other.amount_cents,
            self.currency,
        ))
    }

    /// Whole percent this price is below `original`, rounded to nearest.
    ///
    /// Returns `None` when there is no discount, the original is not positive
    /// or the currencies differ.
    pub fn percent_off(&self, original: &Money) -> Option<u8> {
        if self.currency != original.currency
            || original.amount_cents <= 0
            || self.amount_cents >= original.amount_cents
        {
            return None;
        }
        let saved = (original.amount_cents - self.amount_cents) as f64;
        let percent = (saved * 100.0 / original.amount_cents as f64).round();
        Some(percent.clamp(0.0, 100.0) as u8)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99, Currency::USD);
        assert_eq!(m.amount_cents, 4999);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::usd(4999).display(), "$49.99");
        assert_eq!(Money::new(1250, Currency::EUR).display(), "\u{20ac}12.50");
        assert_eq!(Money::new(5, Currency::CAD).to_string(), "CA$0.05");
    }

    #[test]
    fn test_money_subtraction() {
        let a = Money::usd(1000);
        let b = Money::usd(300);
        assert_eq!(a.try_subtract(&b), Some(Money::usd(700)));
        assert_eq!(a.try_subtract(&Money::new(300, Currency::GBP)), None);
    }

    #[test]
    fn test_percent_off() {
        assert_eq!(Money::usd(7500).percent_off(&Money::usd(10000)), Some(25));
        assert_eq!(Money::usd(6666).percent_off(&Money::usd(9999)), Some(33));
        assert_eq!(Money::usd(0).percent_off(&Money::usd(1000)), Some(100));
    }

    #[test]
    fn test_percent_off_without_discount() {
        assert_eq!(Money::usd(1000).percent_off(&Money::usd(1000)), None);
        assert_eq!(Money::usd(1200).percent_off(&Money::usd(1000)), None);
        assert_eq!(Money::usd(100).percent_off(&Money::usd(0)), None);
        assert_eq!(
            Money::usd(500).percent_off(&Money::new(1000, Currency::EUR)),
            None
        );
    }

    #[test]
    fn test_money_equality_includes_currency() {
        use std::collections::HashSet;

        let prices: HashSet<Money> = [
            Money::usd(1999),
            Money::new(1999, Currency::CAD),
            Money::usd(1999),
        ]
        .into_iter()
        .collect();
        assert_eq!(prices.len(), 2);
        assert_ne!(Money::usd(1999), Money::new(1999, Currency::CAD));
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("cad"), Some(Currency::CAD));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
