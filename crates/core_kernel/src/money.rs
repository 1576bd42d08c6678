//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal for precise calculations without floating-point errors.
//! Claim amounts arrive as user-typed strings, so parsing (with lenient
//! handling of thousands separators and currency symbols) lives here too.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    INR,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "₹",
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that can occur when handling monetary amounts
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(String),
}

/// A monetary amount with associated currency
///
/// Money uses rust_decimal for precise arithmetic without floating-point
/// errors. Amounts are stored rounded to 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: amount.round_dp(2),
            currency,
        }
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: dec!(0),
            currency,
        }
    }

    /// Parses a user-entered amount string
    ///
    /// Tolerates surrounding whitespace, thousands separators, and a
    /// leading currency symbol. Negative amounts are rejected: a claim
    /// amount is always a cost to be reimbursed.
    pub fn parse(input: &str, currency: Currency) -> Result<Self, MoneyError> {
        let cleaned: String = input
            .trim()
            .trim_start_matches(currency.symbol())
            .chars()
            .filter(|c| *c != ',' && !c.is_whitespace())
            .collect();

        if cleaned.is_empty() {
            return Err(MoneyError::InvalidAmount(input.to_string()));
        }

        let amount = Decimal::from_str(&cleaned)
            .map_err(|_| MoneyError::InvalidAmount(input.to_string()))?;

        if amount.is_sign_negative() {
            return Err(MoneyError::NegativeAmount(input.to_string()));
        }

        Ok(Self::new(amount, currency))
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is greater than zero
    pub fn is_positive(&self) -> bool {
        self.amount > dec!(0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.currency.symbol(), self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_new_rounds() {
        let m = Money::new(dec!(1234.567), Currency::INR);
        assert_eq!(m.amount(), dec!(1234.57));
    }

    #[test]
    fn test_parse_plain() {
        let m = Money::parse("45000", Currency::INR).unwrap();
        assert_eq!(m.amount(), dec!(45000));
        assert_eq!(m.currency(), Currency::INR);
    }

    #[test]
    fn test_parse_with_separators_and_symbol() {
        let m = Money::parse(" ₹1,25,000.50 ", Currency::INR).unwrap();
        assert_eq!(m.amount(), dec!(125000.50));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Money::parse("twelve", Currency::INR),
            Err(MoneyError::InvalidAmount(_))
        ));
        assert!(matches!(
            Money::parse("", Currency::INR),
            Err(MoneyError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_parse_rejects_negative() {
        assert!(matches!(
            Money::parse("-500", Currency::INR),
            Err(MoneyError::NegativeAmount(_))
        ));
    }

    #[test]
    fn test_display() {
        let m = Money::new(dec!(5000), Currency::INR);
        assert_eq!(m.to_string(), "₹5000");
    }
}
