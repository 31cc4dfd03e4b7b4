//! # Product Types
//!
//! Money, products and the ordered catalog the shop sells from.
//! Amounts are kept in minor units (grosze for PLN) so purchase totals are exact.

use crate::error::{ShopError, ShopResult};
use serde::{Deserialize, Serialize};

/// Supported currencies (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    PLN,
    EUR,
    USD,
}

impl Currency {
    /// Returns the ISO 4217 currency code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::PLN => "pln",
            Currency::EUR => "eur",
            Currency::USD => "usd",
        }
    }

    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        2
    }

    fn minor_per_major(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// An amount of money in the smallest currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    /// Amount in smallest currency unit (grosze for PLN)
    pub amount: i64,
    /// Currency
    pub currency: Currency,
}

impl Money {
    /// Create money from smallest units
    pub const fn from_minor(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create money from whole units (e.g. `Money::from_major(50, PLN)` is 50.00 PLN).
    ///
    /// Saturates at the `i64` bounds; use [`Money::checked_from_major`] when
    /// the amount is not known to be small.
    pub fn from_major(amount: i64, currency: Currency) -> Self {
        Self::from_minor(
            amount.saturating_mul(currency.minor_per_major()),
            currency,
        )
    }

    /// Create money from whole units, failing if the minor amount overflows
    pub fn checked_from_major(amount: i64, currency: Currency) -> ShopResult<Self> {
        amount
            .checked_mul(currency.minor_per_major())
            .map(|minor| Self::from_minor(minor, currency))
            .ok_or(ShopError::AmountOverflow)
    }

    /// Create money from a decimal amount such as a TOML float.
    ///
    /// Fails on non-finite input, on more fractional digits than the currency
    /// allows and on amounts outside the `i64` minor-unit range. Nothing is
    /// rounded or saturated.
    pub fn try_from_decimal(amount: f64, currency: Currency) -> ShopResult<Self> {
        // f64 noise left after scaling an exact two-digit amount (19.99 * 100)
        const TOLERANCE: f64 = 1e-6;

        if !amount.is_finite() {
            return Err(ShopError::InvalidAmount {
                input: amount.to_string(),
            });
        }

        let scaled = amount * currency.minor_per_major() as f64;
        let rounded = scaled.round();
        if (scaled - rounded).abs() > TOLERANCE {
            return Err(ShopError::InvalidAmount {
                input: amount.to_string(),
            });
        }

        // i64::MAX as f64 rounds up to 2^63, which is itself out of range
        if rounded >= i64::MAX as f64 || rounded < i64::MIN as f64 {
            return Err(ShopError::AmountOverflow);
        }
        Ok(Self::from_minor(rounded as i64, currency))
    }

    /// Parse user text such as `50`, `19.99` or `19,99`.
    ///
    /// Signs, exponents and more fractional digits than the currency allows
    /// are rejected.
    pub fn parse(input: &str, currency: Currency) -> ShopResult<Self> {
        let invalid = || ShopError::InvalidAmount {
            input: input.to_string(),
        };

        let normalized = input.trim().replace(',', ".");
        let (major, minor) = normalized
            .split_once('.')
            .unwrap_or((normalized.as_str(), ""));

        let is_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if (major.is_empty() && minor.is_empty()) || !is_digits(major) || !is_digits(minor) {
            return Err(invalid());
        }

        let places = currency.decimal_places() as usize;
        if minor.len() > places {
            return Err(invalid());
        }

        let major: i64 = if major.is_empty() {
            0
        } else {
            major.parse().map_err(|_| ShopError::AmountOverflow)?
        };
        let minor: i64 = if places == 0 {
            0
        } else {
            format!("{:0<width$}", minor, width = places)
                .parse()
                .map_err(|_| invalid())?
        };

        major
            .checked_mul(currency.minor_per_major())
            .and_then(|m| m.checked_add(minor))
            .map(|amount| Self::from_minor(amount, currency))
            .ok_or(ShopError::AmountOverflow)
    }

    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Add another amount of the same currency
    pub fn checked_add(self, other: Money) -> ShopResult<Money> {
        self.ensure_same_currency(&other)?;
        self.amount
            .checked_add(other.amount)
            .map(|amount| Money::from_minor(amount, self.currency))
            .ok_or(ShopError::AmountOverflow)
    }

    /// Subtract another amount of the same currency
    pub fn checked_sub(self, other: Money) -> ShopResult<Money> {
        self.ensure_same_currency(&other)?;
        self.amount
            .checked_sub(other.amount)
            .map(|amount| Money::from_minor(amount, self.currency))
            .ok_or(ShopError::AmountOverflow)
    }

    /// Multiply by a unit count
    pub fn checked_mul(self, quantity: u32) -> ShopResult<Money> {
        self.amount
            .checked_mul(i64::from(quantity))
            .map(|amount| Money::from_minor(amount, self.currency))
            .ok_or(ShopError::AmountOverflow)
    }

    /// True if `self` is at least `other`
    pub fn covers(&self, other: &Money) -> ShopResult<bool> {
        self.ensure_same_currency(other)?;
        Ok(self.amount >= other.amount)
    }

    fn ensure_same_currency(&self, other: &Money) -> ShopResult<()> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(ShopError::CurrencyMismatch {
                expected: self.currency,
                found: other.currency,
            })
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.amount.unsigned_abs();
        let places = self.currency.decimal_places() as usize;
        let factor = self.currency.minor_per_major() as u64;

        if places == 0 {
            write!(f, "{}{} {}", sign, abs, self.currency)
        } else {
            write!(
                f,
                "{}{}.{:0width$} {}",
                sign,
                abs / factor,
                abs % factor,
                self.currency,
                width = places
            )
        }
    }
}

/// A product in the catalog. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    price: Money,
}

impl Product {
    /// Create a product. Name and price are taken as given.
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.name, self.price)
    }
}

/// Append-only product list. Insertion order is display order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Append a product, returning the stored entry
    pub fn add(&mut self, product: Product) -> &Product {
        let index = self.products.len();
        self.products.push(product);
        &self.products[index]
    }

    /// Product at a 0-based index
    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// 1-indexed display lines, e.g. `"1. Olej silnikowy - 50.00 PLN"`
    pub fn listing(&self) -> Vec<String> {
        self.products
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{}. {}", i + 1, p))
            .collect()
    }
}
