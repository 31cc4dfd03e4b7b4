//! # Shop Configuration
//!
//! Opening balances and seed catalog, loaded from `config/shop.toml`.
//!
//! ```toml
//! currency = "pln"
//! shop_balance = 10000.0
//! customer_balance = 5000.0
//!
//! [[products]]
//! name = "Olej silnikowy"
//! price = 50.0
//! ```
//!
//! Every key is optional; missing keys fall back to the defaults above
//! (plus "Filtr oleju" at 20.0 in the seed catalog).

use crate::error::{ShopError, ShopResult};
use crate::product::{Currency, Money, Product};
use serde::{Deserialize, Serialize};

/// A product entry in the seed catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSeed {
    pub name: String,
    pub price: f64,
}

impl ProductSeed {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Startup configuration for a shop session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Currency for every amount in the session
    #[serde(default)]
    pub currency: Currency,

    /// Shop cash balance at opening
    #[serde(default = "default_shop_balance")]
    pub shop_balance: f64,

    /// Customer balance at the start of the session
    #[serde(default = "default_customer_balance")]
    pub customer_balance: f64,

    /// Seed catalog, in display order
    #[serde(default = "default_products")]
    pub products: Vec<ProductSeed>,
}

fn default_shop_balance() -> f64 {
    10000.0
}

fn default_customer_balance() -> f64 {
    5000.0
}

fn default_products() -> Vec<ProductSeed> {
    vec![
        ProductSeed::new("Olej silnikowy", 50.0),
        ProductSeed::new("Filtr oleju", 20.0),
    ]
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            shop_balance: default_shop_balance(),
            customer_balance: default_customer_balance(),
            products: default_products(),
        }
    }
}

impl ShopConfig {
    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> ShopResult<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| ShopError::Configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject amounts that cannot be represented exactly as `Money`
    pub fn validate(&self) -> ShopResult<()> {
        self.shop_balance()?;
        self.customer_balance()?;
        self.products()?;
        Ok(())
    }

    pub fn shop_balance(&self) -> ShopResult<Money> {
        self.amount("shop_balance", self.shop_balance)
    }

    pub fn customer_balance(&self) -> ShopResult<Money> {
        self.amount("customer_balance", self.customer_balance)
    }

    /// Seed products in display order
    pub fn products(&self) -> ShopResult<Vec<Product>> {
        self.products
            .iter()
            .map(|seed| {
                let price = self.amount(&format!("price of {:?}", seed.name), seed.price)?;
                Ok(Product::new(&seed.name, price))
            })
            .collect()
    }

    fn amount(&self, what: &str, value: f64) -> ShopResult<Money> {
        if value < 0.0 {
            return Err(ShopError::Configuration(format!(
                "{} must be a non-negative amount, got {}",
                what, value
            )));
        }
        Money::try_from_decimal(value, self.currency).map_err(|e| {
            ShopError::Configuration(format!(
                "{} must fit in {} with at most {} decimal places, got {} ({})",
                what,
                self.currency,
                self.currency.decimal_places(),
                value,
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShopConfig::default();
        assert_eq!(config.shop_balance().unwrap(), Money::from_major(10000, Currency::PLN));
        assert_eq!(config.customer_balance().unwrap(), Money::from_major(5000, Currency::PLN));

        let names: Vec<String> = config
            .products()
            .unwrap()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["Olej silnikowy", "Filtr oleju"]);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        assert_eq!(ShopConfig::from_toml("").unwrap(), ShopConfig::default());
    }

    #[test]
    fn test_from_toml() {
        let config = ShopConfig::from_toml(
            r#"
            currency = "eur"
            shop_balance = 250.5
            customer_balance = 99.99

            [[products]]
            name = "Akumulator"
            price = 349.9
            "#,
        )
        .unwrap();

        assert_eq!(config.currency, Currency::EUR);
        assert_eq!(config.shop_balance().unwrap(), Money::from_minor(25050, Currency::EUR));
        assert_eq!(config.customer_balance().unwrap(), Money::from_minor(9999, Currency::EUR));

        let products = config.products().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].price(), Money::from_minor(34990, Currency::EUR));
    }

    #[test]
    fn test_rejects_negative_amounts() {
        let err = ShopConfig::from_toml("customer_balance = -1.0").unwrap_err();
        assert!(matches!(err, ShopError::Configuration(_)));
        assert!(!err.is_recoverable());

        let err = ShopConfig::from_toml(
            r#"
            [[products]]
            name = "Zły"
            price = -3.0
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Zły"));
    }

    #[test]
    fn test_rejects_balances_beyond_range() {
        let err = ShopConfig::from_toml("shop_balance = 1e30\ncustomer_balance = 1e30").unwrap_err();
        assert!(matches!(err, ShopError::Configuration(_)));
        assert!(err.to_string().contains("shop_balance"));

        let config = ShopConfig {
            customer_balance: 1e30,
            ..ShopConfig::default()
        };
        assert!(matches!(
            config.customer_balance(),
            Err(ShopError::Configuration(_))
        ));
    }

    #[test]
    fn test_rejects_extra_decimal_places() {
        let err = ShopConfig::from_toml(
            r#"
            [[products]]
            name = "Filtr powietrza"
            price = 19.999
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ShopError::Configuration(_)));
        assert!(err.to_string().contains("Filtr powietrza"));

        assert!(ShopConfig::from_toml("customer_balance = 0.005").is_err());
        assert!(ShopConfig::from_toml("customer_balance = 0.05").is_ok());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(matches!(
            ShopConfig::from_toml("shop_balance = \"lots\""),
            Err(ShopError::Configuration(_))
        ));
    }
}
