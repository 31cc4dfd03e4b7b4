//! # Receipts
//!
//! Record of a completed purchase.

use crate::product::{Money, Product};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A completed purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Unique receipt ID (generated)
    pub id: Uuid,

    /// Product name (denormalized for display)
    pub product_name: String,

    /// Units bought
    pub quantity: u32,

    /// Price per unit at time of purchase
    pub unit_price: Money,

    /// `unit_price × quantity`
    pub total: Money,

    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Receipt {
    pub fn new(product: &Product, quantity: u32, total: Money) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_name: product.name().to_string(),
            quantity,
            unit_price: product.price(),
            total,
            created_at: Utc::now(),
        }
    }
}

impl std::fmt::Display for Receipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Bought {} x {} for {}",
            self.quantity, self.product_name, self.total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Currency;

    #[test]
    fn test_receipt_display() {
        let product = Product::new("Filtr oleju", Money::from_major(20, Currency::PLN));
        let receipt = Receipt::new(&product, 2, Money::from_major(40, Currency::PLN));

        assert_eq!(receipt.to_string(), "Bought 2 x Filtr oleju for 40.00 PLN");
        assert_eq!(receipt.unit_price, product.price());
    }

    #[test]
    fn test_receipt_serialization() {
        let product = Product::new("Olej silnikowy", Money::from_major(50, Currency::PLN));
        let receipt = Receipt::new(&product, 3, Money::from_major(150, Currency::PLN));

        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["product_name"], "Olej silnikowy");
        assert_eq!(json["quantity"], 3);
        assert_eq!(json["total"]["amount"], 15000);
        assert_eq!(json["total"]["currency"], "pln");

        let back: Receipt = serde_json::from_value(json).unwrap();
        assert_eq!(back, receipt);
    }
}
