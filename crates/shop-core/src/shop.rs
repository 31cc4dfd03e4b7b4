//! # Shop
//!
//! The shop owns the catalog, its cash balance, the observers to announce
//! catalog changes to, and a ledger of completed purchases.
//!
//! ## Purchase Flow
//!
//! ```text
//! purchase(index, quantity, customer)
//!   ├── product lookup        ── missing ──► ProductNotFound
//!   ├── quantity > 0          ── no ───────► InvalidQuantity
//!   ├── total = price × qty   ── overflow ─► AmountOverflow
//!   ├── customer covers total ── no ───────► InsufficientFunds
//!   └── customer −total, shop +total, receipt recorded
//! ```
//!
//! Every failure leaves balances and the ledger untouched.

use crate::config::ShopConfig;
use crate::customer::Customer;
use crate::error::{ShopError, ShopResult};
use crate::observer::{BoxedObserver, ObserverList};
use crate::product::{Catalog, Money, Product};
use crate::receipt::Receipt;
use tracing::{info, instrument, warn};

/// The shop: catalog, cash balance, observers, receipts
#[derive(Debug)]
pub struct Shop {
    catalog: Catalog,
    balance: Money,
    observers: ObserverList,
    receipts: Vec<Receipt>,
}

impl Shop {
    /// Create an empty shop with an opening balance
    pub fn new(balance: Money) -> Self {
        Self {
            catalog: Catalog::new(),
            balance,
            observers: ObserverList::new(),
            receipts: Vec::new(),
        }
    }

    /// Build a shop from configuration, seeding its catalog.
    ///
    /// Seeding happens before any observer can register, so it is silent.
    pub fn from_config(config: &ShopConfig) -> ShopResult<Self> {
        let mut shop = Self::new(config.shop_balance()?);
        for product in config.products()? {
            shop.catalog.add(product);
        }
        info!(
            products = shop.catalog.len(),
            balance = %shop.balance,
            "Shop opened"
        );
        Ok(shop)
    }

    /// Create a product and add it to the catalog, notifying observers
    pub fn add_product(&mut self, name: impl Into<String>, price: Money) -> &Product {
        self.add(Product::new(name, price))
    }

    /// Add an existing product to the catalog, notifying observers
    pub fn add(&mut self, product: Product) -> &Product {
        let product = self.catalog.add(product);
        info!(product = %product, "Product added");
        self.observers
            .notify_all(&format!("New product available: {}", product.name()));
        product
    }

    /// 1-indexed listing of the catalog in insertion order
    pub fn list_products(&self) -> Vec<String> {
        self.catalog.listing()
    }

    /// Product at a 0-based index, or `None` when out of range
    pub fn get_product(&self, index: usize) -> Option<&Product> {
        self.catalog.get(index)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Completed purchases, oldest first
    pub fn receipts(&self) -> &[Receipt] {
        &self.receipts
    }

    /// Register an observer for catalog announcements
    pub fn add_observer(&mut self, observer: BoxedObserver) {
        self.observers.register(observer);
    }

    /// Broadcast a message to every observer, in registration order
    pub fn notify_observers(&self, message: &str) {
        self.observers.notify_all(message);
    }

    /// Sell `quantity` units of the product at 0-based `index` to `customer`.
    #[instrument(skip(self, customer), fields(customer = %customer.name()))]
    pub fn purchase(
        &mut self,
        index: usize,
        quantity: i64,
        customer: &mut Customer,
    ) -> ShopResult<Receipt> {
        let product = self.catalog.get(index).ok_or(ShopError::ProductNotFound {
            position: i64::try_from(index)
                .ok()
                .and_then(|i| i.checked_add(1))
                .unwrap_or(i64::MAX),
        })?;

        let units = u32::try_from(quantity)
            .ok()
            .filter(|&n| n > 0)
            .ok_or(ShopError::InvalidQuantity { quantity })?;

        let total = product.price().checked_mul(units)?;

        if !customer.can_afford(&total)? {
            warn!(required = %total, available = %customer.balance(), "Insufficient funds");
            return Err(ShopError::InsufficientFunds {
                required: total,
                available: customer.balance(),
            });
        }

        // Computed before paying so an overflow leaves the customer untouched
        let credited = self.balance.checked_add(total)?;
        customer.pay(total)?;
        self.balance = credited;

        let receipt = Receipt::new(product, units, total);
        info!(receipt = %receipt.id, total = %total, "Purchase completed");
        self.receipts.push(receipt.clone());
        Ok(receipt)
    }
}
