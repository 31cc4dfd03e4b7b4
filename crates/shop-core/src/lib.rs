//! # shop-core
//!
//! Core types for the autoshop retail loop.
//!
//! This crate provides:
//! - `Money`, `Product` and `Catalog` for the shop's stock list
//! - `Customer` with a self-checking balance and a notification inbox
//! - `Observer` trait and `ObserverList` for catalog announcements
//! - `Shop` tying catalog, cash balance, observers and receipts together
//! - `ShopConfig` for opening balances and the seed catalog
//! - `ShopError` for typed error handling
//!
//! ## Example
//!
//! ```rust
//! use shop_core::{Currency, Customer, Money, Shop};
//!
//! let pln = |major| Money::from_major(major, Currency::PLN);
//!
//! let mut shop = Shop::new(pln(10000));
//! shop.add_product("Olej silnikowy", pln(50));
//!
//! let mut customer = Customer::new("jan", pln(5000));
//! shop.add_observer(Box::new(customer.listener()));
//! shop.add_product("Filtr oleju", pln(20));
//!
//! let receipt = shop.purchase(0, 3, &mut customer)?;
//! assert_eq!(receipt.total, pln(150));
//! assert_eq!(customer.balance(), pln(4850));
//! assert_eq!(shop.balance(), pln(10150));
//! assert_eq!(customer.take_notifications(), vec!["New product available: Filtr oleju"]);
//! # Ok::<(), shop_core::ShopError>(())
//! ```

pub mod config;
pub mod customer;
pub mod error;
pub mod observer;
pub mod product;
pub mod receipt;
pub mod shop;

// Re-exports for convenience
pub use config::{ProductSeed, ShopConfig};
pub use customer::{Customer, CustomerListener};
pub use error::{ShopError, ShopResult};
pub use observer::{BoxedObserver, LoggingObserver, Observer, ObserverList};
pub use product::{Catalog, Currency, Money, Product};
pub use receipt::Receipt;
pub use shop::Shop;
