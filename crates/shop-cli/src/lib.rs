//! # shop-cli
//!
//! Interactive console for the autoshop retail loop.
//!
//! This crate provides:
//! - `Console`, the read-eval loop over any `BufRead`/`Write` pair
//! - `AppConfig` and shop config loading from the environment
//!
//! ## Environment
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `AUTOSHOP_CONFIG` | `config/shop.toml` if present | Shop config file |
//! | `AUTOSHOP_CUSTOMER_NAME` | `customer` | Customer name in logs |
//! | `AUTOSHOP_ADD_PRODUCT_KEY` | `3` | Menu number for adding a product |
//! | `AUTOSHOP_LOG_FORMAT` | `text` | `text` or `json` log lines on stderr |
//! | `RUST_LOG` | `warn` | Log filter |

pub mod console;
pub mod settings;

pub use console::{Console, Selection};
pub use settings::{load_shop_config, AppConfig, LogFormat};
