//! # Application Settings
//!
//! Session settings from the environment (and `.env`), plus loading of the
//! shop configuration file.

use anyhow::{bail, Context};
use shop_core::ShopConfig;
use std::path::{Path, PathBuf};

/// Locations searched for the shop config when `AUTOSHOP_CONFIG` is unset
const CONFIG_PATHS: [&str; 2] = ["config/shop.toml", "../config/shop.toml"];

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Explicit shop config file
    pub config_path: Option<PathBuf>,
    /// Name shown in customer logs
    pub customer_name: String,
    /// Menu number that opens the add-product flow
    pub add_product_key: i64,
    /// Log format on stderr
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let add_product_key = match lookup("AUTOSHOP_ADD_PRODUCT_KEY") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .with_context(|| format!("AUTOSHOP_ADD_PRODUCT_KEY is not a number: {:?}", raw))?,
            None => 3,
        };
        if add_product_key == 0 {
            bail!("AUTOSHOP_ADD_PRODUCT_KEY cannot be 0, it is the exit key");
        }

        let log_format = match lookup("AUTOSHOP_LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => bail!("AUTOSHOP_LOG_FORMAT must be text or json, got {:?}", other),
        };

        Ok(Self {
            config_path: lookup("AUTOSHOP_CONFIG").map(PathBuf::from),
            customer_name: lookup("AUTOSHOP_CUSTOMER_NAME").unwrap_or_else(|| "customer".to_string()),
            add_product_key,
            log_format,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            customer_name: "customer".to_string(),
            add_product_key: 3,
            log_format: LogFormat::Text,
        }
    }
}

/// Load the shop configuration.
///
/// An explicit path must exist. Otherwise the first readable entry of
/// `CONFIG_PATHS` is used, falling back to built-in defaults.
pub fn load_shop_config(app: &AppConfig) -> anyhow::Result<ShopConfig> {
    if let Some(path) = &app.config_path {
        return read_shop_config(path);
    }

    for path in CONFIG_PATHS {
        let path = Path::new(path);
        if path.is_file() {
            return read_shop_config(path);
        }
    }

    tracing::info!("No shop config found, using defaults");
    Ok(ShopConfig::default())
}

fn read_shop_config(path: &Path) -> anyhow::Result<ShopConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = ShopConfig::from_toml(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!(
        "Loaded {} products from {}",
        config.products.len(),
        path.display()
    );
    Ok(config)
}
