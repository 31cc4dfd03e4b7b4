//! # autoshop
//!
//! Console shopping session for an auto-parts shop.
//!
//! ## Usage
//!
//! ```bash
//! # Optional: custom catalog and balances
//! export AUTOSHOP_CONFIG=config/shop.toml
//!
//! # Run with info logs on stderr
//! RUST_LOG=info autoshop
//! ```

use shop_cli::{load_shop_config, AppConfig, Console, LogFormat};
use shop_core::{Customer, LoggingObserver, Shop};
use std::io;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    let app = AppConfig::from_env()?;

    // Initialize logging on stderr so it never interleaves with prompts
    init_tracing(app.log_format);

    print_banner();

    let config = load_shop_config(&app)?;
    let mut shop = Shop::from_config(&config)?;
    let mut customer = Customer::new(&app.customer_name, config.customer_balance()?);

    shop.add_observer(Box::new(customer.listener()));
    shop.add_observer(Box::new(LoggingObserver));

    info!("Products loaded: {}", shop.catalog().len());
    info!("Add-product key: {}", app.add_product_key);

    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(stdin.lock(), stdout.lock())
        .with_add_product_key(app.add_product_key)
        .run(&mut shop, &mut customer)?;

    info!(
        receipts = shop.receipts().len(),
        shop_balance = %shop.balance(),
        customer_balance = %customer.balance(),
        "Session finished"
    );
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::WARN.into())
        .from_env_lossy();

    match format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr))
            .with(filter)
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(io::stderr))
            .with(filter)
            .init(),
    }
}

fn print_banner() {
    println!(
        r#"
  Autoshop
  ━━━━━━━━━━━━━━━━━━━━━━━
  Auto parts counter
  Version: {}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
