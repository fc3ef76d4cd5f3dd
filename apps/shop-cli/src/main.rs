//! # shop
//!
//! Console entry point: flags and environment into `ShopConfig`, then the
//! menu on stdin/stdout.
//!
//! ## Usage
//! ```text
//! shop                                  # "Store Menu", partial orders
//! shop --store-name "Best Buy"          # "Best Buy Menu"
//! shop --order-policy all_or_nothing    # failed orders change nothing
//! shop -v                               # debug logs on stderr
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use shop_core::OrderPolicy;

use shop_cli::config::ShopConfig;

#[derive(Parser)]
#[command(name = "shop")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Name shown in the menu header
    #[arg(long)]
    store_name: Option<String>,

    /// partial | all_or_nothing
    #[arg(long)]
    order_policy: Option<OrderPolicy>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn apply(self, config: &mut ShopConfig) {
        if let Some(name) = self.store_name {
            config.store_name = name;
        }
        if let Some(policy) = self.order_policy {
            config.order_policy = policy;
        }
        if self.verbose {
            config.log_filter = "debug".to_string();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ShopConfig::from_env().context("Failed to load configuration")?;
    cli.apply(&mut config);
    if config.store_name.trim().is_empty() {
        anyhow::bail!("--store-name must not be empty");
    }

    shop_cli::init_tracing(&config);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shop_cli::run(&config, stdin.lock(), stdout.lock()).context("Console session failed")?;

    Ok(())
}
