//! # Shop Console
//!
//! Interactive menu over an in-memory store.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Shop Console                                  │
//! │                                                                         │
//! │  stdin ──► Console ──► Session (menu loop) ──► commands ──► shop-core  │
//! │                 │                                                       │
//! │                 └──► stdout (menu, prompts, results)                    │
//! │                                                                         │
//! │  tracing ──► stderr                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`config`]: Startup configuration
//! - [`console`]: Prompting and line input
//! - [`commands`]: Menu entries and their handlers
//! - [`session`]: The menu loop
//! - [`seed`]: Starting inventory
//! - [`error`]: Console error type

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod seed;
pub mod session;

use std::io::{BufRead, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::ShopConfig;
use crate::console::Console;
use crate::error::ConsoleResult;
use crate::session::Session;

/// Seeds a store and runs one menu session over `input` / `output`.
pub fn run<R: BufRead, W: Write>(config: &ShopConfig, input: R, output: W) -> ConsoleResult<()> {
    info!(store = %config.store_name, policy = ?config.order_policy, "Opening store");
    let store = seed::seed_store()?;
    let mut session = Session::new(store, config, Console::new(input, output));
    session.run()?;
    info!(remaining = session.store().total_quantity()?, "Session finished");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shop_core=debug` - Stock changes per purchase
/// - Default: `config.log_filter`
///
/// Logs go to stderr so they never interleave with the menu on stdout.
pub fn init_tracing(config: &ShopConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
