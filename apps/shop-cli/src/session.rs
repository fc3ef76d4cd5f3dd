//! # Menu Session
//!
//! The main menu loop. A session owns the store for its whole lifetime and
//! ends on Quit or when input runs out.
//!
//! ```text
//!
//!    Store Menu
//!    ----------
//! 1. List all products in store
//! 2. Show total amount in store
//! 3. Make an order
//! 4. Quit
//! Please choose a number:
//! ```

use std::io::{BufRead, Write};

use shop_core::{OrderPolicy, Store};
use tracing::{debug, info};

use crate::commands::catalog::{list_products, show_total};
use crate::commands::order::make_order;
use crate::commands::MenuCommand;
use crate::config::ShopConfig;
use crate::console::Console;
use crate::error::{ConsoleError, ConsoleResult};

pub struct Session<R, W> {
    store: Store,
    policy: OrderPolicy,
    menu_title: String,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(store: Store, config: &ShopConfig, console: Console<R, W>) -> Self {
        Session {
            store,
            policy: config.order_policy,
            menu_title: config.menu_title(),
            console,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Runs the menu until Quit. End of input is a normal exit.
    pub fn run(&mut self) -> ConsoleResult<()> {
        match self.menu_loop() {
            Err(ConsoleError::InputClosed) => {
                info!("Input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn menu_loop(&mut self) -> ConsoleResult<()> {
        loop {
            self.show_menu()?;
            let choice = self.console.prompt_choice("Please choose a number:")?;

            let Some(command) = MenuCommand::from_choice(choice) else {
                debug!(choice, "Menu choice out of range");
                continue;
            };
            debug!(?command, "Menu command");

            match command {
                MenuCommand::ListProducts => list_products(&self.store, &mut self.console)?,
                MenuCommand::ShowTotal => show_total(&self.store, &mut self.console)?,
                MenuCommand::MakeOrder => make_order(&self.store, self.policy, &mut self.console)?,
                MenuCommand::Quit => {
                    info!("Quit selected");
                    return Ok(());
                }
            }
        }
    }

    fn show_menu(&mut self) -> ConsoleResult<()> {
        self.console.print("")?;
        self.console.print(format_args!("   {}", self.menu_title))?;
        self.console
            .print(format_args!("   {}", "-".repeat(self.menu_title.chars().count())))?;
        for (idx, command) in MenuCommand::ALL.iter().enumerate() {
            self.console
                .print(format_args!("{}. {}", idx + 1, command.label()))?;
        }
        Ok(())
    }
}
