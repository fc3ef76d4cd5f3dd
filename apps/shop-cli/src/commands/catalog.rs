//! Catalog display commands.

use std::io::{BufRead, Write};

use shop_core::Store;

use crate::console::Console;
use crate::error::ConsoleResult;

/// Prints every active product with 1-based numbering.
///
/// The numbering matches the indices `make_order` accepts, because both read
/// `Store::all_products`.
pub fn list_products<R: BufRead, W: Write>(
    store: &Store,
    console: &mut Console<R, W>,
) -> ConsoleResult<()> {
    console.print("------")?;
    for (idx, product) in store.all_products().iter().enumerate() {
        console.print(format!("{}. {}", idx + 1, product.borrow().describe_line()))?;
    }
    console.print("------")
}

/// Prints the number of units across the whole catalog, sold-out and
/// deactivated products included. A total too large to count is reported
/// and the session carries on.
pub fn show_total<R: BufRead, W: Write>(
    store: &Store,
    console: &mut Console<R, W>,
) -> ConsoleResult<()> {
    match store.total_quantity() {
        Ok(total) => console.print(format!("Total of {total} items in store")),
        Err(err) => console.print(err),
    }
}
