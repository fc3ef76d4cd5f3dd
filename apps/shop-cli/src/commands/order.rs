//! # Order Command
//!
//! Builds a shopping list interactively and submits it to the store.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Make an order                                                          │
//! │                                                                         │
//! │  show catalog                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  "Which product # do you want (1-N): " ◄─────────────┐                  │
//! │       │ empty line ──► stop picking                  │                  │
//! │       ▼                                              │                  │
//! │  "What amount do you want (1-stock): "               │                  │
//! │       │                                              │                  │
//! │       ▼                                              │                  │
//! │  "Product added to list!" ───────────────────────────┘                  │
//! │                                                                         │
//! │  list empty?  ──► "Your shopping list is empty. Order cancelled!"      │
//! │  place_order  ──► Ok(total)  ──► "Order made! Total payment: $X"       │
//! │               └─► Err(purchase error) ──► printed, session continues   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Amounts are bounded by each product's stock at the time it is picked, not
//! by what earlier picks in the same list already claimed. Picking the same
//! product twice can therefore still fail at order time.

use std::io::{BufRead, Write};

use shop_core::{OrderLine, OrderPolicy, ShopError, Store};
use tracing::{info, warn};

use super::catalog::list_products;
use crate::console::Console;
use crate::error::ConsoleResult;

pub fn make_order<R: BufRead, W: Write>(
    store: &Store,
    policy: OrderPolicy,
    console: &mut Console<R, W>,
) -> ConsoleResult<()> {
    let mut shopping_list: Vec<OrderLine> = Vec::new();

    list_products(store, console)?;
    console.print("When you want to finish order, enter empty text.")?;

    loop {
        let products = store.all_products();
        if products.is_empty() {
            break;
        }

        let Some(pick) = console
            .prompt_optional_number("Which product # do you want", 1..=products.len() as i64)?
        else {
            break;
        };

        let product = products[(pick - 1) as usize].clone();
        let available = product.borrow().quantity();
        if available < 1 {
            let name = product.borrow().name().to_string();
            console.print(ShopError::InsufficientStock {
                name,
                available,
                requested: 1,
            })?;
            continue;
        }

        let amount = console.prompt_number("What amount do you want", 1..=available)?;
        shopping_list.push((product, amount));
        console.print("Product added to list!\n")?;
    }

    if shopping_list.is_empty() {
        return console.print("Your shopping list is empty. Order cancelled!");
    }

    match store.place_order(&shopping_list, policy) {
        Ok(total) => {
            info!(lines = shopping_list.len(), total = %total, ?policy, "Order made");
            console.print("********")?;
            console.print(format!("Order made! Total payment: {total}"))
        }
        Err(err) if err.is_purchase_error() => {
            warn!(error = %err, ?policy, "Order failed");
            console.print(format!("Error while making order:\n{err}\n"))
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_core::{Money, Product, SharedProduct};

    fn store_with(stock: &[(&str, i64, i64)]) -> (Store, Vec<SharedProduct>) {
        let products: Vec<SharedProduct> = stock
            .iter()
            .map(|&(name, cents, qty)| {
                Product::new(name, Money::from_cents(cents), qty)
                    .unwrap()
                    .into_shared()
            })
            .collect();
        (Store::new(products.clone()), products)
    }

    fn order(store: &Store, policy: OrderPolicy, input: &str) -> String {
        let mut out = Vec::new();
        let mut console = Console::new(input.as_bytes(), &mut out);
        make_order(store, policy, &mut console).unwrap();
        drop(console);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_order_success() {
        let (store, products) = store_with(&[("A", 1000, 5), ("B", 250, 10)]);

        let out = order(&store, OrderPolicy::Partial, "1\n3\n2\n4\n\n");

        assert!(out.contains("When you want to finish order, enter empty text."));
        assert_eq!(out.matches("Product added to list!").count(), 2);
        assert!(out.contains("********\nOrder made! Total payment: $40.00\n"));
        assert_eq!(products[0].borrow().quantity(), 2);
        assert_eq!(products[1].borrow().quantity(), 6);
    }

    #[test]
    fn test_empty_list_cancels() {
        let (store, _) = store_with(&[("A", 1000, 5)]);
        let out = order(&store, OrderPolicy::Partial, "\n");
        assert!(out.ends_with("Your shopping list is empty. Order cancelled!\n"));
        assert_eq!(store.total_quantity().unwrap(), 5);
    }

    #[test]
    fn test_amount_bounded_by_stock() {
        let (store, _) = store_with(&[("A", 100, 3)]);
        let out = order(&store, OrderPolicy::Partial, "1\n4\n3\n\n");
        assert!(out.contains("What amount do you want (1-3): "));
        assert!(out.contains("Please only use numbers between 1 and 3."));
        assert!(out.contains("Order made! Total payment: $3.00"));
    }

    #[test]
    fn test_partial_failure_is_reported_and_kept() {
        let (store, products) = store_with(&[("A", 100, 10), ("B", 100, 3)]);

        // B picked twice: 3 then 3 again, each within stock at pick time.
        let out = order(&store, OrderPolicy::Partial, "1\n2\n2\n3\n2\n3\n\n");

        assert!(out.contains("Error while making order:\nProduct Inactive\n"));
        assert!(!out.contains("Order made!"));
        assert_eq!(products[0].borrow().quantity(), 8);
        assert_eq!(products[1].borrow().quantity(), 0);
    }

    #[test]
    fn test_all_or_nothing_failure_leaves_stock() {
        let (store, products) = store_with(&[("A", 100, 10), ("B", 100, 3)]);

        let out = order(&store, OrderPolicy::AllOrNothing, "1\n2\n2\n3\n2\n3\n\n");

        assert!(out.contains("Error while making order:\nProduct Inactive\n"));
        assert_eq!(products[0].borrow().quantity(), 10);
        assert_eq!(products[1].borrow().quantity(), 3);
    }

    #[test]
    fn test_overflowing_order_is_reported() {
        let (store, products) = store_with(&[("Yacht", 5_000_000_000_000_000_000, 2)]);

        let out = order(&store, OrderPolicy::Partial, "1\n2\n\n");

        assert!(out.contains("Error while making order:\nLine total is too large\n"));
        assert_eq!(products[0].borrow().quantity(), 2);
    }

    #[test]
    fn test_reactivated_empty_product_cannot_be_picked() {
        let (store, products) = store_with(&[("A", 100, 1), ("B", 100, 2)]);
        products[0].borrow_mut().set_quantity(0).unwrap();
        products[0].borrow_mut().activate();

        let out = order(&store, OrderPolicy::Partial, "1\n2\n1\n\n");

        assert!(out.contains("Product only has 0 in stock"));
        assert!(out.contains("Order made! Total payment: $1.00"));
    }
}
