//! # Menu Loop
//!
//! The interactive store menu: collects operator input, calls into
//! minimart-core, and renders results. Every core error is caught and
//! printed; nothing here crashes the process.
//!
//! ## Menu Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Operator Action             Core Call                              │
//! │  ───────────────             ─────────                              │
//! │  1. List all products ─────► Store (Display)                        │
//! │  2. Show total amount ─────► Store::total_value                     │
//! │  3. Make an order ─────────► Store::order                           │
//! │  4. Check product exists ──► Store::contains                        │
//! │  5. Compare with store ────► Store::is_greater_value                │
//! │  6. Quit                                                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, Write};

use anyhow::{Context, Result};
use minimart_core::validation::validate_purchase_quantity;
use minimart_core::{Money, OrderLine, Product, ProductKind, Store, MAX_ORDER_LINES};

/// Runs the menu loop until the operator quits.
pub fn run(mut store: Store) -> Result<()> {
    loop {
        display_menu();
        let choice = read_line("Please choose a number: ")?;
        match choice.trim() {
            "1" => list_products(&store),
            "2" => show_total_value(&store),
            "3" => make_order(&mut store)?,
            "4" => check_existence(&store)?,
            "5" => compare_with_dummy(&store),
            "6" => {
                println!("Exiting the program. Goodbye!");
                return Ok(());
            }
            other => println!("Unknown choice: {other}"),
        }
    }
}

fn display_menu() {
    println!("   Store Menu");
    println!("   ----------");
    println!("1. List all products in store");
    println!("2. Show total amount in store");
    println!("3. Make an order");
    println!("4. Check if a product exists in the store");
    println!("5. Compare with another store");
    println!("6. Quit");
}

/// Prompts and reads one line from stdin.
fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush().context("flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("read from stdin")?;
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

fn list_products(store: &Store) {
    println!("------");
    println!("All products in store:");
    print!("{store}");
    println!("------");
}

fn show_total_value(store: &Store) {
    println!("Total value of the store: {}", store.total_value());
}

fn make_order(store: &mut Store) -> Result<()> {
    println!("------");
    println!("When you want to finish order, enter empty text.");

    let lines = collect_shopping_list(store)?;
    if lines.is_empty() {
        println!("Nothing ordered.");
        return Ok(());
    }

    match store.order(&lines) {
        Ok(total) => {
            tracing::debug!(lines = lines.len(), total = %total, "order completed");
            println!("********");
            println!("Order made! Total payment: {total}");
            println!();
        }
        // Earlier lines have already committed their stock decrements;
        // the core documents this no-rollback policy.
        Err(err) => {
            tracing::warn!(line = err.line, "order failed");
            println!("Order failed: {err}");
        }
    }
    Ok(())
}

/// Collects (identifier, quantity) pairs until the operator enters an
/// empty line.
///
/// Availability is pre-checked here for friendlier feedback, but the
/// order itself is still validated line by line inside `Store::order`.
fn collect_shopping_list(store: &Store) -> Result<Vec<OrderLine>> {
    let mut lines = Vec::new();
    while lines.len() < MAX_ORDER_LINES {
        let identifier = read_line("Which product do you want? ")?;
        if identifier.is_empty() {
            break;
        }
        let amount_input = read_line("What amount do you want? ")?;
        if amount_input.is_empty() {
            break;
        }

        let quantity = match parse_quantity(&amount_input) {
            Ok(quantity) => quantity,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        match store.find(&identifier) {
            Some(product) if stock_allows(product, quantity) => {
                lines.push(OrderLine::new(&identifier, quantity));
                println!("{quantity} of {identifier} added to list!");
            }
            Some(product) => {
                println!(
                    "Sorry, only {} of {} available.",
                    product.quantity(),
                    product.name()
                );
            }
            None => println!("Product not found in the store"),
        }
    }
    Ok(lines)
}

fn check_existence(store: &Store) -> Result<()> {
    let identifier = read_line("Enter the name of the product to check: ")?;
    if store.contains(&identifier) {
        println!("The product exists in the store");
    } else {
        println!("The product does not exist in the store");
    }
    Ok(())
}

fn compare_with_dummy(store: &Store) {
    // A throwaway zero-value store, so any stocked catalog wins.
    let dummy = Store::new(vec![Product::regular("dummy", Money::zero(), 0)
        .expect("dummy product is valid")
        .with_id("1")]);

    if store.is_greater_value(&dummy) {
        println!("The store has a higher total value than the dummy store");
    } else {
        println!("The store has a lower total value than the dummy store");
    }
}

// =============================================================================
// Pure Input Helpers
// =============================================================================

/// Parses an order quantity from operator input.
fn parse_quantity(input: &str) -> Result<i64, String> {
    let quantity: i64 = input
        .trim()
        .parse()
        .map_err(|_| "Invalid input. Please enter numbers only.".to_string())?;
    validate_purchase_quantity(quantity).map_err(|e| e.to_string())?;
    Ok(quantity)
}

/// Pre-check: does the product's stock allow this quantity?
///
/// Non-stocked products always do; the per-order cap of limited products
/// is left to `Product::buy` so the error message stays authoritative.
fn stock_allows(product: &Product, quantity: i64) -> bool {
    match product.kind() {
        ProductKind::NonStocked => true,
        _ => quantity <= product.quantity(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
