// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with: cargo run --example basic_usage --features logging

use locale_numeric_editor::prelude::*;
use std::sync::Arc;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Locale Numeric Editor Example ===\n");

    // One owner for every numeric field on the form step
    let form = Arc::new(FormValues::new());

    let mut investment = NumberField::new(
        NumericValue::new(1_250_000.0).unwrap(),
        EditorConfig::nordic_currency(),
        form.clone(),
    );
    let mut headcount = NumberField::new(
        NumericValue::ABSENT,
        EditorConfig::nordic_integer(),
        form.clone(),
    );
    let mut growth = NumberField::new(
        NumericValue::new(4.25).unwrap(),
        EditorConfig::nordic_percent(),
        form.clone(),
    );

    form.register("investment", &investment);
    form.register("headcount", &headcount);
    form.register("growth_pct", &growth);

    println!("Initial display:");
    println!("  investment: {:?}", investment.text());
    println!("  headcount:  {:?}", headcount.text());
    println!("  growth:     {:?}", growth.text());

    // User edits the investment field keystroke by keystroke
    println!("\nEditing investment...");
    investment.on_focus();
    println!("  focused, raw text {:?}", investment.text());
    for text in ["1250000", "125000", "1500000", "1500000,", "1500000,7"] {
        investment.on_change(text);
        println!(
            "  typed {:?}, owner sees {:?}",
            investment.text(),
            form.get("investment").get()
        );
    }
    investment.on_blur("1500000,7");
    println!("  blurred, display {:?}", investment.text());

    // Garbage collapses to an empty display
    println!("\nEditing headcount...");
    headcount.on_focus();
    headcount.on_change("about forty");
    headcount.on_blur("about forty");
    println!("  blurred, display {:?}", headcount.text());
    headcount.on_focus();
    headcount.on_change("42");
    headcount.on_blur("42");
    println!("  blurred, display {:?}", headcount.text());

    // The owner recalculates while the user is typing elsewhere
    println!("\nSyncing growth while it is being edited...");
    growth.on_focus();
    growth.on_change("5,");
    growth.sync_value(NumericValue::new(6.0).unwrap());
    println!("  still shows {:?}", growth.text());
    growth.on_blur("5,");
    println!("  blurred, display {:?}", growth.text());

    println!("\n=== Form Values ===");
    for (name, value) in form.snapshot() {
        println!("  {:<12} {:?}", name, value.get());
    }
}
