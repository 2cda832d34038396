//! Basic template formatting.
//!
//! Run with: cargo run --example simple

use std::error::Error;
use tinyfmt::{args, format};

fn main() -> Result<(), Box<dyn Error>> {
    let line = format(
        "%s scored %d points (%.1f%% of max, flags %b)",
        &args!["Alice", 42, 84.0, 5],
    )?;
    println!("{}", line);

    // Type mismatches are reported, never coerced.
    match format("Total: %d", &args!["forty-two"]) {
        Ok(out) => println!("unexpected: {}", out),
        Err(err) => println!("error: {}", err),
    }

    Ok(())
}
