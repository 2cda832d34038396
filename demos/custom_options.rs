//! Customizing output with FormatOptions.
//!
//! Run with: cargo run --example custom_options

use std::collections::HashMap;
use std::error::Error;
use tinyfmt::{args, concat_with_options, format, format_with_options, FormatOptions, KeyOrder};

fn main() -> Result<(), Box<dyn Error>> {
    let mut scores = HashMap::new();
    scores.insert("zoe", 3);
    scores.insert("adam", 9);
    scores.insert("mia", 5);

    println!("Sorted keys (default):");
    println!("{}\n", format("%v", &args![scores.clone()])?);

    println!("Source order:");
    let insertion = FormatOptions::new().with_key_order(KeyOrder::Insertion);
    println!("{}\n", format_with_options("%v", &args![scores], &insertion)?);

    println!("Fixed float precision:");
    let fixed = FormatOptions::new().with_default_precision(15);
    println!("{}", concat_with_options(&args!["pi ~ ", 3.14159], &fixed));

    Ok(())
}
