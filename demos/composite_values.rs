//! Rendering structs, sequences and maps with `%v`.
//!
//! Run with: cargo run --example composite_values

use serde::Serialize;
use std::collections::HashMap;
use std::error::Error;
use tinyfmt::{args, format, to_value, Value};

#[derive(Serialize)]
struct Order {
    id: u32,
    customer: String,
    items: Vec<Item>,
    express: bool,
}

#[derive(Serialize)]
struct Item {
    sku: String,
    quantity: u32,
}

fn main() -> Result<(), Box<dyn Error>> {
    let order = Order {
        id: 1001,
        customer: "Alice".to_string(),
        items: vec![
            Item {
                sku: "WIDGET-1".to_string(),
                quantity: 2,
            },
            Item {
                sku: "GADGET-9".to_string(),
                quantity: 1,
            },
        ],
        express: false,
    };
    println!("{}", format("order: %v", &args![order])?);

    let mut stock = HashMap::new();
    stock.insert("WIDGET-1", 40);
    stock.insert("GADGET-9", 3);
    println!("{}", format("stock: %v", &args![stock])?);

    // Values can also be built by hand.
    let value: Value = vec![Value::from(1), Value::from("two"), Value::Null].into();
    println!("manual: {}", value);

    let converted = to_value(&(1, "pair"))?;
    println!("tuple: {}", converted);

    Ok(())
}
