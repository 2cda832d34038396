//! Inline arguments with the formatting macros.
//!
//! Run with: cargo run --example macro

use std::error::Error;
use tinyfmt::{errorf, printf, sprint, sprintf};

fn main() -> Result<(), Box<dyn Error>> {
    let greeting = sprintf!("Hello, %s! You have %d new messages.", "Bob", 3)?;
    println!("{}", greeting);

    println!("{}", sprint!("id=", 7, " active=", true));

    printf!("Hex: %x, Octal: %o\n", 255, 64)?;

    let err = errorf!("user %s not found", "carol");
    println!("error value: {}", err);

    Ok(())
}
