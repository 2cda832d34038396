//! Writing formatted output to arbitrary sinks.
//!
//! Run with: cargo run --example writers

use std::error::Error;
use std::io::{self, Write};
use tinyfmt::{args, fprintf, printf};

fn main() -> Result<(), Box<dyn Error>> {
    let mut buffer = Vec::new();
    fprintf(&mut buffer, "[%s] %d bytes\n", &args!["buffer", 12])?;
    print!("{}", String::from_utf8(buffer)?);

    let stderr = io::stderr();
    fprintf(stderr.lock(), "warning: %v\n", &args![vec!["disk", "low"]])?;

    printf("done in %.3f s\n", &args![0.0421])?;
    io::stdout().flush()?;

    Ok(())
}
