//! File logging example
//!
//! Demonstrates logging to the console and a file simultaneously.
//!
//! Run with: cargo run --example file_logging

use status_messenger::prelude::*;

fn main() -> Result<()> {
    println!("=== Status Messenger - File Logging Example ===\n");

    // Console lines without timestamps, file lines always timestamped
    let messenger = Messenger::with_file("application.log", false)?;

    println!("1. Logging to both console and file:");

    messenger.info("Application started")?;
    messenger.sub_info("Loading configuration...")?;
    messenger.good("Configuration loaded successfully")?;
    messenger.warn("Using default settings for some options")?;
    messenger.err("Failed to load optional plugin")?;

    println!("\n2. Performing some operations:");

    for i in 1..=5 {
        messenger.info(format!("Processing item {}/5", i))?;
        if i == 3 {
            messenger.warn("Item 3 took longer than expected")?;
        }
    }

    messenger.good("All operations completed")?;

    messenger.close()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the plain-text log output");

    Ok(())
}
