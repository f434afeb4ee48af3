//! Basic usage example
//!
//! Demonstrates every message category, timestamps and prefix customization.
//!
//! Run with: cargo run --example basic_usage

use status_messenger::prelude::*;
use status_messenger::{info, sub_info};

fn main() -> Result<()> {
    println!("=== Status Messenger - Basic Usage Example ===\n");

    let messenger = Messenger::new();

    println!("1. Every category:");
    messenger.debug("Debug details")?;
    messenger.info("Starting up")?;
    messenger.sub_info("Reading configuration")?;
    messenger.good("Configuration loaded")?;
    messenger.warn("Using default port")?;
    messenger.err("Optional plugin missing")?;
    messenger.msg("Plain message, no prefix")?;

    println!("\n2. With timestamps:");
    messenger.set_timestamp(true);
    info!(messenger, "Listening on port {}", 8080)?;
    sub_info!(messenger, "{} workers ready", 4)?;
    messenger.set_timestamp(false);

    println!("\n3. Custom prefixes:");
    messenger.set_prefix(Category::Good, "OK");
    messenger.set_prefix(Category::Custom(1), ">>");
    messenger.good("Custom success prefix")?;
    messenger.log_as(Category::Custom(1), "Custom category")?;
    messenger.reset_prefixes();
    messenger.good("Back to the default prefix")?;

    println!("\n4. Without colors:");
    messenger.set_color(false);
    messenger.warn("No color codes here")?;

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
