//! Preprocessing example
//!
//! Demonstrates custom handlers, redaction, discarding and JSON output.
//!
//! Run with: cargo run --example preprocessing

use status_messenger::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Status Messenger - Preprocessing Example ===\n");

    let messenger = Messenger::new();
    let forwarded = Arc::new(AtomicUsize::new(0));

    {
        let forwarded = Arc::clone(&forwarded);
        messenger.add_message_handler(move |_: &Message| -> Result<()> {
            forwarded.fetch_add(1, Ordering::Relaxed);
            Ok(())
        });
    }

    println!("1. Redacting secrets and dropping debug noise:");
    messenger.set_preprocessor(|msg: &mut Message| {
        if msg.category() == Category::Debug {
            msg.discard();
            return;
        }
        let redacted = msg.raw().replace("s3cr3t", "******");
        msg.set_raw(redacted);
    });

    messenger.info("Connecting with token s3cr3t")?;
    messenger.debug("This never shows up")?;
    messenger.good("Connected")?;

    println!("\n2. JSON lines:");
    messenger.set_preprocessor(JsonPreprocessor::new());
    messenger.info("Deploy started")?;
    messenger.warn("Replica 2 slow to start")?;

    messenger.clear_preprocessor();

    println!(
        "\n{} messages forwarded, {} discarded",
        forwarded.load(Ordering::Relaxed),
        messenger.metrics().discarded_count()
    );
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
