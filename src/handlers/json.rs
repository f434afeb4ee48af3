//! JSON preprocessor
//!
//! Rewrites each message into a single-line JSON object (JSONL), so console
//! and file output can be fed to log aggregation tools.

use crate::core::{Category, Message, Preprocessor, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonLine<'a> {
    timestamp: &'a str,
    category: String,
    message: &'a str,
}

/// Preprocessor that replaces the message text with a JSON object
///
/// By default the category is switched to [`Category::Msg`] so no prefix is
/// prepended to the JSON. The original category is kept inside the object.
///
/// # Example
///
/// ```
/// use status_messenger::handlers::JsonPreprocessor;
/// use status_messenger::Messenger;
///
/// let messenger = Messenger::new();
/// messenger.set_preprocessor(JsonPreprocessor::new());
/// messenger.info("ready").unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonPreprocessor {
    keep_prefix: bool,
}

impl JsonPreprocessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the category prefix in front of the JSON text
    #[must_use]
    pub fn keep_prefix(mut self, keep: bool) -> Self {
        self.keep_prefix = keep;
        self
    }

    fn to_json(&self, message: &Message) -> Result<String> {
        let line = JsonLine {
            timestamp: message.timestamp(),
            category: message.category().to_string(),
            message: message.raw(),
        };
        Ok(serde_json::to_string(&line)?)
    }
}

impl Preprocessor for JsonPreprocessor {
    fn preprocess(&self, message: &mut Message) {
        match self.to_json(message) {
            Ok(json) => {
                message.set_raw(json);
                if !self.keep_prefix {
                    message.set_category(Category::Msg);
                }
            }
            Err(e) => eprintln!("[MESSENGER ERROR] JSON preprocessing failed: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FixedClock, Messenger};

    fn messenger() -> Messenger {
        Messenger::builder()
            .stdout(false)
            .clock(FixedClock::parse("2025-01-08T10:30:45Z").expect("valid timestamp"))
            .build()
    }

    #[test]
    fn test_rewrites_to_json() -> Result<()> {
        let mut message = messenger().new_message(Category::Warn, "disk \"almost\" full");
        JsonPreprocessor::new().preprocess(&mut message);

        assert_eq!(message.category(), Category::Msg);
        assert_eq!(message.preprocessed(), "disk \"almost\" full");

        let parsed: serde_json::Value = serde_json::from_str(message.raw())?;
        assert_eq!(parsed["timestamp"], "2025-01-08T10:30:45Z");
        assert_eq!(parsed["category"], "WARN");
        assert_eq!(parsed["message"], "disk \"almost\" full");
        Ok(())
    }

    #[test]
    fn test_dispatched_text_is_json() -> Result<()> {
        use parking_lot::Mutex;
        use std::sync::Arc;

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let messenger = messenger();
        messenger.set_preprocessor(JsonPreprocessor::new());
        messenger.add_message_handler(move |msg: &Message| -> Result<()> {
            sink.lock().push(msg.text().to_string());
            Ok(())
        });

        messenger.good("deployed")?;

        let seen = seen.lock();
        assert_eq!(seen.len(), 1);
        let parsed: serde_json::Value = serde_json::from_str(&seen[0])?;
        assert_eq!(parsed["category"], "GOOD");
        Ok(())
    }

    #[test]
    fn test_keep_prefix() {
        let mut message = messenger().new_message(Category::Info, "x");
        JsonPreprocessor::new()
            .keep_prefix(true)
            .preprocess(&mut message);
        assert_eq!(message.category(), Category::Info);
    }
}
