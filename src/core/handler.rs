//! Handler traits for message dispatch, shutdown and preprocessing

use super::{error::Result, message::Message};

/// Called with every message the messenger dispatches
///
/// Closures of the form `Fn(&Message) -> Result<()>` are handlers too.
///
/// # Examples
///
/// ```
/// use status_messenger::{Message, Messenger, Result};
///
/// let messenger = Messenger::new();
/// messenger.add_message_handler(|msg: &Message| -> Result<()> {
///     assert!(!msg.raw().is_empty());
///     Ok(())
/// });
/// ```
pub trait MessageHandler: Send + Sync {
    fn handle(&self, message: &Message) -> Result<()>;

    fn name(&self) -> &str {
        "closure"
    }
}

/// Called once per handler when the messenger is closed
pub trait CloseHandler: Send + Sync {
    fn close(&self) -> Result<()>;

    fn name(&self) -> &str {
        "closure"
    }
}

/// Runs before rendering and dispatch; may rewrite or discard the message
pub trait Preprocessor: Send + Sync {
    fn preprocess(&self, message: &mut Message);
}

impl<F> MessageHandler for F
where
    F: Fn(&Message) -> Result<()> + Send + Sync,
{
    fn handle(&self, message: &Message) -> Result<()> {
        self(message)
    }
}

impl<F> CloseHandler for F
where
    F: Fn() -> Result<()> + Send + Sync,
{
    fn close(&self) -> Result<()> {
        self()
    }
}

impl<F> Preprocessor for F
where
    F: Fn(&mut Message) + Send + Sync,
{
    fn preprocess(&self, message: &mut Message) {
        self(message)
    }
}
