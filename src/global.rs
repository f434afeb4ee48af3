//! Process-wide default messenger
//!
//! Thin free-function wrappers around one lazily created [`Messenger`]
//! (console output only, no timestamps). Programs that need handlers or a
//! log file should construct their own messenger instead.

use crate::core::{Message, Messenger, Result};
use std::sync::OnceLock;

static DEFAULT: OnceLock<Messenger> = OnceLock::new();

/// The default messenger, created on first use
pub fn messenger() -> &'static Messenger {
    DEFAULT.get_or_init(Messenger::new)
}

pub fn log(message: Message) -> Result<()> {
    messenger().log(message)
}

pub fn debug(message: impl Into<String>) -> Result<()> {
    messenger().debug(message)
}

pub fn err(message: impl Into<String>) -> Result<()> {
    messenger().err(message)
}

/// Log an error and exit the process with `code`
pub fn err_x(code: i32, message: impl Into<String>) -> ! {
    messenger().err_x(code, message)
}

pub fn good(message: impl Into<String>) -> Result<()> {
    messenger().good(message)
}

pub fn info(message: impl Into<String>) -> Result<()> {
    messenger().info(message)
}

pub fn msg(message: impl Into<String>) -> Result<()> {
    messenger().msg(message)
}

pub fn sub_info(message: impl Into<String>) -> Result<()> {
    messenger().sub_info(message)
}

pub fn warn(message: impl Into<String>) -> Result<()> {
    messenger().warn(message)
}

/// Enable or disable color codes process-wide
pub fn set_color(enabled: bool) {
    messenger().set_color(enabled);
}

/// Prepend timestamps to the default messenger's console lines
pub fn set_timestamp(enabled: bool) {
    messenger().set_timestamp(enabled);
}
