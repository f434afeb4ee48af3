//! Formatting macros for the messenger.
//!
//! Each macro takes a messenger followed by `format!` arguments and returns
//! the messenger's `Result<()>`.
//!
//! # Examples
//!
//! ```
//! use status_messenger::prelude::*;
//! use status_messenger::{good, info};
//!
//! let messenger = Messenger::new();
//!
//! info!(messenger, "Server started").unwrap();
//!
//! let port = 8080;
//! good!(messenger, "Listening on port {}", port).unwrap();
//! ```

/// Log a message of any category with automatic formatting.
///
/// # Examples
///
/// ```
/// # use status_messenger::prelude::*;
/// # let messenger = Messenger::new();
/// use status_messenger::log;
/// log!(messenger, Category::Info, "Simple message").unwrap();
/// log!(messenger, Category::Custom(7), "Custom code: {}", 7).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($messenger:expr, $category:expr, $($arg:tt)+) => {
        $messenger.log_as($category, format!($($arg)+))
    };
}

/// Log a debug message.
#[macro_export]
macro_rules! debug {
    ($messenger:expr, $($arg:tt)+) => {
        $crate::log!($messenger, $crate::Category::Debug, $($arg)+)
    };
}

/// Log an error message.
///
/// # Examples
///
/// ```
/// # use status_messenger::prelude::*;
/// # let messenger = Messenger::new();
/// use status_messenger::err;
/// err!(messenger, "Error code: {}, message: {}", 500, "Internal error").unwrap();
/// ```
#[macro_export]
macro_rules! err {
    ($messenger:expr, $($arg:tt)+) => {
        $crate::log!($messenger, $crate::Category::Err, $($arg)+)
    };
}

/// Log an error message and exit the process with the given code.
///
/// # Examples
///
/// ```no_run
/// # use status_messenger::prelude::*;
/// # let messenger = Messenger::new();
/// use status_messenger::err_x;
/// err_x!(messenger, 2, "Config file {} not found", "app.toml");
/// ```
#[macro_export]
macro_rules! err_x {
    ($messenger:expr, $code:expr, $($arg:tt)+) => {
        $messenger.err_x($code, format!($($arg)+))
    };
}

/// Log a success message.
#[macro_export]
macro_rules! good {
    ($messenger:expr, $($arg:tt)+) => {
        $crate::log!($messenger, $crate::Category::Good, $($arg)+)
    };
}

/// Log an info message.
#[macro_export]
macro_rules! info {
    ($messenger:expr, $($arg:tt)+) => {
        $crate::log!($messenger, $crate::Category::Info, $($arg)+)
    };
}

/// Log a message as is.
#[macro_export]
macro_rules! msg {
    ($messenger:expr, $($arg:tt)+) => {
        $crate::log!($messenger, $crate::Category::Msg, $($arg)+)
    };
}

/// Log a sub-info message.
#[macro_export]
macro_rules! sub_info {
    ($messenger:expr, $($arg:tt)+) => {
        $crate::log!($messenger, $crate::Category::SubInfo, $($arg)+)
    };
}

/// Log a warning message.
///
/// # Examples
///
/// ```
/// # use status_messenger::prelude::*;
/// # let messenger = Messenger::new();
/// use status_messenger::warn;
/// warn!(messenger, "Retry attempt {} of {}", 3, 5).unwrap();
/// ```
#[macro_export]
macro_rules! warn {
    ($messenger:expr, $($arg:tt)+) => {
        $crate::log!($messenger, $crate::Category::Warn, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Category, Message, Messenger, Result};
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn recording() -> (Messenger, Arc<Mutex<Vec<(Category, String)>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let messenger = Messenger::builder().stdout(false).build();
        messenger.add_message_handler(move |msg: &Message| -> Result<()> {
            sink.lock().push((msg.category(), msg.raw().to_string()));
            Ok(())
        });
        (messenger, seen)
    }

    #[test]
    fn test_log_macro() -> Result<()> {
        let (messenger, seen) = recording();
        log!(messenger, Category::Custom(3), "Formatted: {}", 42)?;
        assert_eq!(
            seen.lock().as_slice(),
            &[(Category::Custom(3), "Formatted: 42".to_string())]
        );
        Ok(())
    }

    #[test]
    fn test_category_macros() -> Result<()> {
        let (messenger, seen) = recording();
        debug!(messenger, "Count: {}", 5)?;
        err!(messenger, "Code: {}", 500)?;
        good!(messenger, "Saved {} files", 2)?;
        info!(messenger, "Items: {}", 100)?;
        msg!(messenger, "plain")?;
        sub_info!(messenger, "step {}", 1)?;
        warn!(messenger, "Retry {} of {}", 1, 3)?;

        let categories: Vec<Category> = seen.lock().iter().map(|(c, _)| *c).collect();
        assert_eq!(
            categories,
            vec![
                Category::Debug,
                Category::Err,
                Category::Good,
                Category::Info,
                Category::Msg,
                Category::SubInfo,
                Category::Warn,
            ]
        );
        assert_eq!(seen.lock()[6].1, "Retry 1 of 3");
        Ok(())
    }
}
