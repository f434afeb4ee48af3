//! # Status Messenger
//!
//! Leveled, colorized status messages for command-line tools, with optional
//! timestamps and pluggable handlers for mirroring output to files or other
//! sinks.
//!
//! ## Features
//!
//! - **Consistent prefixes**: `[+]`, `[*]`, `[!]`, ... colored per category
//! - **Pluggable handlers**: message, close and preprocessing hooks
//! - **Thread safe**: log from many threads while handlers are registered
//! - **File mirroring**: plain-text, timestamped copy of every message
//!
//! ```
//! use status_messenger::prelude::*;
//!
//! let messenger = Messenger::with_timestamp(true);
//! messenger.info("starting").unwrap();
//! messenger.sub_info("loading config").unwrap();
//! messenger.good("ready").unwrap();
//! ```

pub mod core;
pub mod global;
pub mod handlers;
pub mod macros;

/// Package version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod prelude {
    #[cfg(feature = "file")]
    pub use crate::handlers::FileSink;
    pub use crate::handlers::JsonPreprocessor;
    pub use crate::core::{
        Category, Clock, CloseHandler, FixedClock, HandlerKind, LoggerError, Message,
        MessageHandler, Messenger, MessengerBuilder, MessengerMetrics, PrefixTable, Preprocessor,
        Result, SystemClock,
    };
}

#[cfg(feature = "file")]
pub use crate::handlers::{new_file_messenger, FileSink};
pub use crate::handlers::JsonPreprocessor;
pub use crate::core::{
    Category, Clock, CloseHandler, Console, FixedClock, HandlerKind, LoggerError, Message,
    MessageHandler, Messenger, MessengerBuilder, MessengerMetrics, PrefixTable, Preprocessor,
    Result, SystemClock, DEFAULT_PREFIXES,
};
