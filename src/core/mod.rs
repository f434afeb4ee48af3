//! Core messenger types and traits

pub mod category;
pub mod clock;
pub mod console;
pub mod error;
pub mod handler;
pub mod message;
pub mod messenger;
pub mod metrics;
pub mod prefix_table;

pub use category::Category;
pub use clock::{format_timestamp, Clock, FixedClock, SystemClock};
pub use console::Console;
pub use error::{HandlerKind, LoggerError, Result};
pub use handler::{CloseHandler, MessageHandler, Preprocessor};
pub use message::Message;
pub use messenger::{Messenger, MessengerBuilder};
pub use metrics::MessengerMetrics;
pub use prefix_table::{PrefixTable, DEFAULT_PREFIXES};
