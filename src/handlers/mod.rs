//! Ready-made handlers and preprocessors

#[cfg(feature = "file")]
pub mod file;
pub mod json;

#[cfg(feature = "file")]
pub use file::{new_file_messenger, FileSink};
pub use json::JsonPreprocessor;

// Re-export traits for convenience
pub use crate::core::{CloseHandler, MessageHandler, Preprocessor};
