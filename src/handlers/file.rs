//! File sink and file-backed messenger

use crate::core::{CloseHandler, LoggerError, Message, MessageHandler, Messenger, Result};
use parking_lot::Mutex;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Log file shared between a message handler and a close handler
///
/// Clones share the same file. Each message becomes one plain-text line:
/// timestamp, `": "`, then the rendered text with color codes removed.
/// After [`close_file`](Self::close_file) further writes are silently dropped
/// and closing again does nothing.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: Arc<PathBuf>,
    file: Arc<Mutex<Option<File>>>,
}

impl FileSink {
    /// Create (or truncate) the file at `path`
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(LoggerError::MissingFilename);
        }

        let file = File::create(path)
            .map_err(|e| LoggerError::file_create(path.display().to_string(), e))?;

        Ok(Self {
            path: Arc::new(path.to_path_buf()),
            file: Arc::new(Mutex::new(Some(file))),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_closed(&self) -> bool {
        self.file.lock().is_none()
    }

    pub fn write_message(&self, message: &Message) -> Result<()> {
        let mut file = self.file.lock();
        if let Some(file) = file.as_mut() {
            writeln!(file, "{}", message.plain_string()).map_err(|e| {
                LoggerError::io_operation(
                    "writing log file",
                    format!("failed to write msg to {}", self.path.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }

    pub fn close_file(&self) -> Result<()> {
        let mut file = self.file.lock();
        if let Some(mut file) = file.take() {
            file.flush().map_err(|e| {
                LoggerError::io_operation(
                    "closing log file",
                    format!("failed to close {}", self.path.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

impl MessageHandler for FileSink {
    fn handle(&self, message: &Message) -> Result<()> {
        self.write_message(message)
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl CloseHandler for FileSink {
    fn close(&self) -> Result<()> {
        self.close_file()
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Messenger {
    /// Messenger that prints to the console and mirrors every message to `path`
    ///
    /// The file always carries timestamps; `timestamp` only controls the
    /// console. The file's message and close handlers replace any others.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use status_messenger::Messenger;
    ///
    /// let messenger = Messenger::with_file("/tmp/app.log", false).unwrap();
    /// messenger.info("hello").unwrap();
    /// messenger.close().unwrap();
    /// ```
    pub fn with_file(path: impl AsRef<Path>, timestamp: bool) -> Result<Messenger> {
        let sink = FileSink::create(path)?;
        let messenger = Messenger::with_timestamp(timestamp);
        messenger.set_close_handler(sink.clone());
        messenger.set_message_handler(sink);
        Ok(messenger)
    }
}

/// Free-function form of [`Messenger::with_file`]
pub fn new_file_messenger(path: impl AsRef<Path>, timestamp: bool) -> Result<Messenger> {
    Messenger::with_file(path, timestamp)
}
