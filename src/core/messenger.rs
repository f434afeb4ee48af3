//! Messenger: renders status messages and dispatches them to handlers

use super::{
    category::Category,
    clock::{Clock, SystemClock},
    console::Console,
    error::{HandlerKind, LoggerError, Result},
    handler::{CloseHandler, MessageHandler, Preprocessor},
    message::Message,
    metrics::MessengerMetrics,
    prefix_table::PrefixTable,
};
use parking_lot::RwLock;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Everything guarded by the handler lock
#[derive(Default)]
struct Handlers {
    message: Vec<Box<dyn MessageHandler>>,
    close: Vec<Box<dyn CloseHandler>>,
    preprocessor: Option<Box<dyn Preprocessor>>,
}

/// Logs to the console and to any number of registered handlers
///
/// Every log call builds a [`Message`], runs the optional preprocessor,
/// prints the message (with an RFC 3339 timestamp when enabled) and then
/// calls each message handler in registration order. The first handler
/// error stops dispatch and is returned.
///
/// All methods take `&self`; share a messenger between threads with `Arc`.
/// Log calls run in parallel with each other and are serialized only
/// against handler registration. Handlers must not register handlers on
/// the messenger that is calling them.
///
/// # Example
///
/// ```
/// use status_messenger::{Message, Messenger, Result};
///
/// let messenger = Messenger::new();
/// messenger.add_message_handler(|msg: &Message| -> Result<()> {
///     // forward to a socket, a database, ...
///     let _ = msg.plain_string();
///     Ok(())
/// });
///
/// messenger.info("starting").unwrap();
/// messenger.good("done").unwrap();
/// messenger.close().unwrap();
/// ```
pub struct Messenger {
    handlers: RwLock<Handlers>,
    prefixes: RwLock<PrefixTable>,
    clock: Arc<dyn Clock>,
    console: Console,
    stdout: AtomicBool,
    timestamp: AtomicBool,
    metrics: MessengerMetrics,
}

impl Messenger {
    /// Console output on, timestamps off
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    #[must_use]
    pub fn with_timestamp(timestamp: bool) -> Self {
        Self::builder().timestamp(timestamp).build()
    }

    #[must_use]
    pub fn builder() -> MessengerBuilder {
        MessengerBuilder::new()
    }

    /// Build a message for `category` with this messenger's prefixes and clock
    pub fn new_message(&self, category: Category, message: impl Into<String>) -> Message {
        Message::build(category, message, &self.prefixes.read(), self.clock.as_ref())
    }

    /// Dispatch a message
    ///
    /// A message discarded by the preprocessor is dropped silently and
    /// `Ok(())` is returned. Console output happens before any handler runs,
    /// so a failing handler never hides it.
    pub fn log(&self, mut message: Message) -> Result<()> {
        let preprocessed = {
            let handlers = self.handlers.read();
            match handlers.preprocessor.as_ref() {
                Some(preprocessor) => {
                    preprocessor.preprocess(&mut message);
                    true
                }
                None => false,
            }
        };

        if message.is_discarded() {
            self.metrics.record_discarded();
            return Ok(());
        }

        if preprocessed {
            message.render(&self.prefixes.read());
        }

        if self.stdout_enabled() {
            self.print(&message);
        }

        let handlers = self.handlers.read();
        for (idx, handler) in handlers.message.iter().enumerate() {
            if let Err(e) = handler.handle(&message) {
                self.metrics.record_handler_failure();
                return Err(LoggerError::handler_failed(
                    HandlerKind::Message,
                    idx,
                    handler.name(),
                    e,
                ));
            }
        }

        self.metrics.record_logged();
        Ok(())
    }

    /// Build and dispatch a message of the given category
    pub fn log_as(&self, category: Category, message: impl Into<String>) -> Result<()> {
        self.log(self.new_message(category, message))
    }

    pub fn debug(&self, message: impl Into<String>) -> Result<()> {
        self.log_as(Category::Debug, message)
    }

    pub fn err(&self, message: impl Into<String>) -> Result<()> {
        self.log_as(Category::Err, message)
    }

    /// Log an error and terminate the process with `code`
    ///
    /// If dispatch fails, the failure is printed as an error message before
    /// exiting, so the process always exits.
    pub fn err_x(&self, code: i32, message: impl Into<String>) -> ! {
        if let Err(_reported) = self.log_terminal(message) {
            // log_terminal already printed the failure
        }
        std::process::exit(code)
    }

    pub fn good(&self, message: impl Into<String>) -> Result<()> {
        self.log_as(Category::Good, message)
    }

    pub fn info(&self, message: impl Into<String>) -> Result<()> {
        self.log_as(Category::Info, message)
    }

    /// Log a message as is, without prefix
    pub fn msg(&self, message: impl Into<String>) -> Result<()> {
        self.log_as(Category::Msg, message)
    }

    pub fn sub_info(&self, message: impl Into<String>) -> Result<()> {
        self.log_as(Category::SubInfo, message)
    }

    pub fn warn(&self, message: impl Into<String>) -> Result<()> {
        self.log_as(Category::Warn, message)
    }

    /// Logging half of [`err_x`](Self::err_x); returns the dispatch error, if any,
    /// after printing it
    fn log_terminal(&self, message: impl Into<String>) -> Result<()> {
        let result = self.log_as(Category::ErrX, message);
        if let Err(ref e) = result {
            // The handlers just failed, report straight to the console
            self.print(&self.new_message(Category::Err, e.to_string()));
        }
        result
    }

    /// Call every close handler in registration order
    ///
    /// Stops at the first failing handler. Closing twice is safe when the
    /// handlers are idempotent, as the file sink is.
    pub fn close(&self) -> Result<()> {
        let handlers = self.handlers.read();
        for (idx, handler) in handlers.close.iter().enumerate() {
            handler.close().map_err(|e| {
                LoggerError::handler_failed(HandlerKind::Close, idx, handler.name(), e)
            })?;
        }
        Ok(())
    }

    pub fn add_message_handler<H: MessageHandler + 'static>(&self, handler: H) {
        let mut handlers = self.handlers.write();
        handlers.message.push(Box::new(handler));
    }

    /// Replace all message handlers with `handler`
    pub fn set_message_handler<H: MessageHandler + 'static>(&self, handler: H) {
        let mut handlers = self.handlers.write();
        handlers.message = vec![Box::new(handler)];
    }

    pub fn add_close_handler<H: CloseHandler + 'static>(&self, handler: H) {
        let mut handlers = self.handlers.write();
        handlers.close.push(Box::new(handler));
    }

    /// Replace all close handlers with `handler`
    pub fn set_close_handler<H: CloseHandler + 'static>(&self, handler: H) {
        let mut handlers = self.handlers.write();
        handlers.close = vec![Box::new(handler)];
    }

    pub fn set_preprocessor<P: Preprocessor + 'static>(&self, preprocessor: P) {
        let mut handlers = self.handlers.write();
        handlers.preprocessor = Some(Box::new(preprocessor));
    }

    pub fn clear_preprocessor(&self) {
        self.handlers.write().preprocessor = None;
    }

    pub fn message_handler_count(&self) -> usize {
        self.handlers.read().message.len()
    }

    pub fn close_handler_count(&self) -> usize {
        self.handlers.read().close.len()
    }

    pub fn has_preprocessor(&self) -> bool {
        self.handlers.read().preprocessor.is_some()
    }

    /// Current prefix for `category`
    pub fn prefix(&self, category: Category) -> String {
        self.prefixes.read().get(category).to_string()
    }

    pub fn set_prefix(&self, category: Category, prefix: impl Into<String>) {
        self.prefixes.write().set(category, prefix);
    }

    pub fn set_prefixes(&self, prefixes: PrefixTable) {
        *self.prefixes.write() = prefixes;
    }

    /// Restore the built-in prefix table
    pub fn reset_prefixes(&self) {
        self.prefixes.write().reset();
    }

    pub fn stdout_enabled(&self) -> bool {
        self.stdout.load(Ordering::Relaxed)
    }

    pub fn set_stdout(&self, enabled: bool) {
        self.stdout.store(enabled, Ordering::Relaxed);
    }

    pub fn timestamp_enabled(&self) -> bool {
        self.timestamp.load(Ordering::Relaxed)
    }

    pub fn set_timestamp(&self, enabled: bool) {
        self.timestamp.store(enabled, Ordering::Relaxed);
    }

    /// Enable or disable color codes for every messenger in the process
    pub fn set_color(&self, enabled: bool) {
        colored::control::set_override(enabled);
    }

    pub fn metrics(&self) -> &MessengerMetrics {
        &self.metrics
    }

    fn print(&self, message: &Message) {
        let line = if self.timestamp_enabled() {
            message.to_string()
        } else {
            message.text().to_string()
        };

        if let Err(e) = self.console.write_line(&line) {
            eprintln!("[MESSENGER ERROR] Console write failed: {}", e);
        }
    }
}

impl Default for Messenger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Messenger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Messenger")
            .field("stdout", &self.stdout_enabled())
            .field("timestamp", &self.timestamp_enabled())
            .field("message_handlers", &self.message_handler_count())
            .field("close_handlers", &self.close_handler_count())
            .field("preprocessor", &self.has_preprocessor())
            .field("console", &self.console)
            .finish()
    }
}

/// Builder for [`Messenger`]
///
/// # Example
///
/// ```
/// use status_messenger::{Category, Messenger, PrefixTable};
///
/// let mut prefixes = PrefixTable::default();
/// prefixes.set(Category::Info, "(i)");
///
/// let messenger = Messenger::builder()
///     .timestamp(true)
///     .prefixes(prefixes)
///     .build();
/// assert_eq!(messenger.prefix(Category::Info), "(i)");
/// ```
pub struct MessengerBuilder {
    stdout: bool,
    timestamp: bool,
    clock: Arc<dyn Clock>,
    console: Console,
    prefixes: PrefixTable,
    handlers: Handlers,
}

impl MessengerBuilder {
    pub fn new() -> Self {
        Self {
            stdout: true,
            timestamp: false,
            clock: Arc::new(SystemClock),
            console: Console::Stdout,
            prefixes: PrefixTable::default(),
            handlers: Handlers::default(),
        }
    }

    /// Prepend an RFC 3339 timestamp to console lines
    #[must_use]
    pub fn timestamp(mut self, enabled: bool) -> Self {
        self.timestamp = enabled;
        self
    }

    /// Enable or disable console output (on by default)
    #[must_use]
    pub fn stdout(mut self, enabled: bool) -> Self {
        self.stdout = enabled;
        self
    }

    #[must_use]
    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Print console lines to `writer` instead of standard output
    #[must_use]
    pub fn console_writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.console = Console::writer(writer);
        self
    }

    #[must_use]
    pub fn prefixes(mut self, prefixes: PrefixTable) -> Self {
        self.prefixes = prefixes;
        self
    }

    #[must_use]
    pub fn message_handler<H: MessageHandler + 'static>(mut self, handler: H) -> Self {
        self.handlers.message.push(Box::new(handler));
        self
    }

    #[must_use]
    pub fn close_handler<H: CloseHandler + 'static>(mut self, handler: H) -> Self {
        self.handlers.close.push(Box::new(handler));
        self
    }

    #[must_use]
    pub fn preprocessor<P: Preprocessor + 'static>(mut self, preprocessor: P) -> Self {
        self.handlers.preprocessor = Some(Box::new(preprocessor));
        self
    }

    pub fn build(self) -> Messenger {
        Messenger {
            handlers: RwLock::new(self.handlers),
            prefixes: RwLock::new(self.prefixes),
            clock: self.clock,
            console: self.console,
            stdout: AtomicBool::new(self.stdout),
            timestamp: AtomicBool::new(self.timestamp),
            metrics: MessengerMetrics::new(),
        }
    }
}

impl Default for MessengerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
