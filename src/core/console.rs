//! Console output for the messenger

use parking_lot::Mutex;
use std::io::Write;

/// Where a messenger prints its lines when console output is enabled
#[derive(Default)]
pub enum Console {
    /// Process standard output
    #[default]
    Stdout,
    /// Caller-supplied writer, e.g. an in-memory buffer or stderr
    Writer(Mutex<Box<dyn Write + Send>>),
}

impl Console {
    pub fn writer(writer: impl Write + Send + 'static) -> Self {
        Console::Writer(Mutex::new(Box::new(writer)))
    }

    /// Write one line; each call produces exactly one line of output
    pub fn write_line(&self, line: &str) -> std::io::Result<()> {
        match self {
            Console::Stdout => {
                let mut out = std::io::stdout().lock();
                writeln!(out, "{}", line)?;
                out.flush()
            }
            Console::Writer(writer) => {
                let mut writer = writer.lock();
                writeln!(writer, "{}", line)?;
                writer.flush()
            }
        }
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Console::Stdout => write!(f, "Console::Stdout"),
            Console::Writer(_) => write!(f, "Console::Writer"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writer_gets_one_line_per_call() {
        let buffer = SharedBuffer::default();
        let console = Console::writer(buffer.clone());

        console.write_line("first").expect("write succeeds");
        console.write_line("second").expect("write succeeds");

        let output = String::from_utf8(buffer.0.lock().clone()).expect("utf8");
        assert_eq!(output, "first\nsecond\n");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn test_write_failure_is_returned() {
        let console = Console::writer(BrokenPipe);
        let err = console.write_line("lost").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
    }
}
