//! The console logging destination.

use std::io::{Result, Write};
use std::sync::Mutex;

use super::{Destination, Severity, SeverityRange};

/// A [`Destination`] that writes records to an output sink.
///
/// The sink defaults to standard output and can be swapped out, e.g. for
/// standard error or a capture buffer in tests. Every record becomes one
/// line:
///
/// ```text
/// [<Title>] <message>
/// ```
///
/// where `<Title>` is the severity's [`title`](Severity::title). The
/// error-only form reads `[<Title>] caught exception: <detail>`, and the
/// message-plus-error form `[<Title>] <message> with caught exception
/// <detail>`. These strings are a boundary contract: tooling that scrapes
/// the log stream depends on them byte for byte.
///
///
/// # Example
///
/// ```
/// # use std::sync::Arc;
/// # use spiffy::log::{ConsoleDestination, Destination, Severity};
/// let console = ConsoleDestination::new();
/// console.log_message(Severity::Info, "second message")?;
/// // Prints "[Info] second message" to standard output.
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct ConsoleDestination {
    range: SeverityRange,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleDestination {
    /// Create a destination writing to standard output.
    pub fn new() -> Self {
        Self::with_writer(Box::new(std::io::stdout()))
    }

    /// Create a destination writing to the given sink.
    pub fn with_writer(writer: Box<dyn Write + Send>) -> Self {
        Self {
            range: SeverityRange::all(),
            writer: Mutex::new(writer),
        }
    }

    /// Replace the output sink.
    pub fn set_writer(&self, writer: Box<dyn Write + Send>) {
        *self.writer.lock().expect("mutex is not poisoned") = writer;
    }

    /// Write one record line and flush the sink.
    fn write_record(&self, record: core::fmt::Arguments<'_>) -> Result<()> {
        let mut writer = self.writer.lock().expect("mutex is not poisoned");
        writer.write_fmt(record)?;
        writer.flush()
    }
}

impl Default for ConsoleDestination {
    fn default() -> Self {
        Self::new()
    }
}

impl Destination for ConsoleDestination {
    fn log_message(&self, severity: Severity, message: &str) -> Result<()> {
        self.write_record(format_args!("[{}] {}\n", severity.title(), message))
    }

    fn log_error(&self, severity: Severity, error: &str) -> Result<()> {
        self.write_record(format_args!(
            "[{}] caught exception: {}\n",
            severity.title(),
            error
        ))
    }

    fn log_message_with_error(
        &self,
        severity: Severity,
        message: &str,
        error: &str,
    ) -> Result<()> {
        self.write_record(format_args!(
            "[{}] {} with caught exception {}\n",
            severity.title(),
            message,
            error
        ))
    }

    fn min_severity(&self) -> Severity {
        self.range.min()
    }

    fn max_severity(&self) -> Severity {
        self.range.max()
    }

    fn set_min_severity(&self, severity: Severity) {
        self.range.set_min(severity);
    }

    fn set_max_severity(&self, severity: Severity) {
        self.range.set_max(severity);
    }
}

// ===========================================================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::log::Logger;
    use std::sync::Arc;

    /// A cloneable sink capturing everything written to it.
    #[derive(Clone, Debug, Default)]
    struct SharedSink(Arc<Mutex<Vec<u8>>>);

    impl SharedSink {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().expect("mutex is not poisoned")).into_owned()
        }
    }

    impl Write for SharedSink {
        fn write(&mut self, buf: &[u8]) -> Result<usize> {
            self.0
                .lock()
                .expect("mutex is not poisoned")
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }
    }

    fn captured() -> (ConsoleDestination, SharedSink) {
        let sink = SharedSink::default();
        let console = ConsoleDestination::with_writer(Box::new(sink.clone()));
        (console, sink)
    }

    #[test]
    fn test_message_format() -> Result<()> {
        let (console, sink) = captured();

        console.log_message(Severity::Info, "second message")?;
        assert_eq!(sink.contents(), "[Info] second message\n");

        for severity in Severity::all() {
            let (console, sink) = captured();
            console.log_message(severity, "this is a message")?;
            assert_eq!(
                sink.contents(),
                format!("[{}] this is a message\n", severity.title())
            );
        }
        Ok(())
    }

    #[test]
    fn test_error_formats() -> Result<()> {
        let (console, sink) = captured();
        console.log_error(Severity::Debug, "this is an exception")?;
        assert_eq!(
            sink.contents(),
            "[Debug] caught exception: this is an exception\n"
        );

        let (console, sink) = captured();
        console.log_message_with_error(
            Severity::Warning,
            "this is a warning",
            "this is an exception",
        )?;
        assert_eq!(
            sink.contents(),
            "[Warning] this is a warning with caught exception this is an exception\n"
        );
        Ok(())
    }

    #[test]
    fn test_unclassified_title() -> Result<()> {
        let (console, sink) = captured();
        console.log_message(Severity::from(9_u8), "unclassified message")?;
        assert_eq!(sink.contents(), "[Unclassified] unclassified message\n");
        Ok(())
    }

    #[test]
    fn test_set_writer_swaps_the_sink() -> Result<()> {
        let (console, before) = captured();
        console.log_message(Severity::Info, "one")?;

        let after = SharedSink::default();
        console.set_writer(Box::new(after.clone()));
        console.log_message(Severity::Info, "two")?;

        assert_eq!(before.contents(), "[Info] one\n");
        assert_eq!(after.contents(), "[Info] two\n");
        Ok(())
    }

    #[test]
    fn test_through_the_logger() -> Result<()> {
        let sink = SharedSink::default();
        let console = Arc::new(ConsoleDestination::with_writer(Box::new(sink.clone())));
        console.set_min_severity(Severity::Warning);

        let logger = Logger::new();
        logger.add_destination(console);
        logger.log_info("filtered")?;
        logger.log_error("delivered")?;
        logger.log_wtf(crate::log::Payload::message_error(
            "imploding",
            &std::io::Error::other("boom"),
        ))?;

        assert_eq!(
            sink.contents(),
            "[Error] delivered\n[Wtf] imploding with caught exception boom\n"
        );
        Ok(())
    }
}
