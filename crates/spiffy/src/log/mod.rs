//! A leveled logging facade with pluggable destinations.
//!
//! The [`Logger`] fans every record out to its registered [`Destination`]s.
//! Each destination carries its own inclusive [`SeverityRange`], so one
//! logger can simultaneously write everything to a file-backed sink and only
//! warnings to the console. Destinations are shared through [`Arc`] and may
//! be attached to several loggers, or to the same logger more than once.
//!
//! A record is a [`Severity`] plus a [`Payload`]: a message, an error, or
//! both. Errors are captured as rendered text when the payload is created,
//! which keeps destinations decoupled from live error values.
//!
//! The facade adds no reliability layer. Delivery is synchronous and in
//! attachment order, and the first destination failure propagates to the
//! caller of [`Logger::log`].
//!
//!
//! # Example
//!
//! ```
//! # use std::sync::Arc;
//! # use spiffy::log::{ConsoleDestination, Destination, Logger, Severity};
//! let logger = Logger::new();
//! let console = Arc::new(ConsoleDestination::new());
//! console.set_min_severity(Severity::Info);
//! logger.add_destination(console);
//!
//! logger.log_info("starting up")?;        // printed
//! logger.log_debug("noisy detail")?;      // filtered out
//! # Ok::<(), std::io::Error>(())
//! ```

mod console;
#[cfg(windows)]
mod dialog;

pub use console::ConsoleDestination;
#[cfg(windows)]
pub use dialog::DialogDestination;

use core::fmt;
use core::iter::successors;
use std::borrow::Cow;
use std::io::Result;
use std::sync::{Arc, Mutex, OnceLock};

// --------------------------------------- Severity ------------------------------------------

/// The severity of a log record.
///
/// The seven levels form a total order, with [`Unknown`](Severity::Unknown)
/// below all meaningful levels. Numeric conversions normalize out-of-range
/// values to `Unknown` instead of failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    /// The lowest level. Logging at this level usually indicates a mistake,
    /// such as a severity that did not survive a numeric conversion.
    Unknown = 0,
    /// Debugging information. The diagnostic helpers on [`Logger`] all log
    /// at this level.
    Debug = 1,
    /// Detailed diagnostics that are still meaningful to an end user.
    Verbose = 2,
    /// Routine events: configuration, state changes.
    Info = 3,
    /// Something may be wrong but is likely recoverable.
    Warning = 4,
    /// Something is definitely wrong: failed connections, unwritable files.
    Error = 5,
    /// What a terrible failure. Conditions that should be impossible; almost
    /// always fatal.
    Wtf = 6,
}

impl Severity {
    /// Get the title for this severity, as used by the console destination.
    ///
    /// `Unknown` is titled `Unclassified`.
    pub const fn title(&self) -> &'static str {
        use self::Severity::*;

        match *self {
            Unknown => "Unclassified",
            Debug => "Debug",
            Verbose => "Verbose",
            Info => "Info",
            Warning => "Warning",
            Error => "Error",
            Wtf => "Wtf",
        }
    }

    /// Get the successor.
    const fn successor(&self) -> Option<Self> {
        use self::Severity::*;

        Some(match *self {
            Unknown => Debug,
            Debug => Verbose,
            Verbose => Info,
            Info => Warning,
            Warning => Error,
            Error => Wtf,
            Wtf => return None,
        })
    }

    /// Get an iterator over all severities in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        successors(Some(Self::Unknown), Self::successor)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl From<u8> for Severity {
    fn from(value: u8) -> Self {
        use self::Severity::*;

        match value {
            1 => Debug,
            2 => Verbose,
            3 => Info,
            4 => Warning,
            5 => Error,
            6 => Wtf,
            _ => Unknown,
        }
    }
}

impl From<i32> for Severity {
    fn from(value: i32) -> Self {
        if (0..=6).contains(&value) {
            Self::from(value as u8)
        } else {
            Self::Unknown
        }
    }
}

// ------------------------------------ Severity Ranges --------------------------------------

/// An inclusive range of severities.
///
/// Destinations embed a range to implement their bound accessors. The range
/// sits behind a mutex, so a destination shared between loggers can be
/// re-bounded through a shared reference. The default range admits every
/// severity.
#[derive(Debug)]
pub struct SeverityRange {
    bounds: Mutex<(Severity, Severity)>,
}

impl SeverityRange {
    /// Create a range admitting every severity.
    pub fn all() -> Self {
        Self::new(Severity::Unknown, Severity::Wtf)
    }

    /// Create a range with the given inclusive bounds.
    pub fn new(min: Severity, max: Severity) -> Self {
        Self {
            bounds: Mutex::new((min, max)),
        }
    }

    /// Get the minimum severity.
    pub fn min(&self) -> Severity {
        self.bounds.lock().expect("mutex is not poisoned").0
    }

    /// Get the maximum severity.
    pub fn max(&self) -> Severity {
        self.bounds.lock().expect("mutex is not poisoned").1
    }

    /// Set the minimum severity.
    pub fn set_min(&self, severity: Severity) {
        self.bounds.lock().expect("mutex is not poisoned").0 = severity;
    }

    /// Set the maximum severity.
    pub fn set_max(&self, severity: Severity) {
        self.bounds.lock().expect("mutex is not poisoned").1 = severity;
    }

    /// Determine whether the severity falls within this range.
    pub fn admits(&self, severity: Severity) -> bool {
        let (min, max) = *self.bounds.lock().expect("mutex is not poisoned");
        min <= severity && severity <= max
    }
}

impl Default for SeverityRange {
    fn default() -> Self {
        Self::all()
    }
}

// --------------------------------------- Payloads ------------------------------------------

/// A loggable payload: a message, an error, or both.
///
/// The error forms carry the error's rendered text rather than the error
/// value itself. Capturing at this boundary keeps [`Destination`]s decoupled
/// from the error types of the host application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Payload<'a> {
    /// A plain message.
    Message(Cow<'a, str>),
    /// The rendered text of an error.
    Error(String),
    /// A message together with the rendered text of an error.
    MessageError(Cow<'a, str>, String),
}

impl<'a> Payload<'a> {
    /// Capture the error as a payload.
    pub fn error(error: &dyn std::error::Error) -> Self {
        Payload::Error(error.to_string())
    }

    /// Capture a message and the error as a payload.
    pub fn message_error(
        message: impl Into<Cow<'a, str>>,
        error: &dyn std::error::Error,
    ) -> Self {
        Payload::MessageError(message.into(), error.to_string())
    }

    /// Deliver this payload to the destination's matching method.
    fn deliver(&self, severity: Severity, destination: &dyn Destination) -> Result<()> {
        match self {
            Payload::Message(message) => destination.log_message(severity, message),
            Payload::Error(error) => destination.log_error(severity, error),
            Payload::MessageError(message, error) => {
                destination.log_message_with_error(severity, message, error)
            }
        }
    }
}

impl<'a> From<&'a str> for Payload<'a> {
    fn from(value: &'a str) -> Self {
        Payload::Message(Cow::Borrowed(value))
    }
}

impl From<String> for Payload<'_> {
    fn from(value: String) -> Self {
        Payload::Message(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for Payload<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Payload::Message(value)
    }
}

impl<'a> From<&'a dyn std::error::Error> for Payload<'a> {
    fn from(value: &'a dyn std::error::Error) -> Self {
        Payload::error(value)
    }
}

// ------------------------------------- Destinations ----------------------------------------

/// A logging destination.
///
/// A destination receives the records admitted by its severity bounds and
/// writes them wherever it writes: a stream, a dialog, a test buffer. The
/// bound accessors mutate through a shared reference because destinations
/// are shared; embedding a [`SeverityRange`] is the usual implementation.
///
/// This trait is object-safe.
pub trait Destination: Send + Sync {
    /// Log a message.
    fn log_message(&self, severity: Severity, message: &str) -> Result<()>;

    /// Log the rendered text of an error.
    fn log_error(&self, severity: Severity, error: &str) -> Result<()>;

    /// Log a message together with the rendered text of an error.
    fn log_message_with_error(&self, severity: Severity, message: &str, error: &str)
        -> Result<()>;

    /// Get the minimum severity this destination logs.
    fn min_severity(&self) -> Severity;

    /// Get the maximum severity this destination logs.
    fn max_severity(&self) -> Severity;

    /// Set the minimum severity this destination logs.
    fn set_min_severity(&self, severity: Severity);

    /// Set the maximum severity this destination logs.
    fn set_max_severity(&self, severity: Severity);

    /// Determine whether this destination admits the severity.
    fn admits(&self, severity: Severity) -> bool {
        self.min_severity() <= severity && severity <= self.max_severity()
    }
}

// --------------------------------------- The Logger ----------------------------------------

macro_rules! define_severity_shorthand {
    ($(#[$attr:meta])* $name:ident, $severity:ident) => {
        $(#[$attr])*
        pub fn $name<'a>(&self, payload: impl Into<Payload<'a>>) -> Result<()> {
            self.log(Severity::$severity, payload)
        }
    };
}

/// A logger dispatching records to zero or more destinations.
///
/// The destination list is mutated and read under a mutex, so a logger,
/// including the process-wide [`Logger::shared`] instance, can be used from
/// several threads. Within one [`log`](Logger::log) call, destinations are
/// notified strictly in attachment order.
pub struct Logger {
    destinations: Mutex<Vec<Arc<dyn Destination>>>,
}

impl Logger {
    /// Create a new logger with no destinations.
    pub fn new() -> Self {
        Self {
            destinations: Mutex::new(Vec::new()),
        }
    }

    /// Get the process-wide shared logger.
    ///
    /// The shared logger is created on first use and lives for the rest of
    /// the process; every call returns the same instance. Prefer passing a
    /// [`Logger::new`] instance through call sites and reserve the shared
    /// instance for code without an injection path.
    pub fn shared() -> Arc<Logger> {
        static SHARED: OnceLock<Arc<Logger>> = OnceLock::new();

        Arc::clone(SHARED.get_or_init(|| Arc::new(Logger::new())))
    }

    /// Add a destination to this logger.
    ///
    /// Destinations dispatch in attachment order. No uniqueness check is
    /// performed; a destination added twice receives every record twice.
    pub fn add_destination(&self, destination: Arc<dyn Destination>) {
        self.destinations
            .lock()
            .expect("mutex is not poisoned")
            .push(destination);
    }

    /// Remove all destinations from this logger.
    ///
    /// The destination objects themselves are shared and unaffected; they
    /// may be reattached later.
    pub fn clear_destinations(&self) {
        self.destinations
            .lock()
            .expect("mutex is not poisoned")
            .clear();
    }

    /// Log the payload at the given severity.
    ///
    /// The payload is delivered to every destination whose bounds admit the
    /// severity, in attachment order. The first destination failure
    /// propagates immediately; there is no retry or suppression layer.
    pub fn log<'a>(&self, severity: Severity, payload: impl Into<Payload<'a>>) -> Result<()> {
        let payload = payload.into();
        let destinations = self.destinations.lock().expect("mutex is not poisoned");
        for destination in destinations.iter() {
            if destination.admits(severity) {
                payload.deliver(severity, destination.as_ref())?;
            }
        }
        Ok(())
    }

    define_severity_shorthand!(
        /// Log the payload at the debug severity.
        log_debug,
        Debug
    );
    define_severity_shorthand!(
        /// Log the payload at the verbose severity.
        log_verbose,
        Verbose
    );
    define_severity_shorthand!(
        /// Log the payload at the info severity.
        log_info,
        Info
    );
    define_severity_shorthand!(
        /// Log the payload at the warning severity.
        log_warning,
        Warning
    );
    define_severity_shorthand!(
        /// Log the payload at the error severity.
        log_error,
        Error
    );
    define_severity_shorthand!(
        /// Log the payload at the what-a-terrible-failure severity.
        log_wtf,
        Wtf
    );

    /// Log that the calling method is not implemented.
    ///
    /// The call site is captured through the caller's location, so invoke
    /// this directly from the unimplemented method. Logs at the debug
    /// severity.
    #[track_caller]
    pub fn log_unimplemented_method(&self) -> Result<()> {
        let location = core::panic::Location::caller();
        self.log(
            Severity::Debug,
            format!("Unimplemented method at {location}"),
        )
    }

    /// Log an error the calling code cannot handle but wants to survive.
    ///
    /// Logs at the debug severity.
    pub fn log_unhandled_error(&self, error: &dyn std::error::Error) -> Result<()> {
        self.log(
            Severity::Debug,
            Payload::message_error("Unhandled exception", error),
        )
    }

    /// Log that a feature is not implemented. Logs at the debug severity.
    pub fn log_unimplemented_feature(&self, feature: &str) -> Result<()> {
        self.log(Severity::Debug, format!("Unimplemented feature: {feature}"))
    }

    /// Log that something remains to be done. Logs at the debug severity.
    pub fn log_todo(&self, message: &str) -> Result<()> {
        self.log(Severity::Debug, format!("TODO: {message}"))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.destinations.lock().map_or(0, |d| d.len());
        f.debug_struct("Logger").field("destinations", &count).finish()
    }
}

// ===========================================================================================
