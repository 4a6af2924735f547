//! # Spiffy
//!
//! This crate provides **small, self-contained output facilities for
//! command-line tools**. It has no dependencies beyond the low-level crate
//! enabling the native message box on Windows, i.e.,
//! [`windows-sys`](https://crates.io/crates/windows-sys).
//!
//! The three facilities are independent and compose freely:
//!
//!   * [`sgr`] generates ANSI escape sequences for styling terminal output
//!     with 8-bit and 24-bit foreground and background colors. Commands are
//!     plain values; writing their display *is* executing them.
//!   * [`pretty`] renders values for humans: strings quoted and escaped,
//!     tuples and containers bracketed, pairs parenthesized, scalars passed
//!     through. The output format is deterministic, so tests can assert on
//!     it.
//!   * [`log`] is a leveled logging facade. A [`Logger`] fans records out to
//!     [`Destination`]s, each filtering by its own inclusive severity range.
//!     The console destination ships here; the Windows dialog destination is
//!     compiled on Windows only.
//!
//!
//! # Example
//!
//! ```
//! # use std::sync::Arc;
//! # use spiffy::sgr::{DynForeground8, ResetStyle};
//! # use spiffy::{pretty, ConsoleDestination, Logger};
//! // Style a swatch of text.
//! let swatch = format!("{}sample{}", DynForeground8(203), ResetStyle);
//! assert_eq!(swatch, "\x1b[38;5;203msample\x1b[m");
//!
//! // Render a value for humans.
//! let rendered = format!("{}", pretty(&(1, "hello", 9)));
//! assert_eq!(rendered, "[ 1, \"hello\", 9 ]");
//!
//! // Fan a record out to the console.
//! let logger = Logger::new();
//! logger.add_destination(Arc::new(ConsoleDestination::new()));
//! logger.log_info(rendered)?;
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod log;
pub mod pretty;
pub mod sgr;

#[cfg(windows)]
pub use log::DialogDestination;
pub use log::{ConsoleDestination, Destination, Logger, Payload, Severity, SeverityRange};
pub use pretty::{escape_for_display, pretty, separated, Plain, Pretty};
pub use sgr::{Command, Sgr};
