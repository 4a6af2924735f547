//! The native dialog logging destination.
//!
//! Only available on Windows. Documentation for the message box API lives at
//! <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-messageboxw>

use std::io::Result;
use std::iter::once;
use std::ptr::null_mut;

use windows_sys::Win32::UI::WindowsAndMessaging::{
    MessageBoxW, MB_ICONEXCLAMATION, MB_ICONINFORMATION, MB_ICONSTOP, MB_OK, MESSAGEBOX_STYLE,
};

use super::{Destination, Severity, SeverityRange};

/// A [`Destination`] that shows a modal message box per record.
///
/// Since a modal dialog stops the application until dismissed, this
/// destination suits rare, high-severity records; pair it with a bound like
/// `set_min_severity(Severity::Error)` rather than leaving the default
/// admit-everything range in place.
pub struct DialogDestination {
    range: SeverityRange,
}

impl DialogDestination {
    /// Create a new dialog destination.
    pub fn new() -> Self {
        Self {
            range: SeverityRange::all(),
        }
    }

    /// Get the dialog title for the severity.
    fn title(severity: Severity) -> &'static str {
        use super::Severity::*;

        match severity {
            Unknown => "Unclassified",
            Debug => "Debug",
            Verbose => "Verbose",
            Info => "Information",
            Warning => "Warning",
            Error => "ERROR",
            Wtf => "How did you let this happen?",
        }
    }

    /// Get the dialog icon for the severity.
    fn icon(severity: Severity) -> MESSAGEBOX_STYLE {
        use super::Severity::*;

        match severity {
            Debug | Warning => MB_ICONEXCLAMATION,
            Error | Wtf => MB_ICONSTOP,
            Unknown | Verbose | Info => MB_ICONINFORMATION,
        }
    }

    /// Show a message box with the body and the severity's title and icon.
    fn show(&self, severity: Severity, body: &str) -> Result<()> {
        let body = to_wide(body);
        let title = to_wide(Self::title(severity));
        // SAFETY: Both buffers are NUL-terminated UTF-16 and stay alive for
        // the duration of the call; a null owner window is documented as
        // valid.
        let status = unsafe {
            MessageBoxW(
                null_mut(),
                body.as_ptr(),
                title.as_ptr(),
                MB_OK | Self::icon(severity),
            )
        };

        if status == 0 {
            Err(std::io::Error::last_os_error())
        } else {
            Ok(())
        }
    }
}

/// Encode the text as NUL-terminated UTF-16.
fn to_wide(text: &str) -> Vec<u16> {
    text.encode_utf16().chain(once(0)).collect()
}

impl Default for DialogDestination {
    fn default() -> Self {
        Self::new()
    }
}

impl Destination for DialogDestination {
    fn log_message(&self, severity: Severity, message: &str) -> Result<()> {
        self.show(severity, message)
    }

    fn log_error(&self, severity: Severity, error: &str) -> Result<()> {
        self.show(severity, &format!("Exception: {error}"))
    }

    fn log_message_with_error(
        &self,
        severity: Severity,
        message: &str,
        error: &str,
    ) -> Result<()> {
        self.show(severity, &format!("Exception: {error} with message {message}"))
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
