//! Structured logging with box-drawing output.
//!
//! The calculator library itself never writes anything; these macros are used by
//! configuration loading and the `sunclock` binary to present results and
//! diagnostics in a consistent visual style.
//!
//! Output can be switched off at runtime; unit tests that exercise warning
//! paths do so to keep their output clean.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

static LOGGING_ENABLED: AtomicBool = AtomicBool::new(true);

/// Runtime switch for the logging macros.
///
/// ## Logging Conventions
///
/// - **`log_block_start!`** opens a new conceptual block (`┃` spacer, then `┣ message`).
///   Follow it with `log_decorated!` or `log_indented!` for related lines.
/// - **`log_decorated!`** prints `┣ message` as part of the current block.
/// - **`log_indented!`** prints `┃   message` for details nested under a block line.
/// - **`log_pipe!`** prints a lone `┃`, used before a semantic message
///   (`log_warning!`, `log_info!`, `log_debug!`) that starts a block.
/// - **`log_version!`** prints the `┏ sunclock vX.Y.Z ━━╸` header once at startup.
/// - **`log_end!`** prints the closing `╹` marker.
/// - **`log_error_exit!`** prints a terminating `┗[ERROR]` line.
pub struct Log;

impl Log {
    /// Enable or disable all macro output.
    pub fn set_enabled(enabled: bool) {
        LOGGING_ENABLED.store(enabled, Ordering::SeqCst);
    }

    /// Check if logging is currently enabled.
    pub fn is_enabled() -> bool {
        LOGGING_ENABLED.load(Ordering::SeqCst)
    }
}

// Needed by the exported macros.
pub fn write_output(text: &str) {
    let mut stdout = std::io::stdout().lock();
    let _ = stdout.write_all(text.as_bytes());
    let _ = stdout.flush();
}

/// Log a decorated message as part of an existing block.
#[macro_export]
macro_rules! log_decorated {
    ($fmt:literal $($arg:tt)*) => {{
        if $crate::common::logger::Log::is_enabled() {
            let message = format!($fmt $($arg)*);
            $crate::common::logger::write_output(&format!("┣ {message}\n"));
        }
    }};
    ($expr:expr) => {{
        if $crate::common::logger::Log::is_enabled() {
            let expr = $expr;
            $crate::common::logger::write_output(&format!("┣ {expr}\n"));
        }
    }};
}

/// Log an indented message for details within a block.
#[macro_export]
macro_rules! log_indented {
    ($fmt:literal $($arg:tt)*) => {{
        if $crate::common::logger::Log::is_enabled() {
            let message = format!($fmt $($arg)*);
            $crate::common::logger::write_output(&format!("┃   {message}\n"));
        }
    }};
    ($expr:expr) => {{
        if $crate::common::logger::Log::is_enabled() {
            let expr = $expr;
            $crate::common::logger::write_output(&format!("┃   {expr}\n"));
        }
    }};
}

/// Log a visual pipe separator for vertical spacing.
#[macro_export]
macro_rules! log_pipe {
    () => {{
        if $crate::common::logger::Log::is_enabled() {
            $crate::common::logger::write_output("┃\n");
        }
    }};
}

/// Log a block start message.
#[macro_export]
macro_rules! log_block_start {
    ($fmt:literal $($arg:tt)*) => {{
        if $crate::common::logger::Log::is_enabled() {
            let message = format!($fmt $($arg)*);
            $crate::common::logger::write_output(&format!("┃\n┣ {message}\n"));
        }
    }};
    ($expr:expr) => {{
        if $crate::common::logger::Log::is_enabled() {
            let expr = $expr;
            $crate::common::logger::write_output(&format!("┃\n┣ {expr}\n"));
        }
    }};
}

/// Log the application version header.
#[macro_export]
macro_rules! log_version {
    () => {{
        if $crate::common::logger::Log::is_enabled() {
            let version = env!("CARGO_PKG_VERSION");
            $crate::common::logger::write_output(&format!("┏ sunclock v{version} ━━╸\n"));
        }
    }};
}

/// Log the final termination marker.
#[macro_export]
macro_rules! log_end {
    () => {{
        if $crate::common::logger::Log::is_enabled() {
            $crate::common::logger::write_output("╹\n");
        }
    }};
}

/// Log a warning message with yellow level text.
#[macro_export]
macro_rules! log_warning {
    ($fmt:literal $($arg:tt)*) => {{
        if $crate::common::logger::Log::is_enabled() {
            let message = format!($fmt $($arg)*);
            $crate::common::logger::write_output(
                &format!("┣[\x1b[33mWARNING\x1b[0m] {message}\n"),
            );
        }
    }};
    ($expr:expr) => {{
        if $crate::common::logger::Log::is_enabled() {
            let expr = $expr;
            $crate::common::logger::write_output(&format!("┣[\x1b[33mWARNING\x1b[0m] {expr}\n"));
        }
    }};
}

/// Log an error that terminates the current flow.
#[macro_export]
macro_rules! log_error_exit {
    ($fmt:literal $($arg:tt)*) => {{
        if $crate::common::logger::Log::is_enabled() {
            let message = format!($fmt $($arg)*);
            $crate::common::logger::write_output(
                &format!("┃\n┗[\x1b[31mERROR\x1b[0m] {message}\n"),
            );
        }
    }};
    ($expr:expr) => {{
        if $crate::common::logger::Log::is_enabled() {
            let expr = $expr;
            $crate::common::logger::write_output(
                &format!("┃\n┗[\x1b[31mERROR\x1b[0m] {expr}\n"),
            );
        }
    }};
}

/// Log an informational message with green level text.
#[macro_export]
macro_rules! log_info {
    ($fmt:literal $($arg:tt)*) => {{
        if $crate::common::logger::Log::is_enabled() {
            let message = format!($fmt $($arg)*);
            $crate::common::logger::write_output(&format!("┣[\x1b[32mINFO\x1b[0m] {message}\n"));
        }
    }};
    ($expr:expr) => {{
        if $crate::common::logger::Log::is_enabled() {
            let expr = $expr;
            $crate::common::logger::write_output(&format!("┣[\x1b[32mINFO\x1b[0m] {expr}\n"));
        }
    }};
}

/// Log a debug message with green level text.
#[macro_export]
macro_rules! log_debug {
    ($fmt:literal $($arg:tt)*) => {{
        if $crate::common::logger::Log::is_enabled() {
            let message = format!($fmt $($arg)*);
            $crate::common::logger::write_output(&format!("┣[\x1b[32mDEBUG\x1b[0m] {message}\n"));
        }
    }};
    ($expr:expr) => {{
        if $crate::common::logger::Log::is_enabled() {
            let expr = $expr;
            $crate::common::logger::write_output(&format!("┣[\x1b[32mDEBUG\x1b[0m] {expr}\n"));
        }
    }};
}
