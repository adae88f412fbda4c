// SRT - srt-panic
// Module: Panic Path for SRT
// SW-REQ-ID: REQ_PANIC_001
//
// Copyright (c) 2025 The SRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![forbid(unsafe_code)]

//! Unrecoverable panic path for the SRT runtime.
//!
//! A runtime operation that hits a fatal condition, or a caller holding an
//! error it has no handler for, ends up here. The panic path prints the
//! call-site location, then every message fragment in order, then a newline,
//! flushes, and terminates the process with a failure status.
//!
//! ## Usage
//!
//! ### Runtime Configuration
//! ```rust
//! use srt_panic::{initialize_panic_handler, PanicContextBuilder, StdConsole};
//!
//! let context = PanicContextBuilder::new()
//!     .with_console(StdConsole)
//!     .with_exit_code(3)
//!     .build()?;
//!
//! initialize_panic_handler(context)?;
//! # Ok::<(), srt_error::Error>(())
//! ```
//!
//! ### Escalating unhandled errors
//! ```rust,no_run
//! use srt_error::AllocError;
//! use srt_panic::OrPanic;
//!
//! let result: Result<u32, AllocError> = Err(AllocError::new("provider refused 64 bytes"));
//! // Prints the call site, then "AllocError: provider refused 64 bytes"
//! let value = result.or_panic();
//! ```
//!
//! Without an installed context the panic path writes to standard output and
//! exits with status [`DEFAULT_EXIT_CODE`].

mod console;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

use std::{
    panic::Location,
    sync::{Mutex, OnceLock, PoisonError},
};

pub use console::{Console, StdConsole};
use srt_error::{codes, Error, ErrorCategory, ErrorSource};

/// Exit status used when no other code is configured
pub const DEFAULT_EXIT_CODE: i32 = 1;

/// Process-wide panic context, installed once
static PANIC_CONTEXT: OnceLock<Mutex<PanicContext>> = OnceLock::new();

/// Panic context configuration
pub struct PanicContext {
    console: Box<dyn Console + Send>,
    exit_code: i32,
}

impl core::fmt::Debug for PanicContext {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PanicContext").field("exit_code", &self.exit_code).finish_non_exhaustive()
    }
}

impl Default for PanicContext {
    fn default() -> Self {
        Self { console: Box::new(StdConsole), exit_code: DEFAULT_EXIT_CODE }
    }
}

impl PanicContext {
    /// Exit status this context terminates with
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Print the location and message fragments, flush, and terminate.
    pub fn abort(&mut self, location: &Location<'_>, messages: &[&str]) -> ! {
        tracing::error!(
            file = location.file(),
            line = location.line(),
            fragments = messages.len(),
            "entering panic path"
        );

        let header = format!("panic at {}:{}:{}: ", location.file(), location.line(), location.column());
        self.console.write_text(header.as_bytes());
        for message in messages {
            self.console.write_text(message.as_bytes());
        }
        self.console.write_text(b"\n");
        self.console.flush_output();
        self.console.terminate_process(self.exit_code)
    }
}

/// Builder for panic context configuration
pub struct PanicContextBuilder {
    console: Option<Box<dyn Console + Send>>,
    exit_code: i32,
}

impl Default for PanicContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PanicContextBuilder {
    /// Create a builder writing to stdout and exiting with status 1
    #[must_use]
    pub fn new() -> Self {
        Self { console: None, exit_code: DEFAULT_EXIT_CODE }
    }

    /// Set the console the panic path writes through
    #[must_use]
    pub fn with_console(mut self, console: impl Console + Send + 'static) -> Self {
        self.console = Some(Box::new(console));
        self
    }

    /// Set the exit status (must be nonzero)
    #[must_use]
    pub fn with_exit_code(mut self, code: i32) -> Self {
        self.exit_code = code;
        self
    }

    /// Build the panic context
    ///
    /// # Errors
    ///
    /// Returns a validation error if the exit code is `0`, which would report
    /// success for an aborted process.
    pub fn build(self) -> Result<PanicContext, Error> {
        if self.exit_code == 0 {
            return Err(Error::new(
                ErrorCategory::Validation,
                codes::INVALID_ARGUMENT,
                "panic exit code must be nonzero",
            ));
        }

        Ok(PanicContext {
            console: self.console.unwrap_or_else(|| Box::new(StdConsole)),
            exit_code: self.exit_code,
        })
    }
}

/// Initialize the global panic handler configuration
///
/// # Errors
///
/// Returns a safety violation if a context was already installed.
pub fn initialize_panic_handler(context: PanicContext) -> Result<(), Error> {
    let exit_code = context.exit_code;
    PANIC_CONTEXT
        .set(Mutex::new(context))
        .map_err(|_| Error::safety_violation("panic handler already initialized"))?;
    tracing::debug!(exit_code, "panic handler initialized");
    Ok(())
}

/// Whether a panic context has been installed
#[must_use]
pub fn is_initialized() -> bool {
    PANIC_CONTEXT.get().is_some()
}

/// Enter the panic path, reporting the caller's location.
#[track_caller]
pub fn fatal(messages: &[&str]) -> ! {
    fatal_at(Location::caller(), messages)
}

/// Enter the panic path, reporting an explicit location.
pub fn fatal_at(location: &Location<'_>, messages: &[&str]) -> ! {
    match PANIC_CONTEXT.get() {
        // A previous abort under an unwinding test console poisons the lock.
        Some(context) => context.lock().unwrap_or_else(PoisonError::into_inner).abort(location, messages),
        None => PanicContext::default().abort(location, messages),
    }
}

/// Escalate an unhandled error to the panic path.
pub trait OrPanic<T> {
    /// Unwrap the success value or abort with the error's kind and message
    fn or_panic(self) -> T;
}

impl<T, E: ErrorSource> OrPanic<T> for Result<T, E> {
    #[track_caller]
    fn or_panic(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => fatal_at(Location::caller(), &[err.kind_name(), ": ", err.message()]),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use super::*;
    use crate::testing::RecordingConsole;

    fn payload_text(payload: Box<dyn core::any::Any + Send>) -> String {
        match payload.downcast::<String>() {
            Ok(text) => *text,
            Err(_) => String::new(),
        }
    }

    #[test]
    fn builder_rejects_zero_exit_code() {
        let err = PanicContextBuilder::new().with_exit_code(0).build().unwrap_err();
        assert_eq!(err.code, codes::INVALID_ARGUMENT);
    }

    #[test]
    fn builder_defaults_to_failure_status() {
        let context = PanicContextBuilder::new().build().unwrap();
        assert_eq!(context.exit_code(), DEFAULT_EXIT_CODE);
    }

    #[test]
    fn abort_prints_location_fragments_and_newline() {
        let mut context = PanicContextBuilder::new()
            .with_console(RecordingConsole::new())
            .with_exit_code(7)
            .build()
            .unwrap();
        let location = Location::caller();

        let payload = catch_unwind::<_, ()>(AssertUnwindSafe(|| {
            context.abort(location, &["capacity ", "exceeded"]);
        }))
        .unwrap_err();

        let text = payload_text(payload);
        assert!(text.starts_with("terminated with status 7: panic at "));
        assert!(text.contains(&format!("{}:{}", location.file(), location.line())));
        assert!(text.ends_with(": capacity exceeded\n"));
    }
}
