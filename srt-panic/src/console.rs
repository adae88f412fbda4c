// SRT - srt-panic
// Module: Console Capability
// SW-REQ-ID: REQ_PANIC_002
//
// Copyright (c) 2025 The SRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The console and process primitives the panic path writes through.

use std::io::{self, Write};

/// Output and process-exit primitives used only by the panic path.
///
/// Implementations must not return from [`Console::terminate_process`].
pub trait Console {
    /// Write raw bytes to the console
    fn write_text(&mut self, bytes: &[u8]);

    /// Flush any buffered output
    fn flush_output(&mut self);

    /// End the process with the given status
    fn terminate_process(&mut self, code: i32) -> !;
}

/// Console backed by the process's standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn write_text(&mut self, bytes: &[u8]) {
        if let Err(err) = io::stdout().write_all(bytes) {
            tracing::warn!(error = %err, "panic output could not be written");
        }
    }

    fn flush_output(&mut self) {
        if let Err(err) = io::stdout().flush() {
            tracing::warn!(error = %err, "panic output could not be flushed");
        }
    }

    fn terminate_process(&mut self, code: i32) -> ! {
        std::process::exit(code)
    }
}
