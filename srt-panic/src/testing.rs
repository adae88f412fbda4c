// SRT - srt-panic
// Module: Test Consoles
// SW-REQ-ID: REQ_PANIC_003
//
// Copyright (c) 2025 The SRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Console implementations for exercising fatal paths under a test harness.

use crate::{initialize_panic_handler, Console, PanicContextBuilder};

/// Records everything written and unwinds instead of exiting.
///
/// `terminate_process` drains the recorded text into a panic message of the
/// form `terminated with status {code}: {output}`, so `#[should_panic(expected =
/// ...)]` and `catch_unwind` can both observe what the panic path printed.
#[derive(Debug, Default)]
pub struct RecordingConsole {
    output: Vec<u8>,
    flushes: usize,
}

impl RecordingConsole {
    /// Create an empty recording console
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text written so far
    #[must_use]
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    /// Number of flushes requested so far
    #[must_use]
    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

impl Console for RecordingConsole {
    fn write_text(&mut self, bytes: &[u8]) {
        self.output.extend_from_slice(bytes);
    }

    fn flush_output(&mut self) {
        self.flushes += 1;
    }

    #[allow(clippy::panic)]
    fn terminate_process(&mut self, code: i32) -> ! {
        let output = std::mem::take(&mut self.output);
        panic!("terminated with status {code}: {}", String::from_utf8_lossy(&output))
    }
}

/// Install a [`RecordingConsole`] as the process-wide panic context.
///
/// Safe to call from every test; only the first call installs.
pub fn install_recording_console() {
    let context = PanicContextBuilder::new().with_console(RecordingConsole::new()).build();
    if let Ok(context) = context {
        // Parallel tests race to install; losing the race is fine.
        if let Err(err) = initialize_panic_handler(context) {
            tracing::trace!(%err, "recording console already installed");
        }
    }
}
