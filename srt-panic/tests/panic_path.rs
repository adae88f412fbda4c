//! Integration tests for the process-wide panic path.

use std::{
    panic::{catch_unwind, AssertUnwindSafe},
    sync::{Arc, Mutex},
};

use srt_error::{AllocError, IndexOutOfBoundsError};
use srt_panic::{fatal, initialize_panic_handler, is_initialized, Console, OrPanic, PanicContextBuilder};

/// Shares its transcript with the test so output can be inspected after
/// the context has been moved into the global slot.
#[derive(Clone, Default)]
struct SharedConsole {
    transcript: Arc<Mutex<String>>,
}

impl Console for SharedConsole {
    fn write_text(&mut self, bytes: &[u8]) {
        if let Ok(mut transcript) = self.transcript.lock() {
            transcript.push_str(&String::from_utf8_lossy(bytes));
        }
    }

    fn flush_output(&mut self) {}

    fn terminate_process(&mut self, code: i32) -> ! {
        std::panic::panic_any(code)
    }
}

fn shared_console() -> SharedConsole {
    static CONSOLE: std::sync::OnceLock<SharedConsole> = std::sync::OnceLock::new();
    let console = CONSOLE.get_or_init(SharedConsole::default).clone();
    if !is_initialized() {
        let context = PanicContextBuilder::new()
            .with_console(console.clone())
            .with_exit_code(42)
            .build()
            .unwrap();
        initialize_panic_handler(context).ok();
    }
    console
}

#[test]
fn fatal_writes_fragments_and_exits_with_configured_code() {
    let console = shared_console();

    let payload = catch_unwind::<_, ()>(AssertUnwindSafe(|| fatal(&["unknown type name: ", "f128"]))).unwrap_err();

    assert_eq!(payload.downcast_ref::<i32>(), Some(&42));
    let transcript = console.transcript.lock().unwrap().clone();
    assert!(transcript.contains("tests/panic_path.rs"));
    assert!(transcript.contains(": unknown type name: f128\n"));
}

#[test]
fn or_panic_passes_success_through() {
    shared_console();
    let ok: Result<i64, AllocError> = Ok(19);
    assert_eq!(ok.or_panic(), 19);
}

#[test]
fn or_panic_reports_kind_and_message() {
    let console = shared_console();
    let err: Result<(), IndexOutOfBoundsError> = Err(IndexOutOfBoundsError::new("start 5 == end 5"));

    let payload = catch_unwind(AssertUnwindSafe(|| err.or_panic())).unwrap_err();

    assert_eq!(payload.downcast_ref::<i32>(), Some(&42));
    let transcript = console.transcript.lock().unwrap().clone();
    assert!(transcript.contains("IndexOutOfBoundsError: start 5 == end 5\n"));
}

#[test]
fn second_initialization_is_rejected() {
    shared_console();
    let again = PanicContextBuilder::new().build().unwrap();
    let err = initialize_panic_handler(again).unwrap_err();
    assert!(err.is_safety_error());
}
