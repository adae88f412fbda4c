//! Conditions the runtime treats as unrecoverable.
//!
//! A recording console is installed so termination unwinds into the test
//! harness instead of exiting the process.

use srt_foundation::prelude::*;
use srt_panic::testing::install_recording_console;

#[test]
#[should_panic(expected = "vector capacity exceeded: cannot grow beyond 1024 elements")]
fn vector_growth_past_the_cap() {
    install_recording_console();
    let mut vec = BoundedVec::<u64>::new().unwrap();
    for i in 0..=1024 {
        vec.push(i).unwrap();
    }
}

#[test]
#[should_panic(expected = "tests/fatal_paths.rs")]
fn vector_cap_reports_the_pushing_call_site() {
    install_recording_console();
    let mut vec = BoundedVec::<bool>::new().unwrap();
    for _ in 0..=MAX_CAPACITY {
        vec.push(true).unwrap();
    }
}

#[test]
#[should_panic(expected = "unknown type name: f32")]
fn unregistered_type_name() {
    install_recording_console();
    let _ = TypeDescriptor::named("f32");
}

#[test]
#[should_panic(expected = "concat: budget exhausted")]
fn concat_without_memory() {
    install_recording_console();
    let left = Str::from_static_in("left", BudgetProvider::new(0));
    left.concat(&Str::from_static("right")).delete();
}

#[test]
#[should_panic(expected = "AllocError: budget exhausted")]
fn unhandled_error_escalates() {
    install_recording_console();
    let provider = BudgetProvider::new(1);
    Str::from_bytes_in(b"too big", provider).or_panic().delete();
}
