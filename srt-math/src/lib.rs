// Copyright (c) 2025 The SRT Project Developers
// SPDX-License-Identifier: MIT
// Project: SRT
// Module: srt-math (SW-REQ-ID: REQ_MATH_001)

//! Overflow-checked scalar arithmetic for SRT.
//! Provides the integer and byte operations every container and string
//! operation builds its index and capacity math on.

#![no_std]
#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![deny(clippy::todo, clippy::unimplemented)]
#![warn(clippy::pedantic)]

extern crate alloc;

// Modules
pub mod ops;
pub mod prelude;

// Re-export all operations from the ops module
pub use ops::*;
// Re-export error types from srt-error for convenience
pub use srt_error::{ByteOverflowError, OverflowError};
