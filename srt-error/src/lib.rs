// SRT - srt-error
// Module: SRT Error Handling
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 The SRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! SRT Error handling library
//!
//! This library provides the error vocabulary of the Substrate RunTime: the
//! specific error kinds raised by containers, strings and checked arithmetic,
//! the categorized [`Error`] they widen into, and the ordered error-set
//! convention used by every fallible runtime operation.
//!
//! # Error Kinds
//!
//! - [`AllocError`]: the memory provider refused an allocation
//! - [`IndexOutOfBoundsError`]: index or range validation failed
//! - [`OverflowError`]: checked 64-bit arithmetic would wrap
//! - [`ByteOverflowError`]: narrowing to a byte went outside `0..=255`
//! - [`ConversionError`]: text could not be converted to a scalar
//!
//! # Usage
//!
//! ```
//! use srt_error::{codes, Error, ErrorCategory, IndexOutOfBoundsError};
//!
//! let kind = IndexOutOfBoundsError::new("index 4 >= length 4");
//! let error: Error = kind.into();
//! assert_eq!(error.category, ErrorCategory::Core);
//! assert_eq!(error.code, codes::OUT_OF_BOUNDS_ERROR);
//! ```

#![no_std]
#![forbid(unsafe_code)] // Rule 2
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

extern crate alloc;

/// Error codes for srt
pub mod codes;
/// Error and error handling types
pub mod errors;
/// Error kind definitions
pub mod kinds;
/// Ordered error sets and status encoding
pub mod protocol;

pub mod prelude;

// Macros for declaring error sets
#[macro_use]
pub mod macros;

// Re-export key types
pub use errors::{Error, ErrorCategory, ErrorSource};
pub use kinds::{AllocError, ByteOverflowError, ConversionError, IndexOutOfBoundsError, OverflowError};
pub use protocol::{declared_count, status_of, ErrorSet, SUCCESS};

/// A specialized `Result` type for SRT operations.
pub type Result<T> = core::result::Result<T, Error>;
