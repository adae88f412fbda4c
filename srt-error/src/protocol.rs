// SRT - srt-error
// Module: Ordered Error Sets
// SW-REQ-ID: REQ_ERROR_003
//
// Copyright (c) 2025 The SRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The calling convention for operations that can fail in more than one way.
//!
//! A fallible operation declares an ordered list of error kinds `E1..En`.
//! Its result is either the success value or exactly one of those kinds.
//! The position of a kind in the declaration is its *ordinal* (`1..=n`);
//! success is ordinal [`SUCCESS`]. Generated call sites that only understand
//! integer status codes use [`status_of`] to recover the ordinal.
//!
//! ```
//! use srt_error::{declare_errors, status_of, AllocError, IndexOutOfBoundsError};
//!
//! declare_errors! {
//!     /// Failure modes of a substring request
//!     pub enum SubstrError {
//!         IndexOutOfBounds(IndexOutOfBoundsError),
//!         Alloc(AllocError),
//!     }
//! }
//!
//! let failed: Result<(), SubstrError> = Err(AllocError::new("no memory").into());
//! assert_eq!(status_of(&failed), 2);
//! assert_eq!(status_of(&Ok::<(), SubstrError>(())), 0);
//! ```

use crate::ErrorSource;

/// Status reported for a successful operation
pub const SUCCESS: u8 = 0;

/// An ordered set of error kinds declared by one operation.
pub trait ErrorSet: ErrorSource {
    /// Kind names in declaration order
    const DECLARED: &'static [&'static str];

    /// 1-based position of this error's kind in [`Self::DECLARED`]
    fn ordinal(&self) -> u8;
}

/// Encode a result as its ordinal status (`0` on success).
#[must_use]
pub fn status_of<T, E: ErrorSet>(result: &Result<T, E>) -> u8 {
    match result {
        Ok(_) => SUCCESS,
        Err(e) => e.ordinal(),
    }
}

/// Number of error kinds an operation declares.
#[must_use]
pub fn declared_count<E: ErrorSet>() -> usize {
    E::DECLARED.len()
}
