// SRT - srt-foundation
// Module: SRT Foundation
// SW-REQ-ID: REQ_FOUNDATION_001
//
// Copyright (c) 2025 The SRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Containers and strings of the Substrate RunTime.
//!
//! - [`Array`]: fixed-length, zero-initialised
//! - [`BoundedVec`]: growable by doubling, capped at [`MAX_CAPACITY`]
//! - [`Str`]: immutable bytes, either a borrowed literal or an owned buffer
//!
//! Element types are resolved through the [`registry`] on construction and
//! every buffer is accounted against a [`MemoryProvider`]. Fallible
//! operations return the ordered error sets from `srt-error`; the few
//! conditions treated as fatal go through `srt-panic`.
//!
//! ```
//! use srt_foundation::prelude::*;
//!
//! let mut values = BoundedVec::<i64>::new()?;
//! for i in 0..20 {
//!     values.push(i)?;
//! }
//! assert_eq!(values.get(19), Ok(&19));
//! assert_eq!(values.capacity(), 32);
//!
//! let greeting = Str::from_static("hello world").get_substr(0, 5)?;
//! assert_eq!(greeting, Str::from_static("hello"));
//! # Ok::<(), srt_error::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod array;
mod buffer;
pub mod element;
pub mod prelude;
pub mod provider;
pub mod registry;
pub mod string;
pub mod vec;

pub use array::Array;
pub use element::Element;
pub use provider::{BudgetProvider, HeapProvider, MemoryProvider};
pub use registry::TypeDescriptor;
pub use string::{FormatError, Str, SubstrError};
pub use vec::{BoundedVec, INITIAL_CAPACITY, MAX_CAPACITY};
