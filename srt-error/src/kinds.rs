// SRT - srt-error
// Module: SRT Error Kinds
// SW-REQ-ID: REQ_ERROR_002
//
// Copyright (c) 2025 The SRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Specific error kinds raised by runtime operations.
//!
//! Each kind carries the human-readable message built at the failure site.
//! Kinds are plain values; an operation that can fail in several ways
//! declares an ordered set of them with [`declare_errors!`](crate::declare_errors).

use alloc::string::String;
use core::fmt;

use crate::{codes, Error, ErrorCategory, ErrorSource};

macro_rules! define_error_kind {
    ($(#[$meta:meta])* $name:ident, $category:expr, $code:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            message: String,
        }

        impl $name {
            /// Create the error with a formatted message
            #[must_use]
            pub fn new(message: impl Into<String>) -> Self {
                Self { message: message.into() }
            }

            /// The formatted message
            #[must_use]
            pub fn message(&self) -> &str {
                &self.message
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}: {}", stringify!($name), self.message)
            }
        }

        impl ErrorSource for $name {
            fn code(&self) -> u16 {
                $code
            }

            fn message(&self) -> &str {
                &self.message
            }

            fn category(&self) -> ErrorCategory {
                $category
            }

            fn kind_name(&self) -> &'static str {
                stringify!($name)
            }
        }

        impl crate::ErrorSet for $name {
            const DECLARED: &'static [&'static str] = &[stringify!($name)];

            fn ordinal(&self) -> u8 {
                1
            }
        }

        impl From<$name> for Error {
            fn from(e: $name) -> Self {
                Error::new($category, $code, e.message)
            }
        }

        impl core::error::Error for $name {}
    };
}

define_error_kind!(
    /// The memory provider refused an allocation
    AllocError,
    ErrorCategory::Resource,
    codes::ALLOCATION_FAILED
);

define_error_kind!(
    /// An index or range fell outside the live elements of a container
    IndexOutOfBoundsError,
    ErrorCategory::Core,
    codes::OUT_OF_BOUNDS_ERROR
);

define_error_kind!(
    /// Checked 64-bit integer arithmetic would wrap
    OverflowError,
    ErrorCategory::Runtime,
    codes::INTEGER_OVERFLOW
);

define_error_kind!(
    /// A value outside `0..=255` was narrowed to a byte
    ByteOverflowError,
    ErrorCategory::Runtime,
    codes::BYTE_OVERFLOW
);

define_error_kind!(
    /// Text could not be converted to a scalar
    ConversionError,
    ErrorCategory::Parse,
    codes::CONVERSION_ERROR
);
