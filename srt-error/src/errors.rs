// SRT - srt-error
// Module: SRT Error Types
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 The SRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Unified error type for SRT
//!
//! Every specific error kind raised by the runtime can be widened into this
//! type, so callers that do not care which declared kind occurred can log or
//! propagate a single value.

use alloc::string::String;
use core::fmt;

use crate::codes;

/// `Error` categories for SRT operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Core container errors (indexing, ranges)
    Core       = 1,
    /// Resource errors (allocation, budgets)
    Resource   = 3,
    /// Memory errors
    Memory     = 4,
    /// Validation errors
    Validation = 5,
    /// Type errors (registry lookups)
    Type       = 6,
    /// Runtime errors (arithmetic)
    Runtime    = 7,
    /// System errors
    System     = 8,
    /// Unknown errors
    Unknown    = 9,
    /// Parse errors
    Parse      = 10,
    /// Capacity errors
    Capacity   = 12,
    /// Safety-related errors (fatal runtime conditions)
    Safety     = 16,
}

/// Base trait for all error kinds
pub trait ErrorSource: fmt::Debug + fmt::Display {
    /// Get the error code
    fn code(&self) -> u16;

    /// Get the formatted error message
    fn message(&self) -> &str;

    /// Get the error category
    fn category(&self) -> ErrorCategory;

    /// Name of the declared error kind, e.g. `IndexOutOfBoundsError`
    fn kind_name(&self) -> &'static str;
}

/// SRT `Error` type
///
/// Categorized error with a numeric code and an owned message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  String,
}

impl Error {
    /// Create a new error.
    #[must_use]
    pub fn new(category: ErrorCategory, code: u16, message: impl Into<String>) -> Self {
        Self {
            category,
            code,
            message: message.into(),
        }
    }

    /// Create an allocation failure error
    #[must_use]
    pub fn allocation_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Resource, codes::ALLOCATION_FAILED, message)
    }

    /// Create an out of bounds error
    #[must_use]
    pub fn out_of_bounds(message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Core, codes::OUT_OF_BOUNDS_ERROR, message)
    }

    /// Create a runtime integer overflow error
    #[must_use]
    pub fn integer_overflow(message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Runtime, codes::INTEGER_OVERFLOW, message)
    }

    /// Create a byte narrowing overflow error
    #[must_use]
    pub fn byte_overflow(message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Runtime, codes::BYTE_OVERFLOW, message)
    }

    /// Create a capacity exceeded error
    #[must_use]
    pub fn capacity_exceeded(message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Capacity, codes::CAPACITY_EXCEEDED, message)
    }

    /// Create a conversion error
    #[must_use]
    pub fn conversion_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Parse, codes::CONVERSION_ERROR, message)
    }

    /// Create an unknown type name error
    #[must_use]
    pub fn unknown_type(message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Type, codes::UNKNOWN_TYPE_NAME, message)
    }

    /// Create a safety violation error
    #[must_use]
    pub fn safety_violation(message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Safety, codes::SAFETY_VIOLATION, message)
    }

    /// Check if this is a resource error
    #[must_use]
    pub fn is_resource_error(&self) -> bool {
        self.category == ErrorCategory::Resource
    }

    /// Check if this is a core error
    #[must_use]
    pub fn is_core_error(&self) -> bool {
        self.category == ErrorCategory::Core
    }

    /// Check if this is a runtime error
    #[must_use]
    pub fn is_runtime_error(&self) -> bool {
        self.category == ErrorCategory::Runtime
    }

    /// Check if this is a safety error
    #[must_use]
    pub fn is_safety_error(&self) -> bool {
        self.category == ErrorCategory::Safety
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}][E{:04X}] {}", self.category, self.code, self.message)
    }
}

impl ErrorSource for Error {
    fn code(&self) -> u16 {
        self.code
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn category(&self) -> ErrorCategory {
        self.category
    }

    fn kind_name(&self) -> &'static str {
        "Error"
    }
}

impl From<core::fmt::Error> for Error {
    fn from(_: core::fmt::Error) -> Self {
        Self::new(ErrorCategory::System, codes::UNKNOWN, "Formatting error")
    }
}

impl core::error::Error for Error {}
