// SRT - srt-foundation
// Module: SRT Foundation Prelude
// SW-REQ-ID: REQ_FOUNDATION_001
//
// Copyright (c) 2025 The SRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for srt-foundation
//!
//! Brings the containers, providers and the error vocabulary they use into
//! scope with one glob import.

pub use srt_error::{
    status_of,
    AllocError,
    ConversionError,
    Error,
    ErrorSet,
    ErrorSource,
    IndexOutOfBoundsError,
    OverflowError,
};
pub use srt_panic::OrPanic;

pub use crate::{
    array::Array,
    element::Element,
    provider::{BudgetProvider, HeapProvider, MemoryProvider},
    registry::{self, TypeDescriptor},
    string::{FormatError, Str, SubstrError},
    vec::{BoundedVec, INITIAL_CAPACITY, MAX_CAPACITY},
};
