// SRT - srt-error
// Module: SRT Error Prelude
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 The SRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for srt-error
//!
//! Re-exports the error vocabulary so downstream crates can pull it in with
//! a single glob import.

pub use crate::{
    codes,
    declare_errors,
    kinds::{
        self,
        AllocError,
        ByteOverflowError,
        ConversionError,
        IndexOutOfBoundsError,
        OverflowError,
    },
    status_of,
    Error,
    ErrorCategory,
    ErrorSet,
    ErrorSource,
    Result,
    SUCCESS,
};
