// SRT - srt-math
// Module: SRT Math Prelude
// SW-REQ-ID: REQ_MATH_001
//
// Copyright (c) 2025 The SRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for srt-math
//!
//! Glob-import this to bring the checked scalar operations and their error
//! kinds into scope.

pub use crate::ops::{
    i64_add,
    i64_eq,
    i64_gt,
    i64_gteq,
    i64_lt,
    i64_lteq,
    i64_mul,
    i64_ne,
    i64_neg,
    i64_sub,
    u8_eq,
    u8_from_i64,
    u8_gt,
    u8_lt,
    u8_to_i64,
    BYTE_MAX,
    BYTE_MIN,
};
pub use srt_error::{ByteOverflowError, OverflowError};
