// SRT - srt-error
// Module: SRT Error Codes
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 The SRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for SRT

// Core error codes (1000-1999)
/// Parse error
pub const PARSE_ERROR: u16 = 1010;
/// Index or range outside the live elements of a container
pub const OUT_OF_BOUNDS_ERROR: u16 = 1012;
/// Capacity exceeded
pub const CAPACITY_EXCEEDED: u16 = 1016;

// Resource error codes (3000-3999)
/// Resource exhausted error
pub const RESOURCE_EXHAUSTED: u16 = 3008;
/// Allocation failed error
pub const ALLOCATION_FAILED: u16 = 3009;

// Validation error codes (5000-5999)
/// Invalid argument error
pub const INVALID_ARGUMENT: u16 = 5002;

// Type error codes (6000-6999)
/// Invalid type error
pub const INVALID_TYPE: u16 = 6000;
/// Type name missing from the type registry
pub const UNKNOWN_TYPE_NAME: u16 = 6001;

// Safety error codes (7000-7999)
/// Unrecoverable runtime condition routed through the panic path
pub const SAFETY_VIOLATION: u16 = 7000;

// System error codes (8000-8999)
/// Conversion error (general)
pub const CONVERSION_ERROR: u16 = 8002;
/// Checked 64-bit integer arithmetic would wrap
pub const INTEGER_OVERFLOW: u16 = 8606;
/// Value outside `0..=255` when narrowing to a byte
pub const BYTE_OVERFLOW: u16 = 8607;

/// Unknown error
pub const UNKNOWN: u16 = 9999;
