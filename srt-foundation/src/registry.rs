// SRT - srt-foundation
// Module: Type Registry
// SW-REQ-ID: REQ_TYPE_001
//
// Copyright (c) 2025 The SRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed table mapping runtime type names to element sizes.
//!
//! Containers resolve their element type through this table when they are
//! constructed. An unregistered name means the calling code was generated
//! against a different runtime, so [`size_of`] treats it as fatal.

use srt_error::{Error, ErrorSource};
use srt_panic::fatal;

use crate::element::Element;

/// Every type name the runtime knows, with its size in bytes.
pub const REGISTERED_TYPES: &[(&str, usize)] = &[
    ("i64", 8),
    ("u8", 1),
    ("bool", 1),
    ("i32", 4),
    ("u32", 4),
    ("u64", 8),
    // pointer + length
    ("Str", 16),
];

/// Size of `name` in bytes, or `None` if it is not registered
#[must_use]
pub fn lookup(name: &str) -> Option<usize> {
    REGISTERED_TYPES
        .iter()
        .find(|(registered, _)| *registered == name)
        .map(|&(_, size)| size)
}

/// Whether `name` is in the registry
#[must_use]
pub fn is_registered(name: &str) -> bool {
    lookup(name).is_some()
}

/// Size of `name` in bytes.
///
/// Enters the panic path if `name` is not registered.
#[track_caller]
#[must_use]
pub fn size_of(name: &str) -> usize {
    match lookup(name) {
        Some(size) => size,
        None => {
            let error = Error::unknown_type(format!("unknown type name: {name}"));
            tracing::error!(%error, "type lookup failed");
            fatal(&[error.message()])
        }
    }
}

/// An element type resolved against the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDescriptor {
    name: &'static str,
    size: usize,
}

impl TypeDescriptor {
    /// Resolve the registered name of `T`
    #[track_caller]
    #[must_use]
    pub fn of<T: Element>() -> Self {
        Self::named(T::TYPE_NAME)
    }

    /// Resolve a type by name
    #[track_caller]
    #[must_use]
    pub fn named(name: &'static str) -> Self {
        Self { name, size: size_of(name) }
    }

    /// Registered type name
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Element size in bytes
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }
}
