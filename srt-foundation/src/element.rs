// SRT - srt-foundation
// Module: Element Types
// SW-REQ-ID: REQ_TYPE_002
//
// Copyright (c) 2025 The SRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Types that can be stored in runtime containers.

/// A value storable in an [`Array`](crate::Array) or
/// [`BoundedVec`](crate::BoundedVec).
///
/// `TYPE_NAME` must appear in the [registry](crate::registry); containers
/// resolve it on construction to size their buffers.
pub trait Element {
    /// Registered type name
    const TYPE_NAME: &'static str;
}

macro_rules! impl_element {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Element for $ty {
                const TYPE_NAME: &'static str = $name;
            }
        )*
    };
}

impl_element! {
    i64 => "i64",
    u8 => "u8",
    bool => "bool",
    i32 => "i32",
    u32 => "u32",
    u64 => "u64",
}
