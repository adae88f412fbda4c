// SRT - srt-foundation
// Module: Provider-Accounted Buffers
// SW-REQ-ID: REQ_MEM_002
//
// Copyright (c) 2025 The SRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity element storage whose bytes are accounted against a
//! [`MemoryProvider`] for exactly as long as the buffer lives.

use srt_error::{AllocError, IndexOutOfBoundsError};
use srt_math::{i64_gteq, i64_lt};

use crate::provider::MemoryProvider;

/// Owned storage for up to `slots` elements.
///
/// Acquires `slots * element_size` bytes on creation and releases them in
/// `Drop`, so every exit path returns the memory exactly once.
#[derive(Debug)]
pub(crate) struct Buffer<T, P: MemoryProvider> {
    items: Vec<T>,
    slots: usize,
    bytes: usize,
    provider: P,
}

impl<T, P: MemoryProvider> Buffer<T, P> {
    /// Acquire room for `slots` elements of `element_size` bytes each.
    pub(crate) fn with_slots(provider: P, slots: usize, element_size: usize) -> Result<Self, AllocError> {
        let bytes = slots.checked_mul(element_size).ok_or_else(|| {
            AllocError::new(format!("{slots} elements of {element_size} bytes overflow the address space"))
        })?;

        provider.acquire(bytes)?;

        let mut items = Vec::new();
        if let Err(err) = items.try_reserve_exact(slots) {
            provider.release(bytes);
            return Err(AllocError::new(format!("allocator refused {bytes} bytes: {err}")));
        }

        tracing::trace!(slots, bytes, "buffer acquired");
        Ok(Self { items, slots, bytes, provider })
    }

    /// Append within the reserved slots
    pub(crate) fn push_within(&mut self, value: T) {
        debug_assert!(self.items.len() < self.slots, "buffer slots exhausted");
        self.items.push(value);
    }

    /// Move every element of `other` to the end of this buffer
    pub(crate) fn take_all(&mut self, other: &mut Self) {
        debug_assert!(self.items.len() + other.items.len() <= self.slots);
        self.items.append(&mut other.items);
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn slots(&self) -> usize {
        self.slots
    }

    #[cfg(test)]
    pub(crate) fn bytes(&self) -> usize {
        self.bytes
    }

    pub(crate) fn provider(&self) -> &P {
        &self.provider
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }
}

impl<T: Copy, P: MemoryProvider> Buffer<T, P> {
    /// Copy `src` to the end of this buffer
    pub(crate) fn copy_from(&mut self, src: &[T]) {
        debug_assert!(self.items.len() + src.len() <= self.slots);
        self.items.extend_from_slice(src);
    }
}

impl<T, P: MemoryProvider> Drop for Buffer<T, P> {
    fn drop(&mut self) {
        self.provider.release(self.bytes);
        tracing::trace!(slots = self.slots, bytes = self.bytes, "buffer released");
    }
}

/// Validate `index` against `length` and convert it to a slot position.
pub(crate) fn slot_index(index: i64, length: usize) -> Result<usize, IndexOutOfBoundsError> {
    let limit = i64::try_from(length).unwrap_or(i64::MAX);
    if i64_lt(index, 0) {
        return Err(IndexOutOfBoundsError::new(format!("index {index} is negative")));
    }
    if i64_gteq(index, limit) {
        return Err(IndexOutOfBoundsError::new(format!("index {index} >= length {length}")));
    }
    usize::try_from(index)
        .map_err(|_| IndexOutOfBoundsError::new(format!("index {index} exceeds the address space")))
}

/// Length of a container as the runtime's signed integer type
pub(crate) fn signed_len(length: usize) -> i64 {
    i64::try_from(length).unwrap_or(i64::MAX)
}
