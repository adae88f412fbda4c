// SRT - srt-foundation
// Module: Bounded Growable Vector
// SW-REQ-ID: REQ_COLL_002
//
// Copyright (c) 2025 The SRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Growable vector with a hard capacity cap.
//!
//! Capacity starts at [`INITIAL_CAPACITY`] and doubles whenever a push finds
//! the buffer full. Growth beyond [`MAX_CAPACITY`] is a resource-limit
//! violation and enters the panic path; only a provider refusal is reported
//! as a recoverable [`AllocError`].

use core::{fmt, slice};

use srt_error::{AllocError, Error, ErrorSource, IndexOutOfBoundsError};
use srt_panic::fatal;

use crate::{
    buffer::{signed_len, slot_index, Buffer},
    element::Element,
    provider::{HeapProvider, MemoryProvider},
    registry::TypeDescriptor,
};

/// Capacity of a freshly created vector
pub const INITIAL_CAPACITY: usize = 16;

/// Largest capacity a vector may grow to
pub const MAX_CAPACITY: usize = 1024;

/// Growable container of `T`, allocated through `P`.
///
/// Invariant: `len <= capacity <= MAX_CAPACITY`, and capacity is always
/// `INITIAL_CAPACITY * 2^k`.
pub struct BoundedVec<T, P: MemoryProvider = HeapProvider> {
    descriptor: TypeDescriptor,
    buffer: Buffer<T, P>,
}

impl<T: Element> BoundedVec<T, HeapProvider> {
    /// Create an empty vector on the heap.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the initial buffer cannot be allocated.
    #[track_caller]
    pub fn new() -> Result<Self, AllocError> {
        Self::new_in(HeapProvider)
    }
}

impl<T: Element, P: MemoryProvider> BoundedVec<T, P> {
    /// Create an empty vector through `provider`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the initial buffer cannot be allocated.
    #[track_caller]
    pub fn new_in(provider: P) -> Result<Self, AllocError> {
        let descriptor = TypeDescriptor::of::<T>();
        let buffer = Buffer::with_slots(provider, INITIAL_CAPACITY, descriptor.size())?;
        Ok(Self { descriptor, buffer })
    }

    /// Append `value`, doubling the capacity first if the vector is full.
    ///
    /// Enters the panic path if doubling would exceed [`MAX_CAPACITY`].
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the provider refuses the larger buffer. The
    /// vector is left unchanged in that case.
    #[track_caller]
    pub fn push(&mut self, value: T) -> Result<(), AllocError> {
        if self.buffer.len() == self.buffer.slots() {
            self.grow()?;
        }
        self.buffer.push_within(value);
        Ok(())
    }

    #[track_caller]
    fn grow(&mut self) -> Result<(), AllocError> {
        let current = self.buffer.slots();
        let doubled = current.saturating_mul(2);
        if doubled > MAX_CAPACITY {
            let error = Error::capacity_exceeded(format!(
                "vector capacity exceeded: cannot grow beyond {MAX_CAPACITY} elements"
            ));
            tracing::error!(capacity = current, %error, "vector capacity cap reached");
            fatal(&[error.message()]);
        }

        let mut next = Buffer::with_slots(self.buffer.provider().clone(), doubled, self.descriptor.size())?;
        next.take_all(&mut self.buffer);
        // The old buffer's bytes are released here.
        self.buffer = next;

        tracing::debug!(element = self.descriptor.name(), from = current, to = doubled, "vector grown");
        Ok(())
    }

    /// Element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfBoundsError`] if `index` is negative or not less
    /// than [`len`](Self::len).
    pub fn get(&self, index: i64) -> Result<&T, IndexOutOfBoundsError> {
        let slot = slot_index(index, self.buffer.len())?;
        Ok(&self.buffer.as_slice()[slot])
    }

    /// Number of elements pushed
    #[must_use]
    pub fn len(&self) -> i64 {
        signed_len(self.buffer.len())
    }

    /// Whether no elements have been pushed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.len() == 0
    }

    /// Number of elements the current buffer holds
    #[must_use]
    pub fn capacity(&self) -> i64 {
        signed_len(self.buffer.slots())
    }

    /// Registered element type
    #[must_use]
    pub fn descriptor(&self) -> TypeDescriptor {
        self.descriptor
    }

    /// Elements in push order
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.buffer.as_slice().iter()
    }

    /// Release the vector's storage
    pub fn delete(self) {
        tracing::trace!(element = self.descriptor.name(), len = self.buffer.len(), "vector deleted");
    }
}

impl<'a, T: Element, P: MemoryProvider> IntoIterator for &'a BoundedVec<T, P> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, P: MemoryProvider> fmt::Debug for BoundedVec<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedVec")
            .field("element", &self.descriptor.name())
            .field("capacity", &self.buffer.slots())
            .field("items", &self.buffer.as_slice())
            .finish()
    }
}
