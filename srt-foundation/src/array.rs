// SRT - srt-foundation
// Module: Fixed-Length Array
// SW-REQ-ID: REQ_COLL_001
//
// Copyright (c) 2025 The SRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-length, zero-initialised arrays.
//!
//! An [`Array`] is created with its final length and never grows. Every slot
//! holds a valid value from construction onwards: `new` fills the buffer with
//! each element type's zero value.

use core::{fmt, slice};

use srt_error::{AllocError, IndexOutOfBoundsError};

use crate::{
    buffer::{signed_len, slot_index, Buffer},
    element::Element,
    provider::{HeapProvider, MemoryProvider},
    registry::TypeDescriptor,
};

/// Fixed-length container of `T`, allocated through `P`.
pub struct Array<T, P: MemoryProvider = HeapProvider> {
    descriptor: TypeDescriptor,
    buffer: Buffer<T, P>,
}

impl<T: Element + Default> Array<T, HeapProvider> {
    /// Create an array of `capacity` zero values on the heap.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] for a negative capacity, a byte size that
    /// overflows, or an allocation the provider refuses.
    #[track_caller]
    pub fn new(capacity: i64) -> Result<Self, AllocError> {
        Self::new_in(capacity, HeapProvider)
    }
}

impl<T: Element> Array<T, HeapProvider> {
    /// Build an array holding `values` in order, on the heap.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the storage cannot be allocated.
    #[track_caller]
    pub fn from_values<I>(values: I) -> Result<Self, AllocError>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        Self::from_values_in(values, HeapProvider)
    }
}

impl<T: Element + Default, P: MemoryProvider> Array<T, P> {
    /// Create an array of `capacity` zero values through `provider`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] for a negative capacity, a byte size that
    /// overflows, or an allocation the provider refuses.
    #[track_caller]
    pub fn new_in(capacity: i64, provider: P) -> Result<Self, AllocError> {
        let descriptor = TypeDescriptor::of::<T>();
        let slots = usize::try_from(capacity)
            .map_err(|_| AllocError::new(format!("cannot allocate array with negative capacity {capacity}")))?;

        let mut buffer = Buffer::with_slots(provider, slots, descriptor.size())?;
        for _ in 0..slots {
            buffer.push_within(T::default());
        }

        Ok(Self { descriptor, buffer })
    }
}

impl<T: Element, P: MemoryProvider> Array<T, P> {
    /// Build an array holding `values` in order, through `provider`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the storage cannot be allocated.
    #[track_caller]
    pub fn from_values_in<I>(values: I, provider: P) -> Result<Self, AllocError>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let descriptor = TypeDescriptor::of::<T>();
        let values = values.into_iter();
        let mut buffer = Buffer::with_slots(provider, values.len(), descriptor.size())?;
        for value in values.take(buffer.slots()) {
            buffer.push_within(value);
        }

        Ok(Self { descriptor, buffer })
    }

    /// Number of elements
    #[must_use]
    pub fn len(&self) -> i64 {
        signed_len(self.buffer.len())
    }

    /// Whether the array has no elements
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.len() == 0
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

    /// Overwrite the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfBoundsError`] if `index` is negative or not less
    /// than [`len`](Self::len).
    pub fn set(&mut self, index: i64, value: T) -> Result<(), IndexOutOfBoundsError> {
        let slot = slot_index(index, self.buffer.len())?;
        self.buffer.as_mut_slice()[slot] = value;
        Ok(())
    }

    /// Release the array's storage
    pub fn delete(self) {
        tracing::trace!(element = self.descriptor.name(), len = self.buffer.len(), "array deleted");
    }

    /// Registered element type
    #[must_use]
    pub fn descriptor(&self) -> TypeDescriptor {
        self.descriptor
    }

    /// Size of one element in bytes
    #[must_use]
    pub fn element_size(&self) -> usize {
        self.descriptor.size()
    }

    /// Elements in index order
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.buffer.as_slice().iter()
    }

    /// Elements as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.buffer.as_slice()
    }
}

impl<'a, T: Element, P: MemoryProvider> IntoIterator for &'a Array<T, P> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, P: MemoryProvider> fmt::Debug for Array<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("element", &self.descriptor.name())
            .field("items", &self.buffer.as_slice())
            .finish()
    }
}
