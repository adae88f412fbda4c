// SRT - srt-foundation
// Module: Memory Providers
// SW-REQ-ID: REQ_MEM_001
//
// Copyright (c) 2025 The SRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Memory providers account for the bytes every runtime buffer occupies.
//!
//! A provider is a cheap handle: containers clone it into each buffer they
//! create so the buffer can return its bytes on drop. [`HeapProvider`] never
//! refuses on its own; [`BudgetProvider`] enforces a fixed byte budget shared
//! by all of its clones.

use std::{cell::Cell, fmt, rc::Rc};

use srt_error::AllocError;

/// Accounting interface behind every runtime allocation.
pub trait MemoryProvider: Clone + fmt::Debug {
    /// Reserve `bytes` against this provider.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the provider refuses the request.
    fn acquire(&self, bytes: usize) -> Result<(), AllocError>;

    /// Return `bytes` previously acquired from this provider
    fn release(&self, bytes: usize);
}

/// Unbounded provider backed by the global allocator.
///
/// Refusal can still surface from the allocator itself when a buffer
/// reserves its storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeapProvider;

impl MemoryProvider for HeapProvider {
    fn acquire(&self, _bytes: usize) -> Result<(), AllocError> {
        Ok(())
    }

    fn release(&self, _bytes: usize) {}
}

#[derive(Debug)]
struct BudgetState {
    limit: usize,
    in_use: Cell<usize>,
    peak: Cell<usize>,
    refusals: Cell<usize>,
}

/// Provider with a fixed byte budget.
///
/// Clones share one budget, so every buffer created through any clone counts
/// against the same limit.
#[derive(Clone)]
pub struct BudgetProvider {
    state: Rc<BudgetState>,
}

impl BudgetProvider {
    /// Create a provider allowing at most `limit` live bytes
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            state: Rc::new(BudgetState {
                limit,
                in_use: Cell::new(0),
                peak: Cell::new(0),
                refusals: Cell::new(0),
            }),
        }
    }

    /// Total budget in bytes
    #[must_use]
    pub fn limit(&self) -> usize {
        self.state.limit
    }

    /// Bytes currently held by live buffers
    #[must_use]
    pub fn in_use(&self) -> usize {
        self.state.in_use.get()
    }

    /// Bytes still available
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.state.limit.saturating_sub(self.state.in_use.get())
    }

    /// Highest `in_use` value observed
    #[must_use]
    pub fn peak(&self) -> usize {
        self.state.peak.get()
    }

    /// Number of refused requests
    #[must_use]
    pub fn refusals(&self) -> usize {
        self.state.refusals.get()
    }
}

impl fmt::Debug for BudgetProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BudgetProvider")
            .field("limit", &self.state.limit)
            .field("in_use", &self.state.in_use.get())
            .field("peak", &self.state.peak.get())
            .finish()
    }
}

impl MemoryProvider for BudgetProvider {
    fn acquire(&self, bytes: usize) -> Result<(), AllocError> {
        let in_use = self.state.in_use.get();
        let requested = in_use.checked_add(bytes).filter(|&total| total <= self.state.limit);

        let Some(total) = requested else {
            self.state.refusals.set(self.state.refusals.get() + 1);
            tracing::debug!(bytes, in_use, limit = self.state.limit, "budget provider refused allocation");
            return Err(AllocError::new(format!(
                "budget exhausted: requested {bytes} bytes with {in_use} of {} in use",
                self.state.limit
            )));
        };

        self.state.in_use.set(total);
        if total > self.state.peak.get() {
            self.state.peak.set(total);
        }
        Ok(())
    }

    fn release(&self, bytes: usize) {
        let in_use = self.state.in_use.get();
        debug_assert!(bytes <= in_use, "released more than acquired");
        self.state.in_use.set(in_use.saturating_sub(bytes));
    }
}
