// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use tessera_alloc::{RawAllocator, RawBox, provider};
use tessera_container::{Container, Strategy};
use tracing::{debug, warn};

use crate::error::StructError;
use crate::traits::Structure;

struct StackMeta {
    capacity: usize,
}

/// Last-in, first-out stack of fixed-size byte elements.
///
/// A `capacity` of `0` means unbounded. Backed by
/// [`Strategy::DynamicArray`] unless another strategy is passed to
/// [`create_in`](Self::create_in).
///
/// # Example
///
/// ```rust
/// use tessera_alloc::SYSTEM;
/// use tessera_container::Strategy;
/// use tessera_structs::{Stack, StructError};
///
/// fn example() -> Result<(), StructError> {
///     let mut stack = Stack::create_in(0, 2, Strategy::DynamicArray, SYSTEM)?;
///
///     stack.push(&[1, 1])?;
///     stack.push(&[2, 2])?;
///
///     let mut out = [0u8; 2];
///     stack.peek(&mut out)?;
///     assert_eq!(out, [2, 2]);
///
///     stack.pop(&mut out)?;
///     stack.pop(&mut out)?;
///     assert_eq!(out, [1, 1]);
///     assert_eq!(stack.pop(&mut out), Err(StructError::Empty));
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct Stack {
    container: Container,
    meta: RawBox<StackMeta>,
}

impl Stack {
    /// Creates a stack using the allocator installed in the [`provider`]
    /// slot and the dynamic-array backing.
    ///
    /// # Errors
    ///
    /// [`StructError::Container`] if no allocator is installed or an
    /// allocation fails.
    ///
    /// # Panics
    ///
    /// Panics if `element_size == 0`.
    pub fn create(capacity: usize, element_size: usize) -> Result<Self, StructError> {
        assert_ne!(element_size, 0, "element_size must be non-zero");

        let allocator = provider::require().inspect_err(|_| {
            warn!(capacity, element_size, "stack requested with no allocator installed");
        })?;

        Self::create_in(capacity, element_size, Strategy::DynamicArray, allocator)
    }

    /// Creates a stack backed by `strategy`, taking memory from `allocator`.
    ///
    /// # Errors
    ///
    /// [`StructError::Container`] if an allocation fails. Nothing acquired
    /// so far is leaked.
    ///
    /// # Panics
    ///
    /// Panics if `element_size == 0`.
    pub fn create_in(
        capacity: usize,
        element_size: usize,
        strategy: Strategy,
        allocator: RawAllocator,
    ) -> Result<Self, StructError> {
        assert_ne!(element_size, 0, "element_size must be non-zero");

        let container = Container::create_in(element_size, strategy, allocator)?;
        let meta = RawBox::new_in(StackMeta { capacity }, allocator)?;

        debug!(capacity, element_size, %strategy, "stack created");

        Ok(Self { container, meta })
    }

    /// Releases the stack and everything it holds.
    pub fn delete(self) {
        debug!(
            capacity = self.meta.capacity,
            size = self.container.size(),
            "stack deleted"
        );
    }

    /// Returns the bound given at construction (`0` = unbounded).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.meta.capacity
    }

    /// Returns the backing strategy.
    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.container.strategy()
    }

    /// Pushes a copy of `element` on top.
    ///
    /// # Errors
    ///
    /// - [`StructError::Full`] if the stack is bounded and full
    /// - [`StructError::Container`] if the allocator is exhausted
    ///
    /// # Panics
    ///
    /// Panics if `element.len() != element_size`.
    pub fn push(&mut self, element: &[u8]) -> Result<(), StructError> {
        if self.is_full() {
            return Err(StructError::Full);
        }

        self.container.push_back(element)?;

        Ok(())
    }

    /// Pops the top element into `out`.
    ///
    /// # Errors
    ///
    /// [`StructError::Empty`] if the stack is empty; `out` is untouched.
    ///
    /// # Panics
    ///
    /// Panics if `out.len() != element_size`.
    pub fn pop(&mut self, out: &mut [u8]) -> Result<(), StructError> {
        if self.container.is_empty() {
            return Err(StructError::Empty);
        }

        self.container.pop_back(out)?;

        Ok(())
    }

    /// Copies the top element into `out` without removing it.
    ///
    /// # Errors
    ///
    /// [`StructError::Empty`] if the stack is empty; `out` is untouched.
    ///
    /// # Panics
    ///
    /// Panics if `out.len() != element_size`.
    pub fn peek(&self, out: &mut [u8]) -> Result<(), StructError> {
        let Some(top) = self.container.size().checked_sub(1) else {
            return Err(StructError::Empty);
        };

        self.container.at(out, top)?;

        Ok(())
    }
}

impl Structure for Stack {
    #[inline]
    fn size(&self) -> usize {
        self.container.size()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.meta.capacity != 0 && self.container.size() == self.meta.capacity
    }

    fn clear(&mut self) {
        self.container.clear();
    }

    #[inline]
    fn element_size(&self) -> usize {
        self.container.element_size()
    }
}

impl core::fmt::Debug for Stack {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Stack")
            .field("capacity", &self.meta.capacity)
            .field("container", &self.container)
            .finish()
    }
}
