// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Contiguous backing strategy.

use core::ptr::{self, NonNull};

use tessera_alloc::{AllocError, RawAllocator, bytes_layout};
use tracing::trace;

use crate::error::ContainerError;

/// Growable run of `element_size`-byte slots in one block.
///
/// Grows to the next power of two when full:
/// 1. Allocates the new block from the captured capability
/// 2. Copies the live elements over
/// 3. Frees the old block
///
/// The capability has no `realloc`, so growth is always allocate + copy + free.
/// A failed growth leaves the array exactly as it was.
pub(crate) struct DynamicArray {
    ptr: NonNull<u8>,
    len: usize,
    capacity: usize,
    element_size: usize,
    allocator: RawAllocator,
}

impl DynamicArray {
    pub(crate) fn new(element_size: usize, allocator: RawAllocator) -> Self {
        debug_assert!(element_size != 0);

        Self {
            ptr: NonNull::dangling(),
            len: 0,
            capacity: 0,
            element_size,
            allocator,
        }
    }

    pub(crate) fn with_capacity(
        element_size: usize,
        capacity: usize,
        allocator: RawAllocator,
    ) -> Result<Self, ContainerError> {
        let mut array = Self::new(element_size, allocator);

        if capacity > 0 {
            array.grow_exact(capacity)?;
        }

        Ok(array)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Pointer to slot `index`. Callers guarantee `index <= capacity`.
    #[inline(always)]
    fn slot(&self, index: usize) -> *mut u8 {
        debug_assert!(index <= self.capacity);

        // SAFETY (PRECONDITIONS ARE MET): index <= capacity keeps the offset inside
        // (or one past) the block
        unsafe { self.ptr.as_ptr().add(index * self.element_size) }
    }

    fn grow_exact(&mut self, new_capacity: usize) -> Result<(), ContainerError> {
        debug_assert!(new_capacity > self.capacity);

        let old_layout = bytes_layout(self.element_size, self.capacity)?;
        let new_layout = bytes_layout(self.element_size, new_capacity)?;
        let new_ptr = self.allocator.allocate(new_layout)?;

        if self.capacity > 0 {
            unsafe {
                // SAFETY (PRECONDITIONS ARE MET): both blocks hold at least len elements
                // and do not overlap
                ptr::copy_nonoverlapping(
                    self.ptr.as_ptr(),
                    new_ptr.as_ptr(),
                    self.len * self.element_size,
                );
                // SAFETY (PRECONDITIONS ARE MET): the old block came from this allocator
                // with old_layout and is not referenced again
                self.allocator.free(self.ptr, old_layout);
            }
        }

        trace!(from = self.capacity, to = new_capacity, "dynamic array grown");

        self.ptr = new_ptr;
        self.capacity = new_capacity;

        Ok(())
    }

    #[cold]
    #[inline(never)]
    fn grow_to(&mut self, min_capacity: usize) -> Result<(), ContainerError> {
        let new_capacity = min_capacity
            .checked_next_power_of_two()
            .ok_or(AllocError::LayoutOverflow)?;

        self.grow_exact(new_capacity)
    }

    #[inline(always)]
    fn maybe_grow_to(&mut self, min_capacity: usize) -> Result<(), ContainerError> {
        if self.capacity >= min_capacity {
            return Ok(());
        }

        self.grow_to(min_capacity)
    }

    pub(crate) fn reserve(&mut self, additional: usize) -> Result<(), ContainerError> {
        let min_capacity = self
            .len
            .checked_add(additional)
            .ok_or(AllocError::LayoutOverflow)?;

        self.maybe_grow_to(min_capacity)
    }

    pub(crate) fn push_back(&mut self, element: &[u8]) -> Result<(), ContainerError> {
        self.maybe_grow_to(self.len + 1)?;

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): len < capacity after growth, element is
            // element_size bytes and lives outside our block
            ptr::copy_nonoverlapping(element.as_ptr(), self.slot(self.len), self.element_size);
        }
        self.len += 1;

        Ok(())
    }

    pub(crate) fn push_front(&mut self, element: &[u8]) -> Result<(), ContainerError> {
        self.maybe_grow_to(self.len + 1)?;

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): shifting len elements one slot up stays below
            // capacity; ptr::copy handles the overlap
            ptr::copy(self.slot(0), self.slot(1), self.len * self.element_size);
            ptr::copy_nonoverlapping(element.as_ptr(), self.slot(0), self.element_size);
        }
        self.len += 1;

        Ok(())
    }

    pub(crate) fn pop_back(&mut self, out: &mut [u8]) -> Result<(), ContainerError> {
        if self.len == 0 {
            return Err(ContainerError::Empty);
        }

        self.len -= 1;

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): slot len was initialized before the decrement
            ptr::copy_nonoverlapping(self.slot(self.len), out.as_mut_ptr(), self.element_size);
        }

        Ok(())
    }

    pub(crate) fn pop_front(&mut self, out: &mut [u8]) -> Result<(), ContainerError> {
        if self.len == 0 {
            return Err(ContainerError::Empty);
        }

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): slot 0 is initialized; the remaining len - 1
            // elements shift down inside the block
            ptr::copy_nonoverlapping(self.slot(0), out.as_mut_ptr(), self.element_size);
            ptr::copy(self.slot(1), self.slot(0), (self.len - 1) * self.element_size);
        }
        self.len -= 1;

        Ok(())
    }

    pub(crate) fn at(&self, out: &mut [u8], index: usize) -> Result<(), ContainerError> {
        self.check_index(index)?;

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): index < len
            ptr::copy_nonoverlapping(self.slot(index), out.as_mut_ptr(), self.element_size);
        }

        Ok(())
    }

    pub(crate) fn replace(&mut self, element: &[u8], index: usize) -> Result<(), ContainerError> {
        self.check_index(index)?;

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): index < len
            ptr::copy_nonoverlapping(element.as_ptr(), self.slot(index), self.element_size);
        }

        Ok(())
    }

    /// Truncates to zero elements. The block is kept for reuse.
    pub(crate) fn clear(&mut self) {
        self.len = 0;
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<(), ContainerError> {
        if index >= self.len {
            return Err(ContainerError::OutOfBounds {
                index,
                size: self.len,
            });
        }

        Ok(())
    }
}

impl Drop for DynamicArray {
    fn drop(&mut self) {
        if self.capacity == 0 {
            return;
        }

        // The layout was valid when the block was allocated
        if let Ok(layout) = bytes_layout(self.element_size, self.capacity) {
            unsafe {
                // SAFETY (PRECONDITIONS ARE MET): the block came from this allocator with layout
                self.allocator.free(self.ptr, layout);
            }
        }
    }
}
