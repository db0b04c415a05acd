// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use tessera_alloc::{RawAllocator, provider};
use tracing::{debug, warn};

use crate::dynamic_array::DynamicArray;
use crate::error::ContainerError;
use crate::linked_sequence::LinkedSequence;
use crate::strategy::Strategy;

enum Storage {
    Array(DynamicArray),
    Linked(LinkedSequence),
}

/// Uniform storage engine over fixed-size byte elements.
///
/// Every element stored and retrieved is exactly [`element_size`](Self::element_size)
/// bytes; the container never looks at their contents. The backing
/// [`Strategy`] is chosen once at construction and only shows through the
/// cost of each operation.
///
/// # Contracts
///
/// Element and output slices must be exactly `element_size` bytes long.
/// A slice of any other length is a programmer error and panics.
///
/// Runtime conditions (empty, out of bounds, allocation failure) are
/// returned as [`ContainerError`]. On every error path the container is left
/// unchanged and output slices are not written.
///
/// # Example
///
/// ```rust
/// use tessera_alloc::SYSTEM;
/// use tessera_container::{Container, ContainerError, Strategy};
///
/// fn example() -> Result<(), ContainerError> {
///     let mut container = Container::create_in(4, Strategy::LinkedSequence, SYSTEM)?;
///
///     container.push_back(&1u32.to_ne_bytes())?;
///     container.push_back(&2u32.to_ne_bytes())?;
///
///     let mut out = [0u8; 4];
///     container.pop_front(&mut out)?;
///     assert_eq!(u32::from_ne_bytes(out), 1);
///
///     assert!(container.at(&mut out, 5).is_err());
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct Container {
    element_size: usize,
    storage: Storage,
}

impl core::fmt::Debug for Container {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Container")
            .field("strategy", &self.strategy())
            .field("element_size", &self.element_size)
            .field("size", &self.size())
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}

impl Container {
    /// Creates an empty container using the allocator installed in the
    /// [`provider`] slot.
    ///
    /// # Errors
    ///
    /// - [`ContainerError::ZeroElementSize`] if `element_size == 0`
    /// - [`ContainerError::Alloc`] if no allocator is installed
    pub fn create(element_size: usize, strategy: Strategy) -> Result<Self, ContainerError> {
        Self::create_with_capacity(element_size, strategy, 0)
    }

    /// Creates an empty container with room for `capacity` elements, using
    /// the allocator installed in the [`provider`] slot.
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create), plus [`ContainerError::Alloc`] if
    /// the initial block cannot be allocated.
    pub fn create_with_capacity(
        element_size: usize,
        strategy: Strategy,
        capacity: usize,
    ) -> Result<Self, ContainerError> {
        if element_size == 0 {
            return Err(ContainerError::ZeroElementSize);
        }

        let allocator = provider::require().inspect_err(|_| {
            warn!(element_size, %strategy, "container requested with no allocator installed");
        })?;

        Self::with_capacity_in(element_size, strategy, capacity, allocator)
    }

    /// Creates an empty container backed by `allocator`.
    ///
    /// # Errors
    ///
    /// [`ContainerError::ZeroElementSize`] if `element_size == 0`.
    pub fn create_in(
        element_size: usize,
        strategy: Strategy,
        allocator: RawAllocator,
    ) -> Result<Self, ContainerError> {
        Self::with_capacity_in(element_size, strategy, 0, allocator)
    }

    /// Creates an empty container backed by `allocator`, with room for
    /// `capacity` elements.
    ///
    /// For [`Strategy::LinkedSequence`] nodes are allocated per element, so
    /// `capacity` is only a hint and nothing is allocated up front.
    ///
    /// # Errors
    ///
    /// - [`ContainerError::ZeroElementSize`] if `element_size == 0`
    /// - [`ContainerError::Alloc`] if the initial block cannot be allocated
    pub fn with_capacity_in(
        element_size: usize,
        strategy: Strategy,
        capacity: usize,
        allocator: RawAllocator,
    ) -> Result<Self, ContainerError> {
        if element_size == 0 {
            return Err(ContainerError::ZeroElementSize);
        }

        let storage = match strategy {
            Strategy::DynamicArray => Storage::Array(DynamicArray::with_capacity(
                element_size,
                capacity,
                allocator,
            )?),
            Strategy::LinkedSequence => {
                Storage::Linked(LinkedSequence::new(element_size, allocator)?)
            }
        };

        debug!(element_size, %strategy, capacity, "container created");

        Ok(Self {
            element_size,
            storage,
        })
    }

    /// Releases every element and the container itself.
    ///
    /// Equivalent to dropping the container; the moved-out binding cannot
    /// be used afterwards.
    pub fn delete(self) {
        debug!(
            element_size = self.element_size,
            strategy = %self.strategy(),
            size = self.size(),
            "container deleted"
        );
    }

    /// Returns the backing strategy chosen at construction.
    #[inline]
    pub fn strategy(&self) -> Strategy {
        match self.storage {
            Storage::Array(_) => Strategy::DynamicArray,
            Storage::Linked(_) => Strategy::LinkedSequence,
        }
    }

    /// Returns the size in bytes of one element.
    #[inline]
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Returns the number of stored elements. O(1) for both strategies.
    #[inline]
    pub fn size(&self) -> usize {
        match &self.storage {
            Storage::Array(array) => array.len(),
            Storage::Linked(linked) => linked.len(),
        }
    }

    /// Returns `true` if the container holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns the number of elements that fit without allocating.
    ///
    /// Always equal to [`size`](Self::size) for [`Strategy::LinkedSequence`].
    #[inline]
    pub fn capacity(&self) -> usize {
        match &self.storage {
            Storage::Array(array) => array.capacity(),
            Storage::Linked(linked) => linked.len(),
        }
    }

    /// Makes room for at least `additional` more elements.
    ///
    /// A no-op for [`Strategy::LinkedSequence`].
    ///
    /// # Errors
    ///
    /// [`ContainerError::Alloc`] if growth fails; the container is unchanged.
    pub fn reserve(&mut self, additional: usize) -> Result<(), ContainerError> {
        match &mut self.storage {
            Storage::Array(array) => array.reserve(additional),
            Storage::Linked(_) => Ok(()),
        }
    }

    /// Appends a copy of `element` at the end.
    ///
    /// # Errors
    ///
    /// [`ContainerError::Alloc`] if the allocator is exhausted.
    ///
    /// # Panics
    ///
    /// Panics if `element.len() != element_size`.
    pub fn push_back(&mut self, element: &[u8]) -> Result<(), ContainerError> {
        self.assert_element(element);

        match &mut self.storage {
            Storage::Array(array) => array.push_back(element),
            Storage::Linked(linked) => linked.push_back(element),
        }
    }

    /// Prepends a copy of `element` at the front.
    ///
    /// # Errors
    ///
    /// [`ContainerError::Alloc`] if the allocator is exhausted.
    ///
    /// # Panics
    ///
    /// Panics if `element.len() != element_size`.
    pub fn push_front(&mut self, element: &[u8]) -> Result<(), ContainerError> {
        self.assert_element(element);

        match &mut self.storage {
            Storage::Array(array) => array.push_front(element),
            Storage::Linked(linked) => linked.push_front(element),
        }
    }

    /// Removes the first element and copies it into `out`.
    ///
    /// # Errors
    ///
    /// [`ContainerError::Empty`] if there is nothing to remove.
    ///
    /// # Panics
    ///
    /// Panics if `out.len() != element_size`.
    pub fn pop_front(&mut self, out: &mut [u8]) -> Result<(), ContainerError> {
        self.assert_out(out);

        match &mut self.storage {
            Storage::Array(array) => array.pop_front(out),
            Storage::Linked(linked) => linked.pop_front(out),
        }
    }

    /// Removes the last element and copies it into `out`.
    ///
    /// # Errors
    ///
    /// [`ContainerError::Empty`] if there is nothing to remove.
    ///
    /// # Panics
    ///
    /// Panics if `out.len() != element_size`.
    pub fn pop_back(&mut self, out: &mut [u8]) -> Result<(), ContainerError> {
        self.assert_out(out);

        match &mut self.storage {
            Storage::Array(array) => array.pop_back(out),
            Storage::Linked(linked) => linked.pop_back(out),
        }
    }

    /// Copies the element at `index` into `out` without removing it.
    ///
    /// # Errors
    ///
    /// [`ContainerError::OutOfBounds`] if `index >= size()`.
    ///
    /// # Panics
    ///
    /// Panics if `out.len() != element_size`.
    pub fn at(&self, out: &mut [u8], index: usize) -> Result<(), ContainerError> {
        self.assert_out(out);

        match &self.storage {
            Storage::Array(array) => array.at(out, index),
            Storage::Linked(linked) => linked.at(out, index),
        }
    }

    /// Overwrites the element at `index` in place.
    ///
    /// # Errors
    ///
    /// [`ContainerError::OutOfBounds`] if `index >= size()`.
    ///
    /// # Panics
    ///
    /// Panics if `element.len() != element_size`.
    pub fn replace(&mut self, element: &[u8], index: usize) -> Result<(), ContainerError> {
        self.assert_element(element);

        match &mut self.storage {
            Storage::Array(array) => array.replace(element, index),
            Storage::Linked(linked) => linked.replace(element, index),
        }
    }

    /// Drops every element.
    ///
    /// [`Strategy::DynamicArray`] keeps its block for reuse;
    /// [`Strategy::LinkedSequence`] frees every node.
    pub fn clear(&mut self) {
        match &mut self.storage {
            Storage::Array(array) => array.clear(),
            Storage::Linked(linked) => linked.clear(),
        }
    }

    #[inline(always)]
    fn assert_element(&self, element: &[u8]) {
        assert_eq!(
            element.len(),
            self.element_size,
            "element must be exactly element_size bytes"
        );
    }

    #[inline(always)]
    fn assert_out(&self, out: &[u8]) {
        assert_eq!(
            out.len(),
            self.element_size,
            "output buffer must be exactly element_size bytes"
        );
    }
}
