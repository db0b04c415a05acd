// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use tessera_alloc::{RawAllocator, RawBox, bytes_layout, provider};
use tessera_container::{Container, ContainerError, Strategy};
use tracing::{debug, warn};

use crate::error::StructError;
use crate::traits::Structure;

#[derive(Clone, Copy)]
struct Cursors {
    head: usize,
    tail: usize,
    max_size: usize,
}

/// Fixed-slot circular buffer of byte elements.
///
/// `max_size` slots are allocated up front and zero-filled. One slot is
/// always kept free to tell full from empty, so at most `max_size - 1`
/// elements are stored at once.
///
/// - `head`: next slot to write
/// - `tail`: next slot to read
///
/// ```text
///   tail        head
///    v           v
/// [  a  |  b  |     |     ]   size = (head + max_size - tail) % max_size = 2
/// ```
///
/// # Example
///
/// ```rust
/// use tessera_alloc::SYSTEM;
/// use tessera_container::Strategy;
/// use tessera_structs::{RingBuffer, StructError, Structure};
///
/// fn example() -> Result<(), StructError> {
///     let mut ring = RingBuffer::create_in(3, 1, Strategy::DynamicArray, SYSTEM)?;
///
///     ring.add(&[1])?;
///     ring.add(&[2])?;
///     assert!(ring.is_full());
///     assert_eq!(ring.add(&[3]), Err(StructError::Full));
///
///     let mut out = [0u8; 1];
///     ring.get(&mut out)?;
///     assert_eq!(out, [1]);
///
///     // Wraps around
///     ring.add(&[3])?;
///     assert_eq!(ring.size(), 2);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct RingBuffer {
    container: Container,
    cursors: RawBox<Cursors>,
}

impl RingBuffer {
    /// Creates a ring buffer using the allocator installed in the
    /// [`provider`] slot and the dynamic-array backing.
    ///
    /// # Errors
    ///
    /// [`StructError::Container`] if no allocator is installed or an
    /// allocation fails.
    ///
    /// # Panics
    ///
    /// Panics if `max_size == 0` or `element_size == 0`.
    pub fn create(max_size: usize, element_size: usize) -> Result<Self, StructError> {
        assert_ne!(max_size, 0, "max_size must be non-zero");
        assert_ne!(element_size, 0, "element_size must be non-zero");

        let allocator = provider::require().inspect_err(|_| {
            warn!(max_size, element_size, "ring buffer requested with no allocator installed");
        })?;

        Self::create_in(max_size, element_size, Strategy::DynamicArray, allocator)
    }

    /// Creates a ring buffer backed by `strategy`, taking memory from
    /// `allocator`.
    ///
    /// # Errors
    ///
    /// [`StructError::Container`] if any allocation fails, including the
    /// zero-fill of the slots. Nothing acquired so far is leaked.
    ///
    /// # Panics
    ///
    /// Panics if `max_size == 0` or `element_size == 0`.
    pub fn create_in(
        max_size: usize,
        element_size: usize,
        strategy: Strategy,
        allocator: RawAllocator,
    ) -> Result<Self, StructError> {
        assert_ne!(max_size, 0, "max_size must be non-zero");
        assert_ne!(element_size, 0, "element_size must be non-zero");

        let mut container =
            Container::with_capacity_in(element_size, strategy, max_size, allocator)?;
        let cursors = RawBox::new_in(
            Cursors {
                head: 0,
                tail: 0,
                max_size,
            },
            allocator,
        )?;

        zero_fill(&mut container, max_size, allocator)?;

        debug!(max_size, element_size, %strategy, "ring buffer created");

        Ok(Self { container, cursors })
    }

    /// Releases the ring buffer and every slot.
    pub fn delete(self) {
        debug!(
            max_size = self.cursors.max_size,
            size = self.size(),
            "ring buffer deleted"
        );
    }

    /// Returns the slot count given at construction.
    #[inline]
    pub fn max_size(&self) -> usize {
        self.cursors.max_size
    }

    /// Returns how many elements fit at once (`max_size - 1`).
    #[inline]
    pub fn usable_capacity(&self) -> usize {
        self.cursors.max_size - 1
    }

    /// Returns the backing strategy.
    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.container.strategy()
    }

    /// Writes `element` into the head slot and advances head.
    ///
    /// # Errors
    ///
    /// [`StructError::Full`] if `max_size - 1` elements are stored.
    ///
    /// # Panics
    ///
    /// Panics if `element.len() != element_size`.
    pub fn add(&mut self, element: &[u8]) -> Result<(), StructError> {
        if self.is_full() {
            return Err(StructError::Full);
        }

        self.container.replace(element, self.cursors.head)?;
        self.cursors.head = (self.cursors.head + 1) % self.cursors.max_size;

        Ok(())
    }

    /// Copies the tail slot into `out` and advances tail.
    ///
    /// # Errors
    ///
    /// [`StructError::Empty`] if nothing is stored; `out` is untouched.
    ///
    /// # Panics
    ///
    /// Panics if `out.len() != element_size`.
    pub fn get(&mut self, out: &mut [u8]) -> Result<(), StructError> {
        self.peek(out)?;
        self.cursors.tail = (self.cursors.tail + 1) % self.cursors.max_size;

        Ok(())
    }

    /// Copies the tail slot into `out` without advancing.
    ///
    /// # Errors
    ///
    /// [`StructError::Empty`] if nothing is stored; `out` is untouched.
    ///
    /// # Panics
    ///
    /// Panics if `out.len() != element_size`.
    pub fn peek(&self, out: &mut [u8]) -> Result<(), StructError> {
        if self.is_empty() {
            return Err(StructError::Empty);
        }

        self.container.at(out, self.cursors.tail)?;

        Ok(())
    }
}

/// Appends `count` zeroed elements, using one zeroed scratch element taken
/// from `allocator` and returned before leaving.
fn zero_fill(
    container: &mut Container,
    count: usize,
    allocator: RawAllocator,
) -> Result<(), ContainerError> {
    let element_size = container.element_size();
    let layout = bytes_layout(element_size, 1)?;
    let scratch = allocator.allocate_zeroed(layout)?;

    // SAFETY (PRECONDITIONS ARE MET): scratch is a fresh zeroed block of element_size bytes
    let zeroed = unsafe { core::slice::from_raw_parts(scratch.as_ptr(), element_size) };

    let result = (0..count).try_for_each(|_| container.push_back(zeroed));

    unsafe {
        // SAFETY (PRECONDITIONS ARE MET): scratch came from allocator with layout and
        // `zeroed` is not used past this point
        allocator.free(scratch, layout);
    }

    result
}

impl Structure for RingBuffer {
    #[inline]
    fn size(&self) -> usize {
        let Cursors {
            head,
            tail,
            max_size,
        } = *self.cursors;

        (head + max_size - tail) % max_size
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.cursors.head == self.cursors.tail
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.size() == self.cursors.max_size - 1
    }

    /// Resets both cursors. Slot contents are left as they are.
    fn clear(&mut self) {
        self.cursors.head = 0;
        self.cursors.tail = 0;
    }

    #[inline]
    fn element_size(&self) -> usize {
        self.container.element_size()
    }
}

impl core::fmt::Debug for RingBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RingBuffer")
            .field("head", &self.cursors.head)
            .field("tail", &self.cursors.tail)
            .field("max_size", &self.cursors.max_size)
            .field("container", &self.container)
            .finish()
    }
}
