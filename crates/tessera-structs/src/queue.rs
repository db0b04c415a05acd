// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use tessera_alloc::{RawAllocator, RawBox, provider};
use tessera_container::{Container, Strategy};
use tracing::{debug, warn};

use crate::error::StructError;
use crate::traits::Structure;

struct QueueMeta {
    capacity: usize,
}

/// First-in, first-out queue of fixed-size byte elements.
///
/// A `capacity` of `0` means unbounded. Backed by
/// [`Strategy::LinkedSequence`] unless another strategy is passed to
/// [`create_in`](Self::create_in).
///
/// # Example
///
/// ```rust
/// use tessera_alloc::SYSTEM;
/// use tessera_container::Strategy;
/// use tessera_structs::{Queue, StructError, Structure};
///
/// fn example() -> Result<(), StructError> {
///     let mut queue = Queue::create_in(2, 4, Strategy::LinkedSequence, SYSTEM)?;
///
///     queue.add(&1u32.to_ne_bytes())?;
///     queue.add(&2u32.to_ne_bytes())?;
///     assert_eq!(queue.add(&3u32.to_ne_bytes()), Err(StructError::Full));
///
///     let mut out = [0u8; 4];
///     queue.get(&mut out)?;
///     assert_eq!(u32::from_ne_bytes(out), 1);
///     assert_eq!(queue.size(), 1);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct Queue {
    container: Container,
    meta: RawBox<QueueMeta>,
}

impl Queue {
    /// Creates a queue using the allocator installed in the
    /// [`provider`] slot and the linked-sequence backing.
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
            warn!(capacity, element_size, "queue requested with no allocator installed");
        })?;

        Self::create_in(capacity, element_size, Strategy::LinkedSequence, allocator)
    }

    /// Creates a queue backed by `strategy`, taking memory from `allocator`.
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
        let meta = RawBox::new_in(QueueMeta { capacity }, allocator)?;

        debug!(capacity, element_size, %strategy, "queue created");

        Ok(Self { container, meta })
    }

    /// Releases the queue and everything it holds.
    pub fn delete(self) {
        debug!(
            capacity = self.meta.capacity,
            size = self.container.size(),
            "queue deleted"
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

    /// Enqueues a copy of `element` at the back.
    ///
    /// # Errors
    ///
    /// - [`StructError::Full`] if the queue is bounded and full
    /// - [`StructError::Container`] if the allocator is exhausted
    ///
    /// # Panics
    ///
    /// Panics if `element.len() != element_size`.
    pub fn add(&mut self, element: &[u8]) -> Result<(), StructError> {
        if self.is_full() {
            return Err(StructError::Full);
        }

        self.container.push_back(element)?;

        Ok(())
    }

    /// Dequeues the front element into `out`.
    ///
    /// # Errors
    ///
    /// [`StructError::Empty`] if the queue is empty; `out` is untouched.
    ///
    /// # Panics
    ///
    /// Panics if `out.len() != element_size`.
    pub fn get(&mut self, out: &mut [u8]) -> Result<(), StructError> {
        if self.container.is_empty() {
            return Err(StructError::Empty);
        }

        self.container.pop_front(out)?;

        Ok(())
    }

    /// Copies the front element into `out` without removing it.
    ///
    /// # Errors
    ///
    /// [`StructError::Empty`] if the queue is empty; `out` is untouched.
    ///
    /// # Panics
    ///
    /// Panics if `out.len() != element_size`.
    pub fn peek(&self, out: &mut [u8]) -> Result<(), StructError> {
        if self.container.is_empty() {
            return Err(StructError::Empty);
        }

        self.container.at(out, 0)?;

        Ok(())
    }
}

impl Structure for Queue {
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

impl core::fmt::Debug for Queue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Queue")
            .field("capacity", &self.meta.capacity)
            .field("container", &self.container)
            .finish()
    }
}
