// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Node-per-element backing strategy.

use core::alloc::Layout;
use core::ptr::{self, NonNull};

use tessera_alloc::{AllocError, RawAllocator, bytes_layout};

use crate::error::ContainerError;

/// Links at the start of every node. The element bytes follow at `data_offset`.
struct Links {
    prev: Option<NonNull<Links>>,
    next: Option<NonNull<Links>>,
}

type Link = Option<NonNull<Links>>;

/// Doubly linked chain of nodes, each one block holding links + element bytes.
pub(crate) struct LinkedSequence {
    head: Link,
    tail: Link,
    len: usize,
    element_size: usize,
    node_layout: Layout,
    data_offset: usize,
    allocator: RawAllocator,
}

impl LinkedSequence {
    pub(crate) fn new(
        element_size: usize,
        allocator: RawAllocator,
    ) -> Result<Self, ContainerError> {
        debug_assert!(element_size != 0);

        let (node_layout, data_offset) = Layout::new::<Links>()
            .extend(bytes_layout(element_size, 1)?)
            .map_err(|_| AllocError::LayoutOverflow)?;

        Ok(Self {
            head: None,
            tail: None,
            len: 0,
            element_size,
            node_layout: node_layout.pad_to_align(),
            data_offset,
            allocator,
        })
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    fn data(&self, node: NonNull<Links>) -> *mut u8 {
        // SAFETY (PRECONDITIONS ARE MET): every node block is node_layout bytes and
        // data_offset + element_size <= node_layout.size()
        unsafe { node.cast::<u8>().as_ptr().add(self.data_offset) }
    }

    fn allocate_node(
        &self,
        element: &[u8],
        prev: Link,
        next: Link,
    ) -> Result<NonNull<Links>, ContainerError> {
        let node = self.allocator.allocate(self.node_layout)?.cast::<Links>();

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): node is a fresh block laid out as node_layout
            node.as_ptr().write(Links { prev, next });
            ptr::copy_nonoverlapping(element.as_ptr(), self.data(node), self.element_size);
        }

        Ok(node)
    }

    /// Returns the node block to the allocator, copying its element into `out` first.
    ///
    /// # Safety
    ///
    /// `node` must be unlinked from the chain and owned by this sequence.
    unsafe fn release_node(&self, node: NonNull<Links>, out: Option<&mut [u8]>) {
        if let Some(out) = out {
            unsafe {
                // SAFETY (PRECONDITIONS ARE MET): node holds element_size initialized bytes
                ptr::copy_nonoverlapping(self.data(node), out.as_mut_ptr(), self.element_size);
            }
        }

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): node came from this allocator with node_layout
            // and is not referenced by the chain anymore
            self.allocator.free(node.cast(), self.node_layout);
        }
    }

    pub(crate) fn push_back(&mut self, element: &[u8]) -> Result<(), ContainerError> {
        let node = self.allocate_node(element, self.tail, None)?;

        match self.tail {
            // SAFETY (PRECONDITIONS ARE MET): tail is a live node owned by self
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }

        self.tail = Some(node);
        self.len += 1;

        Ok(())
    }

    pub(crate) fn push_front(&mut self, element: &[u8]) -> Result<(), ContainerError> {
        let node = self.allocate_node(element, None, self.head)?;

        match self.head {
            // SAFETY (PRECONDITIONS ARE MET): head is a live node owned by self
            Some(mut head) => unsafe { head.as_mut().prev = Some(node) },
            None => self.tail = Some(node),
        }

        self.head = Some(node);
        self.len += 1;

        Ok(())
    }

    pub(crate) fn pop_front(&mut self, out: &mut [u8]) -> Result<(), ContainerError> {
        let node = self.head.ok_or(ContainerError::Empty)?;

        // SAFETY (PRECONDITIONS ARE MET): head is a live node owned by self
        let next = unsafe { node.as_ref().next };

        match next {
            // SAFETY (PRECONDITIONS ARE MET): next is a live node owned by self
            Some(mut next) => unsafe { next.as_mut().prev = None },
            None => self.tail = None,
        }

        self.head = next;
        self.len -= 1;

        // SAFETY (PRECONDITIONS ARE MET): node was just unlinked
        unsafe { self.release_node(node, Some(out)) };

        Ok(())
    }

    pub(crate) fn pop_back(&mut self, out: &mut [u8]) -> Result<(), ContainerError> {
        let node = self.tail.ok_or(ContainerError::Empty)?;

        // SAFETY (PRECONDITIONS ARE MET): tail is a live node owned by self
        let prev = unsafe { node.as_ref().prev };

        match prev {
            // SAFETY (PRECONDITIONS ARE MET): prev is a live node owned by self
            Some(mut prev) => unsafe { prev.as_mut().next = None },
            None => self.head = None,
        }

        self.tail = prev;
        self.len -= 1;

        // SAFETY (PRECONDITIONS ARE MET): node was just unlinked
        unsafe { self.release_node(node, Some(out)) };

        Ok(())
    }

    /// Walks to node `index` from whichever end is closer.
    fn node_at(&self, index: usize) -> Result<NonNull<Links>, ContainerError> {
        if index >= self.len {
            return Err(ContainerError::OutOfBounds {
                index,
                size: self.len,
            });
        }

        let mut cursor;

        if index < self.len / 2 {
            cursor = self.head;
            for _ in 0..index {
                // SAFETY (PRECONDITIONS ARE MET): index < len, so every hop lands on a live node
                cursor = cursor.and_then(|node| unsafe { node.as_ref().next });
            }
        } else {
            cursor = self.tail;
            for _ in 0..(self.len - 1 - index) {
                // SAFETY (PRECONDITIONS ARE MET): index < len, so every hop lands on a live node
                cursor = cursor.and_then(|node| unsafe { node.as_ref().prev });
            }
        }

        cursor.ok_or(ContainerError::OutOfBounds {
            index,
            size: self.len,
        })
    }

    pub(crate) fn at(&self, out: &mut [u8], index: usize) -> Result<(), ContainerError> {
        let node = self.node_at(index)?;

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): node is live and holds element_size bytes
            ptr::copy_nonoverlapping(self.data(node), out.as_mut_ptr(), self.element_size);
        }

        Ok(())
    }

    pub(crate) fn replace(&mut self, element: &[u8], index: usize) -> Result<(), ContainerError> {
        let node = self.node_at(index)?;

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): node is live and holds element_size bytes
            ptr::copy_nonoverlapping(element.as_ptr(), self.data(node), self.element_size);
        }

        Ok(())
    }

    /// Frees every node.
    pub(crate) fn clear(&mut self) {
        let mut cursor = self.head.take();
        self.tail = None;
        self.len = 0;

        while let Some(node) = cursor {
            // SAFETY (PRECONDITIONS ARE MET): node is live; the chain was detached above
            cursor = unsafe { node.as_ref().next };
            // SAFETY (PRECONDITIONS ARE MET): node is no longer reachable from self
            unsafe { self.release_node(node, None) };
        }
    }
}

impl Drop for LinkedSequence {
    fn drop(&mut self) {
        self.clear();
    }
}
