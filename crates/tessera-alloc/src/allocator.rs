// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;
use core::ptr::NonNull;

use tracing::warn;

use crate::error::AllocError;

/// Allocation function: returns a block fitting `layout`, or `None` when exhausted.
///
/// Implementations are only ever called with a non-zero `layout.size()`.
pub type AllocateFn = fn(Layout) -> Option<NonNull<u8>>;

/// Deallocation function matching an [`AllocateFn`].
///
/// # Safety
///
/// `ptr` must have been returned by the paired [`AllocateFn`] for the same
/// `layout`, and must not be used after this call.
pub type FreeFn = unsafe fn(NonNull<u8>, Layout);

/// Capability record for raw memory: an allocate function and its matching free.
///
/// The record is two function pointers and therefore `Copy`. Containers keep
/// their own copy from the moment they are built, so swapping the provider
/// slot never strands memory that is already allocated.
#[derive(Clone, Copy)]
pub struct RawAllocator {
    allocate: AllocateFn,
    free: FreeFn,
}

impl core::fmt::Debug for RawAllocator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RawAllocator")
            .field("allocate", &(self.allocate as *const ()))
            .field("free", &(self.free as *const ()))
            .finish()
    }
}

impl PartialEq for RawAllocator {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::fn_addr_eq(self.allocate, other.allocate)
            && core::ptr::fn_addr_eq(self.free, other.free)
    }
}

impl Eq for RawAllocator {}

impl RawAllocator {
    /// Builds a capability from an allocate/free pair.
    pub const fn new(allocate: AllocateFn, free: FreeFn) -> Self {
        Self { allocate, free }
    }

    /// Returns the raw allocation function.
    #[inline]
    pub fn allocate_fn(&self) -> AllocateFn {
        self.allocate
    }

    /// Returns the raw deallocation function.
    #[inline]
    pub fn free_fn(&self) -> FreeFn {
        self.free
    }

    /// Allocates a block for `layout`.
    ///
    /// Zero-sized layouts never reach the allocate function: they get a
    /// dangling, well-aligned pointer that [`free`](Self::free) ignores.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError::OutOfMemory`] if the allocate function returns `None`.
    pub fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        if layout.size() == 0 {
            return Ok(dangling(layout));
        }

        match (self.allocate)(layout) {
            Some(ptr) => Ok(ptr),
            None => {
                warn!(
                    size = layout.size(),
                    align = layout.align(),
                    "allocation failed"
                );
                Err(AllocError::OutOfMemory {
                    size: layout.size(),
                    align: layout.align(),
                })
            }
        }
    }

    /// Allocates a block for `layout` and fills it with zeroes.
    ///
    /// # Errors
    ///
    /// Same as [`allocate`](Self::allocate).
    pub fn allocate_zeroed(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        let ptr = self.allocate(layout)?;

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): ptr is valid for layout.size() writes
            core::ptr::write_bytes(ptr.as_ptr(), 0, layout.size());
        }

        Ok(ptr)
    }

    /// Returns a block to the allocator.
    ///
    /// # Safety
    ///
    /// `ptr` must come from [`allocate`](Self::allocate) (or one of its
    /// variants) on a capability with the same free function, with the same
    /// `layout`, and must not be used afterwards.
    pub unsafe fn free(&self, ptr: NonNull<u8>, layout: Layout) {
        if layout.size() == 0 {
            return;
        }

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): forwarded from this function's contract
            (self.free)(ptr, layout)
        }
    }
}

/// Layout of a packed run of `count` byte elements of `element_size` bytes.
///
/// # Errors
///
/// Returns [`AllocError::LayoutOverflow`] if `element_size * count` overflows.
pub fn bytes_layout(element_size: usize, count: usize) -> Result<Layout, AllocError> {
    let size = element_size
        .checked_mul(count)
        .ok_or(AllocError::LayoutOverflow)?;

    Layout::from_size_align(size, 1).map_err(|_| AllocError::LayoutOverflow)
}

fn dangling(layout: Layout) -> NonNull<u8> {
    // SAFETY (PRECONDITIONS ARE MET): Layout guarantees align is a non-zero power of two
    unsafe { NonNull::new_unchecked(core::ptr::without_provenance_mut(layout.align())) }
}
