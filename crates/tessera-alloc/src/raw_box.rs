// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;
use core::marker::PhantomData;
use core::ops::{Deref, DerefMut};
use core::ptr::NonNull;

use crate::allocator::RawAllocator;
use crate::error::AllocError;

/// A single owned value living in a block from a [`RawAllocator`].
///
/// The `Box` of the tessera stack: the value is dropped and its block is
/// returned to the same capability when the `RawBox` goes out of scope.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "system-allocator")]
/// # {
/// use tessera_alloc::{RawBox, SYSTEM};
///
/// let mut cursor = RawBox::new_in(0usize, SYSTEM).expect("allocation failed");
/// *cursor += 1;
/// assert_eq!(*cursor, 1);
/// # }
/// ```
pub struct RawBox<T> {
    ptr: NonNull<T>,
    allocator: RawAllocator,
    _owns: PhantomData<T>,
}

impl<T> RawBox<T> {
    /// Moves `value` into a block obtained from `allocator`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError::OutOfMemory`] if the allocation fails. `value`
    /// is dropped in that case.
    pub fn new_in(value: T, allocator: RawAllocator) -> Result<Self, AllocError> {
        let ptr = allocator.allocate(Layout::new::<T>())?.cast::<T>();

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): ptr is a fresh block sized and aligned for T
            ptr.as_ptr().write(value);
        }

        Ok(Self {
            ptr,
            allocator,
            _owns: PhantomData,
        })
    }

    /// Returns the capability this value was allocated from.
    #[inline]
    pub fn allocator(&self) -> RawAllocator {
        self.allocator
    }

    /// Moves the value out, returning its block to the allocator.
    pub fn into_inner(self) -> T {
        let this = core::mem::ManuallyDrop::new(self);

        // SAFETY (PRECONDITIONS ARE MET): ptr holds an initialized T that is
        // read exactly once; `this` is never dropped so the value is not dropped twice
        let value = unsafe { this.ptr.as_ptr().read() };

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): block came from this allocator with
            // Layout::new::<T>()
            this.allocator.free(this.ptr.cast(), Layout::new::<T>());
        }

        value
    }
}

impl<T> Deref for RawBox<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        // SAFETY (PRECONDITIONS ARE MET): ptr holds an initialized T owned by self
        unsafe { self.ptr.as_ref() }
    }
}

impl<T> DerefMut for RawBox<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY (PRECONDITIONS ARE MET): ptr holds an initialized T uniquely owned by self
        unsafe { self.ptr.as_mut() }
    }
}

impl<T> Drop for RawBox<T> {
    fn drop(&mut self) {
        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): ptr holds an initialized T that is dropped once,
            // and the block came from this allocator with Layout::new::<T>()
            core::ptr::drop_in_place(self.ptr.as_ptr());
            self.allocator.free(self.ptr.cast(), Layout::new::<T>());
        }
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for RawBox<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("RawBox").field(&**self).finish()
    }
}
