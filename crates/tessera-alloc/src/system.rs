// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Capability over the global allocator.
//!
//! Only available with the `system-allocator` feature, for targets that do
//! have a `#[global_allocator]`.

extern crate alloc;

use core::alloc::Layout;
use core::ptr::NonNull;

use crate::allocator::RawAllocator;

/// Capability that forwards to the global allocator.
pub static SYSTEM: RawAllocator = RawAllocator::new(system_allocate, system_free);

fn system_allocate(layout: Layout) -> Option<NonNull<u8>> {
    // SAFETY (PRECONDITIONS ARE MET): RawAllocator never forwards zero-sized layouts
    NonNull::new(unsafe { alloc::alloc::alloc(layout) })
}

unsafe fn system_free(ptr: NonNull<u8>, layout: Layout) {
    // SAFETY (PRECONDITIONS ARE MET): ptr was returned by system_allocate for layout
    unsafe { alloc::alloc::dealloc(ptr.as_ptr(), layout) }
}
