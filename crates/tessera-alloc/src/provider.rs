// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Process-wide allocator provider slot.
//!
//! The slot starts empty. [`install`] puts a `'static` capability into it and
//! [`uninstall`] empties it again. Constructors that are not given an
//! explicit [`RawAllocator`] read the slot through [`current`] and fail with
//! [`AllocError::NotInstalled`] while it is empty.
//!
//! The slot is a single atomic pointer, so probing and swapping are race
//! free. Containers copy the capability when they are built; swapping the
//! slot later does not affect them.

use core::ptr;
use core::sync::atomic::{AtomicPtr, Ordering};

use tracing::info;

use crate::allocator::{AllocateFn, FreeFn, RawAllocator};
use crate::error::AllocError;

static PROVIDER: AtomicPtr<RawAllocator> = AtomicPtr::new(ptr::null_mut());

/// Installs `allocator` in the provider slot, returning the one it replaced.
pub fn install(allocator: &'static RawAllocator) -> Option<RawAllocator> {
    let previous = PROVIDER.swap(ptr::from_ref(allocator).cast_mut(), Ordering::AcqRel);
    info!(?allocator, "allocator installed");

    load(previous)
}

/// Empties the provider slot, returning the capability that was installed.
pub fn uninstall() -> Option<RawAllocator> {
    let previous = PROVIDER.swap(ptr::null_mut(), Ordering::AcqRel);
    info!("allocator uninstalled");

    load(previous)
}

/// Returns `true` if a capability is currently installed.
#[inline]
pub fn is_allocator_valid() -> bool {
    !PROVIDER.load(Ordering::Acquire).is_null()
}

/// Returns a copy of the installed capability.
#[inline]
pub fn current() -> Option<RawAllocator> {
    load(PROVIDER.load(Ordering::Acquire))
}

/// Returns a copy of the installed capability, or [`AllocError::NotInstalled`].
///
/// # Errors
///
/// Returns [`AllocError::NotInstalled`] when the slot is empty.
pub fn require() -> Result<RawAllocator, AllocError> {
    current().ok_or(AllocError::NotInstalled)
}

/// Returns the installed allocation function.
pub fn get_allocator() -> Option<AllocateFn> {
    current().map(|allocator| allocator.allocate_fn())
}

/// Returns the installed deallocation function.
pub fn get_free() -> Option<FreeFn> {
    current().map(|allocator| allocator.free_fn())
}

fn load(slot: *mut RawAllocator) -> Option<RawAllocator> {
    if slot.is_null() {
        return None;
    }

    // SAFETY (PRECONDITIONS ARE MET): the slot only ever holds null or a pointer
    // derived from a `&'static RawAllocator` in `install`
    Some(unsafe { *slot })
}
