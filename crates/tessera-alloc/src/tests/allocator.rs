// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;
use core::ptr::NonNull;

use crate::error::AllocError;
#[cfg(feature = "system-allocator")]
use crate::support::test_utils::{MockAllocator, MockAllocatorBehaviour};
use crate::{RawAllocator, bytes_layout};
#[cfg(feature = "system-allocator")]
use crate::SYSTEM;

fn refuse(_layout: Layout) -> Option<NonNull<u8>> {
    None
}

unsafe fn unreachable_free(_ptr: NonNull<u8>, _layout: Layout) {
    panic!("free must not be called");
}

// =============================================================================
// allocate()
// =============================================================================

#[test]
#[cfg(feature = "system-allocator")]
fn test_allocate_returns_writable_block() {
    let layout = Layout::new::<[u32; 4]>();
    let ptr = SYSTEM.allocate(layout).expect("Failed to allocate(..)");

    unsafe {
        ptr.cast::<[u32; 4]>().as_ptr().write([1, 2, 3, 4]);
        assert_eq!(ptr.cast::<[u32; 4]>().as_ptr().read(), [1, 2, 3, 4]);
        SYSTEM.free(ptr, layout);
    }
}

#[test]
fn test_allocate_reports_out_of_memory() {
    let allocator = RawAllocator::new(refuse, unreachable_free);
    let layout = Layout::from_size_align(24, 8).expect("Failed to build layout");

    assert_eq!(
        allocator.allocate(layout),
        Err(AllocError::OutOfMemory { size: 24, align: 8 })
    );
}

#[test]
fn test_allocate_zero_sized_skips_allocate_fn() {
    let allocator = RawAllocator::new(refuse, unreachable_free);
    let layout = Layout::new::<()>();

    let ptr = allocator
        .allocate(layout)
        .expect("Zero-sized allocation must not reach the allocate fn");

    assert_eq!(ptr.as_ptr() as usize % layout.align(), 0);

    // Zero-sized free is a no-op as well
    unsafe { allocator.free(ptr, layout) };
}

// =============================================================================
// allocate_zeroed()
// =============================================================================

#[test]
#[cfg(feature = "system-allocator")]
fn test_allocate_zeroed() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::None);
    let allocator = mock.allocator();
    let layout = Layout::from_size_align(64, 1).expect("Failed to build layout");

    let ptr = allocator
        .allocate_zeroed(layout)
        .expect("Failed to allocate_zeroed(..)");

    let bytes = unsafe { core::slice::from_raw_parts(ptr.as_ptr(), 64) };
    assert!(bytes.iter().all(|b| *b == 0));

    unsafe { allocator.free(ptr, layout) };
    assert_eq!(mock.live_blocks(), 0);
}

#[test]
#[cfg(feature = "system-allocator")]
fn test_allocate_zeroed_propagates_failure() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::FailAlways);
    let layout = Layout::new::<u64>();

    assert!(matches!(
        mock.allocator().allocate_zeroed(layout),
        Err(AllocError::OutOfMemory { .. })
    ));
}

// =============================================================================
// bytes_layout()
// =============================================================================

#[test]
fn test_bytes_layout() {
    let layout = bytes_layout(4, 10).expect("Failed to bytes_layout(..)");

    assert_eq!(layout.size(), 40);
    assert_eq!(layout.align(), 1);
}

#[test]
fn test_bytes_layout_overflow() {
    assert_eq!(bytes_layout(usize::MAX, 2), Err(AllocError::LayoutOverflow));
    assert_eq!(bytes_layout(usize::MAX, 1), Err(AllocError::LayoutOverflow));
}

// =============================================================================
// PartialEq / Debug
// =============================================================================

#[test]
#[cfg(feature = "system-allocator")]
fn test_eq_compares_both_fns() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::None);
    let refusing = RawAllocator::new(refuse, unreachable_free);

    assert_eq!(SYSTEM, SYSTEM);
    assert_ne!(SYSTEM, mock.allocator());
    assert_ne!(SYSTEM, refusing);
}

#[test]
fn test_eq_same_fns() {
    let a = RawAllocator::new(refuse, unreachable_free);
    let b = RawAllocator::new(refuse, unreachable_free);

    assert_eq!(a, b);
}

#[test]
fn test_debug_names_fields() {
    let refusing = RawAllocator::new(refuse, unreachable_free);
    let debug = format!("{:?}", refusing);

    assert!(debug.contains("RawAllocator"));
    assert!(debug.contains("allocate"));
    assert!(debug.contains("free"));
}
