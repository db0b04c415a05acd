// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use tessera_alloc::test_utils::{MockAllocator, MockAllocatorBehaviour};
use tessera_alloc::{AllocError, SYSTEM};

use super::utils::{bytes, value};
use crate::dynamic_array::DynamicArray;
use crate::error::ContainerError;

// =============================================================================
// new() / with_capacity()
// =============================================================================

#[test]
fn test_new_allocates_nothing() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::FailAlways);
    let array = DynamicArray::new(4, mock.allocator());

    assert_eq!(array.len(), 0);
    assert_eq!(array.capacity(), 0);
    assert_eq!(mock.allocate_calls(), 0);

    drop(array);
    assert_eq!(mock.frees(), 0);
}

#[test]
fn test_with_capacity_is_exact() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::None);
    let array = DynamicArray::with_capacity(4, 5, mock.allocator())
        .expect("Failed to DynamicArray::with_capacity(..)");

    assert_eq!(array.capacity(), 5);
    assert_eq!(mock.live_bytes(), 20);
}

// =============================================================================
// push_back() growth
// =============================================================================

#[test]
fn test_push_back_grows_to_power_of_2() {
    let mut array = DynamicArray::new(4, SYSTEM);

    // 0 → 1
    array.push_back(&bytes(1)).expect("Failed to push_back(..) (#1)");
    assert_eq!(array.capacity(), 1);

    // 1 → 2
    array.push_back(&bytes(2)).expect("Failed to push_back(..) (#2)");
    assert_eq!(array.capacity(), 2);

    // 2 → 4
    array.push_back(&bytes(3)).expect("Failed to push_back(..) (#3)");
    assert_eq!(array.capacity(), 4);

    // stays at 4
    array.push_back(&bytes(4)).expect("Failed to push_back(..) (#4)");
    assert_eq!(array.capacity(), 4);

    // 4 → 8
    array.push_back(&bytes(5)).expect("Failed to push_back(..) (#5)");
    assert_eq!(array.capacity(), 8);

    let mut out = [0u8; 4];
    for (index, expected) in (1..=5).enumerate() {
        array.at(&mut out, index).expect("Failed to at(..)");
        assert_eq!(value(out), expected);
    }
}

#[test]
fn test_growth_frees_old_block() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::None);
    let mut array = DynamicArray::new(4, mock.allocator());

    for v in 0..9 {
        array.push_back(&bytes(v)).expect("Failed to push_back(..)");
    }

    // Only the current 16-slot block is live
    assert_eq!(array.capacity(), 16);
    assert_eq!(mock.live_blocks(), 1);
    assert_eq!(mock.live_bytes(), 64);

    drop(array);
    assert_eq!(mock.live_blocks(), 0);
}

#[test]
fn test_failed_growth_leaves_array_unchanged() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::None);
    let mut array = DynamicArray::new(4, mock.allocator());

    array.push_back(&bytes(1)).expect("Failed to push_back(..) (#1)");
    array.push_back(&bytes(2)).expect("Failed to push_back(..) (#2)");

    mock.change_behaviour(MockAllocatorBehaviour::FailAlways);
    assert!(matches!(
        array.push_back(&bytes(3)),
        Err(ContainerError::Alloc(AllocError::OutOfMemory { size: 16, .. }))
    ));

    assert_eq!(array.len(), 2);
    assert_eq!(array.capacity(), 2);
    assert_eq!(mock.live_blocks(), 1);

    let mut out = [0u8; 4];
    array.at(&mut out, 1).expect("Failed to at(..)");
    assert_eq!(value(out), 2);
}

// =============================================================================
// reserve()
// =============================================================================

#[test]
fn test_reserve() {
    let mut array = DynamicArray::new(4, SYSTEM);

    array.reserve(5).expect("Failed to reserve(..)");
    assert_eq!(array.capacity(), 8);

    // Already enough room
    array.reserve(3).expect("Failed to reserve(..)");
    assert_eq!(array.capacity(), 8);
}

#[test]
fn test_reserve_overflow() {
    let mut array = DynamicArray::new(4, SYSTEM);

    assert_eq!(
        array.reserve(usize::MAX),
        Err(ContainerError::Alloc(AllocError::LayoutOverflow))
    );
    assert_eq!(array.capacity(), 0);
}

// =============================================================================
// push_front() / pop_front() shifting
// =============================================================================

#[test]
fn test_push_front_shifts_up() {
    let mut array = DynamicArray::new(4, SYSTEM);

    for v in [3, 2, 1] {
        array.push_front(&bytes(v)).expect("Failed to push_front(..)");
    }

    let mut out = [0u8; 4];
    for (index, expected) in [1, 2, 3].into_iter().enumerate() {
        array.at(&mut out, index).expect("Failed to at(..)");
        assert_eq!(value(out), expected);
    }
}

#[test]
fn test_pop_front_shifts_down() {
    let mut array = DynamicArray::new(4, SYSTEM);

    for v in [1, 2, 3] {
        array.push_back(&bytes(v)).expect("Failed to push_back(..)");
    }

    let mut out = [0u8; 4];
    array.pop_front(&mut out).expect("Failed to pop_front(..)");
    assert_eq!(value(out), 1);

    array.at(&mut out, 0).expect("Failed to at(..)");
    assert_eq!(value(out), 2);
    array.at(&mut out, 1).expect("Failed to at(..)");
    assert_eq!(value(out), 3);
}

// =============================================================================
// clear()
// =============================================================================

#[test]
fn test_clear_keeps_capacity() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::None);
    let mut array = DynamicArray::new(4, mock.allocator());

    for v in 0..4 {
        array.push_back(&bytes(v)).expect("Failed to push_back(..)");
    }

    array.clear();

    assert_eq!(array.len(), 0);
    assert_eq!(array.capacity(), 4);
    assert_eq!(mock.live_blocks(), 1);

    // Refilling up to capacity allocates nothing
    let calls = mock.allocate_calls();
    for v in 0..4 {
        array.push_back(&bytes(v)).expect("Failed to push_back(..)");
    }
    assert_eq!(mock.allocate_calls(), calls);
}
