// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use serial_test::serial;
use tessera_alloc::test_utils::{MockAllocator, MockAllocatorBehaviour};
use tessera_alloc::{AllocError, provider};
use tessera_container::{ContainerError, Strategy};

use super::utils::{bytes, value};
use crate::{Queue, RingBuffer, Stack, StructError, Structure};

const NOT_INSTALLED: StructError =
    StructError::Container(ContainerError::Alloc(AllocError::NotInstalled));

#[test]
#[serial(provider)]
fn test_create_without_allocator_fails() {
    provider::uninstall();

    assert_eq!(Queue::create(4, 4).map(|_| ()), Err(NOT_INSTALLED));
    assert_eq!(Stack::create(4, 4).map(|_| ()), Err(NOT_INSTALLED));
    assert_eq!(RingBuffer::create(4, 4).map(|_| ()), Err(NOT_INSTALLED));
}

#[test]
#[serial(provider)]
fn test_create_uses_default_strategies() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::None);
    provider::install(mock.allocator_ref());

    let queue = Queue::create(4, 4).expect("Failed to Queue::create(..)");
    let stack = Stack::create(4, 4).expect("Failed to Stack::create(..)");
    let ring = RingBuffer::create(4, 4).expect("Failed to RingBuffer::create(..)");

    assert_eq!(queue.strategy(), Strategy::LinkedSequence);
    assert_eq!(stack.strategy(), Strategy::DynamicArray);
    assert_eq!(ring.strategy(), Strategy::DynamicArray);

    queue.delete();
    stack.delete();
    ring.delete();
    assert_eq!(mock.live_blocks(), 0);

    provider::uninstall();
}

#[test]
#[serial(provider)]
fn test_queue_round_trip_through_provider() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::None);
    provider::install(mock.allocator_ref());

    let mut queue = Queue::create(10, 4).expect("Failed to Queue::create(..)");

    // Slot changes after construction do not reach the queue
    provider::uninstall();

    for v in [5, 6, 7] {
        queue.add(&bytes(v)).expect("Failed to add(..)");
    }

    let mut out = [0u8; 4];
    queue.get(&mut out).expect("Failed to get(..)");
    assert_eq!(value(out), 5);
    assert_eq!(queue.size(), 2);

    queue.delete();
    assert_eq!(mock.live_blocks(), 0);
}

#[test]
#[serial(provider)]
#[should_panic(expected = "element_size must be non-zero")]
fn test_queue_create_checks_element_size_before_provider() {
    provider::uninstall();

    let _ = Queue::create(4, 0);
}

#[test]
#[serial(provider)]
#[should_panic(expected = "element_size must be non-zero")]
fn test_stack_create_checks_element_size_before_provider() {
    provider::uninstall();

    let _ = Stack::create(4, 0);
}

#[test]
#[serial(provider)]
#[should_panic(expected = "max_size must be non-zero")]
fn test_ring_buffer_create_checks_max_size_before_provider() {
    provider::uninstall();

    let _ = RingBuffer::create(0, 4);
}

#[test]
#[serial(provider)]
#[should_panic(expected = "element_size must be non-zero")]
fn test_ring_buffer_create_checks_element_size_before_provider() {
    provider::uninstall();

    let _ = RingBuffer::create(4, 0);
}
