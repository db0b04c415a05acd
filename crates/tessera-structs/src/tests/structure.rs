// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use tessera_alloc::SYSTEM;
use tessera_container::Strategy;

use super::utils::bytes;
use crate::{Queue, RingBuffer, Stack, Structure};

fn drain_state(structure: &mut dyn Structure) -> (usize, bool, bool) {
    let state = (structure.size(), structure.is_empty(), structure.is_full());
    structure.clear();
    state
}

#[test]
fn test_structure_is_object_safe() {
    let mut queue =
        Queue::create_in(2, 4, Strategy::LinkedSequence, SYSTEM).expect("Failed to create queue");
    let mut stack =
        Stack::create_in(2, 4, Strategy::DynamicArray, SYSTEM).expect("Failed to create stack");
    let mut ring =
        RingBuffer::create_in(3, 4, Strategy::DynamicArray, SYSTEM).expect("Failed to create ring");

    for v in [1, 2] {
        queue.add(&bytes(v)).expect("Failed to add(..)");
        stack.push(&bytes(v)).expect("Failed to push(..)");
        ring.add(&bytes(v)).expect("Failed to add(..)");
    }

    let structures: [&mut dyn Structure; 3] = [&mut queue, &mut stack, &mut ring];

    for structure in structures {
        assert_eq!(structure.element_size(), 4);
        assert_eq!(drain_state(structure), (2, false, true));
        assert_eq!(drain_state(structure), (0, true, false));
    }
}

#[test]
fn test_generic_inspection() {
    fn fill_ratio<S: Structure>(structure: &S, bound: usize) -> f64 {
        structure.size() as f64 / bound as f64
    }

    let mut queue =
        Queue::create_in(4, 4, Strategy::LinkedSequence, SYSTEM).expect("Failed to create queue");
    queue.add(&bytes(1)).expect("Failed to add(..)");
    queue.add(&bytes(2)).expect("Failed to add(..)");

    assert_eq!(fill_ratio(&queue, queue.capacity()), 0.5);
}
