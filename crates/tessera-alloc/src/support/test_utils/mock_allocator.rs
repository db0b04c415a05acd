// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;
use core::ptr::NonNull;
use std::cell::Cell;

use crate::allocator::RawAllocator;
use crate::system::SYSTEM;

/// Configurable behaviour for [`MockAllocator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MockAllocatorBehaviour {
    /// Normal operation (delegates to [`SYSTEM`]).
    #[default]
    None,
    /// Every allocation fails.
    FailAlways,
    /// Fail the Nth allocation (1-indexed: 1 = first call fails).
    FailAtNthAllocate(usize),
    /// Fail every allocation from the Nth one on (1-indexed).
    FailFromNthAllocate(usize),
}

#[derive(Clone, Copy, Default)]
struct MockState {
    behaviour: MockAllocatorBehaviour,
    allocate_calls: usize,
    failed: usize,
    frees: usize,
    live_blocks: usize,
    live_bytes: usize,
}

std::thread_local! {
    static STATE: Cell<MockState> = Cell::new(MockState::default());
}

fn update<R>(f: impl FnOnce(&mut MockState) -> R) -> R {
    STATE.with(|cell| {
        let mut state = cell.get();
        let result = f(&mut state);
        cell.set(state);
        result
    })
}

fn mock_allocate(layout: Layout) -> Option<NonNull<u8>> {
    let fail = update(|state| {
        state.allocate_calls += 1;
        let n = state.allocate_calls;

        let fail = match state.behaviour {
            MockAllocatorBehaviour::None => false,
            MockAllocatorBehaviour::FailAlways => true,
            MockAllocatorBehaviour::FailAtNthAllocate(at) => n == at,
            MockAllocatorBehaviour::FailFromNthAllocate(from) => n >= from,
        };

        if fail {
            state.failed += 1;
        }

        fail
    });

    if fail {
        return None;
    }

    let ptr = (SYSTEM.allocate_fn())(layout)?;

    update(|state| {
        state.live_blocks += 1;
        state.live_bytes += layout.size();
    });

    Some(ptr)
}

unsafe fn mock_free(ptr: NonNull<u8>, layout: Layout) {
    update(|state| {
        state.frees += 1;
        state.live_blocks = state.live_blocks.saturating_sub(1);
        state.live_bytes = state.live_bytes.saturating_sub(layout.size());
    });

    // SAFETY (PRECONDITIONS ARE MET): ptr was handed out by mock_allocate, which
    // delegates to SYSTEM
    unsafe { (SYSTEM.free_fn())(ptr, layout) }
}

static MOCK: RawAllocator = RawAllocator::new(mock_allocate, mock_free);

/// Counting allocator with failure injection, for tests.
///
/// Wraps [`SYSTEM`]. Counters and behaviour live in thread-local storage, so
/// tests running in parallel threads never observe each other. Creating a
/// `MockAllocator` resets the current thread's state.
#[derive(Debug)]
pub struct MockAllocator {
    _private: (),
}

impl MockAllocator {
    /// Resets the current thread's mock state and sets `behaviour`.
    pub fn new(behaviour: MockAllocatorBehaviour) -> Self {
        STATE.with(|cell| {
            cell.set(MockState {
                behaviour,
                ..MockState::default()
            })
        });

        Self { _private: () }
    }

    /// Returns the capability record backed by this mock.
    pub fn allocator(&self) -> RawAllocator {
        MOCK
    }

    /// Returns the `'static` capability record, for the provider slot.
    pub fn allocator_ref(&self) -> &'static RawAllocator {
        &MOCK
    }

    /// Changes the mock behaviour at runtime.
    ///
    /// Call counters keep running; `FailAtNthAllocate(n)` counts from the
    /// last [`reset_count`](Self::reset_count).
    pub fn change_behaviour(&self, behaviour: MockAllocatorBehaviour) {
        update(|state| state.behaviour = behaviour);
    }

    /// Resets the allocate call counter.
    pub fn reset_count(&self) {
        update(|state| state.allocate_calls = 0);
    }

    /// Number of calls to the allocate function, failed ones included.
    pub fn allocate_calls(&self) -> usize {
        update(|state| state.allocate_calls)
    }

    /// Number of allocations that were refused.
    pub fn failed_allocations(&self) -> usize {
        update(|state| state.failed)
    }

    /// Number of calls to the free function.
    pub fn frees(&self) -> usize {
        update(|state| state.frees)
    }

    /// Number of blocks handed out and not yet freed.
    pub fn live_blocks(&self) -> usize {
        update(|state| state.live_blocks)
    }

    /// Bytes handed out and not yet freed.
    pub fn live_bytes(&self) -> usize {
        update(|state| state.live_bytes)
    }
}
