// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Allocator-agnostic queues, stacks and ring buffers.</em></p>
//!
//! ---
//!
//! Tessera stores fixed-size byte elements in containers whose memory comes
//! from a raw allocator you choose at runtime. Install one process-wide, or
//! hand one to each container explicitly.
//!
//! # Features
//!
//! - **Swappable allocator**: a two-function capability record, installable at runtime
//! - **Two backings**: contiguous dynamic array or doubly linked nodes, same API
//! - **Three façades**: FIFO queue, LIFO stack, fixed-slot ring buffer
//! - **No partial failures**: every error leaves the structure as it was
//! - **`no_std` compatible**: only `core` plus whatever allocator you install
//!
//! # Installation
//!
//! ```toml
//! [dependencies]
//! tessera = "0.1.0"
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use tessera::alloc::{SYSTEM, provider};
//! use tessera::structs::{Queue, RingBuffer, Stack, StructError, Structure};
//!
//! fn main() -> Result<(), StructError> {
//!     provider::install(&SYSTEM);
//!
//!     // FIFO, unbounded
//!     let mut queue = Queue::create(0, 4)?;
//!     queue.add(&1u32.to_ne_bytes())?;
//!     queue.add(&2u32.to_ne_bytes())?;
//!
//!     let mut out = [0u8; 4];
//!     queue.get(&mut out)?;
//!     assert_eq!(u32::from_ne_bytes(out), 1);
//!
//!     // LIFO, at most 8 elements
//!     let mut stack = Stack::create(8, 4)?;
//!     stack.push(&3u32.to_ne_bytes())?;
//!     stack.pop(&mut out)?;
//!     assert_eq!(u32::from_ne_bytes(out), 3);
//!
//!     // 16 slots, 15 usable
//!     let mut ring = RingBuffer::create(16, 4)?;
//!     ring.add(&4u32.to_ne_bytes())?;
//!     assert_eq!(ring.size(), 1);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Bringing your own allocator
//!
//! ```rust
//! use core::alloc::Layout;
//! use core::ptr::NonNull;
//!
//! use tessera::alloc::{RawAllocator, SYSTEM};
//! use tessera::container::Strategy;
//! use tessera::structs::Queue;
//!
//! fn allocate(layout: Layout) -> Option<NonNull<u8>> {
//!     (SYSTEM.allocate_fn())(layout)
//! }
//!
//! unsafe fn free(ptr: NonNull<u8>, layout: Layout) {
//!     unsafe { (SYSTEM.free_fn())(ptr, layout) }
//! }
//!
//! static MINE: RawAllocator = RawAllocator::new(allocate, free);
//!
//! let queue = Queue::create_in(4, 16, Strategy::LinkedSequence, MINE);
//! assert!(queue.is_ok());
//! ```
//!
//! # Crates
//!
//! | Module               | Crate               | Contents                                  |
//! |----------------------|---------------------|-------------------------------------------|
//! | [`alloc`]            | `tessera-alloc`     | `RawAllocator`, `provider`, `SYSTEM`      |
//! | [`container`]        | `tessera-container` | `Container`, `Strategy`                   |
//! | [`structs`]          | `tessera-structs`   | `Queue`, `Stack`, `RingBuffer`            |
//!
//! # Testing
//!
//! The `test-utils` feature exposes `support::test_utils::MockAllocator`, a
//! counting allocator with failure injection for leak and error-path tests.
//!
//! # License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]

pub mod support;

pub use tessera_alloc as alloc;
pub use tessera_container as container;
pub use tessera_structs as structs;
