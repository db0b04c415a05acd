// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Queue, stack and ring buffer over the tessera storage engine.
//!
//! Each façade owns one [`Container`](tessera_container::Container) plus a
//! small metadata block, both taken from the same
//! [`RawAllocator`](tessera_alloc::RawAllocator). Every operation is a
//! policy check (full/empty) followed by exactly one container primitive.
//!
//! | Façade         | Default backing    | In             | Out           |
//! |----------------|--------------------|----------------|---------------|
//! | [`Queue`]      | [`LinkedSequence`] | `add` (back)   | `get` (front) |
//! | [`Stack`]      | [`DynamicArray`]   | `push` (top)   | `pop` (top)   |
//! | [`RingBuffer`] | [`DynamicArray`]   | `add` (head)   | `get` (tail)  |
//!
//! [`LinkedSequence`]: tessera_container::Strategy::LinkedSequence
//! [`DynamicArray`]: tessera_container::Strategy::DynamicArray
//!
//! The shared queries live on the [`Structure`] trait.
//!
//! # Example
//!
//! ```rust
//! use tessera_alloc::{provider, SYSTEM};
//! use tessera_structs::{Queue, StructError, Structure};
//!
//! fn example() -> Result<(), StructError> {
//!     provider::install(&SYSTEM);
//!
//!     let mut queue = Queue::create(0, 8)?;
//!     queue.add(&42u64.to_le_bytes())?;
//!     assert_eq!(queue.size(), 1);
//!
//!     queue.delete();
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod error;
mod queue;
mod ring_buffer;
mod stack;
mod traits;

pub use error::StructError;
pub use queue::Queue;
pub use ring_buffer::RingBuffer;
pub use stack::Stack;
pub use traits::Structure;
