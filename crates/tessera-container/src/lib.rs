// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Storage engine for fixed-size byte elements over a swappable allocator.
//!
//! [`Container`] is one handle type with push/pop at both ends, positional
//! get and replace, size, and clear. It is realized by exactly one of two
//! backing strategies chosen at construction:
//!
//! | Operation            | [`Strategy::DynamicArray`] | [`Strategy::LinkedSequence`] |
//! |----------------------|----------------------------|------------------------------|
//! | `push_back`          | O(1) amortized             | O(1)                         |
//! | `pop_back`           | O(1)                       | O(1)                         |
//! | `push_front`/`pop_front` | O(n)                   | O(1)                         |
//! | `at` / `replace`     | O(1)                       | O(n)                         |
//! | `size`               | O(1)                       | O(1)                         |
//! | `clear`              | O(1), keeps the block      | O(n), frees every node       |
//!
//! All memory comes from a [`RawAllocator`](tessera_alloc::RawAllocator):
//! either the one installed in the [`provider`](tessera_alloc::provider)
//! slot ([`Container::create`]) or one passed explicitly
//! ([`Container::create_in`]).
//!
//! # Example
//!
//! ```rust
//! use tessera_alloc::{provider, SYSTEM};
//! use tessera_container::{Container, ContainerError, Strategy};
//!
//! fn example() -> Result<(), ContainerError> {
//!     provider::install(&SYSTEM);
//!
//!     let mut container = Container::create(8, Strategy::DynamicArray)?;
//!     container.push_back(&7u64.to_le_bytes())?;
//!     container.replace(&9u64.to_le_bytes(), 0)?;
//!
//!     let mut out = [0u8; 8];
//!     container.at(&mut out, 0)?;
//!     assert_eq!(u64::from_le_bytes(out), 9);
//!
//!     container.delete();
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod container;
mod dynamic_array;
mod error;
mod linked_sequence;
mod strategy;

pub use container::Container;
pub use error::ContainerError;
pub use strategy::Strategy;
