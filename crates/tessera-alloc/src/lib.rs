// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Swappable raw allocator capability for heapless targets.
//!
//! Nothing in the tessera stack calls a system allocator directly. Every
//! byte is requested through a [`RawAllocator`]: a small `Copy` record
//! holding an *allocate* function and a matching *free* function.
//!
//! A capability can be passed explicitly to every constructor, or installed
//! once in the process-wide [`provider`] slot, which is what the plain
//! `create(..)` constructors consult.
//!
//! # Example: Installing the system allocator
//!
//! Requires the `system-allocator` feature (on by default).
//!
//! ```rust
//! # #[cfg(feature = "system-allocator")]
//! # {
//! use tessera_alloc::{provider, RawBox, SYSTEM};
//!
//! provider::install(&SYSTEM);
//! assert!(provider::is_allocator_valid());
//!
//! let allocator = provider::current().expect("allocator installed");
//! let boxed = RawBox::new_in(42u32, allocator).expect("allocation failed");
//! assert_eq!(*boxed, 42);
//! # }
//! ```
//!
//! # Example: A custom capability
//!
//! ```rust
//! use core::alloc::Layout;
//! use core::ptr::NonNull;
//!
//! use tessera_alloc::{AllocError, RawAllocator};
//!
//! fn never(_layout: Layout) -> Option<NonNull<u8>> {
//!     None
//! }
//!
//! unsafe fn ignore(_ptr: NonNull<u8>, _layout: Layout) {}
//!
//! let exhausted = RawAllocator::new(never, ignore);
//! let layout = Layout::new::<u64>();
//!
//! assert!(matches!(
//!     exhausted.allocate(layout),
//!     Err(AllocError::OutOfMemory { .. })
//! ));
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test-utils` feature to get a `test_utils::MockAllocator`
//! that injects allocation failures and keeps live-block accounting for leak
//! checks.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod allocator;
mod error;
mod raw_box;
mod support;

#[cfg(feature = "system-allocator")]
mod system;

pub mod provider;

pub use allocator::{AllocateFn, FreeFn, RawAllocator, bytes_layout};
pub use error::AllocError;
pub use raw_box::RawBox;

#[cfg(feature = "system-allocator")]
pub use system::SYSTEM;

#[cfg(all(any(test, feature = "test-utils"), feature = "system-allocator"))]
pub use support::test_utils;
