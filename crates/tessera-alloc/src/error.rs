// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for tessera-alloc.

use thiserror::Error;

/// Errors reported by a [`RawAllocator`](crate::RawAllocator) or the provider slot.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum AllocError {
    /// No allocator capability is installed in the provider slot.
    #[error("no allocator is installed")]
    NotInstalled,

    /// The allocate function returned no block.
    #[error("allocation of {size} bytes (align {align}) failed")]
    OutOfMemory {
        /// Requested size in bytes.
        size: usize,
        /// Requested alignment in bytes.
        align: usize,
    },

    /// The requested size overflows `isize::MAX` once padded to its alignment.
    #[error("layout size overflow")]
    LayoutOverflow,
}
