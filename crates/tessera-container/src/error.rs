// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for tessera-container.

use tessera_alloc::AllocError;
use thiserror::Error;

/// Errors that can occur when working with a [`Container`](crate::Container).
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ContainerError {
    /// The element size given at construction was zero.
    #[error("element size must be non-zero")]
    ZeroElementSize,

    /// The container holds no elements.
    #[error("container is empty")]
    Empty,

    /// The index is not below the current size.
    #[error("index {index} out of bounds (size {size})")]
    OutOfBounds {
        /// Requested index.
        index: usize,
        /// Size at the time of the request.
        size: usize,
    },

    /// The allocator is missing or exhausted.
    #[error("AllocError: {0}")]
    Alloc(#[from] AllocError),
}
