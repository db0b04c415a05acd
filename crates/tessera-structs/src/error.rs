// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for tessera-structs.

use tessera_alloc::AllocError;
use tessera_container::ContainerError;
use thiserror::Error;

/// Errors returned by [`Queue`](crate::Queue), [`Stack`](crate::Stack) and
/// [`RingBuffer`](crate::RingBuffer).
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum StructError {
    /// The structure has reached its capacity.
    #[error("structure is full")]
    Full,

    /// The structure holds no elements.
    #[error("structure is empty")]
    Empty,

    /// The underlying container failed.
    #[error("ContainerError: {0}")]
    Container(#[from] ContainerError),
}

impl From<AllocError> for StructError {
    fn from(err: AllocError) -> Self {
        Self::Container(ContainerError::Alloc(err))
    }
}
