// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Backing strategy of a [`Container`](crate::Container), chosen at construction.
///
/// Both strategies expose the same operations; only their cost profile differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Contiguous, growable buffer.
    ///
    /// O(1) amortized `push_back`, O(1) `pop_back`, `at` and `replace`;
    /// `push_front`/`pop_front` shift the remaining elements.
    DynamicArray,

    /// One node per element, doubly linked.
    ///
    /// O(1) push/pop at both ends without reallocation; `at` and `replace`
    /// walk from the nearer end.
    LinkedSequence,
}

impl core::fmt::Display for Strategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::DynamicArray => f.write_str("dynamic-array"),
            Self::LinkedSequence => f.write_str("linked-sequence"),
        }
    }
}
