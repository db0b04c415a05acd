// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Common view over every façade, so generic code can inspect any of them.
pub trait Structure: core::fmt::Debug {
    /// Returns the number of stored elements.
    fn size(&self) -> usize;

    /// Returns true if no element can be taken out.
    fn is_empty(&self) -> bool;

    /// Returns true if no element can be added.
    fn is_full(&self) -> bool;

    /// Drops every element.
    fn clear(&mut self);

    /// Returns the size in bytes of one element.
    fn element_size(&self) -> usize;
}
