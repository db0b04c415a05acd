// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for tessera-container.

use crate::Strategy;

pub const STRATEGIES: [Strategy; 2] = [Strategy::DynamicArray, Strategy::LinkedSequence];

pub fn bytes(value: u32) -> [u8; 4] {
    value.to_ne_bytes()
}

pub fn value(bytes: [u8; 4]) -> u32 {
    u32::from_ne_bytes(bytes)
}
