// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for simple-vector.

use thiserror::Error;

/// Error type for checked `SimpleVector` access.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum SimpleVectorError {
    /// The requested index is not below the vector's length.
    #[error("index {index} is out of range for length {len}")]
    OutOfRange {
        /// The index that was requested.
        index: usize,
        /// The vector's length at the time of the request.
        len: usize,
    },
}
