// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// A capacity request, produced by [`reserve`].
///
/// Converting it into a [`SimpleVector`](crate::SimpleVector) yields an empty
/// vector with that much capacity already allocated, as opposed to
/// [`SimpleVector::with_len`](crate::SimpleVector::with_len) which fills the
/// slots with default values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReserveProxy {
    capacity: usize,
}

impl ReserveProxy {
    /// Creates a request for `capacity` slots.
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// The requested capacity.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Requests `capacity` pre-allocated slots for a new vector.
///
/// # Example
///
/// ```rust
/// use simple_vector::{SimpleVector, reserve};
///
/// let vec: SimpleVector<u32> = reserve(16).into();
///
/// assert_eq!(vec.len(), 0);
/// assert_eq!(vec.capacity(), 16);
/// ```
pub const fn reserve(capacity: usize) -> ReserveProxy {
    ReserveProxy::new(capacity)
}
