// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use core::ops::{Index, IndexMut};

/// Exclusive owner of a heap block of `T`, or of nothing.
///
/// The block length is fixed at allocation time and is not part of the public
/// contract: callers track how many slots they use. Indexing outside the block
/// panics.
///
/// # Example
///
/// ```rust
/// use simple_vector_buffer::OwnedBuffer;
///
/// let mut buffer = OwnedBuffer::<u8>::with_len(3);
/// buffer[0] = 1;
///
/// let block = buffer.release().expect("buffer was allocated");
/// assert!(buffer.is_null());
/// assert_eq!(&*block, &[1, 0, 0]);
/// ```
pub struct OwnedBuffer<T> {
    block: Option<Box<[T]>>,
}

impl<T> OwnedBuffer<T> {
    /// Creates a buffer in the null state.
    pub const fn new() -> Self {
        Self { block: None }
    }

    /// Allocates a block of `len` slots, each holding `T::default()`.
    ///
    /// A `len` of `0` returns the null state and performs no allocation.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        if len == 0 {
            return Self::new();
        }

        let block: Box<[T]> = core::iter::repeat_with(T::default).take(len).collect();

        Self { block: Some(block) }
    }

    /// Takes ownership of an already allocated block.
    ///
    /// An empty block is normalized to the null state.
    pub fn from_raw(block: Option<Box<[T]>>) -> Self {
        Self {
            block: block.filter(|b| !b.is_empty()),
        }
    }

    /// Gives up ownership of the block and leaves `self` null.
    ///
    /// The caller becomes responsible for the returned block.
    #[must_use = "dropping the released block frees it immediately"]
    pub fn release(&mut self) -> Option<Box<[T]>> {
        self.block.take()
    }

    /// Returns `true` if no block is owned.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.block.is_none()
    }

    /// Returns `true` if a block is owned.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.block.is_some()
    }

    /// Returns the address of the first slot, or a null pointer in the null state.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.block
            .as_deref()
            .map_or(core::ptr::null(), <[T]>::as_ptr)
    }

    /// Returns every slot of the block. Empty in the null state.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.block.as_deref().unwrap_or(&[])
    }

    /// Returns every slot of the block mutably. Empty in the null state.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.block.as_deref_mut().unwrap_or(&mut [])
    }

    /// Exchanges blocks with `other`. No element is touched.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.block, &mut other.block);
    }
}

impl<T> Default for OwnedBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Box<[T]>> for OwnedBuffer<T> {
    fn from(block: Box<[T]>) -> Self {
        Self::from_raw(Some(block))
    }
}

impl<T> Index<usize> for OwnedBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for OwnedBuffer<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> core::fmt::Debug for OwnedBuffer<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OwnedBuffer")
            .field("allocated", &self.is_allocated())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "zeroize")]
impl<T: zeroize::Zeroize> zeroize::Zeroize for OwnedBuffer<T> {
    fn zeroize(&mut self) {
        zeroize::Zeroize::zeroize(&mut self.as_mut_slice().iter_mut());
    }
}
