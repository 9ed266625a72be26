// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Single-owner heap block of default-initialized elements.
//!
//! [`OwnedBuffer<T>`] owns exactly one contiguous heap block of `T` values, or
//! nothing at all (the null state). It is the storage primitive underneath
//! `simple-vector`: the vector tracks how many slots are live, the buffer only
//! knows how to hold them.
//!
//! # Core Guarantees
//!
//! - **Single owner**: `OwnedBuffer` is not `Clone`. Ownership moves, or is
//!   exchanged with [`OwnedBuffer::swap`] in constant time.
//! - **No zero-sized allocations**: requesting `0` slots yields the null state
//!   without touching the allocator.
//! - **Every slot is a valid `T`**: blocks are filled with `T::default()` on
//!   allocation, so slots nobody wrote to still hold a value.
//! - **Fatal allocation failure**: an allocation the global allocator cannot
//!   satisfy aborts through `handle_alloc_error`. There is no partial
//!   recovery.
//!
//! # Example
//!
//! ```rust
//! use simple_vector_buffer::OwnedBuffer;
//!
//! let mut buffer = OwnedBuffer::<u32>::with_len(4);
//! buffer[2] = 7;
//!
//! let mut other = OwnedBuffer::new();
//! other.swap(&mut buffer);
//!
//! assert!(buffer.is_null());
//! assert_eq!(other.as_slice(), &[0, 0, 7, 0]);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod owned_buffer;

#[cfg(test)]
mod tests;

pub use owned_buffer::OwnedBuffer;
