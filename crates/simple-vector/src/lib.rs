// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous sequence with explicit capacity control.
//!
//! `SimpleVector<T>` is a dynamic array built on a single-owner heap block
//! ([`simple_vector_buffer::OwnedBuffer`]). It tracks its length and its
//! capacity separately and grows by doubling.
//!
//! # Core Guarantees
//!
//! - **Amortized O(1) append**: `push_back` and `insert` use one growth
//!   rule, `max(1, 2 * capacity)` or the required length if larger.
//! - **Exact reservation**: `reserve(n)` allocates exactly `n` slots when
//!   `n` exceeds the capacity and never shrinks. A `resize` past the
//!   capacity allocates exactly the new length.
//! - **Moves, not clones**: reallocation, `insert` and `erase` move
//!   elements. Only `Clone`, `clone_from` and the `*_cloned` helpers clone.
//! - **Copy-and-swap assignment**: `clone_from` builds the full copy before
//!   touching the target, so a panicking clone leaves the target intact.
//! - **Clear does not shrink**: `clear`, `pop_back` and shrinking `resize`
//!   only lower the length.
//!
//! # Contract violations
//!
//! Unchecked indexing (`vec[i]`) only asserts `i < len()` in debug builds.
//! `insert`, `erase` and `pop_back` assert their positions in every build.
//! Checked access goes through [`SimpleVector::at`], which returns
//! [`SimpleVectorError::OutOfRange`].
//!
//! # Thread safety
//!
//! The container has no internal synchronization. It is `Send`/`Sync`
//! exactly when `T` is; shared mutation needs an external lock.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use simple_vector::{SimpleVector, SimpleVectorError};
//!
//! fn example() -> Result<(), SimpleVectorError> {
//!     let mut vec = SimpleVector::new();
//!
//!     for i in 0..5 {
//!         vec.push_back(i);
//!     }
//!
//!     assert_eq!(vec.len(), 5);
//!     assert_eq!(vec.capacity(), 8);
//!     assert_eq!(*vec.at(4)?, 4);
//!     assert!(vec.at(5).is_err());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Reserving Capacity
//!
//! ```rust
//! use simple_vector::{SimpleVector, reserve};
//!
//! let mut vec: SimpleVector<u64> = SimpleVector::from(reserve(4));
//! assert!(vec.is_empty());
//!
//! vec.push_back(1);
//! assert_eq!(vec.capacity(), 4);
//! ```
//!
//! # Logging
//!
//! Reallocations are reported through the `log` facade at `trace` level.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod cmp;
mod error;
mod iter;
mod macros;
mod reserve;
mod simple_vector;

#[cfg(test)]
mod tests;

pub use error::SimpleVectorError;
pub use iter::IntoIter;
pub use reserve::{ReserveProxy, reserve};
pub use simple_vector::SimpleVector;
