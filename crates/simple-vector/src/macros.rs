// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Creates a [`SimpleVector`](crate::SimpleVector) from a list of values.
///
/// - `simple_vector![]` is empty with no capacity.
/// - `simple_vector![a, b, c]` holds the values in order; capacity equals the count.
/// - `simple_vector![value; n]` holds `n` copies of `value`.
///
/// # Example
///
/// ```rust
/// use simple_vector::simple_vector;
///
/// let vec = simple_vector![1, 2, 3];
/// assert_eq!(vec.len(), 3);
/// assert_eq!(vec.capacity(), 3);
///
/// let zeros = simple_vector![0u8; 4];
/// assert_eq!(zeros, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! simple_vector {
    () => {
        $crate::SimpleVector::new()
    };
    ($value:expr; $len:expr) => {
        $crate::SimpleVector::from_elem($len, $value)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::SimpleVector::from([$($value),+])
    };
}
