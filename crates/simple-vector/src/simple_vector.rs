// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::ops::{Deref, DerefMut, Index, IndexMut};

use simple_vector_buffer::OwnedBuffer;

use crate::error::SimpleVectorError;
use crate::reserve::ReserveProxy;

/// A growable contiguous sequence with explicit capacity control.
///
/// `SimpleVector` keeps its length and its capacity apart. Slots in
/// `[0, len)` hold live elements; slots in `[len, capacity)` are allocated and
/// hold leftover values from earlier operations (`pop_back`, `clear`,
/// shrinking `resize`) or `T::default()`. Leftovers are never returned by
/// checked accessors and are dropped when overwritten or when the storage is
/// released.
///
/// # Growth
///
/// Whenever `push_back` or `insert` need more room than the current
/// capacity, the capacity becomes `max(1, 2 * capacity)`, or the required
/// length if that is larger. [`reserve`](SimpleVector::reserve) and a
/// growing [`resize`](SimpleVector::resize) allocate exactly what they are
/// asked for. Elements are moved into the new
/// block, never cloned.
///
/// # Positions
///
/// Positions are indices. `insert` accepts `[0, len]` (where `len` appends)
/// and `erase` accepts `[0, len)`. Anything else is a contract violation and
/// panics.
///
/// # Example
///
/// ```rust
/// use simple_vector::{SimpleVector, simple_vector};
///
/// let mut vec = simple_vector![1, 2, 3];
/// assert_eq!(vec.capacity(), 3);
///
/// let at = vec.insert(1, 9);
/// assert_eq!(vec, [1, 9, 2, 3]);
/// assert_eq!(vec.capacity(), 6);
///
/// vec.erase(at);
/// assert_eq!(vec, [1, 2, 3]);
/// ```
pub struct SimpleVector<T> {
    size: usize,
    capacity: usize,
    items: OwnedBuffer<T>,
}

impl<T> SimpleVector<T> {
    /// Creates an empty vector without allocating.
    pub const fn new() -> Self {
        Self {
            size: 0,
            capacity: 0,
            items: OwnedBuffer::new(),
        }
    }

    fn from_block(block: Box<[T]>) -> Self {
        let len = block.len();

        Self {
            size: len,
            capacity: len,
            items: OwnedBuffer::from(block),
        }
    }

    /// Creates a vector holding `len` copies of `value`.
    ///
    /// `value` itself ends up in the last slot; the other slots are clones.
    /// Capacity equals `len`.
    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::from_block(core::iter::repeat_n(value, len).collect())
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns the number of elements the vector can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the vector holds no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items.as_slice()[..self.size]
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items.as_mut_slice()[..self.size]
    }

    /// Returns the address of the first slot, or a null pointer when nothing is allocated.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.items.as_ptr()
    }

    /// Returns an iterator over the live elements.
    ///
    /// The iterator borrows the vector, so any mutation ends its validity:
    ///
    /// ```compile_fail
    /// use simple_vector::simple_vector;
    ///
    /// let mut vec = simple_vector![1, 2, 3];
    /// let mut iter = vec.iter();
    /// vec.push_back(4);
    /// assert_eq!(iter.next(), Some(&1));
    /// ```
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator over mutable references to the live elements.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVectorError::OutOfRange`] if `index >= len()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use simple_vector::{SimpleVectorError, simple_vector};
    ///
    /// let vec = simple_vector![1, 2, 3];
    ///
    /// assert_eq!(vec.at(2), Ok(&3));
    /// assert_eq!(vec.at(5), Err(SimpleVectorError::OutOfRange { index: 5, len: 3 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, SimpleVectorError> {
        self.as_slice().get(index).ok_or(SimpleVectorError::OutOfRange {
            index,
            len: self.size,
        })
    }

    /// Returns the element at `index` mutably.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVectorError::OutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, SimpleVectorError> {
        let len = self.size;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(SimpleVectorError::OutOfRange { index, len })
    }

    /// Logically removes every element. Capacity and storage are kept.
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Logically removes the last element.
    ///
    /// The value stays in storage until it is overwritten or the storage is
    /// released.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    pub fn pop_back(&mut self) {
        assert!(self.size > 0, "pop_back on an empty SimpleVector");
        self.size -= 1;
    }

    /// Removes the element at `index`, shifting the tail left by one.
    ///
    /// Returns the index of the element that now occupies the erased slot,
    /// which equals the new `len()` if the last element was erased.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use simple_vector::simple_vector;
    ///
    /// let mut vec = simple_vector!['a', 'b', 'c'];
    ///
    /// assert_eq!(vec.erase(0), 0);
    /// assert_eq!(vec, ['b', 'c']);
    ///
    /// assert_eq!(vec.erase(1), vec.len());
    /// assert_eq!(vec, ['b']);
    /// ```
    ///
    /// # Invalidation
    ///
    /// ```compile_fail
    /// use simple_vector::simple_vector;
    ///
    /// let mut vec = simple_vector!['a', 'b', 'c'];
    /// let mut iter = vec.iter();
    /// vec.erase(0);
    /// assert_eq!(iter.next(), Some(&'b'));
    /// ```
    pub fn erase(&mut self, index: usize) -> usize {
        assert!(
            index < self.size,
            "erase position {index} is out of bounds for length {}",
            self.size
        );

        self.items.as_mut_slice()[index..self.size].rotate_left(1);
        self.size -= 1;

        index
    }

    /// Exchanges contents with `other` without touching any element.
    pub fn swap(&mut self, other: &mut Self) {
        self.items.swap(&mut other.items);
        core::mem::swap(&mut self.size, &mut other.size);
        core::mem::swap(&mut self.capacity, &mut other.capacity);
    }

    /// Takes over `source`'s storage, leaving `source` empty with no capacity.
    ///
    /// The previous contents of `self` are released.
    ///
    /// # Invalidation
    ///
    /// ```compile_fail
    /// use simple_vector::simple_vector;
    ///
    /// let mut vec = simple_vector![1, 2];
    /// let mut source = simple_vector![3];
    /// let first = &vec[0];
    /// vec.assign_from(&mut source);
    /// assert_eq!(*first, 1);
    /// ```
    pub fn assign_from(&mut self, source: &mut Self) {
        *self = core::mem::take(source);
    }

    /// Returns every allocated slot, including leftovers past `len()`.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn as_capacity_slice(&self) -> &[T] {
        self.items.as_slice()
    }
}

impl<T: Default> SimpleVector<T> {
    /// Creates a vector of `len` default values. Capacity equals `len`.
    pub fn with_len(len: usize) -> Self {
        Self {
            size: len,
            capacity: len,
            items: OwnedBuffer::with_len(len),
        }
    }

    /// Creates an empty vector with exactly `capacity` slots allocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            size: 0,
            capacity,
            items: OwnedBuffer::with_len(capacity),
        }
    }

    fn grown_capacity(&self, required: usize) -> usize {
        let doubled = match self.capacity {
            0 => 1,
            capacity => capacity
                .checked_mul(2)
                .unwrap_or_else(|| capacity_overflow()),
        };

        doubled.max(required)
    }

    /// Moves the live elements into a fresh block of `new_capacity` slots.
    ///
    /// With `gap = Some(index)`, elements from `index` on land one slot to the
    /// right, leaving `index` holding a default value.
    #[cold]
    #[inline(never)]
    fn reallocate(&mut self, new_capacity: usize, gap: Option<usize>, reason: &'static str) {
        debug_assert!(new_capacity > self.capacity);
        debug_assert!(new_capacity > self.size);

        log::trace!(
            "SimpleVector::{reason}: reallocating capacity {} -> {new_capacity} (len {})",
            self.capacity,
            self.size
        );

        let mut items = OwnedBuffer::<T>::with_len(new_capacity);
        let live = &mut self.items.as_mut_slice()[..self.size];
        let fresh = items.as_mut_slice();

        match gap {
            None => fresh[..live.len()].swap_with_slice(live),
            Some(index) => {
                let (prefix, suffix) = live.split_at_mut(index);
                fresh[..index].swap_with_slice(prefix);
                fresh[index + 1..index + 1 + suffix.len()].swap_with_slice(suffix);
            }
        }

        self.items.swap(&mut items);
        self.capacity = new_capacity;
    }

    /// Ensures capacity for at least `new_capacity` elements.
    ///
    /// Allocates exactly `new_capacity` slots if that exceeds the current
    /// capacity; otherwise does nothing. Never shrinks. Length and element
    /// order are preserved.
    ///
    /// # Example
    ///
    /// ```rust
    /// use simple_vector::simple_vector;
    ///
    /// let mut vec = simple_vector![1, 2];
    ///
    /// vec.reserve(10);
    /// assert_eq!(vec.capacity(), 10);
    ///
    /// vec.reserve(4);
    /// assert_eq!(vec.capacity(), 10);
    /// assert_eq!(vec, [1, 2]);
    /// ```
    ///
    /// # Invalidation
    ///
    /// ```compile_fail
    /// use simple_vector::simple_vector;
    ///
    /// let mut vec = simple_vector![1, 2];
    /// let slice = vec.as_slice();
    /// vec.reserve(10);
    /// assert_eq!(slice, [1, 2]);
    /// ```
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity <= self.capacity {
            return;
        }

        self.reallocate(new_capacity, None, "reserve");
    }

    /// Changes the length to `new_len`.
    ///
    /// Shrinking only lowers the length. Growing fills the new slots with
    /// `T::default()`. When `new_len` exceeds the capacity, exactly `new_len`
    /// slots are allocated first.
    ///
    /// # Invalidation
    ///
    /// ```compile_fail
    /// use simple_vector::simple_vector;
    ///
    /// let mut vec = simple_vector![1, 2, 3];
    /// let first = &vec[0];
    /// vec.resize(8);
    /// assert_eq!(*first, 1);
    /// ```
    pub fn resize(&mut self, new_len: usize) {
        if new_len <= self.size {
            self.size = new_len;
            return;
        }

        if new_len > self.capacity {
            // Fresh slots already hold default values.
            self.reallocate(new_len, None, "resize");
        } else {
            self.items.as_mut_slice()[self.size..new_len].fill_with(T::default);
        }

        self.size = new_len;
    }

    /// Appends `value`, growing the capacity when it is exhausted.
    ///
    /// # Example
    ///
    /// ```rust
    /// use simple_vector::SimpleVector;
    ///
    /// let mut vec = SimpleVector::new();
    /// let mut capacities = Vec::new();
    ///
    /// for i in 0..5 {
    ///     vec.push_back(i);
    ///     capacities.push(vec.capacity());
    /// }
    ///
    /// assert_eq!(capacities, [1, 2, 4, 4, 8]);
    /// ```
    pub fn push_back(&mut self, value: T) {
        if self.size == self.capacity {
            let new_capacity = self.grown_capacity(self.size + 1);
            self.reallocate(new_capacity, None, "push_back");
        }

        self.items[self.size] = value;
        self.size += 1;
    }

    /// Appends a clone of `value`.
    pub fn push_back_cloned(&mut self, value: &T)
    where
        T: Clone,
    {
        self.push_back(value.clone());
    }

    /// Inserts `value` at `index`, shifting the tail right by one.
    ///
    /// Returns the index of the inserted element. `index == len()` appends.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    ///
    /// # Invalidation
    ///
    /// References into the vector cannot be held across an insert:
    ///
    /// ```compile_fail
    /// use simple_vector::simple_vector;
    ///
    /// let mut vec = simple_vector![1, 2, 3];
    /// let second = &vec[1];
    /// vec.insert(0, 0);
    /// assert_eq!(*second, 2);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        assert!(
            index <= self.size,
            "insert position {index} is out of bounds for length {}",
            self.size
        );

        if self.size == self.capacity {
            let new_capacity = self.grown_capacity(self.size + 1);
            self.reallocate(new_capacity, Some(index), "insert");
        } else {
            self.items.as_mut_slice()[index..=self.size].rotate_right(1);
        }

        self.items[index] = value;
        self.size += 1;

        index
    }

    /// Inserts a clone of `value` at `index`. See [`insert`](SimpleVector::insert).
    pub fn insert_cloned(&mut self, index: usize, value: &T) -> usize
    where
        T: Clone,
    {
        self.insert(index, value.clone())
    }
}

#[cold]
#[inline(never)]
fn capacity_overflow() -> ! {
    panic!("SimpleVector capacity overflow");
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SimpleVector<T> {
    /// Deep copy. The copy's capacity equals the source's length.
    fn clone(&self) -> Self {
        Self::from_block(self.as_slice().iter().cloned().collect())
    }

    /// Copy assignment. The copy is built in full before anything in `self`
    /// changes, so a panicking `T::clone` leaves `self` untouched.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T> From<ReserveProxy> for SimpleVector<T>
where
    T: Default,
{
    fn from(request: ReserveProxy) -> Self {
        Self::with_capacity(request.capacity())
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_block(Box::new(items))
    }
}

impl<T> From<Vec<T>> for SimpleVector<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_block(items.into_boxed_slice())
    }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
    fn from(items: &[T]) -> Self {
        Self::from_block(Box::from(items))
    }
}

impl<T> FromIterator<T> for SimpleVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_block(iter.into_iter().collect())
    }
}

impl<T: Default> Extend<T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> Index<usize> for SimpleVector<T> {
    type Output = T;

    /// Unchecked access: `index < len()` is the caller's contract and is only
    /// asserted in debug builds. Use [`SimpleVector::at`] for a checked read.
    #[inline]
    fn index(&self, index: usize) -> &T {
        debug_assert!(
            index < self.size,
            "index {index} is out of bounds for length {}",
            self.size
        );
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for SimpleVector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.size,
            "index {index} is out of bounds for length {}",
            self.size
        );
        &mut self.items[index]
    }
}

impl<T> Deref for SimpleVector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SimpleVector")
            .field("items", &self.as_slice())
            .field("len", &self.size)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T> SimpleVector<T> {
    pub(crate) fn into_live_vec(mut self) -> Vec<T> {
        let mut items = self.items.release().map(Vec::from).unwrap_or_default();
        items.truncate(self.size);
        items
    }
}

#[cfg(feature = "zeroize")]
impl<T: zeroize::Zeroize> zeroize::Zeroize for SimpleVector<T> {
    /// Wipes every allocated slot, leftovers included, and sets the length to 0.
    fn zeroize(&mut self) {
        zeroize::Zeroize::zeroize(&mut self.items);
        self.size = 0;
    }
}
