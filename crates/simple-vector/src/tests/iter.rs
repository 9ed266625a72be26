// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use simple_vector_test_utils::Tally;

use crate::{SimpleVector, simple_vector};

// =============================================================================
// iter(), iter_mut(), &SimpleVector, &mut SimpleVector
// =============================================================================

#[test]
fn test_iter_yields_live_elements_in_order() {
    let mut vec = simple_vector![1, 2, 3, 4];
    vec.pop_back();

    let seen: Vec<i32> = vec.iter().copied().collect();

    assert_eq!(seen, [1, 2, 3]);
    assert_eq!(vec.iter().len(), 3);
}

#[test]
fn test_iter_is_restartable() {
    let vec = simple_vector!['a', 'b'];

    let first: Vec<char> = vec.iter().copied().collect();
    let second: Vec<char> = (&vec).into_iter().copied().collect();

    assert_eq!(first, second);
}

#[test]
fn test_iter_on_empty_vector() {
    let vec: SimpleVector<i32> = SimpleVector::new();

    assert_eq!(vec.iter().next(), None);
}

#[test]
fn test_iter_mut_modifies_in_place() {
    let mut vec = simple_vector![1, 2, 3];

    for value in vec.iter_mut() {
        *value *= 10;
    }
    for value in &mut vec {
        *value += 1;
    }

    assert_eq!(vec, [11, 21, 31]);
}

#[test]
fn test_for_loop_over_reference() {
    let vec = simple_vector![1, 2, 3];
    let mut sum = 0;

    for value in &vec {
        sum += value;
    }

    assert_eq!(sum, 6);
}

// =============================================================================
// IntoIter
// =============================================================================

#[test]
fn test_into_iter_yields_only_live_elements() {
    let mut vec = simple_vector![1, 2, 3, 4];
    vec.pop_back();
    vec.reserve(10);

    let owned: Vec<i32> = vec.into_iter().collect();

    assert_eq!(owned, [1, 2, 3]);
}

#[test]
fn test_into_iter_is_double_ended_and_exact() {
    let vec = simple_vector![1, 2, 3];
    let mut iter = vec.into_iter();

    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next_back(), Some(3));
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.as_slice(), &[2]);
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_into_iter_of_empty_vector() {
    let vec: SimpleVector<i32> = SimpleVector::with_capacity(4);

    assert_eq!(vec.into_iter().next(), None);
}

#[test]
fn test_into_iter_drops_leftovers_up_front() {
    let tally = Tally::new();
    let mut vec = simple_vector![tally.track(1), tally.track(2), tally.track(3)];
    vec.pop_back();

    let mut iter = vec.into_iter();
    assert_eq!(tally.drops(), 1);

    let first = iter.next().expect("Failed to next()");
    assert_eq!(first.value(), 1);

    drop(iter);
    assert_eq!(tally.drops(), 2);

    drop(first);
    assert_eq!(tally.drops(), 3);
    assert_eq!(tally.clones(), 0);
}

#[test]
fn test_into_iter_debug_snapshot() {
    let mut iter = simple_vector![1, 2, 3].into_iter();
    iter.next();

    insta::assert_snapshot!(alloc::format!("{:?}", iter), @"IntoIter([2, 3])");
}
