// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use alloc::vec;

use simple_vector_test_utils::Tally;

use crate::OwnedBuffer;

// =============================================================================
// new(), with_len()
// =============================================================================

#[test]
fn test_new_is_null() {
    let buffer: OwnedBuffer<u8> = OwnedBuffer::new();

    assert!(buffer.is_null());
    assert!(!buffer.is_allocated());
    assert!(buffer.as_ptr().is_null());
    assert!(buffer.as_slice().is_empty());
}

#[test]
fn test_with_len_zero_is_null() {
    let buffer: OwnedBuffer<u64> = OwnedBuffer::with_len(0);

    assert!(buffer.is_null());
    assert!(buffer.as_ptr().is_null());
}

#[test]
fn test_with_len_default_fills() {
    let buffer: OwnedBuffer<u32> = OwnedBuffer::with_len(5);

    assert!(buffer.is_allocated());
    assert!(!buffer.as_ptr().is_null());
    assert_eq!(buffer.as_slice(), &[0, 0, 0, 0, 0]);
}

// =============================================================================
// from_raw(), release()
// =============================================================================

#[test]
fn test_from_raw_adopts_block() {
    let block: Box<[i32]> = vec![1, 2, 3].into_boxed_slice();
    let address = block.as_ptr();

    let buffer = OwnedBuffer::from_raw(Some(block));

    assert!(buffer.is_allocated());
    assert_eq!(buffer.as_ptr(), address);
    assert_eq!(buffer.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_from_raw_none_is_null() {
    let buffer: OwnedBuffer<i32> = OwnedBuffer::from_raw(None);

    assert!(buffer.is_null());
}

#[test]
fn test_from_raw_empty_block_is_null() {
    let block: Box<[i32]> = Box::new([]);
    let buffer = OwnedBuffer::from(block);

    assert!(buffer.is_null());
}

#[test]
fn test_release_hands_block_to_caller() {
    let mut buffer: OwnedBuffer<u8> = OwnedBuffer::with_len(2);
    buffer[1] = 9;
    let address = buffer.as_ptr();

    let block = buffer.release().expect("Failed to release()");

    assert!(buffer.is_null());
    assert_eq!(block.as_ptr(), address);
    assert_eq!(&*block, &[0, 9]);
}

#[test]
fn test_release_on_null_returns_none() {
    let mut buffer: OwnedBuffer<u8> = OwnedBuffer::new();

    assert!(buffer.release().is_none());
    assert!(buffer.is_null());
}

#[test]
fn test_released_block_is_not_dropped_by_buffer() {
    let tally = Tally::new();
    let mut buffer = OwnedBuffer::from_raw(Some(vec![tally.track(1), tally.track(2)].into()));

    let block = buffer.release();
    drop(buffer);
    assert_eq!(tally.drops(), 0);

    drop(block);
    assert_eq!(tally.drops(), 2);
}

// =============================================================================
// Index, IndexMut
// =============================================================================

#[test]
fn test_index_reads_and_writes() {
    let mut buffer: OwnedBuffer<i64> = OwnedBuffer::with_len(3);

    buffer[0] = -1;
    buffer[2] = 42;

    assert_eq!(buffer[0], -1);
    assert_eq!(buffer[1], 0);
    assert_eq!(buffer[2], 42);
}

#[test]
#[should_panic]
fn test_index_past_block_panics() {
    let buffer: OwnedBuffer<i64> = OwnedBuffer::with_len(3);

    let _value = buffer[3];
}

#[test]
#[should_panic]
fn test_index_on_null_panics() {
    let buffer: OwnedBuffer<i64> = OwnedBuffer::new();

    let _value = buffer[0];
}

// =============================================================================
// swap()
// =============================================================================

#[test]
fn test_swap_exchanges_blocks() {
    let mut a: OwnedBuffer<u8> = OwnedBuffer::with_len(2);
    let mut b: OwnedBuffer<u8> = OwnedBuffer::with_len(4);
    a[0] = 1;
    b[0] = 2;

    let a_address = a.as_ptr();
    let b_address = b.as_ptr();

    a.swap(&mut b);

    assert_eq!(a.as_ptr(), b_address);
    assert_eq!(b.as_ptr(), a_address);
    assert_eq!(a.as_slice(), &[2, 0, 0, 0]);
    assert_eq!(b.as_slice(), &[1, 0]);
}

#[test]
fn test_swap_with_null() {
    let mut a: OwnedBuffer<u8> = OwnedBuffer::with_len(2);
    let mut b: OwnedBuffer<u8> = OwnedBuffer::new();

    a.swap(&mut b);

    assert!(a.is_null());
    assert!(b.is_allocated());
}

#[test]
fn test_swap_does_not_touch_elements() {
    let tally = Tally::new();
    let mut a = OwnedBuffer::from_raw(Some(vec![tally.track(1)].into()));
    let mut b = OwnedBuffer::from_raw(Some(vec![tally.track(2)].into()));

    a.swap(&mut b);

    assert_eq!(tally.clones(), 0);
    assert_eq!(tally.drops(), 0);
    assert_eq!(a[0].value(), 2);
    assert_eq!(b[0].value(), 1);
}

// =============================================================================
// Ownership transfer, Drop
// =============================================================================

#[test]
fn test_take_moves_ownership_and_nulls_source() {
    let mut source: OwnedBuffer<u8> = OwnedBuffer::with_len(8);
    let address = source.as_ptr();

    let target = core::mem::take(&mut source);

    assert!(source.is_null());
    assert_eq!(target.as_ptr(), address);
}

#[test]
fn test_drop_releases_elements() {
    let tally = Tally::new();
    let buffer = OwnedBuffer::from_raw(Some(vec![tally.track(1), tally.track(2), tally.track(3)].into()));

    drop(buffer);

    assert_eq!(tally.drops(), 3);
}

// =============================================================================
// Debug
// =============================================================================

#[test]
fn test_debug_does_not_expose_contents() {
    let buffer: OwnedBuffer<u8> = OwnedBuffer::with_len(4);
    insta::assert_snapshot!(alloc::format!("{:?}", buffer), @"OwnedBuffer { allocated: true, .. }");

    let null: OwnedBuffer<u8> = OwnedBuffer::new();
    insta::assert_snapshot!(alloc::format!("{:?}", null), @"OwnedBuffer { allocated: false, .. }");
}

// =============================================================================
// Zeroize
// =============================================================================

#[cfg(feature = "zeroize")]
#[test]
fn test_zeroize_wipes_every_slot() {
    use zeroize::Zeroize;

    let mut buffer = OwnedBuffer::from(vec![1u8, 2, 3].into_boxed_slice());

    buffer.zeroize();

    assert!(buffer.is_allocated());
    assert_eq!(buffer.as_slice(), &[0, 0, 0]);
}
