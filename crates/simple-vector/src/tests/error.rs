// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::ToString;

use crate::SimpleVectorError;

#[test]
fn test_out_of_range_display() {
    let err = SimpleVectorError::OutOfRange { index: 5, len: 3 };

    assert_eq!(err.to_string(), "index 5 is out of range for length 3");
}

#[test]
fn test_out_of_range_debug_snapshot() {
    let err = SimpleVectorError::OutOfRange { index: 0, len: 0 };

    insta::assert_snapshot!(alloc::format!("{:?}", err), @"OutOfRange { index: 0, len: 0 }");
}
