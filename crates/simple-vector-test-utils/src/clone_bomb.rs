// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::Cell;
use std::rc::Rc;

/// Shared clone budget for [`CloneBomb`] values.
#[derive(Debug, Clone)]
pub struct Fuse {
    remaining: Rc<Cell<usize>>,
}

impl Fuse {
    /// Allows `clones` successful clones; the next one panics.
    pub fn new(clones: usize) -> Self {
        Self {
            remaining: Rc::new(Cell::new(clones)),
        }
    }

    /// Creates a value bound to this fuse.
    pub fn arm(&self, value: i32) -> CloneBomb {
        CloneBomb {
            value,
            fuse: Some(self.clone()),
        }
    }

    /// Clones still allowed before the next one panics.
    pub fn remaining(&self) -> usize {
        self.remaining.get()
    }
}

/// An `i32` whose `clone()` panics once its [`Fuse`] is spent.
///
/// `CloneBomb::default()` is `0` and never panics.
#[derive(Debug, Default)]
pub struct CloneBomb {
    value: i32,
    fuse: Option<Fuse>,
}

impl CloneBomb {
    /// The wrapped value.
    pub fn value(&self) -> i32 {
        self.value
    }
}

impl Clone for CloneBomb {
    fn clone(&self) -> Self {
        if let Some(fuse) = &self.fuse {
            let remaining = fuse.remaining.get();
            if remaining == 0 {
                panic!("CloneBomb: clone budget exhausted");
            }
            fuse.remaining.set(remaining - 1);
        }

        Self {
            value: self.value,
            fuse: self.fuse.clone(),
        }
    }
}

impl PartialEq for CloneBomb {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for CloneBomb {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuse_allows_budgeted_clones() {
        let fuse = Fuse::new(2);
        let bomb = fuse.arm(9);

        let _a = bomb.clone();
        let _b = bomb.clone();

        assert_eq!(fuse.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "clone budget exhausted")]
    fn test_fuse_panics_when_spent() {
        let fuse = Fuse::new(0);
        let bomb = fuse.arm(9);

        let _ = bomb.clone();
    }
}
