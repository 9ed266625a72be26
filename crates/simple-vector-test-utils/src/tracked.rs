// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Counters {
    clones: Cell<usize>,
    drops: Cell<usize>,
}

/// Shared clone/drop counters for [`Tracked`] values.
#[derive(Debug, Default, Clone)]
pub struct Tally {
    counters: Rc<Counters>,
}

impl Tally {
    /// Creates a tally with both counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a value reporting to this tally.
    pub fn track(&self, value: i32) -> Tracked {
        Tracked {
            value,
            tally: Some(self.clone()),
        }
    }

    /// Number of times a tracked value was cloned.
    pub fn clones(&self) -> usize {
        self.counters.clones.get()
    }

    /// Number of tracked values dropped.
    pub fn drops(&self) -> usize {
        self.counters.drops.get()
    }

    /// Resets both counters to zero.
    pub fn reset(&self) {
        self.counters.clones.set(0);
        self.counters.drops.set(0);
    }
}

/// An `i32` that reports its clones and drops to a [`Tally`].
///
/// `Tracked::default()` is `0` and reports to nobody. Equality and ordering
/// only look at the value.
#[derive(Default)]
pub struct Tracked {
    value: i32,
    tally: Option<Tally>,
}

impl Tracked {
    /// The wrapped value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Returns `true` if this value reports to a tally.
    pub fn is_tracked(&self) -> bool {
        self.tally.is_some()
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        if let Some(tally) = &self.tally {
            let clones = &tally.counters.clones;
            clones.set(clones.get() + 1);
        }

        Self {
            value: self.value,
            tally: self.tally.clone(),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        if let Some(tally) = &self.tally {
            let drops = &tally.counters.drops;
            drops.set(drops.get() + 1);
        }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tracked {}

impl PartialOrd for Tracked {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tracked {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl core::fmt::Debug for Tracked {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Tracked({})", self.value)
    }
}
