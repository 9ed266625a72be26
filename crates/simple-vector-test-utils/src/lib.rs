// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for simple-vector crates.
//!
//! Instrumented element types that make element transfers observable:
//!
//! - [`Tracked`] counts clones and drops through a shared [`Tally`].
//! - [`CloneBomb`] panics once a shared [`Fuse`] runs out of clones.
//!
//! Both implement `Default` without instrumentation, so default-filled
//! storage slots never show up in the counters.
//!
//! ## License
//!
//! GPL-3.0-only

mod clone_bomb;
mod tracked;

pub use clone_bomb::{CloneBomb, Fuse};
pub use tracked::{Tally, Tracked};
