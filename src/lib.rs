// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Two small exclusively-owned containers.
//!
//! # Sequence cache
//!
//! [`SequenceCache`] memoizes the Fibonacci sequence in a buffer it owns outright.
//! Lookups extend the memoized prefix on demand, doubling the buffer when needed.
//! The buffer can be handed to another cache; the source is then "dead" and
//! reports so through [`SequenceCache::is_alive`].
//!
//! # Fixed-rank array
//!
//! [`FixedRankArray`] is a dense rank-4 array of copyable scalars. It supports
//! in-place addition where the right-hand side is broadcast along any dimension
//! in which it has size 1.
//!
//! # Logging
//!
//! The crate emits `tracing` events (buffer growth, ownership transfer, rejected
//! shapes) and never installs a subscriber itself.

pub mod array;
pub mod constants;
pub mod sequence;

// Re-export commonly used types
pub use array::{ArrayError, FixedRankArray, Shape};
pub use sequence::{SequenceCache, SequenceError};
