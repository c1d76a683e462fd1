// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for sequence cache lookups.

use thiserror::Error;

/// Errors that can occur when reading or extending a [`SequenceCache`](super::SequenceCache).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// Read-only lookup past the memoized range.
    #[error("index {index} out of range: only {computed} entries memoized")]
    IndexOutOfRange { index: usize, computed: usize },

    /// The cache has handed its storage to another owner.
    #[error("sequence cache used after its storage was moved out")]
    UseAfterMove,

    /// A cache needs room for at least the first seed.
    #[error("sequence cache capacity must be positive")]
    ZeroCapacity,

    /// The requested entry does not fit in a `u64`.
    #[error("index {index} overflows u64 (largest representable index is {max})")]
    Overflow { index: usize, max: usize },
}
