// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants shared by the sequence cache and the array.

/// Number of dimensions of a [`FixedRankArray`](crate::array::FixedRankArray).
pub const RANK: usize = 4;

/// Capacity used by `SequenceCache::default()`.
pub const DEFAULT_CAPACITY: usize = 16;

/// Factor applied to the cache capacity each time it must grow.
pub const GROWTH_FACTOR: usize = 2;

/// Largest index whose Fibonacci number fits in a `u64`.
///
/// F(93) = 12200160415121876738 is the last one; F(94) overflows.
pub const MAX_SEQUENCE_INDEX: usize = last_fitting_index();

/// Walk the sequence at compile time until the next addition would overflow.
const fn last_fitting_index() -> usize {
    let mut previous: u64 = 0;
    let mut current: u64 = 1;
    let mut index = 1;
    loop {
        match previous.checked_add(current) {
            Some(next) => {
                previous = current;
                current = next;
                index += 1;
            }
            None => return index,
        }
    }
}
