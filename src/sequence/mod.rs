// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lazily extended, memoized Fibonacci sequence with move-safe ownership transfer.
//!
//! A [`SequenceCache`] owns a single buffer of `u64`. Entries `[0, computed_count)`
//! are valid; anything past that is scratch space. Mutable lookups extend the valid
//! prefix on demand and double the buffer when it is too small, so a run of
//! increasing lookups costs amortized O(1) per entry.
//!
//! Ownership of the buffer can be handed to another cache with [`SequenceCache::take`]
//! or [`SequenceCache::assign_from`]. The source is left "dead": it owns no buffer,
//! reports `is_alive() == false`, and every lookup on it fails with
//! [`SequenceError::UseAfterMove`].
//!
//! # Example
//!
//! ```
//! use memo_tensor::sequence::SequenceCache;
//!
//! let mut fib = SequenceCache::new(12);
//! assert_eq!(fib.at(10), Ok(55));
//!
//! let moved = fib.take();
//! assert!(!fib.is_alive());
//! assert_eq!(moved.get(10), Ok(55));
//! assert_eq!(moved[10], 55);
//! ```

pub mod errors;
pub mod statistics;

pub use errors::SequenceError;
pub use statistics::{Counters, Statistics};

use crate::constants::{DEFAULT_CAPACITY, GROWTH_FACTOR, MAX_SEQUENCE_INDEX};
use std::ops::Index;
use tracing::{debug, trace};

/// Exclusively owned cache of the Fibonacci sequence.
///
/// `F(0) = 0`, `F(1) = 1`, `F(n) = F(n - 1) + F(n - 2)`.
///
/// Not `Clone`: a buffer has exactly one owner at a time.
/// Dropping a cache frees its buffer; dropping a dead cache frees nothing.
#[derive(Debug)]
pub struct SequenceCache {
    /// Backing buffer; its length is the capacity. `None` once moved out.
    storage: Option<Box<[u64]>>,
    /// Number of valid entries at the front of `storage`.
    computed_count: usize,
    statistics: Statistics,
}

impl SequenceCache {
    /// Create a cache with room for `capacity` entries, seeded with F(0) and,
    /// when there is room, F(1).
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "sequence cache capacity must be positive");
        Self::seeded(capacity)
    }

    /// Create a cache, returning an error instead of panicking on zero capacity.
    pub fn try_new(capacity: usize) -> Result<Self, SequenceError> {
        if capacity == 0 {
            return Err(SequenceError::ZeroCapacity);
        }
        Ok(Self::seeded(capacity))
    }

    fn seeded(capacity: usize) -> Self {
        let mut storage = vec![0u64; capacity].into_boxed_slice();
        let mut computed_count = 1;
        if capacity > 1 {
            storage[1] = 1;
            computed_count = 2;
        }
        Self {
            storage: Some(storage),
            computed_count,
            statistics: Statistics::new(),
        }
    }

    /// The moved-from state: no buffer, zeroed bookkeeping.
    fn dead() -> Self {
        Self {
            storage: None,
            computed_count: 0,
            statistics: Statistics::new(),
        }
    }

    /// Whether this cache still owns a buffer.
    pub fn is_alive(&self) -> bool {
        self.storage.is_some()
    }

    /// Number of valid memoized entries.
    pub fn computed_count(&self) -> usize {
        self.computed_count
    }

    /// Current buffer length (zero when dead).
    pub fn capacity(&self) -> usize {
        self.storage.as_deref().map_or(0, <[u64]>::len)
    }

    /// The valid prefix of the buffer, `F(0)..F(computed_count - 1)`.
    pub fn memoized(&self) -> &[u64] {
        match self.storage.as_deref() {
            Some(storage) => &storage[..self.computed_count],
            None => &[],
        }
    }

    /// Counters for hits, computed entries and buffer growths.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Return `F(index)`, computing and memoizing every entry up to it if needed.
    ///
    /// Afterward entries `[0, index]` are memoized. The buffer grows by
    /// [`GROWTH_FACTOR`] until it can hold `index`.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::UseAfterMove`] if the cache has been moved from.
    /// - [`SequenceError::Overflow`] if `F(index)` does not fit in a `u64`.
    ///   Nothing is computed or allocated in that case.
    pub fn at(&mut self, index: usize) -> Result<u64, SequenceError> {
        let Some(storage) = self.storage.as_deref() else {
            return Err(SequenceError::UseAfterMove);
        };
        if index < self.computed_count {
            self.statistics.increment_counter(Counters::Hits);
            return Ok(storage[index]);
        }
        if index > MAX_SEQUENCE_INDEX {
            return Err(SequenceError::Overflow {
                index,
                max: MAX_SEQUENCE_INDEX,
            });
        }
        if index >= storage.len() {
            self.grow_to_fit(index);
        }
        self.extend_to(index);
        Ok(self.memoized()[index])
    }

    /// Return the memoized `F(index)` without computing anything.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::IndexOutOfRange`] if `index >= computed_count()`.
    /// - [`SequenceError::UseAfterMove`] if the cache has been moved from.
    pub fn get(&self, index: usize) -> Result<u64, SequenceError> {
        self.entry(index).copied()
    }

    fn entry(&self, index: usize) -> Result<&u64, SequenceError> {
        let storage = self
            .storage
            .as_deref()
            .ok_or(SequenceError::UseAfterMove)?;
        if index < self.computed_count {
            Ok(&storage[index])
        } else {
            Err(SequenceError::IndexOutOfRange {
                index,
                computed: self.computed_count,
            })
        }
    }

    /// Move the buffer out into a new cache, leaving `self` dead.
    pub fn take(&mut self) -> SequenceCache {
        debug!(
            capacity = self.capacity(),
            computed = self.computed_count,
            "transferring sequence cache"
        );
        std::mem::replace(self, Self::dead())
    }

    /// Move `source`'s buffer into `self`, releasing the buffer `self` held before.
    ///
    /// `source` is left dead. Swaps first and clears second: at every step each
    /// buffer has exactly one owner.
    pub fn assign_from(&mut self, source: &mut SequenceCache) {
        std::mem::swap(self, source);
        debug!(
            capacity = self.capacity(),
            computed = self.computed_count,
            released = source.capacity(),
            "assigned sequence cache"
        );
        *source = Self::dead();
    }

    /// Install `other` as the contents of `self`, returning what was there.
    pub fn replace(&mut self, other: SequenceCache) -> SequenceCache {
        std::mem::replace(self, other)
    }

    /// Reallocate so that `index` is in bounds, copying the valid prefix.
    fn grow_to_fit(&mut self, index: usize) {
        let Some(old) = self.storage.take() else {
            return;
        };
        let mut capacity = old.len();
        while capacity <= index {
            capacity *= GROWTH_FACTOR;
        }
        debug!(from = old.len(), to = capacity, "growing sequence cache");

        let mut grown = vec![0u64; capacity].into_boxed_slice();
        grown[..self.computed_count].copy_from_slice(&old[..self.computed_count]);
        self.storage = Some(grown);
        self.statistics.increment_counter(Counters::Growths);
    }

    /// Fill entries `computed_count..=index`. The buffer must already hold `index`.
    fn extend_to(&mut self, index: usize) {
        let Some(storage) = self.storage.as_deref_mut() else {
            return;
        };
        let start = self.computed_count;
        for n in start..=index {
            storage[n] = if n < 2 {
                n as u64
            } else {
                storage[n - 1] + storage[n - 2]
            };
        }
        trace!(from = start, to = index, "extended memoized sequence");
        self.statistics
            .add(Counters::Computed, (index + 1 - start) as u64);
        self.computed_count = index + 1;
    }
}

impl Default for SequenceCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Index<usize> for SequenceCache {
    type Output = u64;

    /// Read-only lookup of a memoized entry.
    ///
    /// # Panics
    ///
    /// Panics if `index` has not been memoized or the cache has been moved from.
    fn index(&self, index: usize) -> &u64 {
        match self.entry(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}
