// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use memo_tensor::FixedRankArray;
use tracing_subscriber::EnvFilter;

/// Route `tracing` output through the test harness. Set `RUST_LOG=debug` to see it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Reference Fibonacci, computed without memoization.
#[allow(dead_code)]
pub fn fibonacci(n: usize) -> u64 {
    let (mut previous, mut current) = (0u64, 1u64);
    for _ in 0..n {
        // `current` runs one step ahead and may wrap at n = 93; `previous` never does.
        let next = previous.wrapping_add(current);
        previous = current;
        current = next;
    }
    previous
}

/// Build an array filled with `value`.
#[allow(dead_code)]
pub fn filled(dims: [usize; 4], value: i64) -> FixedRankArray<i64> {
    let len = dims.iter().product();
    FixedRankArray::new(dims, &vec![value; len]).unwrap()
}
