// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for broadcasting addition on rank-4 arrays.

mod common;

use common::{filled, init_tracing};
use memo_tensor::{ArrayError, FixedRankArray};
use proptest::prelude::*;

#[test]
fn test_identical_shapes_double() {
    init_tracing();
    let shape = [1, 2, 3, 4];
    let data: Vec<i32> = (1..=24).collect();

    let mut t0 = FixedRankArray::new(shape, &data).unwrap();
    let t1 = FixedRankArray::new(shape, &data).unwrap();
    t0 += &t1;

    for (i, value) in data.iter().enumerate() {
        assert_eq!(t0.as_slice()[i], value * 2, "Tensor doubled by plus its self.");
    }
}

#[test]
fn test_broadcast_along_last_dimension() {
    init_tracing();
    #[rustfmt::skip]
    let d0 = [
        1.0f32, 1.0, 1.0, 1.0,
        2.0, 2.0, 2.0, 2.0,
        3.0, 3.0, 3.0, 3.0,

        4.0, 4.0, 4.0, 4.0,
        5.0, 5.0, 5.0, 5.0,
        6.0, 6.0, 6.0, 6.0,
    ];
    #[rustfmt::skip]
    let d1 = [
        6.0f32,
        5.0,
        4.0,

        3.0,
        2.0,
        1.0,
    ];

    let mut t0 = FixedRankArray::new([1, 2, 3, 4], &d0).unwrap();
    let t1 = FixedRankArray::new([1, 2, 3, 1], &d1).unwrap();
    t0 += &t1;

    assert!(
        t0.as_slice().iter().all(|&v| v == 7.0),
        "Every element of t0 should be 7 after adding t1 to it."
    );
    assert_eq!(t1.as_slice(), &d1);
}

#[test]
fn test_broadcast_scalar() {
    init_tracing();
    let d0: Vec<f64> = (1..=24).map(f64::from).collect();
    let mut t0 = FixedRankArray::new([1, 2, 3, 4], &d0).unwrap();
    let t1 = FixedRankArray::new([1, 1, 1, 1], &[1.0f64]).unwrap();
    t0 += &t1;

    for (i, original) in d0.iter().enumerate() {
        assert_eq!(
            t0.as_slice()[i],
            original + 1.0,
            "Every element of t0 should be incremented by 1 after adding t1 to it."
        );
    }
}

#[test]
fn test_incompatible_shapes_rejected() {
    init_tracing();
    let mut lhs = filled([2, 3, 4, 5], 1);
    let rhs = filled([2, 3, 2, 5], 1);

    assert_eq!(
        lhs.add_assign_broadcast(&rhs).unwrap_err(),
        ArrayError::ShapeMismatch {
            dim: 2,
            lhs: 4,
            rhs: 2
        }
    );
    assert!(lhs.as_slice().iter().all(|&v| v == 1));
}

fn dims_strategy() -> impl Strategy<Value = [usize; 4]> {
    [1usize..4, 1usize..4, 1usize..4, 1usize..4]
}

/// A shape and a broadcastable partner: each dimension either copied or collapsed to 1.
fn broadcast_pair() -> impl Strategy<Value = ([usize; 4], [usize; 4])> {
    (dims_strategy(), any::<[bool; 4]>()).prop_map(|(dims, collapse)| {
        let mut other = dims;
        for d in 0..4 {
            if collapse[d] {
                other[d] = 1;
            }
        }
        (dims, other)
    })
}

proptest! {
    #[test]
    fn prop_scalar_broadcast_increments_everything(dims in dims_strategy(), k in -100i64..100) {
        let len: usize = dims.iter().product();
        let data: Vec<i64> = (0..len as i64).collect();
        let mut lhs = FixedRankArray::new(dims, &data).unwrap();
        lhs += &filled([1, 1, 1, 1], k);

        for (sum, original) in lhs.as_slice().iter().zip(data.iter()) {
            prop_assert_eq!(*sum, original + k);
        }
    }

    #[test]
    fn prop_broadcast_reads_projected_element((dims, other_dims) in broadcast_pair()) {
        let len: usize = dims.iter().product();
        let other_len: usize = other_dims.iter().product();
        let other_data: Vec<i64> = (0..other_len as i64).map(|v| v * 10).collect();

        let mut lhs = FixedRankArray::new(dims, &vec![0i64; len]).unwrap();
        let rhs = FixedRankArray::new(other_dims, &other_data).unwrap();
        lhs += &rhs;

        for linear in 0..len {
            let coords = lhs.shape().unravel(linear);
            let projected = lhs.shape().project(coords, rhs.shape());
            prop_assert_eq!(lhs.get(coords), rhs.get(projected));
        }
    }

    #[test]
    fn prop_mismatch_leaves_data_unchanged(dims in dims_strategy(), dim in 0usize..4) {
        // Neither equal nor 1 on the chosen dimension.
        let mut lhs_dims = dims;
        lhs_dims[dim] = dims[dim].max(2);
        let mut other = dims;
        other[dim] = lhs_dims[dim] + 1;

        let mut lhs = filled(lhs_dims, 5);
        let err = lhs.add_assign_broadcast(&filled(other, 1)).unwrap_err();
        prop_assert_eq!(
            err,
            ArrayError::ShapeMismatch { dim, lhs: lhs_dims[dim], rhs: other[dim] }
        );
        prop_assert!(lhs.as_slice().iter().all(|&v| v == 5));
    }
}
