// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dense rank-4 numeric arrays with one-directional broadcasting addition.
//!
//! `lhs += rhs` adds `rhs` into `lhs` element by element. Where `rhs` has
//! size 1 along a dimension, its single slice is repeated along that
//! dimension of `lhs`. The shape of `lhs` never changes.
//!
//! # Example
//!
//! ```
//! use memo_tensor::array::FixedRankArray;
//!
//! let mut lhs = FixedRankArray::new([1, 1, 2, 3], &[1, 2, 3, 4, 5, 6]).unwrap();
//! let row = FixedRankArray::new([1, 1, 1, 3], &[10, 20, 30]).unwrap();
//!
//! lhs += &row;
//! assert_eq!(lhs.as_slice(), &[11, 22, 33, 14, 25, 36]);
//! ```

pub mod errors;
pub mod shape;

pub use errors::ArrayError;
pub use shape::{Coords, Shape};

use crate::constants::RANK;
use std::fmt::Debug;
use std::ops::AddAssign;
use tracing::debug;

/// Element types an array can hold: plain copyable scalars with `+=`.
pub trait Scalar: Copy + AddAssign + Debug {}

impl<T: Copy + AddAssign + Debug> Scalar for T {}

/// A rank-4 array that exclusively owns its elements.
///
/// Neither `Copy` nor `Clone`: every array has exactly one owner, and data is
/// only ever copied in at construction time.
#[derive(Debug)]
pub struct FixedRankArray<T: Scalar> {
    shape: Shape,
    data: Box<[T]>,
}

impl<T: Scalar> FixedRankArray<T> {
    /// Build an array of shape `dims`, deep-copying `source`.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::ShapeOverflow`] if the product of `dims` does not fit in a `usize`.
    /// - [`ArrayError::LengthMismatch`] if `source.len()` is not the product of `dims`.
    pub fn new(dims: [usize; RANK], source: &[T]) -> Result<Self, ArrayError> {
        let shape = Shape::try_new(dims)?;
        if source.len() != shape.len() {
            return Err(ArrayError::LengthMismatch {
                expected: shape.len(),
                actual: source.len(),
            });
        }
        Ok(Self {
            shape,
            data: source.into(),
        })
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn dims(&self) -> &[usize; RANK] {
        self.shape.dims()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Elements in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Element at `coords`, or `None` if any coordinate is out of bounds.
    pub fn get(&self, coords: Coords) -> Option<&T> {
        if self.shape.contains(&coords) {
            Some(&self.data[self.shape.ravel(coords)])
        } else {
            None
        }
    }

    /// Add `other` into `self` in place, broadcasting `other` along its size-1 dimensions.
    ///
    /// For every element of `self`, the matching element of `other` has the same
    /// coordinates, except that dimensions where `other` has size 1 use coordinate 0.
    /// Returns `self` so calls can be chained.
    ///
    /// # Errors
    ///
    /// [`ArrayError::ShapeMismatch`] if some dimension differs and neither side is 1,
    /// or if `other` is empty while `self` is not. The check covers every dimension before any element is touched, so on error
    /// `self` is unchanged.
    pub fn add_assign_broadcast(&mut self, other: &Self) -> Result<&mut Self, ArrayError> {
        if let Err(err) = self.shape.check_broadcast(&other.shape) {
            debug!(lhs = %self.shape, rhs = %other.shape, "rejected broadcast addition");
            return Err(err);
        }

        for (linear, element) in self.data.iter_mut().enumerate() {
            let coords = self.shape.unravel(linear);
            let source = self.shape.project(coords, &other.shape);
            *element += other.data[other.shape.ravel(source)];
        }
        Ok(self)
    }
}

impl<T: Scalar> AddAssign<&FixedRankArray<T>> for FixedRankArray<T> {
    /// # Panics
    ///
    /// Panics if the shapes are not compatible for broadcasting.
    fn add_assign(&mut self, other: &FixedRankArray<T>) {
        if let Err(err) = self.add_assign_broadcast(other) {
            panic!("{err}");
        }
    }
}
