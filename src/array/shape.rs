// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rank-4 shapes with row-major strides.
//!
//! Dimension 0 varies slowest and dimension `RANK - 1` fastest. A linear offset
//! is a mixed-radix number whose digits are the per-dimension coordinates.
//!
//! ```
//! use memo_tensor::array::Shape;
//!
//! let shape = Shape::new([1, 2, 3, 4]);
//! assert_eq!(shape.strides(), &[24, 12, 4, 1]);
//! assert_eq!(shape.unravel(17), [0, 1, 1, 1]);
//! assert_eq!(shape.ravel([0, 1, 1, 1]), 17);
//! ```

use super::errors::ArrayError;
use crate::constants::RANK;
use std::fmt;

/// Per-dimension coordinates into an array.
pub type Coords = [usize; RANK];

/// Dimension sizes together with their row-major strides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    dims: [usize; RANK],
    strides: [usize; RANK],
    len: usize,
}

impl Shape {
    /// Create a shape, panicking if its element count overflows `usize`.
    ///
    /// # Panics
    ///
    /// Panics if the product of `dims` does not fit in a `usize`.
    pub fn new(dims: [usize; RANK]) -> Self {
        match Self::try_new(dims) {
            Ok(shape) => shape,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create a shape, returning [`ArrayError::ShapeOverflow`] if its element
    /// count does not fit in a `usize`.
    ///
    /// A shape with a zero dimension is always valid: it has no elements.
    pub fn try_new(dims: [usize; RANK]) -> Result<Self, ArrayError> {
        let len = if dims.contains(&0) {
            0
        } else {
            dims.iter()
                .try_fold(1usize, |acc, &d| acc.checked_mul(d))
                .ok_or(ArrayError::ShapeOverflow { dims })?
        };

        // Every stride of a non-empty shape divides `len`, so only empty shapes saturate.
        let mut strides = [1usize; RANK];
        for d in (0..RANK - 1).rev() {
            strides[d] = strides[d + 1].saturating_mul(dims[d + 1]);
        }
        Ok(Self { dims, strides, len })
    }

    pub fn dims(&self) -> &[usize; RANK] {
        &self.dims
    }

    pub fn strides(&self) -> &[usize; RANK] {
        &self.strides
    }

    /// Total number of elements (product of the dimensions).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Split a linear offset into coordinates.
    pub fn unravel(&self, linear: usize) -> Coords {
        let mut coords = [0usize; RANK];
        for d in 0..RANK {
            coords[d] = (linear / self.strides[d]) % self.dims[d];
        }
        coords
    }

    /// Combine coordinates into a linear offset.
    pub fn ravel(&self, coords: Coords) -> usize {
        coords
            .iter()
            .zip(self.strides.iter())
            .map(|(c, s)| c * s)
            .sum()
    }

    /// Whether `coords` addresses an element of this shape.
    pub fn contains(&self, coords: &Coords) -> bool {
        coords.iter().zip(self.dims.iter()).all(|(c, d)| c < d)
    }

    /// Check that `other` can be added into an array of this shape.
    ///
    /// Each dimension must match, or one side must be 1. An empty `other`
    /// cannot feed a non-empty array. The first offending dimension is reported.
    pub fn check_broadcast(&self, other: &Shape) -> Result<(), ArrayError> {
        for d in 0..RANK {
            let (lhs, rhs) = (self.dims[d], other.dims[d]);
            let incompatible = lhs != rhs && lhs != 1 && rhs != 1;
            let nothing_to_read = rhs == 0 && !self.is_empty();
            if incompatible || nothing_to_read {
                return Err(ArrayError::ShapeMismatch { dim: d, lhs, rhs });
            }
        }
        Ok(())
    }

    /// Map coordinates of this shape onto `onto`, pinning broadcast dimensions to 0.
    ///
    /// Assumes [`check_broadcast`](Self::check_broadcast) passed.
    pub fn project(&self, coords: Coords, onto: &Shape) -> Coords {
        let mut projected = coords;
        for d in 0..RANK {
            if onto.dims[d] == 1 {
                projected[d] = 0;
            }
        }
        projected
    }
}

impl fmt::Display for Shape {
    /// Format as "[1, 2, 3, 4]".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.dims)
    }
}

impl From<[usize; RANK]> for Shape {
    fn from(dims: [usize; RANK]) -> Self {
        Self::new(dims)
    }
}
