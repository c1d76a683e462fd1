// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for array construction and broadcasting.

use crate::constants::RANK;
use thiserror::Error;

/// Errors that can occur when building or combining arrays.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// Dimension `dim` differs and neither side is 1, or the right side is
    /// empty while the left is not.
    #[error("shapes are not compatible for broadcasting: dimension {dim} is {lhs} vs {rhs}")]
    ShapeMismatch { dim: usize, lhs: usize, rhs: usize },

    /// Source buffer length does not match the product of the shape.
    #[error("source holds {actual} elements but the shape needs {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    /// The element count of the shape does not fit in a `usize`.
    #[error("element count of shape {dims:?} overflows usize")]
    ShapeOverflow { dims: [usize; RANK] },
}
