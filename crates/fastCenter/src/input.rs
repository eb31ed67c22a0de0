//! Input abstractions for center search.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction for point cloud inputs, allowing
//! the `fit` method to accept flat coordinate slices, arrays of `[x, y, z]`
//! triples and ndarray matrices through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Every supported input is viewed as one flat slice.
//! * **Interoperability**: Bridges standard Rust collections with ndarray.
//! * **Fail-fast validation**: Shape and memory continuity are checked before any work.
//!
//! ## Key concepts
//!
//! * **CloudInput Trait**: Types that can expose their points as a row-major
//!   `[x0, y0, z0, x1, ...]` slice.
//! * **Memory Continuity**: Required so workers can scan the cloud linearly.
//!
//! ## Invariants
//!
//! * Returned slices cover every coordinate of every point, in point order.
//! * Non-contiguous or non-3-column matrices return an error.
//!
//! ## Non-goals
//!
//! * This module does not perform data cleaning or bounds checks.

// Feature-gated imports
#[cfg(feature = "cpu")]
use ndarray::{ArrayBase, Data, Ix2};

// External dependencies
use num_traits::Float;

// Internal dependencies
#[cfg(feature = "cpu")]
use crate::primitives::cloud::DIMENSIONS;
use crate::primitives::errors::CenterError;

/// Trait for types that can be searched as a point cloud.
pub trait CloudInput<T: Float> {
    /// View the input as a flat, row-major coordinate slice.
    fn as_cloud_slice(&self) -> Result<&[T], CenterError>;
}

impl<T: Float> CloudInput<T> for [T] {
    fn as_cloud_slice(&self) -> Result<&[T], CenterError> {
        Ok(self)
    }
}

impl<T: Float> CloudInput<T> for Vec<T> {
    fn as_cloud_slice(&self) -> Result<&[T], CenterError> {
        Ok(self.as_slice())
    }
}

impl<T: Float> CloudInput<T> for [[T; 3]] {
    fn as_cloud_slice(&self) -> Result<&[T], CenterError> {
        Ok(self.as_flattened())
    }
}

impl<T: Float> CloudInput<T> for Vec<[T; 3]> {
    fn as_cloud_slice(&self) -> Result<&[T], CenterError> {
        Ok(self.as_flattened())
    }
}

#[cfg(feature = "cpu")]
impl<T: Float, S> CloudInput<T> for ArrayBase<S, Ix2>
where
    S: Data<Elem = T>,
{
    fn as_cloud_slice(&self) -> Result<&[T], CenterError> {
        if self.ncols() != DIMENSIONS {
            return Err(CenterError::InvalidInput(format!(
                "ndarray input must have {} columns, got {}",
                DIMENSIONS,
                self.ncols()
            )));
        }
        self.as_slice().ok_or_else(|| {
            CenterError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
