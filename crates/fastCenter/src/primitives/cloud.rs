//! Borrowed point cloud view.
//!
//! ## Purpose
//!
//! [`PointCloud`] wraps a flat, row-major coordinate slice
//! (`[x0, y0, z0, x1, y1, z1, ...]`) and exposes it as a sequence of points.
//! The cloud is never mutated during a search, so one view is shared by every
//! worker without locking.
//!
//! ## Invariants
//!
//! * The underlying slice length is a multiple of 3.

use num_traits::Float;

use crate::primitives::errors::CenterError;
use crate::primitives::point::Point;

/// Number of coordinates per point.
pub const DIMENSIONS: usize = 3;

/// Read-only view over a flat point cloud.
#[derive(Debug, Clone, Copy)]
pub struct PointCloud<'a, T> {
    coords: &'a [T],
}

impl<'a, T: Float> PointCloud<'a, T> {
    /// Wrap a flat coordinate slice.
    ///
    /// Fails if the slice does not hold a whole number of points.
    pub fn new(coords: &'a [T]) -> Result<Self, CenterError> {
        if coords.len() % DIMENSIONS != 0 {
            return Err(CenterError::InvalidInput(format!(
                "flat cloud length {} is not a multiple of {}",
                coords.len(),
                DIMENSIONS
            )));
        }
        Ok(Self { coords })
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len() / DIMENSIONS
    }

    /// Whether the cloud has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Underlying flat coordinates.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.coords
    }

    /// Point at `index`, if any.
    pub fn point(&self, index: usize) -> Option<Point<T>> {
        let start = index.checked_mul(DIMENSIONS)?;
        self.coords
            .get(start..start + DIMENSIONS)
            .map(|c| Point::new(c[0], c[1], c[2]))
    }

    /// Iterate over the points in cloud order.
    pub fn points(&self) -> impl Iterator<Item = Point<T>> + 'a {
        self.coords
            .chunks_exact(DIMENSIONS)
            .map(|c| Point::new(c[0], c[1], c[2]))
    }

    /// Reject clouds that are empty or contain NaN or infinite coordinates.
    pub fn ensure_searchable(&self) -> Result<(), CenterError> {
        if self.is_empty() {
            return Err(CenterError::EmptyCloud);
        }
        if let Some(pos) = self.coords.iter().position(|c| !c.is_finite()) {
            return Err(CenterError::InvalidInput(format!(
                "point {} axis {} is not finite",
                pos / DIMENSIONS,
                pos % DIMENSIONS
            )));
        }
        Ok(())
    }
}
