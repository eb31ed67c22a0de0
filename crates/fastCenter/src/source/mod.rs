//! Point cloud sources.
//!
//! ## Purpose
//!
//! This module supplies the clouds a search runs on: synthetic uniform clouds,
//! a flat binary file cache for them, and the sanity check applied to anything
//! loaded back from disk.
//!
//! ## Key concepts
//!
//! * **PointCloudSource**: Anything that can produce a fixed, flat coordinate vector.
//! * **Cache**: `CachedCloudSource` generates a cloud once and reloads it on
//!   later runs, validating every coordinate.
//!
//! ## Non-goals
//!
//! * This module does not stream points or watch files for changes.

use crate::primitives::errors::CenterError;

/// Flat binary cloud persistence.
pub mod file;

/// Synthetic cloud generation.
pub mod generate;

pub use file::{load_cloud, save_cloud, validate_unit_bounds, CachedCloudSource};
pub use generate::generate_uniform;

/// Provider of a point cloud as flat `[x, y, z, ...]` coordinates.
pub trait PointCloudSource {
    /// Produce the cloud. The result is fixed for the duration of a search.
    fn points(&self) -> Result<Vec<f64>, CenterError>;
}

/// A cloud already held in memory.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InMemorySource {
    coords: Vec<f64>,
}

impl InMemorySource {
    /// Wrap flat coordinates.
    pub fn new(coords: Vec<f64>) -> Self {
        Self { coords }
    }
}

impl PointCloudSource for InMemorySource {
    fn points(&self) -> Result<Vec<f64>, CenterError> {
        Ok(self.coords.clone())
    }
}
