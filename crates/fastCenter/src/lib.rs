//! # fastCenter
//!
//! Parallel, octree-guided approximation of the point that minimizes the summed
//! Euclidean distance to a large 3D point cloud.
//!
//! The search starts from the unit cube, evaluates a 3×3×3 lattice of candidate
//! points, keeps the cheapest of the 8 overlapping sub-cubes and repeats on a
//! cube of half the size. Distance-sums for each batch of candidates are spread
//! over a small worker pool.
//!
//! ## Quick start
//!
//! ```no_run
//! use fastCenter::prelude::*;
//!
//! let cloud = generate_uniform(100_000, 42);
//! let result = Center::new()
//!     .iterations(12)
//!     .max_workers(4)
//!     .build()?
//!     .fit(&cloud)?;
//! println!("center {}", result.center);
//! # Ok::<(), CenterError>(())
//! ```
//!
//! ## Layers
//!
//! ```text
//! Layer 6: API          (api)
//! Layer 5: Adapters     (adapters::batch)
//! Layer 4: Algorithms   (algorithms::lattice, algorithms::refinement)
//! Layer 3: Engine       (engine::executor)
//! Layer 2: Math         (math::distance)
//! Layer 1: Primitives   (primitives)
//! ```
//!
//! Cloud generation and the on-disk cache live in [`source`].
//!
//! ## Features
//!
//! * `cpu` (default): rayon worker pool and ndarray input.
//! * `cli` (default): the `cloud_center` driver binary.

#![allow(non_snake_case)]
#![deny(missing_docs)]

pub mod adapters;
pub mod algorithms;
pub mod api;
pub mod engine;
pub mod input;
pub mod math;
pub mod primitives;
pub mod source;

/// Commonly used types and functions.
pub mod prelude {
    pub use crate::api::{
        find_center, BatchCenter, BatchCenterBuilder, Center, CenterError, CenterResult,
        CloudInput, Point, RoundReport, SubCube, DEFAULT_ITERATIONS, MAX_WORKERS,
    };
    pub use crate::source::{
        generate_uniform, load_cloud, save_cloud, validate_unit_bounds, CachedCloudSource,
        InMemorySource, PointCloudSource,
    };
}
