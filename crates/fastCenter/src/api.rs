//! High-level API for center search.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: a fluent
//! builder for configuring a search and a one-call [`find_center`] helper.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`BatchCenterBuilder`] via `Center::new()`.
//! 2. Chain configuration methods (`.iterations()`, `.max_workers()`, etc.).
//! 3. Call `.build()` and then `.fit(&cloud)`.

// External dependencies
use num_traits::Float;
use std::fmt::Debug;

// Publicly re-exported types
pub use crate::adapters::batch::{BatchCenter, BatchCenterBuilder, CenterResult};
pub use crate::algorithms::lattice::SubCube;
pub use crate::algorithms::refinement::{RoundReport, DEFAULT_ITERATIONS};
pub use crate::engine::executor::MAX_WORKERS;
pub use crate::input::CloudInput;
pub use crate::primitives::errors::CenterError;
pub use crate::primitives::point::Point;

/// Entry point for configuring a center search.
#[derive(Debug, Clone, Copy)]
pub struct Center;

impl Center {
    /// Start a builder with default parameters.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> BatchCenterBuilder {
        BatchCenterBuilder::new()
    }
}

/// Find the center of `cloud` with `iterations` refinement rounds and the
/// default worker pool.
///
/// `iterations = 0` returns `(0.5, 0.5, 0.5)`.
pub fn find_center<T, I>(cloud: &I, iterations: usize) -> Result<Point<T>, CenterError>
where
    T: Float + Debug + Send + Sync,
    I: CloudInput<T> + ?Sized,
{
    let mut processor = Center::new().iterations(iterations).build()?;
    Ok(processor.fit(cloud)?.center)
}
