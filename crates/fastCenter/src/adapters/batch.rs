//! Batch adapter for center search.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter: it validates a complete
//! in-memory point cloud, runs the refinement search on a worker pool, and
//! returns the center together with a per-round trace.
//!
//! ## Design notes
//!
//! * **Processing**: Processes the entire cloud in memory.
//! * **Delegation**: Delegates the search to the refinement controller and the
//!   distance work to the execution engine.
//! * **Parallelism**: Uses a `rayon` pool unless `parallel(false)` is set.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Builder Pattern**: Fluent configuration with sensible defaults.
//! * **Pool Reuse**: The worker pool is started once in `build` and reused by
//!   every `fit` call on the same processor.
//!
//! ## Invariants
//!
//! * The cloud must hold at least one point.
//! * All coordinates must be finite.
//! * The result does not depend on the worker count.
//!
//! ## Non-goals
//!
//! * This adapter does not handle streaming or incrementally updated clouds.
//! * This adapter does not check that points lie inside the unit cube.

// External dependencies
use num_traits::Float;
use std::fmt::Debug;
use std::result::Result;
use tracing::debug;

// Internal dependencies
use crate::algorithms::refinement::{RefinementController, RoundReport, DEFAULT_ITERATIONS};
use crate::engine::executor::{DistanceEvaluator, MAX_WORKERS};
use crate::input::CloudInput;
use crate::primitives::cloud::PointCloud;
use crate::primitives::errors::CenterError;
use crate::primitives::point::Point;

// ============================================================================
// Batch Center Builder
// ============================================================================

/// Builder for the batch center processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchCenterBuilder {
    /// Number of refinement rounds.
    pub iterations: usize,
    /// Upper bound on worker threads.
    pub max_workers: usize,
    /// Parallel execution mode (None = default).
    pub parallel: Option<bool>,
}

impl Default for BatchCenterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchCenterBuilder {
    /// Create a new batch builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * iterations: 12
    /// * max_workers: 4
    /// * parallel: true when the `cpu` feature is enabled
    pub fn new() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            max_workers: MAX_WORKERS,
            parallel: None,
        }
    }

    /// Set the number of refinement rounds.
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the maximum number of worker threads.
    pub fn max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers;
        self
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Validate the configuration and start the worker pool.
    pub fn build(self) -> Result<BatchCenter, CenterError> {
        if self.max_workers == 0 {
            return Err(CenterError::InvalidInput(
                "max_workers must be at least 1".to_string(),
            ));
        }

        let evaluator = if self.parallel.unwrap_or(cfg!(feature = "cpu")) {
            DistanceEvaluator::new(self.max_workers)?
        } else {
            DistanceEvaluator::sequential()
        };
        debug!(
            iterations = self.iterations,
            workers = evaluator.workers(),
            "batch center processor ready"
        );

        Ok(BatchCenter {
            iterations: self.iterations,
            evaluator,
        })
    }
}

// ============================================================================
// Batch Center Processor
// ============================================================================

/// Output of a center search.
#[derive(Debug, Clone, PartialEq)]
pub struct CenterResult<T> {
    /// Approximate center of the cloud.
    pub center: Point<T>,
    /// Half-side of the final search cube.
    pub half_side: T,
    /// Number of refinement rounds run.
    pub iterations: usize,
    /// Per-round trace of the search.
    pub rounds: Vec<RoundReport<T>>,
    /// Total number of distance-sums computed.
    pub evaluations: usize,
    /// Worker threads used.
    pub workers: usize,
}

/// Batch center processor with parallel support.
#[derive(Debug)]
pub struct BatchCenter {
    iterations: usize,
    evaluator: DistanceEvaluator,
}

impl BatchCenter {
    /// Number of worker threads.
    pub fn workers(&self) -> usize {
        self.evaluator.workers()
    }

    /// Find the center of the provided point cloud.
    pub fn fit<T, I>(&mut self, cloud: &I) -> Result<CenterResult<T>, CenterError>
    where
        T: Float + Debug + Send + Sync,
        I: CloudInput<T> + ?Sized,
    {
        let coords = cloud.as_cloud_slice()?;
        let cloud = PointCloud::new(coords)?;

        let outcome = RefinementController::new(&mut self.evaluator, self.iterations).run(&cloud)?;

        Ok(CenterResult {
            center: outcome.center,
            half_side: outcome.half_side,
            iterations: self.iterations,
            rounds: outcome.rounds,
            evaluations: outcome.evaluations,
            workers: self.evaluator.workers(),
        })
    }
}
