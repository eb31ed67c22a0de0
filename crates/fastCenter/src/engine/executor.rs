//! Parallel batch distance evaluator.
//!
//! ## Purpose
//!
//! This module computes, for every candidate vertex submitted in a batch, the
//! sum of Euclidean distances to the whole point cloud. Batches are spread over
//! a fixed-size worker pool, which is where nearly all of the search time goes.
//!
//! ## Design notes
//!
//! * **Implementation**: One evaluator instance owns its pool and worker count.
//!   There is no process-wide queue.
//! * **Parallelism**: Uses a `rayon` thread pool sized to
//!   `min(hardware parallelism, cap)`, never less than one thread.
//! * **Work claiming**: Every pool thread claims vertices one at a time from a
//!   shared atomic cursor. Claiming increments the cursor and removes nothing.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Batch**: [`EvaluationBatch`] collects mutable borrows of vertices via
//!   `submit` and resolves them all in `evaluate`.
//! * **Barrier**: `evaluate` returns only after every worker has finished.
//!
//! ## Invariants
//!
//! * Each pending vertex is claimed by exactly one worker.
//! * A distance-sum is accumulated in cloud order by a single worker, so results
//!   are bit-identical for any worker count.
//! * Only one batch per evaluator can be alive at a time (`batch` takes `&mut self`).
//!
//! ## Non-goals
//!
//! * This module does not choose which vertices to evaluate (handled by the controller).
//! * This module does not support cancelling a batch in flight.

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::{ThreadPool, ThreadPoolBuilder};
#[cfg(feature = "cpu")]
use std::sync::atomic::{AtomicUsize, Ordering};

// External dependencies
use num_traits::Float;
use std::num::NonZeroUsize;
use tracing::trace;

// Internal dependencies
use crate::math::distance::distance_sum;
use crate::primitives::cloud::PointCloud;
use crate::primitives::errors::CenterError;
use crate::primitives::vertex::CandidateVertex;

#[cfg(feature = "cpu")]
use crate::primitives::point::Point;

/// Default upper bound on the number of worker threads.
pub const MAX_WORKERS: usize = 4;

/// Hardware parallelism as reported by the OS, or 0 if unavailable.
pub fn hardware_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(0)
}

/// Number of workers for a given hardware parallelism and cap.
///
/// A reported parallelism of 0 is clamped to a single worker.
#[inline]
pub fn worker_count(hardware: usize, cap: usize) -> usize {
    hardware.min(cap).max(1)
}

// ============================================================================
// Distance Evaluator
// ============================================================================

/// Computes distance-sums for batches of candidate vertices.
pub struct DistanceEvaluator {
    workers: usize,
    #[cfg(feature = "cpu")]
    pool: Option<ThreadPool>,
}

impl std::fmt::Debug for DistanceEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DistanceEvaluator")
            .field("workers", &self.workers)
            .finish()
    }
}

impl DistanceEvaluator {
    /// Create an evaluator with `min(hardware parallelism, max_workers)` workers.
    pub fn new(max_workers: usize) -> Result<Self, CenterError> {
        Self::with_workers(worker_count(hardware_parallelism(), max_workers))
    }

    /// Create an evaluator with exactly `workers` threads (at least one).
    ///
    /// Without the `cpu` feature every evaluator runs on the calling thread.
    pub fn with_workers(workers: usize) -> Result<Self, CenterError> {
        if workers <= 1 {
            return Ok(Self::sequential());
        }

        #[cfg(feature = "cpu")]
        {
            let pool = ThreadPoolBuilder::new()
                .num_threads(workers)
                .thread_name(|i| format!("center-worker-{i}"))
                .build()
                .map_err(|e| CenterError::ThreadPool(e.to_string()))?;
            Ok(Self {
                workers,
                pool: Some(pool),
            })
        }

        #[cfg(not(feature = "cpu"))]
        {
            Ok(Self::sequential())
        }
    }

    /// Create an evaluator that runs every batch on the calling thread.
    pub fn sequential() -> Self {
        Self {
            workers: 1,
            #[cfg(feature = "cpu")]
            pool: None,
        }
    }

    /// Number of workers used per batch.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Start a new batch of vertices to evaluate.
    pub fn batch<'v, T>(&mut self) -> EvaluationBatch<'_, 'v, T> {
        EvaluationBatch {
            evaluator: self,
            pending: Vec::new(),
        }
    }
}

// ============================================================================
// Evaluation Batch
// ============================================================================

/// Pending set of vertices awaiting their distance-sums.
pub struct EvaluationBatch<'e, 'v, T> {
    evaluator: &'e mut DistanceEvaluator,
    pending: Vec<&'v mut CandidateVertex<T>>,
}

impl<'e, 'v, T> EvaluationBatch<'e, 'v, T>
where
    T: Float + Send + Sync,
{
    /// Enqueue a vertex for the next `evaluate` call.
    pub fn submit(&mut self, vertex: &'v mut CandidateVertex<T>) {
        self.pending.push(vertex);
    }

    /// Number of vertices currently pending.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Resolve every pending, unprocessed vertex against `cloud`.
    ///
    /// Blocks until all workers are done, clears the pending set and returns
    /// the number of vertices that were evaluated.
    pub fn evaluate(&mut self, cloud: &PointCloud<'_, T>) -> usize {
        self.pending.retain(|v| !v.processed);
        let count = self.pending.len();
        if count == 0 {
            return 0;
        }

        trace!(
            vertices = count,
            workers = self.evaluator.workers,
            points = cloud.len(),
            "evaluating batch"
        );

        #[cfg(feature = "cpu")]
        match self.evaluator.pool.as_ref() {
            Some(pool) => evaluate_parallel(pool, &mut self.pending, cloud),
            None => evaluate_sequential(&mut self.pending, cloud),
        }

        #[cfg(not(feature = "cpu"))]
        evaluate_sequential(&mut self.pending, cloud);

        self.pending.clear();
        count
    }
}

fn evaluate_sequential<T: Float>(pending: &mut [&mut CandidateVertex<T>], cloud: &PointCloud<'_, T>) {
    for vertex in pending.iter_mut() {
        let distance = distance_sum(&vertex.coord, cloud.as_slice());
        vertex.resolve(distance);
    }
}

/// Run one batch on every thread of `pool`.
///
/// Each worker keeps claiming the next index from a shared cursor until the
/// batch is exhausted, then returns what it computed. Results are written back
/// into their vertices once the pool has joined.
#[cfg(feature = "cpu")]
fn evaluate_parallel<T>(
    pool: &ThreadPool,
    pending: &mut [&mut CandidateVertex<T>],
    cloud: &PointCloud<'_, T>,
) where
    T: Float + Send + Sync,
{
    let coords: Vec<Point<T>> = pending.iter().map(|v| v.coord).collect();
    let cursor = AtomicUsize::new(0);

    let claimed: Vec<Vec<(usize, T)>> = pool.broadcast(|ctx| {
        let mut resolved = Vec::new();
        loop {
            let index = cursor.fetch_add(1, Ordering::Relaxed);
            let Some(coord) = coords.get(index) else {
                break;
            };
            resolved.push((index, distance_sum(coord, cloud.as_slice())));
        }
        trace!(worker = ctx.index(), claimed = resolved.len(), "worker done");
        resolved
    });

    for (index, distance) in claimed.into_iter().flatten() {
        pending[index].resolve(distance);
    }
}
