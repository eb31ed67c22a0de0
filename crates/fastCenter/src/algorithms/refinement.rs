//! Octree-guided cube refinement.
//!
//! ## Purpose
//!
//! This module drives the center search. Starting from the unit cube it
//! repeatedly evaluates a 3×3×3 lattice, keeps the sub-cube whose corners have
//! the lowest summed distance to the cloud, and shrinks the search around it.
//!
//! ## Design notes
//!
//! * **Injection**: The controller borrows a [`DistanceEvaluator`] and never
//!   creates threads itself.
//! * **Reuse**: Corner distance-sums carry over between rounds, so after the
//!   first batch of 8 only 19 vertices are evaluated per round.
//! * **Greedy**: Each round commits to one sub-cube; there is no backtracking.
//!
//! ## Key concepts
//!
//! * **Init**: Evaluate the 8 corners of `[0, 1]³` with half-side 1/2.
//! * **Refine**: Evaluate the remaining 19 vertices, pick the cheapest sub-cube
//!   (first in ascending x, y, z order on ties), descend into it, halve the half-side.
//! * **Done**: The result is the midpoint of corners `(0,0,0)` and `(2,2,2)`.
//!
//! ## Invariants
//!
//! * Rounds are strictly sequential; each batch completes before the next begins.
//! * The winning aggregate cost never increases from one round to the next, up
//!   to floating point rounding.
//!
//! ## Non-goals
//!
//! * This module does not compute an exact geometric median.
//! * This module does not support cancellation or incremental clouds.

// External dependencies
use num_traits::Float;
use std::fmt::Debug;
use tracing::debug;

// Internal dependencies
use crate::algorithms::lattice::{CubeState, SubCube};
use crate::engine::executor::DistanceEvaluator;
use crate::primitives::cloud::PointCloud;
use crate::primitives::errors::CenterError;
use crate::primitives::point::Point;

/// Default number of refinement rounds.
pub const DEFAULT_ITERATIONS: usize = 12;

/// What happened in one refinement round.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundReport<T> {
    /// Round number, starting at 1.
    pub round: usize,
    /// Half-side of the lattice evaluated in this round.
    pub half_side: T,
    /// Lower corner of the lattice evaluated in this round.
    pub lower_corner: Point<T>,
    /// Aggregate cost of every sub-cube, indexed by [`SubCube::ordinal`].
    pub costs: [T; 8],
    /// The selected sub-cube.
    pub winner: SubCube,
    /// Aggregate cost of the selected sub-cube.
    pub winner_cost: T,
    /// Vertices evaluated in this round.
    pub evaluated: usize,
}

/// Result of a complete search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<T> {
    /// Approximate center of the cloud.
    pub center: Point<T>,
    /// Half-side of the final cube.
    pub half_side: T,
    /// Per-round reports, in order.
    pub rounds: Vec<RoundReport<T>>,
    /// Total number of distance-sums computed.
    pub evaluations: usize,
}

/// Runs the cube refinement search against one evaluator.
#[derive(Debug)]
pub struct RefinementController<'e> {
    evaluator: &'e mut DistanceEvaluator,
    iterations: usize,
}

impl<'e> RefinementController<'e> {
    /// Create a controller running `iterations` rounds on `evaluator`.
    pub fn new(evaluator: &'e mut DistanceEvaluator, iterations: usize) -> Self {
        Self {
            evaluator,
            iterations,
        }
    }

    /// Search for the center of `cloud`.
    ///
    /// Empty clouds and clouds with non-finite coordinates are rejected before
    /// anything is evaluated.
    pub fn run<T>(&mut self, cloud: &PointCloud<'_, T>) -> Result<SearchOutcome<T>, CenterError>
    where
        T: Float + Debug + Send + Sync,
    {
        cloud.ensure_searchable()?;

        let mut cube = CubeState::<T>::unit();
        let mut evaluations = {
            let mut batch = self.evaluator.batch();
            for corner in cube.corners_mut() {
                batch.submit(corner);
            }
            batch.evaluate(cloud)
        };
        debug!(
            phase = "init",
            evaluated = evaluations,
            points = cloud.len(),
            workers = self.evaluator.workers(),
            "unit cube corners evaluated"
        );

        let mut rounds = Vec::with_capacity(self.iterations);
        for round in 1..=self.iterations {
            let evaluated = {
                let mut batch = self.evaluator.batch();
                for vertex in cube.place_unprocessed() {
                    batch.submit(vertex);
                }
                batch.evaluate(cloud)
            };
            evaluations += evaluated;

            let (winner, winner_cost) = cube.best_sub_cube();
            debug!(
                phase = "refine",
                round,
                half_side = ?cube.half_side(),
                winner = ?winner,
                cost = ?winner_cost,
                "sub-cube selected"
            );

            rounds.push(RoundReport {
                round,
                half_side: cube.half_side(),
                lower_corner: cube.lower_corner(),
                costs: cube.sub_cube_costs(),
                winner,
                winner_cost,
                evaluated,
            });
            cube = cube.descend(winner);
        }

        let center = cube.center();
        debug!(phase = "done", center = ?center, evaluations, "search finished");

        Ok(SearchOutcome {
            center,
            half_side: cube.half_side(),
            rounds,
            evaluations,
        })
    }
}
