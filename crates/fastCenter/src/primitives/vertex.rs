//! Candidate vertices of the search lattice.
//!
//! A vertex starts unprocessed with a zero distance-sum. Exactly one worker
//! resolves it, writing the final sum and flipping `processed`; nothing touches
//! it again within the same batch.

use num_traits::Float;

use crate::primitives::point::Point;

/// A lattice position together with its distance-sum to the cloud.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateVertex<T> {
    /// Position of the vertex.
    pub coord: Point<T>,
    /// Sum of Euclidean distances from `coord` to every cloud point.
    pub distance: T,
    /// Whether `distance` holds a computed value.
    pub processed: bool,
}

impl<T: Float> Default for CandidateVertex<T> {
    fn default() -> Self {
        Self {
            coord: Point::splat(T::zero()),
            distance: T::zero(),
            processed: false,
        }
    }
}

impl<T: Float> CandidateVertex<T> {
    /// Create an unprocessed vertex at `coord`.
    pub fn at(coord: Point<T>) -> Self {
        Self {
            coord,
            ..Self::default()
        }
    }

    /// Store a computed distance-sum and mark the vertex processed.
    #[inline]
    pub fn resolve(&mut self, distance: T) {
        self.distance = distance;
        self.processed = true;
    }
}
