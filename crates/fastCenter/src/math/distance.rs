//! Euclidean distance kernels.
//!
//! ## Purpose
//!
//! This module computes the quantity the search minimizes: the sum of
//! Euclidean distances from one candidate point to every point of the cloud.
//!
//! ## Design notes
//!
//! * **Sequential accumulation**: A single sum is always accumulated in cloud
//!   order by one thread, so the result does not depend on the worker count.
//! * **Flat input**: Operates directly on the row-major coordinate slice.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * An empty cloud yields a sum of zero.
//! * Trailing coordinates that do not form a whole point are ignored.
//!
//! ## Non-goals
//!
//! * This module does not parallelize a single sum.

use num_traits::Float;

use crate::primitives::point::Point;

/// Euclidean distance between two points.
#[inline]
pub fn euclidean<T: Float>(a: &Point<T>, b: &Point<T>) -> T {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let dz = a.z - b.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Sum of Euclidean distances from `coord` to every point in `coords`.
///
/// `coords` is a flat row-major slice of `[x, y, z]` triples.
pub fn distance_sum<T: Float>(coord: &Point<T>, coords: &[T]) -> T {
    coords.chunks_exact(3).fold(T::zero(), |acc, p| {
        acc + euclidean(coord, &Point::new(p[0], p[1], p[2]))
    })
}
