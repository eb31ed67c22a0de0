//! Search lattice for one refinement round.
//!
//! ## Purpose
//!
//! A [`CubeState`] holds the 27 vertices of a 3×3×3 lattice spanning the
//! current search cube: its 8 corners plus the edge midpoints, face centers and
//! cube center. The 8 overlapping sub-cubes of the lattice are the candidates
//! for the next, smaller cube.
//!
//! ## Design notes
//!
//! * **Flat arena**: Vertices live in a `[CandidateVertex; 27]` addressed by
//!   [`lattice_index`], x-major: `(x * 3 + y) * 3 + z`.
//! * **Value semantics**: Descending copies the 8 winning vertices into a new
//!   lattice. Nothing is shared between rounds.
//!
//! ## Key concepts
//!
//! * **Lattice coordinate**: `lower_corner + index * half_side` per axis,
//!   index in {0, 1, 2}.
//! * **Sub-cube**: Offset `o` in {0, 1}³. Its corners are the adjacent lattice
//!   vertices `o + d`, d in {0, 1}³, so its side is `half_side`.
//! * **Aggregate cost**: Sum of a sub-cube's 8 corner distance-sums.
//!
//! ## Invariants
//!
//! * After `descend`, exactly the 8 corners are processed.
//! * Ties between sub-cubes go to the first in ascending (x, y, z) order.

use num_traits::Float;

use crate::primitives::point::Point;
use crate::primitives::vertex::CandidateVertex;

/// Lattice points per axis.
pub const LATTICE_SIDE: usize = 3;

/// Total number of lattice vertices.
pub const LATTICE_LEN: usize = LATTICE_SIDE * LATTICE_SIDE * LATTICE_SIDE;

/// Flat arena index of lattice position `(x, y, z)`, each in `0..3`.
#[inline]
pub const fn lattice_index(x: usize, y: usize, z: usize) -> usize {
    (x * LATTICE_SIDE + y) * LATTICE_SIDE + z
}

/// Lattice position of flat arena index `index`.
#[inline]
pub const fn lattice_position(index: usize) -> (usize, usize, usize) {
    (
        index / (LATTICE_SIDE * LATTICE_SIDE),
        (index / LATTICE_SIDE) % LATTICE_SIDE,
        index % LATTICE_SIDE,
    )
}

/// Whether `(x, y, z)` is one of the 8 cube corners.
#[inline]
pub const fn is_corner(x: usize, y: usize, z: usize) -> bool {
    x != 1 && y != 1 && z != 1
}

// ============================================================================
// Sub-cubes
// ============================================================================

/// One of the 8 overlapping 2×2×2 sub-cubes of a lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubCube {
    /// Offset along x (0 or 1).
    pub x: usize,
    /// Offset along y (0 or 1).
    pub y: usize,
    /// Offset along z (0 or 1).
    pub z: usize,
}

impl SubCube {
    /// All sub-cubes in ascending (x, y, z) enumeration order.
    pub const ALL: [SubCube; 8] = [
        SubCube::new(0, 0, 0),
        SubCube::new(0, 0, 1),
        SubCube::new(0, 1, 0),
        SubCube::new(0, 1, 1),
        SubCube::new(1, 0, 0),
        SubCube::new(1, 0, 1),
        SubCube::new(1, 1, 0),
        SubCube::new(1, 1, 1),
    ];

    /// Create a sub-cube from its offsets.
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Position of this sub-cube in [`SubCube::ALL`].
    #[inline]
    pub const fn ordinal(&self) -> usize {
        self.x * 4 + self.y * 2 + self.z
    }

    /// Lattice indices of the 8 corners, in ascending (x, y, z) order.
    pub fn corner_indices(&self) -> [usize; 8] {
        let mut out = [0; 8];
        for (slot, d) in SubCube::ALL.iter().enumerate() {
            out[slot] = lattice_index(self.x + d.x, self.y + d.y, self.z + d.z);
        }
        out
    }
}

// ============================================================================
// Cube State
// ============================================================================

/// The 27-vertex lattice of one search cube.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeState<T> {
    vertices: [CandidateVertex<T>; LATTICE_LEN],
    half_side: T,
}

impl<T: Float> CubeState<T> {
    /// Lattice over the unit cube `[0, 1]³`.
    ///
    /// The 8 corners carry their coordinates but are not yet evaluated; every
    /// other vertex is default.
    pub fn unit() -> Self {
        let half_side = T::one() / (T::one() + T::one());
        let mut vertices = [CandidateVertex::default(); LATTICE_LEN];
        for (index, vertex) in vertices.iter_mut().enumerate() {
            let (x, y, z) = lattice_position(index);
            if is_corner(x, y, z) {
                vertex.coord = offset(&Point::splat(T::zero()), x, y, z, half_side);
            }
        }
        Self {
            vertices,
            half_side,
        }
    }

    /// Half the edge length of the cube.
    #[inline]
    pub fn half_side(&self) -> T {
        self.half_side
    }

    /// Coordinate of lattice vertex `(0, 0, 0)`.
    #[inline]
    pub fn lower_corner(&self) -> Point<T> {
        self.vertices[0].coord
    }

    /// Vertex at lattice position `(x, y, z)`.
    #[inline]
    pub fn vertex(&self, x: usize, y: usize, z: usize) -> &CandidateVertex<T> {
        &self.vertices[lattice_index(x, y, z)]
    }

    /// Mutable access to the 8 corner vertices.
    pub fn corners_mut(&mut self) -> impl Iterator<Item = &mut CandidateVertex<T>> {
        self.vertices
            .iter_mut()
            .enumerate()
            .filter(|(index, _)| {
                let (x, y, z) = lattice_position(*index);
                is_corner(x, y, z)
            })
            .map(|(_, vertex)| vertex)
    }

    /// Place every unprocessed vertex on the lattice and yield it for evaluation.
    pub fn place_unprocessed(&mut self) -> impl Iterator<Item = &mut CandidateVertex<T>> {
        let lower = self.lower_corner();
        let half_side = self.half_side;
        self.vertices
            .iter_mut()
            .enumerate()
            .filter(|(_, vertex)| !vertex.processed)
            .map(move |(index, vertex)| {
                let (x, y, z) = lattice_position(index);
                vertex.coord = offset(&lower, x, y, z, half_side);
                vertex
            })
    }

    /// Number of processed vertices.
    pub fn processed_count(&self) -> usize {
        self.vertices.iter().filter(|v| v.processed).count()
    }

    /// Aggregate cost of `sub_cube`.
    pub fn sub_cube_cost(&self, sub_cube: SubCube) -> T {
        sub_cube
            .corner_indices()
            .iter()
            .fold(T::zero(), |acc, &i| acc + self.vertices[i].distance)
    }

    /// Aggregate costs of all 8 sub-cubes, indexed by [`SubCube::ordinal`].
    pub fn sub_cube_costs(&self) -> [T; 8] {
        SubCube::ALL.map(|s| self.sub_cube_cost(s))
    }

    /// Sub-cube with the lowest aggregate cost, and that cost.
    ///
    /// Uses a strict comparison over [`SubCube::ALL`], so equal costs resolve to
    /// the sub-cube enumerated first.
    pub fn best_sub_cube(&self) -> (SubCube, T) {
        let costs = self.sub_cube_costs();
        let mut best = 0;
        for (ordinal, cost) in costs.iter().enumerate().skip(1) {
            if *cost < costs[best] {
                best = ordinal;
            }
        }
        (SubCube::ALL[best], costs[best])
    }

    /// Lattice for `sub_cube`: its 8 vertices become the new corners verbatim
    /// and the half-side is halved.
    pub fn descend(&self, sub_cube: SubCube) -> Self {
        let mut vertices = [CandidateVertex::default(); LATTICE_LEN];
        for d in SubCube::ALL {
            vertices[lattice_index(2 * d.x, 2 * d.y, 2 * d.z)] =
                *self.vertex(sub_cube.x + d.x, sub_cube.y + d.y, sub_cube.z + d.z);
        }
        Self {
            vertices,
            half_side: self.half_side / (T::one() + T::one()),
        }
    }

    /// Midpoint of the opposite corners `(0, 0, 0)` and `(2, 2, 2)`.
    pub fn center(&self) -> Point<T> {
        self.vertex(0, 0, 0).coord.midpoint(&self.vertex(2, 2, 2).coord)
    }
}

#[inline]
fn offset<T: Float>(lower: &Point<T>, x: usize, y: usize, z: usize, half_side: T) -> Point<T> {
    let step = |i: usize| T::from(i).unwrap_or_else(T::zero) * half_side;
    Point::new(lower.x + step(x), lower.y + step(y), lower.z + step(z))
}
