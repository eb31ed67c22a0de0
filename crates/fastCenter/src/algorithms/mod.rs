//! Layer 4: Algorithms
//!
//! ## Purpose
//!
//! This layer implements the octree-guided center search: the 3×3×3 lattice
//! describing one search cube and the controller that shrinks it round by round.
//!
//! ## Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Algorithms ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// 27-vertex search lattice and its sub-cubes.
pub mod lattice;

/// Round-by-round cube refinement.
pub mod refinement;
