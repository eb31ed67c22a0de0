//! Layer 1: Primitives
//!
//! ## Purpose
//!
//! This layer provides the value types shared by every other layer: points,
//! candidate vertices, the borrowed point cloud view, and the crate error type.
//!
//! ## Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Borrowed, validated view over flat point cloud coordinates.
pub mod cloud;

/// Error type for all fallible operations.
pub mod errors;

/// Three-dimensional point value type.
pub mod point;

/// Lattice vertex carrying a distance-sum and a processed flag.
pub mod vertex;
