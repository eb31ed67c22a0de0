//! Layer 2: Math
//!
//! ## Purpose
//!
//! This layer provides the distance kernels the engine evaluates for every
//! candidate vertex.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```
//!

/// Euclidean distance and distance-sum kernels.
pub mod distance;
