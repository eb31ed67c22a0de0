//! Layer 3: Engine
//!
//! ## Purpose
//!
//! This layer provides the parallel execution engine for center search. It
//! owns the worker pool that computes distance-sums for batches of candidate
//! vertices submitted by the refinement controller.
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
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Worker-pool based batch distance evaluator.
pub mod executor;
