//! Layer 5: Adapters
//!
//! ## Purpose
//!
//! This layer provides the execution adapters that turn a validated
//! configuration into a runnable center search.
//!
//! ## Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// In-memory batch center search.
pub mod batch;
