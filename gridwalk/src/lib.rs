//! Procedural generation of random orthogonal polylines ("walks") confined to
//! a rectangular grid.
//!
//! The core of the crate is [`generator::LineGenerator`]: a single-use builder
//! that starts from a random boundary point and repeatedly extends the walk
//! with constrained random orthogonal steps until it touches a boundary line
//! again. The finished walk is read incrementally through
//! [`generator::PathCursor`] by whatever renders it.

/// The walk generator and its path & cursor types
pub mod generator;

/// Geometric primitives and the grid value object
pub mod geometry;

/// Helper functions which do not belong to any specific module
pub mod util;
