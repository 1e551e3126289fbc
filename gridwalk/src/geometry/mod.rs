/// Closed enums describing movement across the grid
pub mod geo_enums;

/// The rectangular lattice a walk is confined to
pub mod grid;

/// Geometric primitives - atomic building blocks for the geometry module
pub mod primitives;
