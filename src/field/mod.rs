//! Scalar field module
//!
//! Owns the sample grid the tile layout is derived from:
//! - Fixed dimensions, x-major storage (stable scan order)
//! - Spatial queries against integer grid positions
//! - In-place mutation only (no resizing, no persistence)

pub mod generate;
pub mod grid;
pub mod mutate;
pub mod query;

pub use generate::{random_grid, random_values};
pub use grid::{GridError, Sample, ScalarGrid};
pub use mutate::{GridMutator, WriteMode};
