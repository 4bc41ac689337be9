//! Marching squares module
//!
//! Classifies 2x2 cells of a scalar grid and maps each of the 16 corner
//! configurations to one of 7 base tile shapes plus a rotation.

pub mod classify;
pub mod config;
pub mod tiles;

pub use classify::{average_value, cells, cells_touching, classify};
pub use config::{BoundaryConfiguration, Corner};
pub use tiles::{BaseShape, TILE_TABLE, TileDescriptor, TileError, TileResolver};
