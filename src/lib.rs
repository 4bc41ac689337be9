//! Marching Tiles - tile layouts from a mutable scalar field
//!
//! Core modules:
//! - `field`: Scalar sample grid, spatial queries, seeded generation, mutation
//! - `marching`: Corner classification and configuration-to-tile lookup
//! - `layout`: Per-cell tile directives with localized re-derivation
//! - `settings`: Data-driven layout configuration

pub mod field;
pub mod layout;
pub mod marching;
pub mod settings;

pub use field::{GridError, GridMutator, Sample, ScalarGrid, WriteMode};
pub use layout::{FieldUpdate, TileDirective, TileLayout};
pub use marching::{BaseShape, BoundaryConfiguration, TileDescriptor, TileError, TileResolver};
pub use settings::{LayoutSettings, SettingsError};

use glam::{IVec2, Vec2};

/// Layout configuration constants
pub mod consts {
    /// Default closed/open threshold (samples are uniform in [0, 1))
    pub const DEFAULT_THRESHOLD: f32 = 0.5;

    /// Samples below this value are ignored when resolving a collision
    pub const COLLISION_VALUE_FLOOR: f32 = 0.5;
    /// Value requested by a collision (erases terrain)
    pub const COLLISION_WRITE_VALUE: f32 = 0.0;

    /// Grid defaults
    pub const DEFAULT_GRID_WIDTH: usize = 10;
    pub const DEFAULT_GRID_HEIGHT: usize = 10;
    pub const DEFAULT_SEED: u64 = 0x5EED_71E5;

    /// Engine z-rotation per clockwise quarter turn (degrees)
    pub const QUARTER_TURN_DEGREES: f32 = -90.0;
}

/// World-space origin of a grid position (one world unit per sample)
#[inline]
pub fn grid_to_world(pos: IVec2) -> Vec2 {
    pos.as_vec2()
}

/// Euclidean distance from a world position to a grid position
#[inline]
pub fn distance_to_grid(target: Vec2, pos: IVec2) -> f32 {
    target.distance(grid_to_world(pos))
}
