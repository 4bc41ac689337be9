//! Tile layout derived from a scalar field
//!
//! Holds the grid and the current directive for every interior cell. A
//! rendering layer consumes directives; after a mutation only the cells that
//! share the written sample are re-derived, which ends in the same state as a
//! full re-derivation.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::field::{GridError, GridMutator, Sample, ScalarGrid, WriteMode, random_grid};
use crate::grid_to_world;
use crate::marching::{BaseShape, TileResolver, average_value, cells, cells_touching, classify};
use crate::settings::{LayoutSettings, SettingsError};

/// What the renderer needs to place one tile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileDirective<H = BaseShape> {
    /// Cell position (the tile sits at the cell's bottom-left sample)
    pub cell: IVec2,
    /// Visual asset for the tile's base shape
    pub asset: H,
    /// Clockwise quarter turns (0..=3)
    pub rotation: u8,
    /// Mean of the four corner values (for tinting)
    pub average_value: f32,
}

impl<H> TileDirective<H> {
    /// Engine z-rotation in degrees
    pub fn rotation_degrees(&self) -> f32 {
        self.rotation as f32 * QUARTER_TURN_DEGREES
    }

    pub fn world_position(&self) -> Vec2 {
        grid_to_world(self.cell)
    }
}

/// Result of a field mutation
#[derive(Debug, Clone, PartialEq)]
pub struct FieldUpdate<H = BaseShape> {
    /// Sample as stored after the write
    pub sample: Sample,
    /// Re-derived tiles, in scan order
    pub tiles: Vec<TileDirective<H>>,
}

/// Grid plus the tiles currently derived from it
#[derive(Debug, Clone)]
pub struct TileLayout<H = BaseShape> {
    grid: ScalarGrid,
    threshold: f32,
    collision_floor: f32,
    mutator: GridMutator,
    resolver: TileResolver<H>,
    /// One slot per interior cell, x-major. `None` until derived.
    placed: Vec<Option<TileDirective<H>>>,
}

impl TileLayout<BaseShape> {
    /// Seeded field with the canonical resolver, fully derived
    pub fn from_settings(settings: &LayoutSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        let grid = random_grid(settings.width, settings.height, settings.seed)?;

        let mut layout = Self::new(grid, settings.threshold, TileResolver::canonical())
            .with_collision_floor(settings.collision_floor)
            .with_write_mode(settings.write_mode);
        layout.refresh_all()?;

        log::info!(
            "Layout {}x{} built (seed {}, threshold {})",
            settings.width,
            settings.height,
            settings.seed,
            settings.threshold
        );
        Ok(layout)
    }
}

impl<H: Clone> TileLayout<H> {
    /// Wrap a grid. No tiles are derived until `refresh_all`.
    pub fn new(grid: ScalarGrid, threshold: f32, resolver: TileResolver<H>) -> Self {
        let cell_count = (grid.width() - 1) * (grid.height() - 1);
        Self {
            grid,
            threshold,
            collision_floor: COLLISION_VALUE_FLOOR,
            mutator: GridMutator::default(),
            resolver,
            placed: vec![None; cell_count],
        }
    }

    pub fn with_collision_floor(mut self, floor: f32) -> Self {
        self.collision_floor = floor;
        self
    }

    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.mutator = GridMutator::new(write_mode);
        self
    }

    #[inline]
    pub fn grid(&self) -> &ScalarGrid {
        &self.grid
    }

    #[inline]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    #[inline]
    pub fn resolver(&self) -> &TileResolver<H> {
        &self.resolver
    }

    pub fn into_grid(self) -> ScalarGrid {
        self.grid
    }

    fn slot(&self, cell: IVec2) -> Option<usize> {
        let (cols, rows) = (self.grid.width() - 1, self.grid.height() - 1);
        if cell.x < 0 || cell.y < 0 || cell.x as usize >= cols || cell.y as usize >= rows {
            return None;
        }
        Some(cell.x as usize * rows + cell.y as usize)
    }

    /// Classify and resolve one cell without storing the result
    pub fn derive(&self, cell: IVec2) -> Result<TileDirective<H>, GridError> {
        let config = classify(&self.grid, cell, self.threshold)?;
        let (asset, rotation) = self.resolver.resolve(config);
        Ok(TileDirective {
            cell,
            asset: asset.clone(),
            rotation,
            average_value: average_value(&self.grid, cell)?,
        })
    }

    /// Replace the stored tile for one cell
    pub fn refresh_cell(&mut self, cell: IVec2) -> Result<TileDirective<H>, GridError> {
        let directive = self.derive(cell)?;
        if let Some(slot) = self.slot(cell) {
            self.placed[slot] = Some(directive.clone());
        }
        Ok(directive)
    }

    /// Re-derive every interior cell, in scan order
    pub fn refresh_all(&mut self) -> Result<Vec<TileDirective<H>>, GridError> {
        cells(&self.grid)
            .map(|cell| self.refresh_cell(cell))
            .collect()
    }

    /// Current tile for a cell
    pub fn directive(&self, cell: IVec2) -> Option<&TileDirective<H>> {
        self.slot(cell).and_then(|slot| self.placed[slot].as_ref())
    }

    /// Every derived tile, in scan order
    pub fn directives(&self) -> impl Iterator<Item = &TileDirective<H>> {
        self.placed.iter().flatten()
    }

    /// Write one sample and re-derive the cells sharing it
    pub fn set_value(&mut self, position: IVec2, value: f32) -> Result<FieldUpdate<H>, GridError> {
        self.grid.set(position, value)?;
        let sample = self.grid.sample(position)?;
        self.refresh_around(sample)
    }

    /// Erase the sample closest to `world_position` (at or above the collision floor)
    pub fn apply_collision(&mut self, world_position: Vec2) -> Result<FieldUpdate<H>, GridError> {
        log::debug!("Collision at {:?}", world_position);
        let sample = self.mutator.apply_at(
            &mut self.grid,
            world_position,
            COLLISION_WRITE_VALUE,
            self.collision_floor,
        )?;
        self.refresh_around(sample)
    }

    fn refresh_around(&mut self, sample: Sample) -> Result<FieldUpdate<H>, GridError> {
        let tiles = cells_touching(&self.grid, sample.position)
            .into_iter()
            .map(|cell| self.refresh_cell(cell))
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            "Sample {:?} = {}: {} tile(s) re-derived",
            sample.position,
            sample.value,
            tiles.len()
        );
        Ok(FieldUpdate { sample, tiles })
    }
}
