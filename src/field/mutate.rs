//! Field mutation from world-space events
//!
//! A collision erases the closest qualifying sample. The stored value is zero
//! regardless of the requested value unless `WriteMode::Requested` is chosen.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::grid::{GridError, Sample, ScalarGrid};

/// What value a mutation stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WriteMode {
    /// Always store 0.0, ignoring the requested value
    #[default]
    Zero,
    /// Store the requested value
    Requested,
}

impl WriteMode {
    /// Value actually written for a request
    #[inline]
    pub fn resolve(self, requested: f32) -> f32 {
        match self {
            WriteMode::Zero => 0.0,
            WriteMode::Requested => requested,
        }
    }
}

/// Writes the sample closest to a world position
#[derive(Debug, Clone, Copy, Default)]
pub struct GridMutator {
    pub write_mode: WriteMode,
}

impl GridMutator {
    pub fn new(write_mode: WriteMode) -> Self {
        Self { write_mode }
    }

    /// Write the closest sample at or above `value_floor`.
    ///
    /// Returns the written sample with its new value. If nothing qualifies the
    /// origin is written, following `ScalarGrid::closest_sample`.
    pub fn apply_at(
        &self,
        grid: &mut ScalarGrid,
        world_position: Vec2,
        new_value: f32,
        value_floor: f32,
    ) -> Result<Sample, GridError> {
        let closest = grid.try_closest_sample(world_position, value_floor);
        if closest.is_none() {
            log::warn!(
                "No sample >= {} near {:?}, writing origin",
                value_floor,
                world_position
            );
        }

        let mut target = closest.unwrap_or_default();
        target.value = self.write_mode.resolve(new_value);
        grid.set(target.position, target.value)?;

        log::debug!(
            "Mutated sample {:?} -> {} (requested {})",
            target.position,
            target.value,
            new_value
        );
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    fn grid() -> ScalarGrid {
        ScalarGrid::from_columns(&[vec![0.9, 0.2], vec![0.6, 0.8]]).unwrap()
    }

    #[test]
    fn test_apply_at_zero_writes_regardless_of_value() {
        let mut grid = grid();
        let written = GridMutator::default()
            .apply_at(&mut grid, Vec2::new(1.1, 0.9), 0.75, 0.5)
            .unwrap();
        assert_eq!(written.position, IVec2::new(1, 1));
        assert_eq!(written.value, 0.0);
        assert_eq!(grid.get(IVec2::new(1, 1)).unwrap(), 0.0);
        // Nothing else touched
        assert_eq!(grid.to_columns(), vec![vec![0.9, 0.2], vec![0.6, 0.0]]);
    }

    #[test]
    fn test_apply_at_respects_floor() {
        let mut grid = grid();
        // (0,1) is nearest but holds 0.2
        let written = GridMutator::default()
            .apply_at(&mut grid, Vec2::new(0.0, 1.0), 0.0, 0.5)
            .unwrap();
        assert_eq!(written.position, IVec2::new(0, 0));
        assert_eq!(grid.get(IVec2::new(0, 1)).unwrap(), 0.2);
    }

    #[test]
    fn test_apply_at_requested_mode() {
        let mut grid = grid();
        let mutator = GridMutator::new(WriteMode::Requested);
        let written = mutator
            .apply_at(&mut grid, Vec2::new(1.0, 0.0), 0.3, 0.0)
            .unwrap();
        assert_eq!(written.value, 0.3);
        assert_eq!(grid.get(IVec2::new(1, 0)).unwrap(), 0.3);
    }

    #[test]
    fn test_apply_at_non_finite_position_writes_origin() {
        let mut grid = grid();
        let written = GridMutator::default()
            .apply_at(&mut grid, Vec2::new(f32::NAN, 0.0), 0.0, 0.5)
            .unwrap();
        assert_eq!(written.position, IVec2::ZERO);
        assert_eq!(grid.to_columns(), vec![vec![0.0, 0.2], vec![0.6, 0.8]]);
    }

    #[test]
    fn test_apply_at_degenerate_writes_origin() {
        let mut grid = grid();
        let written = GridMutator::default()
            .apply_at(&mut grid, Vec2::new(1.0, 1.0), 0.5, 2.0)
            .unwrap();
        assert_eq!(written.position, IVec2::ZERO);
        assert_eq!(grid.get(IVec2::ZERO).unwrap(), 0.0);
    }
}
