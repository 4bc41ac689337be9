//! Scalar sample grid
//!
//! Samples are stored flat in x-major order (`index = x * height + y`), which
//! is also the scan order every query walks: x outer, y inner.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by grid and cell access
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("position ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    #[error("no cell exists at ({x}, {y}) in a {width}x{height} grid")]
    InvalidCell {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    #[error("grid dimensions must be at least 1x1, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("column {column} has {len} samples, expected {expected}")]
    RaggedColumns {
        column: usize,
        len: usize,
        expected: usize,
    },
}

/// One scalar sample point
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sample {
    pub value: f32,
    /// Integer grid position (identity, never changes)
    pub position: IVec2,
}

/// Fixed-size 2D grid of samples
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarGrid {
    width: usize,
    height: usize,
    samples: Vec<Sample>,
}

impl ScalarGrid {
    /// Create a grid with every sample set to `fill`
    pub fn new(width: usize, height: usize, fill: f32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }

        let samples = (0..width)
            .flat_map(|x| {
                (0..height).map(move |y| Sample {
                    value: fill,
                    position: IVec2::new(x as i32, y as i32),
                })
            })
            .collect();

        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Build a grid from `values[x][y]`
    pub fn from_columns(values: &[Vec<f32>]) -> Result<Self, GridError> {
        let width = values.len();
        let height = values.first().map(Vec::len).unwrap_or(0);

        if let Some((column, col)) = values
            .iter()
            .enumerate()
            .find(|(_, col)| col.len() != height)
        {
            return Err(GridError::RaggedColumns {
                column,
                len: col.len(),
                expected: height,
            });
        }

        let mut grid = Self::new(width, height, 0.0)?;
        for (sample, value) in grid.samples.iter_mut().zip(values.iter().flatten()) {
            sample.value = *value;
        }
        Ok(grid)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether a position lies inside `[0, width) x [0, height)`
    #[inline]
    pub fn contains(&self, position: IVec2) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as usize) < self.width
            && (position.y as usize) < self.height
    }

    fn index(&self, position: IVec2) -> Result<usize, GridError> {
        if !self.contains(position) {
            return Err(GridError::OutOfBounds {
                x: position.x,
                y: position.y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(position.x as usize * self.height + position.y as usize)
    }

    /// Read the value at a position
    pub fn get(&self, position: IVec2) -> Result<f32, GridError> {
        Ok(self.samples[self.index(position)?].value)
    }

    /// Overwrite the value at a position
    pub fn set(&mut self, position: IVec2, value: f32) -> Result<(), GridError> {
        let index = self.index(position)?;
        self.samples[index].value = value;
        Ok(())
    }

    /// Copy of the sample at a position
    pub fn sample(&self, position: IVec2) -> Result<Sample, GridError> {
        Ok(self.samples[self.index(position)?])
    }

    /// Whether the value at a position is strictly below `threshold`.
    ///
    /// Classification treats `value > threshold` as closed, so a value equal
    /// to the threshold is neither open nor closed.
    pub fn is_open(&self, position: IVec2, threshold: f32) -> Result<bool, GridError> {
        Ok(self.get(position)? < threshold)
    }

    /// Snapshot of every sample in scan order
    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        self.samples.iter().copied()
    }

    /// Values as `values[x][y]`
    pub fn to_columns(&self) -> Vec<Vec<f32>> {
        self.samples
            .chunks(self.height)
            .map(|col| col.iter().map(|s| s.value).collect())
            .collect()
    }
}
