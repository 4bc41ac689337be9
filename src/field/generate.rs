//! Seeded field generation
//!
//! Fills a grid with uniform values in [0, 1). Same seed, same field.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::grid::{GridError, ScalarGrid};

/// Uniform random values as `values[x][y]`
pub fn random_values(width: usize, height: usize, seed: u64) -> Vec<Vec<f32>> {
    let mut rng = Pcg32::seed_from_u64(seed);
    (0..width)
        .map(|_| (0..height).map(|_| rng.random_range(0.0..1.0)).collect())
        .collect()
}

/// Grid of uniform random values
pub fn random_grid(width: usize, height: usize, seed: u64) -> Result<ScalarGrid, GridError> {
    let grid = ScalarGrid::from_columns(&random_values(width, height, seed))?;
    log::debug!("Generated {}x{} field (seed {})", width, height, seed);
    Ok(grid)
}
