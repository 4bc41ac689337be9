//! Spatial queries over the sample grid
//!
//! Distances are measured from a world position straight to each sample's
//! integer grid position; there is no world transform. Samples whose value is
//! below `value_floor` are skipped.

use glam::Vec2;

use super::grid::{Sample, ScalarGrid};
use crate::distance_to_grid;

impl ScalarGrid {
    /// Closest sample at or above `value_floor`, or `None` if every sample is skipped.
    ///
    /// Ties keep the sample seen first in scan order. Distances that are not
    /// below `f32::MAX` (infinite or NaN) never qualify.
    pub fn try_closest_sample(&self, target: Vec2, value_floor: f32) -> Option<Sample> {
        let mut min_dist = f32::MAX;
        let mut closest = None;

        for sample in self.samples() {
            if sample.value < value_floor {
                continue;
            }
            let dist = distance_to_grid(target, sample.position);
            if dist < min_dist {
                min_dist = dist;
                closest = Some(sample);
            }
        }

        closest
    }

    /// Closest sample at or above `value_floor`.
    ///
    /// When every sample is skipped this returns `Sample::default()`, a zero
    /// value at the origin. Callers should treat that as a no-op result.
    pub fn closest_sample(&self, target: Vec2, value_floor: f32) -> Sample {
        self.try_closest_sample(target, value_floor)
            .unwrap_or_default()
    }

    /// All samples at or above `value_floor` strictly closer than `radius`, in scan order
    pub fn samples_within_radius(&self, target: Vec2, radius: f32, value_floor: f32) -> Vec<Sample> {
        self.samples()
            .filter(|s| s.value >= value_floor)
            .filter(|s| distance_to_grid(target, s.position) < radius)
            .collect()
    }
}
