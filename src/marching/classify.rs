//! Cell classification
//!
//! Cell `(x, y)` spans samples `(x, y)` to `(x+1, y+1)`. Only interior cells
//! exist: `[0, width-1) x [0, height-1)`.

use glam::IVec2;

use super::config::{BoundaryConfiguration, Corner};
use crate::field::{GridError, ScalarGrid};

fn check_cell(grid: &ScalarGrid, cell: IVec2) -> Result<(), GridError> {
    let valid = cell.x >= 0
        && cell.y >= 0
        && (cell.x as usize) < grid.width() - 1
        && (cell.y as usize) < grid.height() - 1;

    if valid {
        Ok(())
    } else {
        Err(GridError::InvalidCell {
            x: cell.x,
            y: cell.y,
            width: grid.width(),
            height: grid.height(),
        })
    }
}

/// Corner values in canonical order (top-left, top-right, bottom-right, bottom-left)
fn corner_values(grid: &ScalarGrid, cell: IVec2) -> Result<[f32; 4], GridError> {
    check_cell(grid, cell)?;

    let mut values = [0.0; 4];
    for (value, corner) in values.iter_mut().zip(Corner::ALL) {
        *value = grid.get(cell + corner.offset())?;
    }
    Ok(values)
}

/// Which corners of a cell are closed (value strictly above `threshold`)
pub fn classify(
    grid: &ScalarGrid,
    cell: IVec2,
    threshold: f32,
) -> Result<BoundaryConfiguration, GridError> {
    let values = corner_values(grid, cell)?;
    Ok(BoundaryConfiguration::from_corners(values.map(|v| v > threshold)))
}

/// Mean of a cell's four corner values
pub fn average_value(grid: &ScalarGrid, cell: IVec2) -> Result<f32, GridError> {
    let values = corner_values(grid, cell)?;
    Ok(values.iter().sum::<f32>() / 4.0)
}

/// Every interior cell in scan order
pub fn cells(grid: &ScalarGrid) -> impl Iterator<Item = IVec2> + use<> {
    let (w, h) = (grid.width() as i32 - 1, grid.height() as i32 - 1);
    (0..w).flat_map(move |x| (0..h).map(move |y| IVec2::new(x, y)))
}

/// Interior cells that use the sample at `position` as a corner
pub fn cells_touching(grid: &ScalarGrid, position: IVec2) -> Vec<IVec2> {
    [IVec2::new(-1, -1), IVec2::new(-1, 0), IVec2::new(0, -1), IVec2::ZERO]
        .into_iter()
        .map(|offset| position + offset)
        .filter(|cell| check_cell(grid, *cell).is_ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marching::TileResolver;
    use proptest::prelude::*;

    #[test]
    fn test_single_cell_scenario() {
        // (0,0)=0, (1,0)=0, (0,1)=0, (1,1)=1
        let grid = ScalarGrid::from_columns(&[vec![0.0, 0.0], vec![0.0, 1.0]]).unwrap();
        let config = classify(&grid, IVec2::ZERO, 0.5).unwrap();
        assert_eq!(config.key(), "0100");

        let resolver = TileResolver::canonical();
        let descriptor = resolver.descriptor(config);
        assert_eq!(descriptor.to_string(), "10001");
        assert_eq!(descriptor.base.key(), "1000");
        assert_eq!(descriptor.rotation, 1);
    }

    #[test]
    fn test_corner_sampling_order() {
        // Each corner gets a distinct value above/below threshold
        let grid = ScalarGrid::from_columns(&[
            vec![0.0, 1.0], // (0,0)=BL open, (0,1)=TL closed
            vec![1.0, 0.0], // (1,0)=BR closed, (1,1)=TR open
        ])
        .unwrap();
        assert_eq!(classify(&grid, IVec2::ZERO, 0.5).unwrap().key(), "1010");
    }

    #[test]
    fn test_threshold_is_strict() {
        let grid = ScalarGrid::new(2, 2, 0.5).unwrap();
        assert_eq!(classify(&grid, IVec2::ZERO, 0.5).unwrap().key(), "0000");
        // Equal to threshold is not open either
        assert!(!grid.is_open(IVec2::ZERO, 0.5).unwrap());
    }

    #[test]
    fn test_cell_bounds() {
        let grid = ScalarGrid::new(4, 3, 1.0).unwrap();
        assert!(classify(&grid, IVec2::new(2, 1), 0.5).is_ok());
        assert_eq!(
            classify(&grid, IVec2::new(3, 0), 0.5),
            Err(GridError::InvalidCell {
                x: 3,
                y: 0,
                width: 4,
                height: 3
            })
        );
        assert!(classify(&grid, IVec2::new(0, 2), 0.5).is_err());
        assert!(classify(&grid, IVec2::new(-1, 0), 0.5).is_err());
        assert!(average_value(&grid, IVec2::new(3, 2)).is_err());
    }

    #[test]
    fn test_cells_enumeration() {
        let grid = ScalarGrid::new(3, 4, 0.0).unwrap();
        let all: Vec<IVec2> = cells(&grid).collect();
        assert_eq!(all.len(), 2 * 3);
        assert_eq!(all[0], IVec2::new(0, 0));
        assert_eq!(all[1], IVec2::new(0, 1));
        assert_eq!(*all.last().unwrap(), IVec2::new(1, 2));

        let thin = ScalarGrid::new(1, 5, 0.0).unwrap();
        assert_eq!(cells(&thin).count(), 0);
    }

    #[test]
    fn test_cells_touching() {
        let grid = ScalarGrid::new(3, 3, 0.0).unwrap();
        assert_eq!(cells_touching(&grid, IVec2::ZERO), vec![IVec2::ZERO]);
        assert_eq!(cells_touching(&grid, IVec2::new(1, 1)).len(), 4);
        assert_eq!(cells_touching(&grid, IVec2::new(2, 2)), vec![IVec2::new(1, 1)]);
        assert_eq!(
            cells_touching(&grid, IVec2::new(1, 0)),
            vec![IVec2::new(0, 0), IVec2::new(1, 0)]
        );
    }

    fn arb_grid() -> impl Strategy<Value = Vec<Vec<f32>>> {
        (2usize..7, 2usize..7).prop_flat_map(|(w, h)| {
            prop::collection::vec(prop::collection::vec(0.0f32..1.0, h), w)
        })
    }

    proptest! {
        #[test]
        fn prop_average_is_corner_mean(values in arb_grid()) {
            let grid = ScalarGrid::from_columns(&values).unwrap();
            for cell in cells(&grid) {
                let (x, y) = (cell.x as usize, cell.y as usize);
                let expected =
                    (values[x][y + 1] + values[x + 1][y + 1] + values[x + 1][y] + values[x][y]) / 4.0;
                let avg = average_value(&grid, cell).unwrap();
                prop_assert!((avg - expected).abs() < 1e-6);
            }
        }

        #[test]
        fn prop_classify_yields_valid_key(values in arb_grid(), threshold in 0.0f32..1.0) {
            let grid = ScalarGrid::from_columns(&values).unwrap();
            let resolver = TileResolver::canonical();
            for cell in cells(&grid) {
                let config = classify(&grid, cell, threshold).unwrap();
                let key = config.key();
                prop_assert_eq!(key.len(), 4);
                prop_assert!(key.chars().all(|c| c == '0' || c == '1'));
                prop_assert!(resolver.resolve_key(&key).is_ok());
            }
        }
    }
}
