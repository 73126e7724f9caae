// ngatools modules
use ngatools_utils::{f, SliceExt, ValueExt};

// crate modules
use crate::error::{Error, Result};
use crate::header::Dimensions;

// external crates
use serde::{Deserialize, Serialize};

/// Grid point coordinates along each axis
///
/// Volume files carry these directly after the header. Restart files do not,
/// so anything that needs geometry for restart data must supply a [Grid].
///
/// Coordinates are expected to be monotonic, but not necessarily strictly
/// monotonic.
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
pub struct Grid {
    /// Point coordinates in x
    pub x: Vec<f64>,
    /// Point coordinates in y
    pub y: Vec<f64>,
    /// Point coordinates in z
    pub z: Vec<f64>,
}

impl Grid {
    /// Grid with unit spacing starting at the origin
    ///
    /// Useful for visualising restart data when the true geometry is not
    /// available.
    ///
    /// ```rust
    /// # use ngatools_data::Grid;
    /// let grid = Grid::uniform(3, 2, 1);
    /// assert_eq!(grid.x, vec![0.0, 1.0, 2.0]);
    /// assert_eq!(grid.y, vec![0.0, 1.0]);
    /// assert_eq!(grid.z, vec![0.0]);
    /// ```
    pub fn uniform(nx: usize, ny: usize, nz: usize) -> Self {
        let points = |n: usize| -> Vec<f64> { (0..n).map(|i| i as f64).collect() };
        Self {
            x: points(nx),
            y: points(ny),
            z: points(nz),
        }
    }

    /// Coordinates along an axis index, 0=x, 1=y, 2=z
    pub fn axis(&self, axis: usize) -> Option<&[f64]> {
        match axis {
            0 => Some(&self.x),
            1 => Some(&self.y),
            2 => Some(&self.z),
            _ => None,
        }
    }

    /// Number of points along each axis
    pub fn lengths(&self) -> [usize; 3] {
        [self.x.len(), self.y.len(), self.z.len()]
    }

    /// True if every axis is in ascending order
    pub fn is_monotonic(&self) -> bool {
        self.x.is_ascending() && self.y.is_ascending() && self.z.is_ascending()
    }

    /// Make sure the number of points on every axis matches the data
    pub fn check_dimensions(&self, dimensions: &Dimensions) -> Result<()> {
        let expected = [dimensions.nx, dimensions.ny, dimensions.nz];
        for (axis, (expected, found)) in expected.into_iter().zip(self.lengths()).enumerate() {
            if expected != found {
                return Err(Error::GridMismatch {
                    axis,
                    expected,
                    found,
                });
            }
        }
        Ok(())
    }

    /// Short `min, max` summary of one axis for display
    pub(crate) fn bounds_summary(&self, axis: usize) -> String {
        match self.axis(axis).map(|values| values.finite_range()) {
            Some(Ok((min, max))) => f!("{}, {}", min.sci(5, 2), max.sci(5, 2)),
            _ => "none".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_lookup() {
        let grid = Grid::uniform(2, 3, 4);
        assert_eq!(grid.axis(1).unwrap().len(), 3);
        assert!(grid.axis(3).is_none());
        assert_eq!(grid.lengths(), [2, 3, 4]);
    }

    #[test]
    fn mismatched_grid() {
        let grid = Grid::uniform(2, 3, 4);
        let dims = Dimensions::try_from_raw(2, 3, 5, 1).unwrap();
        assert!(matches!(
            grid.check_dimensions(&dims),
            Err(Error::GridMismatch {
                axis: 2,
                expected: 5,
                found: 4
            })
        ));

        let dims = Dimensions::try_from_raw(2, 3, 4, 1).unwrap();
        assert!(grid.check_dimensions(&dims).is_ok());
    }

    #[test]
    fn monotonic_check() {
        let mut grid = Grid::uniform(3, 1, 1);
        assert!(grid.is_monotonic());
        grid.x = vec![0.0, 2.0, 1.0];
        assert!(!grid.is_monotonic());
    }

    #[test]
    fn bounds_text() {
        let grid = Grid::uniform(3, 1, 1);
        assert_eq!(grid.bounds_summary(0), "0.00000e+00, 2.00000e+00");
        assert_eq!(grid.bounds_summary(5), "none");
    }
}
