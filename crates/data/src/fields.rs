//! Common access to the content of restart and volume files

// crate modules
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::header::Dimensions;

// external crates
use ndarray::{Array2, Array4, ArrayView3, Axis};

/// Shared interface for decoded restart and volume files
///
/// Both variants hold the same core content: grid dimensions, an ordered list
/// of variable names, the timestep size and simulation time, and optionally
/// the full 4D field data array indexed `[x, y, z, variable]`.
///
/// Everything that only depends on this content (variable lookup, slicing,
/// summaries, VTK conversion) is implemented once here.
pub trait FieldFile {
    /// Grid and variable counts from the file header
    fn dimensions(&self) -> Dimensions;

    /// Variable names in file order
    fn names(&self) -> &[String];

    /// Timestep size
    fn dt(&self) -> f64;

    /// Simulation time
    fn time(&self) -> f64;

    /// Grid coordinates, if the file carries any
    fn grid(&self) -> Option<&Grid>;

    /// Field data with shape `(nx, ny, nz, nvar)`, if it was read
    fn data(&self) -> Option<&Array4<f64>>;

    /// Index of the first variable called `name`
    ///
    /// Names are not guaranteed to be unique, so any duplicates after the
    /// first are ignored.
    fn variable_index(&self, name: &str) -> Option<usize> {
        self.names().iter().position(|n| n == name)
    }

    /// 3D view of the first variable called `name`
    fn variable(&self, name: &str) -> Option<ArrayView3<'_, f64>> {
        let index = self.variable_index(name)?;
        self.data()
            .filter(|data| index < data.len_of(Axis(3)))
            .map(|data| data.index_axis(Axis(3), index))
    }

    /// Extract a 2D plane of a single variable
    ///
    /// The plane is normal to `axis` at grid index `index`, with the remaining
    /// two axes in their original order. For example, slicing `Axis(2)` gives
    /// an array indexed `[x, y]`.
    ///
    /// Fails if no field data was read, or if either index is out of range.
    fn slice(&self, variable: usize, axis: Axis, index: usize) -> Result<Array2<f64>> {
        let data = self.data().ok_or(Error::MissingData)?;

        let nvar = data.len_of(Axis(3));
        if variable >= nvar {
            return Err(Error::UnknownVariable {
                index: variable,
                nvar,
            });
        }

        // only the three spatial axes are valid slice normals
        let field = data.index_axis(Axis(3), variable);
        let length = match axis.index() {
            0..=2 => field.len_of(axis),
            _ => 0,
        };

        if index >= length {
            return Err(Error::SliceOutOfBounds {
                axis: axis.index(),
                index,
                length,
            });
        }

        Ok(field.index_axis(axis, index).to_owned())
    }
}
