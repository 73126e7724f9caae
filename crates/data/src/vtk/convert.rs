// standard library
use std::ops::RangeInclusive;

// ngatools modules
use ngatools_utils::f;

// internal modules
use crate::error::{Error, Result};
use crate::fields::FieldFile;
use crate::grid::Grid;
use crate::restart::Restart;
use crate::vtk::builder::VolumeToVtkBuilder;
use crate::volume::Volume;

// extrenal crates
use log::warn;
use ndarray::Axis;
use vtkio::model::{
    Attribute, Attributes, ByteOrder, Coordinates, DataArray, DataSet, ElementType, Extent,
    IOBuffer, RangeExtent, RectilinearGridPiece, Version, Vtk,
};

/// Convert field data to vtk formats for plotting
///
/// All of the logic for converting field data into the right VTK types and
/// formats is implemented here.
///
/// The grid coordinates are points of a rectilinear grid, and every variable
/// is written as a scalar point data array named after the variable. Blank
/// names are replaced with `var_<index>`.
///
/// The fields remain public for direct use, but for convenience and style
/// preference a builder pattern is also implemented and recommended.
///
/// # Formatting
///
/// Most useful is the byte ordering, which is important for binary file
/// compatability with plotting software. ParaView does not care, but something
/// like Visit only likes big endian. This is the default for convenience but is
/// completely up to the user.
///
/// ```rust
/// # use ngatools_data::vtk::{VolumeToVtk, ByteOrder};
/// let converter = VolumeToVtk::builder()
///     .byte_order(ByteOrder::LittleEndian)
///     .build();
/// ```
///
/// # Restart data
///
/// Restart files have no grid coordinates, so the geometry has to be given
/// explicitly with [convert_restart()](VolumeToVtk::convert_restart). A
/// [Grid::uniform()] grid will do for a quick look.
#[derive(Debug, PartialEq)]
pub struct VolumeToVtk {
    /// Target variable indices, all variables if empty
    pub variables: Vec<usize>,
    /// Byte ordering as big or little endian
    pub byte_order: ByteOrder,
}

// Public API
impl VolumeToVtk {
    /// Start with the default configuration
    pub fn new() -> VolumeToVtk {
        Default::default()
    }

    /// Get an instance of the [VolumeToVtkBuilder]
    pub fn builder() -> VolumeToVtkBuilder {
        VolumeToVtkBuilder::default()
    }

    /// Convert a [Volume] to a Vtk object
    ///
    /// Once the configuration is set through either the builder or changing the
    /// fields directly, convert any [Volume] read with field data into a Vtk
    /// ready for writing or futher processing.
    pub fn convert(&self, volume: &Volume) -> Result<Vtk> {
        self.rectilinear_vtk(volume, &volume.grid, "Volume")
    }

    /// Convert a [Restart] to a Vtk object on a caller-supplied grid
    ///
    /// The number of points on each axis of the `grid` must match the
    /// restart dimensions.
    pub fn convert_restart(&self, restart: &Restart, grid: &Grid) -> Result<Vtk> {
        self.rectilinear_vtk(restart, grid, "Restart")
    }
}

impl Default for VolumeToVtk {
    fn default() -> Self {
        VolumeToVtkBuilder::default().build()
    }
}

/// Implementations for processing rectilinear grid types
impl VolumeToVtk {
    /// Convert field data to vtkio types for writing
    fn rectilinear_vtk<F: FieldFile>(&self, file: &F, grid: &Grid, kind: &str) -> Result<Vtk> {
        let dimensions = file.dimensions();
        grid.check_dimensions(&dimensions)?;

        Ok(Vtk {
            version: Version::Auto,
            title: f!("{kind} data at time {:e}", file.time()),
            byte_order: self.byte_order,
            file_path: None,
            data: DataSet::inline(RectilinearGridPiece {
                extent: Self::extent(grid),
                coords: Self::coordinates(grid),
                data: self.collect_attributes(file)?,
            }),
        })
    }

    /// Defines number of grid points in each extent for the rectilinear grid
    fn extent(grid: &Grid) -> Extent {
        let [nx, ny, nz] = grid.lengths();
        let range_ext: RangeExtent = [
            RangeInclusive::new(0, nx as i32 - 1),
            RangeInclusive::new(0, ny as i32 - 1),
            RangeInclusive::new(0, nz as i32 - 1),
        ];
        Extent::Ranges(range_ext)
    }

    /// Defines coordinates for rectilinear grid from the grid points
    fn coordinates(grid: &Grid) -> Coordinates {
        Coordinates {
            x: IOBuffer::F64(grid.x.clone()),
            y: IOBuffer::F64(grid.y.clone()),
            z: IOBuffer::F64(grid.z.clone()),
        }
    }

    /// Collect every requested variable as point data
    fn collect_attributes<F: FieldFile>(&self, file: &F) -> Result<Attributes> {
        let data = file.data().ok_or(Error::MissingData)?;
        let names = file.names();

        // guard against hand-built files where names and data disagree
        let nvar = data.len_of(Axis(3)).min(names.len());

        let mut attributes: Attributes = Attributes::new();
        for index in self.variable_indices(nvar) {
            // vtk wants x varying fastest, which is the reverse of logical order
            let field = data.index_axis(Axis(3), index);
            let values = field.t().iter().copied().collect::<Vec<f64>>();

            let name = match names[index].is_empty() {
                true => f!("var_{index}"),
                false => names[index].clone(),
            };

            let point_data = DataArray {
                name,
                elem: ElementType::Scalars {
                    num_comp: 1,
                    lookup_table: None,
                },
                data: IOBuffer::F64(values),
            };
            attributes.point.push(Attribute::DataArray(point_data));
        }

        Ok(attributes)
    }

    /// Requested variable indices that actually exist
    fn variable_indices(&self, nvar: usize) -> Vec<usize> {
        if self.variables.is_empty() {
            return (0..nvar).collect();
        }

        let valid = self
            .variables
            .iter()
            .copied()
            .filter(|&i| i < nvar)
            .collect::<Vec<usize>>();

        if valid.is_empty() {
            warn!("Warning: No valid variable index provided, defaulting to all");
            (0..nvar).collect()
        } else {
            valid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::{RestartHeader, VolumeHeader};
    use ndarray::{Array, ShapeBuilder};

    fn example() -> Volume {
        let values = (0..12).map(|v| v as f64).collect::<Vec<f64>>();
        Volume {
            header: VolumeHeader {
                ntime: 1,
                nx: 3,
                ny: 2,
                nz: 1,
                nvar: 2,
            },
            grid: Grid {
                x: vec![0.0, 0.5, 1.0],
                y: vec![0.0, 2.0],
                z: vec![0.0],
            },
            names: vec!["U".into(), "".into()],
            dt: 0.1,
            time: 1.0,
            data: Some(Array::from_shape_vec((3, 2, 1, 2).f(), values).unwrap()),
        }
    }

    fn point_arrays(vtk: &Vtk) -> Vec<(String, Vec<f64>)> {
        match &vtk.data {
            DataSet::RectilinearGrid { pieces, .. } => match &pieces[0] {
                vtkio::model::Piece::Inline(piece) => piece
                    .data
                    .point
                    .iter()
                    .map(|attribute| match attribute {
                        Attribute::DataArray(DataArray {
                            name,
                            data: IOBuffer::F64(values),
                            ..
                        }) => (name.clone(), values.clone()),
                        _ => panic!("unexpected attribute type"),
                    })
                    .collect(),
                _ => panic!("expected an inline piece"),
            },
            _ => panic!("expected a rectilinear grid"),
        }
    }

    #[test]
    fn volume_to_rectilinear_grid() {
        let vtk = VolumeToVtk::new().convert(&example()).unwrap();
        let arrays = point_arrays(&vtk);

        assert_eq!(arrays.len(), 2);
        assert_eq!(arrays[0].0, "U");
        assert_eq!(arrays[1].0, "var_1");

        // file order is already x fastest
        assert_eq!(arrays[0].1, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(arrays[1].1, vec![6.0, 7.0, 8.0, 9.0, 10.0, 11.0]);
    }

    #[test]
    fn extent_from_grid() {
        let extent = VolumeToVtk::extent(&example().grid);
        assert_eq!(
            extent,
            Extent::Ranges([
                RangeInclusive::new(0, 2),
                RangeInclusive::new(0, 1),
                RangeInclusive::new(0, 0)
            ])
        );
    }

    #[test]
    fn variable_subset() {
        let converter = VolumeToVtk::builder().variables(vec![1, 7]).build();
        let vtk = converter.convert(&example()).unwrap();
        assert_eq!(point_arrays(&vtk).len(), 1);

        // nothing valid falls back to everything
        let converter = VolumeToVtk::builder().variables(vec![7]).build();
        let vtk = converter.convert(&example()).unwrap();
        assert_eq!(point_arrays(&vtk).len(), 2);
    }

    #[test]
    fn restart_needs_matching_grid() {
        let volume = example();
        let restart = Restart {
            header: RestartHeader {
                nx: 3,
                ny: 2,
                nz: 1,
                nvar: 2,
                dt: 0.1,
                time: 1.0,
            },
            names: volume.names.clone(),
            data: volume.data.clone(),
        };

        let converter = VolumeToVtk::new();
        assert!(converter
            .convert_restart(&restart, &Grid::uniform(3, 2, 1))
            .is_ok());
        assert!(matches!(
            converter.convert_restart(&restart, &Grid::uniform(3, 3, 1)),
            Err(Error::GridMismatch { axis: 1, .. })
        ));
    }

    #[test]
    fn missing_data() {
        let volume = Volume {
            data: None,
            ..example()
        };
        assert!(matches!(
            VolumeToVtk::new().convert(&volume),
            Err(Error::MissingData)
        ));
    }
}
