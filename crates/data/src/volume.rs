// ngatools modules
use ngatools_utils::{f, SliceExt, ValueExt};

// crate modules
use crate::error::{Error, Result};
use crate::fields::FieldFile;
use crate::grid::Grid;
use crate::header::{Dimensions, VolumeHeader};

// external crates
use ndarray::{Array2, Array4, Axis};
use serde::Serialize;

/// Representation of data in a volume file
///
/// The byte layout differs from a restart file in that the grid coordinates
/// are included, and the timestep size and simulation time come after the
/// name table rather than in the fixed header. All values are little endian.
///
/// ```text
/// offset 0:   <ntime> <nx> <ny> <nz> <nvar>        (5 x i32)
/// offset 20:  <x 0> ... <x nx-1>                   (nx x f64)
///             <y 0> ... <y ny-1>                   (ny x f64)
///             <z 0> ... <z nz-1>                   (nz x f64)
///             <name 0> ... <name nvar-1>           (nvar x 8 bytes)
///             <dt> <time>                          (2 x f64)
///             <variable 0> ... <variable nvar-1>   (nvar x nx*ny*nz f64)
/// ```
///
/// Each variable block is in column-major (Fortran) order, so that the first
/// index varies fastest.
///
/// Field data is only present if the file was read with `read_data = true`.
/// It is never serialised.
#[derive(Debug, Serialize, Default, Clone)]
pub struct Volume {
    /// Fixed header values
    pub header: VolumeHeader,
    /// Grid point coordinates
    pub grid: Grid,
    /// Variable names in file order
    pub names: Vec<String>,
    /// Timestep size
    pub dt: f64,
    /// Simulation time
    pub time: f64,
    /// Field data with shape `(nx, ny, nz, nvar)`
    #[serde(skip)]
    pub data: Option<Array4<f64>>,
}

impl Volume {
    /// Number of time indices recorded in the header
    pub fn ntime(&self) -> i32 {
        self.header.ntime
    }

    /// Extract the 2D plane of a variable nearest to a coordinate
    ///
    /// Same as [slice()](FieldFile::slice), but with the plane position given
    /// as a coordinate along `axis` rather than a grid index. The closest grid
    /// point is used.
    ///
    /// ```rust
    /// # use ngatools_data::{read_volume, FieldFile};
    /// # use ndarray::Axis;
    /// let volume = read_volume("./data/volume_example.bin", true).unwrap();
    ///
    /// // x-y plane of the first variable closest to z = 0.5
    /// let plane = volume.slice_at(0, Axis(2), 0.5).unwrap();
    /// assert_eq!(plane.shape(), &[volume.dimensions().nx, volume.dimensions().ny]);
    /// ```
    pub fn slice_at(&self, variable: usize, axis: Axis, coordinate: f64) -> Result<Array2<f64>> {
        let points = self.grid.axis(axis.index()).ok_or(Error::SliceOutOfBounds {
            axis: axis.index(),
            index: 0,
            length: 0,
        })?;

        let index = points.find_nearest(coordinate)?;
        self.slice(variable, axis, index)
    }
}

impl FieldFile for Volume {
    fn dimensions(&self) -> Dimensions {
        Dimensions {
            nx: self.header.nx.max(0) as usize,
            ny: self.header.ny.max(0) as usize,
            nz: self.header.nz.max(0) as usize,
            nvar: self.header.nvar.max(0) as usize,
        }
    }

    fn names(&self) -> &[String] {
        &self.names
    }

    fn dt(&self) -> f64 {
        self.dt
    }

    fn time(&self) -> f64 {
        self.time
    }

    fn grid(&self) -> Option<&Grid> {
        Some(&self.grid)
    }

    fn data(&self) -> Option<&Array4<f64>> {
        self.data.as_ref()
    }
}

impl std::fmt::Display for Volume {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = "Volume {\n".to_string();
        s += &f!("    time: {}\n", self.time.sci(5, 2));
        s += &f!("    dt: {}\n", self.dt.sci(5, 2));
        s += &f!("    ntime: {}\n", self.header.ntime);
        s += &f!("    grid: {}\n", self.dimensions());
        s += &f!("    x bounds: {}\n", self.grid.bounds_summary(0));
        s += &f!("    y bounds: {}\n", self.grid.bounds_summary(1));
        s += &f!("    z bounds: {}\n", self.grid.bounds_summary(2));
        s += &f!("    names: {:?}\n", self.names);
        s += &f!("    data: {}\n}}", self.data.is_some());

        write!(f, "{}", s)
    }
}
