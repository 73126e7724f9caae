// ngatools modules
use ngatools_utils::{f, ValueExt};

// crate modules
use crate::fields::FieldFile;
use crate::grid::Grid;
use crate::header::{Dimensions, RestartHeader};

// external crates
use ndarray::Array4;
use serde::Serialize;

/// Representation of data in a restart file
///
/// The byte layout is a fixed header followed by the name table and the field
/// data, all little endian.
///
/// ```text
/// offset 0:           <nx> <ny> <nz> <nvar>              (4 x i32)
/// offset 16:          <dt> <time>                        (2 x f64)
/// offset 32:          <name 0> ... <name nvar-1>         (nvar x 8 bytes)
/// offset 32+8*nvar:   <variable 0> ... <variable nvar-1> (nvar x nx*ny*nz f64)
/// ```
///
/// Each variable block is in column-major (Fortran) order, so that the first
/// index varies fastest.
///
/// Restart files carry no grid geometry. A [Grid] has to be supplied by the
/// caller for anything that needs coordinates.
///
/// Field data is only present if the file was read with `read_data = true`.
/// It is never serialised.
#[derive(Debug, Serialize, Default, Clone)]
pub struct Restart {
    /// Fixed header values
    pub header: RestartHeader,
    /// Variable names in file order
    pub names: Vec<String>,
    /// Field data with shape `(nx, ny, nz, nvar)`
    #[serde(skip)]
    pub data: Option<Array4<f64>>,
}

impl FieldFile for Restart {
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
        self.header.dt
    }

    fn time(&self) -> f64 {
        self.header.time
    }

    fn grid(&self) -> Option<&Grid> {
        None
    }

    fn data(&self) -> Option<&Array4<f64>> {
        self.data.as_ref()
    }
}

impl std::fmt::Display for Restart {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = "Restart {\n".to_string();
        s += &f!("    time: {}\n", self.header.time.sci(5, 2));
        s += &f!("    dt: {}\n", self.header.dt.sci(5, 2));
        s += &f!("    grid: {}\n", self.dimensions());
        s += &f!("    names: {:?}\n", self.names);
        s += &f!("    data: {}\n}}", self.data.is_some());

        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array, Axis, ShapeBuilder};

    fn example() -> Restart {
        let values = (0..12).map(|v| v as f64).collect::<Vec<f64>>();
        Restart {
            header: RestartHeader {
                nx: 3,
                ny: 2,
                nz: 1,
                nvar: 2,
                dt: 1.0e-3,
                time: 2.5,
            },
            names: vec!["U".into(), "V".into()],
            data: Some(Array::from_shape_vec((3, 2, 1, 2).f(), values).unwrap()),
        }
    }

    #[test]
    fn variable_lookup() {
        let restart = example();
        assert_eq!(restart.variable_index("V"), Some(1));
        assert_eq!(restart.variable_index("W"), None);

        let v = restart.variable("V").unwrap();
        assert_eq!(v.shape(), &[3, 2, 1]);
        assert_eq!(v[[0, 0, 0]], 6.0);
        assert_eq!(v[[2, 1, 0]], 11.0);
    }

    #[test]
    fn slice_xy_plane() {
        let restart = example();
        let plane = restart.slice(0, Axis(2), 0).unwrap();
        assert_eq!(plane.shape(), &[3, 2]);
        assert_eq!(plane[[1, 0]], 1.0);
        assert_eq!(plane[[0, 1]], 3.0);
    }

    #[test]
    fn slice_errors() {
        let restart = example();
        assert!(matches!(
            restart.slice(2, Axis(2), 0),
            Err(crate::Error::UnknownVariable { index: 2, nvar: 2 })
        ));
        assert!(matches!(
            restart.slice(0, Axis(0), 3),
            Err(crate::Error::SliceOutOfBounds {
                axis: 0,
                index: 3,
                length: 3
            })
        ));
        assert!(matches!(
            restart.slice(0, Axis(3), 0),
            Err(crate::Error::SliceOutOfBounds { length: 0, .. })
        ));

        let names_only = Restart {
            data: None,
            ..example()
        };
        assert!(matches!(
            names_only.slice(0, Axis(2), 0),
            Err(crate::Error::MissingData)
        ));
    }

    #[test]
    fn display_summary() {
        let s = example().to_string();
        assert!(s.contains("time: 2.50000e+00"));
        assert!(s.contains("grid: 3x2x1 (2 variables)"));
        assert!(s.contains("[\"U\", \"V\"]"));
    }
}
