// ngatools modules
use ngatools_utils::f;

// crate modules
use crate::error::{Error, Result};

// external crates
use serde::{Deserialize, Serialize};

/// Fixed header at the start of a restart file
///
/// The first 32 bytes of every restart file, all little endian.
///
/// ```text
/// offset 0:  <nx: i32> <ny: i32> <nz: i32> <nvar: i32>
/// offset 16: <dt: f64> <time: f64>
/// ```
///
/// Field order matches the byte order on disk so the header deserialises
/// directly from the raw buffer.
#[derive(Deserialize, Serialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct RestartHeader {
    /// Number of grid points in x
    pub nx: i32,
    /// Number of grid points in y
    pub ny: i32,
    /// Number of grid points in z
    pub nz: i32,
    /// Number of field variables
    pub nvar: i32,
    /// Timestep size
    pub dt: f64,
    /// Simulation time
    pub time: f64,
}

impl RestartHeader {
    /// Size of the header on disk
    pub const BYTE_LENGTH: u64 = 32;

    /// Validated grid and variable counts
    pub fn dimensions(&self) -> Result<Dimensions> {
        Dimensions::try_from_raw(self.nx, self.ny, self.nz, self.nvar)
    }
}

/// Fixed header at the start of a volume file
///
/// The first 20 bytes of every volume file, all little endian.
///
/// ```text
/// offset 0: <ntime: i32> <nx: i32> <ny: i32> <nz: i32> <nvar: i32>
/// ```
///
/// Unlike the restart variant, the timestep size and simulation time are not
/// part of the fixed header. They follow the grid coordinates and name table.
#[derive(Deserialize, Serialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct VolumeHeader {
    /// Number of time indices
    pub ntime: i32,
    /// Number of grid points in x
    pub nx: i32,
    /// Number of grid points in y
    pub ny: i32,
    /// Number of grid points in z
    pub nz: i32,
    /// Number of field variables
    pub nvar: i32,
}

impl VolumeHeader {
    /// Size of the header on disk
    pub const BYTE_LENGTH: u64 = 20;

    /// Validated grid and variable counts
    pub fn dimensions(&self) -> Result<Dimensions> {
        Dimensions::try_from_raw(self.nx, self.ny, self.nz, self.nvar)
    }
}

/// Grid and variable counts shared by both file variants
///
/// Only ever constructed from header values that are strictly positive, and
/// where the full payload size can be represented in memory. All of the size
/// helpers are therefore free of overflow.
#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Number of grid points in x
    pub nx: usize,
    /// Number of grid points in y
    pub ny: usize,
    /// Number of grid points in z
    pub nz: usize,
    /// Number of field variables
    pub nvar: usize,
}

impl Dimensions {
    /// Validate raw header values
    ///
    /// Every count must be positive, and the byte length of the full payload
    /// must fit within `isize::MAX` to ever be held in memory.
    ///
    /// ```rust
    /// # use ngatools_data::Dimensions;
    /// let dims = Dimensions::try_from_raw(4, 3, 2, 5).unwrap();
    /// assert_eq!(dims.cells(), 24);
    /// assert_eq!(dims.payload_len(), 120);
    ///
    /// // non-positive values are rejected
    /// assert!(Dimensions::try_from_raw(4, 0, 2, 5).is_err());
    /// assert!(Dimensions::try_from_raw(4, 3, 2, -1).is_err());
    /// ```
    pub fn try_from_raw(nx: i32, ny: i32, nz: i32, nvar: i32) -> Result<Self> {
        for (label, value) in [("nx", nx), ("ny", ny), ("nz", nz), ("nvar", nvar)] {
            if value <= 0 {
                return Err(Error::MalformedHeader(f!(
                    "{label} must be positive (found {value})"
                )));
            }
        }

        let dimensions = Self {
            nx: nx as usize,
            ny: ny as usize,
            nz: nz as usize,
            nvar: nvar as usize,
        };

        // values are positive i32 so u64 arithmetic is only at risk in products
        let byte_length = [nx, ny, nz, nvar]
            .iter()
            .try_fold(std::mem::size_of::<f64>() as u64, |acc, &v| {
                acc.checked_mul(v as u64)
            });

        match byte_length {
            Some(length) if length <= isize::MAX as u64 => Ok(dimensions),
            _ => Err(Error::MalformedHeader(f!(
                "{nx}x{ny}x{nz} grid with {nvar} variables is too large to represent"
            ))),
        }
    }

    /// Number of grid points in a single variable block
    pub fn cells(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// Number of float values in the full payload
    pub fn payload_len(&self) -> usize {
        self.cells() * self.nvar
    }

    /// Expected byte length of a single variable block
    pub fn block_byte_length(&self) -> u64 {
        (self.cells() * std::mem::size_of::<f64>()) as u64
    }

    /// Expected byte length of the full payload
    pub fn payload_byte_length(&self) -> u64 {
        self.block_byte_length() * self.nvar as u64
    }

    /// Expected byte length of the variable name table
    pub fn name_table_byte_length(&self) -> u64 {
        (self.nvar * crate::name::VariableName::BYTE_LENGTH) as u64
    }

    /// Array shape of the decoded field data, `(nx, ny, nz, nvar)`
    pub fn shape(&self) -> (usize, usize, usize, usize) {
        (self.nx, self.ny, self.nz, self.nvar)
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}x{} ({} variables)", self.nx, self.ny, self.nz, self.nvar)
    }
}
