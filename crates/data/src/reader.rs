//! Read operations for restart and volume binary files
//!
//! Both variants are flat binary streams with no record markers. Integers are
//! signed 32-bit and floats are 64-bit IEEE 754, both little endian. The field
//! data for every variable is a contiguous block in column-major (Fortran)
//! order.
//!
//! Everything is read in a single forward pass. When reading from a file the
//! total length is known up front, so declared sizes are checked against it
//! before any large allocation is made.

// standard library
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

// ngatools modules
use ngatools_utils::SliceExt;

// crate modules
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::header::{Dimensions, RestartHeader, VolumeHeader};
use crate::name::decode_name_table;
use crate::restart::Restart;
use crate::volume::Volume;

// external crates
use bincode::deserialize;
use log::{debug, info, log_enabled, trace, warn, Level};
use ndarray::{Array, Array4, ShapeBuilder};

/// Deserialise a binary restart file
///
/// Returns a [Restart] with the header, variable names, and optionally the
/// field data extracted from the file at `path`.
///
/// With `read_data = false` only the header and name table are read, and the
/// `data` field is left as `None`. This is useful for checking what is in a
/// large file without loading the whole thing.
///
/// ```rust
/// # use ngatools_data::{read_restart, FieldFile};
/// // Read the example file
/// let restart = read_restart("./data/restart_example.bin", true).unwrap();
///
/// // Print a summary of the data
/// println!("{restart}");
///
/// // Data is indexed [x, y, z, variable]
/// let data = restart.data().unwrap();
/// assert_eq!(data.shape(), &[4, 3, 2, 3]);
/// ```
pub fn read_restart<P: AsRef<Path>>(path: P, read_data: bool) -> Result<Restart> {
    info!("Reading {}", path.as_ref().display());
    let mut stream = init_stream(path)?;
    decode_restart(&mut stream, read_data)
}

/// Deserialise a binary volume file
///
/// Returns a [Volume] with the header, grid coordinates, variable names,
/// timestep size, simulation time, and optionally the field data extracted
/// from the file at `path`.
///
/// With `read_data = false` everything up to the field data is read, and the
/// `data` field is left as `None`.
///
/// ```rust
/// # use ngatools_data::read_volume;
/// // Read only the grid and metadata
/// let volume = read_volume("./data/volume_example.bin", false).unwrap();
///
/// assert_eq!(volume.grid.x.len(), 5);
/// assert!(volume.data.is_none());
/// ```
pub fn read_volume<P: AsRef<Path>>(path: P, read_data: bool) -> Result<Volume> {
    info!("Reading {}", path.as_ref().display());
    let mut stream = init_stream(path)?;
    decode_volume(&mut stream, read_data)
}

/// Deserialise restart content from any byte stream
///
/// Same as [read_restart()] for sources other than files. The total length is
/// not known in advance, so truncation is only detected once the stream runs
/// out.
///
/// ```rust
/// # use ngatools_data::parse_restart;
/// let bytes = std::fs::read("./data/restart_example.bin").unwrap();
/// let restart = parse_restart(bytes.as_slice(), false).unwrap();
/// assert_eq!(restart.names, vec!["U", "V", "RHO"]);
/// ```
pub fn parse_restart<R: Read>(reader: R, read_data: bool) -> Result<Restart> {
    decode_restart(&mut ByteStream::new(reader, None), read_data)
}

/// Deserialise volume content from any byte stream
///
/// Same as [read_volume()] for sources other than files.
pub fn parse_volume<R: Read>(reader: R, read_data: bool) -> Result<Volume> {
    decode_volume(&mut ByteStream::new(reader, None), read_data)
}

/// Initialise a stream of known length from anything that can be turned into a path
fn init_stream(path: impl AsRef<Path>) -> Result<ByteStream<BufReader<File>>> {
    let file = File::open(path)?;
    let length = file.metadata()?.len();
    Ok(ByteStream::new(BufReader::new(file), Some(length)))
}

/// Header, name table, and field data in restart order
fn decode_restart<R: Read>(stream: &mut ByteStream<R>, read_data: bool) -> Result<Restart> {
    let buffer = stream.read_bytes("restart header", RestartHeader::BYTE_LENGTH)?;
    let header: RestartHeader = deserialize(&buffer)?;
    debug!("{header:?}");

    let dimensions = header.dimensions()?;
    let names = read_names(stream, &dimensions)?;

    let data = match read_data {
        true => Some(read_fields(stream, &dimensions, &names)?),
        false => None,
    };

    Ok(Restart {
        header,
        names,
        data,
    })
}

/// Header, grid, name table, time values, and field data in volume order
fn decode_volume<R: Read>(stream: &mut ByteStream<R>, read_data: bool) -> Result<Volume> {
    let buffer = stream.read_bytes("volume header", VolumeHeader::BYTE_LENGTH)?;
    let header: VolumeHeader = deserialize(&buffer)?;
    debug!("{header:?}");

    let dimensions = header.dimensions()?;
    let grid = read_grid(stream, &dimensions)?;
    let names = read_names(stream, &dimensions)?;

    // timestep size and simulation time come after the names in this layout
    let buffer = stream.read_bytes("time values", 2 * std::mem::size_of::<f64>() as u64)?;
    let (dt, time): (f64, f64) = deserialize(&buffer)?;
    debug!("dt = {dt:?}, time = {time:?}");

    let data = match read_data {
        true => Some(read_fields(stream, &dimensions, &names)?),
        false => None,
    };

    Ok(Volume {
        header,
        grid,
        names,
        dt,
        time,
        data,
    })
}

/// Read the coordinate arrays for each axis in x, y, z order
fn read_grid<R: Read>(stream: &mut ByteStream<R>, dimensions: &Dimensions) -> Result<Grid> {
    let grid = Grid {
        x: stream.read_f64s("x grid", dimensions.nx)?,
        y: stream.read_f64s("y grid", dimensions.ny)?,
        z: stream.read_f64s("z grid", dimensions.nz)?,
    };

    debug!("x bounds = {}", grid.bounds_summary(0));
    debug!("y bounds = {}", grid.bounds_summary(1));
    debug!("z bounds = {}", grid.bounds_summary(2));

    if !grid.is_monotonic() {
        warn!("Warning: Grid coordinates are not in ascending order");
    }

    Ok(grid)
}

/// Read and decode the table of 8-byte variable names
fn read_names<R: Read>(stream: &mut ByteStream<R>, dimensions: &Dimensions) -> Result<Vec<String>> {
    let buffer = stream.read_bytes("name table", dimensions.name_table_byte_length())?;
    let names = decode_name_table(&buffer)?;
    debug!("Variables = {names:?}");
    Ok(names)
}

/// Read every variable block into a single (nx, ny, nz, nvar) array
///
/// The blocks are stored one after another, each in column-major order, so
/// the full payload is already in Fortran order for a 4D array with the
/// variable index varying slowest. The values are collected in file order and
/// the array is built directly over them.
fn read_fields<R: Read>(
    stream: &mut ByteStream<R>,
    dimensions: &Dimensions,
    names: &[String],
) -> Result<Array4<f64>> {
    // fail early rather than partially reading a payload that can not fit
    stream.require("field data", dimensions.payload_byte_length())?;

    // only trust the header for capacity once it is known to fit in the file
    let mut values = match stream.length {
        Some(_) => Vec::with_capacity(dimensions.payload_len()),
        None => Vec::new(),
    };

    for name in names {
        let block = stream.read_f64s("field data", dimensions.cells())?;
        values.extend(block);
        trace!("Done reading {name}");
    }

    if log_enabled!(Level::Debug) {
        if let Ok((min, max)) = values.finite_range() {
            debug!("Field data range = [{min:e}, {max:e}]");
        }
    }

    Ok(Array::from_shape_vec(dimensions.shape().f(), values)?)
}

/// Forward-only reader that tracks position against an optional known length
///
/// Every read is labelled with the section of the file being read, so that a
/// truncated file reports where it ran out.
#[derive(Debug)]
struct ByteStream<R> {
    inner: R,
    position: u64,
    length: Option<u64>,
}

impl<R: Read> ByteStream<R> {
    fn new(inner: R, length: Option<u64>) -> Self {
        Self {
            inner,
            position: 0,
            length,
        }
    }

    /// Bytes left in the stream, if the total length is known
    fn remaining(&self) -> Option<u64> {
        self.length.map(|length| length.saturating_sub(self.position))
    }

    /// Make sure at least `expected` bytes remain, where this can be known
    fn require(&self, section: &'static str, expected: u64) -> Result<()> {
        match self.remaining() {
            Some(found) if found < expected => Err(Error::TruncatedFile {
                section,
                expected,
                found,
            }),
            _ => Ok(()),
        }
    }

    /// Read exactly `expected` bytes
    ///
    /// The buffer grows with the data actually read, so an unknown length
    /// never leads to an allocation based only on what the header claims.
    fn read_bytes(&mut self, section: &'static str, expected: u64) -> Result<Vec<u8>> {
        self.require(section, expected)?;

        let mut buffer = match self.length {
            Some(_) => Vec::with_capacity(expected as usize),
            None => Vec::new(),
        };

        let found = (&mut self.inner).take(expected).read_to_end(&mut buffer)? as u64;
        self.position += found;

        if found < expected {
            return Err(Error::TruncatedFile {
                section,
                expected,
                found,
            });
        }

        trace!("Read {found} bytes of {section}");
        Ok(buffer)
    }

    /// Read `count` little endian f64 values
    fn read_f64s(&mut self, section: &'static str, count: usize) -> Result<Vec<f64>> {
        let size = std::mem::size_of::<f64>();
        let buffer = self.read_bytes(section, (count * size) as u64)?;

        Ok(buffer
            .chunks_exact(size)
            .map(|chunk| {
                let mut bytes = [0u8; 8];
                bytes.copy_from_slice(chunk);
                f64::from_le_bytes(bytes)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_reports_truncation_section() {
        let bytes = [0u8; 10];
        let mut stream = ByteStream::new(bytes.as_slice(), None);

        assert!(stream.read_bytes("first", 4).is_ok());
        match stream.read_bytes("second", 8) {
            Err(Error::TruncatedFile {
                section,
                expected,
                found,
            }) => {
                assert_eq!(section, "second");
                assert_eq!(expected, 8);
                assert_eq!(found, 6);
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn stream_checks_known_length_first() {
        let bytes = [0u8; 10];
        let mut stream = ByteStream::new(bytes.as_slice(), Some(10));

        // nothing is consumed when the length check fails
        assert!(matches!(
            stream.read_bytes("payload", 1 << 40),
            Err(Error::TruncatedFile { found: 10, .. })
        ));
        assert_eq!(stream.position, 0);
        assert_eq!(stream.remaining(), Some(10));
    }

    #[test]
    fn stream_reads_little_endian_floats() {
        let mut bytes = Vec::new();
        for v in [1.5_f64, -2.0, 1.0e-300] {
            bytes.extend_from_slice(&v.to_le_bytes());
        }

        let mut stream = ByteStream::new(bytes.as_slice(), Some(bytes.len() as u64));
        assert_eq!(stream.read_f64s("values", 3).unwrap(), vec![1.5, -2.0, 1.0e-300]);
        assert_eq!(stream.remaining(), Some(0));
    }

    #[test]
    fn absurd_header_does_not_allocate() {
        // 4 x i32::MAX dimensions, then nothing else
        let mut bytes = Vec::new();
        for v in [i32::MAX, i32::MAX, i32::MAX, i32::MAX] {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        bytes.extend_from_slice(&[0u8; 16]);

        assert!(matches!(
            parse_restart(bytes.as_slice(), true),
            Err(Error::MalformedHeader(_))
        ));
    }

    #[test]
    fn large_but_representable_header_is_truncated() {
        // valid in principle, but nowhere near enough bytes follow
        let mut bytes = Vec::new();
        for v in [1024_i32, 1024, 1024, 4] {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        bytes.extend_from_slice(&[0u8; 16]);
        bytes.extend_from_slice(b"A       B       C       D       ");

        assert!(matches!(
            parse_restart(bytes.as_slice(), true),
            Err(Error::TruncatedFile {
                section: "field data",
                found: 0,
                ..
            })
        ));

        // names alone are fine
        let restart = parse_restart(bytes.as_slice(), false).unwrap();
        assert_eq!(restart.names, vec!["A", "B", "C", "D"]);
    }
}
