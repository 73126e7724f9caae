//! Conversion of field data to VTK formats for plotting
//!
//! Volume files carry their own grid coordinates and map directly onto a VTK
//! rectilinear grid, with every variable as a point data array. Restart data
//! can be converted the same way given a [Grid](crate::Grid).
//!
//! ```rust, no_run
//! # use ngatools_data::read_volume;
//! # use ngatools_data::vtk::{volume_to_vtk, write_vtk, VolumeToVtk, VtkFormat};
//! let volume = read_volume("./data/volume_example.bin", true).unwrap();
//!
//! // Convert with the default configuration
//! let vtk = volume_to_vtk(&volume).unwrap();
//!
//! // Write to the XML rectilinear grid format, inferred from the extension
//! write_vtk(vtk, "./volume.vtr", VtkFormat::Xml).unwrap();
//!
//! // Or configure the conversion first
//! let vtk = VolumeToVtk::builder().variables(vec![1]).build().convert(&volume).unwrap();
//! write_vtk(vtk, "./temperature.vtk", VtkFormat::LegacyBinary).unwrap();
//! ```

mod builder;
mod convert;

// standard library
use std::path::Path;

// crate modules
use crate::error::Result;

#[doc(inline)]
pub use builder::VolumeToVtkBuilder;

#[doc(inline)]
pub use convert::VolumeToVtk;

// re-export the vtkio types needed for configuration
#[doc(inline)]
pub use vtkio::model::ByteOrder;
pub use vtkio::Vtk;

/// Supported VTK output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VtkFormat {
    /// Modern XML format, chosen from the file extension (e.g. `.vtr`)
    #[default]
    Xml,
    /// Legacy `.vtk` text format
    LegacyAscii,
    /// Legacy `.vtk` binary format, using the byte order of the [Vtk]
    LegacyBinary,
}

/// Convert a [Volume](crate::Volume) to a [Vtk] with default settings
///
/// Shorthand for `VolumeToVtk::default().convert(volume)`.
pub fn volume_to_vtk(volume: &crate::Volume) -> Result<Vtk> {
    VolumeToVtk::default().convert(volume)
}

/// Write a [Vtk] to `path` in the chosen format
///
/// For [VtkFormat::Xml] the path extension decides the XML flavour, so use
/// `.vtr` for rectilinear grids.
pub fn write_vtk(vtk: Vtk, path: impl AsRef<Path>, format: VtkFormat) -> Result<()> {
    match format {
        VtkFormat::Xml => vtk.export(path)?,
        VtkFormat::LegacyAscii => vtk.export_ascii(path)?,
        VtkFormat::LegacyBinary => {
            if vtk.byte_order == ByteOrder::LittleEndian {
                vtk.export_le(path)?
            } else {
                vtk.export_be(path)?
            }
        }
    }
    Ok(())
}
