// internal modules
use crate::vtk::convert::VolumeToVtk;
use crate::vtk::ByteOrder;

/// Builder implementation for VolumeToVtk configuration
///
/// The fields of [VolumeToVtk] are left public for direct use but the module
/// also implements a builder.
///
/// For those not familiar, the builder allows for chained setter calls for a
/// functional approach that could be considered more readable. Any number of
/// parameters can be set this way (including none).
///
/// To get the final [VolumeToVtk] from the builder, call
/// [build()](VolumeToVtkBuilder::build).
///
/// ```rust, no_run
/// # use ngatools_data::vtk::{VolumeToVtk, write_vtk, VtkFormat, ByteOrder};
/// # use ngatools_data::read_volume;
/// # let volume = read_volume("./data/volume_example.bin", true).unwrap();
/// // Make a new builder, change some values
/// let converter = VolumeToVtk::builder()
///     .variables(vec![0, 2])     // first and third variables only
///     .byte_order(ByteOrder::LittleEndian)
///     .build();
///
/// // Convert the volume using the parameters set
/// let vtk = converter.convert(&volume).unwrap();
///
/// // Write to "output.vtk" using the old binary format
/// write_vtk(vtk, "./output.vtk", VtkFormat::LegacyBinary).unwrap();
/// ```
///
/// This helps separate the configuration from the actual conversion logic, and
/// is often a style preference for many users.
#[derive(Debug)]
pub struct VolumeToVtkBuilder {
    /// Target variable indices
    variables: Vec<usize>,
    /// Byte ordering as big or little endian
    byte_order: ByteOrder,
}

impl VolumeToVtkBuilder {
    /// Create a new instance of the builder with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the [VolumeToVtk] type
    pub fn build(self) -> VolumeToVtk {
        VolumeToVtk {
            variables: self.variables,
            byte_order: self.byte_order,
        }
    }

    /// Target variable(s) by index in the name table
    ///
    /// By default all variables are included in the vtk. Specific variables
    /// can be provided to reduce file sizes.
    pub fn variables(mut self, variables: Vec<usize>) -> Self {
        self.variables = variables;
        self
    }

    /// Set the byte ordering
    ///
    /// Note that Visit only reads big endian, even though most systems are
    /// little endian. Defaults to big endian for convenience.
    pub fn byte_order(mut self, order: ByteOrder) -> Self {
        self.byte_order = order;
        self
    }
}

impl Default for VolumeToVtkBuilder {
    fn default() -> Self {
        Self {
            variables: Vec::new(),
            byte_order: ByteOrder::BigEndian,
        }
    }
}
