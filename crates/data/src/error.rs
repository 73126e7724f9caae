//! Result and Error types for the data module

/// Type alias for `Result<T, data::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `ngatools-data`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// Failure to deserialise a byte stream
    #[error("failed to deserialise byte stream")]
    UnableToDeserialise(#[from] Box<bincode::ErrorKind>),

    /// Failure to serialise to a JSON string
    #[error("failed serde JSON operation")]
    JSONError(#[from] serde_json::Error),

    /// Failure in vtk conversion or writing
    #[error("vtkio error")]
    VtkioError(#[from] vtkio::Error),

    /// Decoded values do not fit the expected array shape
    #[error("inconsistent field data shape")]
    ShapeError(#[from] ndarray::ShapeError),

    /// Failure in a shared utility operation
    #[error("utility operation failed: {0}")]
    Utils(#[from] ngatools_utils::Error),

    /// Stream ended before the number of bytes declared by the header
    #[error("truncated file while reading {section} (expected {expected} bytes, found {found})")]
    TruncatedFile {
        section: &'static str,
        expected: u64,
        found: u64,
    },

    /// Header values are non-positive or imply an impossible payload
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    /// Byte content that can not be interpreted, e.g. non-ASCII names
    #[error("failed to decode {0}")]
    Decode(String),

    /// Field data was not read from the file
    #[error("no field data available, file was read with read_data = false")]
    MissingData,

    /// Variable index outside of the name table
    #[error("variable index {index} out of range (found {nvar} variables)")]
    UnknownVariable { index: usize, nvar: usize },

    /// Slice index outside of the grid along the requested axis
    #[error("index {index} out of range for axis {axis} (length {length})")]
    SliceOutOfBounds {
        axis: usize,
        index: usize,
        length: usize,
    },

    /// Supplied grid does not match the data dimensions
    #[error("grid axis {axis} has {found} points but data has {expected}")]
    GridMismatch {
        axis: usize,
        expected: usize,
        found: usize,
    },
}
