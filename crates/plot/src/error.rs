//! Result and Error types for the plot module

/// Type alias for `Result<T, plot::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `ngatools-plot`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// Failure to encode or write the image
    #[error("image error")]
    ImageError(#[from] image::ImageError),

    /// Slice has no rows or no columns
    #[error("slice has no values to plot ({rows}x{cols})")]
    EmptySlice { rows: usize, cols: usize },

    /// Every value is NaN or infinite and no fixed range was given
    #[error("slice contains no finite values to scale the colour map")]
    NoFiniteValues,

    /// Requested image would not fit within image dimension limits
    #[error("image too large ({width}x{height} pixels)")]
    ImageTooLarge { width: u64, height: u64 },

    /// Fixed colour range that is not finite or has the minimum above the maximum
    #[error("invalid colour range [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },
}
