//! Module for reading NGA restart and volume binary data files
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod error;
mod fields;
mod grid;
mod header;
mod name;
mod reader;
mod restart;
mod volume;
mod writer;

pub mod vtk;

// Inline anything important for a nice public API
#[doc(inline)]
pub use reader::{parse_restart, parse_volume, read_restart, read_volume};

#[doc(inline)]
pub use restart::Restart;

#[doc(inline)]
pub use volume::Volume;

#[doc(inline)]
pub use fields::FieldFile;

#[doc(inline)]
pub use grid::Grid;

#[doc(inline)]
pub use header::{Dimensions, RestartHeader, VolumeHeader};

#[doc(inline)]
pub use name::{decode_name_table, VariableName};

#[doc(inline)]
pub use writer::{write_json, write_summary};

#[doc(inline)]
pub use error::{Error, Result};
