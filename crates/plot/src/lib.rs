//! Module for rendering 2D field slices to PNG images
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod builder;
mod colormap;
mod error;
mod renderer;

// Inline anything important for a nice public API
#[doc(inline)]
pub use renderer::{plot_slice, SliceRenderer};

#[doc(inline)]
pub use builder::SliceRendererBuilder;

#[doc(inline)]
pub use colormap::Colormap;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(no_inline)]
pub use image::RgbaImage;
