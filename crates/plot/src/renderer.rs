// standard library
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

// ngatools modules
use ngatools_utils::{SliceExt, ValueExt};

// internal modules
use crate::builder::SliceRendererBuilder;
use crate::colormap::Colormap;
use crate::error::{Error, Result};

// external crates
use image::{ImageFormat, Rgba, RgbaImage};
use log::{debug, info};
use ndarray::ArrayView2;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Render a 2D slice of field data with the default configuration
///
/// Writes `<stem>.png` using the `gist_rainbow` colour map with a legend, and
/// returns the full path written.
///
/// ```rust, no_run
/// # use ngatools_plot::plot_slice;
/// # use ndarray::Array2;
/// let slice = Array2::from_shape_fn((16, 32), |(i, j)| (i + j) as f64);
/// let path = plot_slice(&slice.view(), "./output").unwrap();
/// assert_eq!(path.to_str(), Some("./output.png"));
/// ```
pub fn plot_slice<P: AsRef<Path>>(data: &ArrayView2<f64>, stem: P) -> Result<PathBuf> {
    SliceRenderer::default().save(data, stem)
}

/// Draw 2D slices of field data as colour mapped images
///
/// Rows of the array run down the image and columns run across, so the
/// rendered image matches how the array is indexed. Each cell is drawn as a
/// `scale`×`scale` block with no interpolation.
///
/// The fields remain public for direct use, but for convenience and style
/// preference a builder pattern is also implemented and recommended.
///
/// ```rust
/// # use ngatools_plot::SliceRenderer;
/// # use ndarray::Array2;
/// let slice = Array2::from_shape_fn((3, 5), |(i, j)| (i * j) as f64);
///
/// let renderer = SliceRenderer::builder().scale(2).legend(false).build();
/// let image = renderer.render(&slice.view()).unwrap();
///
/// assert_eq!(image.dimensions(), (10, 6));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SliceRenderer {
    /// Colour map for the field and legend
    pub colormap: Colormap,
    /// Pixels per cell along each side
    pub scale: u32,
    /// Include a colour scale legend
    pub legend: bool,
    /// Width of the legend strip in pixels
    pub legend_width: u32,
    /// Fixed (min, max) colour range, data extent if `None`
    pub range: Option<(f64, f64)>,
}

// Public API
impl SliceRenderer {
    /// Start with the default configuration
    pub fn new() -> SliceRenderer {
        Default::default()
    }

    /// Get an instance of the [SliceRendererBuilder]
    pub fn builder() -> SliceRendererBuilder {
        SliceRendererBuilder::default()
    }

    /// Values at the bottom and top of the colour map, as `(min, max)`
    ///
    /// This is the fixed range if one is set, otherwise the extent of the
    /// finite values in `data`. The legend spans exactly this range, so use
    /// it to label the legend ends.
    ///
    /// ```rust
    /// # use ngatools_plot::SliceRenderer;
    /// # use ndarray::array;
    /// let slice = array![[2.0, f64::NAN], [-1.0, 4.0]];
    ///
    /// let renderer = SliceRenderer::new();
    /// assert_eq!(renderer.value_range(&slice.view()).unwrap(), (-1.0, 4.0));
    ///
    /// let renderer = SliceRenderer::builder().range(0.0, 10.0).build();
    /// assert_eq!(renderer.value_range(&slice.view()).unwrap(), (0.0, 10.0));
    /// ```
    pub fn value_range(&self, data: &ArrayView2<f64>) -> Result<(f64, f64)> {
        match self.range {
            Some((min, max)) => {
                if min.is_finite() && max.is_finite() && min <= max {
                    Ok((min, max))
                } else {
                    Err(Error::InvalidRange { min, max })
                }
            }
            None => data
                .iter()
                .copied()
                .collect::<Vec<f64>>()
                .finite_range()
                .map_err(|_| Error::NoFiniteValues),
        }
    }

    /// Render the slice to an in-memory RGBA image
    pub fn render(&self, data: &ArrayView2<f64>) -> Result<RgbaImage> {
        let (rows, cols) = data.dim();
        if rows == 0 || cols == 0 {
            return Err(Error::EmptySlice { rows, cols });
        }

        let (min, max) = self.value_range(data)?;
        let layout = self.layout(rows, cols)?;
        debug!(
            "Rendering {rows}x{cols} slice to {}x{} pixels over [{min:e}, {max:e}]",
            layout.width, layout.height
        );

        let scale = layout.scale;
        Ok(RgbaImage::from_fn(layout.width, layout.height, |x, y| {
            if x < layout.field_width {
                let value = data[[(y / scale) as usize, (x / scale) as usize]];
                self.field_pixel(value, min, max)
            } else if self.legend && x >= layout.legend_start {
                self.legend_pixel(y, layout.height)
            } else {
                TRANSPARENT
            }
        }))
    }

    /// Render the slice and write it to `<stem>.png`
    ///
    /// The `.png` extension is appended to the stem rather than replacing any
    /// existing extension. Returns the path written.
    ///
    /// The legend range is logged alongside the path. Use
    /// [value_range()](SliceRenderer::value_range) to get it directly.
    pub fn save<P: AsRef<Path>>(&self, data: &ArrayView2<f64>, stem: P) -> Result<PathBuf> {
        let path = png_path(stem.as_ref());
        let image = self.render(data)?;

        if self.legend {
            let (min, max) = self.value_range(data)?;
            info!(
                "Writing {} (legend {} to {})",
                path.display(),
                min.sci(5, 2),
                max.sci(5, 2)
            );
        } else {
            info!("Writing {}", path.display());
        }
        let mut writer = BufWriter::new(File::create(&path)?);
        image.write_to(&mut writer, ImageFormat::Png)?;
        writer.flush()?;

        Ok(path)
    }
}

impl Default for SliceRenderer {
    fn default() -> Self {
        SliceRendererBuilder::default().build()
    }
}

/// Pixel sizes of each region of the image
#[derive(Debug, Clone, Copy)]
struct Layout {
    scale: u32,
    field_width: u32,
    legend_start: u32,
    width: u32,
    height: u32,
}

impl SliceRenderer {
    /// Work out the image regions, making sure the image can be allocated
    fn layout(&self, rows: usize, cols: usize) -> Result<Layout> {
        let scale = self.scale.max(1);
        let field_width = cols as u64 * scale as u64;
        let height = rows as u64 * scale as u64;

        let (legend_start, width) = match self.legend {
            true => {
                let legend_width = self.legend_width.max(1) as u64;
                let gap = (legend_width / 2).max(1);
                (field_width + gap, field_width + gap + legend_width)
            }
            false => (field_width, field_width),
        };

        let bytes = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or(Error::ImageTooLarge { width, height })?;

        if width > u32::MAX as u64 || height > u32::MAX as u64 || bytes > isize::MAX as u64 {
            return Err(Error::ImageTooLarge { width, height });
        }

        Ok(Layout {
            scale,
            field_width: field_width as u32,
            legend_start: legend_start as u32,
            width: width as u32,
            height: height as u32,
        })
    }

    /// Colour for a single field value
    fn field_pixel(&self, value: f64, min: f64, max: f64) -> Rgba<u8> {
        if !value.is_finite() {
            return TRANSPARENT;
        }

        let [r, g, b] = self.colormap.sample(normalise(value, min, max));
        Rgba([r, g, b, 255])
    }

    /// Colour for a row of the legend, maximum at the top
    fn legend_pixel(&self, y: u32, height: u32) -> Rgba<u8> {
        let t = match height > 1 {
            true => 1.0 - y as f64 / (height - 1) as f64,
            false => 1.0,
        };

        let [r, g, b] = self.colormap.sample(t);
        Rgba([r, g, b, 255])
    }
}

/// Scale a value onto [0, 1], where a zero-width range maps to 0
fn normalise(value: f64, min: f64, max: f64) -> f64 {
    match max > min {
        true => ((value - min) / (max - min)).clamp(0.0, 1.0),
        false => 0.0,
    }
}

/// Append the png extension to a filename stem
fn png_path(stem: &Path) -> PathBuf {
    let mut path = OsString::from(stem.as_os_str());
    path.push(".png");
    PathBuf::from(path)
}
