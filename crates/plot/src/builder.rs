// internal modules
use crate::colormap::Colormap;
use crate::renderer::SliceRenderer;

/// Builder implementation for SliceRenderer configuration
///
/// The fields of [SliceRenderer] are left public for direct use but the module
/// also implements a builder.
///
/// To get the final [SliceRenderer] from the builder, call
/// [build()](SliceRendererBuilder::build).
///
/// ```rust
/// # use ngatools_plot::{SliceRenderer, Colormap};
/// let renderer = SliceRenderer::builder()
///     .colormap(Colormap::Greys)
///     .scale(2)
///     .range(0.0, 10.0)
///     .build();
///
/// assert_eq!(renderer.scale, 2);
/// assert_eq!(renderer.range, Some((0.0, 10.0)));
/// ```
#[derive(Debug)]
pub struct SliceRendererBuilder {
    colormap: Colormap,
    scale: u32,
    legend: bool,
    legend_width: u32,
    range: Option<(f64, f64)>,
}

impl SliceRendererBuilder {
    /// Create a new instance of the builder with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the [SliceRenderer] type
    pub fn build(self) -> SliceRenderer {
        SliceRenderer {
            colormap: self.colormap,
            scale: self.scale,
            legend: self.legend,
            legend_width: self.legend_width,
            range: self.range,
        }
    }

    /// Colour map used for the field and legend
    pub fn colormap(mut self, colormap: Colormap) -> Self {
        self.colormap = colormap;
        self
    }

    /// Size of each cell in pixels
    ///
    /// Every cell is drawn as a `scale`×`scale` block. Zero is treated as 1.
    pub fn scale(mut self, scale: u32) -> Self {
        self.scale = scale.max(1);
        self
    }

    /// Include the colour scale legend on the right of the image
    pub fn legend(mut self, legend: bool) -> Self {
        self.legend = legend;
        self
    }

    /// Width of the legend strip in pixels
    pub fn legend_width(mut self, width: u32) -> Self {
        self.legend_width = width.max(1);
        self
    }

    /// Fix the colour range rather than using the data extent
    ///
    /// Values outside of this range are clamped to the ends of the colour
    /// map.
    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = Some((min, max));
        self
    }
}

impl Default for SliceRendererBuilder {
    fn default() -> Self {
        Self {
            colormap: Colormap::GistRainbow,
            scale: 8,
            legend: true,
            legend_width: 16,
            range: None,
        }
    }
}
