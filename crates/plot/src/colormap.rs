/// Control points for the `gist_rainbow` colour map
///
/// Each entry is a position on [0, 1] and the (r, g, b) colour at that point,
/// with linear interpolation between neighbouring points.
const GIST_RAINBOW: [(f64, [f64; 3]); 8] = [
    (0.000, [1.0, 0.0, 0.16]),
    (0.030, [1.0, 0.0, 0.0]),
    (0.215, [1.0, 1.0, 0.0]),
    (0.400, [0.0, 1.0, 0.0]),
    (0.586, [0.0, 1.0, 1.0]),
    (0.770, [0.0, 0.0, 1.0]),
    (0.954, [1.0, 0.0, 1.0]),
    (1.000, [1.0, 0.0, 0.75]),
];

/// Colour maps available for rendering
///
/// Both follow the matplotlib definitions of the same name.
///
/// ```rust
/// # use ngatools_plot::Colormap;
/// let colormap = Colormap::GistRainbow;
/// assert_eq!(colormap.sample(0.0), [255, 0, 41]);
/// assert_eq!(colormap.sample(0.4), [0, 255, 0]);
///
/// // anything outside [0, 1] is clamped
/// assert_eq!(colormap.sample(2.0), colormap.sample(1.0));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Colormap {
    /// Red through yellow, green, cyan, blue, and magenta
    #[default]
    GistRainbow,
    /// White to black
    Greys,
}

impl Colormap {
    /// Colour at position `t` along the map as 8-bit (r, g, b)
    ///
    /// `NaN` is treated as the bottom of the colour map.
    pub fn sample(&self, t: f64) -> [u8; 3] {
        let t = match t.is_nan() {
            true => 0.0,
            false => t.clamp(0.0, 1.0),
        };

        let rgb = match self {
            Self::GistRainbow => Self::interpolate(&GIST_RAINBOW, t),
            Self::Greys => [1.0 - t; 3],
        };

        rgb.map(|c| (c * 255.0).round() as u8)
    }

    /// Piecewise linear interpolation over sorted control points
    fn interpolate(points: &[(f64, [f64; 3])], t: f64) -> [f64; 3] {
        for pair in points.windows(2) {
            let (t0, c0) = pair[0];
            let (t1, c1) = pair[1];
            if t <= t1 {
                let w = (t - t0) / (t1 - t0);
                return [0, 1, 2].map(|k| c0[k] + w * (c1[k] - c0[k]));
            }
        }

        // t is clamped so this is only reached for t == 1 on rounding
        points[points.len() - 1].1
    }
}
