/// Threshold used when none is given on the command line.
pub const DEFAULT_THRESHOLD: i32 = 128;

/// Paint attributes applied to every traced path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStyle {
    pub fill: String,
    pub stroke: String,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            fill: "black".to_string(),
            stroke: "none".to_string(),
        }
    }
}

/// Options describing how an image is turned into an SVG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorizeOptions {
    /// Pixels strictly brighter than this become foreground.
    /// Values outside 0-255 are accepted and saturate the mask.
    pub threshold: i32,
    pub style: PathStyle,
}

impl Default for VectorizeOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            style: PathStyle::default(),
        }
    }
}

impl VectorizeOptions {
    /// Create options with the given threshold and the default style.
    pub fn with_threshold(threshold: i32) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }
}
