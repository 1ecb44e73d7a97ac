//! Preprocessing options.

/// Which preprocessing stages to run before the palette is built.
///
/// All stages are off by default, so the default options pass the source
/// raster through untouched.
///
/// ```
/// use latchhook_core::PreprocessOptions;
///
/// let options = PreprocessOptions::new().resize(60, 40).smooth(true);
/// assert_eq!(options.target, Some((60, 40)));
/// assert!(options.smooth);
/// assert!(!options.grayscale);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreprocessOptions {
    /// Target `(width, height)` for the bucket resize. `None` keeps the
    /// source size.
    pub target: Option<(usize, usize)>,

    /// Apply 3×3 neighborhood smoothing after resizing.
    pub smooth: bool,

    /// Convert to Rec. 601 luma before anything else.
    pub grayscale: bool,
}

impl PreprocessOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resize to exactly `width × height` cells.
    pub fn resize(mut self, width: usize, height: usize) -> Self {
        self.target = Some((width, height));
        self
    }

    pub fn smooth(mut self, enabled: bool) -> Self {
        self.smooth = enabled;
        self
    }

    pub fn grayscale(mut self, enabled: bool) -> Self {
        self.grayscale = enabled;
        self
    }

    /// True when no stage is enabled.
    pub fn is_passthrough(&self) -> bool {
        self.target.is_none() && !self.smooth && !self.grayscale
    }
}
