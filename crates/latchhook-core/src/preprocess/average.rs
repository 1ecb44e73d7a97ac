//! Running channel sums for averaging colors.

use crate::color::Color;

/// Accumulates colors and yields their component-wise truncated mean.
///
/// ```
/// use latchhook_core::{Color, ColorAccumulator};
///
/// let mut acc = ColorAccumulator::new();
/// assert_eq!(acc.mean(), None);
///
/// acc.push(Color::new(10, 0, 255, 255));
/// acc.push(Color::new(11, 0, 0, 0));
/// assert_eq!(acc.mean(), Some(Color::new(10, 0, 127, 127)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorAccumulator {
    r: u64,
    g: u64,
    b: u64,
    a: u64,
    count: u64,
}

impl ColorAccumulator {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one sample.
    #[inline]
    pub fn push(&mut self, color: Color) {
        self.r += color.r as u64;
        self.g += color.g as u64;
        self.b += color.b as u64;
        self.a += color.a as u64;
        self.count += 1;
    }

    /// Number of samples pushed so far.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Truncated mean of every channel, alpha included.
    ///
    /// `None` when no samples were pushed; callers decide what an empty
    /// neighborhood means for them.
    pub fn mean(&self) -> Option<Color> {
        if self.count == 0 {
            return None;
        }
        let n = self.count;
        Some(Color::new(
            (self.r / n) as u8,
            (self.g / n) as u8,
            (self.b / n) as u8,
            (self.a / n) as u8,
        ))
    }
}
