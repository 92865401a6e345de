//! Fixed-advance text metrics

use super::{TextMetrics, TextSize};

/// Text metrics for a monospace font
///
/// Every character advances by the same width. Useful for headless runs and
/// tests where no real font is loaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    /// Horizontal advance per character in pixels
    pub advance: f32,
    /// Line height in pixels
    pub line_height: f32,
}

impl MonospaceMetrics {
    /// Create metrics with the given advance and line height
    pub const fn new(advance: f32, line_height: f32) -> Self {
        Self { advance, line_height }
    }
}

impl Default for MonospaceMetrics {
    /// Matches the 7x13 bitmap font commonly used for debug overlays
    fn default() -> Self {
        Self::new(7.0, 13.0)
    }
}

impl TextMetrics for MonospaceMetrics {
    fn measure(&self, text: &str) -> TextSize {
        if text.is_empty() {
            return TextSize::default();
        }
        TextSize::new(text.chars().count() as f32 * self.advance, self.line_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_counts_chars_not_bytes() {
        let metrics = MonospaceMetrics::default();
        assert_eq!(metrics.measure("Zoë"), TextSize::new(21.0, 13.0));
        assert_eq!(metrics.measure(""), TextSize::default());
    }
}
