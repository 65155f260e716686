use crate::units::Pt;

/// A measurement capability for the font the text will be drawn with.
///
/// The engine never inspects font files itself; it asks this trait for the
/// two numbers layout needs. Both methods must be pure functions of their
/// arguments: wrapping and placement measure the same strings repeatedly
/// and rely on getting identical answers each time.
pub trait FontMetrics {
    /// Calculate the rendered width of `text` at the font size `size`, in
    /// the same unit as box widths
    fn width_of(&self, text: &str, size: Pt) -> Pt;

    /// Calculate the height of a line above its baseline (ascenders only,
    /// ignoring descenders) at the font size `size`
    fn line_ascent(&self, size: Pt) -> Pt;
}

/// Deterministic metrics that give every codepoint the same advance width
/// and report a fixed ascent, both expressed as fractions of the font
/// size. Suitable for monospaced estimation and for exercising layout
/// without a font backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMetrics {
    /// Advance width of each codepoint as a fraction of the font size
    pub advance: f32,
    /// Line ascent as a fraction of the font size
    pub ascent: f32,
}

impl Default for FixedMetrics {
    /// An average western typeface: 0.6 em per codepoint, 0.8 em ascent
    fn default() -> FixedMetrics {
        FixedMetrics {
            advance: 0.6,
            ascent: 0.8,
        }
    }
}

impl FontMetrics for FixedMetrics {
    fn width_of(&self, text: &str, size: Pt) -> Pt {
        size * (text.chars().count() as f32 * self.advance)
    }

    fn line_ascent(&self, size: Pt) -> Pt {
        size * self.ascent
    }
}
