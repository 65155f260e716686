use crate::units::Pt;

/// Horizontal placement of each wrapped line within its box
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    /// Lines start at the box's left edge
    #[default]
    Left,
    /// Lines are centered between the box's edges
    Center,
    /// Lines end at the box's right edge
    Right,
}

/// Vertical placement of the whole wrapped block within its box
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    /// The block's top edge meets the box's top edge
    Top,
    /// The block is centered between the box's top and bottom edges
    #[default]
    Middle,
    /// The block's bottom edge meets the box's bottom edge
    Bottom,
}

/// Type and placement options for laying text into a box.
///
/// [RenderOptions::new] fills in the common case: line height equal to the
/// font size, left-aligned, vertically centered, no extra offsets, and the
/// neutral `"C"` locale. Each field has a `with_` method to override it.
///
/// ```
/// use textbox_layout::{HorizontalAlign, Pt, RenderOptions};
///
/// let options = RenderOptions::new(Pt(12.0))
///     .with_line_height(Pt(14.0))
///     .with_horizontal_align(HorizontalAlign::Center)
///     .with_locale("ja_JP");
/// assert_eq!(options.size, Pt(12.0));
/// assert_eq!(options.line_height, Pt(14.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Font size the text is measured and drawn at
    pub size: Pt,
    /// Baseline-to-baseline distance between consecutive lines
    pub line_height: Pt,
    /// Horizontal alignment of each line
    pub horizontal_align: HorizontalAlign,
    /// Vertical alignment of the block
    pub vertical_align: VerticalAlign,
    /// Extra offset added to every line's x coordinate
    pub horizontal_offset: Pt,
    /// Extra offset subtracted from every line's y coordinate; positive
    /// values move lines down the surface
    pub vertical_offset: Pt,
    /// Locale id that selects the wrapping rule
    pub locale: String,
}

impl RenderOptions {
    /// Options at the given font size with every other field at its
    /// default
    pub fn new(size: impl Into<Pt>) -> RenderOptions {
        let size = size.into();
        RenderOptions {
            size,
            line_height: size,
            horizontal_align: HorizontalAlign::default(),
            vertical_align: VerticalAlign::default(),
            horizontal_offset: Pt(0.0),
            vertical_offset: Pt(0.0),
            locale: "C".to_string(),
        }
    }

    /// Set the baseline-to-baseline line height
    pub fn with_line_height(mut self, line_height: impl Into<Pt>) -> RenderOptions {
        self.line_height = line_height.into();
        self
    }

    /// Set the horizontal alignment of each line
    pub fn with_horizontal_align(mut self, align: HorizontalAlign) -> RenderOptions {
        self.horizontal_align = align;
        self
    }

    /// Set the vertical alignment of the block
    pub fn with_vertical_align(mut self, align: VerticalAlign) -> RenderOptions {
        self.vertical_align = align;
        self
    }

    /// Nudge every placed line by the given offsets after alignment
    pub fn with_offset(
        mut self,
        horizontal: impl Into<Pt>,
        vertical: impl Into<Pt>,
    ) -> RenderOptions {
        self.horizontal_offset = horizontal.into();
        self.vertical_offset = vertical.into();
        self
    }

    /// Set the locale id that selects the wrapping rule
    pub fn with_locale(mut self, locale: impl Into<String>) -> RenderOptions {
        self.locale = locale.into();
        self
    }
}
