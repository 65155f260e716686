//! Box placement of wrapped lines.
//!
//! [place_lines] turns an ordered list of wrapped lines into draw
//! coordinates inside a [BoxSpec], honouring the alignment and offset
//! fields of [RenderOptions]. Boxes anchor at their top-left corner with
//! `y` growing downward; the coordinates produced are in the surface's
//! bottom-up convention, ready to hand to a renderer. Everything here is
//! pure arithmetic over its arguments, so calls are safe to make from any
//! number of threads at once.
//!
//! ```
//! use textbox_layout::{place_lines, BoxSpec, FixedMetrics, Pt, RenderOptions};
//!
//! let metrics = FixedMetrics { advance: 0.5, ascent: 1.0 };
//! let lines = vec!["hello".to_string()];
//! let bbox = BoxSpec::new(Pt(100.0), Pt(40.0), Pt(200.0), Pt(10.0));
//! let options = RenderOptions::new(Pt(10.0));
//! let placed = place_lines(&lines, bbox, &options, &metrics, Pt(800.0));
//!
//! // ten points of ascent in a ten-point-tall box: the baseline sits at
//! // the box bottom whatever the vertical alignment
//! assert_eq!(placed[0].coords, (Pt(100.0), Pt(750.0)));
//! ```

use crate::boxspec::BoxSpec;
use crate::locale::LocaleTable;
use crate::metrics::FontMetrics;
use crate::options::{HorizontalAlign, RenderOptions, VerticalAlign};
use crate::units::Pt;
use crate::wrap::break_text_into_lines;

/// One wrapped line and the surface coordinate it draws at
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    /// Text to hand to the renderer. A line that ended at a hard break
    /// keeps its trailing `'\n'` here; only the trimmed text took part in
    /// width measurement
    pub text: String,
    /// Baseline start of the line, in bottom-up surface coordinates
    pub coords: (Pt, Pt),
}

/// Compute the draw coordinate of every line in `lines` within `bbox`.
///
/// The block of lines is `line_ascent + line_height * (lines - 1)` tall:
/// the first line contributes its ascent, every further line one line
/// height. Vertical alignment distributes the slack between that block
/// and the box height; horizontal alignment places each line by its own
/// trimmed width. An empty line list yields an empty result.
pub fn place_lines<M: FontMetrics>(
    lines: &[String],
    bbox: BoxSpec,
    options: &RenderOptions,
    metrics: &M,
    surface_height: Pt,
) -> Vec<PlacedLine> {
    if lines.is_empty() {
        return Vec::new();
    }

    let ascent = metrics.line_ascent(options.size);
    let block_height = ascent + options.line_height * (lines.len() - 1) as f32;

    // the box's y locates its top edge from the surface's top; flip into
    // bottom-up coordinates, then bias by the block's vertical slack
    let mut origin_y = surface_height - bbox.y - bbox.height;
    match options.vertical_align {
        VerticalAlign::Top => origin_y -= block_height - bbox.height,
        VerticalAlign::Middle => origin_y -= (block_height - bbox.height) / 2.0,
        VerticalAlign::Bottom => {}
    }

    let count = lines.len() as f32;
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            // alignment measures the line without surrounding whitespace
            // or a retained break marker; the drawn text keeps both
            let line_width = metrics.width_of(line.trim(), options.size);
            let mut h_offset = options.horizontal_offset;
            match options.horizontal_align {
                HorizontalAlign::Left => {}
                HorizontalAlign::Center => h_offset += (bbox.width - line_width) / 2.0,
                HorizontalAlign::Right => h_offset += bbox.width - line_width,
            }

            let v_offset =
                options.vertical_offset + options.line_height * (i as f32 - count + 1.0);

            PlacedLine {
                text: line.clone(),
                coords: (bbox.x + h_offset, origin_y - v_offset),
            }
        })
        .collect()
}

/// Wraps and places text in one call, resolving the wrapping rule from a
/// locale table.
///
/// Bundles the collaborators that outlive any single text run: the
/// metrics capability, the locale table, and the total height of the
/// drawing surface. An unknown locale id in the options falls back to
/// the neutral rule rather than failing; use
/// [LocaleTable::lookup](crate::LocaleTable::lookup) first when a miss
/// should be an error.
///
/// ```
/// use textbox_layout::{BoxSpec, FixedMetrics, LocaleTable, Pt, RenderOptions, TextBoxLayout};
///
/// let metrics = FixedMetrics { advance: 0.5, ascent: 0.8 };
/// let locales = LocaleTable::builtin();
/// let surface = TextBoxLayout::new(&metrics, &locales, Pt(792.0));
///
/// let bbox = BoxSpec::new(Pt(72.0), Pt(72.0), Pt(30.0), Pt(40.0));
/// let placed = surface.place_text("hello world", bbox, &RenderOptions::new(Pt(10.0)));
/// assert_eq!(placed.len(), 2);
/// assert_eq!(placed[0].text, "hello");
/// ```
pub struct TextBoxLayout<'a, M: FontMetrics> {
    metrics: &'a M,
    locales: &'a LocaleTable,
    surface_height: Pt,
}

impl<'a, M: FontMetrics> TextBoxLayout<'a, M> {
    /// A layouter for one drawing surface of the given total height
    pub fn new(
        metrics: &'a M,
        locales: &'a LocaleTable,
        surface_height: impl Into<Pt>,
    ) -> TextBoxLayout<'a, M> {
        TextBoxLayout {
            metrics,
            locales,
            surface_height: surface_height.into(),
        }
    }

    /// Wrap `text` to the box's width under the rule for
    /// `options.locale`, then place every line within the box
    pub fn place_text(
        &self,
        text: &str,
        bbox: BoxSpec,
        options: &RenderOptions,
    ) -> Vec<PlacedLine> {
        let rule = self.locales.rule_for(&options.locale);
        let lines = break_text_into_lines(text, bbox.width, options.size, self.metrics, rule);
        place_lines(&lines, bbox, options, self.metrics, self.surface_height)
    }
}
