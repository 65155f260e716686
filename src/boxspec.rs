use crate::units::Pt;

/// The rectangular region that text is wrapped into and aligned within.
///
/// `x` and `y` locate the box's top-left corner, with `y` measured
/// downward from the top of the drawing surface. Placement converts into
/// the surface's bottom-up coordinates; see
/// [place_lines](crate::place_lines).
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct BoxSpec {
    /// The left edge of the box
    pub x: Pt,
    /// The top edge of the box, measured down from the surface top
    pub y: Pt,
    /// The width lines are wrapped to
    pub width: Pt,
    /// The height the wrapped block is aligned within
    pub height: Pt,
}

impl BoxSpec {
    /// Create a box from its top-left corner and dimensions
    pub fn new(
        x: impl Into<Pt>,
        y: impl Into<Pt>,
        width: impl Into<Pt>,
        height: impl Into<Pt>,
    ) -> BoxSpec {
        BoxSpec {
            x: x.into(),
            y: y.into(),
            width: width.into(),
            height: height.into(),
        }
    }
}
