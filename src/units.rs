use derive_more::{
    Add, AddAssign, Deref, DerefMut, Display, From, Into, MulAssign, Sub, SubAssign, Sum,
};
use std::ops::{Div, Mul};

/// A distance in typographic points (1/72 of an inch). All wrapping and
/// placement math happens in points; measurements returned by a metrics
/// provider must use the same unit as the box they are checked against.
///
/// ```
/// use textbox_layout::Pt;
///
/// let width = Pt(12.0) * 4.0 + Pt(6.0);
/// assert_eq!(width, Pt(54.0));
/// ```
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    MulAssign,
    Sum,
    Deref,
    DerefMut,
    Display,
    From,
    Into,
)]
pub struct Pt(pub f32);

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

/// A distance in millimetres, for callers that specify boxes in physical
/// units. Converts into [Pt] at 72 points per 25.4 mm.
///
/// ```
/// use textbox_layout::{Mm, Pt};
///
/// let pt: Pt = Mm(25.4).into();
/// assert!((pt.0 - 72.0).abs() < 1e-3);
/// ```
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    MulAssign,
    Sum,
    Deref,
    DerefMut,
    Display,
    From,
    Into,
)]
pub struct Mm(pub f32);

impl From<Mm> for Pt {
    fn from(mm: Mm) -> Pt {
        Pt(mm.0 / 25.4 * 72.0)
    }
}

impl From<Pt> for Mm {
    fn from(pt: Pt) -> Mm {
        Mm(pt.0 / 72.0 * 25.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        assert_eq!(Pt(1.5) + Pt(2.5), Pt(4.0));
        assert_eq!(Pt(10.0) - Pt(4.0), Pt(6.0));
        assert_eq!(Pt(10.0) * 0.5, Pt(5.0));
        assert_eq!(Pt(10.0) / 2.0, Pt(5.0));

        let total: Pt = [Pt(1.0), Pt(2.0), Pt(3.0)].into_iter().sum();
        assert_eq!(total, Pt(6.0));
    }

    #[test]
    fn millimetres_to_points() {
        let pt: Pt = Mm(25.4).into();
        assert!((pt.0 - 72.0).abs() < 1e-3);

        let pt: Pt = Mm(210.0).into();
        assert!((pt.0 - 595.27563).abs() < 1e-2);
    }

    #[test]
    fn points_to_millimetres_round_trips() {
        let back: Mm = Pt::from(Mm(40.0)).into();
        assert!((back.0 - 40.0).abs() < 1e-3);
    }
}
