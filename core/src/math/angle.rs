//! Binary angles and tabulated trigonometry.

use core::f64::consts::TAU;
use core::fmt::{self, Display, Formatter};
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use spin::Lazy;

//
// Types
//

/// A scalar angular quantity, stored as a *binary angle*: 256 units to a
/// full turn, wrapping on overflow.
///
/// A byte-sized angle makes a full revolution exactly 256 steps, the
/// granularity the sine and cosine tables are indexed with. Use the
/// [`turns`] constructor to create an `Angle` and
/// [`to_units`](Self::to_units) to get the raw value back.
///
/// # Examples
/// ```
/// use lofire_core::math::turns;
///
/// assert_eq!(turns(0).cos(), 127);
/// assert_eq!(turns(64).sin(), 127);
/// // Wraps around at a full turn
/// assert_eq!(turns(128) + turns(128), turns(0));
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[repr(transparent)]
pub struct Angle(u8);

/// Sine and cosine of every `Angle`, in s0.7 fixed point.
struct SinCos {
    cos: [i8; 256],
    sin: [i8; 256],
}

//
// Free fns and consts
//

/// Returns an angle of `a` units, with 256 units to a full turn.
pub const fn turns(a: u8) -> Angle {
    Angle(a)
}

static SIN_COS: Lazy<SinCos> = Lazy::new(SinCos::new);

//
// Inherent impls
//

impl SinCos {
    /// Tabulates cos·127 and sin·127 for each of the 256 angle values,
    /// truncated toward zero. The scale factor 127 puts the values in
    /// s0.7 fixed point, the widest symmetric range a signed byte holds.
    fn new() -> Self {
        let mut cos = [0; 256];
        let mut sin = [0; 256];
        for i in 0..256 {
            let a = i as f64 * TAU / 256.0;
            cos[i] = (libm::cos(a) * 127.0) as i8;
            sin[i] = (libm::sin(a) * 127.0) as i8;
        }
        Self { cos, sin }
    }
}

impl Angle {
    /// A zero angle.
    pub const ZERO: Self = Self(0);
    /// A quarter turn.
    pub const RIGHT: Self = Self(64);
    /// A half turn.
    pub const STRAIGHT: Self = Self(128);

    /// Returns the value of `self` in angle units.
    pub const fn to_units(self) -> u8 {
        self.0
    }

    /// Returns the cosine of `self` in s0.7 fixed point (cos·127).
    pub fn cos(self) -> i8 {
        SIN_COS.cos[self.0 as usize]
    }

    /// Returns the sine of `self` in s0.7 fixed point (sin·127).
    pub fn sin(self) -> i8 {
        SIN_COS.sin[self.0 as usize]
    }

    /// Returns the cosine and sine of `self` with one table resolve.
    pub fn cos_sin(self) -> (i8, i8) {
        let t = &*SIN_COS;
        (t.cos[self.0 as usize], t.sin[self.0 as usize])
    }
}

//
// Foreign trait impls
//

impl Add for Angle {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }
}
impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl Sub for Angle {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }
}
impl SubAssign for Angle {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
impl Neg for Angle {
    type Output = Self;
    fn neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }
}

impl Display for Angle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/256 turn", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cos_spot_values() {
        let angles = [0, 16, 20, 32, 64, 128, 192, 255];
        let expected = [127, 117, 112, 89, 0, -127, 0, 126];
        for (a, e) in angles.into_iter().zip(expected) {
            assert_eq!(turns(a).cos(), e, "cos of {a}");
        }
    }

    #[test]
    fn sin_spot_values() {
        let angles = [0, 16, 20, 32, 64, 128, 192, 255];
        let expected = [0, 48, 59, 89, 127, 0, -127, -3];
        for (a, e) in angles.into_iter().zip(expected) {
            assert_eq!(turns(a).sin(), e, "sin of {a}");
        }
    }

    #[test]
    fn table_values_within_s07_range() {
        for a in 0..=255 {
            let (cos, sin) = turns(a).cos_sin();
            assert!((-127..=127).contains(&cos));
            assert!((-127..=127).contains(&sin));
        }
    }

    #[test]
    fn cos_sin_agrees_with_single_lookups() {
        for a in 0..=255 {
            let angle = turns(a);
            assert_eq!(angle.cos_sin(), (angle.cos(), angle.sin()));
        }
    }

    #[test]
    fn wrapping_arithmetic() {
        assert_eq!(turns(200) + turns(100), turns(44));
        assert_eq!(turns(10) - turns(20), turns(246));
        assert_eq!(-turns(1), turns(255));
        assert_eq!(-Angle::ZERO, Angle::ZERO);
    }
}
