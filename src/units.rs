//! Lengths and unit conversion.
//!
//! All geometry in the crate is expressed in PDF points ([`Pt`]), the native
//! unit of the PDF coordinate system (1/72 inch). [`In`] and [`Cm`] exist so
//! callers can write physical measurements and convert them with `.into()`:
//!
//! ```
//! use label_grid::{Cm, In, Pt};
//!
//! let inch: Pt = In(1.0).into();
//! assert_eq!(inch, Pt(72.0));
//!
//! let padding: Pt = Cm(2.54).into();
//! assert!((*padding - 72.0).abs() < 1e-4);
//! ```

use crate::error::Error;
use derive_more::{Add, AddAssign, Deref, DerefMut, Display, From, Into, Sub, Sum};
use std::ops::{Div, Mul};
use std::str::FromStr;

/// Native units per inch
pub const POINTS_PER_INCH: f32 = 72.0;

/// Native units per centimetre
pub const POINTS_PER_CM: f32 = POINTS_PER_INCH / 2.54;

/// A length in PDF points
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    Sum,
    Deref,
    DerefMut,
    Display,
    From,
    Into,
)]
#[display("{_0}pt")]
pub struct Pt(pub f32);

/// A length in inches
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, Deref, Display, From)]
#[display("{_0}in")]
pub struct In(pub f32);

/// A length in centimetres
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, Deref, Display, From)]
#[display("{_0}cm")]
pub struct Cm(pub f32);

impl From<In> for Pt {
    fn from(value: In) -> Self {
        Pt(to_native(value.0, Unit::Inch))
    }
}

impl From<Cm> for Pt {
    fn from(value: Cm) -> Self {
        Pt(to_native(value.0, Unit::Centimeter))
    }
}

impl From<Pt> for Cm {
    fn from(value: Pt) -> Self {
        Cm(value.0 / POINTS_PER_CM)
    }
}

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

/// The measurement units a user-facing value can be given in
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Unit {
    Centimeter,
    Inch,
    /// A 0-100 percentage, converted into a 0.0-1.0 fraction
    Percent,
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cm" | "centimeter" | "centimetre" => Ok(Unit::Centimeter),
            "in" | "inch" => Ok(Unit::Inch),
            "%" | "percent" => Ok(Unit::Percent),
            _ => Err(Error::InvalidUnit(s.to_string())),
        }
    }
}

/// Convert `value` given in `unit` into the document's native unit.
///
/// Lengths come back in points; percentages come back as a fraction.
pub fn to_native(value: f32, unit: Unit) -> f32 {
    match unit {
        Unit::Centimeter => value * POINTS_PER_CM,
        Unit::Inch => value * POINTS_PER_INCH,
        Unit::Percent => value / 100.0,
    }
}
