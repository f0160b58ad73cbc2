//! Pre-defined page sizes for the supported paper formats.
//!
//! All sizes are provided in portrait orientation (width, height) where width ≤ height.
//!
//! The set of paper sizes is closed: [`PaperSize`] enumerates every format the grid tool
//! accepts, and [`PaperSize::dimensions`] maps each one to its size in points.
//!
//! # Example
//!
//! ```
//! use label_grid::pagesize::{PaperSize, A4};
//!
//! let paper: PaperSize = "a4".parse().expect("A4 is a known paper size");
//! assert_eq!(paper.dimensions(), A4);
//! ```

use crate::error::Error;
use crate::units::*;
use std::fmt;
use std::str::FromStr;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

macro_rules! mm {
    ($width:expr, $height:expr) => {
        (Pt($width * 72.0 / 25.4), Pt($height * 72.0 / 25.4))
    };
}

macro_rules! inches {
    ($width:expr, $height:expr) => {
        (Pt($width * 72.0), Pt($height * 72.0))
    };
}

// north american sizes
pub const LETTER: PageSize = inches!(8.5, 11.0);
pub const LEGAL: PageSize = inches!(8.5, 14.0);
pub const ELEVEN_SEVENTEEN: PageSize = inches!(11.0, 17.0);

// iso a-series
pub const A0: PageSize = mm!(841.0, 1189.0);
pub const A1: PageSize = mm!(594.0, 841.0);
pub const A2: PageSize = mm!(420.0, 594.0);
pub const A3: PageSize = mm!(297.0, 420.0);
pub const A4: PageSize = mm!(210.0, 297.0);
pub const A5: PageSize = mm!(148.0, 210.0);
pub const A6: PageSize = mm!(105.0, 148.0);

// iso b-series
pub const B0: PageSize = mm!(1000.0, 1414.0);
pub const B1: PageSize = mm!(707.0, 1000.0);
pub const B2: PageSize = mm!(500.0, 707.0);
pub const B3: PageSize = mm!(353.0, 500.0);
pub const B4: PageSize = mm!(250.0, 353.0);
pub const B5: PageSize = mm!(176.0, 250.0);
pub const B6: PageSize = mm!(125.0, 176.0);

/// Every paper format the grid tool knows about
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum PaperSize {
    A0,
    A1,
    A2,
    A3,
    #[default]
    A4,
    A5,
    A6,
    B0,
    B1,
    B2,
    B3,
    B4,
    B5,
    B6,
    Letter,
    Legal,
    ElevenSeventeen,
}

impl PaperSize {
    pub const ALL: [PaperSize; 17] = [
        PaperSize::A0,
        PaperSize::A1,
        PaperSize::A2,
        PaperSize::A3,
        PaperSize::A4,
        PaperSize::A5,
        PaperSize::A6,
        PaperSize::B0,
        PaperSize::B1,
        PaperSize::B2,
        PaperSize::B3,
        PaperSize::B4,
        PaperSize::B5,
        PaperSize::B6,
        PaperSize::Letter,
        PaperSize::Legal,
        PaperSize::ElevenSeventeen,
    ];

    /// The portrait (width, height) of the paper, in points
    pub const fn dimensions(self) -> PageSize {
        match self {
            PaperSize::A0 => A0,
            PaperSize::A1 => A1,
            PaperSize::A2 => A2,
            PaperSize::A3 => A3,
            PaperSize::A4 => A4,
            PaperSize::A5 => A5,
            PaperSize::A6 => A6,
            PaperSize::B0 => B0,
            PaperSize::B1 => B1,
            PaperSize::B2 => B2,
            PaperSize::B3 => B3,
            PaperSize::B4 => B4,
            PaperSize::B5 => B5,
            PaperSize::B6 => B6,
            PaperSize::Letter => LETTER,
            PaperSize::Legal => LEGAL,
            PaperSize::ElevenSeventeen => ELEVEN_SEVENTEEN,
        }
    }

    /// The canonical upper-case name, as accepted on the command line
    pub const fn name(self) -> &'static str {
        match self {
            PaperSize::A0 => "A0",
            PaperSize::A1 => "A1",
            PaperSize::A2 => "A2",
            PaperSize::A3 => "A3",
            PaperSize::A4 => "A4",
            PaperSize::A5 => "A5",
            PaperSize::A6 => "A6",
            PaperSize::B0 => "B0",
            PaperSize::B1 => "B1",
            PaperSize::B2 => "B2",
            PaperSize::B3 => "B3",
            PaperSize::B4 => "B4",
            PaperSize::B5 => "B5",
            PaperSize::B6 => "B6",
            PaperSize::Letter => "LETTER",
            PaperSize::Legal => "LEGAL",
            PaperSize::ElevenSeventeen => "ELEVENSEVENTEEN",
        }
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaperSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaperSize::ALL
            .iter()
            .copied()
            .find(|paper| paper.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownPaperSize(s.to_string()))
    }
}
