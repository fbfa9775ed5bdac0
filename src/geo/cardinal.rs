//! Compass bearing in degrees, `[0, 360)`, classified into diagonal quadrants.

use glam::IVec2;

use super::range::{CompassSegment, CoordinateKind, RangeCoordinate};
use crate::angle::{FULL_TURN, normalize_angle};
use crate::errors::RangeError;

/// Quadrant of a bearing. Quadrant boundaries sit on the diagonals, so each
/// quadrant is centered on a cardinal point:
///
/// | segment   | bearing            | unit      |
/// |-----------|--------------------|-----------|
/// | NorthEast | `[315,360) ∪ [0,45]` | `( 1, 1)` |
/// | SouthEast | `(45,135]`         | `( 1,-1)` |
/// | SouthWest | `(135,225]`        | `(-1,-1)` |
/// | NorthWest | `(225,315)`        | `(-1, 1)` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardinalSegment {
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

impl CompassSegment for CardinalSegment {
    fn label(self) -> &'static str {
        match self {
            CardinalSegment::NorthEast => "NE",
            CardinalSegment::SouthEast => "SE",
            CardinalSegment::SouthWest => "SW",
            CardinalSegment::NorthWest => "NW",
        }
    }

    fn unit(self) -> IVec2 {
        match self {
            CardinalSegment::NorthEast => IVec2::new(1, 1),
            CardinalSegment::SouthEast => IVec2::new(1, -1),
            CardinalSegment::SouthWest => IVec2::new(-1, -1),
            CardinalSegment::NorthWest => IVec2::new(-1, 1),
        }
    }
}

impl std::fmt::Display for CardinalSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BearingKind;

impl CoordinateKind for BearingKind {
    const NAME: &'static str = "bearing";
    const LOW: f64 = 0.0;
    const HIGH: f64 = FULL_TURN;
    const HIGH_INCLUSIVE: bool = false;
    type Segment = CardinalSegment;

    fn segment(value: f64) -> CardinalSegment {
        if value <= CardinalDirection::SEGMENT_NE_HIGH || value >= CardinalDirection::SEGMENT_NW_HIGH {
            CardinalSegment::NorthEast
        } else if value <= CardinalDirection::SEGMENT_SE_HIGH {
            CardinalSegment::SouthEast
        } else if value <= CardinalDirection::SEGMENT_SW_HIGH {
            CardinalSegment::SouthWest
        } else {
            CardinalSegment::NorthWest
        }
    }

    /// A bearing is already in display range.
    fn converted(value: f64) -> f64 {
        value
    }
}

/// Compass bearing: 0 is north, increasing clockwise. 360 itself is not a
/// valid value; wrap first with [`normalize_angle`] or use
/// [`CardinalDirection::from_bearing`].
pub type CardinalDirection = RangeCoordinate<BearingKind>;

impl CardinalDirection {
    /// Upper (inclusive) edge of the north-east quadrant.
    pub const SEGMENT_NE_HIGH: f64 = 45.0;
    /// Upper (inclusive) edge of the south-east quadrant.
    pub const SEGMENT_SE_HIGH: f64 = 135.0;
    /// Upper (inclusive) edge of the south-west quadrant.
    pub const SEGMENT_SW_HIGH: f64 = 225.0;
    /// Upper (exclusive) edge of the north-west quadrant; north-east starts here.
    pub const SEGMENT_NW_HIGH: f64 = 315.0;

    /// Build a bearing from any angle, wrapping it into `[0, 360)` first.
    ///
    /// Only non-finite input can fail.
    pub fn from_bearing(degrees: f64) -> Result<Self, RangeError> {
        Self::new(normalize_angle(degrees))
    }
}
