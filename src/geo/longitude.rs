//! Longitude in degrees, `[-180, 180]`.

use glam::IVec2;

use super::range::{CompassSegment, CoordinateKind, RangeCoordinate};

/// Hemisphere of a longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LongitudeSegment {
    East,
    West,
}

impl CompassSegment for LongitudeSegment {
    fn label(self) -> &'static str {
        match self {
            LongitudeSegment::East => "E",
            LongitudeSegment::West => "W",
        }
    }

    fn unit(self) -> IVec2 {
        match self {
            LongitudeSegment::East => IVec2::X,
            LongitudeSegment::West => IVec2::NEG_X,
        }
    }
}

impl std::fmt::Display for LongitudeSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongitudeKind;

impl CoordinateKind for LongitudeKind {
    const NAME: &'static str = "longitude";
    const LOW: f64 = -180.0;
    const HIGH: f64 = 180.0;
    type Segment = LongitudeSegment;

    fn segment(value: f64) -> LongitudeSegment {
        if value >= 0.0 {
            LongitudeSegment::East
        } else {
            LongitudeSegment::West
        }
    }

    fn converted(value: f64) -> f64 {
        value.abs()
    }
}

/// Longitude in degrees, east positive.
pub type Longitude = RangeCoordinate<LongitudeKind>;

impl Longitude {
    pub const SEGMENT_EAST_HIGH: f64 = 180.0;
    pub const SEGMENT_WEST_LOW: f64 = -180.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: f64 = 4.0;
    const OUT_OF_RANGE: f64 = 190.0;

    #[test]
    fn stores_valid_values() {
        let mut lon = Longitude::new(0.0).unwrap();
        assert_eq!(lon.value(), 0.0);
        lon.set_value(Longitude::SEGMENT_EAST_HIGH).unwrap();
        assert_eq!(lon.value(), 180.0);
        lon.set_value(Longitude::SEGMENT_WEST_LOW).unwrap();
        assert_eq!(lon.value(), -180.0);
    }

    #[test]
    fn rejects_out_of_range() {
        let err = Longitude::new(OUT_OF_RANGE).unwrap_err();
        assert_eq!(err.to_string(), "longitude value 190 is not in range -180.0 .. 180.0");
        assert!(Longitude::new(-OUT_OF_RANGE).is_err());
    }

    #[test]
    fn segment_by_sign() {
        assert_eq!(Longitude::default().segment(), LongitudeSegment::East);
        assert_eq!(Longitude::new(180.0).unwrap().segment(), LongitudeSegment::East);
        assert_eq!(Longitude::new(-VALID).unwrap().segment(), LongitudeSegment::West);
        assert_eq!(Longitude::new(-180.0).unwrap().segment(), LongitudeSegment::West);
    }

    #[test]
    fn segment_unit_points_east_or_west() {
        assert_eq!(Longitude::new(VALID).unwrap().segment_unit(), IVec2::new(1, 0));
        assert_eq!(Longitude::new(-VALID).unwrap().segment_unit(), IVec2::new(-1, 0));
    }

    #[test]
    fn converted_value_is_absolute() {
        assert_eq!(Longitude::new(VALID).unwrap().converted_value(), VALID);
        assert_eq!(Longitude::new(-VALID).unwrap().converted_value(), VALID);
        assert_eq!(Longitude::new(-180.0).unwrap().converted_value(), 180.0);
    }
}
