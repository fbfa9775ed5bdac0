//! Latitude in degrees, `[-90, 90]`.

use glam::IVec2;

use super::range::{CompassSegment, CoordinateKind, RangeCoordinate};

/// Hemisphere of a latitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LatitudeSegment {
    North,
    South,
}

impl CompassSegment for LatitudeSegment {
    fn label(self) -> &'static str {
        match self {
            LatitudeSegment::North => "N",
            LatitudeSegment::South => "S",
        }
    }

    fn unit(self) -> IVec2 {
        match self {
            LatitudeSegment::North => IVec2::Y,
            LatitudeSegment::South => IVec2::NEG_Y,
        }
    }
}

impl std::fmt::Display for LatitudeSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatitudeKind;

impl CoordinateKind for LatitudeKind {
    const NAME: &'static str = "latitude";
    const LOW: f64 = -90.0;
    const HIGH: f64 = 90.0;
    type Segment = LatitudeSegment;

    /// Zero belongs to the northern hemisphere.
    fn segment(value: f64) -> LatitudeSegment {
        if value >= 0.0 {
            LatitudeSegment::North
        } else {
            LatitudeSegment::South
        }
    }

    fn converted(value: f64) -> f64 {
        value.abs()
    }
}

/// Latitude in degrees. The converted value is the distance from the
/// equator, to be shown next to the hemisphere label.
pub type Latitude = RangeCoordinate<LatitudeKind>;

impl Latitude {
    pub const SEGMENT_NORTH_HIGH: f64 = 90.0;
    pub const SEGMENT_SOUTH_LOW: f64 = -90.0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const VALID: f64 = 4.0;
    const OUT_OF_RANGE: f64 = 100.0;

    #[test]
    fn default_value_is_zero() {
        assert_eq!(Latitude::default().value(), 0.0);
        assert_eq!(Latitude::new(0.0).unwrap().value(), 0.0);
    }

    #[test]
    fn stores_valid_values() {
        let mut lat = Latitude::default();
        lat.set_value(VALID).unwrap();
        assert_eq!(lat.value(), VALID);
        lat.set_value(Latitude::SEGMENT_NORTH_HIGH).unwrap();
        assert_eq!(lat.value(), 90.0);
        lat.set_value(-VALID).unwrap();
        assert_eq!(lat.value(), -VALID);
        lat.set_value(Latitude::SEGMENT_SOUTH_LOW).unwrap();
        assert_eq!(lat.value(), -90.0);
    }

    #[test]
    fn rejects_out_of_range() {
        let mut lat = Latitude::default();
        let err = lat.set_value(OUT_OF_RANGE).unwrap_err();
        assert_eq!(err.to_string(), "latitude value 100 is not in range -90.0 .. 90.0");
        assert!(lat.set_value(-OUT_OF_RANGE).is_err());
        assert!(Latitude::new(90.000_001).is_err());
        assert_eq!(lat.value(), 0.0);
    }

    #[test]
    fn segment_by_sign() {
        assert_eq!(Latitude::default().segment(), LatitudeSegment::North);
        assert_eq!(Latitude::new(VALID).unwrap().segment(), LatitudeSegment::North);
        assert_eq!(Latitude::new(90.0).unwrap().segment(), LatitudeSegment::North);
        assert_eq!(Latitude::new(-VALID).unwrap().segment(), LatitudeSegment::South);
        assert_eq!(Latitude::new(-90.0).unwrap().segment(), LatitudeSegment::South);
    }

    #[test]
    fn segment_unit_points_north_or_south() {
        assert_eq!(Latitude::new(VALID).unwrap().segment_unit(), IVec2::new(0, 1));
        assert_eq!(Latitude::new(-VALID).unwrap().segment_unit(), IVec2::new(0, -1));
    }

    #[test]
    fn converted_value_is_absolute() {
        assert_abs_diff_eq!(Latitude::default().converted_value(), 0.0);
        assert_abs_diff_eq!(Latitude::new(VALID).unwrap().converted_value(), VALID);
        assert_abs_diff_eq!(Latitude::new(-VALID).unwrap().converted_value(), VALID);
        assert_abs_diff_eq!(Latitude::new(-90.0).unwrap().converted_value(), 90.0);
    }

    #[test]
    fn display_pairs_value_with_hemisphere() {
        assert_eq!(Latitude::new(-51.5).unwrap().to_string(), "51.5° S");
    }
}
