//! Thresholds and unit suffixes used by the formatters

pub const METERS_PER_KILOMETER: f64 = 1000.0;
/// m/s → km/h
pub const MPS_TO_KMH: f64 = 3.6;
/// Values below this (after rounding) get one decimal digit
pub const DECIMAL_THRESHOLD: f64 = 10.0;
pub const DISTANCE_DECIMALS_SMALL: u32 = 1;
pub const ANGLE_DECIMALS: u32 = 2;

pub const UNIT_METER: &str = "m";
pub const UNIT_KILOMETER: &str = "km";
pub const UNIT_KMH: &str = "km/h";
pub const UNIT_DEGREE: &str = "°";
