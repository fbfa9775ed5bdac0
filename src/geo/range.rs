//! Range-validated scalar coordinates.
//!
//! [`RangeCoordinate`] holds one `f64` and guarantees it lies inside the
//! interval of its [`CoordinateKind`]. The kind is a zero-sized marker, so
//! `Latitude`, `Longitude` and `CardinalDirection` are the same value type
//! with different bounds and segment rules.

use std::fmt;
use std::marker::PhantomData;

use enum_dispatch::enum_dispatch;
use glam::IVec2;

use super::{CardinalDirection, Latitude, Longitude};
use crate::errors::RangeError;

/// A discrete bucket a coordinate value falls into (hemisphere, quadrant).
pub trait CompassSegment: Copy + fmt::Debug + PartialEq {
    /// Short compass label (`N`, `SE`, ...)
    fn label(self) -> &'static str;

    /// Direction of the segment as an integer unit vector (x east, y north)
    fn unit(self) -> IVec2;
}

/// Bounds and classification rules for one kind of coordinate.
pub trait CoordinateKind {
    /// Lower-case name used in error messages
    const NAME: &'static str;
    /// Lowest valid value, always inclusive
    const LOW: f64;
    /// Highest valid value
    const HIGH: f64;
    /// Whether `HIGH` itself is valid
    const HIGH_INCLUSIVE: bool = true;

    type Segment: CompassSegment;

    /// Classify an in-range value.
    fn segment(value: f64) -> Self::Segment;

    /// Display-oriented transform of an in-range value.
    fn converted(value: f64) -> f64;
}

/// A scalar that always satisfies `K::LOW <= value <= K::HIGH`
/// (or `< K::HIGH` for half-open kinds).
pub struct RangeCoordinate<K> {
    value: f64,
    kind: PhantomData<K>,
}

impl<K: CoordinateKind> RangeCoordinate<K> {
    pub const LOW_LIMIT: f64 = K::LOW;
    pub const HIGH_LIMIT: f64 = K::HIGH;

    /// Create a coordinate, failing if `value` is out of range.
    pub fn new(value: f64) -> Result<Self, RangeError> {
        Ok(Self {
            value: Self::check(value)?,
            kind: PhantomData,
        })
    }

    /// Whether `value` would be accepted by [`set_value`](Self::set_value).
    ///
    /// NaN is never contained.
    pub fn contains(value: f64) -> bool {
        let above_low = value >= K::LOW;
        let below_high = if K::HIGH_INCLUSIVE {
            value <= K::HIGH
        } else {
            value < K::HIGH
        };
        above_low && below_high
    }

    fn check(value: f64) -> Result<f64, RangeError> {
        if Self::contains(value) {
            return Ok(value);
        }
        crate::log::warn!(
            kind = K::NAME,
            value,
            low = K::LOW,
            high = K::HIGH,
            "rejected out-of-range value"
        );
        Err(RangeError {
            kind: K::NAME,
            value,
            low: K::LOW,
            high: K::HIGH,
            high_inclusive: K::HIGH_INCLUSIVE,
        })
    }

    /// The last validated value.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Replace the value. On error the previous value is kept.
    pub fn set_value(&mut self, value: f64) -> Result<(), RangeError> {
        self.value = Self::check(value)?;
        Ok(())
    }

    /// Width of the range, the wrap period for kinds that wrap.
    #[inline]
    pub fn period() -> f64 {
        K::HIGH - K::LOW
    }

    #[inline]
    pub fn segment(&self) -> K::Segment {
        K::segment(self.value)
    }

    #[inline]
    pub fn segment_unit(&self) -> IVec2 {
        self.segment().unit()
    }

    #[inline]
    pub fn converted_value(&self) -> f64 {
        K::converted(self.value)
    }
}

impl<K> Clone for RangeCoordinate<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for RangeCoordinate<K> {}

impl<K> PartialEq for RangeCoordinate<K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K> Default for RangeCoordinate<K> {
    /// Zero, which every kind's range contains.
    fn default() -> Self {
        Self {
            value: 0.0,
            kind: PhantomData,
        }
    }
}

impl<K: CoordinateKind> fmt::Debug for RangeCoordinate<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeCoordinate")
            .field("kind", &K::NAME)
            .field("value", &self.value)
            .finish()
    }
}

impl<K: CoordinateKind> fmt::Display for RangeCoordinate<K> {
    /// Converted value followed by the segment label, e.g. `4° S`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}° {}", self.converted_value(), self.segment().label())
    }
}

impl<K: CoordinateKind> TryFrom<f64> for RangeCoordinate<K> {
    type Error = RangeError;

    fn try_from(value: f64) -> Result<Self, RangeError> {
        Self::new(value)
    }
}

// ============================================================================
// Dynamic dispatch over the concrete kinds
// ============================================================================

/// Behavior shared by every bounded coordinate, independent of its kind.
#[enum_dispatch]
pub trait GeoCoordinate {
    fn value(&self) -> f64;
    fn set_value(&mut self, value: f64) -> Result<(), RangeError>;
    fn converted_value(&self) -> f64;
    fn segment_label(&self) -> &'static str;
    fn segment_unit(&self) -> IVec2;
    fn low_limit(&self) -> f64;
    fn high_limit(&self) -> f64;
}

impl<K: CoordinateKind> GeoCoordinate for RangeCoordinate<K> {
    fn value(&self) -> f64 {
        self.value
    }

    fn set_value(&mut self, value: f64) -> Result<(), RangeError> {
        RangeCoordinate::set_value(self, value)
    }

    fn converted_value(&self) -> f64 {
        K::converted(self.value)
    }

    fn segment_label(&self) -> &'static str {
        K::segment(self.value).label()
    }

    fn segment_unit(&self) -> IVec2 {
        K::segment(self.value).unit()
    }

    fn low_limit(&self) -> f64 {
        K::LOW
    }

    fn high_limit(&self) -> f64 {
        K::HIGH
    }
}

/// Any one of the bounded coordinate kinds.
#[enum_dispatch(GeoCoordinate)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeoValue {
    Latitude,
    Longitude,
    CardinalDirection,
}
