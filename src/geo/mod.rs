//! Bounded geographic scalars: latitude, longitude and compass bearing.

mod cardinal;
mod latitude;
mod longitude;
mod range;

pub use cardinal::{BearingKind, CardinalDirection, CardinalSegment};
pub use latitude::{Latitude, LatitudeKind, LatitudeSegment};
pub use longitude::{Longitude, LongitudeKind, LongitudeSegment};
pub use range::{CompassSegment, CoordinateKind, GeoCoordinate, GeoValue, RangeCoordinate};
