//! Navigation core of a "get back to where you were" GPS app.
//!
//! - [`geo`]: range-checked latitude, longitude and compass bearing values,
//!   each classified into a compass segment.
//! - [`Coordinate`]: a 2D point kept in polar form, with integer Cartesian
//!   projections.
//! - [`Coordinates`]: an ordered polyline of points, rendered as a flat list
//!   of line segments through an optional per-point converter.
//! - [`format`]: locale-aware distance, speed and angle strings.
//!
//! ```
//! use getback_gps::{Coordinates, format::{format_dist, Locale}};
//!
//! let mut path = Coordinates::new();
//! path.add_cartesian(0, 0);
//! path.add_cartesian(3, 4);
//! assert_eq!(path.to_lines_array(), vec![0.0, 0.0, 3.0, 4.0, 3.0, 4.0, 0.0, 0.0]);
//!
//! assert_eq!(format_dist(9900.0, &Locale::EN_US), "9.9km");
//! ```
//!
//! Logging goes through `tracing` when the `tracing` feature is enabled.

pub mod angle;
pub mod coordinate;
pub mod coordinates;
pub mod errors;
pub mod format;
pub mod geo;
mod log;

pub use coordinate::{Cartesian, Coordinate, Polar};
pub use coordinates::{CoordinateConverter, Coordinates, LineSegment};
pub use errors::{Error, InvalidArgumentError, RangeError, Result};
pub use geo::{CardinalDirection, GeoCoordinate, GeoValue, Latitude, Longitude, RangeCoordinate};
