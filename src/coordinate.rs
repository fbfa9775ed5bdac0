//! A 2D point stored in polar form with an integer Cartesian view.
//!
//! Polar `(radius, angle)` is the source of truth. Radius is never negative
//! and angle is always in `[0, 360)`; a zero radius always has angle 0.
//! Cartesian `(x, y)` is projected on demand and rounded to whole units, so a
//! Cartesian round trip is only exact up to that rounding.

use glam::{DVec2, Vec2};

use crate::angle::{HALF_TURN, normalize_angle};
use crate::errors::InvalidArgumentError;

/// Polar pair. Slot order for [`to_array`](Self::to_array) is
/// `[Coordinate::RADIUS, Coordinate::ANGLE]`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Polar {
    pub radius: f64,
    /// Degrees, counter-clockwise from the positive x axis
    pub angle: f64,
}

impl Polar {
    pub fn new(radius: f64, angle: f64) -> Self {
        Polar { radius, angle }
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.radius, self.angle]
    }
}

/// Integer Cartesian pair. Slot order for [`to_array`](Self::to_array) is
/// `[Coordinate::X, Coordinate::Y]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Cartesian {
    pub x: i64,
    pub y: i64,
}

impl Cartesian {
    pub fn new(x: i64, y: i64) -> Self {
        Cartesian { x, y }
    }

    pub fn to_array(self) -> [i64; 2] {
        [self.x, self.y]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Coordinate {
    radius: f64,
    angle: f64,
}

impl Coordinate {
    /// Index of the radius in a polar array
    pub const RADIUS: usize = 0;
    /// Index of the angle in a polar array
    pub const ANGLE: usize = 1;
    /// Index of x in a Cartesian array
    pub const X: usize = 0;
    /// Index of y in a Cartesian array
    pub const Y: usize = 1;

    /// The origin, `(0, 0°)`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_polar(radius: f64, angle: f64) -> Result<Self, InvalidArgumentError> {
        let mut coordinate = Self::new();
        coordinate.set_polar_coordinate(radius, angle)?;
        Ok(coordinate)
    }

    pub fn from_cartesian(x: i64, y: i64) -> Self {
        let mut coordinate = Self::new();
        coordinate.set_cartesian_coordinate(x, y);
        coordinate
    }

    /// Set from polar form.
    ///
    /// The angle is wrapped into `[0, 360)`. A negative radius is flipped and
    /// the angle turned by 180°. A zero radius resets the angle to 0.
    /// NaN or infinite input is rejected and leaves the coordinate unchanged.
    pub fn set_polar_coordinate(&mut self, radius: f64, angle: f64) -> Result<(), InvalidArgumentError> {
        let radius = InvalidArgumentError::check_finite("radius", radius)?;
        let angle = InvalidArgumentError::check_finite("angle", angle)?;
        self.store(radius, normalize_angle(angle));
        Ok(())
    }

    /// Set from integer Cartesian form.
    pub fn set_cartesian_coordinate(&mut self, x: i64, y: i64) {
        let (x, y) = (x as f64, y as f64);
        let radius = x.hypot(y);
        let angle = normalize_angle(y.atan2(x).to_degrees());
        self.store(radius, angle);
    }

    /// Copy the polar pair of `other`.
    pub fn set_coordinate(&mut self, other: &Coordinate) {
        self.radius = other.radius;
        self.angle = other.angle;
    }

    /// Like [`set_coordinate`](Self::set_coordinate) for callers holding an
    /// optional reference; `None` is an error and leaves `self` unchanged.
    pub fn try_set_coordinate(&mut self, other: Option<&Coordinate>) -> Result<(), InvalidArgumentError> {
        let other = other.ok_or(InvalidArgumentError::MissingCoordinate)?;
        self.set_coordinate(other);
        Ok(())
    }

    /// Enforce the radius/angle invariants. `angle` is already in `[0, 360)`.
    fn store(&mut self, radius: f64, angle: f64) {
        let (radius, angle) = if radius < 0.0 {
            crate::log::debug!(radius, angle, "flipping negative polar radius");
            (-radius, normalize_angle(angle + HALF_TURN))
        } else {
            (radius, angle)
        };

        if radius == 0.0 {
            // also turns -0.0 into 0.0
            self.radius = 0.0;
            self.angle = 0.0;
        } else {
            self.radius = radius;
            self.angle = angle;
        }
    }

    #[inline]
    pub fn polar_radius(&self) -> f64 {
        self.radius
    }

    /// Angle in degrees, `[0, 360)`
    #[inline]
    pub fn polar_angle(&self) -> f64 {
        self.angle
    }

    pub fn polar_coordinate(&self) -> Polar {
        Polar::new(self.radius, self.angle)
    }

    /// Floating point projection before rounding
    fn projection(&self) -> DVec2 {
        DVec2::from_angle(self.angle.to_radians()) * self.radius
    }

    /// `round(radius · cos(angle))`, half away from zero.
    pub fn cartesian_x(&self) -> i64 {
        self.projection().x.round() as i64
    }

    /// `round(radius · sin(angle))`, half away from zero.
    pub fn cartesian_y(&self) -> i64 {
        self.projection().y.round() as i64
    }

    pub fn cartesian_coordinate(&self) -> Cartesian {
        let rounded = self.projection().round();
        Cartesian::new(rounded.x as i64, rounded.y as i64)
    }

    /// Cartesian position as a float vector, the way renderers consume it.
    pub fn to_vec2(&self) -> Vec2 {
        let c = self.cartesian_coordinate();
        Vec2::new(c.x as f32, c.y as f32)
    }
}

impl From<Cartesian> for Coordinate {
    fn from(c: Cartesian) -> Self {
        Coordinate::from_cartesian(c.x, c.y)
    }
}

impl TryFrom<Polar> for Coordinate {
    type Error = InvalidArgumentError;

    fn try_from(p: Polar) -> Result<Self, InvalidArgumentError> {
        Coordinate::from_polar(p.radius, p.angle)
    }
}
