//! Ordered collection of coordinates rendered as a polyline.
//!
//! Points are kept exactly as added. A [`CoordinateConverter`] can reproject
//! each point into another space (usually screen space) at render time; it is
//! applied on every call to [`Coordinates::lines`] and never written back.

use std::fmt;

use glam::Vec2;

use crate::coordinate::Coordinate;
use crate::errors::InvalidArgumentError;

/// Per-point transform applied when a path is rendered.
pub trait CoordinateConverter {
    fn convert(&self, coordinate: &Coordinate) -> Coordinate;
}

impl<F> CoordinateConverter for F
where
    F: Fn(&Coordinate) -> Coordinate,
{
    fn convert(&self, coordinate: &Coordinate) -> Coordinate {
        self(coordinate)
    }
}

/// One drawable segment, in converted Cartesian units.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LineSegment {
    pub start: Vec2,
    pub end: Vec2,
}

impl LineSegment {
    /// `[start_x, start_y, end_x, end_y]`
    pub fn to_array(self) -> [f32; Coordinates::NUM_COORD_LINE] {
        [self.start.x, self.start.y, self.end.x, self.end.y]
    }
}

pub struct Coordinates {
    points: Vec<Coordinate>,
    close_line: bool,
    converter: Option<Box<dyn CoordinateConverter>>,
}

impl Coordinates {
    /// Values per segment in [`to_lines_array`](Self::to_lines_array)
    pub const NUM_COORD_LINE: usize = 4;
    pub const POS_START_X: usize = 0;
    pub const POS_START_Y: usize = 1;
    pub const POS_END_X: usize = 2;
    pub const POS_END_Y: usize = 3;

    /// An empty, closed path with no converter.
    pub fn new() -> Self {
        Coordinates {
            points: Vec::new(),
            close_line: true,
            converter: None,
        }
    }

    pub fn with_converter(converter: impl CoordinateConverter + 'static) -> Self {
        let mut coordinates = Self::new();
        coordinates.set_coordinate_converter(converter);
        coordinates
    }

    /// Append a point given in polar form.
    pub fn add_polar(&mut self, radius: f64, angle: f64) -> Result<(), InvalidArgumentError> {
        self.points.push(Coordinate::from_polar(radius, angle)?);
        Ok(())
    }

    /// Append a point given in integer Cartesian form.
    pub fn add_cartesian(&mut self, x: i64, y: i64) {
        self.points.push(Coordinate::from_cartesian(x, y));
    }

    pub fn add_coordinate(&mut self, coordinate: Coordinate) {
        self.points.push(coordinate);
    }

    /// Append an optional point; `None` is an error and nothing is added.
    pub fn try_add_coordinate(&mut self, coordinate: Option<Coordinate>) -> Result<(), InvalidArgumentError> {
        let coordinate = coordinate.ok_or(InvalidArgumentError::MissingCoordinate)?;
        self.add_coordinate(coordinate);
        Ok(())
    }

    /// Replace the converter used by later renders.
    pub fn set_coordinate_converter(&mut self, converter: impl CoordinateConverter + 'static) {
        self.install_converter(Box::new(converter));
    }

    /// Optional-argument form of
    /// [`set_coordinate_converter`](Self::set_coordinate_converter). There is
    /// no way back to the identity transform, so `None` is an error and the
    /// current converter stays installed.
    pub fn try_set_coordinate_converter(
        &mut self,
        converter: Option<Box<dyn CoordinateConverter>>,
    ) -> Result<(), InvalidArgumentError> {
        let converter = converter.ok_or(InvalidArgumentError::MissingConverter)?;
        self.install_converter(converter);
        Ok(())
    }

    fn install_converter(&mut self, converter: Box<dyn CoordinateConverter>) {
        crate::log::debug!(replacing = self.converter.is_some(), "installing coordinate converter");
        self.converter = Some(converter);
    }

    pub fn has_converter(&self) -> bool {
        self.converter.is_some()
    }

    /// Whether the rendered path connects the last point back to the first.
    pub fn set_close_line(&mut self, close_line: bool) {
        self.close_line = close_line;
    }

    pub fn close_line(&self) -> bool {
        self.close_line
    }

    pub fn size(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Stored points in insertion order, never converted.
    pub fn to_array(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.points.iter()
    }

    /// Segments the path is drawn with for `points` points.
    ///
    /// One point draws nothing. Otherwise consecutive points are joined, plus
    /// a closing segment when the line is closed.
    pub fn segment_count(points: usize, close_line: bool) -> usize {
        match points {
            0 | 1 => 0,
            n if close_line => n,
            n => n - 1,
        }
    }

    fn converted(&self, coordinate: &Coordinate) -> Vec2 {
        match &self.converter {
            Some(converter) => converter.convert(coordinate).to_vec2(),
            None => coordinate.to_vec2(),
        }
    }

    /// Render the path as line segments.
    ///
    /// Each point is passed through the converter (if any) once per call.
    pub fn lines(&self) -> Vec<LineSegment> {
        let count = Self::segment_count(self.points.len(), self.close_line);
        crate::log::debug!(
            points = self.points.len(),
            segments = count,
            converted = self.converter.is_some(),
            "rendering polyline"
        );
        if count == 0 {
            return Vec::new();
        }

        let vertices: Vec<Vec2> = self.points.iter().map(|c| self.converted(c)).collect();
        let mut segments: Vec<LineSegment> = vertices
            .windows(2)
            .map(|pair| LineSegment {
                start: pair[0],
                end: pair[1],
            })
            .collect();

        if self.close_line {
            segments.push(LineSegment {
                start: vertices[vertices.len() - 1],
                end: vertices[0],
            });
        }
        segments
    }

    /// [`lines`](Self::lines) flattened to `[start_x, start_y, end_x, end_y]`
    /// per segment; the length is always `4 × segment_count`.
    pub fn to_lines_array(&self) -> Vec<f32> {
        self.lines().into_iter().flat_map(LineSegment::to_array).collect()
    }
}

impl Default for Coordinates {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coordinates")
            .field("points", &self.points)
            .field("close_line", &self.close_line)
            .field("has_converter", &self.converter.is_some())
            .finish()
    }
}

impl Extend<Coordinate> for Coordinates {
    fn extend<I: IntoIterator<Item = Coordinate>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl FromIterator<Coordinate> for Coordinates {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        let mut coordinates = Self::new();
        coordinates.extend(iter);
        coordinates
    }
}

impl<'a> IntoIterator for &'a Coordinates {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
