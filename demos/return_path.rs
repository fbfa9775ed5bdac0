//! Walk a short loop, then print the way back.
//!
//! ```text
//! RUST_LOG=debug cargo run --example return_path --features tracing
//! ```

use getback_gps::format::{Locale, format_angle, format_dist, format_speed};
use getback_gps::{CardinalDirection, Coordinate, Coordinates, Latitude, Longitude};
use tracing_subscriber::EnvFilter;

/// Screen space: y grows downwards, one pixel per 10 m.
fn to_screen(c: &Coordinate) -> Coordinate {
    let polar = c.polar_coordinate();
    Coordinate::from_polar(polar.radius / 10.0, -polar.angle).unwrap_or_default()
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let locale = Locale::from_env();

    let start_lat = Latitude::new(51.0543)?;
    let start_lon = Longitude::new(3.7174)?;
    println!("start: {start_lat}, {start_lon}");

    // offsets from the start, in meters (x east, y north)
    let mut walk: Coordinates = [(0, 0), (400, 150), (820, 610), (500, 1200)]
        .into_iter()
        .map(|(x, y)| Coordinate::from_cartesian(x, y))
        .collect();
    walk.set_close_line(false);

    let here = walk.to_array().last().copied().unwrap_or_default();
    let heading = CardinalDirection::from_bearing(90.0 - here.polar_angle() + 180.0)?;
    println!(
        "home is {} away, heading {} ({})",
        format_dist(here.polar_radius(), &locale),
        format_angle(heading.value(), &locale),
        heading.segment(),
    );
    println!("walking pace: {}", format_speed(1.4, &locale));

    walk.set_coordinate_converter(to_screen);
    for (i, line) in walk.lines().iter().enumerate() {
        println!("segment {i}: {:?} -> {:?}", line.start, line.end);
    }

    Ok(())
}
