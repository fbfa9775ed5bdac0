//! Human-readable distance, speed and angle strings.
//!
//! All formatters discard the sign of their input, round half-up, and pick
//! their precision from the *rounded* value, so `999.9` m becomes `"1.0km"`
//! and not `"1000m"`.

pub mod defaults;
mod locale;

pub use crate::angle::normalize_angle;
pub use locale::Locale;

use crate::angle::round_half_up;
use defaults::*;

/// Format a distance in meters.
///
/// Below a kilometer the value is shown in whole meters; below ten
/// kilometers with one decimal; above that in whole, grouped kilometers.
///
/// ```
/// use getback_gps::format::{format_dist, Locale};
/// assert_eq!(format_dist(9900.0, &Locale::EN_US), "9.9km");
/// assert_eq!(format_dist(12_345_000.0, &Locale::NL_BE), "12.345km");
/// ```
pub fn format_dist(meters: f64, locale: &Locale) -> String {
    let meters = meters.abs();
    if round_half_up(meters, 0) < METERS_PER_KILOMETER {
        return format_number(meters, 0, locale, true) + UNIT_METER;
    }
    format_small_or_large(meters / METERS_PER_KILOMETER, locale) + UNIT_KILOMETER
}

/// Format a speed given in meters per second as km/h.
pub fn format_speed(meters_per_second: f64, locale: &Locale) -> String {
    let kmh = meters_per_second.abs() * MPS_TO_KMH;
    format_small_or_large(kmh, locale) + UNIT_KMH
}

/// Format an angle with two decimals after wrapping it into `[0, 360)`.
pub fn format_angle(degrees: f64, locale: &Locale) -> String {
    format_number(normalize_angle(degrees), ANGLE_DECIMALS, locale, false) + UNIT_DEGREE
}

fn format_small_or_large(value: f64, locale: &Locale) -> String {
    if round_half_up(value, DISTANCE_DECIMALS_SMALL) < DECIMAL_THRESHOLD {
        format_number(value, DISTANCE_DECIMALS_SMALL, locale, false)
    } else {
        format_number(value, 0, locale, true)
    }
}

/// Render a non-negative `value` with a fixed number of decimals.
///
/// Digits are taken from the half-up rounded value scaled to an integer, so
/// the result never depends on how `{:.N}` breaks ties and has no upper
/// bound short of `f64::MAX`.
fn format_number(value: f64, decimals: u32, locale: &Locale, grouped: bool) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let decimals = decimals as usize;
    // abs() drops the sign of -0.0, which `{:.0}` would print
    let scaled = (value * 10f64.powi(decimals as i32)).round().abs();
    // leading zeros so there is at least one whole digit
    let digits = format!("{scaled:0>width$.0}", width = decimals + 1);
    let (whole, fraction) = digits.split_at(digits.len() - decimals);

    let separator = if grouped { locale.grouping_separator } else { None };
    let mut out = group_digits(whole, separator);
    if decimals > 0 {
        out.push(locale.decimal_separator);
        out.push_str(fraction);
    }
    out
}

/// `"1234567"` → `"1,234,567"` with `Some(',')`.
fn group_digits(digits: &str, separator: Option<char>) -> String {
    let Some(separator) = separator else {
        return digits.to_string();
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
