//! Shared angle and rounding arithmetic.
//!
//! Every component that wraps an angle or rounds a number for display goes
//! through these two functions, so bearing classification, polar storage and
//! the formatters can never disagree about where 360° wraps or how a `.5`
//! rounds.

/// Degrees in a full turn.
pub const FULL_TURN: f64 = 360.0;

/// Degrees in a half turn.
pub const HALF_TURN: f64 = 180.0;

/// Map any angle in degrees into `[0, 360)`.
///
/// Uses a euclidean modulo, so negative input wraps the right way:
/// `-315 → 45`, `-720 → 0`, `765 → 45`, `360 → 0`.
///
/// Non-finite input is returned unchanged (NaN stays NaN).
#[inline]
pub fn normalize_angle(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(FULL_TURN);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if wrapped >= FULL_TURN { 0.0 } else { wrapped }
}

/// Round `value` to `decimals` fractional digits, half away from zero.
///
/// For the non-negative magnitudes the formatters deal with this is plain
/// half-up rounding: `7.48 → 7.5`, `45.674 → 45.67`.
#[inline]
pub fn round_half_up(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}
