/// Rounds half-way cases toward positive infinity (`floor(x + 0.5)`).
///
/// Out-of-range values saturate at the `i32` bounds and NaN maps to zero.
pub(crate) fn round_half_up(x: f64) -> i32 {
    (x + 0.5).floor() as i32
}

/// Scales an integer span by a fraction, rounding to the nearest pixel.
pub(crate) fn scale_span(fraction: f32, span: i32) -> i32 {
    round_half_up(f64::from(fraction) * f64::from(span))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
