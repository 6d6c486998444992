/// Affine remap of `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// Values outside the input range are not clamped and land outside the
/// output range. A zero-width input range yields NaN or an infinity.
#[must_use]
pub fn linear_map(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}
