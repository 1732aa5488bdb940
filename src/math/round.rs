
/// Rounds `x` to `digits` decimal places with ties broken towards the
/// nearest even digit (banker's rounding).
///
/// `f64::round` breaks ties away from zero, so exact half-way values are
/// re-rounded through a halved intermediate: `round(y / 2) * 2` lands on
/// the even neighbour, giving `round_half_even(2.5, 0) == 2.0` and
/// `round_half_even(3.5, 0) == 4.0`.
pub fn round_half_even(x: f64, digits: u32) -> f64 {
    if !x.is_finite() {
        return x;
    }

    // scale * spill ~= 10^digits; a single powi could overflow for very
    // large digit counts, but each half is safe on its own
    let (scale, spill) = if digits > 22 {
        ((10.0_f64).powi((digits - 22) as i32), 1e22)
    } else {
        ((10.0_f64).powi(digits as i32), 1.0)
    };

    let shifted = x * scale * spill;
    let mut nearest = shifted.round();
    if (shifted - nearest).abs() == 0.5 {
        nearest = 2.0 * (shifted / 2.0).round();
    }

    (nearest / spill) / scale
}
