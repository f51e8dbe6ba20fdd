//! Trait interfaces shared between crates.
//!
//! - [`TargetCurve`] - per-level target populations (magnitude-decay implements)

/// Target population per tier level.
///
/// Targets shrink geometrically with level: the population at `level` is
/// the verified population divided by `dropoff()` raised to `level`.
pub trait TargetCurve {
    /// Decay base between consecutive levels. Always at least 2.0 for the
    /// production curve.
    fn dropoff(&self) -> f64;

    /// Desired population at `level` given the verified population,
    /// floored to a whole member count.
    ///
    /// Returns 0 when `dropoff()^level` overflows.
    fn target(&self, verified: u64, level: u32) -> u64 {
        let divisor = self.dropoff().powf(f64::from(level));
        // `as` saturates and maps NaN to 0; an infinite divisor yields 0.
        floor_div(verified as f64, divisor) as u64
    }
}

/// Floor of the exact quotient `a / b` for non-negative operands.
///
/// Plain `(a / b).floor()` can round a quotient just below an integer up to
/// that integer; subtracting the remainder first keeps the result exact.
pub fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let div = (a - rem) / b;
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}
