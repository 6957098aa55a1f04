//! Interpolation curves for time-driven animations.
//!
//! Only the curve actually used by the page lives here. Inputs are
//! normalised progress values; callers clamp before sampling.

/// Ease-out cubic: fast start, slow finish.
///
/// `t` is normalised progress in `[0, 1]`; values outside that range
/// are clamped so a late frame cannot overshoot the target.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}
