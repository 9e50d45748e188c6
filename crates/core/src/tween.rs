//! Frame-sampled damping toward a target value.
//!
//! The tween holds no hidden state: callers keep `current` and `target` and sample
//! [`damp`] once per frame with the elapsed time.

/// Remaining distance under which a tween snaps onto its target.
pub const SETTLE_EPSILON: f64 = 1e-4;

/// Move `current` toward `target` with exponential damping.
///
/// `smooth_time` is the time constant in seconds: after `smooth_time` has elapsed,
/// roughly 63% of the remaining distance has been covered. A non-positive `dt` leaves
/// `current` unchanged; a non-positive or non-finite `smooth_time` jumps straight to
/// `target`.
#[must_use]
pub fn damp(current: f64, target: f64, smooth_time: f64, dt: f64) -> f64 {
    if dt <= 0.0 || !dt.is_finite() {
        return current;
    }
    if smooth_time <= 0.0 || !smooth_time.is_finite() {
        return target;
    }
    target + (current - target) * (-dt / smooth_time).exp()
}

/// Returns `true` once `current` is close enough to `target` to stop animating.
#[must_use]
pub fn is_settled(current: f64, target: f64) -> bool {
    (target - current).abs() < SETTLE_EPSILON
}

/// One frame of damping that snaps onto the target when it gets close.
#[must_use]
pub fn step(current: f64, target: f64, smooth_time: f64, dt: f64) -> f64 {
    let next = damp(current, target, smooth_time, dt);
    if is_settled(next, target) { target } else { next }
}
