//! The heart curve and its fixed evaluation grid.
//!
//! Everything in this module is a pure function over `f64`s: the curve
//! itself, the x-coordinate grid it is sampled on, and the phase schedule
//! that drives the animation. No GUI types appear here, so the whole
//! module can be exercised directly from integration tests.

/// Number of x-coordinates the curve is sampled at.
pub const GRID_POINTS: usize = 1000;

/// Plot bounds on the x axis.
pub const X_MIN: f64 = -5.0;
pub const X_MAX: f64 = 5.0;

/// Plot bounds on the y axis.
pub const Y_MIN: f64 = -1.5;
pub const Y_MAX: f64 = 2.0;

/// Number of phase values in one sweep direction.
pub const PHASE_STEPS: usize = 100;

/// Largest phase value reached at the turning point of a sweep.
pub const PHASE_MAX: f64 = 10.0;

/// Evaluate the heart curve at `x` for animation phase `a`:
///
/// ```text
/// y(x, a) = 0.6 * cbrt(x²) + 0.5 * sqrt(max(5 - x², 0)) * sin(2π·a·x)
/// ```
///
/// The square-root argument is clamped at zero so the function stays
/// finite for |x| > √5. Total over all finite inputs; at `a = 0` the
/// sine term vanishes and only the cube-root ridge remains.
pub fn heart_curve(x: f64, a: f64) -> f64 {
    let term1 = 0.6 * (x * x).cbrt();
    let term2 = 0.5 * (5.0 - x * x).max(0.0).sqrt() * (2.0 * std::f64::consts::PI * a * x).sin();
    term1 + term2
}

/// The fixed sample grid: [`GRID_POINTS`] evenly spaced x-coordinates
/// from [`X_MIN`] to [`X_MAX`], endpoints included.
pub fn sample_grid() -> Vec<f64> {
    linspace(X_MIN, X_MAX, GRID_POINTS)
}

/// The phase schedule: [`PHASE_STEPS`] values rising 0 → [`PHASE_MAX`],
/// followed by the same values reversed. One pass through the schedule
/// is one forward-then-backward animation cycle; the driver wraps the
/// index so the cycle repeats indefinitely.
pub fn phase_schedule() -> Vec<f64> {
    let forward = linspace(0.0, PHASE_MAX, PHASE_STEPS);
    let mut schedule = forward.clone();
    schedule.extend(forward.iter().rev());
    schedule
}

fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    // Scale by i/(n-1) rather than accumulating a step so both endpoints
    // are hit exactly.
    let span = end - start;
    (0..n)
        .map(|i| start + span * (i as f64 / (n - 1) as f64))
        .collect()
}
