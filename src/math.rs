//! Small scalar helpers shared across the shading core.
//!
//! These mirror the GPU built-ins the algorithms were designed around
//! (`fract`, `mix`, `smoothstep`), with the GLSL semantics: `fract` is
//! floor-based (always in [0, 1)), and `smoothstep` clamps before easing.

/// Floor-based fractional part, always in [0, 1) even for negative input.
///
/// Note that `f64::fract` truncates instead, which would return negative
/// values for negative input and break the hash range guarantee.
#[inline]
pub fn fract(x: f64) -> f64 {
    x - x.floor()
}

/// Linear blend between `a` and `b` by `t`.
#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Hermite interpolation between two edges, clamped to [0, 1].
///
/// Requires `edge0 < edge1`.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Wide-precision variant of [`smoothstep`] for time/position-derived
/// quantities.
#[inline]
pub fn smoothstep_wide(edge0: f64, edge1: f64, x: f64) -> f64 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Substitute zero for a non-finite external time value.
///
/// The host is known to occasionally hand us NaN for the global time
/// uniform; every time-dependent entry point routes through this guard.
#[inline]
pub fn sanitize_time(time: f64) -> f64 {
    if time.is_finite() {
        time
    } else {
        0.0
    }
}
