//! Perlin-style value noise interpolated over the hash field.

use glam::DVec2;

use super::hash::{random_1, random_2};
use crate::math::fract;

/// Fade curve `f²(3 - 2f)`. Linear interpolation would leave visible creases
/// at lattice boundaries.
#[inline]
fn fade(f: f64) -> f64 {
    f * f * (3.0 - 2.0 * f)
}

/// 1D Perlin noise over the hash field.
///
/// Output is in [0, 1] because the interpolated corner samples are in
/// [0, 1).
pub fn perlin_noise_1(st: f64) -> f64 {
    let i = st.floor();
    let f = fract(st);

    // Two borders of the interval.
    let a = random_1(i);
    let b = random_1(i + 1.0);

    let u = fade(f);

    a + (b - a) * u
}

/// 2D Perlin noise over the hash field.
///
/// Interpolates the four lattice corners surrounding the query point, along
/// x first and then y. Output is in [0, 1].
pub fn perlin_noise_2(st: DVec2) -> f64 {
    let i = st.floor();
    let f = st - i;

    // Four corners of the tile.
    let a = random_2(i);
    let b = random_2(i + DVec2::new(1.0, 0.0));
    let c = random_2(i + DVec2::new(0.0, 1.0));
    let d = random_2(i + DVec2::new(1.0, 1.0));

    let u = DVec2::new(fade(f.x), fade(f.y));

    (a + (b - a) * u.x) + (c - a) * u.y * (1.0 - u.x) + (d - b) * u.x * u.y
}
