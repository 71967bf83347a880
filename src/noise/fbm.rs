//! Fractal Brownian motion: octave summation over 2D simplex noise.

use glam::DVec2;

use super::simplex::simplex_noise_2;
use crate::math::smoothstep_wide;

/// fBM over 2D simplex noise remapped through `smoothstep(lower, upper, sum)`.
///
/// Accumulates `amplitude * (simplex(st) * 0.5 + 0.5)` for `octaves` rounds,
/// starting at amplitude 0.5, halving the amplitude and doubling the
/// frequency each round.
///
/// The loop exits early when the outcome of the remap is already decided:
/// once the running sum reaches `upper` the remaining octaves cannot lower
/// it (the per-octave term is non-negative), and once `sum + amplitude <=
/// lower` the geometric tail of the remaining amplitudes cannot lift it past
/// `lower`. This is purely a performance optimization; the result equals the
/// full-sum remap within floating tolerance.
///
/// Requires `lower < upper`.
pub fn fbm_bounded(octaves: u32, lower: f64, upper: f64, st: DVec2) -> f64 {
    let mut st = st;
    let mut value = 0.0;
    let mut amplitude = 0.5;

    for _ in 0..octaves {
        value += amplitude * (simplex_noise_2(st) * 0.5 + 0.5);

        if value >= upper {
            // Remaining octaves can only raise the sum further.
            break;
        } else if value + amplitude <= lower {
            // Remaining amplitudes sum to less than the current one.
            break;
        }

        st *= 2.0;
        amplitude *= 0.5;
    }

    smoothstep_wide(lower, upper, value)
}

/// fBM with the identity remap, i.e. bounds (0, 1).
///
/// Output is in [0, 1]: the raw octave sum is bounded by the geometric
/// amplitude series, and the remap clamps the residual gradient-noise
/// overshoot.
pub fn fbm(octaves: u32, st: DVec2) -> f64 {
    fbm_bounded(octaves, 0.0, 1.0, st)
}
