//! Cloud density field: world position + time mapped through fBM.

use glam::{DVec2, DVec3};

use crate::math::sanitize_time;
use crate::noise::fbm;

/// Resolution divisor projecting the world x/z plane onto noise space.
const RESOLUTION: DVec2 = DVec2::new(1.4, 1.4);

/// Cloud drift speed divisor. Chosen as an exact power of two so the phase
/// `time / 512` loses no precision as the session time accumulates.
const DRIFT_DIVISOR: f64 = 512.0;

/// Sampling scale. Throws away some of the noise precision on purpose so the
/// resulting field is somewhat sparse.
const SPARSENESS: f64 = 3.0;

/// Compute a cloud density in [0, 1] for a world position at a given time.
///
/// The world x/z coordinates are projected onto a 2D plane, drifted along
/// the v axis over time, and fed to bounded fBM. A non-finite `time` (a
/// known host defect) is treated as 0.
pub fn cloud_density(octaves: u32, lower: f64, upper: f64, time: f64, world_pos: DVec3) -> f64 {
    let time = sanitize_time(time);

    let mut st = DVec2::new(world_pos.x, world_pos.z) / RESOLUTION;
    st.y += time / DRIFT_DIVISOR;

    fbm::fbm_bounded(octaves, lower, upper, st * SPARSENESS)
}
