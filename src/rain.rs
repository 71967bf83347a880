//! Rain effects: terrain wetness and ground ripples.

use glam::{DVec3, Vec3};

use crate::math::{mix, sanitize_time, smoothstep};
use crate::noise::simplex_noise_3;

/// Wetness of the terrain in [0, 1], from the clear weather level and the
/// terrain-dependent sunlight level.
///
/// Terrain that the sky cannot reach does not get wet, hence the sunlight
/// gate. The border sits below the cast-shadow border so ground near walls
/// still collects water.
pub fn wetness(clear_weather: f32, sun_level: f32) -> f32 {
    const BORDER: f32 = 0.80;
    const BLUR: f32 = 0.06;

    (1.0 - clear_weather) * smoothstep(BORDER - BLUR, BORDER + BLUR, sun_level)
}

/// Light reflected by rain ripples on the ground.
///
/// `camera_dist` is the relative distance in [0, 1] the host provides. The
/// effect is subtle and invisible on far terrain, so the noise evaluation
/// is skipped entirely past a small distance threshold; inside it the
/// ripple intensity fades out toward the threshold.
pub fn ripples(
    incoming_light: Vec3,
    world_pos: DVec3,
    camera_dist: f32,
    time: f64,
    normal: DVec3,
) -> Vec3 {
    const DIST_THRESHOLD: f32 = 0.1;
    const DIST_FADE_START: f32 = DIST_THRESHOLD * 0.8;
    const AMOUNT: f32 = 0.1;

    if camera_dist >= DIST_THRESHOLD {
        return Vec3::ZERO;
    }

    // Ripples only show on upward-facing surfaces.
    let cos_theta = normal.y.max(0.0) as f32;

    let time = sanitize_time(time);
    let resolution = DVec3::new(0.16, 0.16, 0.5);
    let st = DVec3::new(world_pos.x, world_pos.z, time) / resolution;

    let noise = simplex_noise_3(st) as f32;
    // Shift, threshold and scale so only the crests remain.
    let ripples = smoothstep(0.3, 1.0, (noise + 0.8) * 0.5);

    incoming_light
        * mix(0.2, 1.0, cos_theta)
        * ripples
        * AMOUNT
        * (1.0 - smoothstep(DIST_FADE_START, DIST_THRESHOLD, camera_dist))
}
