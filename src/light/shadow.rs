//! Shadow attenuation from the terrain-dependent sunlight level.

use crate::math::{mix, smoothstep};

/// Sunlight level at which cast shadows collapse. Terrain fully exposed to
/// the sky samples above this level; anything below is occluded geometry.
pub const SHADOW_BORDER: f32 = 0.870;

/// Width of the blur band around [`SHADOW_BORDER`]. The higher the more
/// blur; the band is kept narrow so shadows read as near-binary.
pub const SHADOW_BLUR: f32 = 0.003;

/// Multiplier collapsing a directional light once `sun_level` drops below
/// the shadow border.
///
/// `residual_leak` is the fraction of light that still arrives inside a
/// shadow via inter-reflection; it differs per source (the moon leaks more
/// than the sun).
pub fn shadow_attenuation(sun_level: f32, residual_leak: f32) -> f32 {
    mix(
        residual_leak,
        1.0,
        smoothstep(SHADOW_BORDER - SHADOW_BLUR, SHADOW_BORDER + SHADOW_BLUR, sun_level),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fully_lit_is_unattenuated() {
        assert_eq!(shadow_attenuation(1.0, 0.01), 1.0);
        assert_eq!(shadow_attenuation(SHADOW_BORDER + SHADOW_BLUR, 0.01), 1.0);
    }

    #[test]
    fn test_occluded_leaves_residual_leak() {
        assert_eq!(shadow_attenuation(0.0, 0.01), 0.01);
        assert_eq!(shadow_attenuation(0.5, 0.1), 0.1);
        assert_eq!(shadow_attenuation(SHADOW_BORDER - SHADOW_BLUR, 0.25), 0.25);
    }

    #[test]
    fn test_transition_is_narrow() {
        // Just outside the blur band the multiplier is already saturated.
        let below = shadow_attenuation(SHADOW_BORDER - 2.0 * SHADOW_BLUR, 0.0);
        let above = shadow_attenuation(SHADOW_BORDER + 2.0 * SHADOW_BLUR, 0.0);
        assert_eq!(below, 0.0);
        assert_eq!(above, 1.0);
    }

    #[test]
    fn test_monotonic_in_sun_level() {
        let mut prev = 0.0;
        for i in 0..=1000 {
            let s = i as f32 / 1000.0;
            let a = shadow_attenuation(s, 0.05);
            assert!(a >= prev);
            prev = a;
        }
    }
}
