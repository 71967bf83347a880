//! Material and environment classifiers.
//!
//! The host pipeline does not label fragments, so materials are recognized
//! from the signals that do come through: base color, fog color, the fog
//! near/far control pair and vertex position. These are heuristics by
//! nature; the hue bands in particular were tuned against biome-tinted
//! grass and swampland water.

use glam::{Vec3, Vec4};

use crate::fog::FogControl;
use crate::math::{fract, smoothstep};

/// Whether an HSV base color belongs to grass, leaves or plants.
///
/// Seasonal tinting can push foliage toward red, hence the wide hue band.
pub fn is_grass(hsv: Vec3) -> bool {
    let hue = hsv.x * 360.0;
    hsv.y > 0.1 && hue > 12.0 && hue < 149.0
}

/// Whether an HSV base color belongs to water. The band reaches well into
/// green because swampland water is strongly tinted.
pub fn is_water(hsv: Vec3) -> bool {
    let hue = hsv.x * 360.0;
    hsv.y > 0.1 && (149.0..=270.0).contains(&hue)
}

/// Whether a vertex sits on a water plane, judged from the fractional part
/// of its world height. Still water surfaces sit slightly below the block
/// boundary.
pub fn is_water_plane(world_y: f64) -> bool {
    let y = fract(world_y);
    (0.7..=0.9).contains(&y)
}

/// Whether the fog color indicates the Nether: dark and strongly red.
pub fn is_nether_fog(fog_color: Vec4) -> bool {
    fog_color.x > fog_color.z && fog_color.x < 0.5 && fog_color.z < 0.05
}

/// Whether the fog color indicates the End: very dark with green as the
/// weakest channel.
pub fn is_the_end_fog(fog_color: Vec4) -> bool {
    fog_color.x > fog_color.y
        && fog_color.z > fog_color.y
        && fog_color.x < 0.05
        && fog_color.y < 0.05
        && fog_color.z < 0.05
}

/// Whether the current fog is the render-distance fog rather than a
/// weather or biome fog. Only the render-distance fog starts this far out.
pub fn is_render_distance_fog(control: FogControl) -> bool {
    control.near > 0.6
}

/// Degree of clear weather in [0, 1]: 0 when raining, 1 otherwise.
///
/// Rain gradually pulls the relative fog far below 1.0, which is the only
/// rain signal available to the shading stage.
pub fn clear_weather(control: FogControl) -> f32 {
    smoothstep(0.8, 1.0, control.far)
}

/// Ambient occlusion factor in [0, 1] decoded from a vertex color: 0 is
/// fully occluded, 1 is unoccluded.
pub fn occlusion_factor(vertex_color: Vec3) -> f32 {
    const BORDER: f32 = 0.83;
    const BLUR_LO: f32 = 0.05;
    const BLUR_HI: f32 = 0.01;

    // Grass blocks carry a green tint on top of the occlusion encoding.
    let luminance = vertex_color.y * 2.0 - vertex_color.x.min(vertex_color.z);

    smoothstep(BORDER - BLUR_LO, BORDER + BLUR_HI, luminance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb_to_hsv;

    #[test]
    fn test_grass_greens_detected() {
        // Typical plains and jungle grass tints.
        assert!(is_grass(rgb_to_hsv(Vec3::new(0.35, 0.65, 0.25))));
        assert!(is_grass(rgb_to_hsv(Vec3::new(0.55, 0.70, 0.30))));
        // Gray stone has no saturation.
        assert!(!is_grass(rgb_to_hsv(Vec3::splat(0.5))));
        // Blue water is out of the band.
        assert!(!is_grass(rgb_to_hsv(Vec3::new(0.1, 0.3, 0.8))));
    }

    #[test]
    fn test_water_blues_detected() {
        assert!(is_water(rgb_to_hsv(Vec3::new(0.1, 0.3, 0.8))));
        // Swampland water is green-ish but still saturated.
        assert!(is_water(rgb_to_hsv(Vec3::new(0.2, 0.5, 0.5))));
        assert!(!is_water(rgb_to_hsv(Vec3::new(0.35, 0.65, 0.25))));
        assert!(!is_water(rgb_to_hsv(Vec3::splat(0.4))));
    }

    #[test]
    fn test_grass_and_water_bands_disjoint() {
        for i in 0..360 {
            let hsv = Vec3::new(i as f32 / 360.0, 0.6, 0.7);
            assert!(
                !(is_grass(hsv) && is_water(hsv)),
                "hue {} classified as both",
                i
            );
        }
    }

    #[test]
    fn test_water_plane_height_band() {
        assert!(is_water_plane(62.8));
        assert!(is_water_plane(0.75));
        assert!(!is_water_plane(63.0));
        assert!(!is_water_plane(62.5));
        // Floor-based fract keeps negative heights in the same band.
        assert!(is_water_plane(-0.2));
    }

    #[test]
    fn test_nether_fog() {
        assert!(is_nether_fog(Vec4::new(0.3, 0.05, 0.02, 1.0)));
        assert!(!is_nether_fog(Vec4::new(0.7, 0.8, 0.9, 1.0)));
        assert!(!is_nether_fog(Vec4::new(0.02, 0.02, 0.04, 1.0)));
    }

    #[test]
    fn test_the_end_fog() {
        assert!(is_the_end_fog(Vec4::new(0.03, 0.01, 0.04, 1.0)));
        assert!(!is_the_end_fog(Vec4::new(0.3, 0.05, 0.02, 1.0)));
        assert!(!is_the_end_fog(Vec4::new(0.7, 0.8, 0.9, 1.0)));
    }

    #[test]
    fn test_render_distance_fog_threshold() {
        let far_fog = FogControl::new(0.65, 1.0).unwrap();
        let weather_fog = FogControl::new(0.2, 0.8).unwrap();
        assert!(is_render_distance_fog(far_fog));
        assert!(!is_render_distance_fog(weather_fog));
    }

    #[test]
    fn test_clear_weather_from_fog_far() {
        assert_eq!(clear_weather(FogControl::new(0.1, 1.0).unwrap()), 1.0);
        assert_eq!(clear_weather(FogControl::new(0.1, 0.7).unwrap()), 0.0);
        let drizzle = clear_weather(FogControl::new(0.1, 0.9).unwrap());
        assert!(drizzle > 0.0 && drizzle < 1.0);
    }

    #[test]
    fn test_occlusion_factor_endpoints() {
        // Unoccluded vertices carry near-white colors.
        assert_eq!(occlusion_factor(Vec3::ONE), 1.0);
        // Deeply occluded vertices are dark.
        assert_eq!(occlusion_factor(Vec3::splat(0.3)), 0.0);
    }

    #[test]
    fn test_occlusion_tolerates_grass_tint() {
        // A green-tinted but unoccluded grass top should not read as shadow.
        let grass_top = Vec3::new(0.45, 0.75, 0.35);
        assert!(occlusion_factor(grass_top) > 0.99);
    }
}
