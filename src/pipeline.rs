//! Fragment compositing: light accumulation, weather, fog and tone mapping
//! in one pure entry point per fragment kind.

use glam::{DVec3, Vec3, Vec4};

use crate::classify::{clear_weather, occlusion_factor};
use crate::color::{aces_tone_map, contrast_filter, hdr_exposure, uncharted2_tone_map};
use crate::fog::{exponential_fog, exponential_squared_fog, linear_fog, FogControl};
use crate::light::{
    ambient_light, moonlight, skylight, specular_light, sunlight, torch_light,
};
use crate::params::{FogCurve, ShadingConfig, ToneMapOperator};
use crate::rain::{ripples, wetness};
use crate::water::{water_specular_light, water_wave_normal};

/// One shading invocation's worth of inputs, as the host hands them over.
///
/// `camera_dist` is the host's relative fog distance in [0, 1]; world and
/// view positions are absolute world-space coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Fragment {
    /// Base (texture) color of the fragment, straight alpha.
    pub base_color: Vec4,
    /// Per-vertex color, carrying the ambient occlusion encoding.
    pub vertex_color: Vec3,
    pub world_pos: DVec3,
    pub view_pos: DVec3,
    /// Relative distance from the camera in [0, 1].
    pub camera_dist: f32,
    /// Unit surface normal.
    pub normal: DVec3,
    /// Torch light level in [0, 1] from the host's light map.
    pub torch_level: f32,
    /// Terrain-dependent sunlight level in [0, 1].
    pub sun_level: f32,
    /// Time-dependent daylight level in [0, 1].
    pub daylight: f32,
    /// Host fog color; alpha encodes how much fog applies at all.
    pub fog_color: Vec4,
    /// Relative fog near/far control pair.
    pub fog_control: FogControl,
    /// Scene time in seconds.
    pub time: f64,
}

/// Sum of the directional light sources hitting a fragment.
fn directional_light(frag: &Fragment) -> Vec3 {
    sunlight(frag.sun_level, frag.daylight).rgb() + moonlight(frag.sun_level, frag.daylight).rgb()
}

/// Sum of the undirectional light sources hitting a fragment.
fn undirectional_light(frag: &Fragment, config: &ShadingConfig) -> Vec3 {
    ambient_light(frag.fog_color).rgb()
        + skylight(frag.sun_level, frag.daylight).rgb()
        + torch_light(
            frag.torch_level,
            frag.sun_level,
            frag.daylight,
            frag.time,
            frag.world_pos,
            config.torch_flicker,
        )
        .rgb()
}

/// Fog density at this fragment per the configured curve.
fn fog_density(config: &ShadingConfig, control: FogControl, dist: f32) -> f32 {
    match config.fog_curve {
        FogCurve::Linear => linear_fog(control, dist),
        FogCurve::Exponential => exponential_fog(control, dist),
        FogCurve::ExponentialSquared => exponential_squared_fog(control, dist),
    }
}

/// HDR exposure blend plus the configured tone map operator and contrast.
fn finish(frag: Vec3, config: &ShadingConfig) -> Vec3 {
    let exposed = hdr_exposure(frag, config.over_exposure, config.under_exposure);
    let mapped = match config.tone_map {
        ToneMapOperator::Uncharted2 => {
            uncharted2_tone_map(exposed, config.white_level, config.exposure_bias)
        }
        ToneMapOperator::AcesFilmic => aces_tone_map(exposed * config.exposure_bias),
    };
    contrast_filter(mapped, config.contrast)
}

/// Shade an opaque terrain fragment. Returns the final LDR color with the
/// base alpha passed through.
pub fn shade_fragment(frag: &Fragment, config: &ShadingConfig) -> Vec4 {
    let dir_light = directional_light(frag);
    let undir_light = undirectional_light(frag, config);

    let occlusion = occlusion_factor(frag.vertex_color);
    let pigment = frag.base_color.truncate() * frag.vertex_color;
    let mut lit = pigment * (dir_light * occlusion + undir_light);

    // Rain: wet ground darkens and reflects passing ripples.
    let clear = clear_weather(frag.fog_control);
    let wet = wetness(clear, frag.sun_level);
    if wet > 0.0 {
        lit *= 1.0 - 0.3 * wet;
        lit += ripples(
            dir_light + undir_light,
            frag.world_pos,
            frag.camera_dist,
            frag.time,
            frag.normal,
        ) * wet;
        lit += specular_light(
            2.0,
            0.04,
            dir_light,
            undir_light,
            frag.world_pos,
            frag.view_pos,
            frag.normal,
        ) * wet;
    }

    let shaded = finish(lit, config);
    let density = fog_density(config, frag.fog_control, frag.camera_dist) * frag.fog_color.w;
    shaded
        .lerp(frag.fog_color.truncate(), density)
        .extend(frag.base_color.w)
}

/// Shade a water fragment: micro-wave normal perturbation, then specular
/// light with view-dependent opacity, then the shared fog and tone pass.
///
/// The returned alpha is absolute, replacing the base alpha.
pub fn shade_water_fragment(frag: &Fragment, config: &ShadingConfig) -> Vec4 {
    let dir_light = directional_light(frag);
    let undir_light = undirectional_light(frag, config);

    let normal = water_wave_normal(frag.world_pos, frag.time, frag.normal);
    let pigment = frag.base_color.truncate() * frag.vertex_color;
    let lit = pigment * (dir_light + undir_light);

    let surface = water_specular_light(
        config.water_base_opacity,
        dir_light,
        undir_light,
        frag.world_pos,
        frag.view_pos,
        frag.time,
        normal,
    );

    let shaded = finish(lit + surface.truncate(), config);
    let density = fog_density(config, frag.fog_control, frag.camera_dist) * frag.fog_color.w;
    let rgb = shaded.lerp(frag.fog_color.truncate(), density);

    // Fully fogged water is as opaque as the fog itself.
    let alpha = surface.w + (1.0 - surface.w) * density;
    rgb.extend(alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn daylight_fragment() -> Fragment {
        Fragment {
            base_color: Vec4::new(0.45, 0.55, 0.35, 1.0),
            vertex_color: Vec3::ONE,
            world_pos: DVec3::new(12.0, 64.8, -7.0),
            view_pos: DVec3::new(0.0, 68.0, 0.0),
            camera_dist: 0.05,
            normal: DVec3::Y,
            torch_level: 0.0,
            sun_level: 1.0,
            daylight: 1.0,
            fog_color: Vec4::new(0.75, 0.8, 0.9, 1.0),
            fog_control: FogControl::new(0.65, 1.0).unwrap(),
            time: 12.5,
        }
    }

    #[test]
    fn test_output_is_ldr() {
        let config = ShadingConfig::default();
        let mut frag = daylight_fragment();
        for i in 0..50 {
            frag.sun_level = (i % 11) as f32 / 10.0;
            frag.daylight = (i % 7) as f32 / 6.0;
            frag.torch_level = (i % 5) as f32 / 4.0;
            let out = shade_fragment(&frag, &config);
            assert!(out.is_finite());
            assert!(out.min_element() >= 0.0 && out.truncate().max_element() <= 1.0);
        }
    }

    #[test]
    fn test_fog_takes_over_at_distance() {
        let config = ShadingConfig::default();
        let mut frag = daylight_fragment();
        frag.camera_dist = 1.0;
        let out = shade_fragment(&frag, &config);
        let fog = frag.fog_color.truncate();
        // The squared-exponential curve leaves 1.5% residual at far.
        assert!((out.truncate() - fog).abs().max_element() < 0.05);
    }

    #[test]
    fn test_no_fog_when_alpha_zero() {
        let config = ShadingConfig::default();
        let mut near = daylight_fragment();
        near.fog_color.w = 0.0;
        near.camera_dist = 0.05;
        let mut far = near;
        far.camera_dist = 1.0;
        // With fog disabled, distance alone must not recolor the fragment.
        assert_eq!(shade_fragment(&near, &config).truncate(), shade_fragment(&far, &config).truncate());
    }

    #[test]
    fn test_night_is_darker_than_day() {
        let config = ShadingConfig::default();
        let day = daylight_fragment();
        let mut night = day;
        night.daylight = 0.0;
        let day_out = shade_fragment(&day, &config);
        let night_out = shade_fragment(&night, &config);
        assert!(night_out.truncate().length() < day_out.truncate().length());
    }

    #[test]
    fn test_torch_brightens_dark_fragment() {
        let config = ShadingConfig::default();
        let mut dark = daylight_fragment();
        dark.sun_level = 0.2;
        dark.daylight = 0.0;
        let mut lit = dark;
        lit.torch_level = 1.0;
        let dark_out = shade_fragment(&dark, &config);
        let lit_out = shade_fragment(&lit, &config);
        assert!(lit_out.truncate().length() > dark_out.truncate().length());
    }

    #[test]
    fn test_base_alpha_passes_through_terrain() {
        let config = ShadingConfig::default();
        let mut frag = daylight_fragment();
        frag.base_color.w = 0.37;
        assert_eq!(shade_fragment(&frag, &config).w, 0.37);
    }

    #[test]
    fn test_occluded_vertex_darkens_directional_light() {
        let config = ShadingConfig::default();
        let open = daylight_fragment();
        let mut occluded = open;
        occluded.vertex_color = Vec3::splat(0.35);
        let open_out = shade_fragment(&open, &config);
        let occ_out = shade_fragment(&occluded, &config);
        assert!(occ_out.truncate().length() < open_out.truncate().length());
    }

    #[test]
    fn test_water_alpha_in_unit_range() {
        let config = ShadingConfig::default();
        let mut frag = daylight_fragment();
        frag.base_color = Vec4::new(0.1, 0.3, 0.7, 0.6);
        for i in 0..50 {
            frag.view_pos = DVec3::new(i as f64 * 4.0, 2.0 + i as f64, 0.0);
            frag.camera_dist = i as f32 / 50.0;
            let out = shade_water_fragment(&frag, &config);
            assert!(out.is_finite());
            assert!(out.w >= 0.0 && out.w <= 1.0 + 1e-6);
        }
    }

    #[test]
    fn test_water_turns_opaque_in_full_fog() {
        let config = ShadingConfig::default();
        let mut frag = daylight_fragment();
        frag.base_color = Vec4::new(0.1, 0.3, 0.7, 0.6);
        frag.camera_dist = 1.0;
        let out = shade_water_fragment(&frag, &config);
        assert!(out.w > 0.9);
    }

    #[test]
    fn test_rain_darkens_open_ground() {
        let config = ShadingConfig::default();
        let clear = daylight_fragment();
        let mut rainy = clear;
        rainy.fog_control = FogControl::new(0.1, 0.7).unwrap();
        let clear_out = shade_fragment(&clear, &config);
        let rainy_out = shade_fragment(&rainy, &config);
        // The red channel has the widest margin between the 30% wet
        // darkening and the ripple highlight it can gain back.
        assert!(rainy_out.x < clear_out.x);
    }
}
