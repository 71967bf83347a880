//! Specular highlight and view-dependent opacity of the water surface.

use glam::{DVec3, Vec3, Vec4};

use crate::light::{schlick_fresnel, specular_geometry};
use crate::math::{mix, smoothstep};

/// Reflectance of an air/water interface at normal incidence:
/// `((1.0 - 1.33) / (1.0 + 1.33))^2`.
const WATER_FRESNEL_F0: f32 = 0.02;

/// Blinn-Phong exponent of the water highlight.
const SHININESS: f32 = 80.0;

/// Gain applied to the reflected directional light. The highlight covers a
/// tiny solid angle, so its radiance is far above the incoming level.
const SPECULAR_GAIN: f32 = 180.0;

/// Fraction of the incoming light reflected undirectionally at grazing
/// angles.
const UNDIRECTIONAL_REFLECTANCE: f32 = 0.15;

/// Specular light and opacity of a water fragment.
///
/// Returns the reflected light in `.xyz` and the absolute (not relative)
/// opacity in `.w`. The opacity rises with the Fresnel term between the
/// normal and the view vector: grazing views reflect the environment and
/// read as opaque, top-down views show the `base_opacity` of the water
/// body itself.
pub fn water_specular_light(
    base_opacity: f32,
    incoming_dir_light: Vec3,
    incoming_undir_light: Vec3,
    world_pos: DVec3,
    view_pos: DVec3,
    _time: f64,
    normal: DVec3,
) -> Vec4 {
    let incoming = incoming_dir_light + incoming_undir_light;
    let dir_ratio = incoming_dir_light / (incoming + Vec3::splat(0.001));

    let geom = specular_geometry(world_pos, view_pos, normal);

    let refl_coeff = schlick_fresnel(WATER_FRESNEL_F0, geom.incident);
    let spec_coeff = geom.refl_angle.powf(SHININESS) * refl_coeff;
    let specular = incoming * SPECULAR_GAIN * spec_coeff;

    // Single-pass approximation of depth-dependent opacity: treat the
    // Fresnel reflectance toward the viewer as "how much of the incoming
    // light never enters the water".
    let opac_coeff = schlick_fresnel(WATER_FRESNEL_F0, geom.view_angle);
    let opacity = mix(base_opacity, (base_opacity * 8.0).min(1.0), opac_coeff);

    // Cut off faint highlights so distant water does not sparkle.
    let sharp_opac = smoothstep(0.1, 0.2, opac_coeff);

    let rgb = specular * dir_ratio * sharp_opac
        + incoming * opac_coeff * UNDIRECTIONAL_REFLECTANCE;
    rgb.extend(mix(opacity, 1.0, spec_coeff))
}
