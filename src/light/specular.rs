//! Blinn-Phong specular highlights with a Schlick Fresnel term.

use glam::{DVec3, Vec3};

/// Assumed directional light position. The host engine does not expose the
/// actual sun/moon direction, so a fixed direction is used for highlights;
/// this is normalize(-2.5, 2.5, 0).
pub const ASSUMED_LIGHT_DIR: DVec3 =
    DVec3::new(-std::f64::consts::FRAC_1_SQRT_2, std::f64::consts::FRAC_1_SQRT_2, 0.0);

/// Schlick approximation of the angle-dependent reflectance.
///
/// `f0` is the reflectance at normal incidence (0.02 for an air/water
/// interface); `cosine` is the cosine of the relevant angle, expected
/// non-negative.
#[inline]
pub fn schlick_fresnel(f0: f32, cosine: f32) -> f32 {
    f0 + (1.0 - f0) * (1.0 - cosine).powi(5)
}

/// View-dependent angles shared by the specular and opacity computations.
#[derive(Debug, Clone, Copy)]
pub struct SpecularGeometry {
    /// Cosine of the angle between the view vector and the half vector.
    pub incident: f32,
    /// Cosine of the angle between the half vector and the surface normal.
    pub refl_angle: f32,
    /// Cosine of the angle between the surface normal and the view vector.
    pub view_angle: f32,
}

/// Compute the Blinn-Phong half-vector geometry for a fragment.
///
/// Degenerate input (view position equal to world position) yields all-zero
/// cosines rather than NaN, which downstream treats as "no highlight".
pub fn specular_geometry(world_pos: DVec3, view_pos: DVec3, normal: DVec3) -> SpecularGeometry {
    let view_dir = -(world_pos - view_pos).normalize_or_zero();
    let half_dir = (view_dir + ASSUMED_LIGHT_DIR).normalize_or_zero();

    SpecularGeometry {
        incident: view_dir.dot(half_dir).max(0.0) as f32,
        refl_angle: half_dir.dot(normal).max(0.0) as f32,
        view_angle: normal.dot(view_dir).max(0.0) as f32,
    }
}

/// Specular highlight for an opaque (terrain) fragment.
///
/// The Schlick coefficient blends how much of the incoming light reflects
/// directionally; the directional ratio keeps ambient-dominated fragments
/// from sprouting highlights they could not physically have.
pub fn specular_light(
    shininess: f32,
    fresnel_f0: f32,
    incoming_dir_light: Vec3,
    incoming_undir_light: Vec3,
    world_pos: DVec3,
    view_pos: DVec3,
    normal: DVec3,
) -> Vec3 {
    let incoming = incoming_dir_light + incoming_undir_light;
    let dir_ratio = incoming_dir_light / (incoming + Vec3::splat(0.001));

    let geom = specular_geometry(world_pos, view_pos, normal);
    let refl_coeff = schlick_fresnel(fresnel_f0, geom.incident);
    let spec_coeff = geom.refl_angle.powf(shininess) * refl_coeff;

    incoming * spec_coeff * dir_ratio
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schlick_endpoints() {
        // Normal incidence reflects f0, grazing incidence reflects fully.
        assert!((schlick_fresnel(0.02, 1.0) - 0.02).abs() < 1e-6);
        assert!((schlick_fresnel(0.02, 0.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_assumed_light_dir_is_unit() {
        assert!((ASSUMED_LIGHT_DIR.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_view_produces_no_highlight() {
        let pos = DVec3::new(1.0, 2.0, 3.0);
        let spec = specular_light(
            80.0,
            0.02,
            Vec3::splat(1.0),
            Vec3::splat(0.2),
            pos,
            pos,
            DVec3::Y,
        );
        assert!(spec.is_finite());
        assert!(spec.max_element() < 1e-6);
    }

    #[test]
    fn test_specular_finite_and_non_negative() {
        let world = DVec3::new(10.0, 0.0, 4.0);
        let view = DVec3::new(0.0, 3.0, 0.0);
        for i in 0..50 {
            let t = i as f64 / 50.0 * std::f64::consts::TAU;
            let normal = DVec3::new(t.cos() * 0.2, 1.0, t.sin() * 0.2).normalize();
            let spec = specular_light(
                80.0,
                0.02,
                Vec3::new(1.0, 0.9, 0.8),
                Vec3::splat(0.1),
                world,
                view,
                normal,
            );
            assert!(spec.is_finite());
            assert!(spec.min_element() >= 0.0);
        }
    }
}
