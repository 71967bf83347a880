//! Gerstner wave superposition for the water surface.
//!
//! The geometric pass displaces a base plane and accumulates the analytic
//! surface normal at the same time; a separate micro-wave pass perturbs an
//! existing normal with much shorter wavelengths for per-fragment detail.
//!
//! The wave function for a set of waves i is:
//!
//! ```text
//!              [ x + Σ(Q_i A_i D_i.x cos(w_i D_i · (x, z) + φ_i t)) ]
//! P(x, z, t) = | z + Σ(Q_i A_i D_i.y cos(w_i D_i · (x, z) + φ_i t)) |
//!              [     Σ(    A_i       sin(w_i D_i · (x, z) + φ_i t)) ]
//! ```
//!
//! with frequency `w_i = sqrt(g * 2π / L_i)` (deep-water dispersion) and
//! phase constant `φ_i = S_i * 2 / L_i`.

use glam::{DVec2, DVec3};

use crate::math::sanitize_time;

/// Gravitational constant times 2π, the numerator of the deep-water
/// dispersion relation.
const DISPERSION_FACTOR: f64 = 9.80665 * 2.0 * std::f64::consts::PI;

/// A single Gerstner wave component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveSpec {
    /// Steepness budget in [0, 1]. The effective per-wave steepness is
    /// `Q / (w_i * A_i * num_waves)` so the crests never self-intersect no
    /// matter how many waves are stacked.
    pub steepness: f64,
    /// Crest amplitude in world units.
    pub amplitude: f64,
    /// Horizontal travel direction, unit length.
    pub direction: DVec2,
    /// Crest-to-crest wavelength in world units.
    pub wavelength: f64,
    /// Phase speed parameter (enters as `speed * 2 / wavelength`).
    pub speed: f64,
}

/// Result of the geometric wave pass: a displaced position and the unit
/// surface normal at that point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceDisplacement {
    pub position: DVec3,
    pub normal: DVec3,
}

/// Direction vector for an angle in degrees, unit length.
pub fn deg2dir(deg: f64) -> DVec2 {
    let rad = deg.to_radians();
    DVec2::new(rad.cos(), rad.sin())
}

const Q: f64 = 0.45;

// Long geometric swells, displacing vertices. Directions are the unit
// vectors for 90, 260, 70 and 200 degrees.
const GEOMETRIC_WAVES: [WaveSpec; 4] = [
    WaveSpec { steepness: Q, amplitude: 0.08, direction: DVec2::new(0.0, 1.0), wavelength: 16.0, speed: 7.0 },
    WaveSpec { steepness: Q, amplitude: 0.08, direction: DVec2::new(-0.17364817766693041, -0.984807753012208), wavelength: 15.0, speed: 8.0 },
    WaveSpec { steepness: Q, amplitude: 0.05, direction: DVec2::new(0.34202014332566877, 0.93969262078590832), wavelength: 8.0, speed: 13.0 },
    WaveSpec { steepness: Q, amplitude: 0.02, direction: DVec2::new(-0.93969262078590832, -0.34202014332566877), wavelength: 7.0, speed: 14.0 },
];

// Short ripples, perturbing the interpolated normal only; 85, 255 and 65
// degrees.
const NORMAL_WAVES: [WaveSpec; 3] = [
    WaveSpec { steepness: Q, amplitude: 0.0058, direction: DVec2::new(0.08715574274765817, 0.99619469809174553), wavelength: 0.75, speed: 1.0 },
    WaveSpec { steepness: Q, amplitude: 0.0058, direction: DVec2::new(-0.25881904510252074, -0.96592582628906829), wavelength: 0.725, speed: 2.0 },
    WaveSpec { steepness: Q, amplitude: 0.0045, direction: DVec2::new(0.42261826174069944, 0.90630778703664994), wavelength: 0.7, speed: 2.0 },
];

/// Apply one wave to a position and its accumulating (unnormalized) normal.
fn gerstner_wave(
    wave: &WaveSpec,
    num_waves: f64,
    time: f64,
    pos: &mut DVec3,
    normal: &mut DVec3,
) {
    let wi = (DISPERSION_FACTOR / wave.wavelength).sqrt();
    let qi = wave.steepness / (wi * wave.amplitude * num_waves);
    let phi = wave.speed * 2.0 / wave.wavelength;

    let theta = wi * wave.direction.dot(DVec2::new(pos.x, pos.z)) + phi * time;
    let cos_theta = theta.cos();
    let sin_theta = theta.sin();

    let horizontal = wave.direction * qi * wave.amplitude * cos_theta;
    pos.x += horizontal.x;
    pos.z += horizontal.y;
    pos.y += wave.amplitude * sin_theta;

    let wi_ai = wi * wave.amplitude;
    normal.x -= wi_ai * wave.direction.x * cos_theta;
    normal.z -= wi_ai * wave.direction.y * cos_theta;
    normal.y -= wi_ai * qi * sin_theta;
}

/// Like [`gerstner_wave`] but only accumulates the normal. The sampling
/// position stays fixed so waves can be evaluated per fragment.
fn gerstner_wave_normal(wave: &WaveSpec, num_waves: f64, time: f64, pos: DVec3, normal: &mut DVec3) {
    let wi = (DISPERSION_FACTOR / wave.wavelength).sqrt();
    let qi = wave.steepness / (wi * wave.amplitude * num_waves);
    let phi = wave.speed * 2.0 / wave.wavelength;

    let theta = wi * wave.direction.dot(DVec2::new(pos.x, pos.z)) + phi * time;
    let wi_ai = wi * wave.amplitude;

    normal.x -= wi_ai * wave.direction.x * theta.cos();
    normal.z -= wi_ai * wave.direction.y * theta.cos();
    normal.y -= wi_ai * qi * theta.sin();
}

/// Displace a point on the base water plane with the geometric wave set and
/// return its new position along with the unit surface normal.
pub fn water_wave_geometric(world_pos: DVec3, time: f64) -> SurfaceDisplacement {
    let time = sanitize_time(time);
    let num_waves = GEOMETRIC_WAVES.len() as f64;

    let mut pos = world_pos;
    // The accumulator's y axis is the "up" component before normalization.
    let mut normal = DVec3::new(0.0, 1.0, 0.0);
    for wave in &GEOMETRIC_WAVES {
        gerstner_wave(wave, num_waves, time, &mut pos, &mut normal);
    }

    SurfaceDisplacement {
        position: pos,
        normal: normal.normalize(),
    }
}

/// Perturb an interpolated surface normal with the micro-wave set and
/// return the unit result.
pub fn water_wave_normal(world_pos: DVec3, time: f64, base_normal: DVec3) -> DVec3 {
    let time = sanitize_time(time);
    let num_waves = NORMAL_WAVES.len() as f64;

    let mut normal = base_normal;
    for wave in &NORMAL_WAVES {
        gerstner_wave_normal(wave, num_waves, time, world_pos, &mut normal);
    }

    normal.normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deg2dir_is_unit() {
        for deg in [0.0, 70.0, 90.0, 200.0, 260.0, 345.0] {
            assert!((deg2dir(deg).length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_wave_directions_match_their_angles() {
        let angles = [90.0, 260.0, 70.0, 200.0];
        for (wave, deg) in GEOMETRIC_WAVES.iter().zip(angles) {
            assert!((wave.direction - deg2dir(deg)).length() < 1e-12);
        }
        let angles = [85.0, 255.0, 65.0];
        for (wave, deg) in NORMAL_WAVES.iter().zip(angles) {
            assert!((wave.direction - deg2dir(deg)).length() < 1e-12);
        }
    }

    #[test]
    fn test_geometric_normal_is_unit() {
        for i in 0..64 {
            let pos = DVec3::new(i as f64 * 1.7, 62.8, i as f64 * -0.9);
            let time = i as f64 * 0.37;
            let surf = water_wave_geometric(pos, time);
            assert!((surf.normal.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_perturbed_normal_is_unit() {
        for i in 0..64 {
            let pos = DVec3::new(i as f64 * 0.3, 62.8, 100.0 - i as f64);
            let n = water_wave_normal(pos, i as f64 * 0.11, DVec3::Y);
            assert!((n.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_displacement_bounded_by_amplitude_sum() {
        let max_height: f64 = GEOMETRIC_WAVES.iter().map(|w| w.amplitude).sum();
        for i in 0..256 {
            let pos = DVec3::new(i as f64 * 2.3, 0.0, i as f64 * -1.1);
            let surf = water_wave_geometric(pos, i as f64 * 0.21);
            assert!(surf.position.y.abs() <= max_height + 1e-9);
        }
    }

    #[test]
    fn test_surface_moves_over_time() {
        let pos = DVec3::new(12.0, 0.0, -7.0);
        let a = water_wave_geometric(pos, 0.0);
        let b = water_wave_geometric(pos, 1.5);
        assert_ne!(a.position, b.position);
        assert_ne!(a.normal, b.normal);
    }

    #[test]
    fn test_non_finite_time_treated_as_zero() {
        let pos = DVec3::new(3.0, 0.0, 4.0);
        assert_eq!(water_wave_geometric(pos, f64::NAN), water_wave_geometric(pos, 0.0));
        assert_eq!(
            water_wave_normal(pos, f64::INFINITY, DVec3::Y),
            water_wave_normal(pos, 0.0, DVec3::Y)
        );
    }

    #[test]
    fn test_normal_mostly_points_up() {
        // Steepness budgeting keeps the surface from folding over.
        for i in 0..256 {
            let pos = DVec3::new(i as f64 * 0.9, 0.0, i as f64 * 1.3);
            let surf = water_wave_geometric(pos, i as f64 * 0.05);
            assert!(surf.normal.y > 0.0);
        }
    }
}
