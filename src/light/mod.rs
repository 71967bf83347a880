//! Per-source light contributions and their compositing rules.
//!
//! Every light source is computed independently as a color/intensity pair
//! and summed additively onto the fragment. None of the sources clamps its
//! own output to [0, 1]: intermediate accumulation is HDR by design, and
//! the final compression is the tone mapper's job (see [`crate::color`]).

mod shadow;
mod specular;

pub use shadow::{shadow_attenuation, SHADOW_BLUR, SHADOW_BORDER};
pub use specular::{
    schlick_fresnel, specular_geometry, specular_light, SpecularGeometry, ASSUMED_LIGHT_DIR,
};

use glam::{DVec3, DVec4, Vec3, Vec4};

use crate::color::brighten;
use crate::math::{mix, sanitize_time, smoothstep};
use crate::noise::{perlin_noise_1, simplex_noise_4};
use crate::params::FlickerSource;

/// A single light source's output: a color and a non-negative intensity.
///
/// Contributions are combined by addition; the summed result may exceed 1.0
/// per channel before tone mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightContribution {
    pub color: Vec3,
    pub intensity: f32,
}

impl LightContribution {
    pub const ZERO: Self = Self {
        color: Vec3::ZERO,
        intensity: 0.0,
    };

    /// The effective radiance of this contribution.
    #[inline]
    pub fn rgb(&self) -> Vec3 {
        self.color * self.intensity
    }
}

// Sun: warm sunset tint blending toward a near-white daylight color.
const SUNSET_COLOR: Vec3 = Vec3::new(0.7, 0.3, 0.0);
const DAYLIGHT_COLOR: Vec3 = Vec3::new(1.0, 0.9, 0.8);
/// Fraction of sunlight leaking into shadowed areas via inter-reflection.
const SUN_SHADOW_LEAK: f32 = 0.01;

// Sky: blue-ish white, ambient-like (no shadow term: occlusion is already
// folded into the sun level the host samples from its light map).
const SKY_COLOR: Vec3 = Vec3::new(0.8, 0.8, 1.0);
const SKY_LEVEL: f32 = 0.07;

// Moon: blue-ish white with a larger shadow leak than the sun.
const MOON_COLOR: Vec3 = Vec3::new(0.5, 0.8, 0.95);
const MOON_LEVEL: f32 = 0.7;
const MOON_SHADOW_LEAK: f32 = 0.1;

// Torch: fixed warm color with a sharp near-source falloff.
const TORCH_COLOR: Vec3 = Vec3::new(1.0, 0.66, 0.28);
const TORCH_DECAY: i32 = 5;
const TORCH_BASE_INTENSITY: f32 = 1.0;
/// Torches become irrelevant in bright areas; ambient sun/daylight squashes
/// their intensity down to this fraction.
const TORCH_SUNLIGHT_CUTOFF: f32 = 0.1;

const AMBIENT_INTENSITY: f32 = 0.1;

/// Ambient light derived from the fog color.
///
/// The fog color is white-balanced with [`brighten`] so an arbitrary fog
/// tint becomes a plausible ambient light color; with no fog (alpha 0) the
/// ambient is plain white.
pub fn ambient_light(fog_color: Vec4) -> LightContribution {
    LightContribution {
        color: Vec3::ONE.lerp(brighten(fog_color.truncate()), fog_color.w),
        intensity: AMBIENT_INTENSITY,
    }
}

/// Sunlight contribution.
///
/// The color blends from a yellow-red sunset tint toward the daylight color
/// as `daylight` rises past ~0.45. The intensity scales with both the
/// terrain-dependent `sun_level` and the time-dependent `daylight`, and is
/// attenuated by the near-binary shadow multiplier.
pub fn sunlight(sun_level: f32, daylight: f32) -> LightContribution {
    let color = SUNSET_COLOR.lerp(DAYLIGHT_COLOR, smoothstep(0.4, 0.5, daylight));
    let intensity = sun_level * daylight * shadow_attenuation(sun_level, SUN_SHADOW_LEAK);
    LightContribution { color, intensity }
}

/// Skylight contribution: constant blue-white, no shadow attenuation.
pub fn skylight(sun_level: f32, daylight: f32) -> LightContribution {
    LightContribution {
        color: SKY_COLOR,
        intensity: sun_level * daylight * SKY_LEVEL,
    }
}

/// Moonlight contribution: rises as daylight falls, with the same shadow
/// border as the sun but a larger residual leak.
pub fn moonlight(sun_level: f32, daylight: f32) -> LightContribution {
    LightContribution {
        color: MOON_COLOR,
        intensity: sun_level
            * (1.0 - daylight)
            * MOON_LEVEL
            * shadow_attenuation(sun_level, MOON_SHADOW_LEAK),
    }
}

/// Torch light flicker factor in [-1, 1] scaled by the flicker amplitude.
///
/// The hash source is solely time-driven, which makes every flame in the
/// scene pulse in lock-step; the simplex source slices 4D noise by world
/// position as well so nearby torches decorrelate.
fn torch_flicker(time: f64, world_pos: DVec3, source: FlickerSource) -> f32 {
    const AMPLITUDE: f32 = 0.2;

    let time = sanitize_time(time);
    let factor = match source {
        FlickerSource::Hash => {
            let flicker = perlin_noise_1(time * 3.0).clamp(0.0, 1.0);
            (flicker * 2.0 - 1.0) as f32
        }
        FlickerSource::Simplex => {
            let st = DVec4::new(
                world_pos.x * 0.5,
                world_pos.y * 0.5,
                world_pos.z * 0.5,
                time * 3.0,
            );
            simplex_noise_4(st).clamp(-1.0, 1.0) as f32
        }
    };
    factor * AMPLITUDE
}

/// Torch light contribution.
///
/// The intensity is `torch_level^5`, a sharp near-source falloff, reduced
/// when ambient sun/daylight is high and optionally modulated by a flicker
/// factor. Exactly zero when `torch_level` is zero.
pub fn torch_light(
    torch_level: f32,
    sun_level: f32,
    daylight: f32,
    time: f64,
    world_pos: DVec3,
    flicker: Option<FlickerSource>,
) -> LightContribution {
    if torch_level <= 0.0 {
        return LightContribution::ZERO;
    }

    let mut intensity = torch_level.powi(TORCH_DECAY) * TORCH_BASE_INTENSITY;
    intensity *= mix(
        1.0,
        TORCH_SUNLIGHT_CUTOFF,
        smoothstep(0.65, 0.875, sun_level * daylight),
    );
    if let Some(source) = flicker {
        intensity *= torch_flicker(time, world_pos, source) + 1.3;
    }

    LightContribution {
        color: TORCH_COLOR,
        intensity,
    }
}
