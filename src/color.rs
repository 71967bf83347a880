//! Color grading: RGB/HSV conversion, desaturation, contrast, HDR exposure
//! and tone mapping.
//!
//! Colors here are linear RGB in narrow (`f32`) precision; intermediate
//! light accumulation may exceed 1.0 (HDR) and is only compressed back into
//! [0, 1] by the tone-mapping operators at the end of the pipeline.

use glam::{Vec3, Vec4};

/// Perceptual luma weights for linear RGB.
const LUMA_WEIGHTS: Vec3 = Vec3::new(0.22, 0.707, 0.071);

/// Floor-based fractional part (GLSL semantics).
#[inline]
fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Luma of a linear RGB color.
#[inline]
pub fn rgb_to_luma(color: Vec3) -> f32 {
    color.dot(LUMA_WEIGHTS)
}

/// Desaturate a linear RGB color by mixing toward its luma.
///
/// `degree` is in [0, 1]: 0 keeps the color, 1 is completely gray. The
/// result is usually multiplied by the ambient light color afterwards,
/// otherwise the image gains energy it should not have.
pub fn desaturate(color: Vec3, degree: f32) -> Vec3 {
    let luma = rgb_to_luma(color);
    color.lerp(Vec3::splat(luma), degree)
}

/// Convert linear RGB to HSV. Branch-free four-way swizzle construction;
/// hue is in revolving [0, 1] units.
///
/// Zero-saturation (gray) input is handled without division by zero via a
/// small epsilon in both divisors.
pub fn rgb_to_hsv(c: Vec3) -> Vec3 {
    const K_X: f32 = 0.0;
    const K_Y: f32 = -1.0 / 3.0;
    const K_Z: f32 = 2.0 / 3.0;
    const K_W: f32 = -1.0;
    const E: f32 = 1.0e-10;

    let p = if c.y < c.z {
        Vec4::new(c.z, c.y, K_W, K_Z)
    } else {
        Vec4::new(c.y, c.z, K_X, K_Y)
    };
    let q = if c.x < p.x {
        Vec4::new(p.x, p.y, p.w, c.x)
    } else {
        Vec4::new(c.x, p.y, p.z, p.x)
    };

    let d = q.x - q.w.min(q.y);
    Vec3::new(
        (q.z + (q.w - q.y) / (6.0 * d + E)).abs(),
        d / (q.x + E),
        q.x,
    )
}

/// Convert HSV back to linear RGB.
pub fn hsv_to_rgb(c: Vec3) -> Vec3 {
    const K_X: f32 = 1.0;
    const K_Y: f32 = 2.0 / 3.0;
    const K_Z: f32 = 1.0 / 3.0;
    const K_W: f32 = 3.0;

    let p = (Vec3::new(
        fract(c.x + K_X),
        fract(c.x + K_Y),
        fract(c.x + K_Z),
    ) * 6.0
        - Vec3::splat(K_W))
    .abs();

    Vec3::splat(K_X)
        .lerp((p - Vec3::splat(K_X)).clamp(Vec3::ZERO, Vec3::ONE), c.y)
        * c.z
}

/// White-balance a color by adding `1 - max channel` to every channel,
/// pulling the brightest channel to exactly 1.0.
///
/// Used to turn an arbitrary fog color into a plausible ambient light color.
pub fn brighten(color: Vec3) -> Vec3 {
    let rgb_max = color.x.max(color.y).max(color.z);
    color + Vec3::splat(1.0 - rgb_max)
}

/// Contrast filter on an LDR linear RGB color, pivoting at 0.5 and clamped
/// to [0, 1]. `contrast` is in [0, 2] by convention: 0 is flat gray, 1 is
/// the identity, 2 is high contrast.
///
/// Note that this modifies both saturation and luminance; when decreasing
/// contrast the result should be multiplied by the ambient light color.
pub fn contrast_filter(color: Vec3, contrast: f32) -> Vec3 {
    let t = 0.5 - contrast * 0.5;
    (color * contrast + Vec3::splat(t)).clamp(Vec3::ZERO, Vec3::ONE)
}

/// Contrast filter on a scalar LDR luminance. `contrast` is in [0, 2].
pub fn contrast_filter_luma(lum: f32, contrast: f32) -> f32 {
    let t = 0.5 - contrast * 0.5;
    (lum * contrast + t).clamp(0.0, 1.0)
}

// Uncharted 2 filmic curve parameters: shoulder strength, linear strength,
// linear angle, toe strength, toe numerator, toe denominator.
const U2_A: f32 = 0.015;
const U2_B: f32 = 0.50;
const U2_C: f32 = 0.10;
const U2_D: f32 = 0.010;
const U2_E: f32 = 0.02;
const U2_F: f32 = 0.30;

fn uncharted2_curve(x: Vec3) -> Vec3 {
    ((x * (U2_A * x + Vec3::splat(U2_C * U2_B)) + Vec3::splat(U2_D * U2_E))
        / (x * (U2_A * x + Vec3::splat(U2_B)) + Vec3::splat(U2_D * U2_F)))
        - Vec3::splat(U2_E / U2_F)
}

/// Uncharted 2 filmic tone mapping, HDR to LDR.
///
/// The curve is normalized by its own value at `white_level` so that input
/// at the white level maps to exactly 1.0. Every output channel is clamped
/// to [0, 1].
pub fn uncharted2_tone_map(frag: Vec3, white_level: f32, exposure_bias: f32) -> Vec3 {
    let curr = uncharted2_curve(frag * exposure_bias);
    let white_scale = Vec3::ONE / uncharted2_curve(Vec3::splat(white_level));
    (curr * white_scale).clamp(Vec3::ZERO, Vec3::ONE)
}

/// ACES filmic tone mapping, HDR to LDR. A simpler rational curve than
/// [`uncharted2_tone_map`]; output channels are clamped to [0, 1].
pub fn aces_tone_map(x: Vec3) -> Vec3 {
    const A: f32 = 2.51;
    const B: f32 = 0.03;
    const C: f32 = 2.43;
    const D: f32 = 0.59;
    const E: f32 = 0.14;

    ((x * (A * x + Vec3::splat(B))) / (x * (C * x + Vec3::splat(D)) + Vec3::splat(E)))
        .clamp(Vec3::ZERO, Vec3::ONE)
}

/// HDR exposure filter: blends over-, normal- and under-exposed variants of
/// the fragment using the fragment's own channel values as the blend weight.
///
/// This self-referential mix is intentional (bright fragments tend toward
/// the under-exposed variant, dark ones toward the over-exposed variant);
/// it is not a plain exposure scale. The result is HDR and needs tone
/// mapping afterwards.
pub fn hdr_exposure(frag: Vec3, over_exposure: f32, under_exposure: f32) -> Vec3 {
    let over_exposed = frag / over_exposure;
    let under_exposed = frag * under_exposure;

    over_exposed + (under_exposed - over_exposed) * frag
}
