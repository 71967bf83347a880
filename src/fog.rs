//! Fog density curves calibrated from a near/far control pair.

/// Near/far fog control in world distance units.
///
/// The host supplies this pair per frame; density transitions from 0 toward
/// 1 between `near` and `far`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FogControl {
    pub near: f32,
    pub far: f32,
}

impl FogControl {
    /// Create a fog control, validating `near < far`.
    pub fn new(near: f32, far: f32) -> Result<Self, String> {
        if !near.is_finite() || !far.is_finite() {
            return Err(format!("Fog control must be finite, got ({}, {})", near, far));
        }
        if near >= far {
            return Err(format!(
                "Fog near must be less than far, got ({}, {})",
                near, far
            ));
        }
        Ok(Self { near, far })
    }

    fn span(&self) -> f32 {
        self.far - self.near
    }
}

/// Residual transmittance the exponential curve reaches exactly at `far`.
const EXP_RESIDUAL: f32 = 0.03;

/// Residual transmittance the squared-exponential curve reaches at `far`.
const EXP_SQUARED_RESIDUAL: f32 = 0.015;

/// Linear fog density in [0, 1]. This matches what the vanilla pipeline
/// does and is the cheapest of the three curves.
pub fn linear_fog(control: FogControl, dist: f32) -> f32 {
    ((dist - control.near) / control.span()).clamp(0.0, 1.0)
}

/// Exponential fog density in [0, 1].
///
/// The density base is derived analytically so the transmittance
/// `exp(-(base * (dist - near)))` is exactly [`EXP_RESIDUAL`] at `far`:
///
/// ```text
/// exp(-(span * base)) <= r
/// span * base >= ln(1/r)
/// base = ln(1/r) / span
/// ```
///
/// This calibration is the defining property of the curve, not an arbitrary
/// constant.
pub fn exponential_fog(control: FogControl, dist: f32) -> f32 {
    let base = (1.0 / EXP_RESIDUAL).ln() / control.span();
    let dist = (dist - control.near).max(0.0);

    let transmittance = (-(dist * base)).exp().clamp(0.0, 1.0);
    1.0 - transmittance
}

/// Exponential-squared fog density in [0, 1].
///
/// Same analytic calibration as [`exponential_fog`] with the exponent
/// squared, so `base = sqrt(ln(1/r)) / span` and the transmittance is
/// [`EXP_SQUARED_RESIDUAL`] exactly at `far`. Produces a gentler onset and a
/// sharper tail than the plain exponential.
pub fn exponential_squared_fog(control: FogControl, dist: f32) -> f32 {
    let base = (1.0 / EXP_SQUARED_RESIDUAL).ln().sqrt() / control.span();
    let dist = (dist - control.near).max(0.0);

    let transmittance = (-(dist * base).powi(2)).exp().clamp(0.0, 1.0);
    1.0 - transmittance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_rejects_inverted_pair() {
        assert!(FogControl::new(100.0, 10.0).is_err());
        assert!(FogControl::new(10.0, 10.0).is_err());
        assert!(FogControl::new(f32::NAN, 10.0).is_err());
        assert!(FogControl::new(10.0, 100.0).is_ok());
    }

    #[test]
    fn test_linear_fog_endpoints() {
        for &(near, far) in &[(10.0, 100.0), (0.0, 1.0), (128.0, 512.0)] {
            let control = FogControl::new(near, far).unwrap();
            assert_eq!(linear_fog(control, near), 0.0);
            assert_eq!(linear_fog(control, far), 1.0);
        }
    }

    #[test]
    fn test_linear_fog_midpoint() {
        let control = FogControl::new(10.0, 100.0).unwrap();
        assert_eq!(linear_fog(control, 55.0), 0.5);
    }

    #[test]
    fn test_linear_fog_clamps_outside_range() {
        let control = FogControl::new(10.0, 100.0).unwrap();
        assert_eq!(linear_fog(control, 0.0), 0.0);
        assert_eq!(linear_fog(control, 1000.0), 1.0);
    }

    #[test]
    fn test_exponential_fog_calibration_at_far() {
        for &(near, far) in &[(10.0, 100.0), (0.0, 250.0), (32.0, 48.0)] {
            let control = FogControl::new(near, far).unwrap();
            let density = exponential_fog(control, far);
            assert!(
                (density - (1.0 - EXP_RESIDUAL)).abs() < 1e-4,
                "({}, {}): density at far = {}",
                near,
                far,
                density
            );
        }
    }

    #[test]
    fn test_exponential_squared_fog_calibration_at_far() {
        for &(near, far) in &[(10.0, 100.0), (0.0, 250.0), (32.0, 48.0)] {
            let control = FogControl::new(near, far).unwrap();
            let density = exponential_squared_fog(control, far);
            assert!(
                (density - (1.0 - EXP_SQUARED_RESIDUAL)).abs() < 1e-4,
                "({}, {}): density at far = {}",
                near,
                far,
                density
            );
        }
    }

    #[test]
    fn test_fog_density_zero_before_near() {
        let control = FogControl::new(50.0, 200.0).unwrap();
        assert_eq!(exponential_fog(control, 10.0), 0.0);
        assert_eq!(exponential_squared_fog(control, 10.0), 0.0);
    }

    #[test]
    fn test_fog_density_monotonic() {
        let control = FogControl::new(10.0, 100.0).unwrap();
        let mut prev = (0.0, 0.0, 0.0);
        for i in 0..=150 {
            let dist = i as f32;
            let next = (
                linear_fog(control, dist),
                exponential_fog(control, dist),
                exponential_squared_fog(control, dist),
            );
            assert!(next.0 >= prev.0 && next.1 >= prev.1 && next.2 >= prev.2);
            prev = next;
        }
    }
}
