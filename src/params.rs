//! Shading parameter definitions with documented semantics.
//!
//! All tunable magic numbers of the pipeline are extracted here with:
//! - Documented ranges and meanings
//! - Default values matching the intended look
//! - A validation pass catching non-physical combinations

/// Noise source driving the torch light flicker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlickerSource {
    /// Cheap 1-D value noise over time only. All flames in the scene pulse
    /// in unison.
    Hash,

    /// 4-D simplex noise over world position and time. Nearby flames
    /// decorrelate, at roughly 15x the cost of [`FlickerSource::Hash`].
    Simplex,
}

/// HDR-to-LDR tone mapping operator applied at the end of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneMapOperator {
    /// Uncharted 2 filmic curve, normalized at the configured white level.
    Uncharted2,

    /// ACES filmic approximation. Slightly more saturated shoulders; has
    /// no white-level parameter.
    AcesFilmic,
}

/// Fog density curve shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FogCurve {
    /// Plain linear ramp between near and far. Cheapest.
    Linear,

    /// Exponential transmittance, calibrated to 3% residual at far.
    Exponential,

    /// Squared-exponential transmittance, calibrated to 1.5% residual at
    /// far. Gentler onset, sharper tail.
    ExponentialSquared,
}

/// Top-level shading configuration
#[derive(Debug, Clone)]
pub struct ShadingConfig {
    /// Torch flicker noise source, or None to keep flames steady
    pub torch_flicker: Option<FlickerSource>,

    /// Tone mapping operator for final HDR compression
    pub tone_map: ToneMapOperator,

    /// Exposure bias fed to the tone mapper (dimensionless, > 0)
    /// Raises or lowers the whole image before compression
    pub exposure_bias: f32,

    /// HDR value that maps to pure white (Uncharted 2 only, > 0)
    pub white_level: f32,

    /// Over-exposure divisor for the HDR exposure blend (> 0)
    pub over_exposure: f32,

    /// Under-exposure multiplier for the HDR exposure blend (> 0)
    pub under_exposure: f32,

    /// Final contrast, [0, 2]: 0 flat gray, 1 identity, 2 high contrast
    pub contrast: f32,

    /// Fog density curve
    pub fog_curve: FogCurve,

    /// Opacity of a water body viewed top-down, [0, 1]
    pub water_base_opacity: f32,

    /// fBM octaves for cloud density, >= 1; higher is slower and more
    /// detailed
    pub cloud_octaves: u32,

    /// Lower edge of the cloud density remap, [0, 1)
    pub cloud_lower: f64,

    /// Upper edge of the cloud density remap, (lower, 1]
    pub cloud_upper: f64,
}

impl Default for ShadingConfig {
    fn default() -> Self {
        Self {
            torch_flicker: Some(FlickerSource::Simplex),
            tone_map: ToneMapOperator::Uncharted2,
            exposure_bias: 2.0,
            white_level: 11.2,
            over_exposure: 1.3,
            under_exposure: 0.5,
            contrast: 1.1, // Slightly punchier than the vanilla look
            fog_curve: FogCurve::ExponentialSquared,
            water_base_opacity: 0.1,
            cloud_octaves: 6,
            cloud_lower: 0.5,
            cloud_upper: 1.0,
        }
    }
}

impl ShadingConfig {
    /// Validate the configuration (positive exposure, ordered cloud remap
    /// edges, etc.)
    pub fn validate(&self) -> Result<(), String> {
        if !(self.exposure_bias > 0.0) {
            return Err(format!(
                "Exposure bias must be > 0, got {}",
                self.exposure_bias
            ));
        }
        if !(self.white_level > 0.0) {
            return Err(format!("White level must be > 0, got {}", self.white_level));
        }
        if !(self.over_exposure > 0.0) || !(self.under_exposure > 0.0) {
            return Err(format!(
                "Exposure blend factors must be > 0, got ({}, {})",
                self.over_exposure, self.under_exposure
            ));
        }
        if !(0.0..=2.0).contains(&self.contrast) {
            return Err(format!("Contrast must be in [0, 2], got {}", self.contrast));
        }
        if !(0.0..=1.0).contains(&self.water_base_opacity) {
            return Err(format!(
                "Water base opacity must be in [0, 1], got {}",
                self.water_base_opacity
            ));
        }
        if self.cloud_octaves == 0 {
            return Err("Cloud octaves must be >= 1".to_string());
        }
        if !(self.cloud_lower >= 0.0 && self.cloud_lower < self.cloud_upper && self.cloud_upper <= 1.0)
        {
            return Err(format!(
                "Cloud remap edges must satisfy 0 <= lower < upper <= 1, got ({}, {})",
                self.cloud_lower, self.cloud_upper
            ));
        }
        Ok(())
    }
}
