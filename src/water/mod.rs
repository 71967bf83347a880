//! Water surface: Gerstner wave animation plus specular shading.
//!
//! The geometric pass runs per vertex on the base water plane; the normal
//! pass and the specular/opacity computation run per fragment.

mod gerstner;
mod surface;

pub use gerstner::{
    deg2dir, water_wave_geometric, water_wave_normal, SurfaceDisplacement, WaveSpec,
};
pub use surface::water_specular_light;
