//! Waveshade library - Procedural shading math for terrain, sky and water
//!
//! A collection of small, pure numerical functions invoked once per vertex
//! or once per rendered pixel by a host rendering pipeline: hash and lattice
//! noise, fractal summation, cloud density, fog curves, composited lighting,
//! Gerstner-wave water geometry, and color grading.
//!
//! Every function here is stateless and total: identical inputs always yield
//! identical outputs, and malformed (non-finite) external time values are
//! substituted with safe defaults instead of propagating.

pub mod classify;
pub mod cloud;
pub mod color;
pub mod fog;
pub mod light;
pub mod math;
pub mod noise;
pub mod params;
pub mod pipeline;
pub mod rain;
pub mod water;
