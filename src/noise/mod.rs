//! Procedural noise: hash fields, lattice noise and fractal summation.
//!
//! Dependency order within the module: the trigonometric hash in [`hash`] is
//! the foundation, [`perlin`] interpolates hash samples over a lattice,
//! [`simplex`] is an independent skewed-lattice gradient noise, and [`fbm`]
//! sums simplex octaves with an early-exit bound remap.
//!
//! All functions take wide (`f64`) inputs. Positions fed in here are often
//! derived from the world position plus minutes of accumulated time, and
//! narrow floats produce visible stepping artifacts long before the host's
//! 3600 s time wraparound.

mod hash;
mod perlin;
mod simplex;

pub mod fbm;

pub use hash::{random_1, random_2};
pub use perlin::{perlin_noise_1, perlin_noise_2};
pub use simplex::{simplex_noise_2, simplex_noise_3, simplex_noise_4};
