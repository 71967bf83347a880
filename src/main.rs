//! Waveshade preview renderer.
//!
//! Renders the library's procedural fields to PNG maps so the shading
//! pipeline can be inspected without a host engine: cloud density over the
//! XZ plane, water surface displacement, and the full lighting/tone ramp.

mod cli;

use clap::Parser;
use glam::{DVec3, Vec3, Vec4};
use image::{Rgb, RgbImage};

use waveshade::cloud::cloud_density;
use waveshade::fog::FogControl;
use waveshade::params::ShadingConfig;
use waveshade::pipeline::{shade_fragment, Fragment};
use waveshade::water::water_wave_geometric;

use cli::{Args, PreviewMode};

/// World-space extent of the cloud and water preview maps, in blocks.
const WORLD_EXTENT: f64 = 64.0;

fn to_srgb_byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Grayscale cloud density over the XZ plane at cloud height.
fn render_cloud(size: u32, time: f64, config: &ShadingConfig) -> RgbImage {
    RgbImage::from_fn(size, size, |px, pz| {
        let x = px as f64 / size as f64 * WORLD_EXTENT;
        let z = pz as f64 / size as f64 * WORLD_EXTENT;
        let density = cloud_density(
            config.cloud_octaves,
            config.cloud_lower,
            config.cloud_upper,
            time,
            DVec3::new(x, 128.0, z),
        ) as f32;
        let v = to_srgb_byte(density);
        Rgb([v, v, v])
    })
}

/// Water surface: displaced height in red, normal tilt in green/blue.
fn render_water(size: u32, time: f64) -> RgbImage {
    RgbImage::from_fn(size, size, |px, pz| {
        let x = px as f64 / size as f64 * WORLD_EXTENT;
        let z = pz as f64 / size as f64 * WORLD_EXTENT;
        let surf = water_wave_geometric(DVec3::new(x, 0.0, z), time);

        // Total geometric amplitude is 0.23 blocks; remap height to [0, 1].
        let height = (surf.position.y / 0.23 * 0.5 + 0.5) as f32;
        let nx = (surf.normal.x * 0.5 + 0.5) as f32;
        let nz = (surf.normal.z * 0.5 + 0.5) as f32;
        Rgb([to_srgb_byte(height), to_srgb_byte(nx), to_srgb_byte(nz)])
    })
}

/// Shading ramp: sunlight level left to right, daylight bottom to top, over
/// a fixed gray pigment.
fn render_light(size: u32, time: f64, config: &ShadingConfig) -> RgbImage {
    // Render-distance fog, far enough out not to tint the ramp.
    let fog_control = FogControl { near: 0.65, far: 1.0 };
    let span = (size.saturating_sub(1)).max(1) as f32;

    RgbImage::from_fn(size, size, |px, py| {
        let sun_level = px as f32 / span;
        let daylight = 1.0 - py as f32 / span;

        let frag = Fragment {
            base_color: Vec4::new(0.5, 0.5, 0.5, 1.0),
            vertex_color: Vec3::ONE,
            world_pos: DVec3::new(8.0, 64.8, -4.0),
            view_pos: DVec3::new(0.0, 68.0, 0.0),
            camera_dist: 0.05,
            normal: DVec3::Y,
            torch_level: 0.0,
            sun_level,
            daylight,
            fog_color: Vec4::new(0.75, 0.8, 0.9, 1.0),
            fog_control,
            time,
        };
        let out = shade_fragment(&frag, config);
        Rgb([to_srgb_byte(out.x), to_srgb_byte(out.y), to_srgb_byte(out.z)])
    })
}

fn main() {
    let args = Args::parse();
    let mode = args.parse_mode();

    if args.size == 0 {
        eprintln!("Size must be at least 1 pixel");
        std::process::exit(1);
    }

    let config = ShadingConfig::default();
    if let Err(e) = config.validate() {
        eprintln!("Invalid shading configuration: {}", e);
        std::process::exit(1);
    }

    println!(
        "Rendering {}x{} preview at t = {}s...",
        args.size, args.size, args.time
    );

    let img = match mode {
        PreviewMode::Cloud => render_cloud(args.size, args.time, &config),
        PreviewMode::Water => render_water(args.size, args.time),
        PreviewMode::Light => render_light(args.size, args.time, &config),
    };

    match img.save(&args.output) {
        Ok(()) => println!("Wrote {}", args.output),
        Err(e) => {
            eprintln!("Failed to write {}: {}", args.output, e);
            std::process::exit(1);
        }
    }
}
