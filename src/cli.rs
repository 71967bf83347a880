//! Command-line argument parsing for the preview renderer.

use clap::Parser;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Waveshade")]
#[command(about = "Procedural shading preview renderer", long_about = None)]
pub struct Args {
    /// Preview mode: cloud (default), water, light
    #[arg(long, value_name = "MODE", default_value = "cloud")]
    pub mode: String,

    /// Output image size in pixels (square)
    #[arg(long, value_name = "PIXELS", default_value = "512")]
    pub size: u32,

    /// Scene time in seconds
    #[arg(long, value_name = "SECONDS", default_value = "0")]
    pub time: f64,

    /// Output PNG path
    #[arg(long, value_name = "PATH", default_value = "preview.png")]
    pub output: String,
}

/// What the preview renderer draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewMode {
    /// Grayscale cloud density map over the XZ plane.
    Cloud,
    /// Water surface height (red) and normal XZ tilt (green/blue).
    Water,
    /// Full shading pipeline over a sun/daylight parameter ramp.
    Light,
}

impl Args {
    /// Parse the preview mode from command-line arguments
    pub fn parse_mode(&self) -> PreviewMode {
        match self.mode.to_lowercase().as_str() {
            "cloud" => {
                println!("Mode: Cloud density map");
                PreviewMode::Cloud
            }
            "water" => {
                println!("Mode: Water surface map");
                PreviewMode::Water
            }
            "light" => {
                println!("Mode: Lighting ramp");
                PreviewMode::Light
            }
            other => {
                eprintln!("Warning: Unknown preview mode '{}', using cloud", other);
                PreviewMode::Cloud
            }
        }
    }
}
