//! Linegen Terminal Demo - Spinning procedural wireframes
//!
//! Controls:
//!   - WASD / Arrow Keys: Nudge X/Y rotation
//!   - E/R: Nudge Z rotation
//!   - 1-5: Cube, Pyramid, Cylinder, RectColumn, Sphere
//!   - +/-: More or fewer segments
//!   - Space: Pause
//!   - Q/ESC: Quit

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use linegen_core::{DepthCamera, LineGenConfig, ShapeKind};
use linegen_terminal::TerminalApp;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, ValueEnum)]
enum ShapeArg {
    Cube,
    Pyramid,
    Cylinder,
    RectColumn,
    Sphere,
}

impl From<ShapeArg> for ShapeKind {
    fn from(shape: ShapeArg) -> Self {
        match shape {
            ShapeArg::Cube => ShapeKind::Cube,
            ShapeArg::Pyramid => ShapeKind::Pyramid,
            ShapeArg::Cylinder => ShapeKind::Cylinder,
            ShapeArg::RectColumn => ShapeKind::RectColumn,
            ShapeArg::Sphere => ShapeKind::Sphere,
        }
    }
}

/// Render rotating procedural wireframes in the terminal
#[derive(Parser)]
#[command(name = "linegen-terminal")]
#[command(version)]
struct Cli {
    /// JSON configuration file; command line options override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Shape to draw
    #[arg(long, value_enum)]
    shape: Option<ShapeArg>,

    /// Uniform shape size
    #[arg(long)]
    size: Option<f32>,

    /// Tessellation resolution
    #[arg(long, allow_negative_numbers = true)]
    segments: Option<i32>,

    /// Rotation speed around X in degrees per second
    #[arg(long, allow_negative_numbers = true)]
    speed_x: Option<f32>,

    /// Rotation speed around Y in degrees per second
    #[arg(long, allow_negative_numbers = true)]
    speed_y: Option<f32>,

    /// Rotation speed around Z in degrees per second
    #[arg(long, allow_negative_numbers = true)]
    speed_z: Option<f32>,

    /// Camera focal length
    #[arg(long, default_value = "5.0")]
    focal_length: f32,

    /// Camera distance from the origin
    #[arg(long, default_value = "5.0")]
    distance: f32,

    /// Ignore depth and draw with a constant scale
    #[arg(long)]
    orthographic: bool,

    /// Frame rate cap
    #[arg(long, default_value = "30")]
    fps: u32,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn load_config(&self) -> Result<LineGenConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                LineGenConfig::from_json(&text)
                    .with_context(|| format!("failed to parse config {}", path.display()))?
            }
            None => LineGenConfig::default(),
        };

        if let Some(shape) = self.shape {
            config.shape = shape.into();
        }
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(segments) = self.segments {
            config.segments = segments;
        }
        for (axis, speed) in [self.speed_x, self.speed_y, self.speed_z].into_iter().enumerate() {
            if let Some(speed) = speed {
                config.rotation_speed[axis] = speed;
            }
        }

        Ok(config)
    }

    fn camera(&self) -> DepthCamera {
        if self.orthographic {
            DepthCamera::orthographic(1.0)
        } else {
            DepthCamera::new(self.focal_length, self.distance)
        }
    }
}

fn init_tracing(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_file.as_deref())?;

    let config = cli.load_config()?;
    let mut app = TerminalApp::new(config, cli.camera(), cli.fps)?;
    app.run()
}
