use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use prism_core::SceneDescription;
use prism_renderer::RenderConfig;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
///
/// Values given here override the ones in the scene file.
#[derive(Debug, Parser)]
#[command(name = "prism")]
#[command(about = "A recursive ray tracer for JSON scene descriptions")]
pub struct Args {
    /// Scene description (JSON)
    pub scene: PathBuf,

    /// Output image; the format follows the extension (.png, .ppm, ...)
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Anti-aliasing multiplier (m x m samples per pixel)
    #[arg(long)]
    pub aa: Option<u32>,

    /// Maximum recursion depth
    #[arg(long, default_value_t = 10)]
    pub max_depth: u32,

    /// Rays per glossy hit
    #[arg(long, default_value_t = 80)]
    pub glossy_samples: u32,

    /// Seed for glossy sampling
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Apply command-line overrides to a loaded scene.
    pub fn apply_overrides(&self, description: &mut SceneDescription) {
        if let Some(width) = self.width {
            description.width = width;
        }
        if let Some(height) = self.height {
            description.height = height;
        }
        if let Some(aa) = self.aa {
            description.options.aa_multiplier = aa;
        }
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            max_depth: self.max_depth,
            glossy_samples: self.glossy_samples,
            seed: self.seed,
        }
    }
}
