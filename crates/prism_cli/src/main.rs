//! Prism - render a JSON scene description to an image file.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use prism_core::load_scene;
use prism_renderer::{render, ImageBuffer, Scene};

mod cli;
mod logger;
mod output;

use cli::Args;
use logger::init_logger;
use output::save_image;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    info!("Starting Prism");
    run(&args)
}

/// Load, render and save according to the command line.
fn run(args: &Args) -> Result<()> {
    let mut description = load_scene(&args.scene)
        .with_context(|| format!("Failed to load scene {}", args.scene.display()))?;
    args.apply_overrides(&mut description);

    let scene = Scene::from_description(&description)
        .with_context(|| format!("Invalid scene '{}'", description.name))?;

    let config = args.render_config();
    let mut image = ImageBuffer::new(description.width, description.height);
    render(&scene, &config, &mut image);

    save_image(&image, &args.output)
}
