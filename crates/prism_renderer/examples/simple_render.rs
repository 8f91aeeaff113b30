//! Simple ray tracer example.
//!
//! Builds a small scene in code (one of each material on a floor) and saves
//! it in PPM format.

use prism_renderer::{
    color_to_rgb, render, Color, ImageBuffer, Material, Plane, PointLight, RenderConfig, Scene,
    SceneOptions, Sphere, Triangle, Vec3,
};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::sync::Arc;

fn main() {
    println!("Prism Ray Tracer - Simple Example");
    println!("=================================");

    // Build the scene
    let start = std::time::Instant::now();
    let scene = build_scene();
    println!("Scene built in {:?} ({} entities)", start.elapsed(), scene.len());

    let config = RenderConfig {
        glossy_samples: 32,
        ..Default::default()
    };

    let mut image = ImageBuffer::new(640, 480);
    println!(
        "Rendering {}x{} @ {}x{} AA, depth {}...",
        image.width,
        image.height,
        scene.options().aa_multiplier,
        scene.options().aa_multiplier,
        config.max_depth
    );

    // Render
    let start = std::time::Instant::now();
    render(&scene, &config, &mut image);
    println!("Rendered in {:?}", start.elapsed());

    // Save as PPM
    let filename = "output.ppm";
    if let Err(err) = save_ppm(&image, filename) {
        eprintln!("Failed to save {}: {}", filename, err);
        std::process::exit(1);
    }
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let options = SceneOptions::default()
        .with_camera_position(Vec3::new(0.0, 1.0, -2.0))
        .with_camera_rotation(Vec3::X, 8.0)
        .with_aa_multiplier(2);
    let mut scene = Scene::new(options);

    // Floor
    scene.add_entity(Plane::new(
        Vec3::new(0.0, -1.0, 0.0),
        Vec3::Y,
        Arc::new(Material::diffuse(Color::new(0.5, 0.5, 0.5))),
    ));

    // Back wall
    scene.add_entity(Plane::new(
        Vec3::new(0.0, 0.0, 12.0),
        Vec3::NEG_Z,
        Arc::new(Material::diffuse(Color::new(0.3, 0.4, 0.6))),
    ));

    // One sphere per material
    scene.add_entity(Sphere::new(
        Vec3::new(-2.5, 0.0, 6.0),
        1.0,
        Arc::new(Material::diffuse(Color::new(0.8, 0.2, 0.1))),
    ));
    scene.add_entity(Sphere::new(
        Vec3::new(0.0, 0.0, 7.0),
        1.0,
        Arc::new(Material::reflective(Color::ONE)),
    ));
    scene.add_entity(Sphere::new(
        Vec3::new(2.5, 0.0, 6.0),
        1.0,
        Arc::new(Material::glossy(Color::new(0.1, 0.1, 0.0), 40.0, 0.6)),
    ));
    scene.add_entity(Sphere::new(
        Vec3::new(0.8, -0.4, 4.0),
        0.6,
        Arc::new(Material::refractive(Color::ONE, 1.5)),
    ));

    // A triangle leaning against the wall
    scene.add_entity(Triangle::new(
        Vec3::new(-4.0, -1.0, 10.0),
        Vec3::new(-2.5, 2.0, 11.5),
        Vec3::new(-1.0, -1.0, 11.0),
        Arc::new(Material::diffuse(Color::new(0.2, 0.7, 0.3))),
    ));

    scene.add_light(PointLight::white(Vec3::new(0.0, 6.0, 2.0)));
    scene.add_light(PointLight::new(
        Vec3::new(-5.0, 4.0, 0.0),
        Color::new(0.4, 0.4, 0.3),
    ));

    scene
}

fn save_ppm(image: &ImageBuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for y in 0..image.height {
        for x in 0..image.width {
            let rgb = color_to_rgb(image.get(x, y));
            writeln!(writer, "{} {} {}", rgb[0], rgb[1], rgb[2])?;
        }
    }

    Ok(())
}
