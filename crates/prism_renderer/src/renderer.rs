//! Render loop.
//!
//! Drives the camera over every pixel with regular-grid supersampling:
//! - `aa_multiplier x aa_multiplier` sub-samples per pixel
//! - Recursive shading with a configurable depth limit
//! - Colors stay linear; clamping happens only when converting to bytes

use std::time::Instant;

use crate::{trace, Camera, Color, Scene};
use prism_math::{Interval, Vec2};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Maximum recursion depth for reflected, refracted and glossy rays
    pub max_depth: u32,
    /// Rays per glossy hit
    pub glossy_samples: u32,
    /// Seed for the random source used by glossy sampling
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 10,
            glossy_samples: 80,
            seed: 0,
        }
    }
}

/// Destination for rendered pixels.
///
/// The render loop writes every pixel exactly once, with its final color.
pub trait ImageSink {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn set_pixel(&mut self, x: u32, y: u32, color: Color);
}

/// Convert a color to 8-bit RGB, clamping each channel to [0, 1].
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let r = (255.0 * Interval::UNIT.clamp(color.x)) as u8;
    let g = (255.0 * Interval::UNIT.clamp(color.y)) as u8;
    let b = (255.0 * Interval::UNIT.clamp(color.z)) as u8;
    [r, g, b]
}

/// Render a single pixel with regular-grid supersampling.
///
/// With a multiplier of `m` the pixel is split into an `m x m` grid and one
/// primary ray passes through the center of each cell.
pub fn render_pixel(
    scene: &Scene,
    camera: &Camera,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let m = scene.options().aa_multiplier.max(1);
    let step = 1.0 / m as f32;
    let mut pixel_color = Color::ZERO;

    for j in 0..m {
        for i in 0..m {
            let offset = Vec2::new((i as f32 + 0.5) * step, (j as f32 + 0.5) * step);
            if let Some(ray) = camera.primary_ray(x, y, offset) {
                pixel_color += trace(scene, &ray, false, config.max_depth, config, rng);
            }
        }
    }

    // Average the samples
    pixel_color / (m * m) as f32
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    /// Convert to packed RGB bytes, row by row from the top.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }
}

impl ImageSink for ImageBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        self.set(x, y, color);
    }
}

/// Render the scene into `sink`, seeding glossy sampling from `config.seed`.
pub fn render(scene: &Scene, config: &RenderConfig, sink: &mut dyn ImageSink) {
    let mut rng = StdRng::seed_from_u64(config.seed);
    render_with_rng(scene, config, sink, &mut rng);
}

/// Render the scene into `sink` with an explicit random source.
///
/// Pixels are visited row by row; the result depends only on the scene,
/// the configuration and the random stream.
pub fn render_with_rng(
    scene: &Scene,
    config: &RenderConfig,
    sink: &mut dyn ImageSink,
    rng: &mut dyn RngCore,
) {
    let (width, height) = (sink.width(), sink.height());
    let camera = Camera::new(width, height, scene.options());
    let m = scene.options().aa_multiplier.max(1);

    log::info!(
        "Rendering {}x{} ({} entities, {} lights, {} samples/pixel, depth {})",
        width,
        height,
        scene.len(),
        scene.lights().len(),
        m * m,
        config.max_depth
    );
    let start = Instant::now();

    for y in 0..height {
        for x in 0..width {
            let color = render_pixel(scene, &camera, x, y, config, rng);
            sink.set_pixel(x, y, color);
        }
        log::debug!("Row {}/{} done", y + 1, height);
    }

    log::info!("Rendered in {:.2?}", start.elapsed());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Plane, Sphere, Vec3};
    use prism_core::{Material, PointLight, SceneOptions};
    use std::collections::HashMap;
    use std::sync::Arc;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn red_sphere_scene(options: SceneOptions) -> Scene {
        let mut scene = Scene::new(options);
        scene.add_entity(Sphere::new(
            Vec3::new(0.0, 0.0, 5.0),
            1.0,
            Arc::new(Material::diffuse(Color::new(1.0, 0.0, 0.0))),
        ));
        scene.add_light(PointLight::white(Vec3::new(0.0, 5.0, 0.0)));
        scene
    }

    /// Counts how often each pixel is written.
    struct CountingSink {
        width: u32,
        height: u32,
        writes: HashMap<(u32, u32), u32>,
    }

    impl ImageSink for CountingSink {
        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }

        fn set_pixel(&mut self, x: u32, y: u32, _color: Color) {
            *self.writes.entry((x, y)).or_insert(0) += 1;
        }
    }

    #[test]
    fn test_color_to_rgb_clamps() {
        assert_eq!(color_to_rgb(Color::new(2.0, -1.0, 0.5)), [255, 0, 127]);
        assert_eq!(color_to_rgb(Color::ONE), [255, 255, 255]);
        assert_eq!(color_to_rgb(Color::ZERO), [0, 0, 0]);
    }

    #[test]
    fn test_image_buffer() {
        let mut image = ImageBuffer::new(3, 2);
        image.set_pixel(2, 1, Color::new(1.0, 0.5, 0.0));

        assert_eq!(image.get(2, 1), Color::new(1.0, 0.5, 0.0));
        assert_eq!(image.get(0, 0), Color::ZERO);

        let bytes = image.to_rgb8();
        assert_eq!(bytes.len(), 3 * 2 * 3);
        assert_eq!(&bytes[15..18], &[255, 127, 0]);
    }

    #[test]
    fn test_image_buffer_indexes_past_u32_range() {
        // 70000 x 70000 overflows u32 when the factors are multiplied first
        let image = ImageBuffer {
            width: 70_000,
            height: 70_000,
            pixels: Vec::new(),
        };
        assert_eq!(image.index(1, 69_999), 69_999 * 70_000 + 1);
        assert_eq!(image.index(69_999, 69_999), 70_000 * 70_000 - 1);
    }

    #[test]
    fn test_single_sample_matches_centered_primary_ray() {
        let scene = red_sphere_scene(SceneOptions::default());
        let camera = Camera::new(32, 24, scene.options());
        let config = RenderConfig::default();
        let mut rng = StdRng::seed_from_u64(0);

        for (x, y) in [(16, 12), (0, 0), (20, 10)] {
            let pixel = render_pixel(&scene, &camera, x, y, &config, &mut rng);
            let ray = camera.primary_ray(x, y, Vec2::splat(0.5)).unwrap();
            let single = trace(&scene, &ray, false, config.max_depth, &config, &mut rng);
            assert_eq!(pixel, single);
        }
    }

    #[test]
    fn test_supersampling_averages_grid() {
        let scene = red_sphere_scene(SceneOptions::default().with_aa_multiplier(2));
        let camera = Camera::new(32, 24, scene.options());
        let config = RenderConfig::default();
        let mut rng = StdRng::seed_from_u64(0);

        let mut expected = Color::ZERO;
        for offset in [
            Vec2::new(0.25, 0.25),
            Vec2::new(0.75, 0.25),
            Vec2::new(0.25, 0.75),
            Vec2::new(0.75, 0.75),
        ] {
            let ray = camera.primary_ray(16, 12, offset).unwrap();
            expected += trace(&scene, &ray, false, config.max_depth, &config, &mut rng);
        }
        expected /= 4.0;

        let pixel = render_pixel(&scene, &camera, 16, 12, &config, &mut rng);
        assert!((pixel - expected).abs().max_element() < 1e-6);
    }

    #[test]
    fn test_red_sphere_scenario() {
        init_logger();
        let scene = red_sphere_scene(SceneOptions::default());
        let mut image = ImageBuffer::new(64, 48);
        render(&scene, &RenderConfig::default(), &mut image);

        let center = image.get(32, 24);
        assert!(center.x > 0.0);
        assert_eq!(center.y, 0.0);
        assert_eq!(center.z, 0.0);

        for (x, y) in [(0, 0), (63, 0), (0, 47), (63, 47)] {
            assert_eq!(image.get(x, y), Color::ZERO, "corner ({x}, {y})");
        }
    }

    #[test]
    fn test_every_pixel_written_once() {
        let scene = red_sphere_scene(SceneOptions::default().with_aa_multiplier(3));
        let mut sink = CountingSink {
            width: 7,
            height: 5,
            writes: HashMap::new(),
        };
        render(&scene, &RenderConfig::default(), &mut sink);

        assert_eq!(sink.writes.len(), 35);
        assert!(sink.writes.values().all(|&count| count == 1));
    }

    #[test]
    fn test_render_is_deterministic_per_seed() {
        let mut scene = Scene::new(SceneOptions::default());
        scene.add_entity(Plane::new(
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::Y,
            Arc::new(Material::glossy(Color::splat(0.2), 10.0, 0.5)),
        ));
        scene.add_entity(Sphere::new(
            Vec3::new(0.0, 0.0, 5.0),
            1.0,
            Arc::new(Material::diffuse(Color::new(0.0, 0.0, 1.0))),
        ));
        scene.add_light(PointLight::white(Vec3::new(0.0, 5.0, 0.0)));

        let config = RenderConfig {
            glossy_samples: 8,
            max_depth: 3,
            seed: 11,
        };
        let mut a = ImageBuffer::new(16, 12);
        let mut b = ImageBuffer::new(16, 12);
        render(&scene, &config, &mut a);
        render(&scene, &config, &mut b);

        assert_eq!(a.pixels, b.pixels);
    }
}
