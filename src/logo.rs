//! The logo glow demo: a static logo, three breathing glow rings and a steady
//! drizzle of sparkles drifting outward.
//!
//! Sparkles are born on a ring around the logo, move away from its center,
//! shrink a little every tick and are dropped once they are too small or too
//! old.

use std::f32::consts::TAU;
use std::path::{Path, PathBuf};

use glam::Vec2;
use image::imageops::FilterType;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::LogoConfig;
use crate::error::AssetError;
use crate::render::{ImageHandle, RenderSurface, TextStyle};
use crate::visuals::Rgb;
use crate::window::Demo;

/// Decoded logo pixels, already downscaled for display.
#[derive(Debug, Clone)]
pub struct LogoImage {
    /// Raw RGBA pixel data (width * height * 4 bytes).
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Where the image was loaded from.
    pub path: PathBuf,
}

impl LogoImage {
    /// Load an image and shrink it by an integer factor so its larger side is
    /// at most about `max_dim`.
    pub fn load(path: impl AsRef<Path>, max_dim: u32) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let decoded = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let mut rgba = decoded.into_rgba8();
        let (width, height) = rgba.dimensions();
        let factor = downscale_factor(width, height, max_dim);
        if factor > 1 {
            rgba = image::imageops::resize(
                &rgba,
                (width / factor).max(1),
                (height / factor).max(1),
                FilterType::Nearest,
            );
        }
        let (width, height) = rgba.dimensions();
        log::info!(
            "loaded logo {} ({}x{}, downscaled by {})",
            path.display(),
            width,
            height,
            factor
        );

        Ok(Self {
            rgba: rgba.into_raw(),
            width,
            height,
            path: path.to_path_buf(),
        })
    }
}

/// Integer subsample factor: `max(1, floor(max(w, h) / max_dim))`.
pub fn downscale_factor(width: u32, height: u32, max_dim: u32) -> u32 {
    (width.max(height) / max_dim.max(1)).max(1)
}

/// A short-lived shrinking dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sparkle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    /// Remaining ticks.
    pub life: u32,
    pub color: Rgb,
}

impl Sparkle {
    /// Sample a sparkle on a ring around `center`.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, center: Vec2, config: &LogoConfig) -> Self {
        let angle = rng.gen_range(0.0..TAU);
        let distance = rng.gen_range(config.sparkle_distance.clone()) as f32;
        let direction = Vec2::from_angle(angle);
        let (speed_min, speed_max) = config.sparkle_speed;
        let (radius_min, radius_max) = config.sparkle_radius;

        Self {
            position: center + direction * distance,
            velocity: Vec2::new(
                direction.x * rng.gen_range(speed_min..=speed_max),
                direction.y * rng.gen_range(speed_min..=speed_max),
            ),
            radius: rng.gen_range(radius_min..=radius_max),
            life: rng.gen_range(config.sparkle_life.clone()),
            color: config.sparkle_palette.choose(rng),
        }
    }

    /// Move, shrink and age one tick. Returns `false` once the sparkle is gone.
    pub fn advance(&mut self, shrink: f32, min_radius: f32) -> bool {
        self.position += self.velocity;
        self.radius *= shrink;
        self.life = self.life.saturating_sub(1);
        self.life > 0 && self.radius > min_radius
    }
}

/// Animation state of the logo demo.
pub struct LogoScene {
    config: LogoConfig,
    pub sparkles: Vec<Sparkle>,
    /// Glow ring colors chosen for the current frame.
    pub ring_colors: Vec<Rgb>,
    rng: StdRng,
    tick: u64,
    /// Tick whose pulse the current frame shows.
    frame_tick: u64,
}

impl LogoScene {
    pub fn new(config: LogoConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            sparkles: Vec::new(),
            ring_colors: Vec::new(),
            rng,
            tick: 0,
            frame_tick: 0,
        }
    }

    pub fn config(&self) -> &LogoConfig {
        &self.config
    }

    pub fn ticks(&self) -> u64 {
        self.tick
    }

    /// Logo center in surface coordinates.
    pub fn center(&self) -> Vec2 {
        Vec2::from(self.config.logo_center)
    }

    /// Pulse in `[0, 1]` for the current frame.
    pub fn pulse(&self) -> f32 {
        ((self.frame_tick as f32 * self.config.pulse_rate).sin() + 1.0) * 0.5
    }

    /// Glow ring radii for the current frame, innermost first.
    pub fn glow_radii(&self) -> impl Iterator<Item = f32> + '_ {
        let pulse = self.pulse();
        (0..self.config.glow_rings).map(move |i| {
            self.config.glow_base_radius + i as f32 * self.config.glow_spacing + pulse * self.config.glow_pulse
        })
    }

    /// Run one tick: pick ring colors, spawn new sparkles, age all sparkles.
    pub fn tick(&mut self) {
        let config = &self.config;

        self.ring_colors = (0..config.glow_rings)
            .map(|_| config.glow_palette.choose(&mut self.rng))
            .collect();

        let center = Vec2::from(config.logo_center);
        for _ in 0..config.sparkles_per_tick {
            self.sparkles.push(Sparkle::spawn(&mut self.rng, center, config));
        }

        let (shrink, min_radius) = (config.sparkle_shrink, config.sparkle_min_radius);
        self.sparkles.retain_mut(|s| s.advance(shrink, min_radius));

        self.frame_tick = self.tick;
        self.tick += 1;
    }

    /// Paint one frame. `logo` is the host's handle for the logo image, if any.
    pub fn draw(&self, surface: &mut dyn RenderSurface, logo: Option<ImageHandle>) {
        let config = &self.config;
        surface.clear_frame(config.background);

        if let Some(handle) = logo {
            surface.draw_image(self.center(), handle);
        }
        surface.draw_text(
            Vec2::from(config.caption_position),
            &config.caption,
            &TextStyle::new(config.caption_size, config.caption_color).bold(),
        );

        for (radius, color) in self.glow_radii().zip(self.ring_colors.iter()) {
            surface.draw_circle_outline(self.center(), radius, *color, config.glow_width);
        }

        for sparkle in &self.sparkles {
            surface.draw_filled_dot(sparkle.position, sparkle.radius, sparkle.color);
        }
    }
}

/// The logo glow demo: sparkle scene plus the logo image.
pub struct LogoDemo {
    pub scene: LogoScene,
    logo: Option<LogoImage>,
}

impl LogoDemo {
    pub fn new(config: LogoConfig, logo: Option<LogoImage>) -> Self {
        Self {
            scene: LogoScene::new(config),
            logo,
        }
    }

    /// Load the logo from `path` and build the demo, failing if the image
    /// cannot be read.
    pub fn load(config: LogoConfig, path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let logo = LogoImage::load(path, config.max_logo_dim)?;
        Ok(Self::new(config, Some(logo)))
    }
}

impl Demo for LogoDemo {
    fn title(&self) -> &str {
        "NIT Trichy Logo Animation"
    }

    fn window_size(&self) -> (u32, u32) {
        self.scene.config().window_size
    }

    fn tick_interval(&self) -> std::time::Duration {
        self.scene.config().tick_interval
    }

    fn background(&self) -> Rgb {
        self.scene.config().background
    }

    fn images(&self) -> Vec<&LogoImage> {
        self.logo.iter().collect()
    }

    fn tick(&mut self) {
        self.scene.tick();
    }

    fn draw(&mut self, surface: &mut dyn RenderSurface) {
        let handle = self.logo.as_ref().map(|_| ImageHandle(0));
        self.scene.draw(surface, handle);
    }
}
