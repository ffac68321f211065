//! Frame renderer for the electron-orbit demo.
//!
//! Paints, back to front: the orbit guides with their `n=` labels, the
//! nucleus, a scatter of probability-cloud points, the shockwave rings,
//! photons, and finally the electrons in ascending camera-space z.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::AtomConfig;
use crate::render::{RenderSurface, TextAnchor, TextStyle};
use crate::scene::SceneState;
use crate::visuals::Rgb;
use crate::window::Demo;

const GUIDE_COLOR: Rgb = Rgb::from_hex(0x101b2e);
const LABEL_COLOR: Rgb = Rgb::from_hex(0x93a7c6);
const LABEL_SIZE: f32 = 10.0;
const LABEL_OFFSET: Vec2 = Vec2::new(8.0, 6.0);
const NUCLEUS_COLOR: Rgb = Rgb::from_hex(0xff5454);
const NUCLEUS_GLOW: Rgb = Rgb::from_hex(0xff8f8f);
const CLOUD_COLOR: Rgb = Rgb::from_hex(0x16243d);
const CLOUD_JITTER: f32 = 8.0;
const SHOCK_GLOW: Rgb = Rgb::from_hex(0xffd1d8);
const SHOCK_CORE: Rgb = Rgb::from_hex(0xff6b7c);
const PHOTON_DOT: f32 = 3.0;

/// Draws a [`SceneState`] onto a [`RenderSurface`].
///
/// Owns its own RNG for the probability cloud so drawing never disturbs the
/// scene's random sequence.
pub struct AtomRenderer {
    cloud_rng: StdRng,
}

impl AtomRenderer {
    pub fn new() -> Self {
        Self {
            cloud_rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            cloud_rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Paint one full frame.
    pub fn draw(&mut self, scene: &SceneState, surface: &mut dyn RenderSurface) {
        let config = scene.config();
        surface.clear_frame(config.background);

        self.draw_field(scene, surface);
        draw_shockwave(scene, surface);

        for photon in &scene.photons {
            surface.draw_filled_dot(photon.position, PHOTON_DOT / 2.0, config.photon_color);
        }

        for index in scene.draw_order() {
            let p = &scene.particles[index];
            let size = dot_size(config.trail_dot, p.depth);
            surface.draw_filled_dot(p.screen, size / 2.0, p.color);
            surface.draw_filled_dot(p.screen, (size + 1.0) / 2.0, glow_color(p.angle));
        }
    }

    fn draw_field(&mut self, scene: &SceneState, surface: &mut dyn RenderSurface) {
        let config = scene.config();
        let label = TextStyle::new(LABEL_SIZE, LABEL_COLOR).anchored(TextAnchor::BottomLeft);

        for (level, &radius) in config.orbit_radii.iter().enumerate() {
            surface.draw_circle_outline(Vec2::ZERO, radius, GUIDE_COLOR, 1.0);
            surface.draw_text(
                Vec2::new(radius, 0.0) + LABEL_OFFSET,
                &format!("n={}", level + 1),
                &label,
            );
        }

        surface.draw_filled_dot(Vec2::ZERO, config.nucleus_radius, NUCLEUS_COLOR);
        surface.draw_filled_dot(Vec2::ZERO, config.nucleus_radius * 1.4 / 2.0, NUCLEUS_GLOW);

        for _ in 0..config.cloud_points {
            let Some(&ring) = config.orbit_radii.choose(&mut self.cloud_rng) else {
                break;
            };
            let angle = self.cloud_rng.gen_range(0.0..TAU);
            let jitter = self.cloud_rng.gen_range(-CLOUD_JITTER..=CLOUD_JITTER);
            surface.draw_filled_dot(Vec2::from_angle(angle) * (ring + jitter), 0.5, CLOUD_COLOR);
        }
    }
}

impl Default for AtomRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// The electron-orbit demo: a scene plus its renderer.
pub struct AtomDemo {
    pub scene: SceneState,
    renderer: AtomRenderer,
}

impl AtomDemo {
    pub fn new(config: AtomConfig) -> Self {
        Self {
            scene: SceneState::new(config),
            renderer: AtomRenderer::new(),
        }
    }
}

impl Demo for AtomDemo {
    fn title(&self) -> &str {
        "Electron Orbits Animation"
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

    fn tick(&mut self) {
        self.scene.tick();
    }

    fn draw(&mut self, surface: &mut dyn RenderSurface) {
        self.renderer.draw(&self.scene, surface);
    }
}

fn draw_shockwave(scene: &SceneState, surface: &mut dyn RenderSurface) {
    let background = scene.config().background;
    for (radius, fade) in scene.shockwave.rings() {
        surface.draw_circle_outline(Vec2::ZERO, radius, SHOCK_GLOW.faded(background, fade), 4.0);
        surface.draw_circle_outline(Vec2::ZERO, radius, SHOCK_CORE.faded(background, fade), 2.0);
    }
}

/// Electron dot diameter: nearer electrons are drawn larger.
pub fn dot_size(base: f32, depth: f32) -> f32 {
    (base * (0.7 + 0.9 * depth)).floor().max(1.0)
}

/// Blue-white halo that brightens as `|sin angle|` grows.
pub fn glow_color(angle: f32) -> Rgb {
    let glow = (140.0 + 90.0 * angle.sin().abs()).min(255.0) as u8;
    Rgb::new(glow, glow, 255)
}
