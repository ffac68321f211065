//! The electron-orbit scene and its per-tick ordering.
//!
//! [`SceneState`] owns everything that changes between ticks: particles,
//! photons, camera phases, the shockwave and the RNG. One call to
//! [`SceneState::tick`] runs, in order:
//!
//! 1. the orbital step for every particle,
//! 2. the camera advance and projection of every particle,
//! 3. photon aging, jump rolls (which may emit photons) and the shockwave.
//!
//! Drawing happens afterwards and only reads the scene.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::AtomConfig;
use crate::orbital::Particle;
use crate::projection::{self, CameraState};
use crate::transition::{self, Photon, Shockwave};

/// Snapshot of one particle for trace comparisons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceEntry {
    pub angle: f32,
    pub semi_major: f32,
}

/// Snapshot of the whole scene after one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceFrame {
    pub tick: u64,
    pub particles: Vec<TraceEntry>,
    pub photons_emitted: u64,
}

/// All mutable animation state of the electron-orbit demo.
pub struct SceneState {
    config: AtomConfig,
    pub particles: Vec<Particle>,
    pub photons: Vec<Photon>,
    pub camera: CameraState,
    pub shockwave: Shockwave,
    rng: StdRng,
    tick: u64,
    photons_emitted: u64,
}

impl SceneState {
    /// Create the scene, spawning `config.particle_count` particles.
    ///
    /// Uses `config.seed` when set, entropy otherwise.
    pub fn new(config: AtomConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Create the scene with an explicit RNG.
    ///
    /// # Panics
    ///
    /// Panics if `config.orbit_radii` is empty.
    pub fn with_rng(config: AtomConfig, mut rng: StdRng) -> Self {
        assert!(
            !config.orbit_radii.is_empty(),
            "at least one orbit preset is required"
        );
        let particles = (0..config.particle_count)
            .map(|_| Particle::spawn(&mut rng, &config))
            .collect();
        let shockwave = Shockwave::new(&config);

        log::info!(
            "spawned {} electrons on {} orbit presets",
            config.particle_count,
            config.orbit_radii.len()
        );

        Self {
            config,
            particles,
            photons: Vec::new(),
            camera: CameraState::new(),
            shockwave,
            rng,
            tick: 0,
            photons_emitted: 0,
        }
    }

    pub fn config(&self) -> &AtomConfig {
        &self.config
    }

    /// Ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.tick
    }

    /// Photons created since the scene started, including expired ones.
    pub fn photons_emitted(&self) -> u64 {
        self.photons_emitted
    }

    /// Run one animation tick.
    pub fn tick(&mut self) {
        let config = &self.config;

        for particle in &mut self.particles {
            particle.step(config);
        }

        self.camera.advance(config);
        for particle in &mut self.particles {
            projection::project_particle(particle, &self.camera, config);
        }

        transition::update_photons(&mut self.photons);
        for particle in &mut self.particles {
            if let Some(photon) = transition::process_jump(particle, &mut self.rng, config) {
                self.photons.push(photon);
                self.photons_emitted += 1;
            }
        }
        self.shockwave.advance();

        self.tick += 1;
    }

    /// Particle indices in painter's order, camera-space z ascending.
    pub fn draw_order(&self) -> Vec<usize> {
        projection::draw_order(&self.particles)
    }

    /// Capture `(angle, semi_major)` for every particle.
    pub fn trace(&self) -> TraceFrame {
        TraceFrame {
            tick: self.tick,
            particles: self
                .particles
                .iter()
                .map(|p| TraceEntry {
                    angle: p.angle,
                    semi_major: p.semi_major,
                })
                .collect(),
            photons_emitted: self.photons_emitted,
        }
    }

    /// Run `ticks` ticks, recording a trace frame after each.
    pub fn record(&mut self, ticks: usize) -> Vec<TraceFrame> {
        (0..ticks)
            .map(|_| {
                self.tick();
                self.trace()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    #[test]
    fn test_new_spawns_configured_count() {
        let scene = SceneState::new(AtomConfig::default().with_seed(1));
        assert_eq!(scene.particles.len(), 36);
        assert!(scene.photons.is_empty());
        assert_eq!(scene.ticks(), 0);
        assert_eq!(scene.camera, CameraState::new());
    }

    #[test]
    fn test_tick_projects_every_particle() {
        let mut scene = SceneState::new(AtomConfig::default().with_seed(2));
        scene.tick();
        for p in &scene.particles {
            assert!(p.position.length() > 0.0);
            assert!(p.depth > 0.0 && p.depth.is_finite());
            let expected = projection::project_point(p.position, p.angle, &scene.camera, scene.config());
            assert_eq!(p.screen, expected.screen);
            assert_eq!(p.view_z, expected.view_z);
        }
    }

    #[test]
    fn test_camera_advances_once_per_tick() {
        let config = AtomConfig::default().with_seed(3);
        let mut scene = SceneState::new(config.clone());
        for _ in 0..10 {
            scene.tick();
        }
        assert!((scene.camera.spin - 10.0 * config.spin_rate).abs() < 1e-5);
        assert!((scene.camera.tilt - 10.0 * config.tilt_rate).abs() < 1e-5);
    }

    #[test]
    fn test_jumps_emit_counted_photons() {
        let mut config = AtomConfig::default().with_seed(4).with_jump_chance(1.0);
        config.spawn_cooldown = 1..=1;
        let mut scene = SceneState::new(config);

        scene.tick();
        assert_eq!(scene.photons.len(), 36);
        assert_eq!(scene.photons_emitted(), 36);
        // New photons sit at the nucleus until the next tick moves them.
        assert!(scene.photons.iter().all(|ph| ph.position == glam::Vec2::ZERO));

        scene.tick();
        assert!(scene.photons.iter().all(|ph| ph.position != glam::Vec2::ZERO));
        assert_eq!(scene.photons_emitted(), 36);
    }

    #[test]
    fn test_invariants_hold_over_long_run() {
        let config = AtomConfig::default().with_seed(5).with_jump_chance(0.2);
        let mut scene = SceneState::new(config.clone());
        for _ in 0..2_000 {
            scene.tick();
            for p in &scene.particles {
                assert!(config.orbit_radii.contains(&p.semi_major));
                assert!((0.0..TAU).contains(&p.angle));
            }
            assert!(scene.shockwave.radius <= scene.shockwave.bound);
            assert!(scene.photons.iter().all(|ph| ph.life > 0));
        }
    }

    #[test]
    #[should_panic(expected = "orbit preset")]
    fn test_empty_orbit_radii_rejected_at_construction() {
        let mut config = AtomConfig::default().with_seed(1);
        config.orbit_radii.clear();
        let _ = SceneState::new(config);
    }

    #[test]
    fn test_record_length_and_ticks() {
        let mut scene = SceneState::new(AtomConfig::default().with_particle_count(5).with_seed(6));
        let frames = scene.record(100);
        assert_eq!(frames.len(), 100);
        assert_eq!(frames[0].tick, 1);
        assert_eq!(frames[99].tick, 100);
        assert!(frames.iter().all(|f| f.particles.len() == 5));
    }
}
