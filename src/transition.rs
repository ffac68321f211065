//! Energy-level jumps and the short-lived effects around them.
//!
//! # Jumps
//!
//! Every tick each particle's cooldown is decremented. Once it has run out the
//! particle rolls against [`AtomConfig::jump_chance`]; on success it moves to a
//! different orbit preset, gets a fresh eccentricity and a longer cooldown, and
//! emits a [`Photon`] from the nucleus.
//!
//! # Photons
//!
//! Photons fly in a straight line and disappear when their life reaches zero.
//!
//! # Shockwave
//!
//! A single radius grows from the nucleus and wraps back to zero once it passes
//! the outermost orbit plus one ring gap. It is drawn as a few concentric rings
//! trailing each other by the gap, fainter the further back they are.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::seq::IteratorRandom;
use rand::Rng;

use crate::config::AtomConfig;
use crate::orbital::Particle;

/// Floor for the shockwave ring fade.
pub const MIN_RING_FADE: f32 = 0.15;

/// A straight-flying flash emitted by a jump.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Photon {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Remaining ticks.
    pub life: u32,
}

impl Photon {
    /// Photon leaving the origin at `angle` with the configured speed and life.
    pub fn emit(angle: f32, config: &AtomConfig) -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::from_angle(angle) * config.photon_speed,
            life: config.photon_life,
        }
    }

    /// Move one tick. Returns `false` once the photon has expired.
    pub fn advance(&mut self) -> bool {
        self.position += self.velocity;
        self.life = self.life.saturating_sub(1);
        self.life > 0
    }
}

/// Advance every photon and drop the expired ones.
pub fn update_photons(photons: &mut Vec<Photon>) {
    photons.retain_mut(Photon::advance);
}

/// Count down the particle's cooldown and maybe jump.
///
/// Returns the emitted photon when a jump happens.
pub fn process_jump<R: Rng + ?Sized>(
    particle: &mut Particle,
    rng: &mut R,
    config: &AtomConfig,
) -> Option<Photon> {
    particle.jump_cooldown -= 1;
    if particle.jump_cooldown > 0 || rng.gen::<f32>() >= config.jump_chance {
        return None;
    }
    Some(jump(particle, rng, config))
}

/// Force a jump: new orbit preset, new eccentricity, new cooldown, one photon.
///
/// With a single orbit preset the particle keeps its radius.
pub fn jump<R: Rng + ?Sized>(particle: &mut Particle, rng: &mut R, config: &AtomConfig) -> Photon {
    let current = particle.semi_major;
    if let Some(&radius) = config.orbit_radii.iter().filter(|&&r| r != current).choose(rng) {
        particle.semi_major = radius;
    }

    let (ecc_min, ecc_max) = config.eccentricity_range;
    particle.eccentricity = rng.gen_range(ecc_min..=ecc_max);
    particle.jump_cooldown = rng.gen_range(config.jump_cooldown_reset.clone());

    log::debug!(
        "electron jumped {} -> {} (cooldown {})",
        current,
        particle.semi_major,
        particle.jump_cooldown
    );

    Photon::emit(rng.gen_range(0.0..TAU), config)
}

/// Expanding rings around the nucleus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shockwave {
    /// Radius of the leading ring.
    pub radius: f32,
    pub speed: f32,
    pub gap: f32,
    pub ring_count: usize,
    /// Radius past which the wave restarts from zero.
    pub bound: f32,
}

impl Shockwave {
    pub fn new(config: &AtomConfig) -> Self {
        Self {
            radius: 0.0,
            speed: config.shockwave_speed,
            gap: config.shockwave_gap,
            ring_count: config.shockwave_rings,
            bound: config.shockwave_bound(),
        }
    }

    /// Grow by one tick, wrapping to zero once past the bound.
    pub fn advance(&mut self) {
        self.radius += self.speed;
        if self.radius > self.bound {
            self.radius = 0.0;
        }
    }

    /// Visible rings as `(radius, fade)`, leading ring first.
    ///
    /// Rings that have not yet left the nucleus are skipped. Fade runs from 1
    /// for the leading ring down to [`MIN_RING_FADE`].
    pub fn rings(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        let last = self.ring_count.saturating_sub(1).max(1) as f32;
        (0..self.ring_count).filter_map(move |k| {
            let radius = self.radius - k as f32 * self.gap;
            if radius <= 0.0 {
                return None;
            }
            let fade = (1.0 - k as f32 / last).max(MIN_RING_FADE);
            Some((radius, fade))
        })
    }
}
