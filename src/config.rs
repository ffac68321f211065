//! Tunable constants for both demos.
//!
//! Every constant lives on [`AtomConfig`] or [`LogoConfig`]. The `Default`
//! impls hold the values the demos ship with; the `with_*` methods let tests and
//! embedders override individual values.
//!
//! # Example
//!
//! ```
//! use orbitals::AtomConfig;
//!
//! let config = AtomConfig::default()
//!     .with_particle_count(5)
//!     .with_seed(7);
//! assert_eq!(config.particle_count, 5);
//! ```

use std::ops::RangeInclusive;
use std::time::Duration;

use crate::visuals::{Palette, Rgb};

/// Configuration for the electron-orbit scene.
#[derive(Debug, Clone)]
pub struct AtomConfig {
    /// Window size in logical pixels.
    pub window_size: (u32, u32),
    /// Delay between animation ticks.
    pub tick_interval: Duration,
    /// Background clear color.
    pub background: Rgb,

    /// Number of electrons created at startup.
    pub particle_count: usize,
    /// Orbit presets (semi-major axes). Must be non-empty.
    pub orbit_radii: Vec<f32>,
    /// Eccentricity range for new and jumped orbits.
    pub eccentricity_range: (f32, f32),
    /// Base angular speed range, before scaling by `speed_reference / semi_major`.
    pub base_speed_range: (f32, f32),
    /// Radius at which the base speed is unscaled.
    pub speed_reference: f32,
    /// Largest absolute orbital inclination, radians.
    pub max_inclination: f32,
    /// Periapsis precession per tick at `precession_reference`.
    pub precession: f32,
    /// Radius at which precession is unscaled.
    pub precession_reference: f32,
    /// Electron colors.
    pub palette: Palette,

    /// Distance from camera to the origin.
    pub camera_distance: f32,
    /// Perspective focal term added to the depth denominator.
    pub perspective: f32,
    /// Spin phase increment per tick.
    pub spin_rate: f32,
    /// Tilt phase increment per tick.
    pub tilt_rate: f32,
    /// Zoom-breath phase increment per tick.
    pub zoom_rate: f32,
    /// Wobble phase increment per tick.
    pub wobble_rate: f32,
    /// Relative zoom swing.
    pub breath_amplitude: f32,
    /// Relative orbital-plane wobble.
    pub wobble_amplitude: f32,

    /// Per-tick probability of a jump once the cooldown has expired.
    pub jump_chance: f32,
    /// Initial cooldown range, in ticks.
    pub spawn_cooldown: RangeInclusive<i32>,
    /// Cooldown range after a jump, in ticks.
    pub jump_cooldown_reset: RangeInclusive<i32>,
    /// Photon speed in pixels per tick.
    pub photon_speed: f32,
    /// Photon lifetime in ticks.
    pub photon_life: u32,
    /// Photon color.
    pub photon_color: Rgb,

    /// Shockwave growth per tick.
    pub shockwave_speed: f32,
    /// Distance between concentric shockwave rings.
    pub shockwave_gap: f32,
    /// Number of concentric shockwave rings.
    pub shockwave_rings: usize,

    /// Nucleus radius.
    pub nucleus_radius: f32,
    /// Number of probability-cloud points drawn per frame.
    pub cloud_points: usize,
    /// Base electron dot diameter.
    pub trail_dot: f32,

    /// Seed for the scene RNG. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for AtomConfig {
    fn default() -> Self {
        Self {
            window_size: (1000, 650),
            tick_interval: Duration::from_millis(20),
            background: Rgb::from_hex(0x080b14),

            particle_count: 36,
            orbit_radii: vec![80.0, 130.0, 190.0, 255.0, 320.0],
            eccentricity_range: (0.05, 0.28),
            base_speed_range: (0.004, 0.01),
            speed_reference: 300.0,
            max_inclination: 0.9,
            precession: 0.0009,
            precession_reference: 320.0,
            palette: Palette::Electron,

            camera_distance: 900.0,
            perspective: 700.0,
            spin_rate: 0.0045,
            tilt_rate: 0.007,
            zoom_rate: 0.006,
            wobble_rate: 0.0015,
            breath_amplitude: 0.12,
            wobble_amplitude: 0.08,

            jump_chance: 0.002,
            spawn_cooldown: 60..=220,
            jump_cooldown_reset: 120..=300,
            photon_speed: 6.0,
            photon_life: 24,
            photon_color: Rgb::from_hex(0x7ff6ff),

            shockwave_speed: 2.2,
            shockwave_gap: 120.0,
            shockwave_rings: 3,

            nucleus_radius: 22.0,
            cloud_points: 80,
            trail_dot: 2.0,

            seed: None,
        }
    }
}

impl AtomConfig {
    /// Set the number of electrons.
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    /// Replace the orbit presets.
    ///
    /// # Panics
    ///
    /// Panics if `radii` is empty.
    pub fn with_orbit_radii(mut self, radii: Vec<f32>) -> Self {
        assert!(!radii.is_empty(), "at least one orbit preset is required");
        self.orbit_radii = radii;
        self
    }

    /// Set the per-tick jump probability.
    pub fn with_jump_chance(mut self, chance: f32) -> Self {
        self.jump_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Set photon speed and lifetime.
    pub fn with_photons(mut self, speed: f32, life: u32) -> Self {
        self.photon_speed = speed;
        self.photon_life = life;
        self
    }

    /// Set shockwave speed, ring gap and ring count.
    pub fn with_shockwave(mut self, speed: f32, gap: f32, rings: usize) -> Self {
        self.shockwave_speed = speed;
        self.shockwave_gap = gap;
        self.shockwave_rings = rings;
        self
    }

    /// Seed the scene RNG for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Largest orbit preset.
    pub fn max_radius(&self) -> f32 {
        self.orbit_radii.iter().copied().fold(0.0, f32::max)
    }

    /// Radius past which the shockwave wraps back to zero.
    pub fn shockwave_bound(&self) -> f32 {
        self.max_radius() + self.shockwave_gap
    }
}

/// Configuration for the logo glow demo.
#[derive(Debug, Clone)]
pub struct LogoConfig {
    /// Window size in logical pixels.
    pub window_size: (u32, u32),
    /// Delay between animation ticks.
    pub tick_interval: Duration,
    /// Background clear color.
    pub background: Rgb,

    /// Largest logo dimension before integer downscaling kicks in.
    pub max_logo_dim: u32,
    /// Logo center, relative to the window center (y up).
    pub logo_center: (f32, f32),

    /// Caption text.
    pub caption: String,
    /// Caption position, relative to the window center (y up).
    pub caption_position: (f32, f32),
    /// Caption color.
    pub caption_color: Rgb,
    /// Caption font size.
    pub caption_size: f32,

    /// Number of glow rings.
    pub glow_rings: usize,
    /// Radius of the innermost glow ring.
    pub glow_base_radius: f32,
    /// Spacing between glow rings.
    pub glow_spacing: f32,
    /// How far the rings breathe outward at full pulse.
    pub glow_pulse: f32,
    /// Pulse phase advance per tick.
    pub pulse_rate: f32,
    /// Glow ring stroke width.
    pub glow_width: f32,
    /// Glow ring colors; one is picked per ring per frame.
    pub glow_palette: Palette,

    /// Sparkles spawned per tick.
    pub sparkles_per_tick: usize,
    /// Spawn distance from the logo center, in whole pixels.
    pub sparkle_distance: RangeInclusive<i32>,
    /// Outward speed range, drawn separately for each axis.
    pub sparkle_speed: (f32, f32),
    /// Initial sparkle radius range.
    pub sparkle_radius: (f32, f32),
    /// Sparkle lifetime range, in ticks.
    pub sparkle_life: RangeInclusive<u32>,
    /// Radius multiplier applied every tick.
    pub sparkle_shrink: f32,
    /// Sparkles at or below this radius are dropped.
    pub sparkle_min_radius: f32,
    /// Sparkle colors.
    pub sparkle_palette: Palette,

    /// Seed for the sparkle RNG. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            window_size: (900, 700),
            tick_interval: Duration::from_millis(30),
            background: Rgb::from_hex(0x0b0b1a),

            max_logo_dim: 360,
            logo_center: (0.0, 40.0),

            caption: "NIT Trichy".to_string(),
            caption_position: (0.0, -270.0),
            caption_color: Rgb::from_hex(0xf6c453),
            caption_size: 26.0,

            glow_rings: 3,
            glow_base_radius: 175.0,
            glow_spacing: 24.0,
            glow_pulse: 12.0,
            pulse_rate: 0.05,
            glow_width: 2.0,
            glow_palette: Palette::Glow,

            sparkles_per_tick: 5,
            sparkle_distance: 70..=230,
            sparkle_speed: (0.2, 0.8),
            sparkle_radius: (2.0, 4.5),
            sparkle_life: 20..=45,
            sparkle_shrink: 0.97,
            sparkle_min_radius: 0.6,
            sparkle_palette: Palette::Sparkle,

            seed: None,
        }
    }
}

impl LogoConfig {
    /// Set the number of sparkles spawned per tick.
    pub fn with_sparkles_per_tick(mut self, count: usize) -> Self {
        self.sparkles_per_tick = count;
        self
    }

    /// Replace the caption text.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    /// Seed the sparkle RNG for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shockwave_bound_uses_largest_preset() {
        let config = AtomConfig::default();
        assert_eq!(config.max_radius(), 320.0);
        assert_eq!(config.shockwave_bound(), 440.0);
    }

    #[test]
    fn test_builder_chain() {
        let config = AtomConfig::default()
            .with_particle_count(5)
            .with_jump_chance(2.0)
            .with_photons(3.0, 10)
            .with_seed(42);

        assert_eq!(config.particle_count, 5);
        assert_eq!(config.jump_chance, 1.0);
        assert_eq!(config.photon_life, 10);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    #[should_panic(expected = "orbit preset")]
    fn test_empty_orbit_radii_rejected() {
        let _ = AtomConfig::default().with_orbit_radii(Vec::new());
    }

    #[test]
    fn test_logo_defaults() {
        let config = LogoConfig::default().with_caption("Hello");
        assert_eq!(config.caption, "Hello");
        assert_eq!(config.glow_rings, 3);
        assert_eq!(config.sparkles_per_tick, 5);
    }
}
