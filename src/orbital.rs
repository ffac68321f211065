//! Kepler-like electron orbits.
//!
//! Each [`Particle`] moves on an ellipse with the nucleus at one focus. The
//! angular speed follows `(a / r)²`, so electrons speed up near periapsis the
//! way angular-momentum conservation would have them. The ellipse itself
//! precesses slowly and is tilted into 3D by the particle's inclination and
//! ascending node.

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};
use rand::Rng;

use crate::config::AtomConfig;
use crate::visuals::Rgb;

/// Smallest radius used as a divisor in the angular speed law.
pub const MIN_RADIUS: f32 = 1.0;

/// A single electron.
///
/// Orbital elements are sampled at spawn time. `position` is recomputed by
/// [`Particle::step`]; `screen`, `depth` and `view_z` are written by the
/// projection pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Semi-major axis; always one of the configured orbit presets.
    pub semi_major: f32,
    /// Orbit eccentricity.
    pub eccentricity: f32,
    /// True anomaly, wrapped to `[0, 2π)`.
    pub angle: f32,
    /// Argument of periapsis, wrapped to `[0, 2π)`.
    pub arg_periapsis: f32,
    /// Angular speed at `r = a`.
    pub base_speed: f32,
    /// Orbital plane tilt about the x axis.
    pub inclination: f32,
    /// Longitude of the ascending node (rotation about the z axis).
    pub node: f32,
    pub color: Rgb,
    /// World-space position after the last step.
    pub position: Vec3,
    /// Projected screen position (centered, y up).
    pub screen: Vec2,
    /// Perspective scale factor; smaller is farther away.
    pub depth: f32,
    /// Camera-space z after the last projection; larger is farther away.
    pub view_z: f32,
    /// Ticks until the particle may jump to another orbit.
    pub jump_cooldown: i32,
}

impl Particle {
    /// Sample a fresh particle on a uniformly chosen orbit preset.
    ///
    /// # Panics
    ///
    /// Panics if `config.orbit_radii` is empty.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, config: &AtomConfig) -> Self {
        let level = rng.gen_range(0..config.orbit_radii.len() as u32) as usize;
        let semi_major = config.orbit_radii[level];
        let (speed_min, speed_max) = config.base_speed_range;
        let (ecc_min, ecc_max) = config.eccentricity_range;

        Self {
            semi_major,
            eccentricity: rng.gen_range(ecc_min..=ecc_max),
            angle: rng.gen_range(0.0..TAU),
            arg_periapsis: rng.gen_range(0.0..TAU),
            base_speed: rng.gen_range(speed_min..=speed_max) * (config.speed_reference / semi_major),
            inclination: rng.gen_range(-config.max_inclination..=config.max_inclination),
            node: rng.gen_range(0.0..TAU),
            color: config.palette.choose(rng),
            position: Vec3::ZERO,
            screen: Vec2::ZERO,
            depth: 1.0,
            view_z: 0.0,
            jump_cooldown: rng.gen_range(config.spawn_cooldown.clone()),
        }
    }

    /// Distance from the nucleus at the current angle.
    pub fn radius(&self) -> f32 {
        orbital_radius(self.semi_major, self.eccentricity, self.angle)
    }

    /// Advance the particle by one tick and recompute its world position.
    pub fn step(&mut self, config: &AtomConfig) {
        let r = self.radius();
        let speed = angular_speed(self.base_speed, self.semi_major, r);

        self.angle = wrap_angle(self.angle + speed);
        self.arg_periapsis = wrap_angle(
            self.arg_periapsis + config.precession * (config.precession_reference / self.semi_major),
        );

        let theta = self.angle + self.arg_periapsis;
        let in_plane = Vec3::new(r * theta.cos(), r * theta.sin(), 0.0);
        self.position = orient(in_plane, self.inclination, self.node);
    }
}

/// Focal-polar ellipse radius: `a(1 - e²) / (1 + e·cos θ)`.
///
/// Ranges from `a(1 - e)` at periapsis (`θ = 0`) to `a(1 + e)` at apoapsis.
#[inline]
pub fn orbital_radius(semi_major: f32, eccentricity: f32, angle: f32) -> f32 {
    semi_major * (1.0 - eccentricity * eccentricity) / (1.0 + eccentricity * angle.cos())
}

/// Angular speed at radius `r`: `base · (a / max(r, 1))²`.
#[inline]
pub fn angular_speed(base_speed: f32, semi_major: f32, r: f32) -> f32 {
    let ratio = semi_major / r.max(MIN_RADIUS);
    base_speed * ratio * ratio
}

/// Rotate an in-plane point by inclination (about x), then by node (about z).
pub fn orient(p: Vec3, inclination: f32, node: f32) -> Vec3 {
    let (sin_i, cos_i) = inclination.sin_cos();
    let y = p.y * cos_i - p.z * sin_i;
    let z = p.y * sin_i + p.z * cos_i;
    let x = p.x;

    let (sin_n, cos_n) = node.sin_cos();
    Vec3::new(x * cos_n - y * sin_n, x * sin_n + y * cos_n, z)
}

/// Reduce an angle to `[0, 2π)`.
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f32::consts::PI;

    fn circular(semi_major: f32) -> Particle {
        Particle {
            semi_major,
            eccentricity: 0.0,
            angle: 0.0,
            arg_periapsis: 0.0,
            base_speed: 0.01,
            inclination: 0.0,
            node: 0.0,
            color: Rgb::WHITE,
            position: Vec3::ZERO,
            screen: Vec2::ZERO,
            depth: 1.0,
            view_z: 0.0,
            jump_cooldown: 100,
        }
    }

    #[test]
    fn test_radius_matches_ellipse_extremes() {
        let (a, e) = (190.0, 0.2);
        assert!((orbital_radius(a, e, 0.0) - a * (1.0 - e)).abs() < 1e-3);
        assert!((orbital_radius(a, e, PI) - a * (1.0 + e)).abs() < 1e-3);
    }

    #[test]
    fn test_radius_bounded_for_sampled_angles() {
        for &a in &[80.0f32, 130.0, 190.0, 255.0, 320.0] {
            for &e in &[0.05f32, 0.15, 0.28] {
                for k in 0..64 {
                    let theta = k as f32 / 64.0 * TAU;
                    let r = orbital_radius(a, e, theta);
                    assert!(r > 0.0);
                    assert!(r >= a * (1.0 - e) - 1e-3, "r={r} below periapsis");
                    assert!(r <= a * (1.0 + e) + 1e-3, "r={r} above apoapsis");
                }
            }
        }
    }

    #[test]
    fn test_angular_speed_increases_toward_periapsis() {
        let (a, e, base) = (255.0, 0.25, 0.006);
        let near = orbital_radius(a, e, 0.1);
        let far = orbital_radius(a, e, 2.5);
        assert!(near < far);
        assert!(angular_speed(base, a, near) > angular_speed(base, a, far));
    }

    #[test]
    fn test_angular_speed_floors_radius() {
        assert_eq!(angular_speed(0.01, 100.0, 0.0), angular_speed(0.01, 100.0, 1.0));
        assert!(angular_speed(0.01, 100.0, 1e-9).is_finite());
    }

    #[test]
    fn test_circular_orbit_stays_on_radius() {
        let config = AtomConfig::default();
        let mut p = circular(130.0);
        for _ in 0..500 {
            p.step(&config);
            assert!((p.position.length() - 130.0).abs() < 1e-2);
            assert_eq!(p.position.z, 0.0);
        }
    }

    #[test]
    fn test_inclined_orbit_leaves_plane() {
        let config = AtomConfig::default();
        let mut p = circular(130.0);
        p.inclination = 0.8;
        p.angle = PI / 2.0;
        p.step(&config);
        assert!(p.position.z.abs() > 1.0);
        assert!((p.position.length() - 130.0).abs() < 1e-2);
    }

    #[test]
    fn test_orient_identity_and_node_rotation() {
        let p = Vec3::new(10.0, 0.0, 0.0);
        assert!(orient(p, 0.0, 0.0).abs_diff_eq(p, 1e-5));
        let rotated = orient(p, 0.0, PI / 2.0);
        assert!(rotated.abs_diff_eq(Vec3::new(0.0, 10.0, 0.0), 1e-4));
    }

    #[test]
    fn test_step_wraps_angles_and_precesses() {
        let config = AtomConfig::default();
        let mut p = circular(80.0);
        p.angle = TAU - 0.001;
        let before = p.arg_periapsis;
        p.step(&config);
        assert!((0.0..TAU).contains(&p.angle));
        let expected = config.precession * (config.precession_reference / 80.0);
        assert!((p.arg_periapsis - before - expected).abs() < 1e-6);
    }

    #[test]
    fn test_spawn_respects_config_ranges() {
        let config = AtomConfig::default();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..200 {
            let p = Particle::spawn(&mut rng, &config);
            assert!(config.orbit_radii.contains(&p.semi_major));
            assert!((0.05..=0.28).contains(&p.eccentricity));
            assert!((-0.9..=0.9).contains(&p.inclination));
            assert!(config.spawn_cooldown.contains(&p.jump_cooldown));
            assert!(config.palette.colors().contains(&p.color));
            // Smaller orbits spin faster.
            let unscaled = p.base_speed * p.semi_major / config.speed_reference;
            assert!((0.004 - 1e-6..=0.01 + 1e-6).contains(&unscaled));
        }
    }

    #[test]
    fn test_wrap_angle() {
        assert_eq!(wrap_angle(0.0), 0.0);
        assert!((wrap_angle(TAU + 1.0) - 1.0).abs() < 1e-5);
        assert!((wrap_angle(-1.0) - (TAU - 1.0)).abs() < 1e-5);
        assert!(wrap_angle(-1e-9) < TAU);
    }
}
