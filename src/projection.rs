//! Perspective projection for the orbiting camera.
//!
//! The camera never moves in world space. Instead the whole atom is wobbled,
//! spun about the vertical axis and tilted about the horizontal axis, then
//! divided by a simple pinhole term:
//!
//! ```text
//! depth  = D / (D + z + P)
//! screen = (x, y) · depth · (1 + breath · sin(zoom_phase))
//! ```
//!
//! Larger camera-space `z` is farther away and yields a smaller `depth`.

use glam::{Vec2, Vec3};

use crate::config::AtomConfig;
use crate::orbital::{wrap_angle, Particle};

/// Smallest allowed perspective denominator.
pub const DEPTH_EPSILON: f32 = 1e-3;

/// Global camera phases, advanced once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraState {
    /// Rotation about the vertical axis.
    pub spin: f32,
    /// Rotation about the horizontal axis.
    pub tilt: f32,
    /// Phase of the zoom breathing.
    pub zoom_phase: f32,
    /// Phase of the orbital-plane wobble.
    pub wobble_phase: f32,
}

impl CameraState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one tick's worth of each rate, keeping every phase in `[0, 2π)`.
    pub fn advance(&mut self, config: &AtomConfig) {
        self.spin = wrap_angle(self.spin + config.spin_rate);
        self.tilt = wrap_angle(self.tilt + config.tilt_rate);
        self.zoom_phase = wrap_angle(self.zoom_phase + config.zoom_rate);
        self.wobble_phase = wrap_angle(self.wobble_phase + config.wobble_rate);
    }

    /// Current zoom multiplier.
    pub fn zoom(&self, config: &AtomConfig) -> f32 {
        1.0 + config.breath_amplitude * self.zoom_phase.sin()
    }
}

/// Result of projecting one point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// Screen position, centered, y up.
    pub screen: Vec2,
    /// Perspective scale factor.
    pub depth: f32,
    /// Camera-space z; larger is farther.
    pub view_z: f32,
}

/// Rotate a world point into camera space.
///
/// `phase` offsets the wobble per particle so the atom does not pulse in
/// lockstep.
pub fn to_view(position: Vec3, phase: f32, camera: &CameraState, config: &AtomConfig) -> Vec3 {
    let wobble = 1.0 + config.wobble_amplitude * (camera.wobble_phase + phase).sin();
    let xw = position.x * wobble;
    let zw = position.z * wobble;

    let (sin_s, cos_s) = camera.spin.sin_cos();
    let x = xw * cos_s + zw * sin_s;
    let z = -xw * sin_s + zw * cos_s;

    let (sin_t, cos_t) = camera.tilt.sin_cos();
    let y = position.y * cos_t - z * sin_t;
    let z = position.y * sin_t + z * cos_t;

    Vec3::new(x, y, z)
}

/// Perspective scale for a camera-space depth.
#[inline]
pub fn depth_for_z(z: f32, config: &AtomConfig) -> f32 {
    let denominator = (config.camera_distance + z + config.perspective).max(DEPTH_EPSILON);
    config.camera_distance / denominator
}

/// Project a world point through the camera.
pub fn project_point(
    position: Vec3,
    phase: f32,
    camera: &CameraState,
    config: &AtomConfig,
) -> Projected {
    let view = to_view(position, phase, camera, config);
    let depth = depth_for_z(view.z, config);
    let zoom = camera.zoom(config);

    Projected {
        screen: Vec2::new(view.x, view.y) * depth * zoom,
        depth,
        view_z: view.z,
    }
}

/// Project a particle and store the result on it.
pub fn project_particle(particle: &mut Particle, camera: &CameraState, config: &AtomConfig) {
    let projected = project_point(particle.position, particle.angle, camera, config);
    particle.screen = projected.screen;
    particle.depth = projected.depth;
    particle.view_z = projected.view_z;
}

/// Indices of `particles` in painter's order.
///
/// Sorted by camera-space z ascending; ties keep their original order, so
/// particles sharing a z are painted by index.
pub fn draw_order(particles: &[Particle]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..particles.len()).collect();
    order.sort_by(|&a, &b| particles[a].view_z.total_cmp(&particles[b].view_z));
    order
}
