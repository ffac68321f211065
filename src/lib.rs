//! # Orbitals - procedural atom and logo animations
//!
//! Two small real-time animations, each split into a deterministic scene that
//! advances one tick at a time and a renderer that paints the scene onto a
//! [`RenderSurface`].
//!
//! - **Electron orbits**: electrons on tilted elliptical orbits around a
//!   nucleus, seen through a slowly spinning, breathing camera. Electrons
//!   occasionally jump between orbit levels and emit a photon, while a
//!   shockwave pulses outward from the center.
//! - **Logo glow**: a static logo surrounded by breathing glow rings and a
//!   drizzle of sparkles.
//!
//! ## Quick Start
//!
//! ```ignore
//! use orbitals::prelude::*;
//!
//! fn main() -> Result<(), RunError> {
//!     let config = AtomConfig::default().with_particle_count(48);
//!     run(AtomDemo::new(config))
//! }
//! ```
//!
//! ## Headless use
//!
//! Scenes do not need a window. Seed the config, tick the scene and paint it
//! into a [`RecordingSurface`] to inspect what would be drawn:
//!
//! ```
//! use orbitals::prelude::*;
//!
//! let mut scene = SceneState::new(AtomConfig::default().with_seed(7));
//! for _ in 0..50 {
//!     scene.tick();
//! }
//!
//! let mut surface = RecordingSurface::new();
//! AtomRenderer::with_seed(7).draw(&scene, &mut surface);
//! assert!(surface.dots().count() >= scene.particles.len() * 2);
//! ```
//!
//! ## Coordinates
//!
//! Every scene works in a plane centered on the window with y pointing up.
//! Surfaces map that plane to their own pixel space.

pub mod atom;
pub mod config;
pub mod error;
mod gpu;
pub mod logo;
pub mod orbital;
pub mod projection;
pub mod render;
pub mod scene;
pub mod time;
pub mod transition;
pub mod visuals;
pub mod window;

pub use atom::{AtomDemo, AtomRenderer};
pub use config::{AtomConfig, LogoConfig};
pub use error::{AssetError, GpuError, RunError};
pub use glam::{Vec2, Vec3};
pub use logo::{LogoDemo, LogoImage, LogoScene};
pub use orbital::Particle;
pub use projection::CameraState;
pub use render::{RecordingSurface, RenderSurface};
pub use scene::SceneState;
pub use transition::{Photon, Shockwave};
pub use visuals::{Palette, Rgb};
pub use window::{run, Demo};

/// Convenience re-exports for common usage.
///
/// ```
/// use orbitals::prelude::*;
/// ```
pub mod prelude {
    pub use crate::atom::{AtomDemo, AtomRenderer};
    pub use crate::config::{AtomConfig, LogoConfig};
    pub use crate::error::{AssetError, RunError};
    pub use crate::logo::{LogoDemo, LogoImage, LogoScene};
    pub use crate::orbital::Particle;
    pub use crate::projection::CameraState;
    pub use crate::render::{ImageHandle, RecordingSurface, RenderSurface, TextStyle};
    pub use crate::scene::SceneState;
    pub use crate::time::Time;
    pub use crate::transition::{Photon, Shockwave};
    pub use crate::visuals::{Palette, Rgb};
    pub use crate::window::{run, Demo};
    pub use crate::{Vec2, Vec3};
}
