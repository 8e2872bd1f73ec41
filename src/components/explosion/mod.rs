//! Pointer-press particle explosions.
//!
//! Every press on the page releases a burst of brightly colored particles
//! that fan out, fall under a tick-based gravity and vanish once they leave
//! the viewport. The pieces:
//! - [`Particle`] moves along a fixed heading and draws itself as a disc
//! - [`Burst`] owns the particles of one press and culls those out of bounds
//! - [`EffectController`] runs the frame loop only while bursts are alive,
//!   drawing off-screen and compositing onto the visible surface
//!
//! The controller is generic over [`Surface`] and [`FrameScheduler`], so it
//! runs the same on an HTML canvas with `requestAnimationFrame` as on a
//! [`PixelSurface`] driven by hand.
//!
//! # Example
//!
//! ```ignore
//! use burst_fx::ExplosionOverlay;
//!
//! view! { <ExplosionOverlay /> }
//! ```

mod burst;
mod component;
mod config;
mod controller;
mod error;
pub mod palette;
mod particle;
mod raster;
mod scheduler;
mod surface;

pub use burst::{Burst, Viewport};
pub use component::{ExplosionOverlay, install};
pub use config::{DEFAULT_PARTICLE_COUNT, EffectConfig, MAX_PARTICLE_COUNT};
pub use controller::EffectController;
pub use error::EffectError;
pub use particle::{GRAVITY, PARTICLE_RADIUS, Particle, Point};
pub use raster::PixelSurface;
pub use scheduler::{AnimationFrames, FrameCallback, FrameScheduler};
pub use surface::{CanvasSurface, Surface};
