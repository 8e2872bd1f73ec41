//! Tunable effect parameters.
//!
//! The page may embed them as JSON; every key is optional and camelCase:
//!
//! ```json
//! { "particleCount": 24, "maxSpeed": 8.0 }
//! ```

use log::warn;
use serde::Deserialize;

use super::error::EffectError;

/// Particles spawned per press unless configured otherwise.
pub const DEFAULT_PARTICLE_COUNT: usize = 10;

/// Upper bound on particles per press; larger requests are clamped.
pub const MAX_PARTICLE_COUNT: usize = 1_000;

/// Parameters shared by every burst the controller creates.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct EffectConfig {
	/// Particles per burst.
	pub particle_count: usize,
	/// Radius of each drawn particle, in pixels.
	pub particle_radius: f64,
	/// Lower bound of the uniform speed draw, in pixels per tick.
	pub min_speed: f64,
	/// Upper bound of the uniform speed draw, in pixels per tick.
	pub max_speed: f64,
	/// Half-width of the heading cone around pi, in radians.
	pub spread: f64,
	/// Per-tick growth of the downward bias.
	pub gravity: f64,
}

impl Default for EffectConfig {
	fn default() -> Self {
		Self {
			particle_count: DEFAULT_PARTICLE_COUNT,
			particle_radius: 2.0,
			min_speed: 1.0,
			max_speed: 6.0,
			spread: 1.0,
			gravity: 0.3,
		}
	}
}

impl EffectConfig {
	/// Parse a JSON object and sanitize it.
	pub fn from_json(json: &str) -> Result<Self, EffectError> {
		let config: Self = serde_json::from_str(json)?;
		Ok(config.sanitized())
	}

	/// Replace values the simulation cannot run with by their defaults.
	///
	/// Gravity must stay positive: the top edge never culls, so without a
	/// downward pull a burst could live forever.
	pub fn sanitized(mut self) -> Self {
		let defaults = Self::default();

		if self.particle_count > MAX_PARTICLE_COUNT {
			warn!(
				"burst-fx: particleCount {} clamped to {}",
				self.particle_count, MAX_PARTICLE_COUNT
			);
			self.particle_count = MAX_PARTICLE_COUNT;
		}
		if !(self.particle_radius.is_finite() && self.particle_radius > 0.0) {
			warn!("burst-fx: invalid particleRadius {}, using default", self.particle_radius);
			self.particle_radius = defaults.particle_radius;
		}
		let speeds_ok = self.min_speed.is_finite()
			&& self.max_speed.is_finite()
			&& self.min_speed > 0.0
			&& self.min_speed <= self.max_speed;
		if !speeds_ok {
			warn!(
				"burst-fx: invalid speed range {}..={}, using default",
				self.min_speed, self.max_speed
			);
			self.min_speed = defaults.min_speed;
			self.max_speed = defaults.max_speed;
		}
		if !(self.spread.is_finite() && self.spread >= 0.0) {
			warn!("burst-fx: invalid spread {}, using default", self.spread);
			self.spread = defaults.spread;
		}
		if !(self.gravity.is_finite() && self.gravity > 0.0) {
			warn!("burst-fx: invalid gravity {}, using default", self.gravity);
			self.gravity = defaults.gravity;
		}
		self
	}
}
