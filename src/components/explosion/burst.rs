//! A group of particles released together from one press.

use std::f64::consts::PI;

use log::warn;
use rand::Rng;

use super::config::EffectConfig;
use super::palette::random_bright_color;
use super::particle::{Particle, Point};
use super::surface::Surface;

/// Width and height of the area particles may occupy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

impl Viewport {
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Off the left, right or bottom edge. The top edge is open: particles
	/// thrown upward come back down.
	pub fn is_outside(&self, p: Point) -> bool {
		p.x < 0.0 || p.x > self.width || p.y > self.height
	}
}

/// Particles sharing an origin and a bounds snapshot taken at creation.
#[derive(Clone, Debug)]
pub struct Burst {
	origin: Point,
	particles: Vec<Particle>,
	bounds: Viewport,
	exhausted: bool,
	initialized: bool,
}

impl Burst {
	/// An empty burst. Call [`initialize`](Self::initialize) before stepping.
	pub fn new(origin: Point, bounds: Viewport) -> Self {
		Self {
			origin,
			particles: Vec::new(),
			bounds,
			exhausted: false,
			initialized: false,
		}
	}

	/// Create and initialize a burst with `config.particle_count` particles.
	pub fn spawn<R: Rng + ?Sized>(
		origin: Point,
		bounds: Viewport,
		config: &EffectConfig,
		rng: &mut R,
	) -> Self {
		let mut burst = Self::new(origin, bounds);
		burst.initialize(config.particle_count, config, rng);
		burst
	}

	/// Populate the burst with `count` particles fanned out around pi.
	///
	/// Runs once; later calls are ignored.
	pub fn initialize<R: Rng + ?Sized>(&mut self, count: usize, config: &EffectConfig, rng: &mut R) {
		if self.initialized {
			warn!("burst-fx: burst at ({}, {}) already initialized", self.origin.x, self.origin.y);
			return;
		}
		self.initialized = true;

		self.particles.reserve_exact(count);
		for _ in 0..count {
			let angle = rng.gen_range(PI - config.spread..=PI + config.spread);
			let speed = rng.gen_range(config.min_speed..=config.max_speed);
			let particle = Particle::new(self.origin, random_bright_color(rng), speed, angle)
				.with_gravity(config.gravity)
				.with_radius(config.particle_radius);
			self.particles.push(particle);
		}
	}

	/// Advance every particle, dropping those that left the bounds.
	pub fn step(&mut self) {
		let bounds = self.bounds;
		self.particles.retain_mut(|p| {
			p.step();
			!bounds.is_outside(p.position())
		});
		self.exhausted |= self.particles.is_empty();
	}

	pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
		for p in &self.particles {
			p.render(surface);
		}
	}

	pub fn origin(&self) -> Point {
		self.origin
	}

	pub fn bounds(&self) -> Viewport {
		self.bounds
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// True once a step has left the burst without particles. Never reverts.
	pub fn is_exhausted(&self) -> bool {
		self.exhausted
	}
}
