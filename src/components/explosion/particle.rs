//! A single explosion particle.

use super::surface::Surface;

/// Downward bias added per elapsed tick, in pixels per tick.
pub const GRAVITY: f64 = 0.3;

/// Radius of the circle each particle is drawn as.
pub const PARTICLE_RADIUS: f64 = 2.0;

/// A position in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// A point moving along a fixed heading with a tick-based gravity bias.
///
/// Motion is tied to the number of ticks, not wall-clock time, so the effect
/// runs at whatever rate the host schedules frames.
#[derive(Clone, Debug)]
pub struct Particle {
	origin: Point,
	position: Point,
	color: String,
	speed: f64,
	angle: f64,
	gravity: f64,
	radius: f64,
	ticks_elapsed: u32,
}

impl Particle {
	/// Create a particle at `origin` heading along `angle` (radians, where
	/// `0` points down the y axis) at `speed` pixels per tick.
	pub fn new(origin: Point, color: String, speed: f64, angle: f64) -> Self {
		Self {
			origin,
			position: origin,
			color,
			speed,
			angle,
			gravity: GRAVITY,
			radius: PARTICLE_RADIUS,
			ticks_elapsed: 0,
		}
	}

	pub fn with_gravity(mut self, gravity: f64) -> Self {
		self.gravity = gravity;
		self
	}

	pub fn with_radius(mut self, radius: f64) -> Self {
		self.radius = radius;
		self
	}

	/// Advance one tick.
	pub fn step(&mut self) {
		self.position.x += self.angle.sin() * self.speed;
		self.position.y += self.angle.cos() * self.speed + self.ticks_elapsed as f64 * self.gravity;
		self.ticks_elapsed += 1;
	}

	pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
		surface.fill_circle(self.position.x, self.position.y, self.radius, &self.color);
	}

	pub fn origin(&self) -> Point {
		self.origin
	}

	pub fn position(&self) -> Point {
		self.position
	}

	pub fn color(&self) -> &str {
		&self.color
	}

	pub fn speed(&self) -> f64 {
		self.speed
	}

	pub fn angle(&self) -> f64 {
		self.angle
	}

	pub fn ticks_elapsed(&self) -> u32 {
		self.ticks_elapsed
	}
}

#[cfg(test)]
mod tests {
	use std::f64::consts::PI;

	use super::*;
	use crate::components::explosion::raster::PixelSurface;

	fn close(a: f64, b: f64) -> bool {
		(a - b).abs() < 1e-9
	}

	#[test]
	fn fresh_particle_sits_on_its_origin() {
		let p = Particle::new(Point::new(10.0, 20.0), "#FFFFFF".into(), 3.0, PI);
		assert_eq!(p.position(), p.origin());
		assert_eq!(p.ticks_elapsed(), 0);
	}

	#[test]
	fn step_accumulates_to_closed_form() {
		let origin = Point::new(100.0, 100.0);
		for &(speed, angle) in &[(1.0, PI - 1.0), (6.0, PI + 1.0), (3.5, PI), (2.25, PI + 0.3)] {
			let mut p = Particle::new(origin, "#88AAFF".into(), speed, angle);
			for n in 1..=50u32 {
				p.step();
				let n_f = n as f64;
				let gravity_sum = GRAVITY * (n_f - 1.0) * n_f / 2.0;
				let dx = p.position().x - origin.x;
				let dy = p.position().y - origin.y;
				assert!(close(dx, n_f * angle.sin() * speed), "dx at tick {n}");
				let expected_dy = n_f * angle.cos() * speed + gravity_sum;
				assert!((dy - expected_dy).abs() < 1e-6, "dy at tick {n}: {dy} vs {expected_dy}");
				assert_eq!(p.ticks_elapsed(), n);
			}
			assert_eq!(p.origin(), origin);
		}
	}

	#[test]
	fn first_step_has_no_gravity() {
		let mut p = Particle::new(Point::new(0.0, 0.0), "#888888".into(), 2.0, PI);
		p.step();
		assert!(close(p.position().y, -2.0));
		p.step();
		assert!(close(p.position().y, -4.0 + GRAVITY));
	}

	#[test]
	fn custom_gravity_is_applied() {
		let mut p = Particle::new(Point::new(0.0, 0.0), "#888888".into(), 0.0, PI).with_gravity(1.0);
		for _ in 0..4 {
			p.step();
		}
		assert!(close(p.position().y, 6.0));
	}

	#[test]
	fn render_paints_a_disc_at_the_position() {
		let mut surface = PixelSurface::new(20, 20);
		let p = Particle::new(Point::new(10.0, 10.0), "#F8C8A8".into(), 1.0, PI).with_radius(2.0);
		p.render(&mut surface);

		let center = surface.pixel(10, 10).unwrap();
		assert_eq!(center.to_css_rgb(), "#F8C8A8");
		assert!(surface.pixel(0, 0).is_none());
		assert!(surface.pixel(15, 10).is_none());
	}
}
