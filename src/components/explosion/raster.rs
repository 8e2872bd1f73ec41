//! Headless software surface.
//!
//! Stores packed `0xRRGGBBAA` pixels. Circles are drawn opaque by testing
//! pixel centers against the radius; compositing copies every non-transparent
//! source pixel, which is source-over for opaque content.

use super::palette::Color;
use super::surface::Surface;

const TRANSPARENT: u32 = 0;

fn pack(color: Color) -> u32 {
	let alpha = (color.a.clamp(0.0, 1.0) * 255.0).round() as u32;
	(color.r as u32) << 24 | (color.g as u32) << 16 | (color.b as u32) << 8 | alpha
}

fn unpack(pixel: u32) -> Color {
	Color {
		r: (pixel >> 24) as u8,
		g: (pixel >> 16) as u8,
		b: (pixel >> 8) as u8,
		a: (pixel & 0xFF) as f64 / 255.0,
	}
}

/// An in-memory RGBA surface.
#[derive(Clone, Debug)]
pub struct PixelSurface {
	width: u32,
	height: u32,
	pixels: Vec<u32>,
}

impl PixelSurface {
	pub fn new(width: u32, height: u32) -> Self {
		Self {
			width,
			height,
			pixels: vec![TRANSPARENT; width as usize * height as usize],
		}
	}

	fn index(&self, x: u32, y: u32) -> Option<usize> {
		(x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
	}

	/// Color at `(x, y)`, or `None` when transparent or out of range.
	pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
		let pixel = self.pixels[self.index(x, y)?];
		(pixel != TRANSPARENT).then(|| unpack(pixel))
	}

	/// All painted pixels in row-major order.
	pub fn painted(&self) -> impl Iterator<Item = Color> + '_ {
		self.pixels
			.iter()
			.filter(|&&p| p != TRANSPARENT)
			.map(|&p| unpack(p))
	}

	pub fn is_blank(&self) -> bool {
		self.pixels.iter().all(|&p| p == TRANSPARENT)
	}
}

impl Surface for PixelSurface {
	fn size(&self) -> (u32, u32) {
		(self.width, self.height)
	}

	fn resize(&mut self, width: u32, height: u32) {
		*self = Self::new(width, height);
	}

	fn clear(&mut self) {
		self.pixels.fill(TRANSPARENT);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
		// Unparseable tokens paint nothing, like an invalid canvas fillStyle.
		let Some(color) = Color::parse_hex(color) else {
			return;
		};
		let packed = pack(color);
		let r2 = radius * radius;

		let x0 = (x - radius).floor().max(0.0) as i64;
		let y0 = (y - radius).floor().max(0.0) as i64;
		let x1 = ((x + radius).ceil() as i64).min(self.width as i64 - 1);
		let y1 = ((y + radius).ceil() as i64).min(self.height as i64 - 1);

		for py in y0..=y1 {
			for px in x0..=x1 {
				let (dx, dy) = (px as f64 + 0.5 - x, py as f64 + 0.5 - y);
				if dx * dx + dy * dy <= r2 {
					let idx = py as usize * self.width as usize + px as usize;
					self.pixels[idx] = packed;
				}
			}
		}
	}

	fn composite(&mut self, source: &Self) {
		for y in 0..self.height.min(source.height) {
			for x in 0..self.width.min(source.width) {
				let src = source.pixels[y as usize * source.width as usize + x as usize];
				if src != TRANSPARENT {
					let idx = y as usize * self.width as usize + x as usize;
					self.pixels[idx] = src;
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_surface_is_blank() {
		let s = PixelSurface::new(4, 3);
		assert_eq!(s.size(), (4, 3));
		assert!(s.is_blank());
		assert!(s.pixel(4, 0).is_none());
	}

	#[test]
	fn circles_are_clipped_to_the_surface() {
		let mut s = PixelSurface::new(10, 10);
		s.fill_circle(-1.0, -1.0, 3.0, "#FFFFFF");
		s.fill_circle(9.5, 9.5, 3.0, "#FFFFFF");
		s.fill_circle(500.0, 500.0, 2.0, "#FFFFFF");
		assert!(s.pixel(0, 0).is_some());
		assert!(s.pixel(9, 9).is_some());
		assert!(s.pixel(5, 5).is_none());
	}

	#[test]
	fn invalid_color_paints_nothing() {
		let mut s = PixelSurface::new(10, 10);
		s.fill_circle(5.0, 5.0, 2.0, "tomato");
		assert!(s.is_blank());
	}

	#[test]
	fn composite_copies_only_painted_pixels() {
		let mut compute = PixelSurface::new(10, 10);
		let mut visible = PixelSurface::new(10, 10);
		visible.fill_circle(1.0, 1.0, 1.0, "#888888");
		compute.fill_circle(8.0, 8.0, 1.0, "#FFEEDD");

		visible.composite(&compute);

		assert_eq!(visible.pixel(0, 0), Some(Color::rgb(0x88, 0x88, 0x88)));
		assert_eq!(visible.pixel(8, 8), Some(Color::rgb(0xFF, 0xEE, 0xDD)));
	}

	#[test]
	fn resize_and_clear_discard_content() {
		let mut s = PixelSurface::new(10, 10);
		s.fill_circle(5.0, 5.0, 2.0, "#FFFFFF");
		s.clear();
		assert!(s.is_blank());

		s.fill_circle(5.0, 5.0, 2.0, "#FFFFFF");
		s.resize(20, 5);
		assert_eq!(s.size(), (20, 5));
		assert!(s.is_blank());
	}
}
