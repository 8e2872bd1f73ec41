//! Drawing surfaces.
//!
//! The controller draws every burst onto an off-screen compute surface and
//! then blits that surface onto the visible one in a single composite.
//! [`CanvasSurface`] is the browser implementation; see
//! [`PixelSurface`](super::raster::PixelSurface) for the headless one.

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use super::error::EffectError;

/// A 2D target the effect can paint on.
pub trait Surface {
	/// Current size in pixels.
	fn size(&self) -> (u32, u32);

	/// Resize the surface. Existing content is discarded.
	fn resize(&mut self, width: u32, height: u32);

	/// Erase the whole surface to transparent.
	fn clear(&mut self);

	/// Fill a circle centered at `(x, y)` with a CSS color token.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str);

	/// Draw all of `source` onto this surface at the origin (source-over).
	fn composite(&mut self, source: &Self);
}

/// An HTML canvas with its 2D context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Wrap a canvas, acquiring its 2D context.
	pub fn new(canvas: HtmlCanvasElement) -> Result<Self, EffectError> {
		let ctx = canvas
			.get_context("2d")
			.map_err(EffectError::dom)?
			.ok_or(EffectError::ContextUnavailable)?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(|_| EffectError::ContextUnavailable)?;
		Ok(Self { canvas, ctx })
	}

	/// Create a canvas that is never attached to the document.
	pub fn detached(document: &Document) -> Result<Self, EffectError> {
		let canvas = document
			.create_element("canvas")
			.map_err(|e| EffectError::CanvasCreation(format!("{e:?}")))?
			.dyn_into::<HtmlCanvasElement>()
			.map_err(|e| EffectError::CanvasCreation(format!("{e:?}")))?;
		Self::new(canvas)
	}
}

impl Surface for CanvasSurface {
	fn size(&self) -> (u32, u32) {
		(self.canvas.width(), self.canvas.height())
	}

	fn resize(&mut self, width: u32, height: u32) {
		self.canvas.set_width(width);
		self.canvas.set_height(height);
	}

	fn clear(&mut self) {
		let (w, h) = self.size();
		self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
		self.ctx.set_fill_style_str(color);
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, TAU);
		self.ctx.fill();
	}

	fn composite(&mut self, source: &Self) {
		let _ = self
			.ctx
			.draw_image_with_html_canvas_element(&source.canvas, 0.0, 0.0);
	}
}
