//! Frame scheduling.
//!
//! The controller asks its scheduler for one frame at a time and keeps the
//! returned handle until the frame fires or is cancelled.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use super::error::EffectError;

/// A host primitive that invokes a callback once on the next display refresh.
pub trait FrameScheduler {
	/// Opaque, cancellable token for one scheduled frame.
	type Handle;

	/// Schedule the next frame.
	fn request_frame(&mut self) -> Result<Self::Handle, EffectError>;

	/// Cancel a scheduled frame. A handle that already fired is ignored.
	fn cancel(&mut self, handle: Self::Handle);
}

/// Shared slot holding the closure `requestAnimationFrame` calls back into.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Schedules frames with `window.requestAnimationFrame`.
pub struct AnimationFrames {
	window: Window,
	callback: FrameCallback,
}

impl AnimationFrames {
	/// The callback slot is filled after the controller exists, since the
	/// closure needs a reference back to it.
	pub fn new(window: Window, callback: FrameCallback) -> Self {
		Self { window, callback }
	}
}

impl FrameScheduler for AnimationFrames {
	type Handle = i32;

	fn request_frame(&mut self) -> Result<i32, EffectError> {
		let slot = self.callback.borrow();
		let cb = slot
			.as_ref()
			.ok_or_else(|| EffectError::Dom("frame callback is not installed".into()))?;
		self.window
			.request_animation_frame(cb.as_ref().unchecked_ref())
			.map_err(EffectError::dom)
	}

	fn cancel(&mut self, handle: i32) {
		let _ = self.window.cancel_animation_frame(handle);
	}
}
