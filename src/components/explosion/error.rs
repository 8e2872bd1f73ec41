//! Errors raised while wiring the effect into the page.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can keep the effect from starting.
///
/// None of these reach the host page: the overlay logs them and stays inert.
#[derive(Debug, Error)]
pub enum EffectError {
	#[error("no global window is available")]
	NoWindow,

	#[error("window has no document")]
	NoDocument,

	#[error("failed to create canvas: {0}")]
	CanvasCreation(String),

	#[error("2d rendering context is unavailable")]
	ContextUnavailable,

	#[error("DOM call failed: {0}")]
	Dom(String),

	#[error("invalid effect configuration: {0}")]
	InvalidConfig(#[from] serde_json::Error),
}

impl EffectError {
	pub(crate) fn dom(err: JsValue) -> Self {
		Self::Dom(format!("{err:?}"))
	}
}
