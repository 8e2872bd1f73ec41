//! burst-fx: particle explosions wherever the page is pressed.
//!
//! This crate provides a WASM overlay that draws a short-lived burst of
//! particles at every pointer press, on a canvas stacked above the page.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

#[cfg(target_arch = "wasm32")]
use getrandom as _;

pub mod components;

pub use components::explosion::{EffectConfig, EffectController, ExplosionOverlay};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("burst-fx: logging initialized");
}

/// Load effect settings from a script element with id="burst-config".
/// Expected format: JSON such as { "particleCount": 16, "gravity": 0.25 }
pub fn load_config() -> Option<EffectConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("burst-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match EffectConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"burst-fx: loaded config, {} particles per burst",
				config.particle_count
			);
			Some(config)
		}
		Err(e) => {
			warn!("burst-fx: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads the effect settings from the DOM and mounts the overlay.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="burst-fx" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<main class="burst-fx-page">
			<h1>"burst-fx"</h1>
			<p class="subtitle">"Click or tap anywhere."</p>
		</main>
		<ExplosionOverlay config=config />
	}
}
