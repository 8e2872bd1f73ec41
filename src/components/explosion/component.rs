//! Leptos component and browser wiring for the explosion overlay.
//!
//! The component renders the visible canvas. Once it is mounted, `install`
//! creates the detached compute canvas, the controller, and the window
//! listeners for presses, resizes and page hide. Pointer and frame closures
//! only hold weak references; the one-shot `pagehide` listener owns the
//! controller and releases everything when it fires.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, HtmlCanvasElement, PointerEvent, Window};

use super::burst::Viewport;
use super::config::EffectConfig;
use super::controller::EffectController;
use super::error::EffectError;
use super::scheduler::{AnimationFrames, FrameCallback};
use super::surface::CanvasSurface;

const OVERLAY_STYLE: &str =
	"position: fixed; top: 0; left: 0; display: block; pointer-events: none; z-index: 2147483647;";

type WebController = EffectController<CanvasSurface, AnimationFrames>;

fn viewport_of(window: &Window) -> Result<Viewport, EffectError> {
	let dimension = |value: Result<JsValue, JsValue>| -> Result<f64, EffectError> {
		value
			.map_err(EffectError::dom)?
			.as_f64()
			.ok_or_else(|| EffectError::Dom("viewport dimension is not a number".into()))
	};
	Ok(Viewport::new(
		dimension(window.inner_width())?,
		dimension(window.inner_height())?,
	))
}

/// Wire the effect to `visible` and the current window.
pub fn install(visible: HtmlCanvasElement, config: EffectConfig) -> Result<(), EffectError> {
	let window = web_sys::window().ok_or(EffectError::NoWindow)?;
	let document = window.document().ok_or(EffectError::NoDocument)?;
	let viewport = viewport_of(&window)?;

	let visible = CanvasSurface::new(visible)?;
	let compute = CanvasSurface::detached(&document)?;
	let frame_cb: FrameCallback = Rc::new(RefCell::new(None));
	let scheduler = AnimationFrames::new(window.clone(), frame_cb.clone());

	let controller: Rc<RefCell<WebController>> = Rc::new(RefCell::new(EffectController::new(
		compute, visible, scheduler, viewport, config,
	)));

	let frame_target = Rc::downgrade(&controller);
	*frame_cb.borrow_mut() = Some(Closure::new(move || {
		if let Some(c) = frame_target.upgrade() {
			c.borrow_mut().on_frame();
		}
	}));

	let press_target = Rc::downgrade(&controller);
	let on_press = Closure::<dyn FnMut(PointerEvent)>::new(move |ev: PointerEvent| {
		if let Some(c) = press_target.upgrade() {
			c.borrow_mut().press(ev.client_x() as f64, ev.client_y() as f64);
		}
	});
	window
		.add_event_listener_with_callback("pointerdown", on_press.as_ref().unchecked_ref())
		.map_err(EffectError::dom)?;

	let resize_target = Rc::downgrade(&controller);
	let on_resize = Closure::<dyn FnMut()>::new(move || {
		let (Some(c), Some(win)) = (resize_target.upgrade(), web_sys::window()) else {
			return;
		};
		if let Ok(v) = viewport_of(&win) {
			c.borrow_mut().resize(v.width, v.height);
		}
	});
	if let Err(e) =
		window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
	{
		let _ = window
			.remove_event_listener_with_callback("pointerdown", on_press.as_ref().unchecked_ref());
		return Err(EffectError::dom(e));
	}

	let hide_window = window.clone();
	let on_hide = Closure::once_into_js(move || {
		let _ = hide_window
			.remove_event_listener_with_callback("pointerdown", on_press.as_ref().unchecked_ref());
		let _ = hide_window
			.remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
		// Cancel before the frame closure is dropped.
		controller.borrow_mut().teardown();
		frame_cb.borrow_mut().take();
		info!("burst-fx: torn down on page hide");
	});
	let options = AddEventListenerOptions::new();
	options.set_once(true);
	// The listener closures live inside `on_hide`, so they stay valid even
	// if it never gets registered.
	if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
		"pagehide",
		on_hide.unchecked_ref(),
		&options,
	) {
		warn!("burst-fx: no teardown on page hide: {}", EffectError::dom(e));
	}

	Ok(())
}

/// Full-viewport canvas that shows an explosion wherever the page is pressed.
///
/// The canvas sits above all other content and lets pointer input through.
/// If the browser cannot provide what the effect needs, the failure is
/// logged and the overlay stays empty.
#[component]
pub fn ExplosionOverlay(#[prop(optional)] config: Option<EffectConfig>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		match install(canvas, config.clone().unwrap_or_default()) {
			Ok(()) => info!("burst-fx: overlay installed"),
			Err(e) => error!("burst-fx: effect disabled: {e}"),
		}
	});

	view! { <canvas node_ref=canvas_ref class="burst-fx-overlay" style=OVERLAY_STYLE /> }
}
