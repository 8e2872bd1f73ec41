//! Burst lifecycle and the animation loop.
//!
//! The controller is either idle (no bursts, no frame scheduled) or running
//! (a frame is scheduled). A press starts the loop if it is idle. Each frame
//! schedules the next one before drawing, so the loop keeps itself alive
//! while bursts remain. Exhausted bursts are dropped one frame after they
//! drain, and the first frame that finds no bursts left lets the loop stop.

use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::burst::{Burst, Viewport};
use super::config::EffectConfig;
use super::particle::Point;
use super::scheduler::FrameScheduler;
use super::surface::Surface;

/// Owns the active bursts, both drawing surfaces and the frame loop.
pub struct EffectController<S: Surface, F: FrameScheduler> {
	bursts: Vec<Burst>,
	pending: Option<F::Handle>,
	viewport: Viewport,
	compute: S,
	visible: S,
	scheduler: F,
	config: EffectConfig,
	rng: StdRng,
	frames_rendered: u64,
}

impl<S: Surface, F: FrameScheduler> EffectController<S, F> {
	/// Create an idle controller with an entropy-seeded RNG.
	pub fn new(compute: S, visible: S, scheduler: F, viewport: Viewport, config: EffectConfig) -> Self {
		Self::with_rng(compute, visible, scheduler, viewport, config, StdRng::from_entropy())
	}

	/// Create an idle controller drawing randomness from `rng`.
	///
	/// Both surfaces are sized to `viewport`.
	pub fn with_rng(
		compute: S,
		visible: S,
		scheduler: F,
		viewport: Viewport,
		config: EffectConfig,
		rng: StdRng,
	) -> Self {
		let mut controller = Self {
			bursts: Vec::new(),
			pending: None,
			viewport,
			compute,
			visible,
			scheduler,
			config: config.sanitized(),
			rng,
			frames_rendered: 0,
		};
		controller.resize(viewport.width, viewport.height);
		controller
	}

	/// Release a burst at `(x, y)` bounded by the current viewport.
	pub fn press(&mut self, x: f64, y: f64) {
		let burst = Burst::spawn(Point::new(x, y), self.viewport, &self.config, &mut self.rng);
		debug!(
			"burst-fx: burst of {} at ({x}, {y}), {} active",
			burst.particles().len(),
			self.bursts.len() + 1
		);
		self.bursts.push(burst);

		if self.pending.is_none() && self.schedule() {
			debug!("burst-fx: animation loop started");
		}
	}

	/// Run one animation frame. The host calls this when a scheduled frame fires.
	pub fn on_frame(&mut self) {
		// The handle that brought us here has fired.
		self.pending = None;

		if self.bursts.is_empty() {
			debug!("burst-fx: animation loop idle");
			return;
		}
		self.schedule();

		self.compute.clear();
		self.visible.clear();

		self.bursts.retain(|b| !b.is_exhausted());
		for burst in self.bursts.iter_mut().rev() {
			burst.step();
			burst.render(&mut self.compute);
		}

		self.visible.composite(&self.compute);
		self.frames_rendered += 1;
	}

	/// Track a new viewport size. Existing bursts keep their own bounds.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.viewport = Viewport::new(width, height);
		let (w, h) = (width.max(0.0) as u32, height.max(0.0) as u32);
		self.compute.resize(w, h);
		self.visible.resize(w, h);
		debug!("burst-fx: viewport {w}x{h}");
	}

	/// Drop every burst, cancel the scheduled frame and clear the surfaces.
	pub fn teardown(&mut self) {
		self.bursts.clear();
		if let Some(handle) = self.pending.take() {
			self.scheduler.cancel(handle);
		}
		self.compute.clear();
		self.visible.clear();
		info!("burst-fx: effect reset");
	}

	/// True while a frame is scheduled and has not yet fired.
	pub fn is_running(&self) -> bool {
		self.pending.is_some()
	}

	pub fn bursts(&self) -> &[Burst] {
		&self.bursts
	}

	pub fn viewport(&self) -> Viewport {
		self.viewport
	}

	pub fn config(&self) -> &EffectConfig {
		&self.config
	}

	pub fn compute(&self) -> &S {
		&self.compute
	}

	pub fn visible(&self) -> &S {
		&self.visible
	}

	/// Frames that stepped and drew at least one burst.
	pub fn frames_rendered(&self) -> u64 {
		self.frames_rendered
	}

	fn schedule(&mut self) -> bool {
		match self.scheduler.request_frame() {
			Ok(handle) => {
				self.pending = Some(handle);
				true
			}
			Err(e) => {
				warn!("burst-fx: could not schedule a frame: {e}");
				false
			}
		}
	}
}
