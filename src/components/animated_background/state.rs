//! Scene state and the render loop lifecycle.
//!
//! [`Scene`] owns the particles and waves and is advanced once per frame.
//! [`RenderLoop`] drives a scene through `Uninitialized → Running → Stopped`,
//! asking a [`FrameHost`] for the viewport, the clock, frame scheduling and
//! resize notifications.

use log::{debug, info};

use super::particles::ParticleField;
use super::random::RandomSource;
use super::render;
use super::surface::Surface;
use super::theme::Theme;
use super::waves::WaveLayer;

/// Particles and waves for one mounted background.
///
/// Created when the view mounts, ticked every frame, dropped on teardown.
pub struct Scene {
	pub theme: Theme,
	pub particles: ParticleField,
	pub waves: WaveLayer,
	pub width: f64,
	pub height: f64,
}

impl Scene {
	/// Particles are created before waves, so a seeded source yields the same
	/// layout every time.
	pub fn init(theme: Theme, width: f64, height: f64, rng: &mut impl RandomSource) -> Self {
		let particles = ParticleField::new(&theme.particles, width, height, rng);
		let waves = WaveLayer::new(&theme.waves, width, height, rng);

		Self {
			theme,
			particles,
			waves,
			width,
			height,
		}
	}

	/// Moves waves to wall-clock time `time_ms` and advances particles one step.
	pub fn tick(&mut self, time_ms: f64) {
		self.waves.animate(time_ms);
		self.particles.update(self.width, self.height);
	}

	/// Changes the wrap bounds. Existing coordinates are left untouched.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

/// Opaque id of a scheduled frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

/// The environment a [`RenderLoop`] runs in.
pub trait FrameHost {
	/// Current viewport size in pixels.
	fn viewport(&self) -> (f64, f64);
	/// Wall-clock time in milliseconds.
	fn now(&self) -> f64;
	/// Schedules the frame callback for the next display refresh.
	fn request_frame(&mut self) -> Option<FrameHandle>;
	/// Drops a request made by [`FrameHost::request_frame`].
	fn cancel_frame(&mut self, handle: FrameHandle);
	/// Starts delivering viewport resizes to the loop.
	fn watch_resize(&mut self);
	/// Stops delivering viewport resizes.
	fn unwatch_resize(&mut self);
}

/// Lifecycle of a [`RenderLoop`].
pub enum LoopState {
	Uninitialized,
	Running {
		scene: Scene,
		pending: Option<FrameHandle>,
	},
	Stopped,
}

/// Drives a [`Scene`] onto a [`Surface`], one frame per host refresh.
pub struct RenderLoop<S: Surface, H: FrameHost> {
	surface: S,
	host: H,
	theme: Theme,
	state: LoopState,
}

impl<S: Surface, H: FrameHost> RenderLoop<S, H> {
	pub fn new(surface: S, host: H, theme: Theme) -> Self {
		Self {
			surface,
			host,
			theme,
			state: LoopState::Uninitialized,
		}
	}

	/// Sizes the surface to the viewport, builds the scene, subscribes to
	/// resizes and paints the first frame right away. Only valid once.
	pub fn mount(&mut self, rng: &mut impl RandomSource) {
		if !matches!(self.state, LoopState::Uninitialized) {
			debug!("marketvision: render loop already mounted");
			return;
		}

		let (w, h) = self.host.viewport();
		self.surface.resize(w, h);
		let scene = Scene::init(self.theme.clone(), w, h, rng);
		info!(
			"marketvision: background mounted at {}x{} ({} particles, {} waves)",
			w,
			h,
			scene.particles.len(),
			scene.waves.waves.len()
		);

		self.host.watch_resize();
		self.state = LoopState::Running {
			scene,
			pending: None,
		};
		self.frame();
	}

	/// Advances and paints one frame, then schedules the next.
	///
	/// Does nothing unless running, so a callback that slips through after
	/// teardown is harmless.
	pub fn frame(&mut self) {
		let LoopState::Running { scene, pending } = &mut self.state else {
			return;
		};

		scene.tick(self.host.now());
		render::render(scene, &mut self.surface);
		*pending = self.host.request_frame();
	}

	/// Follows the viewport size without rescaling the scene.
	pub fn resize(&mut self) {
		let LoopState::Running { scene, .. } = &mut self.state else {
			return;
		};

		let (w, h) = self.host.viewport();
		self.surface.resize(w, h);
		scene.resize(w, h);
		debug!("marketvision: background resized to {}x{}", w, h);
	}

	/// Cancels the pending frame, drops the resize subscription and the scene.
	pub fn unmount(&mut self) {
		if let LoopState::Running { pending, .. } = &self.state {
			if let Some(handle) = *pending {
				self.host.cancel_frame(handle);
			}
			self.host.unwatch_resize();
			info!("marketvision: background stopped");
		}
		self.state = LoopState::Stopped;
	}

	pub fn state(&self) -> &LoopState {
		&self.state
	}

	pub fn is_running(&self) -> bool {
		matches!(self.state, LoopState::Running { .. })
	}

	pub fn scene(&self) -> Option<&Scene> {
		match &self.state {
			LoopState::Running { scene, .. } => Some(scene),
			_ => None,
		}
	}

	pub fn surface(&self) -> &S {
		&self.surface
	}

	pub fn host(&self) -> &H {
		&self.host
	}
}
