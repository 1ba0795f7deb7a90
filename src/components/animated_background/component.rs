//! Leptos component wrapping the animated background canvas.
//!
//! The component creates a full-viewport canvas behind the page content and
//! hands it to a [`RenderLoop`]. Browser callbacks for `requestAnimationFrame`
//! and window `resize` are stored next to the loop and released on cleanup.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, Window};

use super::random::rng_from_seed;
use super::state::{FrameHandle, FrameHost, RenderLoop};
use super::surface::CanvasSurface;
use super::theme::Theme;

type Callback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;
type SharedLoop = Rc<RefCell<Option<RenderLoop<CanvasSurface, BrowserHost>>>>;

/// [`FrameHost`] backed by the browser window.
struct BrowserHost {
	window: Window,
	on_frame: Callback,
	on_resize: Callback,
}

impl FrameHost for BrowserHost {
	fn viewport(&self) -> (f64, f64) {
		let px = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
		(px(self.window.inner_width()), px(self.window.inner_height()))
	}

	fn now(&self) -> f64 {
		js_sys::Date::now()
	}

	fn request_frame(&mut self) -> Option<FrameHandle> {
		let guard = self.on_frame.borrow();
		let cb = guard.as_ref()?;
		self.window
			.request_animation_frame(cb.as_ref().unchecked_ref())
			.ok()
			.map(FrameHandle)
	}

	fn cancel_frame(&mut self, handle: FrameHandle) {
		let _ = self.window.cancel_animation_frame(handle.0);
	}

	fn watch_resize(&mut self) {
		if let Some(ref cb) = *self.on_resize.borrow() {
			let _ = self
				.window
				.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
	}

	fn unwatch_resize(&mut self) {
		if let Some(ref cb) = *self.on_resize.borrow() {
			let _ = self
				.window
				.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
	}
}

/// Full-viewport decorative animation of drifting particles over waves.
///
/// The canvas sits behind all content and ignores pointer input. Pass `seed`
/// for a reproducible layout.
#[component]
pub fn AnimatedBackground(
	#[prop(default = Theme::default())] theme: Theme,
	#[prop(default = None)] seed: Option<u64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let render_loop: SharedLoop = Rc::new(RefCell::new(None));
	let on_frame: Callback = Rc::new(RefCell::new(None));
	let on_resize: Callback = Rc::new(RefCell::new(None));
	let (loop_init, frame_init, resize_init) =
		(render_loop.clone(), on_frame.clone(), on_resize.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if loop_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(surface) = CanvasSurface::new(canvas) else {
			debug!("marketvision: no 2d canvas context, background disabled");
			return;
		};
		let Some(window) = web_sys::window() else {
			return;
		};

		let loop_frame = loop_init.clone();
		*frame_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut lp) = *loop_frame.borrow_mut() {
				lp.frame();
			}
		}));

		let loop_resize = loop_init.clone();
		*resize_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut lp) = *loop_resize.borrow_mut() {
				lp.resize();
			}
		}));

		let host = BrowserHost {
			window,
			on_frame: frame_init.clone(),
			on_resize: resize_init.clone(),
		};
		let mut lp = RenderLoop::new(surface, host, theme.clone());
		lp.mount(&mut rng_from_seed(seed));
		*loop_init.borrow_mut() = Some(lp);
	});

	// The closures hold the loop and the loop's host holds the closures;
	// dropping both cells here breaks the cycle.
	let teardown = SendWrapper::new((render_loop, on_frame, on_resize));
	on_cleanup(move || {
		let (render_loop, on_frame, on_resize) = teardown.take();
		if let Some(mut lp) = render_loop.borrow_mut().take() {
			lp.unmount();
		}
		on_frame.borrow_mut().take();
		on_resize.borrow_mut().take();
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="animated-background"
			aria-hidden="true"
			style="position: fixed; top: 0; left: 0; width: 100%; height: 100%; z-index: -10; pointer-events: none;"
		/>
	}
}
