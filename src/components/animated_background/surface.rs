//! Drawing surface abstraction over the 2D canvas context.
//!
//! The renderer only needs a handful of path and fill operations; routing them
//! through [`Surface`] lets the render loop run against a recording stub in
//! tests and against [`CanvasSurface`] in the browser.

use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// The 2D raster target particles and waves are painted onto.
pub trait Surface {
	/// Current drawing buffer size in pixels.
	fn size(&self) -> (f64, f64);
	fn resize(&mut self, width: f64, height: f64);
	/// Clears the whole drawing buffer.
	fn clear(&mut self);
	/// Fills the whole buffer with a top-to-bottom two-stop gradient.
	fn fill_vertical_gradient(&mut self, top: &str, bottom: &str);
	fn begin_path(&mut self);
	fn move_to(&mut self, x: f64, y: f64);
	fn line_to(&mut self, x: f64, y: f64);
	fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64);
	/// Adds a full circle to the current path.
	fn circle(&mut self, x: f64, y: f64, radius: f64);
	fn close_path(&mut self);
	/// Fills the current path with a CSS color.
	fn fill(&mut self, style: &str);
}

/// [`Surface`] backed by an HTML canvas element.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Acquires the 2D context, or `None` when the host has no canvas support.
	pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
		let ctx: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;
		Some(Self { canvas, ctx })
	}
}

impl Surface for CanvasSurface {
	fn size(&self) -> (f64, f64) {
		(self.canvas.width() as f64, self.canvas.height() as f64)
	}

	fn resize(&mut self, width: f64, height: f64) {
		self.canvas.set_width(width as u32);
		self.canvas.set_height(height as u32);
	}

	fn clear(&mut self) {
		let (w, h) = self.size();
		self.ctx.clear_rect(0.0, 0.0, w, h);
	}

	fn fill_vertical_gradient(&mut self, top: &str, bottom: &str) {
		let (w, h) = self.size();
		let gradient = self.ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
		let _ = gradient.add_color_stop(0.0, top);
		let _ = gradient.add_color_stop(1.0, bottom);

		#[allow(deprecated)]
		self.ctx.set_fill_style(&gradient);
		self.ctx.fill_rect(0.0, 0.0, w, h);
	}

	fn begin_path(&mut self) {
		self.ctx.begin_path();
	}

	fn move_to(&mut self, x: f64, y: f64) {
		self.ctx.move_to(x, y);
	}

	fn line_to(&mut self, x: f64, y: f64) {
		self.ctx.line_to(x, y);
	}

	fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
		self.ctx.quadratic_curve_to(cpx, cpy, x, y);
	}

	fn circle(&mut self, x: f64, y: f64, radius: f64) {
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
	}

	fn close_path(&mut self) {
		self.ctx.close_path();
	}

	fn fill(&mut self, style: &str) {
		self.ctx.set_fill_style_str(style);
		self.ctx.fill();
	}
}
