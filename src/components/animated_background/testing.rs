//! Test doubles for the drawing surface, frame host and random source.

use super::random::RandomSource;
use super::state::{FrameHandle, FrameHost};
use super::surface::Surface;

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
	Clear,
	Gradient { top: String, bottom: String },
	BeginPath,
	MoveTo(f64, f64),
	LineTo(f64, f64),
	Quadratic(f64, f64, f64, f64),
	Circle { x: f64, y: f64, radius: f64 },
	ClosePath,
	Fill(String),
}

/// Surface that records every call instead of painting.
#[derive(Debug, Default)]
pub struct RecordingSurface {
	pub width: f64,
	pub height: f64,
	pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			width,
			height,
			ops: Vec::new(),
		}
	}

	pub fn fills(&self) -> impl Iterator<Item = &str> {
		self.ops.iter().filter_map(|op| match op {
			DrawOp::Fill(style) => Some(style.as_str()),
			_ => None,
		})
	}
}

impl Surface for RecordingSurface {
	fn size(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	fn clear(&mut self) {
		// keep only the latest frame
		self.ops.clear();
		self.ops.push(DrawOp::Clear);
	}

	fn fill_vertical_gradient(&mut self, top: &str, bottom: &str) {
		self.ops.push(DrawOp::Gradient {
			top: top.to_string(),
			bottom: bottom.to_string(),
		});
	}

	fn begin_path(&mut self) {
		self.ops.push(DrawOp::BeginPath);
	}

	fn move_to(&mut self, x: f64, y: f64) {
		self.ops.push(DrawOp::MoveTo(x, y));
	}

	fn line_to(&mut self, x: f64, y: f64) {
		self.ops.push(DrawOp::LineTo(x, y));
	}

	fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
		self.ops.push(DrawOp::Quadratic(cpx, cpy, x, y));
	}

	fn circle(&mut self, x: f64, y: f64, radius: f64) {
		self.ops.push(DrawOp::Circle { x, y, radius });
	}

	fn close_path(&mut self) {
		self.ops.push(DrawOp::ClosePath);
	}

	fn fill(&mut self, style: &str) {
		self.ops.push(DrawOp::Fill(style.to_string()));
	}
}

/// Host with a settable viewport and clock that tracks frame requests and
/// resize subscriptions.
#[derive(Debug, Default)]
pub struct FakeHost {
	pub viewport: (f64, f64),
	pub time_ms: f64,
	pub resize_listeners: i32,
	/// Total frame requests ever made.
	pub requested: i32,
	/// Requested and not yet fired or cancelled.
	pub pending: Vec<FrameHandle>,
	pub cancelled: Vec<FrameHandle>,
}

impl FakeHost {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			viewport: (width, height),
			..Self::default()
		}
	}

	/// Simulates the display invoking the oldest pending callback.
	pub fn fire_frame(&mut self) -> Option<FrameHandle> {
		if self.pending.is_empty() {
			None
		} else {
			Some(self.pending.remove(0))
		}
	}
}

impl FrameHost for FakeHost {
	fn viewport(&self) -> (f64, f64) {
		self.viewport
	}

	fn now(&self) -> f64 {
		self.time_ms
	}

	fn request_frame(&mut self) -> Option<FrameHandle> {
		self.requested += 1;
		let handle = FrameHandle(self.requested);
		self.pending.push(handle);
		Some(handle)
	}

	fn cancel_frame(&mut self, handle: FrameHandle) {
		self.pending.retain(|h| *h != handle);
		self.cancelled.push(handle);
	}

	fn watch_resize(&mut self) {
		self.resize_listeners += 1;
	}

	fn unwatch_resize(&mut self) {
		self.resize_listeners -= 1;
	}
}

/// Replays a fixed list of unit samples, cycling when exhausted.
pub struct ScriptedRandom {
	values: Vec<f64>,
	next: usize,
}

impl ScriptedRandom {
	pub fn new(values: &[f64]) -> Self {
		Self {
			values: values.to_vec(),
			next: 0,
		}
	}
}

impl RandomSource for ScriptedRandom {
	fn next_unit(&mut self) -> f64 {
		let value = self.values[self.next % self.values.len()];
		self.next += 1;
		value
	}
}
