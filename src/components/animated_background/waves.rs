//! Translucent wave bands whose outline oscillates with wall-clock time.
//!
//! A wave's control point heights are recomputed from scratch each frame from
//! their origin, index and the current time, so any frame can be reproduced
//! from the timestamp alone.

use super::random::RandomSource;
use super::theme::{Color, WaveSpec, WaveStyle};

/// One vertex of a wave outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlPoint {
	/// Fixed horizontal position.
	pub x: f64,
	/// Current height, rewritten by [`Wave::animate`].
	pub y: f64,
	/// Rest height the oscillation is centred on.
	pub origin_y: f64,
}

/// A filled band bounded above by a smooth curve through its control points.
#[derive(Clone, Debug)]
pub struct Wave {
	/// Outline vertices, left to right.
	pub points: Vec<ControlPoint>,
	/// Band color without alpha.
	pub color: Color,
	/// Fill opacity applied to `color`.
	pub opacity: f64,
	/// Horizontal reach past each surface edge, reused when closing the fill.
	pub overhang: f64,
	amplitude: f64,
	period_ms: f64,
	phase_step: f64,
}

impl Wave {
	/// Spreads `style.segments + 1` points evenly over `[-overhang, width + overhang]`.
	pub fn new(
		spec: &WaveSpec,
		style: &WaveStyle,
		width: f64,
		height: f64,
		rng: &mut impl RandomSource,
	) -> Self {
		let segments = style.segments.max(1);
		let span = width + style.overhang * 2.0;

		let points = (0..=segments)
			.map(|i| {
				let x = span / segments as f64 * i as f64 - style.overhang;
				let origin_y = height / 2.0 + rng.next_unit() * style.jitter;
				ControlPoint {
					x,
					y: origin_y,
					origin_y,
				}
			})
			.collect();

		Self {
			points,
			color: spec.color,
			opacity: spec.opacity,
			overhang: style.overhang,
			amplitude: style.amplitude,
			period_ms: style.period_ms,
			phase_step: style.phase_step,
		}
	}

	/// Sets every point's height for wall-clock time `time_ms`.
	pub fn animate(&mut self, time_ms: f64) {
		for (i, point) in self.points.iter_mut().enumerate() {
			let phase = time_ms / self.period_ms + i as f64 * self.phase_step;
			point.y = point.origin_y + phase.sin() * self.amplitude;
		}
	}

	/// CSS fill for the band: the wave color at the wave opacity.
	pub fn fill_style(&self) -> String {
		self.color.with_alpha(self.opacity).to_css()
	}
}

/// The stack of waves, in paint order.
#[derive(Clone, Debug)]
pub struct WaveLayer {
	/// Bands in creation order.
	pub waves: Vec<Wave>,
}

impl WaveLayer {
	/// One wave per entry of `style.layers`.
	pub fn new(style: &WaveStyle, width: f64, height: f64, rng: &mut impl RandomSource) -> Self {
		let waves = style
			.layers
			.iter()
			.map(|spec| Wave::new(spec, style, width, height, rng))
			.collect();

		Self { waves }
	}

	/// Animates every band to `time_ms`.
	pub fn animate(&mut self, time_ms: f64) {
		for wave in &mut self.waves {
			wave.animate(time_ms);
		}
	}
}
