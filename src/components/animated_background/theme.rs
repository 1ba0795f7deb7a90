//! Visual theming for the animated background.
//!
//! Gathers every constant the animation paints with: gradient stops, particle
//! palette and motion ranges, and wave geometry and colors.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Two-stop vertical gradient painted behind everything else.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Color at the top edge
	pub top: Color,
	/// Color at the bottom edge
	pub bottom: Color,
}

/// Particle field configuration.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	/// Number of particles created at mount
	pub count: usize,
	/// Minimum particle radius (inclusive)
	pub size_min: f64,
	/// Maximum particle radius (exclusive)
	pub size_max: f64,
	/// Each velocity component is drawn from `[-speed, speed)`
	pub speed: f64,
	/// Swatches a particle picks its color from
	pub palette: Vec<Color>,
}

/// Color and opacity of one wave band.
#[derive(Clone, Copy, Debug)]
pub struct WaveSpec {
	/// Base color; alpha is ignored in favor of `opacity`
	pub color: Color,
	pub opacity: f64,
}

/// Wave geometry shared by every band.
#[derive(Clone, Debug)]
pub struct WaveStyle {
	/// Number of equal segments; a wave has `segments + 1` control points.
	pub segments: usize,
	/// How far the curve extends past each horizontal edge.
	pub overhang: f64,
	/// Control point origins sit `[0, jitter)` below the vertical center.
	pub jitter: f64,
	/// Peak vertical displacement.
	pub amplitude: f64,
	/// Milliseconds per radian of the oscillation.
	pub period_ms: f64,
	/// Phase offset between neighbouring control points.
	pub phase_step: f64,
	/// One band per entry, painted back to front.
	pub layers: Vec<WaveSpec>,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub background: BackgroundStyle,
	pub particles: ParticleStyle,
	pub waves: WaveStyle,
}

const MAGENTA: Color = Color::rgb(213, 70, 237);
const PURPLE: Color = Color::rgb(139, 92, 246);
const TEAL: Color = Color::rgb(20, 241, 149);
const PINK: Color = Color::rgb(255, 77, 157);

impl Theme {
	/// Magenta, purple, teal and pink on black (default)
	pub fn market_vision() -> Self {
		Self {
			name: "market_vision",
			background: BackgroundStyle {
				top: Color::rgb(0, 0, 0),
				bottom: Color::rgb(10, 10, 10),
			},
			particles: ParticleStyle {
				count: 100,
				size_min: 0.5,
				size_max: 2.5,
				speed: 0.25,
				palette: vec![
					MAGENTA.with_alpha(0.7),
					PURPLE.with_alpha(0.7),
					TEAL.with_alpha(0.7),
					PINK.with_alpha(0.7),
				],
			},
			waves: WaveStyle {
				segments: 6,
				overhang: 100.0,
				jitter: 50.0,
				amplitude: 15.0,
				period_ms: 1000.0,
				phase_step: 0.5,
				layers: vec![
					WaveSpec {
						color: MAGENTA,
						opacity: 0.05,
					},
					WaveSpec {
						color: PURPLE,
						opacity: 0.03,
					},
					WaveSpec {
						color: TEAL,
						opacity: 0.04,
					},
					WaveSpec {
						color: PINK,
						opacity: 0.02,
					},
				],
			},
		}
	}

	/// Sparse grey particles over two faint waves
	pub fn minimal() -> Self {
		Self {
			name: "minimal",
			background: BackgroundStyle {
				top: Color::rgb(0, 0, 0),
				bottom: Color::rgb(10, 10, 10),
			},
			particles: ParticleStyle {
				count: 40,
				size_min: 0.5,
				size_max: 1.5,
				speed: 0.15,
				palette: vec![
					Color::rgba(180, 180, 190, 0.5),
					Color::rgba(140, 145, 160, 0.5),
				],
			},
			waves: WaveStyle {
				segments: 6,
				overhang: 100.0,
				jitter: 50.0,
				amplitude: 10.0,
				period_ms: 1500.0,
				phase_step: 0.5,
				layers: vec![
					WaveSpec {
						color: Color::rgb(120, 125, 140),
						opacity: 0.03,
					},
					WaveSpec {
						color: Color::rgb(90, 95, 110),
						opacity: 0.02,
					},
				],
			},
		}
	}

	/// Looks up a preset by its `name`.
	pub fn by_name(name: &str) -> Option<Self> {
		match name {
			"market_vision" => Some(Self::market_vision()),
			"minimal" => Some(Self::minimal()),
			_ => None,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::market_vision()
	}
}
