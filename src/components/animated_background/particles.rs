//! Drifting point sprites that wrap around the surface edges.

use super::random::RandomSource;
use super::theme::{Color, ParticleStyle};

/// A single floating particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub size: f64,
	pub color: Color,
}

impl Particle {
	/// Places a particle uniformly inside a `width` x `height` surface.
	///
	/// Samples are drawn in the order x, y, size, vx, vy, color.
	pub fn new(style: &ParticleStyle, width: f64, height: f64, rng: &mut impl RandomSource) -> Self {
		let x = rng.next_unit() * width;
		let y = rng.next_unit() * height;
		let size = rng.range(style.size_min, style.size_max);
		let vx = rng.range(-style.speed, style.speed);
		let vy = rng.range(-style.speed, style.speed);
		let color = style.palette[rng.index(style.palette.len())];

		Self {
			x,
			y,
			vx,
			vy,
			size,
			color,
		}
	}

	/// Advances one frame and wraps back into `[0, width) x [0, height)`.
	pub fn update(&mut self, width: f64, height: f64) {
		self.x = wrap(self.x + self.vx, width);
		self.y = wrap(self.y + self.vy, height);
	}
}

/// Past the far edge resets to 0; below 0 resets to just inside `bound`.
/// Degenerate bounds collapse to 0.
fn wrap(value: f64, bound: f64) -> f64 {
	if bound <= 0.0 || value >= bound {
		0.0
	} else if value < 0.0 {
		// largest step below `bound` that stays in the half-open range
		bound - bound * f64::EPSILON
	} else {
		value
	}
}

/// Fixed-size batch of ambient particles.
#[derive(Clone, Debug)]
pub struct ParticleField {
	pub particles: Vec<Particle>,
}

impl ParticleField {
	/// Creates `style.count` particles inside the surface.
	pub fn new(style: &ParticleStyle, width: f64, height: f64, rng: &mut impl RandomSource) -> Self {
		let particles = (0..style.count)
			.map(|_| Particle::new(style, width, height, rng))
			.collect();

		Self { particles }
	}

	/// Update particle positions
	pub fn update(&mut self, width: f64, height: f64) {
		for p in &mut self.particles {
			p.update(width, height);
		}
	}

	/// Number of particles in the batch.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// Whether the batch holds no particles.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}
