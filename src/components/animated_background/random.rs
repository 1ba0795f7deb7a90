//! Random source used when seeding particles and waves.

/// Supplies uniform samples for particle and wave construction.
///
/// The browser build uses [`fastrand::Rng`]; tests pass a seeded `fastrand::Rng`
/// or a scripted sequence to get reproducible layouts.
pub trait RandomSource {
	/// Uniform sample in `[0, 1)`.
	fn next_unit(&mut self) -> f64;

	/// Uniform sample in `[min, max)`.
	fn range(&mut self, min: f64, max: f64) -> f64 {
		min + self.next_unit() * (max - min)
	}

	/// Uniform index in `0..len`. `len` must be non-zero.
	fn index(&mut self, len: usize) -> usize {
		((self.next_unit() * len as f64) as usize).min(len.saturating_sub(1))
	}
}

impl RandomSource for fastrand::Rng {
	fn next_unit(&mut self) -> f64 {
		self.f64()
	}
}

/// Seeded when `seed` is set, entropy-seeded otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> fastrand::Rng {
	seed.map(fastrand::Rng::with_seed)
		.unwrap_or_else(fastrand::Rng::new)
}
