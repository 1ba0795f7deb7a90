//! Page-supplied configuration for the background.

use log::warn;
use serde::Deserialize;

use super::theme::Theme;

/// Optional overrides embedded by the host page as JSON.
///
/// Every field may be omitted; `{}` yields the default theme with an
/// entropy-seeded layout.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
	/// Theme preset name (see [`Theme::by_name`]).
	pub theme: Option<String>,
	/// Overrides the preset's particle count.
	pub particle_count: Option<usize>,
	/// Seed for a reproducible particle and wave layout.
	pub seed: Option<u64>,
}

impl BackdropConfig {
	/// Resolves the preset and applies overrides. Unknown presets fall back to
	/// the default theme.
	pub fn theme(&self) -> Theme {
		let mut theme = match self.theme.as_deref() {
			None => Theme::default(),
			Some(name) => Theme::by_name(name).unwrap_or_else(|| {
				warn!("marketvision: unknown theme {:?}, using default", name);
				Theme::default()
			}),
		};

		if let Some(count) = self.particle_count {
			theme.particles.count = count;
		}

		theme
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_object_gives_defaults() {
		let config: BackdropConfig = serde_json::from_str("{}").unwrap();
		assert!(config.seed.is_none());

		let theme = config.theme();
		assert_eq!(theme.name, "market_vision");
		assert_eq!(theme.particles.count, 100);
	}

	#[test]
	fn overrides_apply() {
		let config: BackdropConfig =
			serde_json::from_str(r#"{"theme": "minimal", "particle_count": 12, "seed": 42}"#)
				.unwrap();
		let theme = config.theme();

		assert_eq!(theme.name, "minimal");
		assert_eq!(theme.particles.count, 12);
		assert_eq!(config.seed, Some(42));
	}

	#[test]
	fn unknown_theme_falls_back() {
		let config: BackdropConfig = serde_json::from_str(r#"{"theme": "neon"}"#).unwrap();
		assert_eq!(config.theme().name, "market_vision");
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(serde_json::from_str::<BackdropConfig>(r#"{"seed": "abc"}"#).is_err());
	}
}
