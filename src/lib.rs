//! marketvision: client-side shell of the MarketVision demo site.
//!
//! This crate provides the decorative animated background drawn behind every
//! page, the page-supplied backdrop configuration, the selected-ticker
//! hand-off shared between views and the canned demo forecasts.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod demo_data;
pub mod handoff;

pub use components::animated_background::{AnimatedBackground, BackdropConfig, Theme};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("marketvision: logging initialized");
}

/// Load backdrop configuration from a script element with id="backdrop-config".
/// Expected format: JSON with optional { theme, particle_count, seed }
fn load_backdrop_config() -> Option<BackdropConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("backdrop-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<BackdropConfig>(&json_text) {
		Ok(config) => {
			info!("marketvision: loaded backdrop config {:?}", config);
			Some(config)
		}
		Err(e) => {
			warn!("marketvision: failed to parse backdrop config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Mounts the animated background behind the landing content.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_backdrop_config().unwrap_or_default();
	let ticker = handoff::session_storage()
		.map(|store| handoff::selected_ticker_or_default(&store))
		.unwrap_or_else(|| handoff::DEFAULT_TICKER.to_string());
	let (accuracy, accuracy_class) = demo_data::prediction_for(&ticker)
		.map(|data| {
			let tier = demo_data::AccuracyTier::of(data.accuracy);
			(format!("{}% model accuracy", data.accuracy), tier.css_class())
		})
		.unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="MarketVision" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<AnimatedBackground theme=config.theme() seed=config.seed />
		<main class="landing">
			<h1>"MarketVision"</h1>
			<p class="subtitle">"Stock forecasts and market sentiment, visualized."</p>
			<p class="ticker">"Watching " {ticker}</p>
			<p class=format!("accuracy {}", accuracy_class)>{accuracy}</p>
		</main>
	}
}
