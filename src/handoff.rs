//! Selected-ticker hand-off between views.
//!
//! The ticker form stores the chosen symbol in session storage; the results
//! view requires one and the sentiment view falls back to [`DEFAULT_TICKER`].

use log::{debug, warn};
use web_sys::Storage;

use crate::demo_data;

/// Session storage key holding the selected ticker.
pub const SELECTED_TICKER_KEY: &str = "predictedStock";

/// Ticker shown by the sentiment view when nothing was selected.
pub const DEFAULT_TICKER: &str = "AAPL";

const MAX_TICKER_LEN: usize = 10;

/// String key/value store scoped to the browser tab.
pub trait SessionStore {
	/// Value stored under `key`, if any.
	fn get(&self, key: &str) -> Option<String>;
	/// Stores `value` under `key`, replacing any previous value.
	fn set(&mut self, key: &str, value: &str);
}

impl SessionStore for Storage {
	fn get(&self, key: &str) -> Option<String> {
		self.get_item(key).ok().flatten()
	}

	fn set(&mut self, key: &str, value: &str) {
		if self.set_item(key, value).is_err() {
			warn!("marketvision: session storage rejected {}", key);
		}
	}
}

/// The tab's session storage, if the browser exposes one.
pub fn session_storage() -> Option<Storage> {
	web_sys::window()?.session_storage().ok()?
}

/// Trims and upper-cases a symbol; `None` if empty, too long or containing
/// anything other than ASCII letters, digits, `.` and `-`.
pub fn normalize_ticker(raw: &str) -> Option<String> {
	let symbol = raw.trim().to_ascii_uppercase();
	let valid = !symbol.is_empty()
		&& symbol.len() <= MAX_TICKER_LEN
		&& symbol
			.chars()
			.all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
	valid.then_some(symbol)
}

/// Stores the normalized symbol and returns it. Input that is malformed or
/// not one of [`demo_data::STOCK_OPTIONS`] stores nothing.
pub fn store_selected_ticker(store: &mut impl SessionStore, raw: &str) -> Option<String> {
	let symbol = normalize_ticker(raw)?;
	if !demo_data::is_offered(&symbol) {
		debug!("marketvision: {} is not an offered ticker", symbol);
		return None;
	}
	store.set(SELECTED_TICKER_KEY, &symbol);
	debug!("marketvision: selected ticker {}", symbol);
	Some(symbol)
}

/// The selected ticker, if a valid one was handed off.
pub fn selected_ticker(store: &impl SessionStore) -> Option<String> {
	store
		.get(SELECTED_TICKER_KEY)
		.and_then(|raw| normalize_ticker(&raw))
}

/// The selected ticker or [`DEFAULT_TICKER`].
pub fn selected_ticker_or_default(store: &impl SessionStore) -> String {
	selected_ticker(store).unwrap_or_else(|| DEFAULT_TICKER.to_string())
}
