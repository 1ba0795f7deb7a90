//! Tickers the site offers and the canned five-day forecasts shown for them.

/// A ticker the form lets the visitor pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StockOption {
	/// Ticker symbol stored by the hand-off.
	pub value: &'static str,
	/// Text shown in the picker.
	pub label: &'static str,
}

/// Offered tickers, in form order.
pub const STOCK_OPTIONS: [StockOption; 6] = [
	StockOption {
		value: "MSFT",
		label: "Microsoft (MSFT)",
	},
	StockOption {
		value: "TSLA",
		label: "Tesla (TSLA)",
	},
	StockOption {
		value: "AAPL",
		label: "Apple (AAPL)",
	},
	StockOption {
		value: "NFLX",
		label: "Netflix (NFLX)",
	},
	StockOption {
		value: "GOOGL",
		label: "Google (GOOGL)",
	},
	StockOption {
		value: "AMZN",
		label: "Amazon (AMZN)",
	},
];

const FORECAST_DATES: [&str; 5] = [
	"2025-04-29",
	"2025-04-30",
	"2025-05-01",
	"2025-05-02",
	"2025-05-05",
];

/// A five-trading-day forecast and the model's reported accuracy (percent).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PredictionData {
	/// ISO trading dates, oldest first.
	pub dates: [&'static str; 5],
	/// Predicted closing price per date.
	pub predictions: [f64; 5],
	/// Reported model accuracy, percent.
	pub accuracy: f64,
}

static DEMO_DATA: [(&str, PredictionData); 6] = [
	(
		"MSFT",
		PredictionData {
			dates: FORECAST_DATES,
			predictions: [415.22, 418.67, 422.91, 419.88, 425.30],
			accuracy: 94.7,
		},
	),
	(
		"AAPL",
		PredictionData {
			dates: FORECAST_DATES,
			predictions: [183.65, 185.22, 187.10, 186.79, 189.45],
			accuracy: 93.2,
		},
	),
	(
		"TSLA",
		PredictionData {
			dates: FORECAST_DATES,
			predictions: [179.22, 172.45, 168.90, 171.32, 174.65],
			accuracy: 90.5,
		},
	),
	(
		"NFLX",
		PredictionData {
			dates: FORECAST_DATES,
			predictions: [624.18, 631.45, 637.90, 629.75, 642.30],
			accuracy: 91.8,
		},
	),
	(
		"GOOGL",
		PredictionData {
			dates: FORECAST_DATES,
			predictions: [173.25, 176.50, 178.75, 176.20, 179.85],
			accuracy: 92.6,
		},
	),
	(
		"AMZN",
		PredictionData {
			dates: FORECAST_DATES,
			predictions: [182.35, 185.60, 188.20, 186.45, 190.75],
			accuracy: 91.9,
		},
	),
];

/// Whether `symbol` is one of [`STOCK_OPTIONS`]. Case-sensitive.
pub fn is_offered(symbol: &str) -> bool {
	STOCK_OPTIONS.iter().any(|opt| opt.value == symbol)
}

/// The canned forecast for `symbol`, if it has one.
pub fn prediction_for(symbol: &str) -> Option<&'static PredictionData> {
	DEMO_DATA
		.iter()
		.find(|(key, _)| *key == symbol)
		.map(|(_, data)| data)
}

/// Direction of a day-over-day move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriceChange {
	Up,
	Down,
}

impl PriceChange {
	/// CSS class used to color the move.
	pub fn css_class(self) -> &'static str {
		match self {
			Self::Up => "price-up",
			Self::Down => "price-down",
		}
	}
}

/// An unchanged price counts as up.
pub fn price_change(current: f64, previous: f64) -> PriceChange {
	if current - previous >= 0.0 {
		PriceChange::Up
	} else {
		PriceChange::Down
	}
}

/// Confidence band for a model accuracy percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccuracyTier {
	Excellent,
	Good,
	Fair,
	Poor,
}

impl AccuracyTier {
	/// `>= 95` excellent, `>= 90` good, `>= 80` fair, otherwise poor.
	pub fn of(accuracy: f64) -> Self {
		if accuracy >= 95.0 {
			Self::Excellent
		} else if accuracy >= 90.0 {
			Self::Good
		} else if accuracy >= 80.0 {
			Self::Fair
		} else {
			Self::Poor
		}
	}

	/// CSS class used to color the accuracy figure.
	pub fn css_class(self) -> &'static str {
		match self {
			Self::Excellent => "accuracy-excellent",
			Self::Good => "accuracy-good",
			Self::Fair => "accuracy-fair",
			Self::Poor => "accuracy-poor",
		}
	}
}
