//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Current conditions for one location, as shown on the card.
///
/// `temperature` is always read together with `unit`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherReading {
    pub temperature: f64,
    pub unit: TempUnit,
    pub condition_text: String,
    /// Canonical name returned by the provider, not the typed query
    pub location_name: String,
    pub wind_speed_kph: f64,
    pub humidity_percent: f64,
}

/// Temperature unit of a reading
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum TempUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TempUnit {
    pub fn toggle(&self) -> Self {
        match self {
            TempUnit::Celsius => TempUnit::Fahrenheit,
            TempUnit::Fahrenheit => TempUnit::Celsius,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TempUnit::Celsius => "°C",
            TempUnit::Fahrenheit => "°F",
        }
    }
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Which part of the card receives key presses
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum Focus {
    #[default]
    Search,
    Controls,
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    // --- Core data (visible in debug) ---
    /// Latest successful reading; absent after any failure
    #[debug(section = "Weather", label = "Reading", debug_fmt)]
    pub weather: Option<WeatherReading>,

    /// User-facing error from the last search attempt
    #[debug(section = "Weather", label = "Error", debug_fmt)]
    pub error_message: Option<String>,

    /// True while a fetch is in flight
    #[debug(section = "Weather", label = "Loading")]
    pub is_loading: bool,

    /// Moves in lockstep with `WeatherReading::unit`
    #[debug(section = "Display", label = "Fahrenheit")]
    pub is_fahrenheit: bool,

    #[debug(section = "Display", label = "Night mode")]
    pub is_night_mode: bool,

    #[debug(section = "Display", label = "Chart")]
    pub show_chart: bool,

    // --- Input ---
    /// Text currently in the search input
    #[debug(section = "Input", label = "Query", debug_fmt)]
    pub query: String,

    #[debug(section = "Input", label = "Focus", debug_fmt)]
    pub focus: Focus,

    /// Id of the most recently issued fetch
    #[debug(skip)]
    pub request_seq: u64,
}

impl AppState {
    /// Create state with the search input pre-filled
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            weather: None,
            error_message: None,
            is_loading: false,
            is_fahrenheit: false,
            is_night_mode: true,
            show_chart: false,
            query: query.into(),
            focus: Focus::default(),
            request_seq: 0,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(String::new())
    }
}
