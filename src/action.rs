//! Actions with category inference (`Search*`, `Weather*`, `Ui*`)

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherReading;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Search category =====
    /// Search input text changed
    SearchQueryChange(String),

    /// Submit the form with the given raw text (trimmed by the reducer)
    SearchSubmit(String),

    // ===== Weather category =====
    /// Result: provider returned a reading
    WeatherDidLoad(WeatherReading),

    /// Result: fetch failed; the payload is diagnostic detail only
    WeatherDidError(String),

    // ===== UI category =====
    /// Switch between Celsius and Fahrenheit
    UiToggleUnit,

    /// Switch between night and day palettes
    UiToggleTheme,

    /// Show or hide the weekly trend chart
    UiToggleChart,

    /// Move key focus to the search input
    UiFocusSearch,

    /// Move key focus to the button row
    UiFocusControls,

    /// Force a re-render (for cursor movement, etc.)
    Render,

    // ===== Uncategorized (global) =====
    /// Exit the application
    Quit,
}
