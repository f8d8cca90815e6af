//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::error::SearchError;
use crate::state::{
    AppState, Focus, TempUnit, celsius_to_fahrenheit, fahrenheit_to_celsius,
};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Search actions =====
        Action::SearchQueryChange(query) => {
            if state.query == query {
                return DispatchResult::unchanged();
            }
            state.query = query;
            DispatchResult::changed()
        }

        Action::SearchSubmit(raw) => {
            let location = raw.trim();
            if location.is_empty() {
                state.error_message = Some(SearchError::EmptyInput.to_string());
                state.weather = None;
                return DispatchResult::changed();
            }

            state.is_loading = true;
            state.error_message = None;
            state.request_seq = state.request_seq.wrapping_add(1);
            DispatchResult::changed_with(Effect::FetchWeather {
                request_id: state.request_seq,
                query: location.to_string(),
            })
        }

        // ===== Weather actions =====
        // Completions are applied in arrival order; the last one wins.
        Action::WeatherDidLoad(reading) => {
            state.is_fahrenheit = reading.unit == TempUnit::Fahrenheit;
            state.weather = Some(reading);
            state.is_loading = false;
            DispatchResult::changed()
        }

        Action::WeatherDidError(_detail) => {
            state.error_message = Some(SearchError::FetchFailed.to_string());
            state.weather = None;
            state.is_loading = false;
            DispatchResult::changed()
        }

        // ===== UI actions =====
        Action::UiToggleUnit => {
            let Some(reading) = state.weather.as_mut() else {
                return DispatchResult::unchanged();
            };
            // The flag, not the reading's unit, picks the formula.
            if state.is_fahrenheit {
                reading.temperature = fahrenheit_to_celsius(reading.temperature);
                reading.unit = TempUnit::Celsius;
            } else {
                reading.temperature = celsius_to_fahrenheit(reading.temperature);
                reading.unit = TempUnit::Fahrenheit;
            }
            state.is_fahrenheit = !state.is_fahrenheit;
            DispatchResult::changed()
        }

        Action::UiToggleTheme => {
            state.is_night_mode = !state.is_night_mode;
            DispatchResult::changed()
        }

        Action::UiToggleChart => {
            state.show_chart = !state.show_chart;
            DispatchResult::changed()
        }

        Action::UiFocusSearch => set_focus(state, Focus::Search),

        Action::UiFocusControls => set_focus(state, Focus::Controls),

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Quit => DispatchResult::unchanged(),
    }
}

fn set_focus(state: &mut AppState, focus: Focus) -> DispatchResult<Effect> {
    if state.focus == focus {
        DispatchResult::unchanged()
    } else {
        state.focus = focus;
        DispatchResult::changed()
    }
}
