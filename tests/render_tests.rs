//! Render snapshot tests using RenderHarness

use tui_dispatch::testing::*;
use weather_widget::{
    components::{Component, WeatherWidget, WeatherWidgetProps},
    state::{AppState, Focus, TempUnit, WeatherReading},
};

fn render_state(state: &AppState, width: u16, height: u16) -> String {
    let mut render = RenderHarness::new(width, height);
    let mut component = WeatherWidget::new();

    render.render_to_string_plain(|frame| {
        let props = WeatherWidgetProps {
            state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    })
}

fn reading(temperature: f64, unit: TempUnit) -> WeatherReading {
    WeatherReading {
        temperature,
        unit,
        condition_text: "Light snow".into(),
        location_name: "Reykjavik".into(),
        wind_speed_kph: 25.6,
        humidity_percent: 93.0,
    }
}

#[test]
fn test_render_initial_state() {
    let output = render_state(&AppState::default(), 70, 24);

    assert!(output.contains("Weather Widget"), "Should show title");
    assert!(
        output.contains("Search for the current weather conditions in your city."),
        "Should show description"
    );
    assert!(output.contains("Enter a city name"), "Should show placeholder");
    assert!(output.contains("Search"), "Should show submit button");
    assert!(
        !output.contains("Switch to"),
        "Buttons only appear with a reading:\n{}",
        output
    );
}

#[test]
fn test_render_empty_input_error() {
    let state = AppState {
        error_message: Some("Please enter a valid location.".into()),
        ..Default::default()
    };

    let output = render_state(&state, 70, 24);

    assert!(output.contains("Please enter a valid location."));
}

#[test]
fn test_render_fetch_error() {
    let state = AppState {
        error_message: Some("City not found. Please try again.".into()),
        ..Default::default()
    };

    let output = render_state(&state, 70, 24);

    assert!(output.contains("City not found. Please try again."));
    assert!(!output.contains("Humidity"), "No reading after a failure");
}

#[test]
fn test_render_reading_lines() {
    let state = AppState {
        weather: Some(reading(-2.0, TempUnit::Celsius)),
        ..Default::default()
    };

    let output = render_state(&state, 70, 30);

    assert!(output.contains("It's freezing at -2°C! Bundle up!"));
    assert!(output.contains("Light snow"));
    assert!(output.contains("Reykjavik"));
    assert!(output.contains("Wind: 25.6 kph"));
    assert!(output.contains("Humidity: 93%"));
}

#[test]
fn test_render_buttons() {
    let state = AppState {
        weather: Some(reading(28.4, TempUnit::Fahrenheit)),
        is_fahrenheit: true,
        show_chart: true,
        is_night_mode: false,
        ..Default::default()
    };

    let output = render_state(&state, 70, 36);

    assert!(output.contains("It's freezing at 28.4°F! Bundle up!"));
    assert!(output.contains("Switch to °C"));
    assert!(output.contains("Hide Chart"));
    assert!(output.contains("Switch to Night"));
}

#[test]
fn test_render_status_hints_follow_focus() {
    let searching = render_state(&AppState::default(), 80, 24);
    assert!(searching.contains("buttons"), "Should show focus hint");

    let state = AppState {
        focus: Focus::Controls,
        ..Default::default()
    };
    let controls = render_state(&state, 80, 24);
    assert!(controls.contains("units"), "Should show units hint");
    assert!(controls.contains("theme"), "Should show theme hint");
    assert!(controls.contains("quit"), "Should show quit hint");
}

#[test]
fn test_render_small_terminal() {
    let state = AppState {
        weather: Some(reading(12.0, TempUnit::Celsius)),
        show_chart: true,
        ..Default::default()
    };

    let output = render_state(&state, 20, 6);
    assert!(output.contains("Too small"), "Should show size notice:\n{}", output);
}
