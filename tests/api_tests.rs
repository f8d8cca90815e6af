//! Integration tests for the provider client using wiremock
//!
//! The client runs against a mock HTTP server; its result is then fed
//! through the reducer the same way the effect handler does.

use tui_dispatch::EffectStore;
use weather_widget::{
    action::Action,
    api::{self, FetchError},
    message::temperature_message,
    reducer::reducer,
    state::{AppState, TempUnit},
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const TEST_KEY: &str = "test-key";

fn sample_current(temp_c: f64) -> serde_json::Value {
    serde_json::json!({
        "location": {
            "name": "Paris",
            "region": "Ile-de-France",
            "country": "France"
        },
        "current": {
            "temp_c": temp_c,
            "temp_f": temp_c * 9.0 / 5.0 + 32.0,
            "condition": { "text": "Sunny", "code": 1000 },
            "wind_kph": 13.0,
            "humidity": 48
        }
    })
}

async fn setup_current_mock(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

/// Run the fetch and turn the outcome into the action the effect handler emits
async fn fetch_action(mock_server: &MockServer, query: &str) -> Action {
    match api::fetch_current(&mock_server.uri(), Some(TEST_KEY), query).await {
        Ok(reading) => Action::WeatherDidLoad(reading),
        Err(error) => Action::WeatherDidError(error.to_string()),
    }
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_paris_search_end_to_end() {
    let mock_server = MockServer::start().await;
    setup_current_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_current(20.0)),
    )
    .await;

    let mut store = EffectStore::new(AppState::default(), reducer);
    let result = store.dispatch(Action::SearchSubmit("Paris".into()));
    assert_eq!(result.effects.len(), 1);

    store.dispatch(fetch_action(&mock_server, "Paris").await);

    let state = store.state();
    assert!(!state.is_loading);
    let weather = state.weather.as_ref().expect("reading should be loaded");
    assert_eq!(weather.temperature, 20.0);
    assert_eq!(weather.unit, TempUnit::Celsius);
    assert_eq!(weather.location_name, "Paris");
    assert_eq!(
        temperature_message(weather.temperature, weather.unit),
        "It's a pleasant 20°C. Enjoy the nice weather!"
    );
}

#[tokio::test]
async fn test_request_contains_key_and_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .and(query_param("key", TEST_KEY))
        .and(query_param("q", "New York"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current(3.0)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = api::fetch_current(&mock_server.uri(), Some(TEST_KEY), "New York").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn test_new_fetch_ignores_previous_fahrenheit_toggle() {
    let mock_server = MockServer::start().await;
    setup_current_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_current(20.0)),
    )
    .await;

    let mut store = EffectStore::new(AppState::default(), reducer);
    store.dispatch(fetch_action(&mock_server, "Paris").await);
    store.dispatch(Action::UiToggleUnit);
    assert!(store.state().is_fahrenheit);

    store.dispatch(Action::SearchSubmit("Paris".into()));
    store.dispatch(fetch_action(&mock_server, "Paris").await);

    let weather = store.state().weather.as_ref().unwrap();
    assert_eq!(weather.temperature, 20.0);
    assert_eq!(weather.unit, TempUnit::Celsius);
}

// ============================================================================
// Failure scenarios
// ============================================================================

#[tokio::test]
async fn test_not_found_status() {
    let mock_server = MockServer::start().await;
    setup_current_mock(
        &mock_server,
        ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": { "code": 1006, "message": "No matching location found." }
        })),
    )
    .await;

    let result = api::fetch_current(&mock_server.uri(), Some(TEST_KEY), "Atlantis").await;

    assert!(matches!(result, Err(FetchError::Status(400))));
}

#[tokio::test]
async fn test_malformed_body() {
    let mock_server = MockServer::start().await;
    setup_current_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("not json"),
    )
    .await;

    let result = api::fetch_current(&mock_server.uri(), Some(TEST_KEY), "Paris").await;

    assert!(matches!(result, Err(FetchError::Parse(_))));
}

#[tokio::test]
async fn test_missing_fields() {
    let mock_server = MockServer::start().await;
    setup_current_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "location": { "name": "Paris" },
            "current": { "temp_c": 20.0 }
        })),
    )
    .await;

    let result = api::fetch_current(&mock_server.uri(), Some(TEST_KEY), "Paris").await;

    assert!(matches!(result, Err(FetchError::Parse(_))));
}

#[tokio::test]
async fn test_failure_clears_previous_reading() {
    let mock_server = MockServer::start().await;
    setup_current_mock(&mock_server, ResponseTemplate::new(500)).await;

    let mut store = EffectStore::new(AppState::default(), reducer);
    store.dispatch(Action::WeatherDidLoad(
        api::parse_current(&sample_current(11.0).to_string()).unwrap(),
    ));
    store.dispatch(Action::SearchSubmit("Paris".into()));
    store.dispatch(fetch_action(&mock_server, "Paris").await);

    let state = store.state();
    assert!(state.weather.is_none());
    assert!(!state.is_loading);
    assert_eq!(
        state.error_message.as_deref(),
        Some("City not found. Please try again.")
    );
}

#[tokio::test]
async fn test_missing_key_sends_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current(20.0)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = api::fetch_current(&mock_server.uri(), None, "Paris").await;

    assert!(matches!(result, Err(FetchError::MissingApiKey)));
}
