//! HTTP-level tests for the directory and weather clients, against a local
//! mock server.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use skycast_core::model::{GradientColor, TempIcon};
use skycast_core::provider::{FetchError, WeatherProvider};
use skycast_core::provider::weatherapi::WeatherApiProvider;
use skycast_core::{CityDirectory, PanelView, WeatherPanel};

fn france_forecast_body() -> serde_json::Value {
    json!({
        "location": { "name": "France", "localtime": "2026-08-30 15:00" },
        "current": {
            "temp_c": 25.0,
            "condition": { "text": "Sunny" },
            "humidity": 50,
            "wind_kph": 10.0,
            "cloud": 20
        },
        "forecast": {
            "forecastday": [
                {
                    "date": "2026-08-30",
                    "hour": [
                        { "time_epoch": 1000, "time": "2026-08-30 00:00", "temp_c": 25.0 },
                        { "time_epoch": 4600, "time": "2026-08-30 01:00", "temp_c": 24.0 },
                        { "time_epoch": 8200, "time": "2026-08-30 02:00", "temp_c": 23.0 },
                        { "time_epoch": 11800, "time": "2026-08-30 03:00", "temp_c": 22.0 }
                    ]
                }
            ]
        }
    })
}

#[tokio::test]
async fn weather_fetch_sends_key_location_and_one_day() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast.json"))
        .and(query_param("key", "TEST_KEY"))
        .and(query_param("q", "France"))
        .and(query_param("days", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(france_forecast_body()))
        .expect(1)
        .mount(&server)
        .await;

    let provider = WeatherApiProvider::with_base_url(
        "TEST_KEY".to_string(),
        format!("{}/v1/forecast.json", server.uri()),
    );
    let snapshot = provider.forecast("France").await.unwrap();

    assert_eq!(snapshot.location_name, "France");
    assert_eq!(snapshot.temp_c, 25.0);
    assert_eq!(snapshot.wind_kph, 10.0);
    assert_eq!(snapshot.humidity_pct, 50);
    assert_eq!(snapshot.cloud_pct, 20);
    assert_eq!(snapshot.hourly.len(), 4);
}

/// The worked example: selecting France yields an amber panel with a sunny
/// icon and 25°C, via one `q=France&days=1` call.
#[tokio::test]
async fn france_end_to_end_derivations() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("q", "France"))
        .and(query_param("days", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(france_forecast_body()))
        .mount(&server)
        .await;

    let provider = WeatherApiProvider::with_base_url("k".to_string(), server.uri());
    let mut panel = WeatherPanel::new();

    let ticket = panel.select(Some("France".to_string())).unwrap();
    assert_eq!(panel.view(), PanelView::Loading);

    let result = provider.forecast(&ticket.location).await;
    assert!(panel.complete(ticket.token, result));

    let PanelView::Loaded(snapshot) = panel.view() else {
        panic!("panel should be loaded");
    };
    assert_eq!(GradientColor::for_temp_c(snapshot.temp_c), GradientColor::Amber);
    assert_eq!(TempIcon::for_temp_c(snapshot.temp_c), TempIcon::Sunny);
    assert_eq!(format!("{}°C", snapshot.temp_c), "25°C");
}

#[tokio::test]
async fn weather_non_success_status_is_a_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(403).set_body_string(r#"{"error":{"message":"bad key"}}"#),
        )
        .mount(&server)
        .await;

    let provider = WeatherApiProvider::with_base_url("bad".to_string(), server.uri());
    let err = provider.forecast("France").await.unwrap_err();

    match err {
        FetchError::Status { status, body } => {
            assert_eq!(status.as_u16(), 403);
            assert!(body.contains("bad key"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn weather_error_body_with_multibyte_text_is_still_a_status_error() {
    let server = MockServer::start().await;
    // Deep enough into the body that truncation lands mid-character.
    let body = format!("{}{}", "a".repeat(199), "é".repeat(10));
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string(body))
        .mount(&server)
        .await;

    let provider = WeatherApiProvider::with_base_url("k".to_string(), server.uri());
    let mut panel = WeatherPanel::new();
    let ticket = panel.select(Some("France".to_string())).unwrap();

    let result = provider.forecast(&ticket.location).await;
    let err = result.as_ref().unwrap_err();
    assert!(matches!(err, FetchError::Status { status, .. } if status.as_u16() == 500));

    // The failure flows through the panel as a retained-state completion,
    // not a crash.
    assert!(!panel.complete(ticket.token, result));
    assert_eq!(panel.view(), PanelView::Loading);
}

#[tokio::test]
async fn weather_malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let provider = WeatherApiProvider::with_base_url("k".to_string(), server.uri());
    let err = provider.forecast("France").await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn failed_refresh_keeps_previous_city_on_display() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("q", "France"))
        .respond_with(ResponseTemplate::new(200).set_body_json(france_forecast_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("q", "Japan"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let provider = WeatherApiProvider::with_base_url("k".to_string(), server.uri());
    let mut panel = WeatherPanel::new();

    let ticket = panel.select(Some("France".to_string())).unwrap();
    let result = provider.forecast(&ticket.location).await;
    panel.complete(ticket.token, result);

    let ticket = panel.select(Some("Japan".to_string())).unwrap();
    let result = provider.forecast(&ticket.location).await;
    assert!(!panel.complete(ticket.token, result));

    // Selector says Japan, panel still renders the France snapshot.
    assert_eq!(panel.location(), Some("Japan"));
    let PanelView::Loaded(snapshot) = panel.view() else {
        panic!("panel should still be loaded");
    };
    assert_eq!(snapshot.location_name, "France");
}

#[tokio::test]
async fn directory_fetch_extracts_common_names() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("fields", "name"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": { "common": "France", "official": "French Republic" } },
            { "name": { "common": "Japan", "official": "Japan" } },
            { "name": { "common": "Brazil", "official": "Federative Republic of Brazil" } }
        ])))
        .mount(&server)
        .await;

    let directory = CityDirectory::with_base_url(server.uri());
    let names = directory.fetch().await.unwrap();
    assert_eq!(names, vec!["France", "Japan", "Brazil"]);
}

#[tokio::test]
async fn directory_failure_degrades_to_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let directory = CityDirectory::with_base_url(server.uri());
    assert!(directory.fetch_or_empty().await.is_empty());

    // Transport-level failure (nothing listening) degrades the same way.
    let unreachable = CityDirectory::with_base_url("http://127.0.0.1:9");
    assert!(unreachable.fetch_or_empty().await.is_empty());
}
