//! Integration tests for the NWS client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server,
//! ensuring proper handling of various response scenarios.

use integration_weather::{NwsClient, WeatherClient, WeatherConfig, WeatherError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

const TEST_AGENT: &str = "NWSWeatherPlugin-test/1.0";

fn sample_points_response() -> serde_json::Value {
    serde_json::json!({
        "@context": ["https://geojson.org/geojson-ld/geojson-context.jsonld"],
        "id": "https://api.weather.gov/points/39.7817,-89.6501",
        "type": "Feature",
        "properties": {
            "cwa": "ILX",
            "forecastOffice": "https://api.weather.gov/offices/ILX",
            "gridId": "ILX",
            "gridX": 61,
            "gridY": 51,
            "forecast": "https://api.weather.gov/gridpoints/ILX/61,51/forecast",
            "relativeLocation": {
                "type": "Feature",
                "properties": {
                    "city": "Springfield",
                    "state": "IL"
                }
            },
            "timeZone": "America/Chicago"
        }
    })
}

fn sample_forecast_response() -> serde_json::Value {
    serde_json::json!({
        "type": "Feature",
        "properties": {
            "units": "us",
            "updated": "2026-10-17T14:05:31+00:00",
            "periods": [
                {
                    "number": 1,
                    "name": "This Afternoon",
                    "startTime": "2026-10-17T13:00:00-05:00",
                    "endTime": "2026-10-17T18:00:00-05:00",
                    "isDaytime": true,
                    "temperature": 64,
                    "temperatureUnit": "F",
                    "windSpeed": "10 mph",
                    "windDirection": "SW",
                    "shortForecast": "Sunny",
                    "detailedForecast": "Sunny, with a high near 64."
                },
                {
                    "number": 2,
                    "name": "Tonight",
                    "startTime": "2026-10-17T18:00:00-05:00",
                    "endTime": "2026-10-18T06:00:00-05:00",
                    "isDaytime": false,
                    "temperature": 41,
                    "temperatureUnit": "F",
                    "windSpeed": "5 mph",
                    "windDirection": "S",
                    "shortForecast": "Clear",
                    "detailedForecast": "Clear, with a low around 41."
                },
                {
                    "number": 3,
                    "name": "Sunday",
                    "startTime": "2026-10-18T06:00:00-05:00",
                    "endTime": "2026-10-18T18:00:00-05:00",
                    "isDaytime": true,
                    "temperature": 70,
                    "temperatureUnit": "F",
                    "windSpeed": "10 to 15 mph",
                    "windDirection": "S",
                    "shortForecast": "Chance Showers",
                    "detailedForecast": "A chance of showers after 1pm. Mostly cloudy, with a high near 70."
                }
            ]
        }
    })
}

/// Create a test client configured to use the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> NwsClient {
    let config = WeatherConfig {
        base_url: mock_server.uri(),
        timeout_secs: 2,
        user_agent: TEST_AGENT.to_string(),
    };
    #[allow(clippy::expect_used)]
    NwsClient::new(config).expect("Failed to create client")
}

// ============================================================================
// Point lookup
// ============================================================================

#[tokio::test]
async fn test_get_point_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/points/39.7817,-89.6501"))
        .and(header("user-agent", TEST_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_points_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let point = client.get_point(39.781_721, -89.650_148).await.unwrap();

    assert_eq!(point.grid_id, "ILX");
    assert_eq!(point.grid_x, 61);
    assert_eq!(point.grid_y, 51);
    assert_eq!(point.city.as_deref(), Some("Springfield"));
}

#[tokio::test]
async fn test_get_point_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "title": "Data Unavailable For Requested Point",
            "status": 404
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client.get_point(48.85, 2.35).await.unwrap_err();

    assert!(matches!(
        err,
        WeatherError::UnexpectedStatus { status: 404, .. }
    ));
    assert_eq!(err.to_string(), "Not Found");
}

#[tokio::test]
async fn test_get_point_rejects_invalid_coordinates_without_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client.get_point(95.0, 0.0).await.unwrap_err();

    assert!(matches!(err, WeatherError::InvalidCoordinates));
}

#[tokio::test]
async fn test_get_point_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/points/39.7817,-89.6501"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client.get_point(39.7817, -89.6501).await.unwrap_err();

    assert!(matches!(err, WeatherError::ParseError(_)));
}

// ============================================================================
// Forecast
// ============================================================================

#[tokio::test]
async fn test_get_forecast_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gridpoints/ILX/61,51/forecast"))
        .and(header("user-agent", TEST_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let forecast = client.get_forecast("ILX", 61, 51).await.unwrap();

    assert_eq!(forecast.periods.len(), 3);
    assert_eq!(forecast.periods[0].name, "This Afternoon");
    assert_eq!(forecast.periods[1].name, "Tonight");
    assert_eq!(forecast.periods[2].start_time, "2026-10-18T06:00:00-05:00");
    assert_eq!(
        forecast.periods[0].detailed_forecast,
        "Sunny, with a high near 64."
    );
}

#[tokio::test]
async fn test_get_forecast_service_unavailable_reports_reason_phrase() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gridpoints/ILX/61,51/forecast"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client.get_forecast("ILX", 61, 51).await.unwrap_err();

    assert_eq!(err.to_string(), "Service Unavailable");
}

#[tokio::test]
async fn test_get_forecast_non_ok_success_status_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gridpoints/ILX/61,51/forecast"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client.get_forecast("ILX", 61, 51).await.unwrap_err();

    assert!(matches!(
        err,
        WeatherError::UnexpectedStatus { status: 204, .. }
    ));
    assert_eq!(err.to_string(), "No Content");
}

#[tokio::test]
async fn test_get_forecast_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gridpoints/ILX/61,51/forecast"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sample_forecast_response())
                .set_delay(std::time::Duration::from_secs(4)),
        )
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client.get_forecast("ILX", 61, 51).await.unwrap_err();

    assert!(matches!(err, WeatherError::Timeout { timeout_secs: 2 }));
}

#[tokio::test]
async fn test_get_forecast_empty_periods() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gridpoints/ILX/61,51/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "properties": { "periods": [] }
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let forecast = client.get_forecast("ILX", 61, 51).await.unwrap();

    assert!(forecast.periods.is_empty());
}
