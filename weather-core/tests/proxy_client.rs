//! Proxy client behaviour against a mock `/api/weather` endpoint.

use weather_core::{FetchError, ProxyClient, WeatherSource};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn forecast_body() -> serde_json::Value {
    serde_json::json!({
        "location": { "name": "London", "country": "United Kingdom", "localtime": "2024-01-15 12:30" },
        "current": {
            "temp_c": 21.6, "temp_f": 70.9, "feelslike_c": 20.4, "feelslike_f": 68.7,
            "humidity": 64, "wind_kph": 13.0, "pressure_mb": 1012.0,
            "condition": { "text": "Partly cloudy", "icon": "//cdn.weatherapi.com/weather/64x64/day/116.png" }
        },
        "forecast": { "forecastday": [
            { "date": "2024-01-15", "day": { "maxtemp_c": 22.4, "maxtemp_f": 72.3, "mintemp_c": 11.5, "mintemp_f": 52.7,
              "avgtemp_c": 17.0, "condition": { "text": "Sunny", "icon": "//cdn.weatherapi.com/weather/64x64/day/113.png" } } }
        ] }
    })
}

#[tokio::test]
async fn fetch_success_decodes_snapshot() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/weather"))
        .and(query_param("location", "London"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ProxyClient::new(mock_server.uri());
    let snapshot = client.fetch("London").await.expect("snapshot");

    assert_eq!(snapshot.location.name, "London");
    assert_eq!(snapshot.current.temp_c, 21.6);
    assert_eq!(snapshot.forecast.forecastday.len(), 1);
}

#[tokio::test]
async fn fetch_url_encodes_location() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/weather"))
        .and(query_param("location", "São Paulo, BR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ProxyClient::new(mock_server.uri());
    assert!(client.fetch("São Paulo, BR").await.is_ok());
}

#[tokio::test]
async fn bad_request_surfaces_server_message() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/weather"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(serde_json::json!({ "error": "Location is required" })),
        )
        .mount(&mock_server)
        .await;

    let client = ProxyClient::new(mock_server.uri());
    let err = client.fetch("x").await.unwrap_err();

    assert!(matches!(err, FetchError::Status { status: 400, .. }));
    assert_eq!(err.user_message(), "Location is required");
}

#[tokio::test]
async fn server_error_without_json_body_uses_generic_message() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/weather"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let client = ProxyClient::new(mock_server.uri());
    let err = client.fetch("London").await.unwrap_err();

    assert!(matches!(err, FetchError::Status { status: 502, message: None }));
    assert_eq!(err.user_message(), "Failed to fetch weather data");
}

#[tokio::test]
async fn malformed_json_is_a_parse_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{ not json"))
        .mount(&mock_server)
        .await;

    let client = ProxyClient::new(mock_server.uri());
    let err = client.fetch("London").await.unwrap_err();

    assert!(matches!(err, FetchError::Parse(_)));
}

#[tokio::test]
async fn unreachable_proxy_is_a_transport_error() {
    // Port 9 (discard) is not expected to accept HTTP connections.
    let client = ProxyClient::new("http://127.0.0.1:9");
    let err = client.fetch("London").await.unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)));
}
