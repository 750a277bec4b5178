//! Integration tests for SearchClient against a mock backend.

use std::time::Duration;

use tenkimap_weather::{Location, SearchClient, WeatherError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn tokyo() -> Location {
    Location::new(35.6883444933389, 139.75312809703533)
}

fn client(server: &MockServer) -> SearchClient {
    SearchClient::new(server.uri(), Duration::from_secs(5)).unwrap()
}

/// Helper to build a today-endpoint envelope
fn today_envelope(status: &str, items: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "ret": {
            "status": status,
            "message": { "result": { "item": items } }
        }
    })
}

fn today_item(code: i32, text: &str, temp: f64) -> serde_json::Value {
    serde_json::json!({
        "weather": { "code": code, "text": text },
        "datetime": "20240115",
        "type": "02",
        "temperature": { "value": temp }
    })
}

fn week_day(date: &str, area: &str) -> serde_json::Value {
    serde_json::json!({
        "weather_data": {
            "weather_cd": "100",
            "weather_text": "晴れ",
            "forecast_date": date,
            "precipChance": "１０パーセント",
            "max_temp_degree": "10",
            "min_temp_degree": "2",
            "reliability": "A"
        },
        "pref_nm": "東京都",
        "area_nm": area
    })
}

#[tokio::test]
async fn test_fetch_today_returns_first_item() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/weather/search_weather_info"))
        .and(query_param("position", "139.75312809703533,35.6883444933389"))
        .respond_with(ResponseTemplate::new(200).set_body_json(today_envelope(
            "OK",
            serde_json::json!([today_item(2, "くもり", 6.5), today_item(1, "晴れ", 8.0)]),
        )))
        .mount(&server)
        .await;

    let forecast = client(&server).fetch_today(&tokyo()).await.unwrap();
    assert_eq!(forecast.weather.text, "くもり");
    assert_eq!(forecast.temperature.value, 6.5);
}

#[tokio::test]
async fn test_fetch_today_non_ok_status_is_domain_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/weather/search_weather_info"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "ret": { "status": "NG" } })),
        )
        .mount(&server)
        .await;

    let err = client(&server).fetch_today(&tokyo()).await.unwrap_err();
    assert!(matches!(err, WeatherError::TodaySearchFailed(status) if status == "NG"));
}

#[tokio::test]
async fn test_fetch_today_empty_item_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/weather/search_weather_info"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(today_envelope("OK", serde_json::json!([]))),
        )
        .mount(&server)
        .await;

    let err = client(&server).fetch_today(&tokyo()).await.unwrap_err();
    assert!(matches!(err, WeatherError::EmptyResult));
}

#[tokio::test]
async fn test_fetch_today_transport_error_is_forwarded() {
    let client = SearchClient::new("http://127.0.0.1:1", Duration::from_secs(1)).unwrap();
    let err = client.fetch_today(&tokyo()).await.unwrap_err();
    assert!(matches!(err, WeatherError::Network(_)));
}

#[tokio::test]
async fn test_fetch_week_returns_days_in_order() {
    let server = MockServer::start().await;
    let days: Vec<_> = (15..22)
        .map(|d| week_day(&format!("2024-01-{}", d), "東京地方"))
        .collect();

    Mock::given(method("GET"))
        .and(path("/search/weather/search_weather_week_info"))
        .and(query_param("datum", "JGD"))
        .and(query_param("position", "139.75312809703533,35.6883444933389"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ret": {
                "status": "OK",
                "message": { "result": { "weather": days } }
            }
        })))
        .mount(&server)
        .await;

    let week = client(&server).fetch_week(&tokyo()).await.unwrap();
    assert_eq!(week.len(), 7);
    assert_eq!(week[0].weather_data.forecast_date, "2024-01-15");
    assert_eq!(week[6].weather_data.forecast_date, "2024-01-21");
}

#[tokio::test]
async fn test_fetch_week_non_ok_status_is_domain_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/weather/search_weather_week_info"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "ret": { "status": "ERROR" } })),
        )
        .mount(&server)
        .await;

    let err = client(&server).fetch_week(&tokyo()).await.unwrap_err();
    assert!(matches!(err, WeatherError::WeekSearchFailed(status) if status == "ERROR"));
}

#[tokio::test]
async fn test_fetch_week_sends_eight_digit_date_window() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/weather/search_weather_week_info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ret": {
                "status": "OK",
                "message": { "result": { "weather": [] } }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let _ = client(&server).fetch_week(&tokyo()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let query: std::collections::HashMap<_, _> = requests[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let datefrom = &query["datefrom"];
    let dateto = &query["dateto"];
    assert_eq!(datefrom.len(), 8);
    assert_eq!(dateto.len(), 8);
    assert!(datefrom.chars().all(|c| c.is_ascii_digit()));
    assert!(dateto.chars().all(|c| c.is_ascii_digit()));
}
