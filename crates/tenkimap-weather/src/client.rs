//! Backend search API client.
//!
//! Both `/search/weather/*` endpoints answer with the same envelope
//! (`ret.status` / `ret.message.result`); this client is the single place
//! where that envelope is translated into `Result` values.

use chrono::{Duration as ChronoDuration, Local, NaiveDate};
use reqwest::Client;
use std::time::Duration;
use tracing::instrument;

use crate::types::{
    Location, SearchResponse, TodayForecast, TodayResult, WeatherError, WeekForecastDay,
    WeekResult,
};

const TODAY_API: &str = "/search/weather/search_weather_info";
const WEEK_API: &str = "/search/weather/search_weather_week_info";

/// Geodetic datum sent with every week request.
const WEEK_DATUM: &str = "JGD";

/// Client for the backend weather search endpoints.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    base_url: String,
}

impl SearchClient {
    /// Create a client for the given backend base URL.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, WeatherError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch the current-conditions forecast for a location.
    ///
    /// Resolves with the first forecast item on status `OK`; a non-OK status
    /// becomes `TodaySearchFailed` and transport errors are forwarded.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_today(&self, location: &Location) -> Result<TodayForecast, WeatherError> {
        let url = format!("{}{}", self.base_url, TODAY_API);

        let response = self
            .client
            .get(&url)
            .query(&[("position", location.position())])
            .send()
            .await?;

        let body: SearchResponse<TodayResult> = response.json().await?;

        if body.ret.status != "OK" {
            return Err(WeatherError::TodaySearchFailed(body.ret.status));
        }

        let message = body
            .ret
            .message
            .ok_or_else(|| WeatherError::Parse("today response missing message".to_string()))?;

        message
            .result
            .item
            .into_iter()
            .next()
            .ok_or(WeatherError::EmptyResult)
    }

    /// Fetch the 7-day forecast for a location.
    ///
    /// The request covers the `[today, today+7]` window. Entries come back
    /// ordered earliest-first; the caller decides how failures surface.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_week(&self, location: &Location) -> Result<Vec<WeekForecastDay>, WeatherError> {
        let (datefrom, dateto) = date_window(Local::now().date_naive());
        let url = format!("{}{}", self.base_url, WEEK_API);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("position", location.position()),
                ("datefrom", datefrom),
                ("dateto", dateto),
                ("datum", WEEK_DATUM.to_string()),
            ])
            .send()
            .await?;

        let body: SearchResponse<WeekResult> = response.json().await?;

        if body.ret.status != "OK" {
            return Err(WeatherError::WeekSearchFailed(body.ret.status));
        }

        let message = body
            .ret
            .message
            .ok_or_else(|| WeatherError::Parse("week response missing message".to_string()))?;

        let days = message.result.weather;
        if days.len() != 7 {
            tracing::warn!("Week search returned {} entries, expected 7", days.len());
        }

        Ok(days)
    }
}

/// 8-digit `YYYYMMDD` strings for today and seven days out.
fn date_window(today: NaiveDate) -> (String, String) {
    let to = today + ChronoDuration::days(7);
    (
        today.format("%Y%m%d").to_string(),
        to.format("%Y%m%d").to_string(),
    )
}
