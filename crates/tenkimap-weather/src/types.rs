use serde::{Deserialize, Serialize};

/// Geographic location clicked on the map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Cache identity: longitude then latitude, no rounding.
    ///
    /// Distinct floating coordinates are distinct keys even when visually
    /// identical on the map.
    pub fn cache_key(&self) -> String {
        format!("{},{}", self.lng, self.lat)
    }

    /// Position string as the backend expects it (`"lng,lat"`)
    pub fn position(&self) -> String {
        format!("{},{}", self.lng, self.lat)
    }
}

/// Current-conditions forecast returned by the today endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodayForecast {
    pub weather: WeatherInfo,
    /// 8-digit date string `YYYYMMDD`
    pub datetime: String,
    /// Forecast type: "01" forecast, "02" current, "03" past
    #[serde(rename = "type")]
    pub forecast_type: String,
    pub temperature: Temperature,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherInfo {
    pub code: i32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    pub value: f64,
}

impl TodayForecast {
    /// Map the weather code to the remote icon file name.
    ///
    /// Unknown codes map to `不明`.
    pub fn icon_code_name(&self) -> &'static str {
        match self.weather.code {
            0 => "資料無し",
            1 => "100",
            2 => "200",
            3 => "300",
            4 => "303",
            5 => "400",
            _ => "不明",
        }
    }

    /// Human-readable label for the forecast type, `不明` when unknown.
    pub fn type_label(&self) -> &'static str {
        match self.forecast_type.as_str() {
            "01" => "予報",
            "02" => "現況",
            "03" => "過去",
            _ => "不明",
        }
    }
}

/// One day of the 7-day forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekForecastDay {
    pub weather_data: WeekWeatherData,
    pub pref_nm: String,
    pub area_nm: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekWeatherData {
    pub weather_cd: String,
    pub weather_text: String,
    pub forecast_date: String,
    /// Localized precipitation chance, e.g. `４０パーセント` or `－`
    #[serde(rename = "precipChance")]
    pub precip_chance: String,
    pub max_temp_degree: String,
    pub min_temp_degree: String,
    pub reliability: Option<String>,
}

/// Backend response envelope shared by both search endpoints
#[derive(Debug, Deserialize)]
pub struct SearchResponse<T> {
    pub ret: SearchRet<T>,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct SearchRet<T> {
    pub status: String,
    #[serde(default)]
    pub message: Option<SearchMessage<T>>,
}

#[derive(Debug, Deserialize)]
pub struct SearchMessage<T> {
    pub result: T,
}

#[derive(Debug, Deserialize)]
pub struct TodayResult {
    pub item: Vec<TodayForecast>,
}

#[derive(Debug, Deserialize)]
pub struct WeekResult {
    pub weather: Vec<WeekForecastDay>,
}

/// Weather layer errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Today weather search failed: status {0}")]
    TodaySearchFailed(String),
    #[error("Week weather search failed: status {0}")]
    WeekSearchFailed(String),
    #[error("Today weather search returned no items")]
    EmptyResult,
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Date formatting errors
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("Invalid date string: {0}")]
    InvalidDate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forecast(code: i32, forecast_type: &str) -> TodayForecast {
        TodayForecast {
            weather: WeatherInfo {
                code,
                text: "晴れ".to_string(),
            },
            datetime: "20240115".to_string(),
            forecast_type: forecast_type.to_string(),
            temperature: Temperature { value: 8.5 },
        }
    }

    #[test]
    fn test_cache_key_is_lng_then_lat() {
        let loc = Location::new(35.5, 139.75);
        assert_eq!(loc.cache_key(), "139.75,35.5");
    }

    #[test]
    fn test_cache_keys_distinct_per_coordinate() {
        let a = Location::new(35.0, 139.0);
        let b = Location::new(35.0, 139.0000001);
        let c = Location::new(35.0000001, 139.0);
        assert_ne!(a.cache_key(), b.cache_key());
        assert_ne!(a.cache_key(), c.cache_key());
        assert_ne!(b.cache_key(), c.cache_key());
    }

    #[test]
    fn test_icon_code_name_mapping() {
        assert_eq!(forecast(0, "01").icon_code_name(), "資料無し");
        assert_eq!(forecast(1, "01").icon_code_name(), "100");
        assert_eq!(forecast(2, "01").icon_code_name(), "200");
        assert_eq!(forecast(3, "01").icon_code_name(), "300");
        assert_eq!(forecast(4, "01").icon_code_name(), "303");
        assert_eq!(forecast(5, "01").icon_code_name(), "400");
    }

    #[test]
    fn test_icon_code_name_unmapped_code() {
        assert_eq!(forecast(99, "01").icon_code_name(), "不明");
        assert_eq!(forecast(-1, "01").icon_code_name(), "不明");
    }

    #[test]
    fn test_type_label_mapping() {
        assert_eq!(forecast(1, "01").type_label(), "予報");
        assert_eq!(forecast(1, "02").type_label(), "現況");
        assert_eq!(forecast(1, "03").type_label(), "過去");
        assert_eq!(forecast(1, "04").type_label(), "不明");
    }

    #[test]
    fn test_today_forecast_deserializes_type_field() {
        let json = serde_json::json!({
            "weather": { "code": 2, "text": "くもり" },
            "datetime": "20240115",
            "type": "02",
            "temperature": { "value": 6.0 }
        });
        let forecast: TodayForecast = serde_json::from_value(json).unwrap();
        assert_eq!(forecast.forecast_type, "02");
        assert_eq!(forecast.weather.code, 2);
    }

    #[test]
    fn test_week_day_deserializes_precip_chance_rename() {
        let json = serde_json::json!({
            "weather_data": {
                "weather_cd": "100",
                "weather_text": "晴れ",
                "forecast_date": "2024-01-15",
                "precipChance": "２０パーセント",
                "max_temp_degree": "10",
                "min_temp_degree": "2",
                "reliability": null
            },
            "pref_nm": "東京都",
            "area_nm": "東京地方"
        });
        let day: WeekForecastDay = serde_json::from_value(json).unwrap();
        assert_eq!(day.weather_data.precip_chance, "２０パーセント");
        assert!(day.weather_data.reliability.is_none());
    }
}
