//! Maps service-layer errors onto the core error hierarchy so the binary
//! boundary can surface `user_message()` strings.

use tenkimap_core::AppError;
use tenkimap_weather::WeatherError;

use crate::map::MapError;

/// Weather errors: transport failures keep their network classification,
/// domain failures become generic service errors.
pub fn map_weather_error(err: WeatherError) -> AppError {
    match err {
        WeatherError::Network(e) => AppError::Network(e.into()),
        other => AppError::Service(other.to_string()),
    }
}

/// Map SDK errors have no network component; they are service errors.
pub fn map_map_error(err: MapError) -> AppError {
    AppError::Service(err.to_string())
}
