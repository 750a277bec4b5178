//! Map session layer for TenkiMap
//!
//! Owns the map/marker lifecycle, the 7-day forecast board and the today
//! popup. The map SDK itself sits behind the `MapSurface` capability trait,
//! so everything here runs against a recording fake in tests.

pub mod board;
pub mod controller;
pub mod error_mapping;
pub mod html;
pub mod map;

pub use board::ForecastBoard;
pub use controller::MapController;
pub use map::{MapError, MapOptions, MapSurface, MarkerStyle, RecordingMap};
