//! Weather data layer for TenkiMap
//!
//! Wraps the backend `/search/weather/*` endpoints in async calls, caches
//! per-location today forecasts, and provides the date, percentage and icon
//! helpers used by the forecast board.

pub mod cache;
pub mod client;
pub mod datefmt;
pub mod icon;
pub mod text;
pub mod types;

pub use cache::PopupCache;
pub use client::SearchClient;
pub use datefmt::{format_date, DateContext};
pub use icon::IconResolver;
pub use text::{extract_percent, PrecipChance};
pub use types::*;
