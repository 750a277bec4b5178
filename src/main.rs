use std::time::Duration;

use tenkimap_core::AppError;
use tenkimap_ui::error_mapping::{map_map_error, map_weather_error};
use tenkimap_ui::{ForecastBoard, MapController, RecordingMap};
use tenkimap_weather::{IconResolver, SearchClient};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        tracing::error!("TenkiMap failed: {}", e);
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    // Initialize core
    tenkimap_core::init()?;

    let (config, _validation) = tenkimap_core::Config::load_validated()?;

    tracing::info!("TenkiMap session starting");

    let client = SearchClient::new(
        config.search.base_url.clone(),
        Duration::from_secs(config.search.timeout_secs),
    )
    .map_err(map_weather_error)?;
    let icons = IconResolver::new(config.icons.probe_base_url.clone())
        .map_err(|e| AppError::Network(e.into()))?;
    let board = ForecastBoard::new(icons);

    // The demo binary runs against the recording map adapter; a real SDK
    // adapter would implement MapSurface the same way.
    let mut controller = MapController::new(
        RecordingMap::new(),
        client,
        board,
        config.icons.image_base_url.clone(),
    );

    controller.bootstrap().await.map_err(map_map_error)?;

    println!("TenkiMap - Weather Forecast Map Session");
    println!("\nConfiguration:");
    println!("  Config directory: {}", config.config_dir.display());
    println!("  Search backend:   {}", config.search.base_url);
    println!("\nSession:");
    println!("  Markers placed:   {}", controller.markers().len());
    println!("  Cached locations: {}", controller.cached_locations());

    Ok(())
}
