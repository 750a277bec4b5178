//! Map session controller: marker lifecycle, board refresh and the today
//! popup, all owned in one place instead of page globals.

use tenkimap_weather::{Location, PopupCache, SearchClient, TodayForecast, WeatherError};

use crate::board::ForecastBoard;
use crate::html;
use crate::map::{MapError, MapOptions, MapSurface, MarkerId, MarkerStyle, PopupId};

/// The five fixed weather POIs: Tokyo, Sapporo, Osaka, Fukuoka, Naha.
pub fn weather_poi() -> [Location; 5] {
    [
        Location::new(35.6883444933389, 139.75312809703533),
        Location::new(43.060015261847646, 141.35439106869504),
        Location::new(34.670229387890956, 135.49805041142122),
        Location::new(33.589826045571265, 130.40334745425807),
        Location::new(26.219315985997966, 127.67049106354028),
    ]
}

/// Owns the map adapter and all session state: the popup cache, the single
/// current popup widget and the placed markers.
///
/// There is no cancellation: a marker click while a previous refresh is
/// still pending lets both complete, and whichever finishes last wins the
/// final board write.
pub struct MapController<M: MapSurface> {
    map: M,
    client: SearchClient,
    board: ForecastBoard,
    image_base_url: String,
    cache: PopupCache,
    current_popup: Option<PopupId>,
    markers: Vec<(MarkerId, Location)>,
}

impl<M: MapSurface> MapController<M> {
    pub fn new(
        map: M,
        client: SearchClient,
        board: ForecastBoard,
        image_base_url: impl Into<String>,
    ) -> Self {
        Self {
            map,
            client,
            board,
            image_base_url: image_base_url.into(),
            cache: PopupCache::new(),
            current_popup: None,
            markers: Vec::new(),
        }
    }

    /// Bootstrap the map: load the widget, place the five POI markers and
    /// pre-populate the board with Tokyo's forecast.
    ///
    /// A load failure is logged and aborts bootstrap; there is no retry.
    pub async fn bootstrap(&mut self) -> Result<(), MapError> {
        let options = MapOptions::default();
        if let Err(e) = self.map.load(&options) {
            tracing::error!("Map bootstrap failed: {}", e);
            return Err(e);
        }

        let style = MarkerStyle::red_star();
        for location in weather_poi() {
            let id = self.map.add_marker(location, &style);
            self.markers.push((id, location));
        }

        self.week_forecast(weather_poi()[0]).await;
        Ok(())
    }

    /// Marker click handler: refresh the board for that marker's location.
    pub async fn handle_marker_click(&mut self, marker: MarkerId) {
        let location = self
            .markers
            .iter()
            .find(|(id, _)| *id == marker)
            .map(|(_, location)| *location);

        match location {
            Some(location) => self.week_forecast(location).await,
            None => tracing::warn!("Click on unknown marker {}", marker),
        }
    }

    /// Fetch the week forecast and rebuild the board, then refresh the
    /// today popup at the same location.
    ///
    /// Every failure on this path is logged and leaves the board untouched;
    /// the user recovers by clicking the marker again.
    pub async fn week_forecast(&mut self, location: Location) {
        let days = match self.client.fetch_week(&location).await {
            Ok(days) => days,
            Err(e) => {
                tracing::error!("Week weather search failed: {}", e);
                return;
            }
        };

        let content = match self.board.build_cards(&days).await {
            Ok(content) => content,
            Err(e) => {
                tracing::error!("Week forecast card build failed: {}", e);
                return;
            }
        };

        self.map.set_board_html(content.html);
        self.today_popup(location, &content.last_area_name).await;
    }

    /// Show the today popup for a location, fetching at most once per
    /// coordinate key for the session.
    ///
    /// Errors are logged; on the uncached path no popup is shown and no
    /// cache entry is written.
    pub async fn today_popup(&mut self, location: Location, area_name: &str) {
        if let Some(forecast) = self.cache.get(&location).cloned() {
            self.show_today_popup(&forecast, location, area_name);
            return;
        }

        self.map.set_loading(true);
        let result = self.client.fetch_today(&location).await;
        self.map.set_loading(false);

        match result {
            Ok(forecast) => {
                self.cache.insert(&location, forecast.clone());
                self.show_today_popup(&forecast, location, area_name);
            }
            Err(e @ WeatherError::Network(_)) => {
                tracing::error!("Today weather request failed: {}", e);
            }
            Err(e) => {
                tracing::error!("Today weather search failed: {}", e);
            }
        }
    }

    /// Attach the popup widget, removing the previous one first so at most
    /// one today popup exists on the map.
    fn show_today_popup(&mut self, forecast: &TodayForecast, location: Location, area_name: &str) {
        let popup_html = match html::build_popup_html(forecast, area_name, &self.image_base_url) {
            Ok(popup_html) => popup_html,
            Err(e) => {
                tracing::error!("Today popup render failed: {}", e);
                return;
            }
        };

        if let Some(id) = self.current_popup.take() {
            self.map.remove_popup(id);
        }
        let id = self.map.attach_popup(location, popup_html);
        self.current_popup = Some(id);
    }

    /// The underlying map adapter, for inspection.
    pub fn map(&self) -> &M {
        &self.map
    }

    /// Placed markers with their locations, in placement order.
    pub fn markers(&self) -> &[(MarkerId, Location)] {
        &self.markers
    }

    /// Number of locations with a cached today forecast.
    pub fn cached_locations(&self) -> usize {
        self.cache.len()
    }
}
