//! Capability interface over the external map SDK.
//!
//! Markers and popups are SDK widgets; the session layer only needs to
//! place, remove and write to them. A production adapter wraps the real
//! SDK; `RecordingMap` stands in for it in tests and the demo binary.

use tenkimap_weather::Location;
use thiserror::Error;

/// Map widget identifiers handed out by the adapter
pub type MarkerId = u64;
pub type PopupId = u64;

/// Map SDK errors
#[derive(Debug, Error)]
pub enum MapError {
    #[error("Map SDK load failed: {0}")]
    LoadFailed(String),
}

/// Bootstrap options for the map widget
#[derive(Debug, Clone)]
pub struct MapOptions {
    pub center: Location,
    pub zoom: u8,
    pub min_zoom: u8,
    pub tiltable: bool,
    pub rotatable: bool,
    pub mouse_wheel_reverse_zoom: bool,
    pub center_zoom: bool,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            // Tokyo
            center: Location::new(35.6883444933389, 139.75312809703533),
            zoom: 10,
            min_zoom: 3,
            tiltable: true,
            rotatable: true,
            mouse_wheel_reverse_zoom: true,
            center_zoom: false,
        }
    }
}

/// SDK style identifiers for a marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerStyle {
    pub style_id: String,
    pub content_style_id: String,
}

impl MarkerStyle {
    /// Large red marker with a star glyph, used for the weather POIs.
    pub fn red_star() -> Self {
        Self {
            style_id: "MARKER_COLOR_ID_RED_L".to_string(),
            content_style_id: "MARKER_NUMBER_ID_STAR_L".to_string(),
        }
    }
}

/// Operations the session layer needs from the map SDK.
pub trait MapSurface {
    /// Initialize the map widget. Failure aborts bootstrap.
    fn load(&mut self, options: &MapOptions) -> Result<(), MapError>;

    /// Place a marker and return its widget id.
    fn add_marker(&mut self, location: Location, style: &MarkerStyle) -> MarkerId;

    /// Attach a popup widget at a location.
    fn attach_popup(&mut self, location: Location, html: String) -> PopupId;

    /// Remove a previously attached popup widget.
    fn remove_popup(&mut self, id: PopupId);

    /// Replace the forecast board's content wholesale.
    fn set_board_html(&mut self, html: String);

    /// Toggle the global loading indicator.
    fn set_loading(&mut self, visible: bool);
}

/// Recording fake for tests and the demo binary.
///
/// Every call is recorded; attached popups and markers stay inspectable so
/// tests can assert on widget lifetimes without a real SDK.
#[derive(Debug, Default)]
pub struct RecordingMap {
    pub loaded: bool,
    /// Make the next `load` call fail (simulates SDK load error)
    pub fail_load: bool,
    pub markers: Vec<(MarkerId, Location, MarkerStyle)>,
    /// Currently attached popups (removed ones are dropped from here)
    pub popups: Vec<(PopupId, Location, String)>,
    pub removed_popups: Vec<PopupId>,
    pub board_html: String,
    pub loading: bool,
    pub loading_toggles: Vec<bool>,
    next_id: u64,
}

impl RecordingMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_load: true,
            ..Self::default()
        }
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl MapSurface for RecordingMap {
    fn load(&mut self, _options: &MapOptions) -> Result<(), MapError> {
        if self.fail_load {
            return Err(MapError::LoadFailed("API error".to_string()));
        }
        self.loaded = true;
        Ok(())
    }

    fn add_marker(&mut self, location: Location, style: &MarkerStyle) -> MarkerId {
        let id = self.next_id();
        self.markers.push((id, location, style.clone()));
        id
    }

    fn attach_popup(&mut self, location: Location, html: String) -> PopupId {
        let id = self.next_id();
        self.popups.push((id, location, html));
        id
    }

    fn remove_popup(&mut self, id: PopupId) {
        self.popups.retain(|(popup_id, _, _)| *popup_id != id);
        self.removed_popups.push(id);
    }

    fn set_board_html(&mut self, html: String) {
        self.board_html = html;
    }

    fn set_loading(&mut self, visible: bool) {
        self.loading = visible;
        self.loading_toggles.push(visible);
    }
}
