//! The view controller: owns the selected unit and the last snapshot, and
//! keeps whatever front-end it drives in step with them.
//!
//! Front-ends implement [`WeatherView`] and forward user input through
//! [`ViewController::handle_event`]. Everything they display comes from
//! [`render_view`], so the output depends only on the held snapshot and the
//! selected unit.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
    client::{FetchError, WeatherSource},
    geolocation::Geolocator,
    model::WeatherSnapshot,
    unit::DisplayUnit,
    view::{WeatherViewModel, render_view},
};

/// Looked up when geolocation is denied or unavailable.
pub const DEFAULT_LOCATION: &str = "London";

/// Render target driven by the controller.
pub trait WeatherView: Send {
    /// Current contents of the search box.
    fn search_text(&self) -> String;

    /// A request for `query` is in flight; stays until weather or an error
    /// replaces it.
    fn show_loading(&mut self, query: &str);

    fn show_weather(&mut self, view: &WeatherViewModel);

    /// Replaces the current-conditions panel with an error indicator.
    fn show_error(&mut self, message: &str);

    /// Marks `unit` as the active toggle.
    fn show_unit(&mut self, unit: DisplayUnit);
}

/// User input a front-end forwards to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// Search button pressed, or Enter in the search box.
    Search,
    SelectUnit(DisplayUnit),
}

/// An issued fetch. Only the most recently issued ticket may update the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    query: String,
}

impl FetchTicket {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug)]
pub struct ViewController<V> {
    source: Arc<dyn WeatherSource>,
    geolocator: Option<Box<dyn Geolocator>>,
    view: V,
    default_location: String,
    unit: DisplayUnit,
    snapshot: Option<WeatherSnapshot>,
    last_issued: u64,
}

impl<V: WeatherView> ViewController<V> {
    pub fn new(source: Arc<dyn WeatherSource>, view: V) -> Self {
        Self {
            source,
            geolocator: None,
            view,
            default_location: DEFAULT_LOCATION.to_string(),
            unit: DisplayUnit::default(),
            snapshot: None,
            last_issued: 0,
        }
    }

    pub fn with_geolocator(mut self, geolocator: Box<dyn Geolocator>) -> Self {
        self.geolocator = Some(geolocator);
        self
    }

    pub fn with_default_location(mut self, location: impl Into<String>) -> Self {
        self.default_location = location.into();
        self
    }

    /// Starting unit, for hosts that remember the user's last choice.
    pub fn with_unit(mut self, unit: DisplayUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn unit(&self) -> DisplayUnit {
        self.unit
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Shared handle to the source, for hosts that run fetches themselves
    /// between [`begin_fetch`](Self::begin_fetch) and
    /// [`complete_fetch`](Self::complete_fetch).
    pub fn source(&self) -> Arc<dyn WeatherSource> {
        Arc::clone(&self.source)
    }

    /// Syncs the unit toggle, then loads the default location.
    pub async fn initialize(&mut self) {
        self.view.show_unit(self.unit);
        self.load_default_location().await;
    }

    pub async fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Search => self.fetch_weather(None).await,
            UiEvent::SelectUnit(unit) => self.set_unit(unit),
        }
    }

    /// One geolocation attempt; any failure falls back to the default location.
    pub async fn load_default_location(&mut self) {
        let position = match &self.geolocator {
            Some(geolocator) => Some(geolocator.current_position().await),
            None => None,
        };

        match position {
            Some(Ok(coords)) => self.fetch_weather(Some(&coords.to_query())).await,
            Some(Err(e)) => {
                warn!(error = %e, "geolocation failed, using default location");
                self.fetch_default().await;
            }
            None => {
                debug!("no geolocation capability, using default location");
                self.fetch_default().await;
            }
        }
    }

    async fn fetch_default(&mut self) {
        let location = self.default_location.clone();
        self.fetch_weather(Some(&location)).await;
    }

    /// Fetches `query`, or the search box contents when `query` is `None`.
    /// An empty query does nothing.
    pub async fn fetch_weather(&mut self, query: Option<&str>) {
        let Some(ticket) = self.begin_fetch(query) else {
            return;
        };
        let result = self.source.fetch(ticket.query()).await;
        self.complete_fetch(ticket, result);
    }

    /// Resolves the query, issues a ticket for it and puts the view in its
    /// loading state. Returns `None`, touching nothing, when the query is empty.
    pub fn begin_fetch(&mut self, query: Option<&str>) -> Option<FetchTicket> {
        let query = match query {
            Some(q) if !q.trim().is_empty() => q.trim().to_string(),
            _ => self.view.search_text().trim().to_string(),
        };
        if query.is_empty() {
            return None;
        }

        self.last_issued += 1;
        self.view.show_loading(&query);
        Some(FetchTicket { seq: self.last_issued, query })
    }

    /// Applies the outcome of `ticket`. Returns `false` if a newer fetch was
    /// issued in the meantime and the outcome was dropped.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<WeatherSnapshot, FetchError>,
    ) -> bool {
        if ticket.seq != self.last_issued {
            debug!(seq = ticket.seq, latest = self.last_issued, "dropping stale fetch result");
            return false;
        }

        match result {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot);
                self.render();
            }
            Err(e) => {
                warn!(location = %ticket.query, error = %e, "weather fetch failed");
                self.show_error(&e.user_message());
            }
        }
        true
    }

    /// Switches units and re-renders the held snapshot without fetching.
    pub fn set_unit(&mut self, unit: DisplayUnit) {
        if self.unit == unit {
            return;
        }
        self.unit = unit;
        self.view.show_unit(unit);
        self.render();
    }

    pub fn render(&mut self) {
        if let Some(snapshot) = &self.snapshot {
            let view = render_view(snapshot, self.unit);
            self.view.show_weather(&view);
        }
    }

    /// Leaves the held snapshot in place.
    pub fn show_error(&mut self, message: &str) {
        self.view.show_error(message);
    }
}
