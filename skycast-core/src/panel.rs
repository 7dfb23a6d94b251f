//! Weather panel lifecycle: {no-location} → {loading} → {loaded}, re-entered
//! on every selection change.
//!
//! The panel owns the one snapshot and the one selected-location value. Each
//! selection change hands out a ticket with a monotonically increasing
//! token; only the completion carrying the latest token may touch visible
//! state, so an overlapping fetch for a superseded selection is discarded on
//! arrival instead of silently winning.

use crate::model::WeatherSnapshot;
use crate::provider::FetchError;

/// Permission to run one fetch on the panel's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub token: u64,
    pub location: String,
}

/// What the renderer should show.
#[derive(Debug, PartialEq)]
pub enum PanelView<'a> {
    /// No location selected; the panel is absent entirely.
    Hidden,
    /// A location is selected but no snapshot has ever loaded for it.
    Loading,
    /// A snapshot is on display. It may be stale: a failed refresh after a
    /// selection change keeps the previous snapshot visible.
    Loaded(&'a WeatherSnapshot),
}

#[derive(Debug, Default)]
pub struct WeatherPanel {
    location: Option<String>,
    snapshot: Option<WeatherSnapshot>,
    next_token: u64,
    inflight: Option<u64>,
}

impl WeatherPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Change the selection. Returns a ticket when a fetch should run.
    ///
    /// Clearing the selection unmounts the panel and discards any snapshot.
    /// Re-selecting the current location is a no-op.
    pub fn select(&mut self, location: Option<String>) -> Option<FetchTicket> {
        match location {
            None => {
                self.location = None;
                self.snapshot = None;
                self.inflight = None;
                None
            }
            Some(name) => {
                if self.location.as_deref() == Some(name.as_str()) {
                    return None;
                }
                self.location = Some(name.clone());
                self.next_token += 1;
                self.inflight = Some(self.next_token);
                Some(FetchTicket {
                    token: self.next_token,
                    location: name,
                })
            }
        }
    }

    /// Apply the outcome of a fetch. Returns whether visible state changed.
    pub fn complete(
        &mut self,
        token: u64,
        result: Result<WeatherSnapshot, FetchError>,
    ) -> bool {
        if self.inflight != Some(token) {
            tracing::debug!(token, "discarding completion for superseded fetch");
            return false;
        }
        self.inflight = None;
        match result {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot);
                true
            }
            Err(e) => {
                // Stale retention: the previous snapshot (possibly for the
                // previously selected location) stays on display.
                tracing::warn!("weather fetch failed: {e}");
                false
            }
        }
    }

    /// True while the latest selection's fetch has not completed.
    pub fn is_fetching(&self) -> bool {
        self.inflight.is_some()
    }

    pub fn view(&self) -> PanelView<'_> {
        match (&self.location, &self.snapshot) {
            (None, _) => PanelView::Hidden,
            (Some(_), Some(snapshot)) => PanelView::Loaded(snapshot),
            (Some(_), None) => PanelView::Loading,
        }
    }
}
