//! Location search controller
//!
//! Owns the search state and forwards queries to the completion and
//! geocoding services. Service requests run on their own tasks and report
//! back as [`Event`]s, which must be fed to [`LocationSearchController::handle`]
//! on the task that owns the controller.

use crate::error::Result;
use crate::format::text::detail_text;
use crate::format::LabelSet;
use crate::geo::{Geocoder, PlaceCompleter, Placemark, Suggestion};
use crate::search::state::{AddressDetail, LookupStatus, SearchState};
use std::sync::Arc;
use tokio::sync::mpsc::{UnboundedSender, WeakUnboundedSender};
use tracing::{debug, warn};

/// Input to the controller: UI actions and service responses
#[derive(Debug)]
pub enum Event {
    /// The search field changed
    QueryChanged(String),
    /// A suggestion row was chosen
    SuggestionSelected(Suggestion),
    /// The search affordance was triggered for the current query
    Search,
    /// The completer answered
    SuggestionsReady {
        results: Result<Vec<Suggestion>>,
        for_query: String,
    },
    /// The geocoder answered
    GeocodeReady {
        result: Result<Option<Placemark>>,
        for_query: String,
    },
}

/// View-model for the place lookup screen
pub struct LocationSearchController<C, G> {
    completer: Arc<C>,
    geocoder: Arc<G>,
    labels: LabelSet,
    state: SearchState,
    /// Fragment currently awaiting a completion response
    in_flight: Option<String>,
    /// Set once a lookup is confirmed, cleared by the next edit
    searched: bool,
    events: WeakUnboundedSender<Event>,
}

impl<C, G> LocationSearchController<C, G>
where
    C: PlaceCompleter + 'static,
    G: Geocoder + 'static,
{
    /// Create a controller whose service responses are posted to `events`
    ///
    /// Only a weak handle to the channel is kept, so the channel closes once
    /// every other sender is gone and no request is outstanding.
    pub fn new(
        completer: Arc<C>,
        geocoder: Arc<G>,
        labels: LabelSet,
        events: &UnboundedSender<Event>,
    ) -> Self {
        Self {
            completer,
            geocoder,
            labels,
            state: SearchState::default(),
            in_flight: None,
            searched: false,
            events: events.downgrade(),
        }
    }

    /// Current state
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Apply one event
    pub fn handle(&mut self, event: Event) {
        match event {
            Event::QueryChanged(query) => self.on_query_changed(&query),
            Event::SuggestionSelected(suggestion) => self.on_suggestion_selected(suggestion),
            Event::Search => self.search(),
            Event::SuggestionsReady { results, for_query } => {
                self.on_suggestions_ready(results, &for_query)
            }
            Event::GeocodeReady { result, for_query } => self.on_geocode_ready(result, &for_query),
        }
    }

    /// The user edited the search field
    pub fn on_query_changed(&mut self, new_query: &str) {
        self.state.query = new_query.to_string();

        // Same text as the result on screen: nothing new to complete
        if new_query == self.state.last_searched_query {
            self.state.suggestions.clear();
            return;
        }

        self.searched = false;
        self.state.last_searched_query = new_query.to_string();
        if self.state.status == LookupStatus::Pending {
            self.state.status = LookupStatus::Idle;
        }

        if new_query.is_empty() {
            self.state.suggestions.clear();
        } else if self.in_flight.as_deref() != Some(new_query) {
            self.request_completions(new_query.to_string());
        }
    }

    /// The completer answered for `for_query`
    pub fn on_suggestions_ready(&mut self, results: Result<Vec<Suggestion>>, for_query: &str) {
        if self.in_flight.as_deref() == Some(for_query) {
            self.in_flight = None;
        }

        if self.state.query.is_empty() {
            self.state.suggestions.clear();
            return;
        }

        let results = match results {
            Ok(results) => results,
            Err(e) => {
                warn!("Completion for {:?} failed: {}", for_query, e);
                return;
            }
        };

        if self.searched || for_query != self.state.query {
            debug!("Discarding stale suggestions for {:?}", for_query);
            return;
        }

        self.state.suggestions = results;
    }

    /// A suggestion row was chosen
    pub fn on_suggestion_selected(&mut self, suggestion: Suggestion) {
        self.state.query = suggestion.title;
        self.state.last_searched_query = self.state.query.clone();
        self.state.suggestions.clear();
        self.search();
    }

    /// Look up the current query
    pub fn search(&mut self) {
        self.state.suggestions.clear();
        self.state.address_detail = None;
        self.searched = true;

        if self.state.query.trim().is_empty() {
            self.state.status = LookupStatus::Idle;
            return;
        }

        self.state.status = LookupStatus::Pending;
        self.request_geocode(self.state.query.clone());
    }

    /// The geocoder answered for `for_query`
    pub fn on_geocode_ready(&mut self, result: Result<Option<Placemark>>, for_query: &str) {
        if !self.searched || for_query != self.state.query {
            debug!("Discarding stale geocode result for {:?}", for_query);
            return;
        }

        match result {
            Ok(Some(placemark)) => {
                let text = detail_text(&placemark, self.labels);
                self.state.address_detail = Some(AddressDetail { placemark, text });
                self.state.status = LookupStatus::Found;
            }
            Ok(None) => {
                self.state.address_detail = None;
                self.state.status = LookupStatus::NotFound;
            }
            Err(e) => {
                warn!("Geocoding {:?} failed: {}", for_query, e);
                self.state.address_detail = None;
                self.state.status = LookupStatus::Failed(e.to_string());
            }
        }
    }

    fn request_completions(&mut self, fragment: String) {
        let Some(events) = self.events.upgrade() else {
            debug!("Event channel closed, not completing {:?}", fragment);
            return;
        };

        debug!("Requesting completions for {:?}", fragment);
        self.in_flight = Some(fragment.clone());
        let completer = Arc::clone(&self.completer);

        tokio::spawn(async move {
            let results = completer.complete(&fragment).await;
            let _ = events.send(Event::SuggestionsReady {
                results,
                for_query: fragment,
            });
        });
    }

    fn request_geocode(&mut self, query: String) {
        let Some(events) = self.events.upgrade() else {
            debug!("Event channel closed, not geocoding {:?}", query);
            return;
        };

        debug!("Geocoding {:?}", query);
        let geocoder = Arc::clone(&self.geocoder);

        tokio::spawn(async move {
            let result = geocoder.geocode(&query).await;
            let _ = events.send(Event::GeocodeReady {
                result,
                for_query: query,
            });
        });
    }
}
