//! Place search session
//!
//! [`spawn`] starts a task that owns a [`LocationSearchController`] and
//! applies every UI action and service response in arrival order. Screens
//! talk to it through a [`SearchHandle`] and re-render from the published
//! [`SearchState`].

pub mod controller;
pub mod state;

pub use controller::{Event, LocationSearchController};
pub use state::{AddressDetail, LookupStatus, SearchState};

use crate::error::{Error, Result};
use crate::format::LabelSet;
use crate::geo::{Geocoder, PlaceCompleter, Suggestion};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::debug;

/// Start a search session
///
/// The session runs until every handle is dropped and no service request
/// is outstanding.
pub fn spawn<C, G>(completer: Arc<C>, geocoder: Arc<G>, labels: LabelSet) -> SearchHandle
where
    C: PlaceCompleter + 'static,
    G: Geocoder + 'static,
{
    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let mut controller = LocationSearchController::new(completer, geocoder, labels, &events_tx);
    let (state_tx, state_rx) = watch::channel(controller.state().clone());

    tokio::spawn(async move {
        while let Some(event) = events_rx.recv().await {
            controller.handle(event);
            state_tx.send_if_modified(|published| {
                if published == controller.state() {
                    false
                } else {
                    *published = controller.state().clone();
                    true
                }
            });
        }
        debug!("Search session ended");
    });

    SearchHandle {
        events: events_tx,
        state: state_rx,
    }
}

/// Cloneable handle to a running search session
#[derive(Debug, Clone)]
pub struct SearchHandle {
    events: mpsc::UnboundedSender<Event>,
    state: watch::Receiver<SearchState>,
}

impl SearchHandle {
    fn send(&self, event: Event) -> Result<()> {
        self.events.send(event).map_err(|_| Error::ControllerClosed)
    }

    /// The search field now reads `text`
    pub fn set_query(&self, text: impl Into<String>) -> Result<()> {
        self.send(Event::QueryChanged(text.into()))
    }

    /// Choose a suggestion
    pub fn select(&self, suggestion: Suggestion) -> Result<()> {
        self.send(Event::SuggestionSelected(suggestion))
    }

    /// Suggestion at `index` in the latest published list
    pub fn suggestion(&self, index: usize) -> Option<Suggestion> {
        self.state.borrow().suggestions.get(index).cloned()
    }

    /// Look up the query as typed
    pub fn search(&self) -> Result<()> {
        self.send(Event::Search)
    }

    /// Latest published state
    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.clone()
    }

    /// Wait until the published state satisfies `predicate`
    pub async fn wait_for<F>(&self, predicate: F) -> Result<SearchState>
    where
        F: FnMut(&SearchState) -> bool,
    {
        let mut state = self.state.clone();
        let current = state
            .wait_for(predicate)
            .await
            .map_err(|_| Error::ControllerClosed)?;
        Ok(current.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::testing::{tokyo_tower, FakeCompleter, FakeGeocoder, TOKYO_TOWER_DETAIL};

    fn tokyo_session(labels: LabelSet) -> SearchHandle {
        let completer = FakeCompleter::new()
            .with("Tokyo Tower", vec![Suggestion::new("Tokyo Tower", "Minato, Tokyo")]);
        let geocoder = FakeGeocoder::new().with("Tokyo Tower", tokyo_tower());
        spawn(Arc::new(completer), Arc::new(geocoder), labels)
    }

    #[tokio::test]
    async fn test_session_flow() {
        let handle = tokyo_session(LabelSet::English);

        handle.set_query("Tokyo Tower").unwrap();
        let state = handle.wait_for(|s| !s.suggestions.is_empty()).await.unwrap();
        assert_eq!(state.suggestions.len(), 1);
        assert_eq!(state.suggestions[0].subtitle, "Minato, Tokyo");

        let chosen = handle.suggestion(0).unwrap();
        assert!(handle.suggestion(1).is_none());
        handle.select(chosen).unwrap();
        let state = handle.wait_for(|s| s.status.is_settled()).await.unwrap();

        assert_eq!(state.query, "Tokyo Tower");
        assert!(state.suggestions.is_empty());
        assert_eq!(state.status, LookupStatus::Found);
        assert_eq!(state.detail_text(), TOKYO_TOWER_DETAIL);
        assert_eq!(handle.state(), state);
    }

    #[tokio::test]
    async fn test_session_uses_label_set() {
        let handle = tokyo_session(LabelSet::Japanese);

        handle.select(Suggestion::new("Tokyo Tower", "")).unwrap();
        let state = handle.wait_for(|s| s.status.is_settled()).await.unwrap();

        assert!(state.detail_text().starts_with("国 : Japan"));
    }

    #[tokio::test]
    async fn test_explicit_search_not_found() {
        let handle = tokyo_session(LabelSet::English);

        handle.set_query("Atlantis").unwrap();
        handle.search().unwrap();
        let state = handle.wait_for(|s| s.status.is_settled()).await.unwrap();

        assert_eq!(state.status, LookupStatus::NotFound);
        assert!(state.address_detail.is_none());
    }

    #[tokio::test]
    async fn test_subscribers_see_changes() {
        let handle = tokyo_session(LabelSet::English);
        let mut updates = handle.subscribe();

        handle.set_query("Tokyo").unwrap();
        updates.changed().await.unwrap();
        assert_eq!(updates.borrow_and_update().query, "Tokyo");
    }
}
