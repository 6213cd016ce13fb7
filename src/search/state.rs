//! Observable search state
//!
//! A snapshot of everything a screen needs to render. Published to
//! subscribers after each controller update.

use crate::geo::{Placemark, Suggestion};
use serde::{Deserialize, Serialize};

/// Outcome of the most recent lookup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum LookupStatus {
    /// No lookup issued yet, or the user is typing
    #[default]
    Idle,
    /// Waiting for the geocoder
    Pending,
    /// A placemark was resolved
    Found,
    /// The geocoder had no match
    NotFound,
    /// The geocoder reported an error
    Failed(String),
}

impl LookupStatus {
    /// True once a lookup has finished, whatever the outcome
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            LookupStatus::Found | LookupStatus::NotFound | LookupStatus::Failed(_)
        )
    }
}

/// Resolved address of the selected place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressDetail {
    pub placemark: Placemark,
    /// Labeled lines ready for display
    pub text: String,
}

/// Everything the screen renders
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchState {
    /// Text in the search field
    pub query: String,
    /// Query the current suggestions or detail belong to
    pub last_searched_query: String,
    /// Completion candidates, in provider order
    pub suggestions: Vec<Suggestion>,
    /// Result of the last lookup
    pub address_detail: Option<AddressDetail>,
    pub status: LookupStatus,
}

impl SearchState {
    /// Detail text, or an empty string when nothing is resolved
    pub fn detail_text(&self) -> &str {
        self.address_detail
            .as_ref()
            .map(|detail| detail.text.as_str())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_empty() {
        let state = SearchState::default();
        assert!(state.query.is_empty());
        assert!(state.suggestions.is_empty());
        assert_eq!(state.detail_text(), "");
        assert_eq!(state.status, LookupStatus::Idle);
    }

    #[test]
    fn test_is_settled() {
        assert!(!LookupStatus::Idle.is_settled());
        assert!(!LookupStatus::Pending.is_settled());
        assert!(LookupStatus::Found.is_settled());
        assert!(LookupStatus::NotFound.is_settled());
        assert!(LookupStatus::Failed("boom".to_string()).is_settled());
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_value(LookupStatus::Failed("timeout".to_string())).unwrap();
        assert_eq!(json["kind"], "failed");
        assert_eq!(json["message"], "timeout");

        let json = serde_json::to_value(LookupStatus::NotFound).unwrap();
        assert_eq!(json["kind"], "not_found");
    }
}
