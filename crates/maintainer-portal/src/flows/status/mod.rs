//! Status lookup flow: one view, four states.
//!
//! `Idle -> Loading -> Resolved | NotFound`. Lookups are generation-stamped
//! so that when a user re-triggers before the previous request resolves,
//! the latest request always wins; a stale response can never overwrite a
//! newer one.

use serde::Serialize;

use crate::client::{ApiError, PortalClient, StatusResponse};

/// Placeholder text while a lookup is in flight.
pub const LOADING_TEXT: &str = "Loading...";

/// Fixed text for lookups that fail without a server-supplied message.
pub const NOT_FOUND_TEXT: &str = "User not found";

/// What the status screen displays.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum StatusView {
    #[default]
    Idle,
    Loading,
    Resolved { status: String, review: String },
    NotFound { message: String },
}

impl StatusView {
    /// The headline status line.
    pub fn status_text(&self) -> &str {
        match self {
            StatusView::Idle => "",
            StatusView::Loading => LOADING_TEXT,
            StatusView::Resolved { status, .. } => status,
            StatusView::NotFound { message } => message,
        }
    }

    /// The review line; empty unless resolved with one.
    pub fn review_text(&self) -> &str {
        match self {
            StatusView::Resolved { review, .. } => review,
            _ => "",
        }
    }
}

/// Handle for one in-flight lookup. Only the latest ticket can publish its
/// result into the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTicket {
    generation: u64,
}

/// State of the status screen. Each lookup replaces any prior result.
#[derive(Debug, Default)]
pub struct StatusLookup {
    view: StatusView,
    generation: u64,
}

impl StatusLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &StatusView {
        &self.view
    }

    /// Start a lookup. Refuses an empty identifier (the view is untouched);
    /// otherwise enters `Loading` and returns the ticket that is allowed to
    /// complete it.
    pub fn begin(&mut self, id: &str) -> Option<LookupTicket> {
        if id.trim().is_empty() {
            return None;
        }
        self.generation += 1;
        self.view = StatusView::Loading;
        Some(LookupTicket {
            generation: self.generation,
        })
    }

    /// Publish a lookup result. Returns false (view unchanged) when the
    /// ticket is stale, i.e. a newer lookup has started since.
    pub fn complete(
        &mut self,
        ticket: LookupTicket,
        response: Result<StatusResponse, ApiError>,
    ) -> bool {
        if ticket.generation != self.generation {
            return false;
        }

        self.view = match response {
            Ok(body) => match body.maintainer.into_iter().next() {
                Some(record) => StatusView::Resolved {
                    status: record.status,
                    review: record.review.unwrap_or_default(),
                },
                None => StatusView::NotFound {
                    message: body
                        .message
                        .unwrap_or_else(|| NOT_FOUND_TEXT.to_string()),
                },
            },
            Err(_) => StatusView::NotFound {
                message: NOT_FOUND_TEXT.to_string(),
            },
        };
        true
    }

    /// Run one lookup end to end and return the resulting view.
    pub async fn lookup(&mut self, client: &PortalClient, id: &str) -> &StatusView {
        if let Some(ticket) = self.begin(id) {
            let response = client.status(id).await;
            self.complete(ticket, response);
        }
        &self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MaintainerStatus;

    fn found(status: &str, review: Option<&str>) -> Result<StatusResponse, ApiError> {
        Ok(StatusResponse {
            maintainer: vec![MaintainerStatus {
                status: status.to_string(),
                review: review.map(str::to_string),
            }],
            message: None,
        })
    }

    #[test]
    fn empty_identifier_never_starts_a_lookup() {
        let mut lookup = StatusLookup::new();
        assert!(lookup.begin("").is_none());
        assert!(lookup.begin("   ").is_none());
        assert_eq!(lookup.view(), &StatusView::Idle);
    }

    #[test]
    fn begin_shows_the_loading_placeholder() {
        let mut lookup = StatusLookup::new();
        lookup.begin("app-1").expect("ticket");
        assert_eq!(lookup.view().status_text(), LOADING_TEXT);
    }

    #[test]
    fn resolved_match_displays_status_and_review() {
        let mut lookup = StatusLookup::new();
        let ticket = lookup.begin("app-1").expect("ticket");
        assert!(lookup.complete(ticket, found("Approved", Some("Great work"))));
        assert_eq!(lookup.view().status_text(), "Approved");
        assert_eq!(lookup.view().review_text(), "Great work");
    }

    #[test]
    fn missing_review_displays_as_empty() {
        let mut lookup = StatusLookup::new();
        let ticket = lookup.begin("app-1").expect("ticket");
        lookup.complete(ticket, found("Applied", None));
        assert_eq!(lookup.view().review_text(), "");
    }

    #[test]
    fn server_message_without_match_is_shown_and_clears_review() {
        let mut lookup = StatusLookup::new();
        let ticket = lookup.begin("app-1").expect("ticket");
        lookup.complete(ticket, found("Approved", Some("Great work")));

        let ticket = lookup.begin("unknown").expect("ticket");
        lookup.complete(
            ticket,
            Ok(StatusResponse {
                maintainer: Vec::new(),
                message: Some("Not found".to_string()),
            }),
        );
        assert_eq!(lookup.view().status_text(), "Not found");
        assert_eq!(lookup.view().review_text(), "");
    }

    #[test]
    fn transport_failure_displays_the_fixed_not_found_text() {
        let mut lookup = StatusLookup::new();
        let ticket = lookup.begin("app-1").expect("ticket");
        lookup.complete(
            ticket,
            Err(ApiError::Decode("status response: truncated".to_string())),
        );
        assert_eq!(lookup.view().status_text(), NOT_FOUND_TEXT);
    }

    #[test]
    fn stale_response_cannot_overwrite_a_newer_one() {
        let mut lookup = StatusLookup::new();
        let first = lookup.begin("app-1").expect("ticket");
        let second = lookup.begin("app-2").expect("ticket");

        // Second request resolves first.
        assert!(lookup.complete(second, found("Approved", None)));
        // The earlier request then arrives out of order and must be ignored.
        assert!(!lookup.complete(first, found("Denied", None)));
        assert_eq!(lookup.view().status_text(), "Approved");
    }

    #[test]
    fn each_result_replaces_the_previous_one() {
        let mut lookup = StatusLookup::new();
        let ticket = lookup.begin("app-1").expect("ticket");
        lookup.complete(ticket, found("Applied", None));

        let ticket = lookup.begin("app-1").expect("ticket");
        lookup.complete(ticket, found("Approved", Some("ship it")));
        assert_eq!(lookup.view().status_text(), "Approved");
        assert_eq!(lookup.view().review_text(), "ship it");
    }
}
