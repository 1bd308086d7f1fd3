use serde::Serialize;
use tracing::warn;

use super::domain::{ApplicationDraft, Field};
use super::validate::{self, FieldError};
use crate::client::{ApiError, PortalClient};

/// Confirmation text shown after an accepted submission.
pub const SUBMIT_ACCEPTED_MESSAGE: &str = "Form submitted successfully, please check your email\nIf not received please check your spam folder";

/// Generic text for submission failures that carry no server message.
pub const SUBMIT_FAILED_MESSAGE: &str = "Submission failed, please try again later";

/// How one submission attempt ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// The server accepted the application.
    Accepted { message: String },
    /// The server refused it; `message` is the server's text, verbatim.
    Rejected { message: String },
    /// Transport failure or unexplained error status.
    Failed { message: String },
    /// Client-side validation failed; nothing was transmitted.
    Invalid { errors: Vec<FieldError> },
}

/// State of one application-form session: the draft being edited, the
/// advisory company directory, and the in-flight submission flag. Each
/// session owns its state outright; nothing is shared across flows.
#[derive(Debug, Default)]
pub struct FormSession {
    draft: ApplicationDraft,
    companies: Vec<String>,
    directory_loaded: bool,
    submitting: bool,
}

impl FormSession {
    /// Fresh session with the form's default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session resuming a pre-filled draft.
    pub fn with_draft(draft: ApplicationDraft) -> Self {
        Self {
            draft,
            ..Self::default()
        }
    }

    /// Session with a pre-populated directory, bypassing the fetch.
    #[cfg(test)]
    pub(crate) fn with_directory(companies: Vec<String>) -> Self {
        Self {
            companies,
            directory_loaded: true,
            ..Self::default()
        }
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    /// Update one field and report its incremental validation result.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Option<FieldError> {
        self.draft.set(field, value);
        validate::validate_field(&self.draft, field)
    }

    /// Re-validate one field without changing it (blur handling).
    pub fn blur(&self, field: Field) -> Option<FieldError> {
        validate::validate_field(&self.draft, field)
    }

    /// Fetch the company directory once per session. Failure degrades to an
    /// empty suggestion set and is never surfaced to the user; the form
    /// stays fully usable either way.
    pub async fn load_companies(&mut self, client: &PortalClient) {
        if self.directory_loaded {
            return;
        }
        self.directory_loaded = true;

        match client.companies().await {
            Ok(companies) => self.companies = companies,
            Err(error) => {
                warn!(%error, "company directory unavailable, autocomplete disabled");
                self.companies.clear();
            }
        }
    }

    pub fn companies(&self) -> &[String] {
        &self.companies
    }

    /// Autocomplete suggestions for the company field: case-insensitive
    /// substring match, the whole directory when the input is blank. The
    /// directory is advisory; free-text entry is always permitted.
    pub fn suggestions(&self, input: &str) -> Vec<&str> {
        let needle = input.trim().to_lowercase();
        self.companies
            .iter()
            .map(String::as_str)
            .filter(|company| needle.is_empty() || company.to_lowercase().contains(&needle))
            .collect()
    }

    /// True while a submission is outstanding; the rendering layer disables
    /// its submit control off this flag.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validate exhaustively and, only if the whole draft passes, transmit
    /// it. Any failing field blocks the wire call. The draft is preserved
    /// across rejections so the user can correct and resubmit.
    pub async fn submit(&mut self, client: &PortalClient) -> SubmitOutcome {
        if self.submitting {
            return SubmitOutcome::Failed {
                message: SUBMIT_FAILED_MESSAGE.to_string(),
            };
        }

        let payload = match validate::prepare(&self.draft) {
            Ok(payload) => payload,
            Err(errors) => return SubmitOutcome::Invalid { errors },
        };

        self.submitting = true;
        let result = client.submit(&payload).await;
        self.submitting = false;

        match result {
            Ok(()) => SubmitOutcome::Accepted {
                message: SUBMIT_ACCEPTED_MESSAGE.to_string(),
            },
            Err(ApiError::Rejected { message }) => SubmitOutcome::Rejected { message },
            Err(error) => {
                warn!(%error, "application submission failed");
                SubmitOutcome::Failed {
                    message: SUBMIT_FAILED_MESSAGE.to_string(),
                }
            }
        }
    }
}
