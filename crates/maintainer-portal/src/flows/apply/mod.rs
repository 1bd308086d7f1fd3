//! Application form flow: draft editing, field validation, company
//! autocomplete, and submission orchestration.

pub mod domain;
pub mod session;
pub mod validate;

#[cfg(test)]
mod tests;

pub use domain::{
    split_dependencies, ApplicationDraft, ApplicationPayload, Field, SelinuxStatus, APPLIED_STATUS,
};
pub use session::{FormSession, SubmitOutcome, SUBMIT_ACCEPTED_MESSAGE, SUBMIT_FAILED_MESSAGE};
pub use validate::{prepare, validate, validate_field, FieldError, Violation};
