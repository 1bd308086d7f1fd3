use serde::Serialize;
use url::Url;

use super::domain::{
    split_dependencies, ApplicationDraft, ApplicationPayload, Field, SelinuxStatus, APPLIED_STATUS,
};

/// Ways a single field can fail validation. The display strings are the
/// inline messages shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum Violation {
    #[error("Required")]
    MissingField,
    #[error("Invalid URL")]
    InvalidUrl,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Must be one of: enforcing, permissive")]
    InvalidEnum,
}

/// A validation failure attached to the field that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{}: {violation}", .field.wire_name())]
pub struct FieldError {
    pub field: Field,
    pub violation: Violation,
}

/// Validate one field in isolation, for per-field error display on change
/// or blur. Validation is field-local; there are no cross-field rules.
pub fn validate_field(draft: &ApplicationDraft, field: Field) -> Option<FieldError> {
    let value = draft.value(field).trim();

    if value.is_empty() {
        if field.is_optional() {
            return None;
        }
        return Some(FieldError {
            field,
            violation: Violation::MissingField,
        });
    }

    let violation = match field {
        Field::Email => (!is_email(value)).then_some(Violation::InvalidEmail),
        Field::DeviceTree
        | Field::Kernel
        | Field::Vendor
        | Field::CommonTree
        | Field::CommonVendor => (!is_url(value)).then_some(Violation::InvalidUrl),
        Field::SelinuxStatus => SelinuxStatus::parse(value)
            .is_none()
            .then_some(Violation::InvalidEnum),
        _ => None,
    };

    violation.map(|violation| FieldError { field, violation })
}

/// Validate the whole draft, in field display order. An empty result means
/// the draft is submittable.
pub fn validate(draft: &ApplicationDraft) -> Vec<FieldError> {
    Field::ALL
        .iter()
        .filter_map(|&field| validate_field(draft, field))
        .collect()
}

/// Gate and transform: run exhaustive validation, then build the wire
/// payload. The dependency string is split into its list form here and
/// nowhere else, so the conversion happens exactly once per submission.
pub fn prepare(draft: &ApplicationDraft) -> Result<ApplicationPayload, Vec<FieldError>> {
    let errors = validate(draft);
    if !errors.is_empty() {
        return Err(errors);
    }

    // Membership was checked above; an unparseable mode cannot reach this.
    let selinux_status = SelinuxStatus::parse(&draft.selinux_status).unwrap_or_default();

    Ok(ApplicationPayload {
        name: draft.name.clone(),
        tg_username: draft.tg_username.clone(),
        email: draft.email.clone(),
        github_username: draft.github_username.clone(),
        device_name: draft.device_name.clone(),
        device_company: draft.device_company.clone(),
        device_codename: draft.device_codename.clone(),
        device_tree: draft.device_tree.clone(),
        kernel: draft.kernel.clone(),
        vendor: draft.vendor.clone(),
        common_tree: draft.common_tree.clone(),
        common_vendor: draft.common_vendor.clone(),
        other_dependencies: split_dependencies(&draft.other_dependencies),
        selinux_status,
        status: APPLIED_STATUS.to_string(),
    })
}

/// Absolute URL with a host; relative paths and hostless schemes fail.
fn is_url(value: &str) -> bool {
    Url::parse(value).is_ok_and(|url| url.has_host())
}

/// Syntactic email check: one `@`, non-empty local part, dotted domain with
/// no empty labels, no whitespace anywhere.
fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}
