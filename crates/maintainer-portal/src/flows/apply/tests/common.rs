use super::super::domain::ApplicationDraft;

/// A draft that passes every validation rule.
pub(super) fn filled_draft() -> ApplicationDraft {
    ApplicationDraft {
        name: "Ada Lovelace".to_string(),
        tg_username: "adal".to_string(),
        email: "ada@example.org".to_string(),
        github_username: "adal".to_string(),
        device_name: "Pixel 7".to_string(),
        device_company: "Google".to_string(),
        device_codename: "panther".to_string(),
        device_tree: "https://github.com/adal/device_google_panther".to_string(),
        kernel: "https://github.com/adal/kernel_google_gs201".to_string(),
        vendor: "https://github.com/adal/vendor_google_panther".to_string(),
        ..ApplicationDraft::default()
    }
}
