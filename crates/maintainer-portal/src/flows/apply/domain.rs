use serde::{Deserialize, Serialize};

/// Fixed client-side status stamped on every outgoing application. The
/// server owns every later transition; the portal only ever writes this one.
pub const APPLIED_STATUS: &str = "Applied";

/// User-editable fields of the application form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    TgUsername,
    Email,
    GithubUsername,
    DeviceName,
    DeviceCompany,
    DeviceCodename,
    DeviceTree,
    Kernel,
    Vendor,
    CommonTree,
    CommonVendor,
    OtherDependencies,
    SelinuxStatus,
}

impl Field {
    pub const ALL: [Field; 14] = [
        Field::Name,
        Field::TgUsername,
        Field::Email,
        Field::GithubUsername,
        Field::DeviceName,
        Field::DeviceCompany,
        Field::DeviceCodename,
        Field::DeviceTree,
        Field::Kernel,
        Field::Vendor,
        Field::CommonTree,
        Field::CommonVendor,
        Field::OtherDependencies,
        Field::SelinuxStatus,
    ];

    /// Key used for this field on the wire.
    pub const fn wire_name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::TgUsername => "tg_username",
            Field::Email => "email",
            Field::GithubUsername => "github_username",
            Field::DeviceName => "device_name",
            Field::DeviceCompany => "device_company",
            Field::DeviceCodename => "device_codename",
            Field::DeviceTree => "device_tree",
            Field::Kernel => "kernel",
            Field::Vendor => "vendor",
            Field::CommonTree => "common_tree",
            Field::CommonVendor => "common_vendor",
            Field::OtherDependencies => "other_dependencies",
            Field::SelinuxStatus => "selinux_status",
        }
    }

    /// Human-facing label for error rendering.
    pub const fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::TgUsername => "Telegram Username",
            Field::Email => "Email",
            Field::GithubUsername => "Github Username",
            Field::DeviceName => "Device Name",
            Field::DeviceCompany => "Device Company",
            Field::DeviceCodename => "Device Codename",
            Field::DeviceTree => "Device Tree",
            Field::Kernel => "Kernel",
            Field::Vendor => "Vendor",
            Field::CommonTree => "Common Tree",
            Field::CommonVendor => "Common Vendor",
            Field::OtherDependencies => "Other Dependencies",
            Field::SelinuxStatus => "SELinux Status",
        }
    }

    /// Optional fields accept emptiness; everything else is required.
    pub const fn is_optional(self) -> bool {
        matches!(
            self,
            Field::CommonTree | Field::CommonVendor | Field::OtherDependencies
        )
    }
}

/// SELinux mode declared for the device build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelinuxStatus {
    Enforcing,
    #[default]
    Permissive,
}

impl SelinuxStatus {
    pub const fn label(self) -> &'static str {
        match self {
            SelinuxStatus::Enforcing => "enforcing",
            SelinuxStatus::Permissive => "permissive",
        }
    }

    /// Parse the form text, tolerating case and surrounding whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "enforcing" => Some(SelinuxStatus::Enforcing),
            "permissive" => Some(SelinuxStatus::Permissive),
            _ => None,
        }
    }
}

/// The application form at rest. Every user-editable value is text while the
/// form is being edited; `other_dependencies` in particular stays a single
/// delimited string until the payload is built, never a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationDraft {
    pub name: String,
    pub tg_username: String,
    pub email: String,
    pub github_username: String,
    pub device_name: String,
    pub device_company: String,
    pub device_codename: String,
    pub device_tree: String,
    pub kernel: String,
    pub vendor: String,
    pub common_tree: String,
    pub common_vendor: String,
    pub other_dependencies: String,
    pub selinux_status: String,
}

impl Default for ApplicationDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            tg_username: String::new(),
            email: String::new(),
            github_username: String::new(),
            device_name: String::new(),
            device_company: String::new(),
            device_codename: String::new(),
            device_tree: String::new(),
            kernel: String::new(),
            vendor: String::new(),
            common_tree: String::new(),
            common_vendor: String::new(),
            other_dependencies: String::new(),
            selinux_status: SelinuxStatus::Permissive.label().to_string(),
        }
    }
}

impl ApplicationDraft {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::TgUsername => &self.tg_username,
            Field::Email => &self.email,
            Field::GithubUsername => &self.github_username,
            Field::DeviceName => &self.device_name,
            Field::DeviceCompany => &self.device_company,
            Field::DeviceCodename => &self.device_codename,
            Field::DeviceTree => &self.device_tree,
            Field::Kernel => &self.kernel,
            Field::Vendor => &self.vendor,
            Field::CommonTree => &self.common_tree,
            Field::CommonVendor => &self.common_vendor,
            Field::OtherDependencies => &self.other_dependencies,
            Field::SelinuxStatus => &self.selinux_status,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::TgUsername => self.tg_username = value,
            Field::Email => self.email = value,
            Field::GithubUsername => self.github_username = value,
            Field::DeviceName => self.device_name = value,
            Field::DeviceCompany => self.device_company = value,
            Field::DeviceCodename => self.device_codename = value,
            Field::DeviceTree => self.device_tree = value,
            Field::Kernel => self.kernel = value,
            Field::Vendor => self.vendor = value,
            Field::CommonTree => self.common_tree = value,
            Field::CommonVendor => self.common_vendor = value,
            Field::OtherDependencies => self.other_dependencies = value,
            Field::SelinuxStatus => self.selinux_status = value,
        }
    }
}

/// The wire form of an application. Identical to the draft except that
/// `other_dependencies` has been split into its list form, the SELinux mode
/// is typed, and the fixed [`APPLIED_STATUS`] marker is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationPayload {
    pub name: String,
    pub tg_username: String,
    pub email: String,
    pub github_username: String,
    pub device_name: String,
    pub device_company: String,
    pub device_codename: String,
    pub device_tree: String,
    pub kernel: String,
    pub vendor: String,
    pub common_tree: String,
    pub common_vendor: String,
    pub other_dependencies: Vec<String>,
    pub selinux_status: SelinuxStatus,
    pub status: String,
}

/// Split the delimited dependency string into its ordered list form.
///
/// Runs of commas and/or whitespace separate tokens; empty tokens are
/// discarded, so leading, trailing, and doubled delimiters are harmless.
pub fn split_dependencies(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_runs_of_commas_and_spaces() {
        assert_eq!(
            split_dependencies("a.com, b.com  c.com"),
            vec!["a.com", "b.com", "c.com"]
        );
    }

    #[test]
    fn empty_input_splits_to_no_tokens() {
        assert!(split_dependencies("").is_empty());
        assert!(split_dependencies(" ,, ").is_empty());
    }

    #[test]
    fn draft_defaults_match_a_fresh_form() {
        let draft = ApplicationDraft::default();
        assert_eq!(draft.selinux_status, "permissive");
        assert!(draft.name.is_empty());
    }

    #[test]
    fn selinux_parse_tolerates_case_and_whitespace() {
        assert_eq!(
            SelinuxStatus::parse(" Enforcing "),
            Some(SelinuxStatus::Enforcing)
        );
        assert_eq!(SelinuxStatus::parse("disabled"), None);
    }
}
