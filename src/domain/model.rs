use crate::utils::validation::normalize_domain_url;
use serde::{Deserialize, Serialize};

pub const DEFAULT_COUNTRY: &str = "US";
pub const DEFAULT_TIMEZONE: &str = "America/New_York";

/// Immutable parameter bundle for one provisioning run.
///
/// Built once from operator input and passed into every step; the raw user
/// email list is kept verbatim (blank entries are skipped at grant time).
#[derive(Debug, Clone, PartialEq)]
pub struct ProvisioningRequest {
    pub project_name: String,
    pub domain_url: String,
    pub country: String,
    pub timezone: String,
    pub analytics_account_id: String,
    pub tag_manager_account_id: String,
    pub user_emails: Vec<String>,
}

impl ProvisioningRequest {
    /// Canonicalizes the domain URL and fills blank country/timezone with
    /// the standard defaults.
    pub fn new(
        project_name: impl Into<String>,
        raw_domain_url: &str,
        country: &str,
        timezone: &str,
        analytics_account_id: impl Into<String>,
        tag_manager_account_id: impl Into<String>,
        user_emails: Vec<String>,
    ) -> Self {
        let country = country.trim();
        let timezone = timezone.trim();
        Self {
            project_name: project_name.into(),
            domain_url: normalize_domain_url(raw_domain_url),
            country: if country.is_empty() {
                DEFAULT_COUNTRY.to_string()
            } else {
                country.to_string()
            },
            timezone: if timezone.is_empty() {
                DEFAULT_TIMEZONE.to_string()
            } else {
                timezone.to_string()
            },
            analytics_account_id: analytics_account_id.into(),
            tag_manager_account_id: tag_manager_account_id.into(),
            user_emails,
        }
    }
}

/// Template container the standard macro set is replicated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateSource {
    pub account_id: String,
    pub container_id: String,
}

// ---------------------------------------------------------------------------
// Analytics service entities
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsAccount {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebProperty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub website_url: String,
    pub industry_vertical: String,
}

/// A reporting view created under a web property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub name: String,
    pub timezone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPermissions {
    pub local: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityUserLink {
    pub user_ref: UserRef,
    pub permissions: UserPermissions,
}

// ---------------------------------------------------------------------------
// Tag manager service entities
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_id: Option<String>,
    pub name: String,
    pub domain_name: Vec<String>,
    pub time_zone_country_id: String,
    pub time_zone_id: String,
    pub usage_context: Vec<String>,
}

/// A typed key/value parameter as the tag manager service models it.
///
/// `list` and `map` parameters nest further parameters; everything else is
/// a flat key/value pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<Parameter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<Vec<Parameter>>,
}

impl Parameter {
    pub fn template(key: &str, value: &str) -> Self {
        Self {
            kind: "template".to_string(),
            key: Some(key.to_string()),
            value: Some(value.to_string()),
            list: None,
            map: None,
        }
    }

    pub fn boolean(key: &str, value: bool) -> Self {
        Self {
            kind: "boolean".to_string(),
            key: Some(key.to_string()),
            value: Some(value.to_string()),
            list: None,
            map: None,
        }
    }

    pub fn list(key: &str, items: Vec<Parameter>) -> Self {
        Self {
            kind: "list".to_string(),
            key: Some(key.to_string()),
            value: None,
            list: Some(items),
            map: None,
        }
    }

    pub fn map(entries: Vec<Parameter>) -> Self {
        Self {
            kind: "map".to_string(),
            key: None,
            value: None,
            list: None,
            map: Some(entries),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub tag_type: String,
    #[serde(default)]
    pub parameter: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub firing_rule_id: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub condition_type: String,
    #[serde(default)]
    pub parameter: Vec<Parameter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub condition: Vec<Condition>,
}

/// An opaque macro definition, replicated verbatim between containers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MacroDefinition(pub serde_json::Value);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountAccess {
    pub permission: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerAccess {
    pub container_id: String,
    pub permission: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccess {
    pub email_address: String,
    pub account_access: AccountAccess,
    pub container_access: Vec<ContainerAccess>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionOptions {
    pub name: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerVersion {
    pub container_version_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVersionResponse {
    pub container_version: ContainerVersion,
}

// ---------------------------------------------------------------------------
// Run results
// ---------------------------------------------------------------------------

/// Outcome of granting one user access to both resources.
#[derive(Debug, Clone, PartialEq)]
pub struct GrantOutcome {
    pub email: String,
    pub granted: bool,
    pub error: Option<String>,
}

impl GrantOutcome {
    pub fn granted(email: &str) -> Self {
        Self {
            email: email.to_string(),
            granted: true,
            error: None,
        }
    }

    pub fn failed(email: &str, error: String) -> Self {
        Self {
            email: email.to_string(),
            granted: false,
            error: Some(error),
        }
    }
}

/// Identifiers produced by a successful provisioning run.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishResult {
    pub web_property_id: String,
    pub container_id: String,
    pub version_id: String,
    pub grants: Vec<GrantOutcome>,
}
