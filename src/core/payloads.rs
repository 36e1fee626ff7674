use crate::domain::model::{
    AccountAccess, Condition, Container, ContainerAccess, EntityUserLink, Parameter, ProfileView,
    ProvisioningRequest, Rule, Tag, UserAccess, UserPermissions, UserRef, VersionOptions,
    WebProperty,
};

pub const PROPERTY_NAME_PREFIX: &str = "GA ";
pub const CONTAINER_NAME_PREFIX: &str = "GTM ";
pub const INDUSTRY_VERTICAL: &str = "HEALTHCARE";
pub const DEFAULT_VIEW_NAME: &str = "All Web Site Data";
pub const ALL_PAGES_RULE_NAME: &str = "All pages";
pub const INITIAL_VERSION_NAME: &str = "1";
pub const INITIAL_VERSION_NOTES: &str = "Initial Version";

pub fn web_property(request: &ProvisioningRequest) -> WebProperty {
    WebProperty {
        id: None,
        name: format!("{}{}", PROPERTY_NAME_PREFIX, request.project_name),
        website_url: request.domain_url.clone(),
        industry_vertical: INDUSTRY_VERTICAL.to_string(),
    }
}

pub fn default_view(request: &ProvisioningRequest) -> ProfileView {
    ProfileView {
        name: DEFAULT_VIEW_NAME.to_string(),
        timezone: request.timezone.clone(),
    }
}

pub fn container(request: &ProvisioningRequest) -> Container {
    Container {
        container_id: None,
        name: format!("{}{}", CONTAINER_NAME_PREFIX, request.project_name),
        domain_name: vec![request.domain_url.clone()],
        time_zone_country_id: request.country.clone(),
        time_zone_id: request.timezone.clone(),
        usage_context: vec!["web".to_string()],
    }
}

/// The default tracking tag, created without a firing rule; the rule
/// reference is attached by a later update.
pub fn page_view_tag(project_name: &str, property_id: &str) -> Tag {
    let field_override = Parameter::map(vec![
        Parameter::template("fieldName", "anonymizeIp"),
        Parameter::template("value", "true"),
    ]);

    Tag {
        tag_id: None,
        name: format!("{} Page View", project_name),
        tag_type: "ua".to_string(),
        parameter: vec![
            Parameter::template("trackingId", property_id),
            Parameter::boolean("anonymizeIp", true),
            Parameter::list("fieldsToSetCustomUi", vec![field_override]),
        ],
        firing_rule_id: vec![],
    }
}

/// Catch-all rule matching every page URL.
pub fn all_pages_rule() -> Rule {
    Rule {
        rule_id: None,
        name: ALL_PAGES_RULE_NAME.to_string(),
        condition: vec![Condition {
            condition_type: "matchRegex".to_string(),
            parameter: vec![
                Parameter::template("arg0", "{{url}}"),
                Parameter::template("arg1", ".*"),
            ],
        }],
    }
}

pub fn property_edit_link(email: &str) -> EntityUserLink {
    EntityUserLink {
        user_ref: UserRef {
            email: email.to_string(),
        },
        permissions: UserPermissions {
            local: vec!["edit".to_string()],
        },
    }
}

pub fn container_user_access(email: &str, container_id: &str) -> UserAccess {
    UserAccess {
        email_address: email.to_string(),
        account_access: AccountAccess {
            permission: vec!["read".to_string()],
        },
        container_access: vec![ContainerAccess {
            container_id: container_id.to_string(),
            permission: vec![
                "read".to_string(),
                "edit".to_string(),
                "delete".to_string(),
                "publish".to_string(),
            ],
        }],
    }
}

pub fn initial_version_options() -> VersionOptions {
    VersionOptions {
        name: INITIAL_VERSION_NAME.to_string(),
        notes: INITIAL_VERSION_NOTES.to_string(),
    }
}
