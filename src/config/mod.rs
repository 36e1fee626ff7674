pub mod file;
pub mod prompt;

use crate::domain::model::TemplateSource;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;
use self::file::ProvisionerFile;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ANALYTICS_URL: &str = "https://www.googleapis.com/analytics/v3";
pub const DEFAULT_TAG_MANAGER_URL: &str = "https://www.googleapis.com/tagmanager/v1";
pub const TOKEN_ENV_VAR: &str = "ANALYTICS_BOOTSTRAP_TOKEN";

// Template container the standard macro set ships in; overridable per
// deployment via flag or config file.
pub const DEFAULT_TEMPLATE_ACCOUNT_ID: &str = "36837426";
pub const DEFAULT_TEMPLATE_CONTAINER_ID: &str = "958213";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "analytics-bootstrap")]
#[command(about = "Provision a paired tag manager container and web analytics property")]
pub struct CliConfig {
    #[arg(long, help = "Project display name")]
    pub project_name: Option<String>,

    #[arg(long, help = "Project domain (https assumed when no scheme is given)")]
    pub domain_url: Option<String>,

    #[arg(long, help = "Country code, defaults to US")]
    pub country: Option<String>,

    #[arg(long, help = "Time zone identifier, defaults to America/New_York")]
    pub timezone: Option<String>,

    #[arg(long, help = "Tag manager account to create the container under")]
    pub tag_manager_account_id: Option<String>,

    #[arg(long, help = "Analytics account to create the web property under")]
    pub analytics_account_id: Option<String>,

    #[arg(long, value_delimiter = ',', help = "User emails to grant access to")]
    pub users: Vec<String>,

    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Analytics API base URL")]
    pub analytics_url: Option<String>,

    #[arg(long, help = "Tag manager API base URL")]
    pub tag_manager_url: Option<String>,

    #[arg(long, help = "Bearer token for both services (or ANALYTICS_BOOTSTRAP_TOKEN)")]
    pub token: Option<String>,

    #[arg(long, help = "Template account the standard macros are copied from")]
    pub template_account_id: Option<String>,

    #[arg(long, help = "Template container the standard macros are copied from")]
    pub template_container_id: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Resolved service settings: flags override the config file, the file
/// overrides built-in defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub analytics_url: String,
    pub tag_manager_url: String,
    pub token: Option<String>,
    pub template: TemplateSource,
}

impl Settings {
    pub fn resolve(cli: &CliConfig, file: Option<&ProvisionerFile>) -> Self {
        let services = file.and_then(|f| f.services.as_ref());
        let template = file.and_then(|f| f.template.as_ref());

        let token = cli
            .token
            .clone()
            .or_else(|| std::env::var(TOKEN_ENV_VAR).ok())
            .or_else(|| services.and_then(|s| s.token.clone()));

        Self {
            analytics_url: cli
                .analytics_url
                .clone()
                .or_else(|| services.and_then(|s| s.analytics_url.clone()))
                .unwrap_or_else(|| DEFAULT_ANALYTICS_URL.to_string()),
            tag_manager_url: cli
                .tag_manager_url
                .clone()
                .or_else(|| services.and_then(|s| s.tag_manager_url.clone()))
                .unwrap_or_else(|| DEFAULT_TAG_MANAGER_URL.to_string()),
            token,
            template: TemplateSource {
                account_id: cli
                    .template_account_id
                    .clone()
                    .or_else(|| template.map(|t| t.account_id.clone()))
                    .unwrap_or_else(|| DEFAULT_TEMPLATE_ACCOUNT_ID.to_string()),
                container_id: cli
                    .template_container_id
                    .clone()
                    .or_else(|| template.map(|t| t.container_id.clone()))
                    .unwrap_or_else(|| DEFAULT_TEMPLATE_CONTAINER_ID.to_string()),
            },
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("analytics_url", &self.analytics_url)?;
        validate_url("tag_manager_url", &self.tag_manager_url)?;
        validate_non_empty_string("template_account_id", &self.template.account_id)?;
        validate_non_empty_string("template_container_id", &self.template.container_id)?;
        Ok(())
    }
}
