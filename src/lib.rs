pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{AnalyticsHttpClient, TagManagerHttpClient};
pub use crate::config::{CliConfig, Settings};
pub use crate::core::{payloads, provisioner::Provisioner};
pub use crate::domain::model::{GrantOutcome, ProvisioningRequest, PublishResult, TemplateSource};
pub use crate::utils::error::{ProvisionError, Result};
