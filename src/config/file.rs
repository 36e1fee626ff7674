use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML configuration file.
///
/// ```toml
/// [services]
/// analytics_url = "https://analytics.example.com"
/// tag_manager_url = "https://tagmanager.example.com"
///
/// [template]
/// account_id = "36837426"
/// container_id = "958213"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvisionerFile {
    pub services: Option<ServicesConfig>,
    pub template: Option<TemplateConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    pub analytics_url: Option<String>,
    pub tag_manager_url: Option<String>,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    pub account_id: String,
    pub container_id: String,
}

impl ProvisionerFile {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_file_parses_all_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[services]
analytics_url = "https://analytics.example.com"
tag_manager_url = "https://tagmanager.example.com"
token = "secret"

[template]
account_id = "999"
container_id = "888"
"#
        )
        .unwrap();

        let config = ProvisionerFile::from_file(file.path()).unwrap();
        let services = config.services.unwrap();
        assert_eq!(
            services.analytics_url.as_deref(),
            Some("https://analytics.example.com")
        );
        assert_eq!(services.token.as_deref(), Some("secret"));

        let template = config.template.unwrap();
        assert_eq!(template.account_id, "999");
        assert_eq!(template.container_id, "888");
    }

    #[test]
    fn test_from_file_allows_empty_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "").unwrap();

        let config = ProvisionerFile::from_file(file.path()).unwrap();
        assert!(config.services.is_none());
        assert!(config.template.is_none());
    }

    #[test]
    fn test_from_file_rejects_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[services").unwrap();

        assert!(ProvisionerFile::from_file(file.path()).is_err());
    }
}
