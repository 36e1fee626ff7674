use crate::domain::model::{
    Container, CreateVersionResponse, MacroDefinition, Rule, Tag, UserAccess, VersionOptions,
};
use crate::domain::ports::TagManagerApi;
use crate::utils::error::{ProvisionError, Result};
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// HTTP client for the tag-management API.
#[derive(Debug, Clone)]
pub struct TagManagerHttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListMacrosResponse {
    #[serde(default)]
    macros: Vec<MacroDefinition>,
}

impl TagManagerHttpClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    async fn request(
        &self,
        operation: &str,
        method: Method,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("{} {}", method, url);

        let mut request = self.client.request(method, &url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProvisionError::RemoteCall {
                operation: operation.to_string(),
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    async fn get_json<R: DeserializeOwned>(&self, operation: &str, path: &str) -> Result<R> {
        let response = self
            .request(operation, Method::GET, path, None::<&()>)
            .await?;
        Ok(response.json().await?)
    }

    async fn send_json<B: Serialize, R: DeserializeOwned>(
        &self,
        operation: &str,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<R> {
        let response = self.request(operation, method, path, Some(body)).await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl TagManagerApi for TagManagerHttpClient {
    async fn create_container(
        &self,
        account_id: &str,
        container: &Container,
    ) -> Result<Container> {
        let path = format!("/accounts/{}/containers", account_id);
        self.send_json("create container", Method::POST, &path, container)
            .await
    }

    async fn list_macros(
        &self,
        account_id: &str,
        container_id: &str,
    ) -> Result<Vec<MacroDefinition>> {
        let path = format!("/accounts/{}/containers/{}/macros", account_id, container_id);
        let response: ListMacrosResponse = self.get_json("list template macros", &path).await?;
        Ok(response.macros)
    }

    async fn create_macro(
        &self,
        account_id: &str,
        container_id: &str,
        macro_def: &MacroDefinition,
    ) -> Result<MacroDefinition> {
        let path = format!("/accounts/{}/containers/{}/macros", account_id, container_id);
        self.send_json("create macro", Method::POST, &path, macro_def)
            .await
    }

    async fn create_tag(&self, account_id: &str, container_id: &str, tag: &Tag) -> Result<Tag> {
        let path = format!("/accounts/{}/containers/{}/tags", account_id, container_id);
        self.send_json("create tag", Method::POST, &path, tag).await
    }

    async fn update_tag(
        &self,
        account_id: &str,
        container_id: &str,
        tag_id: &str,
        tag: &Tag,
    ) -> Result<Tag> {
        let path = format!(
            "/accounts/{}/containers/{}/tags/{}",
            account_id, container_id, tag_id
        );
        self.send_json("update tag", Method::PUT, &path, tag).await
    }

    async fn create_rule(&self, account_id: &str, container_id: &str, rule: &Rule) -> Result<Rule> {
        let path = format!("/accounts/{}/containers/{}/rules", account_id, container_id);
        self.send_json("create rule", Method::POST, &path, rule)
            .await
    }

    async fn create_permission(
        &self,
        account_id: &str,
        access: &UserAccess,
    ) -> Result<UserAccess> {
        let path = format!("/accounts/{}/permissions", account_id);
        self.send_json("create container permission", Method::POST, &path, access)
            .await
    }

    async fn create_version(
        &self,
        account_id: &str,
        container_id: &str,
        options: &VersionOptions,
    ) -> Result<CreateVersionResponse> {
        let path = format!(
            "/accounts/{}/containers/{}/versions",
            account_id, container_id
        );
        self.send_json("create container version", Method::POST, &path, options)
            .await
    }

    async fn publish_version(
        &self,
        account_id: &str,
        container_id: &str,
        version_id: &str,
    ) -> Result<()> {
        let path = format!(
            "/accounts/{}/containers/{}/versions/{}/publish",
            account_id, container_id, version_id
        );
        // The publish confirmation body carries nothing this workflow reads.
        self.request("publish container version", Method::POST, &path, None::<&()>)
            .await?;
        Ok(())
    }
}
