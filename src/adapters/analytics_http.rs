use crate::domain::model::{AnalyticsAccount, EntityUserLink, ProfileView, WebProperty};
use crate::domain::ports::AnalyticsApi;
use crate::utils::error::{ProvisionError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// HTTP client for the web-analytics management API.
#[derive(Debug, Clone)]
pub struct AnalyticsHttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AccountsResponse {
    #[serde(default)]
    items: Vec<AnalyticsAccount>,
}

impl AnalyticsHttpClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    async fn get_json<R: DeserializeOwned>(&self, operation: &str, path: &str) -> Result<R> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
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

        Ok(response.json().await?)
    }

    async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        operation: &str,
        path: &str,
        body: &B,
    ) -> Result<R> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("POST {}", url);

        let mut request = self.client.post(&url).json(body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
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

        Ok(response.json().await?)
    }
}

#[async_trait]
impl AnalyticsApi for AnalyticsHttpClient {
    async fn list_accounts(&self) -> Result<Vec<AnalyticsAccount>> {
        let response: AccountsResponse = self
            .get_json("list analytics accounts", "/management/accounts")
            .await?;
        Ok(response.items)
    }

    async fn create_web_property(
        &self,
        account_id: &str,
        property: &WebProperty,
    ) -> Result<WebProperty> {
        let path = format!("/management/accounts/{}/webproperties", account_id);
        self.post_json("create web property", &path, property).await
    }

    async fn create_profile(
        &self,
        account_id: &str,
        property_id: &str,
        profile: &ProfileView,
    ) -> Result<ProfileView> {
        let path = format!(
            "/management/accounts/{}/webproperties/{}/profiles",
            account_id, property_id
        );
        self.post_json("create view", &path, profile).await
    }

    async fn create_user_link(
        &self,
        account_id: &str,
        property_id: &str,
        link: &EntityUserLink,
    ) -> Result<EntityUserLink> {
        let path = format!(
            "/management/accounts/{}/webproperties/{}/entityUserLinks",
            account_id, property_id
        );
        self.post_json("create property user link", &path, link)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = AnalyticsHttpClient::new("http://localhost:8080/", None);
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
