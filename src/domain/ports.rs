use crate::domain::model::{
    AnalyticsAccount, Container, CreateVersionResponse, EntityUserLink, MacroDefinition,
    ProfileView, Rule, Tag, UserAccess, VersionOptions, WebProperty,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Management operations of the web-analytics service.
#[async_trait]
pub trait AnalyticsApi: Send + Sync {
    async fn list_accounts(&self) -> Result<Vec<AnalyticsAccount>>;

    async fn create_web_property(
        &self,
        account_id: &str,
        property: &WebProperty,
    ) -> Result<WebProperty>;

    async fn create_profile(
        &self,
        account_id: &str,
        property_id: &str,
        profile: &ProfileView,
    ) -> Result<ProfileView>;

    async fn create_user_link(
        &self,
        account_id: &str,
        property_id: &str,
        link: &EntityUserLink,
    ) -> Result<EntityUserLink>;
}

/// Management operations of the tag-management service.
#[async_trait]
pub trait TagManagerApi: Send + Sync {
    async fn create_container(&self, account_id: &str, container: &Container)
        -> Result<Container>;

    async fn list_macros(
        &self,
        account_id: &str,
        container_id: &str,
    ) -> Result<Vec<MacroDefinition>>;

    async fn create_macro(
        &self,
        account_id: &str,
        container_id: &str,
        macro_def: &MacroDefinition,
    ) -> Result<MacroDefinition>;

    async fn create_tag(&self, account_id: &str, container_id: &str, tag: &Tag) -> Result<Tag>;

    async fn update_tag(
        &self,
        account_id: &str,
        container_id: &str,
        tag_id: &str,
        tag: &Tag,
    ) -> Result<Tag>;

    async fn create_rule(&self, account_id: &str, container_id: &str, rule: &Rule) -> Result<Rule>;

    async fn create_permission(&self, account_id: &str, access: &UserAccess)
        -> Result<UserAccess>;

    async fn create_version(
        &self,
        account_id: &str,
        container_id: &str,
        options: &VersionOptions,
    ) -> Result<CreateVersionResponse>;

    async fn publish_version(
        &self,
        account_id: &str,
        container_id: &str,
        version_id: &str,
    ) -> Result<()>;
}
