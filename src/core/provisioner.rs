use crate::core::payloads;
use crate::domain::model::{
    GrantOutcome, ProvisioningRequest, PublishResult, Tag, TemplateSource, WebProperty,
};
use crate::domain::ports::{AnalyticsApi, TagManagerApi};
use crate::utils::error::{ProvisionError, Result};

/// Executes the fixed provisioning chain against the two remote services.
///
/// Every step depends on an identifier produced by an earlier one, so the
/// chain runs strictly in order. Any step failure aborts the run without
/// cleaning up already-created remote resources; the one exception is the
/// per-user permission loop, whose failures are collected and reported.
pub struct Provisioner<A: AnalyticsApi, T: TagManagerApi> {
    analytics: A,
    tag_manager: T,
    template: TemplateSource,
}

impl<A: AnalyticsApi, T: TagManagerApi> Provisioner<A, T> {
    pub fn new(analytics: A, tag_manager: T, template: TemplateSource) -> Self {
        Self {
            analytics,
            tag_manager,
            template,
        }
    }

    pub async fn provision(&self, request: &ProvisioningRequest) -> Result<PublishResult> {
        tracing::info!("🚀 Provisioning project: {}", request.project_name);

        let property = self.create_web_property(request).await?;
        let property_id = required_id(property.id.as_deref(), "web property")?;
        tracing::info!("✅ Web property created [{}]", property_id);

        let container = self
            .tag_manager
            .create_container(
                &request.tag_manager_account_id,
                &payloads::container(request),
            )
            .await?;
        let container_id = required_id(container.container_id.as_deref(), "container")?;
        tracing::info!("✅ Container created [{}]", container_id);

        let account_id = request.tag_manager_account_id.as_str();

        let tag = self
            .tag_manager
            .create_tag(
                account_id,
                &container_id,
                &payloads::page_view_tag(&request.project_name, &property_id),
            )
            .await?;
        tracing::info!("✅ Tracking tag created");

        let macro_count = self.replicate_macros(account_id, &container_id).await?;
        tracing::info!("✅ Replicated {} template macros", macro_count);

        let rule = self
            .tag_manager
            .create_rule(account_id, &container_id, &payloads::all_pages_rule())
            .await?;
        let rule_id = required_id(rule.rule_id.as_deref(), "rule")?;
        tracing::info!("✅ Rule '{}' created [{}]", rule.name, rule_id);

        self.link_tag_to_rule(account_id, &container_id, tag, &rule_id)
            .await?;
        tracing::info!("✅ Tag wired to fire on rule [{}]", rule_id);

        let grants = self
            .grant_user_access(request, &property_id, &container_id)
            .await;
        for outcome in grants.iter().filter(|o| !o.granted) {
            tracing::warn!(
                "⚠️ Could not grant access to {}: {}",
                outcome.email,
                outcome.error.as_deref().unwrap_or("unknown error")
            );
        }

        let version_id = self
            .publish_initial_version(account_id, &container_id)
            .await?;
        tracing::info!("✅ Version [{}] published", version_id);

        Ok(PublishResult {
            web_property_id: property_id,
            container_id,
            version_id,
            grants,
        })
    }

    /// Creates the web property plus its default view under the analytics
    /// account, after verifying the account is visible to the caller.
    async fn create_web_property(&self, request: &ProvisioningRequest) -> Result<WebProperty> {
        let accounts = self.analytics.list_accounts().await?;
        let account = accounts
            .iter()
            .find(|a| a.id.eq_ignore_ascii_case(&request.analytics_account_id))
            .ok_or_else(|| ProvisionError::AccountNotFound {
                account_id: request.analytics_account_id.clone(),
            })?;

        let property = self
            .analytics
            .create_web_property(&account.id, &payloads::web_property(request))
            .await?;
        let property_id = required_id(property.id.as_deref(), "web property")?;

        self.analytics
            .create_profile(
                &request.analytics_account_id,
                &property_id,
                &payloads::default_view(request),
            )
            .await?;

        Ok(property)
    }

    /// Copies every macro of the template container into the new container,
    /// definitions unmodified. Returns how many were created.
    async fn replicate_macros(&self, account_id: &str, container_id: &str) -> Result<usize> {
        let macros = self
            .tag_manager
            .list_macros(&self.template.account_id, &self.template.container_id)
            .await?;

        for macro_def in &macros {
            self.tag_manager
                .create_macro(account_id, container_id, macro_def)
                .await?;
        }

        Ok(macros.len())
    }

    /// The only post-creation mutation in the chain: replaces the tag with a
    /// copy whose firing-rule list holds exactly the new rule.
    async fn link_tag_to_rule(
        &self,
        account_id: &str,
        container_id: &str,
        mut tag: Tag,
        rule_id: &str,
    ) -> Result<Tag> {
        let tag_id = required_id(tag.tag_id.as_deref(), "tag")?;
        tag.firing_rule_id = vec![rule_id.to_string()];

        self.tag_manager
            .update_tag(account_id, container_id, &tag_id, &tag)
            .await
    }

    /// Grants each non-empty listed user edit access on both resources.
    ///
    /// Both grant calls are attempted for every user; one user's failure
    /// never stops the loop or the run.
    async fn grant_user_access(
        &self,
        request: &ProvisioningRequest,
        property_id: &str,
        container_id: &str,
    ) -> Vec<GrantOutcome> {
        let mut outcomes = Vec::new();

        for raw_email in &request.user_emails {
            let email = raw_email.trim();
            if email.is_empty() {
                continue;
            }

            let mut errors = Vec::new();

            if let Err(e) = self
                .analytics
                .create_user_link(
                    &request.analytics_account_id,
                    property_id,
                    &payloads::property_edit_link(email),
                )
                .await
            {
                errors.push(e.to_string());
            }

            if let Err(e) = self
                .tag_manager
                .create_permission(
                    &request.tag_manager_account_id,
                    &payloads::container_user_access(email, container_id),
                )
                .await
            {
                errors.push(e.to_string());
            }

            outcomes.push(if errors.is_empty() {
                GrantOutcome::granted(email)
            } else {
                GrantOutcome::failed(email, errors.join("; "))
            });
        }

        outcomes
    }

    /// Snapshots the container configuration as version "1" and publishes it.
    async fn publish_initial_version(
        &self,
        account_id: &str,
        container_id: &str,
    ) -> Result<String> {
        let response = self
            .tag_manager
            .create_version(
                account_id,
                container_id,
                &payloads::initial_version_options(),
            )
            .await?;

        let version_id = response.container_version.container_version_id;
        self.tag_manager
            .publish_version(account_id, container_id, &version_id)
            .await?;

        Ok(version_id)
    }
}

fn required_id(id: Option<&str>, entity: &str) -> Result<String> {
    id.map(str::to_string)
        .ok_or_else(|| ProvisionError::ProcessingError {
            message: format!("{} response carried no identifier", entity),
        })
}
