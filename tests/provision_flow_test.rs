use analytics_bootstrap::{
    AnalyticsHttpClient, Provisioner, ProvisioningRequest, TagManagerHttpClient, TemplateSource,
};
use anyhow::Result;
use httpmock::prelude::*;
use serde_json::json;

fn acme_request(users: &str) -> ProvisioningRequest {
    ProvisioningRequest::new(
        "Acme",
        "//acme.com",
        "",
        "",
        "456",
        "123",
        users.split(',').map(str::to_string).collect(),
    )
}

fn template() -> TemplateSource {
    TemplateSource {
        account_id: "999".to_string(),
        container_id: "888".to_string(),
    }
}

#[tokio::test]
async fn test_full_provisioning_flow() -> Result<()> {
    let analytics_server = MockServer::start();
    let tag_manager_server = MockServer::start();

    let accounts_mock = analytics_server.mock(|when, then| {
        when.method(GET).path("/management/accounts");
        then.status(200).json_body(json!({
            "items": [
                {"id": "111", "name": "Other"},
                {"id": "456", "name": "Acme GA"}
            ]
        }));
    });

    let property_mock = analytics_server.mock(|when, then| {
        when.method(POST)
            .path("/management/accounts/456/webproperties")
            .json_body_partial(
                r#"{"name": "GA Acme", "websiteUrl": "https://acme.com", "industryVertical": "HEALTHCARE"}"#,
            );
        then.status(200).json_body(json!({
            "id": "UA-456-1",
            "name": "GA Acme",
            "websiteUrl": "https://acme.com",
            "industryVertical": "HEALTHCARE"
        }));
    });

    let profile_mock = analytics_server.mock(|when, then| {
        when.method(POST)
            .path("/management/accounts/456/webproperties/UA-456-1/profiles")
            .json_body_partial(r#"{"name": "All Web Site Data", "timezone": "America/New_York"}"#);
        then.status(200).json_body(json!({
            "name": "All Web Site Data",
            "timezone": "America/New_York"
        }));
    });

    let user_link_mock = analytics_server.mock(|when, then| {
        when.method(POST)
            .path("/management/accounts/456/webproperties/UA-456-1/entityUserLinks")
            .json_body_partial(r#"{"permissions": {"local": ["edit"]}}"#);
        then.status(200).json_body(json!({
            "userRef": {"email": "someone@example.com"},
            "permissions": {"local": ["edit"]}
        }));
    });

    let container_mock = tag_manager_server.mock(|when, then| {
        when.method(POST)
            .path("/accounts/123/containers")
            .json_body_partial(
                r#"{
                    "name": "GTM Acme",
                    "domainName": ["https://acme.com"],
                    "timeZoneCountryId": "US",
                    "timeZoneId": "America/New_York",
                    "usageContext": ["web"]
                }"#,
            );
        then.status(200).json_body(json!({
            "containerId": "C1",
            "name": "GTM Acme",
            "domainName": ["https://acme.com"],
            "timeZoneCountryId": "US",
            "timeZoneId": "America/New_York",
            "usageContext": ["web"]
        }));
    });

    let tag_create_mock = tag_manager_server.mock(|when, then| {
        when.method(POST)
            .path("/accounts/123/containers/C1/tags")
            .json_body_partial(
                r#"{
                    "name": "Acme Page View",
                    "type": "ua",
                    "parameter": [
                        {"type": "template", "key": "trackingId", "value": "UA-456-1"},
                        {"type": "boolean", "key": "anonymizeIp", "value": "true"}
                    ]
                }"#,
            );
        then.status(200).json_body(json!({
            "tagId": "T1",
            "name": "Acme Page View",
            "type": "ua",
            "parameter": [
                {"type": "template", "key": "trackingId", "value": "UA-456-1"},
                {"type": "boolean", "key": "anonymizeIp", "value": "true"}
            ]
        }));
    });

    let template_macros_mock = tag_manager_server.mock(|when, then| {
        when.method(GET).path("/accounts/999/containers/888/macros");
        then.status(200).json_body(json!({
            "macros": [
                {"name": "Page Path", "type": "v", "parameter": []},
                {"name": "Referrer", "type": "f", "parameter": []},
                {"name": "Event", "type": "e", "parameter": []}
            ]
        }));
    });

    let macro_create_mock = tag_manager_server.mock(|when, then| {
        when.method(POST).path("/accounts/123/containers/C1/macros");
        then.status(200).json_body(json!({"name": "created", "type": "v"}));
    });

    let rule_mock = tag_manager_server.mock(|when, then| {
        when.method(POST)
            .path("/accounts/123/containers/C1/rules")
            .json_body_partial(
                r#"{
                    "name": "All pages",
                    "condition": [{
                        "type": "matchRegex",
                        "parameter": [
                            {"type": "template", "key": "arg0", "value": "{{url}}"},
                            {"type": "template", "key": "arg1", "value": ".*"}
                        ]
                    }]
                }"#,
            );
        then.status(200).json_body(json!({
            "ruleId": "R1",
            "name": "All pages",
            "condition": []
        }));
    });

    let tag_update_mock = tag_manager_server.mock(|when, then| {
        when.method(PUT)
            .path("/accounts/123/containers/C1/tags/T1")
            .json_body_partial(r#"{"firingRuleId": ["R1"]}"#);
        then.status(200).json_body(json!({
            "tagId": "T1",
            "name": "Acme Page View",
            "type": "ua",
            "firingRuleId": ["R1"]
        }));
    });

    let permission_mock = tag_manager_server.mock(|when, then| {
        when.method(POST)
            .path("/accounts/123/permissions")
            .json_body_partial(
                r#"{
                    "accountAccess": {"permission": ["read"]},
                    "containerAccess": [
                        {"containerId": "C1", "permission": ["read", "edit", "delete", "publish"]}
                    ]
                }"#,
            );
        then.status(200).json_body(json!({
            "emailAddress": "someone@example.com",
            "accountAccess": {"permission": ["read"]},
            "containerAccess": [
                {"containerId": "C1", "permission": ["read", "edit", "delete", "publish"]}
            ]
        }));
    });

    let version_mock = tag_manager_server.mock(|when, then| {
        when.method(POST)
            .path("/accounts/123/containers/C1/versions")
            .json_body_partial(r#"{"name": "1", "notes": "Initial Version"}"#);
        then.status(200).json_body(json!({
            "containerVersion": {"containerVersionId": "V1"}
        }));
    });

    let publish_mock = tag_manager_server.mock(|when, then| {
        when.method(POST)
            .path("/accounts/123/containers/C1/versions/V1/publish");
        then.status(200).json_body(json!({}));
    });

    let provisioner = Provisioner::new(
        AnalyticsHttpClient::new(analytics_server.base_url(), None),
        TagManagerHttpClient::new(tag_manager_server.base_url(), None),
        template(),
    );

    // Blank email entry in the middle must be skipped.
    let result = provisioner
        .provision(&acme_request("a@x.com,,b@y.com"))
        .await?;

    assert_eq!(result.web_property_id, "UA-456-1");
    assert_eq!(result.container_id, "C1");
    assert_eq!(result.version_id, "V1");
    assert_eq!(result.grants.len(), 2);
    assert!(result.grants.iter().all(|g| g.granted));

    accounts_mock.assert();
    property_mock.assert();
    profile_mock.assert();
    container_mock.assert();
    tag_create_mock.assert();
    template_macros_mock.assert();
    rule_mock.assert();
    tag_update_mock.assert();
    version_mock.assert();
    publish_mock.assert();

    // One macro create per template macro.
    macro_create_mock.assert_hits(3);
    // Two grant calls per service: the blank entry was skipped.
    user_link_mock.assert_hits(2);
    permission_mock.assert_hits(2);

    Ok(())
}

#[tokio::test]
async fn test_empty_template_macro_set_creates_no_macros() -> Result<()> {
    let analytics_server = MockServer::start();
    let tag_manager_server = MockServer::start();

    analytics_server.mock(|when, then| {
        when.method(GET).path("/management/accounts");
        then.status(200)
            .json_body(json!({"items": [{"id": "456", "name": "Acme GA"}]}));
    });
    analytics_server.mock(|when, then| {
        when.method(POST)
            .path("/management/accounts/456/webproperties");
        then.status(200).json_body(json!({
            "id": "UA-456-1",
            "name": "GA Acme",
            "websiteUrl": "https://acme.com",
            "industryVertical": "HEALTHCARE"
        }));
    });
    analytics_server.mock(|when, then| {
        when.method(POST)
            .path("/management/accounts/456/webproperties/UA-456-1/profiles");
        then.status(200)
            .json_body(json!({"name": "All Web Site Data", "timezone": "America/New_York"}));
    });

    tag_manager_server.mock(|when, then| {
        when.method(POST).path("/accounts/123/containers");
        then.status(200).json_body(json!({
            "containerId": "C1",
            "name": "GTM Acme",
            "domainName": ["https://acme.com"],
            "timeZoneCountryId": "US",
            "timeZoneId": "America/New_York",
            "usageContext": ["web"]
        }));
    });
    tag_manager_server.mock(|when, then| {
        when.method(POST).path("/accounts/123/containers/C1/tags");
        then.status(200)
            .json_body(json!({"tagId": "T1", "name": "Acme Page View", "type": "ua"}));
    });

    // Template container carries no macros at all.
    tag_manager_server.mock(|when, then| {
        when.method(GET).path("/accounts/999/containers/888/macros");
        then.status(200).json_body(json!({}));
    });
    let macro_create_mock = tag_manager_server.mock(|when, then| {
        when.method(POST).path("/accounts/123/containers/C1/macros");
        then.status(200).json_body(json!({}));
    });

    tag_manager_server.mock(|when, then| {
        when.method(POST).path("/accounts/123/containers/C1/rules");
        then.status(200)
            .json_body(json!({"ruleId": "R1", "name": "All pages", "condition": []}));
    });
    tag_manager_server.mock(|when, then| {
        when.method(PUT).path("/accounts/123/containers/C1/tags/T1");
        then.status(200).json_body(json!({
            "tagId": "T1",
            "name": "Acme Page View",
            "type": "ua",
            "firingRuleId": ["R1"]
        }));
    });
    tag_manager_server.mock(|when, then| {
        when.method(POST)
            .path("/accounts/123/containers/C1/versions");
        then.status(200)
            .json_body(json!({"containerVersion": {"containerVersionId": "V1"}}));
    });
    tag_manager_server.mock(|when, then| {
        when.method(POST)
            .path("/accounts/123/containers/C1/versions/V1/publish");
        then.status(200).json_body(json!({}));
    });

    let provisioner = Provisioner::new(
        AnalyticsHttpClient::new(analytics_server.base_url(), None),
        TagManagerHttpClient::new(tag_manager_server.base_url(), None),
        template(),
    );

    let result = provisioner.provision(&acme_request("")).await?;

    assert_eq!(result.version_id, "V1");
    assert!(result.grants.is_empty());
    macro_create_mock.assert_hits(0);

    Ok(())
}
