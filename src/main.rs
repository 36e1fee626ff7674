use analytics_bootstrap::config::{file::ProvisionerFile, prompt, Settings};
use analytics_bootstrap::utils::{logger, validation::Validate};
use analytics_bootstrap::{
    AnalyticsHttpClient, CliConfig, Provisioner, ProvisioningRequest, TagManagerHttpClient,
};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting analytics-bootstrap");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let file_config = match &cli.config {
        Some(path) => Some(ProvisionerFile::from_file(path)?),
        None => None,
    };
    let settings = Settings::resolve(&cli, file_config.as_ref());

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // Collect anything not supplied as a flag interactively.
    let project_name = prompt::prompt_or(cli.project_name.clone(), "Enter project name: ").await?;
    let domain_url =
        prompt::prompt_or(cli.domain_url.clone(), "Enter domain URL [https]: ").await?;
    let country = prompt::prompt_or_default(cli.country.clone(), "Enter country code", "US").await?;
    let timezone =
        prompt::prompt_or_default(cli.timezone.clone(), "Enter time zone", "America/New_York")
            .await?;

    let tag_manager_account_id = prompt::prompt_or(
        cli.tag_manager_account_id.clone(),
        "Enter tag manager account ID: ",
    )
    .await?;
    if tag_manager_account_id.is_empty() {
        eprintln!("❌ Tag manager account ID is mandatory");
        std::process::exit(1);
    }

    let analytics_account_id = prompt::prompt_or(
        cli.analytics_account_id.clone(),
        "Enter analytics account ID: ",
    )
    .await?;
    if analytics_account_id.is_empty() {
        eprintln!("❌ Analytics account ID is mandatory");
        std::process::exit(1);
    }

    let users: Vec<String> = if cli.users.is_empty() {
        prompt::prompt("Enter user emails to be added [comma separated]: ")
            .await?
            .split(',')
            .map(|s| s.to_string())
            .collect()
    } else {
        cli.users.clone()
    };

    let request = ProvisioningRequest::new(
        project_name,
        &domain_url,
        &country,
        &timezone,
        analytics_account_id,
        tag_manager_account_id,
        users,
    );

    let analytics = AnalyticsHttpClient::new(settings.analytics_url.clone(), settings.token.clone());
    let tag_manager =
        TagManagerHttpClient::new(settings.tag_manager_url.clone(), settings.token.clone());
    let provisioner = Provisioner::new(analytics, tag_manager, settings.template.clone());

    match provisioner.provision(&request).await {
        Ok(result) => {
            tracing::info!("✅ Provisioning completed");
            println!("✅ Provisioning completed");
            println!("📈 Web property: {}", result.web_property_id);
            println!("📦 Container: {}", result.container_id);
            println!("🚀 Published version: {}", result.version_id);
            for grant in &result.grants {
                if grant.granted {
                    println!("👤 {} granted access", grant.email);
                } else {
                    println!(
                        "⚠️ {} could not be granted access: {}",
                        grant.email,
                        grant.error.as_deref().unwrap_or("unknown error")
                    );
                }
            }
        }
        Err(e) => {
            tracing::error!("❌ Provisioning failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 Already-created resources are not removed; clean them up manually before retrying.");
            std::process::exit(1);
        }
    }

    Ok(())
}
