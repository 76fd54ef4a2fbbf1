mod bootstrap;
mod report;

use anyhow::Result;
use aurora_core::settings::Settings;
use aurora_runtime::notifier::DeliveryChannel;
use aurora_runtime::orchestrator::ForecastRunner;
use aurora_runtime::source::HttpBulletinSource;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load()?;

    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("aurora-alert v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Threshold: {}, Top-N: {}, Dry run: {}",
        settings.threshold,
        settings.top_n,
        settings.dry_run
    );

    let year = bootstrap::resolve_year(settings.year);
    let source = HttpBulletinSource::new(settings.bulletin_url.clone())?;
    let notifier = DeliveryChannel::select(
        settings.notify_endpoint.as_deref(),
        settings.api_key.clone(),
        settings.dry_run,
    )?;

    let runner = ForecastRunner::new(
        source,
        notifier,
        settings.alert_config(),
        settings.notification_config(),
        settings.bulletin_url.clone(),
    );

    let outcome = match runner.run_once(year).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(error = %e, "forecast run failed; no notification sent");
            return Err(e.into());
        }
    };

    if settings.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print!("{}", report::render(&outcome, settings.threshold));
    }

    if let Some(e) = outcome.delivery_error {
        anyhow::bail!("alert delivery failed: {}", e);
    }

    Ok(())
}
