//! Homestead Engine - Main entry point.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use homestead_engine::infrastructure::config::{load_dotenv_from_repo_root, EngineConfig};
use homestead_engine::App;

fn main() -> anyhow::Result<()> {
    // Load environment from repo root.
    load_dotenv_from_repo_root();

    // Initialize logging (stderr, so stdout carries only the report)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homestead_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Homestead Engine");

    let config = EngineConfig::from_env().context("Invalid configuration")?;
    tracing::info!(
        plan = ?config.plan_path,
        on_capacity = ?config.capacity_policy,
        output = ?config.output,
        "Configuration loaded"
    );

    let app = App::new(config);
    let report = app.build().context("Failed to build neighborhoods")?;
    let rendered = app.render(&report).context("Failed to render report")?;
    println!("{}", rendered);

    Ok(())
}
