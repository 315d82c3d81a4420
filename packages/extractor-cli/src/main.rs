//! Run one extraction cycle for a PDF on disk and print the result.

mod render;

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use extractor::config::API_URL_VAR;
use extractor::{
    select_endpoint, ExtractionClient, ExtractorConfig, IntakeSource, SharedState,
    WorkflowController, WorkflowStore,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use render::View;

#[derive(Parser)]
#[command(name = "extract")]
#[command(about = "Send a PDF to the extraction server and show the extracted fields")]
struct Cli {
    /// PDF file to extract
    path: PathBuf,

    /// Extraction server base URL
    #[arg(long, env = API_URL_VAR)]
    api_url: Option<String>,

    /// Which view of the result to print
    #[arg(long, value_enum, default_value_t = View::Summary)]
    view: View,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,extractor=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Loads .env before clap reads the environment
    let config = ExtractorConfig::from_env();
    let cli = Cli::parse();

    let api_url = match cli.api_url {
        Some(url) => ExtractorConfig::new(url).api_base_url,
        None => config.api_base_url,
    };
    if api_url.is_empty() {
        bail!("No extraction server configured: pass --api-url or set EXTRACTOR_API_URL");
    }

    let name = cli
        .path
        .file_name()
        .and_then(|n| n.to_str())
        .context("Path has no usable file name")?
        .to_string();
    let content = tokio::fs::read(&cli.path)
        .await
        .with_context(|| format!("Failed to read {}", cli.path.display()))?;

    let state = SharedState::default();
    let controller = WorkflowController::new(state.clone(), ExtractionClient::new(&api_url));

    controller
        .intake(name.clone(), content, IntakeSource::Path)
        .with_context(|| format!("Cannot extract {}", cli.path.display()))?;

    let endpoint = select_endpoint(&name);
    println!(
        "{} {} -> {}{}",
        "Extracting".bright_cyan().bold(),
        name,
        api_url,
        endpoint.path()
    );

    let outcome = controller.submit().await;

    if let Some(view) = state.snapshot().result() {
        print!("{}", render::render(view, cli.view));
    }
    outcome.context("Extraction failed")?;

    Ok(())
}
