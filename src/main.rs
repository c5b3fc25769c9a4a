//! Wiring & DI. Entry point: parse flags, bootstrap adapters, inject into services, print results.
//! No business logic here.

use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use meetop::adapters::integrations::{LinkedInAdapter, MeetupAdapter, SlackAdapter};
use meetop::adapters::ui::cli::{Cli, Mode};
use meetop::adapters::ui::console;
use meetop::adapters::ui::tui::TuiOperator;
use meetop::domain::DomainError;
use meetop::shared::config::EventConfig;
use meetop::shared::logging::{init_logging, log_path_from_env};
use meetop::usecases::{PublishService, TemplateService};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();

    let log_path = log_path_from_env();
    let _log_guard = init_logging(&log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }
    info!(mode = ?cli.mode(), log = %log_path.display(), "Starting meetop");

    if !cli.no_banner {
        meetop::adapters::ui::init_ui();
    }

    let cfg = EventConfig::load()
        .inspect_err(|e| error!(error = %e, "failed to load configuration"))
        .context("Failed to load configuration")?;

    match cli.mode() {
        Mode::Template { prompt } => run_template(&cfg, prompt).await?,
        Mode::Publish => run_publish(&cfg, None).await?,
        Mode::ShareOnly { event_id } => run_publish(&cfg, Some(&event_id)).await?,
    }

    info!("meetop finished");
    Ok(())
}

async fn run_template(cfg: &EventConfig, prompt: bool) -> anyhow::Result<()> {
    info!("running in template mode (no Meetup API calls)");
    let service = TemplateService::new(Arc::new(TuiOperator::new(prompt)));
    let url = service.run(cfg).await.map_err(fatal)?;
    info!(url = %url, "templates generated");
    console::print_template_done();
    Ok(())
}

async fn run_publish(cfg: &EventConfig, event_id: Option<&str>) -> anyhow::Result<()> {
    let credentials = cfg
        .meetup_credentials()
        .map_err(|e| fatal(DomainError::Config(e)))?;

    let host = Arc::new(MeetupAdapter::new(cfg.meetup_api_url.clone(), credentials)?);
    let chat = Arc::new(SlackAdapter::new(cfg.slack_api_url.clone())?);
    let feed = Arc::new(LinkedInAdapter::new(cfg.linkedin_api_url.clone())?);
    let service = PublishService::new(host, chat, feed);

    let report = match event_id {
        Some(id) => service.share_existing(id, cfg).await,
        None => service.execute(cfg).await,
    }
    .map_err(fatal)?;

    console::print_report(&report);
    Ok(())
}

/// Log the fatal error and attach the stage it stopped at.
fn fatal(e: DomainError) -> anyhow::Error {
    error!(error = %e, "run aborted");
    let stage = match &e {
        DomainError::Config(_) => "Configuration validation failed",
        DomainError::Prompt(_) => "Prompt failed",
        _ => "Meetup request failed",
    };
    anyhow::Error::new(e).context(stage)
}
