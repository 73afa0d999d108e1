use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use outreach_generator::{
    AppConfig, Chain, GroqClient, OutreachPipeline, PageFetcher, Portfolio, PromptMode, Tone,
};

#[derive(Parser)]
#[command(
    name = "coldvenom",
    about = "Generate personalized outreach emails from job posting pages"
)]
struct Cli {
    /// Job posting URL to process
    url: String,

    /// Email tone
    #[arg(long, value_enum, default_value = "formal")]
    tone: Tone,

    /// Portfolio CSV path (overrides config)
    #[arg(long)]
    portfolio: Option<PathBuf>,

    /// Config file path (defaults to config.yaml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Extraction prompt selection (overrides config)
    #[arg(long, value_enum)]
    prompt_mode: Option<PromptMode>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(path) = cli.portfolio {
        config.portfolio.path = path;
    }
    if let Some(mode) = cli.prompt_mode {
        config.model.prompt_mode = mode;
    }

    let model = Arc::new(GroqClient::new(&config.model)?);
    let chain = Chain::new(model, config.model.prompt_mode, config.model.max_retries);
    let portfolio = Portfolio::new(&config.portfolio.path);
    let fetcher = PageFetcher::new(Duration::from_secs(config.fetch.timeout_seconds))?;
    let pipeline = OutreachPipeline::new(chain, portfolio, fetcher);

    let results = pipeline.process_url(&cli.url, cli.tone).await?;
    if results.is_empty() {
        println!("No job posting could be extracted from {}", cli.url);
        return Ok(());
    }

    for outreach in &results {
        println!("Job Title: {}", outreach.job.role);
        println!("Experience Required: {}", outreach.job.experience);
        println!("Expected Skills: {}", outreach.job.skills.join(", "));
        println!();
        println!("Job Summary:\n{}", outreach.summary);
        if !outreach.links.is_empty() {
            println!();
            println!("Matched portfolio links:");
            for link in &outreach.links {
                println!("  - {}", link.link);
            }
        }
        println!();
        println!("Subject: {}", outreach.email.subject);
        println!();
        println!("{}", outreach.email.body);
        println!();
    }

    Ok(())
}
