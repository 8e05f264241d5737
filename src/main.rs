//! Command-line entry point: run the scenario sequence against a live server.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gh_issues_harness::{ClientConfig, IssuesClient, ScenarioRunner};

/// Run the issue scenario sequence against a live issues API.
///
/// The access token is read from the ACCESS_TOKEN environment variable
/// (a .env file in the working directory is honored).
#[derive(Debug, Parser)]
#[command(name = "gh-issues-harness", version, about)]
struct Args {
    /// API base URL (overrides GITHUB_API_URL).
    #[arg(long)]
    base_url: Option<String>,

    /// Repository owner login (overrides GITHUB_OWNER).
    #[arg(long)]
    owner: Option<String>,

    /// Repository name (overrides GITHUB_REPO).
    #[arg(long)]
    repo: Option<String>,

    /// Log filter, e.g. "info" or "gh_issues_harness=debug".
    #[arg(long, default_value = "info")]
    log: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&args.log).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {}", err);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(owner = %config.owner, repo = %config.repo, "starting scenario run");

    let client = match IssuesClient::new(config) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("client error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let report = ScenarioRunner::with_default_scenarios().run(&client).await;
    println!("{}", report);

    if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn load_config(args: &Args) -> gh_issues_harness::Result<ClientConfig> {
    let base = ClientConfig::from_env()?;

    let mut builder = ClientConfig::builder()
        .token(base.token)
        .timeout(base.timeout)
        .owner(args.owner.clone().unwrap_or(base.owner))
        .repo(args.repo.clone().unwrap_or(base.repo));

    builder = match &args.base_url {
        Some(url) => builder.api_base(url)?,
        None => builder.api_base(base.api_base.as_str())?,
    };

    builder.build()
}
