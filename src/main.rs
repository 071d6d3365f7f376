mod config;
mod error;
mod github;
mod pipeline;
mod render;
mod search;
mod server;
#[cfg(test)]
mod test_utils;

use clap::Parser;
use config::{Config, Overrides};
use github::client::GitHubClient;
use search::client::SearchClient;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "starfork",
    about = "Package search ranked by GitHub stars, with forks nested under their parents"
)]
struct Cli {
    #[arg(long, short, help = "Search query")]
    query: Option<String>,

    #[arg(long, help = "Serve results as a web page instead of printing them")]
    web: bool,

    #[arg(long, help = "Open the page in a browser (with --web)")]
    open: bool,

    #[arg(long, help = "Web server port")]
    port: Option<u16>,

    #[arg(long, help = "GitHub token, raises the API rate limit")]
    github_token: Option<String>,

    #[arg(long, help = "Maximum metadata fetches in flight")]
    concurrency: Option<usize>,

    #[arg(long, help = "Base URL of the package search index")]
    search_url: Option<String>,

    #[arg(long, help = "Print debug logging")]
    debug: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(Overrides {
        github_token: cli.github_token.clone(),
        concurrency: cli.concurrency,
        search_url: cli.search_url.clone(),
        port: cli.port,
    });
    tracing::debug!(?config, "loaded config");

    if config.token().is_none() {
        eprintln!(
            "specify --github-token (or GITHUB_TOKEN) to raise GitHub API rate limits: https://github.com/settings/tokens"
        );
    }

    match run(&cli, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli, config: &Config) -> error::Result<()> {
    let search = SearchClient::new(&config.search_url)?;
    let github = Arc::new(match config.github_api_url.as_deref() {
        Some(uri) => GitHubClient::with_base_uri(config.token(), uri)?,
        None => GitHubClient::new(config.token())?,
    });

    if cli.web {
        let state = Arc::new(server::ServerState::new(
            Arc::new(search),
            github,
            config.concurrency,
        ));
        return server::run_server(state, config.port, cli.open).await;
    }

    let query = match cli.query.as_deref().map(str::trim) {
        Some(q) if !q.is_empty() => q,
        _ => {
            return Err(error::StarforkError::Usage(
                "specify a query keyword with --query".to_string(),
            ))
        }
    };

    let report = pipeline::report(&search, Arc::clone(&github), query, config.concurrency).await?;
    print!("{}", render::text::write_report(&report));

    if let Some(remaining) = github.rate_limit().await {
        tracing::debug!(remaining, "github rate limit");
    }

    Ok(())
}
