use clap::Parser;
use colored::*;
use portfolio_projects_server::cli::Cli;
use portfolio_projects_server::config::load_projects;
use portfolio_projects_server::error::Result;
use portfolio_projects_server::github::GitHubClient;
use portfolio_projects_server::server::{cache_control_value, start_server, AppState};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    println!("{}", "Portfolio Projects Server".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());

    let projects = load_projects(&cli.projects_file)?;
    let shown_count = projects.iter().filter(|p| p.shown).count();
    println!(
        "📋 Loaded {} configured projects ({} shown)",
        projects.len(),
        shown_count
    );

    if cli.github_token.is_none() {
        println!(
            "{}",
            "No GITHUB_TOKEN set - using unauthenticated rate limits".yellow()
        );
    }
    if cli.dev {
        println!("{}", "Running in development mode (caching disabled)".yellow());
    }

    let client = GitHubClient::new(cli.github_token.clone())?;

    let state = AppState {
        client: Arc::new(client),
        projects: Arc::new(projects),
        cache_control: cache_control_value(cli.dev),
        start_time: std::time::Instant::now(),
    };

    println!("\nPress Ctrl+C to stop the server\n");

    start_server(state, &cli.host, cli.port).await?;

    println!("✅ Server stopped");

    Ok(())
}
