use clap::Parser;

#[derive(Parser)]
#[command(name = "portfolio-projects-server")]
#[command(about = "Portfolio Projects Server - Aggregates GitHub repository details for a portfolio page")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind the HTTP server to
    #[arg(long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Path to the static project list (JSON array of {url, shown})
    #[arg(long, env = "PROJECTS_FILE", default_value = "data/projects.json")]
    pub projects_file: String,

    /// GitHub token for higher API rate limits (optional)
    #[arg(long, env = "GITHUB_TOKEN")]
    pub github_token: Option<String>,

    /// Development mode: disable response caching
    #[arg(long, env = "DEV_MODE")]
    pub dev: bool,
}
