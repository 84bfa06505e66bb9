use crate::error::{ProjectsError, Result};
use crate::models::{LanguageShare, ProjectConfig, ProjectDetails};
use crate::types::{GitHubRepo, LanguageBreakdown};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;
use url::Url;

const API_BASE_URL: &str = "https://api.github.com";

/// Parse the `owner/repo` identifier out of a project URL.
///
/// Only `github.com` URLs with at least two path segments are accepted;
/// anything after the repo name is ignored.
pub fn parse_repo_full_name(repo_url: &str) -> Result<String> {
    let url = Url::parse(repo_url)
        .map_err(|_| ProjectsError::InvalidRepoUrl(format!("Not a URL: {}", repo_url)))?;

    if url.host_str() != Some("github.com") {
        return Err(ProjectsError::InvalidRepoUrl(format!(
            "Not github.com: {}",
            repo_url
        )));
    }

    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.filter(|part| !part.is_empty()).collect())
        .unwrap_or_default();

    if segments.len() < 2 {
        return Err(ProjectsError::InvalidRepoUrl(format!(
            "Missing owner/repo path: {}",
            repo_url
        )));
    }

    Ok(format!("{}/{}", segments[0], segments[1]))
}

/// Convert a byte-count breakdown into a percentage list, largest share
/// first. Languages with zero bytes are dropped; an empty or all-zero
/// breakdown yields an empty list.
pub fn language_percents(breakdown: &LanguageBreakdown) -> Vec<LanguageShare> {
    let mut entries: Vec<(&str, u64)> = breakdown
        .iter()
        .filter(|(_, bytes)| **bytes > 0)
        .map(|(name, bytes)| (name.as_str(), *bytes))
        .collect();

    let total: u64 = entries.iter().map(|(_, bytes)| bytes).sum();
    if total == 0 {
        return Vec::new();
    }

    entries.sort_by(|a, b| b.1.cmp(&a.1));

    entries
        .into_iter()
        .map(|(name, bytes)| LanguageShare {
            name: name.to_string(),
            percent: ((bytes as f64 / total as f64) * 100.0).round() as u32,
        })
        .collect()
}

pub struct GitHubClient {
    client: Client,
    token: Option<String>,
    base_url: String,
}

impl GitHubClient {
    pub fn new(token: Option<String>) -> Result<Self> {
        Self::with_base_url(token, API_BASE_URL.to_string())
    }

    /// Build a client against a non-default API base URL (used by tests
    /// to point at a local mock server).
    pub fn with_base_url(token: Option<String>, base_url: String) -> Result<Self> {
        let client = Client::builder()
            .user_agent("Portfolio Projects Server/0.1.0")
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(GitHubClient {
            client,
            token,
            base_url,
        })
    }

    async fn make_request(&self, url: &str, full_name: &str) -> Result<Response> {
        let mut request = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json");

        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(ProjectsError::UpstreamStatus {
                full_name: full_name.to_string(),
                status: response.status(),
            });
        }

        Ok(response)
    }

    pub async fn get_repository(&self, full_name: &str) -> Result<GitHubRepo> {
        let url = format!("{}/repos/{}", self.base_url, full_name);
        let response = self.make_request(&url, full_name).await?;
        let repo: GitHubRepo = response.json().await?;
        Ok(repo)
    }

    pub async fn get_languages(&self, full_name: &str) -> Result<LanguageBreakdown> {
        let url = format!("{}/repos/{}/languages", self.base_url, full_name);
        let response = self.make_request(&url, full_name).await?;
        let breakdown: LanguageBreakdown = response.json().await?;
        Ok(breakdown)
    }

    /// Aggregate one configured project into a `ProjectDetails` record.
    ///
    /// URL parsing and the metadata fetch are fatal to this project's
    /// entry. The language breakdown is best-effort: on any failure, or
    /// an empty breakdown, the repo's single reported language stands in
    /// at 100%.
    pub async fn get_project_details(&self, config: &ProjectConfig) -> Result<ProjectDetails> {
        let full_name = parse_repo_full_name(&config.url)?;
        let repo = self.get_repository(&full_name).await?;

        let mut primary_language = repo.language.clone();
        let mut languages = match &repo.language {
            Some(language) => vec![LanguageShare {
                name: language.clone(),
                percent: 100,
            }],
            None => Vec::new(),
        };

        match self.get_languages(&full_name).await {
            Ok(breakdown) => {
                let shares = language_percents(&breakdown);
                if !shares.is_empty() {
                    primary_language = Some(shares[0].name.clone());
                    languages = shares;
                }
            }
            Err(e) => {
                debug!("Language breakdown unavailable for {}: {}", full_name, e);
            }
        }

        Ok(ProjectDetails {
            url: repo.html_url,
            full_name: repo.full_name,
            name: repo.name,
            description: repo.description,
            homepage: repo.homepage,
            language: repo.language,
            primary_language,
            languages,
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            updated_at: repo.updated_at,
        })
    }
}
