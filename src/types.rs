use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

// GitHub API response structures
#[derive(Debug, Deserialize)]
pub struct GitHubRepo {
    pub full_name: String,
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
    pub updated_at: DateTime<Utc>,
}

/// Per-language byte counts from the languages endpoint.
pub type LanguageBreakdown = HashMap<String, u64>;
