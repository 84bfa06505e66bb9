use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the static project list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub url: String,
    pub shown: bool,
}

/// A language's share of a repository, derived from byte counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageShare {
    pub name: String,
    pub percent: u32,
}

/// Aggregated details for one portfolio project.
///
/// Built fresh per request from the repo and languages endpoints;
/// never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetails {
    pub url: String,
    pub full_name: String,
    pub name: String,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub language: Option<String>,
    pub primary_language: Option<String>,
    pub languages: Vec<LanguageShare>,
    pub stars: u32,
    pub forks: u32,
    pub updated_at: DateTime<Utc>,
}

/// Body of the projects endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectsResponse {
    pub projects: Vec<ProjectDetails>,
}
