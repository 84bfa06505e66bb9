use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectsError {
    #[error("Invalid repository URL: {0}")]
    InvalidRepoUrl(String),

    #[error("GitHub API failed for {full_name}: {status}")]
    UpstreamStatus {
        full_name: String,
        status: StatusCode,
    },

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProjectsError>;
