use crate::error::Result;
use crate::models::ProjectConfig;
use std::fs;
use std::path::Path;

/// Load the static project list from a JSON file.
///
/// The list is read once at startup; a missing or malformed file is
/// fatal since the server has nothing to serve without it.
pub fn load_projects<P: AsRef<Path>>(path: P) -> Result<Vec<ProjectConfig>> {
    let contents = fs::read_to_string(path)?;
    let projects: Vec<ProjectConfig> = serde_json::from_str(&contents)?;
    Ok(projects)
}
