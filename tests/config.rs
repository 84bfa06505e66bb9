use portfolio_projects_server::config::load_projects;
use portfolio_projects_server::error::ProjectsError;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_projects_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"url": "https://github.com/acme/widget", "shown": true}},
            {{"url": "https://github.com/acme/hidden", "shown": false}}
        ]"#
    )
    .unwrap();

    let projects = load_projects(file.path()).unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].url, "https://github.com/acme/widget");
    assert!(projects[0].shown);
    assert!(!projects[1].shown);
}

#[test]
fn test_load_projects_missing_file() {
    let result = load_projects("does/not/exist.json");
    match result.unwrap_err() {
        ProjectsError::IoError(_) => {}
        other => panic!("Expected IoError, got: {:?}", other),
    }
}

#[test]
fn test_load_projects_malformed_json() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not json at all").unwrap();

    let result = load_projects(file.path());
    match result.unwrap_err() {
        ProjectsError::JsonError(_) => {}
        other => panic!("Expected JsonError, got: {:?}", other),
    }
}
