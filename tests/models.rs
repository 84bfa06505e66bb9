use chrono::{TimeZone, Utc};
use portfolio_projects_server::models::{
    LanguageShare, ProjectConfig, ProjectDetails, ProjectsResponse,
};

fn sample_details() -> ProjectDetails {
    ProjectDetails {
        url: "https://github.com/acme/widget".to_string(),
        full_name: "acme/widget".to_string(),
        name: "widget".to_string(),
        description: Some("A widget".to_string()),
        homepage: None,
        language: Some("Go".to_string()),
        primary_language: Some("Go".to_string()),
        languages: vec![
            LanguageShare {
                name: "Go".to_string(),
                percent: 80,
            },
            LanguageShare {
                name: "Shell".to_string(),
                percent: 20,
            },
        ],
        stars: 42,
        forks: 7,
        updated_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    }
}

#[test]
fn test_project_details_serializes_camel_case() {
    let value = serde_json::to_value(sample_details()).unwrap();
    let object = value.as_object().unwrap();

    assert!(object.contains_key("fullName"));
    assert!(object.contains_key("primaryLanguage"));
    assert!(object.contains_key("updatedAt"));
    assert!(!object.contains_key("full_name"));
    assert!(!object.contains_key("primary_language"));
    assert!(!object.contains_key("updated_at"));

    assert_eq!(value["fullName"], "acme/widget");
    assert_eq!(value["primaryLanguage"], "Go");
    assert_eq!(value["stars"], 42);
    assert_eq!(value["forks"], 7);
    assert_eq!(value["languages"][0]["name"], "Go");
    assert_eq!(value["languages"][0]["percent"], 80);
}

#[test]
fn test_project_details_round_trips() {
    let details = sample_details();
    let json = serde_json::to_string(&details).unwrap();
    let parsed: ProjectDetails = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.full_name, details.full_name);
    assert_eq!(parsed.languages, details.languages);
    assert_eq!(parsed.updated_at, details.updated_at);
}

#[test]
fn test_projects_response_shape() {
    let response = ProjectsResponse {
        projects: vec![sample_details()],
    };
    let value = serde_json::to_value(&response).unwrap();

    assert!(value["projects"].is_array());
    assert_eq!(value["projects"][0]["name"], "widget");
}

#[test]
fn test_project_config_deserializes() {
    let json = r#"[
        {"url": "https://github.com/acme/widget", "shown": true},
        {"url": "https://github.com/acme/hidden", "shown": false}
    ]"#;

    let configs: Vec<ProjectConfig> = serde_json::from_str(json).unwrap();
    assert_eq!(configs.len(), 2);
    assert_eq!(configs[0].url, "https://github.com/acme/widget");
    assert!(configs[0].shown);
    assert!(!configs[1].shown);
}
