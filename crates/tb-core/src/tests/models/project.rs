use crate::{Project, ProjectColor, ProjectDraft, ProjectIcon};

use chrono::Utc;
use serde_json::json;

fn fields_from(value: serde_json::Value) -> crate::Fields {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_project_from_draft() {
    let now = Utc::now();
    let draft = ProjectDraft {
        name: "Harbor Backend".to_string(),
        color: ProjectColor::Blue,
        icon: ProjectIcon::ShieldCheck,
    };
    let project = Project::from_draft(draft, now);

    assert_eq!(project.id, "");
    assert_eq!(project.name, "Harbor Backend");
    assert_eq!(project.color, ProjectColor::Blue);
    assert_eq!(project.icon, ProjectIcon::ShieldCheck);
    assert_eq!(project.created_at, Some(now));
}

#[test]
fn test_project_from_fields() {
    let fields = fields_from(json!({
        "name": "FieldVision",
        "color": "green",
        "icon": "PawPrint"
    }));
    let project = Project::from_fields("p1", &fields).unwrap();

    assert_eq!(project.id, "p1");
    assert_eq!(project.name, "FieldVision");
    assert_eq!(project.color, ProjectColor::Green);
    assert_eq!(project.icon, ProjectIcon::PawPrint);
    assert_eq!(project.created_at, None);
}

#[test]
fn test_project_unknown_tokens_fall_back() {
    let fields = fields_from(json!({
        "name": "Legacy",
        "color": "teal",
        "icon": "Wand"
    }));
    let project = Project::from_fields("p2", &fields).unwrap();

    assert_eq!(project.color, ProjectColor::Orange);
    assert_eq!(project.icon, ProjectIcon::Circle);
}

#[test]
fn test_project_to_fields_excludes_id() {
    let mut project = Project::from_draft(
        ProjectDraft {
            name: "Atlas".to_string(),
            color: ProjectColor::Purple,
            icon: ProjectIcon::Brain,
        },
        Utc::now(),
    );
    project.id = "p3".to_string();

    let fields = project.to_fields().unwrap();
    assert!(!fields.contains_key("id"));
    assert_eq!(fields["name"], json!("Atlas"));
    assert_eq!(fields["color"], json!("purple"));
    assert_eq!(fields["icon"], json!("Brain"));
}
