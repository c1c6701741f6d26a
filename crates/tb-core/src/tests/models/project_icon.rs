use crate::ProjectIcon;

#[test]
fn test_icon_from_key_known() {
    assert_eq!(ProjectIcon::from_key("Bot"), ProjectIcon::Bot);
    assert_eq!(ProjectIcon::from_key("Building2"), ProjectIcon::Building2);
    assert_eq!(ProjectIcon::from_key("ShieldCheck"), ProjectIcon::ShieldCheck);
}

#[test]
fn test_icon_unknown_key_falls_back_to_circle() {
    assert_eq!(ProjectIcon::from_key("NotAnIcon"), ProjectIcon::Circle);
    assert_eq!(ProjectIcon::from_key(""), ProjectIcon::Circle);
    // Keys are case sensitive, exactly as stored
    assert_eq!(ProjectIcon::from_key("bot"), ProjectIcon::Circle);
}

#[test]
fn test_icon_key_round_trip() {
    for icon in ProjectIcon::ALL {
        assert_eq!(ProjectIcon::from_key(icon.as_key()), icon);
    }
    assert_eq!(
        ProjectIcon::from_key(ProjectIcon::Circle.as_key()),
        ProjectIcon::Circle
    );
}

#[test]
fn test_icon_picker_excludes_fallback() {
    assert!(!ProjectIcon::ALL.contains(&ProjectIcon::Circle));
    assert_eq!(ProjectIcon::ALL.len(), 18);
}
