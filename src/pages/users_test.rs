use super::*;

#[test]
fn parse_role_filter_maps_select_values() {
    assert_eq!(parse_role_filter("ADMIN"), Some(Role::Admin));
    assert_eq!(parse_role_filter("USER"), Some(Role::User));
    assert_eq!(parse_role_filter(""), None);
    assert_eq!(parse_role_filter("anything"), None);
}

#[test]
fn page_label_pluralizes() {
    assert_eq!(page_label(1, 1, 1), "Page 1 of 1 · 1 user");
    assert_eq!(page_label(2, 3, 25), "Page 2 of 3 · 25 users");
}
