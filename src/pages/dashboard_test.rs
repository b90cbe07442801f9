use super::*;
use crate::state::session::SessionRecord;

#[test]
fn greeting_uses_display_name() {
    let mut record = SessionRecord::new("t", Role::Admin);
    record.name = Some("Dana".to_owned());
    assert_eq!(greeting(&AuthState::from_session(Some(record))), "Welcome back, Dana");
}

#[test]
fn greeting_without_session_is_generic() {
    assert_eq!(greeting(&AuthState::default()), "Welcome back");
}
