use super::*;
use crate::net::types::UserRole;

#[test]
fn auth_state_defaults_to_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn myself_role_decodes_lowercase() {
    let me: Myself =
        serde_json::from_str(r#"{"url":"/api/students/3/","role":"student"}"#).unwrap();
    assert_eq!(me.role, UserRole::Student);

    let me: Myself =
        serde_json::from_str(r#"{"url":"/api/instructors/1/","role":"instructor"}"#).unwrap();
    assert_eq!(me.role, UserRole::Instructor);
}
