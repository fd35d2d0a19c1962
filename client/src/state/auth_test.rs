use super::*;

fn user(id: &str) -> User {
    User {
        id: id.to_owned(),
        email: format!("{id}@example.com"),
        last_login: None,
        created_at: None,
    }
}

fn unauthorized() -> ApiError {
    ApiError::Status {
        status: 401,
        message: "Unauthorized".to_owned(),
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_default_is_loading_not_verifying() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.verifying);
}

// =============================================================
// Session check
// =============================================================

#[test]
fn session_check_success_sets_user() {
    let mut state = AuthState::default();
    state.session_checked(Ok(user("a")));
    assert!(!state.loading);
    assert_eq!(state.user, Some(user("a")));
}

#[test]
fn session_check_failure_yields_logged_out_view() {
    let mut state = AuthState::default();
    state.session_checked(Err(unauthorized()));
    assert!(!state.loading);
    assert!(!state.is_authenticated());

    let mut state = AuthState::default();
    state.session_checked(Err(ApiError::Network("offline".to_owned())));
    assert!(state.user.is_none());
}

// =============================================================
// Token exchange
// =============================================================

#[test]
fn verify_success_replaces_user() {
    let mut state = AuthState {
        user: Some(user("old")),
        loading: false,
        verifying: false,
    };
    state.verify_started();
    assert!(state.verifying);

    assert_eq!(state.verify_finished(Ok(user("new"))), Ok(()));
    assert!(!state.verifying);
    assert_eq!(state.user.map(|u| u.id), Some("new".to_owned()));
}

#[test]
fn verify_failure_clears_user_and_returns_error() {
    let mut state = AuthState {
        user: Some(user("old")),
        loading: false,
        verifying: true,
    };
    assert_eq!(state.verify_finished(Err(unauthorized())), Err(unauthorized()));
    assert!(!state.verifying);
    assert!(state.user.is_none());
}

#[test]
fn logout_clears_user() {
    let mut state = AuthState::default();
    state.session_checked(Ok(user("a")));
    state.logged_out();
    assert!(!state.is_authenticated());
    assert!(!state.loading);
}
