use super::*;
use crate::net::types::User;

fn signed_in() -> AuthState {
    AuthState {
        user: Some(User {
            id: "u1".to_owned(),
            email: "ada@example.com".to_owned(),
            last_login: None,
            created_at: None,
        }),
        loading: false,
        verifying: false,
    }
}

fn anonymous() -> AuthState {
    AuthState {
        user: None,
        loading: false,
        verifying: false,
    }
}

#[test]
fn guarded_routes_wait_for_session_check() {
    let state = AuthState::default();
    assert_eq!(evaluate(Access::GuestOnly, &state), GuardOutcome::Loading);
    assert_eq!(evaluate(Access::Private, &state), GuardOutcome::Loading);
}

#[test]
fn public_routes_render_while_loading() {
    assert_eq!(evaluate(Access::Public, &AuthState::default()), GuardOutcome::Render);
}

#[test]
fn anonymous_user_sees_guest_routes() {
    assert_eq!(evaluate(Access::GuestOnly, &anonymous()), GuardOutcome::Render);
}

#[test]
fn anonymous_user_is_sent_away_from_dashboard() {
    assert_eq!(evaluate(Access::Private, &anonymous()), GuardOutcome::Redirect(LOGIN_PATH));
}

#[test]
fn signed_in_user_skips_guest_routes() {
    assert_eq!(
        evaluate(Access::GuestOnly, &signed_in()),
        GuardOutcome::Redirect(DASHBOARD_PATH)
    );
}

#[test]
fn signed_in_user_sees_dashboard() {
    assert_eq!(evaluate(Access::Private, &signed_in()), GuardOutcome::Render);
}
