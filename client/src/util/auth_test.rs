use super::*;

#[test]
fn logged_out_session_redirects_to_sign_in() {
    let state = SessionState::default();
    assert_eq!(route_gate(&state), RouteGate::RedirectToSignIn);
}

#[test]
fn checking_session_shows_loading() {
    let state = SessionState { checking: true, ..SessionState::default() };
    assert_eq!(route_gate(&state), RouteGate::Checking);
}

#[test]
fn logged_in_session_is_allowed() {
    let mut state = SessionState::default();
    state.sign_in("me@example.test", None);
    assert_eq!(route_gate(&state), RouteGate::Allow);
}

#[test]
fn logout_redirects_on_next_evaluation() {
    let mut state = SessionState::default();
    state.sign_in("me@example.test", Some("t".to_owned()));
    assert_eq!(route_gate(&state), RouteGate::Allow);
    state.sign_out();
    assert_eq!(route_gate(&state), RouteGate::RedirectToSignIn);
}
