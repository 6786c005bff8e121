use muster_api::session::{SessionContext, SessionUser};

fn user_with_token(token: Option<&str>) -> SessionUser {
    SessionUser {
        id: 1,
        first_name: Some("Asha".to_string()),
        last_name: Some("Nair".to_string()),
        email: "asha@example.com".to_string(),
        role: "Recruiter".to_string(),
        token: token.map(str::to_string),
    }
}

#[test]
fn test_signed_out_by_default() {
    let session = SessionContext::new();
    assert!(!session.is_signed_in());
    assert_eq!(session.bearer_token(), None);
    assert_eq!(session.current_user().map(|u| u.id), None);
    assert_eq!(session.role(), None);
}

#[test]
fn test_user_token_wins_over_fallback() {
    let session = SessionContext::new();
    session.sign_in_token("standalone");
    session.sign_in(user_with_token(Some("user-token")));
    assert_eq!(session.bearer_token().as_deref(), Some("user-token"));
}

#[test]
fn test_fallback_token_used_when_user_has_none() {
    let session = SessionContext::new();
    session.sign_in_token("standalone");
    session.sign_in(user_with_token(None));
    assert_eq!(session.bearer_token().as_deref(), Some("standalone"));
}

#[test]
fn test_sign_out_clears_everything() {
    let session = SessionContext::new();
    session.sign_in_token("standalone");
    session.sign_in(user_with_token(Some("user-token")));
    session.sign_out();
    assert!(!session.is_signed_in());
    assert_eq!(session.bearer_token(), None);
}

#[test]
fn test_clones_share_state() {
    let session = SessionContext::new();
    let clone = session.clone();
    session.sign_in(user_with_token(Some("t")));
    assert_eq!(clone.role().as_deref(), Some("Recruiter"));
}
