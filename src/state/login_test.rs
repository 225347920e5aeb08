use super::*;
use crate::net::client::ApiError;

fn filled(username: &str, password: &str) -> LoginForm {
    LoginForm { username: username.to_owned(), password: password.to_owned(), ..LoginForm::default() }
}

fn hq_session() -> Session {
    Session { access_token: "abc".to_owned(), user_type: "hq".to_owned() }
}

fn rejected() -> AuthError {
    AuthError::from(ApiError::Status { status: 401 })
}

#[test]
fn default_form_is_idle_without_error() {
    let form = LoginForm::default();
    assert_eq!(form.phase, LoginPhase::Idle);
    assert_eq!(form.error, None);
}

#[test]
fn begin_submit_requires_both_fields() {
    let mut form = filled("headquarters", "");
    assert_eq!(form.begin_submit(), Err(SubmitRejected::MissingFields));
    assert_eq!(form.phase, LoginPhase::Idle);
    assert_eq!(form.error, Some(text::FIELDS_REQUIRED));

    let mut form = filled("   ", "admin123");
    assert_eq!(form.begin_submit(), Err(SubmitRejected::MissingFields));
}

#[test]
fn begin_submit_sends_password_as_typed() {
    let mut form = filled("haifa_user", "   ");
    let credentials = form.begin_submit().unwrap();
    assert_eq!(credentials.password, "   ");
}

#[test]
fn begin_submit_enters_submitting_and_clears_error() {
    let mut form = filled(" headquarters ", "admin123");
    form.error = Some(text::LOGIN_FAILED);

    let credentials = form.begin_submit().unwrap();

    assert_eq!(credentials, Credentials { username: "headquarters".to_owned(), password: "admin123".to_owned() });
    assert!(form.is_submitting());
    assert_eq!(form.error, None);
}

#[test]
fn begin_submit_rejects_duplicate_submission() {
    let mut form = filled("headquarters", "admin123");
    form.begin_submit().unwrap();
    assert_eq!(form.begin_submit(), Err(SubmitRejected::InFlight));
}

#[test]
fn finish_success_returns_session() {
    let mut form = filled("headquarters", "admin123");
    form.begin_submit().unwrap();

    assert_eq!(form.finish(Ok(hq_session())), Some(hq_session()));
    assert_eq!(form.phase, LoginPhase::Succeeded);
}

#[test]
fn finish_failure_returns_to_idle_with_generic_message() {
    let mut form = filled("headquarters", "wrong");
    form.begin_submit().unwrap();

    assert_eq!(form.finish(Err(rejected())), None);
    assert_eq!(form.phase, LoginPhase::Idle);
    assert_eq!(form.error, Some("שגיאה בהתחברות"));
}

#[test]
fn form_is_resubmittable_after_failure() {
    let mut form = filled("headquarters", "wrong");
    form.begin_submit().unwrap();
    form.finish(Err(rejected()));

    form.password = "admin123".to_owned();
    assert!(form.begin_submit().is_ok());
}
