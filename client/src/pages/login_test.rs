use super::*;

#[test]
fn validation_message_covers_each_error() {
    assert_eq!(validation_message(&ValidationError::EmptyEmail), "Enter your email address.");
    assert_eq!(validation_message(&ValidationError::EmptyPassword), "Enter your password.");
    assert_eq!(
        validation_message(&ValidationError::MalformedEmail("nope".to_owned())),
        "That does not look like an email address."
    );
}

#[test]
fn submit_label_reflects_loading() {
    assert_eq!(submit_label(Status::Loading), "Signing in...");
    assert_eq!(submit_label(Status::Idle), "Sign in");
    assert_eq!(submit_label(Status::Error), "Sign in");
    assert_eq!(submit_label(Status::Authenticated), "Sign in");
}
