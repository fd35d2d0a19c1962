use super::*;

#[test]
fn validate_email_trims_input() {
    assert_eq!(validate_email("  ada@example.com \n"), Ok("ada@example.com".to_owned()));
}

#[test]
fn validate_email_rejects_blank() {
    assert_eq!(validate_email(""), Err(EMPTY_EMAIL_MESSAGE));
    assert_eq!(validate_email("   "), Err("Please enter your email address"));
}

#[test]
fn failure_message_prefers_server_text() {
    assert_eq!(send_failure_message("Too many requests"), "Too many requests");
    assert_eq!(send_failure_message(""), SEND_FAILED_MESSAGE);
}
