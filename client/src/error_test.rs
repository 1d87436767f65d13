use super::*;

#[test]
fn status_error_message_includes_code() {
    assert_eq!(
        ApiError::Status { status: 404 }.to_string(),
        "request rejected with status 404"
    );
}

#[test]
fn timeout_error_names_element_and_budget() {
    let err = ModuleError::Timeout { element: "mesto-login".to_owned(), timeout_ms: 10_000 };
    assert_eq!(err.to_string(), "remote element <mesto-login> not defined within 10000 ms");
}
