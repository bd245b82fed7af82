use super::*;

#[test]
fn alert_text_surfaces_raw_server_body() {
    let err = ApiError::Status {
        status: 403,
        body: r#"{"detail":"You do not have permission to perform this action."}"#.to_owned(),
    };
    assert_eq!(
        err.alert_text(),
        r#"{"detail":"You do not have permission to perform this action."}"#
    );
}

#[test]
fn alert_text_falls_back_to_description_for_empty_body() {
    let err = ApiError::Status { status: 500, body: String::new() };
    assert!(!err.alert_text().is_empty());
}

#[test]
fn alert_text_for_network_failure_names_the_failure() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.alert_text(), "request failed: connection refused");
}
