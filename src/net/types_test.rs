use super::*;
use serde::Deserialize;
use serde_json::json;

#[test]
fn success_flag_reads_boolean_field() {
    assert!(ApiResponse::new(200, json!({ "success": true })).success());
    assert!(!ApiResponse::new(200, json!({ "success": false })).success());
}

#[test]
fn missing_or_non_boolean_success_is_false() {
    assert!(!ApiResponse::new(200, json!({})).success());
    assert!(!ApiResponse::new(200, json!({ "success": "yes" })).success());
    assert!(!ApiResponse::new(200, json!([1, 2, 3])).success());
}

#[test]
fn message_is_exposed_when_string() {
    let resp = ApiResponse::new(200, json!({ "success": true, "message": "Saved" }));
    assert_eq!(resp.message(), Some("Saved"));
    assert_eq!(ApiResponse::new(200, json!({ "message": 5 })).message(), None);
}

#[test]
fn from_text_rejects_invalid_json() {
    assert!(matches!(ApiResponse::from_text(200, "<html>"), Err(RequestError::Decode(_))));
}

#[test]
fn parse_decodes_typed_payload() {
    #[derive(Debug, Deserialize, PartialEq)]
    struct Joined {
        success: bool,
        event_id: u32,
    }
    let resp = ApiResponse::from_text(200, r#"{"success":true,"event_id":42}"#).unwrap();
    assert_eq!(resp.parse::<Joined>().unwrap(), Joined { success: true, event_id: 42 });
    assert!(matches!(resp.parse::<Vec<u32>>(), Err(RequestError::Decode(_))));
}

#[test]
fn success_status_is_2xx_only() {
    assert!(is_success_status(200));
    assert!(is_success_status(204));
    assert!(!is_success_status(199));
    assert!(!is_success_status(302));
    assert!(!is_success_status(404));
    assert!(!is_success_status(500));
}

#[test]
fn status_error_formats_code() {
    assert_eq!(RequestError::Status { status: 403 }.to_string(), "HTTP error: status 403");
}
