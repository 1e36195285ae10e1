use std::cell::RefCell;
use std::rc::Rc;

use serde_json::json;

use super::*;

fn recorder() -> (Rc<RefCell<Vec<(Severity, String)>>>, impl FnMut(Severity, String)) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    (seen, move |severity: Severity, message: String| sink.borrow_mut().push((severity, message)))
}

fn ok_response(body: serde_json::Value) -> Result<ApiResponse, RequestError> {
    Ok(ApiResponse::new(200, body))
}

#[test]
fn only_state_changing_verbs_send_csrf() {
    assert!(!Method::Get.sends_csrf());
    assert!(Method::Post.sends_csrf());
    assert!(Method::Delete.sends_csrf());
}

#[test]
fn defaults_follow_verb() {
    let get = RequestOptions::for_method(Method::Get);
    assert!(!get.show_toast);
    assert_eq!(get.success_message, None);
    assert_eq!(get.error_message, "Failed to fetch data");

    let post = RequestOptions::for_method(Method::Post);
    assert!(post.show_toast);
    assert_eq!(post.success_message.as_deref(), Some("Operation successful"));
    assert_eq!(post.error_message, "An error occurred");

    let delete = RequestOptions::for_method(Method::Delete);
    assert!(delete.show_toast);
    assert_eq!(delete.success_message.as_deref(), Some("Deleted successfully"));
    assert_eq!(delete.error_message, "Failed to delete");
}

#[test]
fn success_toast_prefers_server_message() {
    let (seen, notify) = recorder();
    let result = settle(
        ok_response(json!({ "success": true, "message": "Joined event" })),
        RequestOptions::for_method(Method::Post),
        notify,
    );
    assert!(result.is_ok());
    assert_eq!(*seen.borrow(), vec![(Severity::Success, "Joined event".to_owned())]);
}

#[test]
fn success_toast_falls_back_to_default_text() {
    let (seen, notify) = recorder();
    settle(ok_response(json!({ "success": true })), RequestOptions::for_method(Method::Delete), notify).unwrap();
    assert_eq!(*seen.borrow(), vec![(Severity::Success, "Deleted successfully".to_owned())]);
}

#[test]
fn unsuccessful_body_skips_toast_but_still_calls_on_success() {
    let (seen, notify) = recorder();
    let called = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&called);
    let options = RequestOptions::for_method(Method::Post).on_success(move |resp| {
        *sink.borrow_mut() = resp.message().map(str::to_owned);
    });
    let result = settle(ok_response(json!({ "success": false, "message": "Already joined" })), options, notify);
    assert!(result.is_ok());
    assert!(seen.borrow().is_empty());
    assert_eq!(called.borrow().as_deref(), Some("Already joined"));
}

#[test]
fn get_never_shows_success_toast_even_when_enabled() {
    let (seen, notify) = recorder();
    let options = RequestOptions::for_method(Method::Get).with_toast(true);
    settle(ok_response(json!({ "success": true, "message": "hi" })), options, notify).unwrap();
    assert!(seen.borrow().is_empty());
}

#[test]
fn failure_toasts_calls_on_error_and_propagates() {
    let (seen, notify) = recorder();
    let got = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&got);
    let options = RequestOptions::for_method(Method::Post)
        .with_error_message("Could not join")
        .on_error(move |err| *sink.borrow_mut() = Some(err.clone()));
    let result = settle(Err(RequestError::Status { status: 500 }), options, notify);
    assert_eq!(result, Err(RequestError::Status { status: 500 }));
    assert_eq!(*seen.borrow(), vec![(Severity::Error, "Could not join".to_owned())]);
    assert_eq!(*got.borrow(), Some(RequestError::Status { status: 500 }));
}

#[test]
fn silent_failure_skips_toast() {
    let (seen, notify) = recorder();
    let result = settle(
        Err(RequestError::Decode("eof".to_owned())),
        RequestOptions::for_method(Method::Get),
        notify,
    );
    assert!(result.is_err());
    assert!(seen.borrow().is_empty());
}

#[test]
fn on_success_is_not_called_for_failures() {
    let (_, notify) = recorder();
    let called = Rc::new(RefCell::new(false));
    let sink = Rc::clone(&called);
    let options = RequestOptions::for_method(Method::Delete).on_success(move |_| *sink.borrow_mut() = true);
    assert!(settle(Err(RequestError::Network("offline".to_owned())), options, notify).is_err());
    assert!(!*called.borrow());
}

#[test]
fn debug_reports_callback_presence() {
    let options = RequestOptions::for_method(Method::Get).on_error(|_| {});
    let text = format!("{options:?}");
    assert!(text.contains("on_error: true"));
    assert!(text.contains("on_success: false"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn requests_outside_browser_reject_through_error_callback() {
    let ctx = UiContext::new(crate::config::UiConfig::default()).unwrap();
    let got = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&got);
    let options = RequestOptions::for_method(Method::Post).on_error(move |err| *sink.borrow_mut() = Some(err.clone()));
    let result = futures::executor::block_on(post(&ctx, "/api/events/1/join", &json!({ "note": "hi" }), options));
    assert_eq!(result, Err(RequestError::Unavailable));
    assert_eq!(*got.borrow(), Some(RequestError::Unavailable));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn get_and_delete_outside_browser_are_unavailable() {
    let ctx = UiContext::new(crate::config::UiConfig::default()).unwrap();
    let got = futures::executor::block_on(get(&ctx, "/api/events", RequestOptions::for_method(Method::Get)));
    assert_eq!(got, Err(RequestError::Unavailable));
    let gone = futures::executor::block_on(delete(&ctx, "/api/events/1", RequestOptions::for_method(Method::Delete)));
    assert_eq!(gone, Err(RequestError::Unavailable));
}

#[test]
fn failing_success_callback_takes_error_path() {
    let (seen, notify) = recorder();
    let got = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&got);
    let options = RequestOptions::for_method(Method::Post)
        .try_on_success(|_| Err(RequestError::Callback("render failed".to_owned())))
        .on_error(move |err| *sink.borrow_mut() = Some(err.clone()));
    let result = settle(ok_response(json!({ "success": true, "message": "Saved" })), options, notify);
    let expected = RequestError::Callback("render failed".to_owned());
    assert_eq!(result, Err(expected.clone()));
    assert_eq!(
        *seen.borrow(),
        vec![
            (Severity::Success, "Saved".to_owned()),
            (Severity::Error, "An error occurred".to_owned()),
        ]
    );
    assert_eq!(*got.borrow(), Some(expected));
}
