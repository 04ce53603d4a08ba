mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // for .oneshot()

use common::{contact_app, test_config, MockMailer};

fn valid_payload() -> Value {
    json!({
        "firstName": "Priya",
        "lastName": "Sharma",
        "email": "priya@example.com",
        "phone": "9320008279",
        "subject": "Balcony glazing",
        "message": "Looking for toughened glass panels for a balcony.",
        "preferredContact": "email",
        "agreeToTerms": true
    })
}

fn post_contact(payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/contact")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(payload).unwrap()))
        .unwrap()
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_valid_submission_sends_both_emails() {
    let mailer = MockMailer::succeeding();
    let app = contact_app(mailer.clone());

    let resp = app.oneshot(post_contact(&valid_payload())).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["message"], "Contact form submitted successfully");
    assert_eq!(body["notificationSent"], true);
    assert_eq!(body["confirmationSent"], true);

    assert_eq!(mailer.calls(), 2);
    let sent = mailer.sent_messages();
    assert_eq!(sent[0].to, test_config().contact_email);
    assert!(sent[0].subject.contains("Balcony glazing"));
    assert_eq!(sent[1].to, "priya@example.com");
}

#[tokio::test]
async fn test_validation_failure_names_fields_and_sends_nothing() {
    let mailer = MockMailer::succeeding();
    let app = contact_app(mailer.clone());

    let mut payload = valid_payload();
    payload["firstName"] = json!("P");
    payload["subject"] = json!("Hi");

    let resp = app.oneshot(post_contact(&payload)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = body_json(resp).await;
    assert_eq!(body["error"], "Invalid form data");
    let details = body["details"].as_array().unwrap();
    assert!(details.iter().any(|d| d["field"] == "firstName"));
    assert!(details.iter().any(|d| d["field"] == "subject"));

    assert_eq!(mailer.calls(), 0);
}

#[tokio::test]
async fn test_missing_field_is_bad_request() {
    let mailer = MockMailer::succeeding();
    let app = contact_app(mailer.clone());

    let mut payload = valid_payload();
    payload.as_object_mut().unwrap().remove("phone");

    let resp = app.oneshot(post_contact(&payload)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("phone"));
    assert_eq!(mailer.calls(), 0);
}

#[tokio::test]
async fn test_terms_not_accepted_is_rejected() {
    let mailer = MockMailer::succeeding();
    let app = contact_app(mailer.clone());

    let mut payload = valid_payload();
    payload["agreeToTerms"] = json!(false);

    let resp = app.oneshot(post_contact(&payload)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = body_json(resp).await;
    let details = body["details"].as_array().unwrap();
    assert!(details.iter().any(|d| d["field"] == "agreeToTerms"));
    assert_eq!(mailer.calls(), 0);
}

#[tokio::test]
async fn test_notification_failure_skips_confirmation() {
    let mailer = MockMailer::failing_on(&[0]);
    let app = contact_app(mailer.clone());

    let resp = app.oneshot(post_contact(&valid_payload())).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // The confirmation must never be attempted after a failed notification.
    assert_eq!(mailer.calls(), 1);

    let body = body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("Failed to send"));
}

#[tokio::test]
async fn test_confirmation_failure_still_succeeds() {
    let mailer = MockMailer::failing_on(&[1]);
    let app = contact_app(mailer.clone());

    let resp = app.oneshot(post_contact(&valid_payload())).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["notificationSent"], true);
    assert_eq!(body["confirmationSent"], false);
    assert_eq!(mailer.calls(), 2);
}
