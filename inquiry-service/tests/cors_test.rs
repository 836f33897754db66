mod common;

use common::{TestApp, ALLOWED_ORIGIN};
use serde_json::{json, Value};

fn contact() -> Value {
    json!({ "childName": "Ravi", "phone": "9999999999", "message": "Interested" })
}

#[tokio::test]
async fn request_without_origin_is_allowed() {
    let app = TestApp::spawn().await;

    let response = app.post_contact(&contact()).await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(app.mailer.send_count(), 1);
}

#[tokio::test]
async fn allowed_origin_receives_cors_headers() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(format!("{}/api/contact-inquiry", app.address))
        .header("origin", ALLOWED_ORIGIN)
        .json(&contact())
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        ALLOWED_ORIGIN
    );
    assert_eq!(response.headers()["access-control-allow-credentials"], "true");
}

#[tokio::test]
async fn disallowed_origin_is_rejected_before_sending() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(format!("{}/api/contact-inquiry", app.address))
        .header("origin", "https://evil.example")
        .json(&contact())
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 403);
    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
    assert_eq!(response.headers()["x-content-type-options"], "nosniff");
    assert!(response.headers().contains_key("x-request-id"));
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "CORS blocked: Origin not allowed");
    assert_eq!(app.mailer.send_count(), 0);
}

#[tokio::test]
async fn preflight_from_allowed_origin_succeeds() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .request(
            reqwest::Method::OPTIONS,
            format!("{}/api/admission-inquiry", app.address),
        )
        .header("origin", ALLOWED_ORIGIN)
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        ALLOWED_ORIGIN
    );
    let methods = response.headers()["access-control-allow-methods"]
        .to_str()
        .unwrap()
        .to_string();
    assert!(methods.contains("POST"));
}

#[tokio::test]
async fn preflight_from_disallowed_origin_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .request(
            reqwest::Method::OPTIONS,
            format!("{}/api/admission-inquiry", app.address),
        )
        .header("origin", "https://evil.example")
        .header("access-control-request-method", "POST")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 403);
}
