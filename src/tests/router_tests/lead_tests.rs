// src/tests/router_tests/lead_tests.rs

use crate::config::SiteConfig;
use crate::router::handle;
use astra::Body;
use http::{Method, Request};
use std::io::Read;

fn post_lead(body: &str) -> astra::Response {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/lead")
        .header("Content-Type", "application/json")
        .body(Body::from(body.as_bytes().to_vec()))
        .unwrap();

    handle(req, &SiteConfig::unconfigured()).expect("Failed to handle request")
}

fn json_body(resp: astra::Response) -> serde_json::Value {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    serde_json::from_str(&body).expect("lead endpoint always returns JSON")
}

#[test]
fn empty_payload_is_rejected_with_400() {
    let resp = post_lead("{}");
    assert_eq!(resp.status(), 400);

    let body = json_body(resp);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Name and contact are required");
}

#[test]
fn blank_name_counts_as_missing() {
    let resp = post_lead(r#"{"name": "  ", "contact": "98765"}"#);
    assert_eq!(resp.status(), 400);
    assert_eq!(json_body(resp)["success"], false);
}

#[test]
fn valid_lead_is_acknowledged_with_200() {
    let resp = post_lead(r#"{"name": "A", "contact": "B"}"#);
    assert_eq!(resp.status(), 200);

    let body = json_body(resp);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Lead submitted successfully");
}

#[test]
fn extra_context_fields_are_accepted() {
    let resp = post_lead(
        r#"{"name": "A", "contact": "B", "projectName": "Green Heights",
            "projectSlug": "green-heights", "preferredTime": "evening",
            "timestamp": "2026-08-29T10:00:00Z"}"#,
    );
    assert_eq!(resp.status(), 200);
    assert_eq!(json_body(resp)["success"], true);
}

#[test]
fn unparseable_body_yields_500() {
    let resp = post_lead("not json at all");
    assert_eq!(resp.status(), 500);

    let body = json_body(resp);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Failed to submit lead");
}

#[test]
fn lead_endpoint_is_post_only() {
    let req = Request::builder()
        .method(Method::GET)
        .uri("/api/lead")
        .body(Body::empty())
        .unwrap();

    assert!(handle(req, &SiteConfig::unconfigured()).is_err());
}
