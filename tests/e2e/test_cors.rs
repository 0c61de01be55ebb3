use crate::e2e::helpers;

use helpers::{valid_body, TestContext};
use hyper::{Method, StatusCode};
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_answer_preflight_with_empty_body(ctx: &mut TestContext) {
    let response = ctx.client.options("/api/tts").await.unwrap();

    response.assert_status(StatusCode::OK).assert_cors_headers();
    assert!(response.body_bytes.is_empty());
    assert!(ctx.provider.requests().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_other_methods_with_cors_headers(ctx: &mut TestContext) {
    for method in [Method::GET, Method::PUT, Method::DELETE, Method::PATCH] {
        let response = ctx.client.request(method, "/api/tts", None).await.unwrap();

        response
            .assert_status(StatusCode::METHOD_NOT_ALLOWED)
            .assert_cors_headers();
        assert_eq!(response.body, Some(json!({ "error": "Method not allowed" })));
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_cors_headers_on_success(ctx: &mut TestContext) {
    let response = ctx.client.post("/api/tts", &valid_body()).await.unwrap();

    response.assert_status(StatusCode::OK).assert_cors_headers();
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_cors_headers_on_validation_errors(ctx: &mut TestContext) {
    let response = ctx.client.post("/api/tts", &json!({})).await.unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_cors_headers();
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_cors_headers_on_provider_errors(ctx: &mut TestContext) {
    ctx.provider.respond_with(StatusCode::FORBIDDEN, "{}");

    let response = ctx.client.post("/api/tts", &valid_body()).await.unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_cors_headers();
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_request_id(ctx: &mut TestContext) {
    let response = ctx.client.options("/api/tts").await.unwrap();

    assert!(response.header("x-request-id").is_some());
}
