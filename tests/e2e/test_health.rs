use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_ok_for_health_check(ctx: &mut TestContext) {
    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);

    // Health endpoint returns plain text
    let body = String::from_utf8(response.body_bytes.clone()).unwrap();
    assert_eq!(body, "OK");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_ready_when_api_key_is_configured(ctx: &mut TestContext) {
    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.body,
        Some(json!({ "status": "ready", "api_key": "configured" }))
    );
}

#[tokio::test]
async fn it_should_report_not_ready_without_api_key() {
    let ctx = TestContext::start(None).await;

    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        response.body,
        Some(json!({ "status": "not_ready", "api_key": "missing" }))
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_not_call_the_provider_for_health_checks(ctx: &mut TestContext) {
    ctx.client.get("/health").await.unwrap();
    ctx.client.get("/health/ready").await.unwrap();

    assert!(ctx.provider.requests().is_empty());
}
