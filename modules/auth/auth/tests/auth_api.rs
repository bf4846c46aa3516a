#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Integration tests for the `/auth` endpoints
//!
//! These tests drive the module router end to end:
//! 1. Registration defaults the role and never echoes the secret
//! 2. Duplicate logins conflict
//! 3. Wrong secrets and unknown logins fail identically
//! 4. Issued tokens verify to the login

use anyhow::Result;
use auth::{AuthConfig, AuthModule, TokenConfig};
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

const SECRET: &str = "dGhpcy1pcy1hLXRlc3Qtc2VjcmV0LXdpdGgtMzItYnl0ZXMhIQ==";

fn module() -> AuthModule {
    let cfg = AuthConfig {
        token: TokenConfig {
            secret: SECRET.to_owned().into(),
            ttl: "1h".to_owned(),
        },
        ..AuthConfig::default()
    };
    AuthModule::from_config(&cfg).unwrap()
}

async fn post_json(router: &Router, uri: &str, body: &Value) -> Result<(StatusCode, Value, String)> {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(body)?))?,
        )
        .await?;

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_owned())
        .unwrap_or_default();
    let bytes = response.into_body().collect().await?.to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, json, content_type))
}

#[tokio::test]
async fn register_then_login_issues_token() -> Result<()> {
    let module = module();
    let router = module.router();

    let (status, body, _) = post_json(
        &router,
        "/auth/register",
        &json!({"login": "u1", "secret": "s1"}),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["login"], "u1");
    assert_eq!(body["role"], "ROLE_USER");
    assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(body.get("secret").is_none());
    assert!(body.get("secret_hash").is_none());

    let (status, body, _) =
        post_json(&router, "/auth/login", &json!({"login": "u1", "secret": "s1"})).await?;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap();
    assert!(!token.is_empty());
    assert_eq!(module.token_verifier().verify(token)?, "u1");

    Ok(())
}

#[tokio::test]
async fn duplicate_registration_conflicts() -> Result<()> {
    let router = module().router();

    let (status, _, _) = post_json(
        &router,
        "/auth/register",
        &json!({"login": "u2", "secret": "pw"}),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body, content_type) = post_json(
        &router,
        "/auth/register",
        &json!({"login": "u2", "secret": "other"}),
    )
    .await?;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(content_type, "application/problem+json");
    assert!(body["detail"].as_str().unwrap().contains("u2"));

    // The first registration still owns the login.
    let (status, _, _) =
        post_json(&router, "/auth/login", &json!({"login": "u2", "secret": "pw"})).await?;
    assert_eq!(status, StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn wrong_secret_looks_like_unknown_login() -> Result<()> {
    let router = module().router();
    post_json(
        &router,
        "/auth/register",
        &json!({"login": "u1", "secret": "s1"}),
    )
    .await?;

    let wrong = post_json(
        &router,
        "/auth/login",
        &json!({"login": "u1", "secret": "nope"}),
    )
    .await?;
    let unknown = post_json(
        &router,
        "/auth/login",
        &json!({"login": "never-registered", "secret": "s1"}),
    )
    .await?;

    assert_eq!(wrong.0, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong, unknown);
    assert_eq!(wrong.1["detail"], "Invalid credentials");

    Ok(())
}

#[tokio::test]
async fn explicit_role_is_kept() -> Result<()> {
    let router = module().router();

    let (status, body, _) = post_json(
        &router,
        "/auth/register",
        &json!({"login": "boss", "secret": "pw", "role": "ROLE_ADMIN"}),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["role"], "ROLE_ADMIN");

    Ok(())
}

#[tokio::test]
async fn blank_login_is_a_validation_problem() -> Result<()> {
    let router = module().router();

    let (status, body, content_type) = post_json(
        &router,
        "/auth/register",
        &json!({"login": "   ", "secret": "pw"}),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(content_type, "application/problem+json");
    assert_eq!(body["errors"][0]["field"], "login");

    Ok(())
}

#[test]
fn openapi_documents_both_endpoints() {
    let doc = serde_json::to_value(AuthModule::openapi()).unwrap();
    assert!(doc.pointer("/paths/~1auth~1login/post").is_some());
    assert!(doc.pointer("/paths/~1auth~1register/post").is_some());
}
