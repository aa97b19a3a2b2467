//! Registration, login, and token validation behavior.

mod common;

use anyhow::Result;
use axum::http::StatusCode;
use common::{generate_jwt_with_expiry, TestApp};
use serde_json::{json, Value};

#[tokio::test]
async fn register_returns_token_and_user() -> Result<()> {
    let app = TestApp::spawn_without_ai().await?;

    let response = app
        .client
        .post(format!("{}/api/auth/register", app.address))
        .json(&json!({ "name": "Ada", "email": "ada@example.com", "password": "hunter2!" }))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await?;
    assert_eq!(body["message"], "User registered successfully");
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["email"], "ada@example.com");
    assert_eq!(body["user"]["coursesCompleted"], 0);
    assert_eq!(body["user"]["totalStudyTime"], 0);
    // The hash never leaves the server.
    assert!(body["user"].get("password").is_none());

    Ok(())
}

#[tokio::test]
async fn register_with_missing_fields_is_rejected() -> Result<()> {
    let app = TestApp::spawn_without_ai().await?;

    let response = app
        .client
        .post(format!("{}/api/auth/register", app.address))
        .json(&json!({ "email": "ada@example.com" }))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await?;
    assert_eq!(body["message"], "All fields are required");

    Ok(())
}

#[tokio::test]
async fn duplicate_email_is_rejected_and_not_stored() -> Result<()> {
    let app = TestApp::spawn_without_ai().await?;
    let (token, _) = app.register("Ada", "ada@example.com").await?;

    let response = app
        .client
        .post(format!("{}/api/auth/register", app.address))
        .json(&json!({ "name": "Imposter", "email": "ada@example.com", "password": "other" }))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await?;
    assert_eq!(body["message"], "User already exists");

    // The original registration is intact and unique.
    let me: Value = app
        .client
        .get(format!("{}/api/auth/me", app.address))
        .bearer_auth(&token)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    assert_eq!(me["name"], "Ada");

    let users = app
        .app_state
        .repos
        .users
        .read(|users| users.len())
        .await;
    assert_eq!(users, 1);

    Ok(())
}

#[tokio::test]
async fn login_succeeds_with_correct_credentials() -> Result<()> {
    let app = TestApp::spawn_without_ai().await?;
    app.register("Ada", "ada@example.com").await?;

    let response = app
        .client
        .post(format!("{}/api/auth/login", app.address))
        .json(&json!({ "email": "ada@example.com", "password": "hunter2!" }))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await?;
    assert_eq!(body["message"], "Login successful");
    assert!(!body["token"].as_str().unwrap().is_empty());

    Ok(())
}

#[tokio::test]
async fn login_with_wrong_password_is_rejected() -> Result<()> {
    let app = TestApp::spawn_without_ai().await?;
    app.register("Ada", "ada@example.com").await?;

    let response = app
        .client
        .post(format!("{}/api/auth/login", app.address))
        .json(&json!({ "email": "ada@example.com", "password": "wrong" }))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await?;
    assert_eq!(body["message"], "Invalid credentials");

    Ok(())
}

#[tokio::test]
async fn login_with_unknown_email_is_rejected() -> Result<()> {
    let app = TestApp::spawn_without_ai().await?;

    let response = app
        .client
        .post(format!("{}/api/auth/login", app.address))
        .json(&json!({ "email": "nobody@example.com", "password": "whatever" }))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await?;
    assert_eq!(body["message"], "Invalid credentials");

    Ok(())
}

#[tokio::test]
async fn protected_route_without_token_is_unauthorized() -> Result<()> {
    let app = TestApp::spawn_without_ai().await?;

    let response = app
        .client
        .get(format!("{}/api/auth/me", app.address))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await?;
    assert_eq!(body["message"], "Access token required");

    Ok(())
}

#[tokio::test]
async fn invalid_token_is_forbidden() -> Result<()> {
    let app = TestApp::spawn_without_ai().await?;

    let response = app
        .client
        .get(format!("{}/api/auth/me", app.address))
        .bearer_auth("this.is.not.a.valid.jwt")
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body: Value = response.json().await?;
    assert_eq!(body["message"], "Invalid or expired token");

    Ok(())
}

#[tokio::test]
async fn expired_token_is_forbidden() -> Result<()> {
    let app = TestApp::spawn_without_ai().await?;
    let (_, user_id) = app.register("Ada", "ada@example.com").await?;

    // Well past the validation leeway.
    let expired = generate_jwt_with_expiry(&user_id, "ada@example.com", -3600)?;

    let response = app
        .client
        .get(format!("{}/api/auth/me", app.address))
        .bearer_auth(expired)
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
async fn me_reports_course_totals() -> Result<()> {
    let app = TestApp::spawn_without_ai().await?;
    let (token, _) = app.register("Ada", "ada@example.com").await?;

    app.client
        .post(format!("{}/api/generate-course", app.address))
        .bearer_auth(&token)
        .json(&json!({ "topic": "virtual machines" }))
        .send()
        .await?
        .error_for_status()?;

    let me: Value = app
        .client
        .get(format!("{}/api/auth/me", app.address))
        .bearer_auth(&token)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    assert_eq!(me["totalCourses"], 1);
    assert_eq!(me["recentActivity"].as_array().unwrap().len(), 1);

    Ok(())
}
