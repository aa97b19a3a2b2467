//! Course generation, the fallback path, the user course library, and the
//! progress completion invariant.

mod common;

use anyhow::Result;
use axum::http::StatusCode;
use common::{gemini_envelope, rich_course_json, TestApp};
use httpmock::Method;
use serde_json::{json, Value};
use std::fs;

#[tokio::test]
async fn generate_course_uses_ai_when_available() -> Result<()> {
    let app = TestApp::spawn().await?;
    let (token, _) = app.register("Ada", "ada@example.com").await?;

    let course = rich_course_json("Kafka Stream Processing in Depth");
    let gemini_mock = app.mock_server.mock(|when, then| {
        when.method(Method::POST)
            .path("/v1beta/models/gemini-1.5-flash:generateContent")
            .query_param("key", "test-key");
        then.status(200).json_body(gemini_envelope(&course));
    });

    let response = app
        .client
        .post(format!("{}/api/generate-course", app.address))
        .bearer_auth(&token)
        .json(&json!({ "topic": "kafka" }))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await?;
    assert_eq!(body["title"], "Kafka Stream Processing in Depth");
    assert_eq!(body["isAiGenerated"], true);
    assert_eq!(body["topic"], "kafka");
    assert!(body["id"].as_str().unwrap().starts_with("course_"));
    gemini_mock.assert();

    // Persisted to the library and to disk.
    let library: Value = app
        .client
        .get(format!("{}/api/user/courses", app.address))
        .bearer_auth(&token)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    assert_eq!(library["total"], 1);
    assert_eq!(library["completed"], 0);

    let on_disk = fs::read_to_string(app.data_dir.join("userCourses.json"))?;
    assert!(on_disk.contains("Kafka Stream Processing in Depth"));

    Ok(())
}

#[tokio::test]
async fn ai_failure_falls_back_to_authored_content() -> Result<()> {
    let app = TestApp::spawn().await?;
    let (token, _) = app.register("Ada", "ada@example.com").await?;

    // Every model endpoint is down.
    app.mock_server.mock(|when, then| {
        when.method(Method::POST);
        then.status(500).body("upstream unavailable");
    });

    let response = app
        .client
        .post(format!("{}/api/generate-course", app.address))
        .bearer_auth(&token)
        .json(&json!({ "topic": "bresenham line drawing" }))
        .send()
        .await?;

    // Collaborator failure is invisible: still a 200 with a full course.
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await?;
    assert_eq!(
        body["title"],
        "Comprehensive Guide to Bresenham's Line Drawing Algorithm"
    );
    assert_eq!(body["isFallback"], true);
    assert_eq!(body["fallbackUsed"], true);
    assert_eq!(body["isAiGenerated"], false);

    Ok(())
}

#[tokio::test]
async fn second_model_is_tried_when_first_fails() -> Result<()> {
    let app = TestApp::spawn().await?;
    let (token, _) = app.register("Ada", "ada@example.com").await?;

    app.mock_server.mock(|when, then| {
        when.method(Method::POST)
            .path("/v1beta/models/gemini-1.5-flash:generateContent");
        then.status(429).body("rate limited");
    });
    let course = rich_course_json("Distributed Log Processing");
    let pro_mock = app.mock_server.mock(|when, then| {
        when.method(Method::POST)
            .path("/v1beta/models/gemini-1.5-pro:generateContent");
        then.status(200).json_body(gemini_envelope(&course));
    });

    let body: Value = app
        .client
        .post(format!("{}/api/generate-course", app.address))
        .bearer_auth(&token)
        .json(&json!({ "topic": "kafka" }))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    assert_eq!(body["title"], "Distributed Log Processing");
    assert_eq!(body["isAiGenerated"], true);
    pro_mock.assert();

    Ok(())
}

#[tokio::test]
async fn generic_ai_output_is_replaced_by_fallback() -> Result<()> {
    let app = TestApp::spawn().await?;
    let (token, _) = app.register("Ada", "ada@example.com").await?;

    let thin_course = json!({
        "title": "Introduction to Things",
        "description": "Short.",
        "modules": [{ "title": "Overview", "detailedContent": "Thin." }]
    });
    app.mock_server.mock(|when, then| {
        when.method(Method::POST);
        then.status(200).json_body(gemini_envelope(&thin_course));
    });

    let body: Value = app
        .client
        .post(format!("{}/api/generate-course", app.address))
        .bearer_auth(&token)
        .json(&json!({ "topic": "machine learning" }))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    assert_eq!(body["title"], "Machine Learning Fundamentals");
    assert_eq!(body["fallbackUsed"], true);

    Ok(())
}

#[tokio::test]
async fn without_api_key_fallback_is_served_directly() -> Result<()> {
    let app = TestApp::spawn_without_ai().await?;
    let (token, _) = app.register("Ada", "ada@example.com").await?;

    let body: Value = app
        .client
        .post(format!("{}/api/generate-course", app.address))
        .bearer_auth(&token)
        .json(&json!({ "topic": "virtual machines" }))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    assert_eq!(body["title"], "Comprehensive Guide to Virtual Machines");
    assert_eq!(body["isFallback"], true);

    Ok(())
}

#[tokio::test]
async fn non_educational_topic_gets_soft_rejection() -> Result<()> {
    let app = TestApp::spawn_without_ai().await?;
    let (token, _) = app.register("Ada", "ada@example.com").await?;

    let response = app
        .client
        .post(format!("{}/api/generate-course", app.address))
        .bearer_auth(&token)
        .json(&json!({ "topic": "i love you" }))
        .send()
        .await?;

    // A deliberately soft rejection: 200, flagged body, nothing persisted.
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await?;
    assert_eq!(body["nonEducational"], true);
    assert!(body["message"].as_str().is_some());

    let library: Value = app
        .client
        .get(format!("{}/api/user/courses", app.address))
        .bearer_auth(&token)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    assert_eq!(library["total"], 0);

    Ok(())
}

#[tokio::test]
async fn missing_topic_is_a_bad_request() -> Result<()> {
    let app = TestApp::spawn_without_ai().await?;
    let (token, _) = app.register("Ada", "ada@example.com").await?;

    let response = app
        .client
        .post(format!("{}/api/generate-course", app.address))
        .bearer_auth(&token)
        .json(&json!({}))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await?;
    assert_eq!(body["message"], "Topic is required");

    Ok(())
}

#[tokio::test]
async fn generate_requires_authentication() -> Result<()> {
    let app = TestApp::spawn_without_ai().await?;

    let response = app
        .client
        .post(format!("{}/api/generate-course", app.address))
        .json(&json!({ "topic": "kafka" }))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn completing_a_course_increments_stats_exactly_once() -> Result<()> {
    let app = TestApp::spawn_without_ai().await?;
    let (token, _) = app.register("Ada", "ada@example.com").await?;

    let course: Value = app
        .client
        .post(format!("{}/api/generate-course", app.address))
        .bearer_auth(&token)
        .json(&json!({ "topic": "virtual machines" }))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    let course_id = course["id"].as_str().unwrap();

    let complete = || async {
        app.client
            .put(format!(
                "{}/api/user/courses/{course_id}/progress",
                app.address
            ))
            .bearer_auth(&token)
            .json(&json!({ "progress": 100, "completed": true }))
            .send()
            .await?
            .error_for_status()?;
        anyhow::Ok(())
    };

    complete().await?;
    let me: Value = app
        .client
        .get(format!("{}/api/auth/me", app.address))
        .bearer_auth(&token)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    assert_eq!(me["coursesCompleted"], 1);
    assert_eq!(me["totalStudyTime"], 25);

    // Completing an already-completed course must not double-count.
    complete().await?;
    let me: Value = app
        .client
        .get(format!("{}/api/auth/me", app.address))
        .bearer_auth(&token)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    assert_eq!(me["coursesCompleted"], 1);
    assert_eq!(me["totalStudyTime"], 25);

    Ok(())
}

#[tokio::test]
async fn courses_are_invisible_to_other_users() -> Result<()> {
    let app = TestApp::spawn_without_ai().await?;
    let (token_a, _) = app.register("Ada", "ada@example.com").await?;
    let (token_b, _) = app.register("Brian", "brian@example.com").await?;

    let course: Value = app
        .client
        .post(format!("{}/api/generate-course", app.address))
        .bearer_auth(&token_a)
        .json(&json!({ "topic": "virtual machines" }))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    let course_id = course["id"].as_str().unwrap();

    // B cannot see, update, or delete A's course.
    let get = app
        .client
        .get(format!("{}/api/user/courses/{course_id}", app.address))
        .bearer_auth(&token_b)
        .send()
        .await?;
    assert_eq!(get.status(), StatusCode::NOT_FOUND);

    let update = app
        .client
        .put(format!(
            "{}/api/user/courses/{course_id}/progress",
            app.address
        ))
        .bearer_auth(&token_b)
        .json(&json!({ "progress": 50 }))
        .send()
        .await?;
    assert_eq!(update.status(), StatusCode::NOT_FOUND);

    let delete = app
        .client
        .delete(format!("{}/api/user/courses/{course_id}", app.address))
        .bearer_auth(&token_b)
        .send()
        .await?;
    assert_eq!(delete.status(), StatusCode::NOT_FOUND);

    let library_b: Value = app
        .client
        .get(format!("{}/api/user/courses", app.address))
        .bearer_auth(&token_b)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    assert_eq!(library_b["total"], 0);

    // The owner still sees it.
    let get_a = app
        .client
        .get(format!("{}/api/user/courses/{course_id}", app.address))
        .bearer_auth(&token_a)
        .send()
        .await?;
    assert_eq!(get_a.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn owner_can_like_and_delete_a_course() -> Result<()> {
    let app = TestApp::spawn_without_ai().await?;
    let (token, _) = app.register("Ada", "ada@example.com").await?;

    let course: Value = app
        .client
        .post(format!("{}/api/generate-course", app.address))
        .bearer_auth(&token)
        .json(&json!({ "topic": "virtual machines" }))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    let course_id = course["id"].as_str().unwrap();

    // An empty body toggles the flag.
    let liked: Value = app
        .client
        .put(format!("{}/api/user/courses/{course_id}/like", app.address))
        .bearer_auth(&token)
        .json(&json!({}))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    assert_eq!(liked["course"]["liked"], true);

    let deleted = app
        .client
        .delete(format!("{}/api/user/courses/{course_id}", app.address))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(deleted.status(), StatusCode::OK);

    let library: Value = app
        .client
        .get(format!("{}/api/user/courses", app.address))
        .bearer_auth(&token)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    assert_eq!(library["total"], 0);

    Ok(())
}

#[tokio::test]
async fn catalog_is_public_and_indexed_by_id() -> Result<()> {
    let app = TestApp::spawn_without_ai().await?;

    let catalog: Value = app
        .client
        .get(format!("{}/api/courses", app.address))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    assert_eq!(catalog.as_array().unwrap().len(), 6);

    let course: Value = app
        .client
        .get(format!("{}/api/courses/1", app.address))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    assert_eq!(course["title"], "Data Structures & Algorithms");

    let missing = app
        .client
        .get(format!("{}/api/courses/999", app.address))
        .send()
        .await?;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    Ok(())
}
