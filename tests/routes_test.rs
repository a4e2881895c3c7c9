// ABOUTME: Integration tests for the HTTP routes over a mock completion provider
// ABOUTME: Exercises the JSON API, form page, validation statuses and persistence wiring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fyturisme

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::Router;
use fyturisme::config::{DatabaseConfig, DatabaseUrl, Environment, LlmConfig, LogLevel, ServerConfig};
use fyturisme::database::{connect, PlanStore};
use fyturisme::errors::AppError;
use fyturisme::llm::{ChatRequest, ChatResponse, LlmProvider};
use fyturisme::routes;
use fyturisme::server::ServerResources;
use http::{Request, StatusCode};
use sqlx::{Row, SqlitePool};
use tower::util::ServiceExt;

/// Mock provider returning a fixed meal and workout, or a typed failure
struct MockProvider {
    responses: Mutex<Vec<&'static str>>,
    fail: bool,
}

impl MockProvider {
    fn healthy() -> Self {
        Self {
            responses: Mutex::new(vec!["Oats for breakfast.", "Bodyweight circuits."]),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            responses: Mutex::new(Vec::new()),
            fail: true,
        }
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn display_name(&self) -> &'static str {
        "Mock Provider"
    }

    fn default_model(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, AppError> {
        if self.fail {
            return Err(AppError::external_service("Groq", "API error (500): boom"));
        }
        let content = self.responses.lock().unwrap().remove(0);
        Ok(ChatResponse {
            content: content.to_owned(),
            model: "mock-model".to_owned(),
            usage: None,
            finish_reason: Some("stop".to_owned()),
        })
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(true)
    }
}

fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        log_level: LogLevel::Info,
        environment: Environment::Testing,
        database: DatabaseConfig {
            url: DatabaseUrl::Memory,
        },
        llm: LlmConfig { model: None },
    }
}

async fn test_router(provider: MockProvider) -> (Router, SqlitePool) {
    let pool = connect(&DatabaseUrl::Memory).await.unwrap();
    PlanStore::new(pool.clone()).migrate().await.unwrap();

    let resources = Arc::new(ServerResources::new(
        test_config(),
        pool.clone(),
        Arc::new(provider),
    ));
    (routes::router(resources), pool)
}

fn json_request(body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/plans")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_submit_returns_plan_and_chart() {
    let (router, _pool) = test_router(MockProvider::healthy()).await;

    let response = router
        .oneshot(json_request(&serde_json::json!({
            "name": "Asha",
            "age": 34,
            "weight": 70.0,
            "segment": "Person stay in the house",
            "goal": "Weight Loss"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["calories"], 1386);
    assert_eq!(body["meal"], "Oats for breakfast.");
    assert_eq!(body["workout"], "Bodyweight circuits.");
    assert_eq!(body["chart"]["categories"][0], "Weight");
    assert_eq!(body["chart"]["values"][0], 70.0);
    assert_eq!(body["chart"]["values"][1], 34.0);
    assert!(body["summary"]
        .as_str()
        .unwrap()
        .contains("- Calories: 1386 kcal"));
}

#[tokio::test]
async fn test_submit_persists_record_matching_response() {
    let (router, pool) = test_router(MockProvider::healthy()).await;

    let response = router
        .oneshot(json_request(&serde_json::json!({
            "name": "Asha",
            "age": 34,
            "weight": 80.0,
            "segment": "Post-partum women",
            "goal": "Muscle Gain"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["calories"], 2464);

    let record_id = body["record_id"].as_i64().unwrap();
    let stored: i64 = sqlx::query("SELECT calories FROM user_data WHERE id = $1")
        .bind(record_id)
        .fetch_one(&pool)
        .await
        .unwrap()
        .get("calories");

    assert_eq!(stored, body["calories"].as_i64().unwrap());
}

#[tokio::test]
async fn test_zero_weight_is_a_validation_error() {
    let (router, pool) = test_router(MockProvider::healthy()).await;

    let response = router
        .oneshot(json_request(&serde_json::json!({
            "name": "Asha",
            "age": 34,
            "weight": 0,
            "segment": "Person stay in the house",
            "goal": "Weight Loss"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "MISSING_REQUIRED_FIELD");
    assert_eq!(body["error"]["message"], "Please fill in all fields!");

    // Nothing was generated, nothing was stored
    let count: i64 = sqlx::query("SELECT COUNT(*) AS n FROM user_data")
        .fetch_one(&pool)
        .await
        .unwrap()
        .get("n");
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_missing_fields_are_a_validation_error() {
    let (router, _pool) = test_router(MockProvider::healthy()).await;

    let response = router
        .oneshot(json_request(&serde_json::json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "MISSING_REQUIRED_FIELD");
}

#[tokio::test]
async fn test_unknown_segment_falls_back_to_stay_home() {
    let (router, _pool) = test_router(MockProvider::healthy()).await;

    let response = router
        .oneshot(json_request(&serde_json::json!({
            "name": "Asha",
            "age": 34,
            "weight": 70.0,
            "segment": "Deep sea welder",
            "goal": "Maintenance"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["calories"], 1540);
}

#[tokio::test]
async fn test_remote_failure_maps_to_bad_gateway() {
    let (router, pool) = test_router(MockProvider::failing()).await;

    let response = router
        .oneshot(json_request(&serde_json::json!({
            "name": "Asha",
            "age": 34,
            "weight": 70.0,
            "segment": "Person stay in the house",
            "goal": "Weight Loss"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "EXTERNAL_SERVICE_ERROR");

    // A failed generation is never persisted as a plan
    let count: i64 = sqlx::query("SELECT COUNT(*) AS n FROM user_data")
        .fetch_one(&pool)
        .await
        .unwrap()
        .get("n");
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_form_submit_renders_success_panel() {
    let (router, _pool) = test_router(MockProvider::healthy()).await;

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/submit")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from(
                    "name=Asha&age=34&weight=70&segment=Person+stay+in+the+house&goal=Weight+Loss",
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();

    assert!(html.contains("Your Personalized Plan"));
    assert!(html.contains("Hello Asha!"));
    assert!(html.contains("1386 kcal"));
    assert!(html.contains("<svg"));
}

#[tokio::test]
async fn test_form_submit_validation_error_page() {
    let (router, _pool) = test_router(MockProvider::healthy()).await;

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/submit")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from(
                    "name=Asha&age=34&weight=0&segment=Person+stay+in+the+house&goal=Weight+Loss",
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Please fill in all fields!"));
}

#[tokio::test]
async fn test_index_serves_form_with_all_options() {
    let (router, _pool) = test_router(MockProvider::healthy()).await;

    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();

    assert!(html.contains("Enter Your Details"));
    assert!(html.contains("Person stay in the house"));
    assert!(html.contains("Post-partum women"));
    assert!(html.contains("Weight Loss"));
    assert!(html.contains("Maintenance"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let (router, _pool) = test_router(MockProvider::healthy()).await;

    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}
