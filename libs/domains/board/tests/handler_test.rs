//! Handler tests for the Board domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! They run against the in-memory store, so no database is needed.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_board::*;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn service() -> BoardService<InMemoryBoardStore> {
    BoardService::new(InMemoryBoardStore::new())
}

async fn seed_section(service: &BoardService<InMemoryBoardStore>, title: &str) -> Section {
    service
        .create_section(CreateSection {
            title: title.to_string(),
        })
        .await
        .unwrap()
}

fn task_json(section_id: uuid::Uuid) -> serde_json::Value {
    json!({
        "title": "Write report",
        "description": "Quarterly summary",
        "due_date": "2024-06-01",
        "assignee": { "id": "u1", "name": "Ann", "avatar": "a.png" },
        "tag": "reports",
        "section_id": section_id
    })
}

#[tokio::test]
async fn test_create_section_handler_returns_201() {
    let app = handlers::router(service());

    let request = Request::builder()
        .method("POST")
        .uri("/sections")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "title": "Todo" })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let section: Section = json_body(response.into_body()).await;
    assert_eq!(section.title, "Todo");
    assert!(section.task_ids.is_empty());
}

#[tokio::test]
async fn test_create_section_handler_validates_input() {
    let app = handlers::router(service());

    let request = Request::builder()
        .method("POST")
        .uri("/sections")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "title": "" })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_task_handler_returns_201() {
    let service = service();
    let section = seed_section(&service, "Todo").await;
    let app = handlers::router(service);

    let request = Request::builder()
        .method("POST")
        .uri("/tasks")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&task_json(section.id)).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let task: Task = json_body(response.into_body()).await;
    assert_eq!(task.title, "Write report");
    assert_eq!(task.section_id, section.id);
}

#[tokio::test]
async fn test_create_task_handler_returns_404_for_missing_section() {
    let app = handlers::router(service());

    let request = Request::builder()
        .method("POST")
        .uri("/tasks")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&task_json(uuid::Uuid::now_v7())).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_section_handler_resolves_tasks() {
    let service = service();
    let section = seed_section(&service, "Todo").await;
    let input: CreateTask = serde_json::from_value(task_json(section.id)).unwrap();
    let task = service.create_task(input).await.unwrap();
    let app = handlers::router(service);

    let request = Request::builder()
        .method("GET")
        .uri(format!("/sections/{}", section.id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(body["title"], "Todo");
    assert_eq!(body["tasks"][0]["title"], "Write report");
    assert_eq!(body["tasks"][0]["_id"], json!(task.id));
}

#[tokio::test]
async fn test_get_section_handler_returns_404_for_missing() {
    let app = handlers::router(service());

    let request = Request::builder()
        .method("GET")
        .uri(format!("/sections/{}", uuid::Uuid::now_v7()))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_section_handler_rejects_malformed_id() {
    let app = handlers::router(service());

    let request = Request::builder()
        .method("GET")
        .uri("/sections/not-a-uuid")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_move_task_handler_returns_updated_task() {
    let service = service();
    let source = seed_section(&service, "Todo").await;
    let destination = seed_section(&service, "Doing").await;
    let input: CreateTask = serde_json::from_value(task_json(source.id)).unwrap();
    let task = service.create_task(input).await.unwrap();
    let app = handlers::router(service);

    let request = Request::builder()
        .method("POST")
        .uri(format!("/tasks/{}/move", task.id))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "from_section_id": source.id,
                "to_section_id": destination.id
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let moved: Task = json_body(response.into_body()).await;
    assert_eq!(moved.section_id, destination.id);
}

#[tokio::test]
async fn test_delete_section_handler_returns_409_when_not_empty() {
    let service = service();
    let section = seed_section(&service, "Todo").await;
    let input: CreateTask = serde_json::from_value(task_json(section.id)).unwrap();
    service.create_task(input).await.unwrap();
    let app = handlers::router(service);

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/sections/{}", section.id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_delete_task_handler_returns_204() {
    let service = service();
    let section = seed_section(&service, "Todo").await;
    let input: CreateTask = serde_json::from_value(task_json(section.id)).unwrap();
    let task = service.create_task(input).await.unwrap();
    let app = handlers::router(service);

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/tasks/{}", task.id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_update_task_handler_returns_200() {
    let service = service();
    let section = seed_section(&service, "Todo").await;
    let input: CreateTask = serde_json::from_value(task_json(section.id)).unwrap();
    let task = service.create_task(input).await.unwrap();
    let app = handlers::router(service);

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/tasks/{}", task.id))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "title": "Edit report" })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let updated: Task = json_body(response.into_body()).await;
    assert_eq!(updated.title, "Edit report");
    assert_eq!(updated.section_id, section.id);
}

#[tokio::test]
async fn test_list_sections_handler_returns_creation_order() {
    let service = service();
    seed_section(&service, "Todo").await;
    seed_section(&service, "Doing").await;
    seed_section(&service, "Done").await;
    let app = handlers::router(service);

    let request = Request::builder()
        .method("GET")
        .uri("/sections")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let board: Vec<serde_json::Value> = json_body(response.into_body()).await;
    let titles: Vec<&str> = board.iter().map(|s| s["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["Todo", "Doing", "Done"]);
}

#[tokio::test]
async fn test_reconcile_handler_reports_consistent_board() {
    let service = service();
    let section = seed_section(&service, "Todo").await;
    let input: CreateTask = serde_json::from_value(task_json(section.id)).unwrap();
    service.create_task(input).await.unwrap();
    let app = handlers::router(service);

    let request = Request::builder()
        .method("POST")
        .uri("/board/reconcile")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let report: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(report["consistent"], json!(true));
}
