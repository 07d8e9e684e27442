/// Integration tests for the task resource endpoints
///
/// These tests drive the full router against a fresh in-memory database:
/// - List / get / create / update / delete
/// - Foreign-key validation at creation time ("User was not found")
/// - 404 behavior with the fixed "Task was not found" message
/// - Dangling user_id after user deletion

mod common;

use axum::http::StatusCode;
use common::{assert_not_found, json_body, TestContext};
use serde_json::json;

async fn seed_user(ctx: &TestContext) {
    let response = ctx
        .send_json(
            "POST",
            "/user/create",
            json!({
                "username": "john-doe",
                "firstname": "John",
                "lastname": "Doe",
                "age": 30
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

fn write_report() -> serde_json::Value {
    json!({
        "title": "Write report",
        "content": "Quarterly numbers",
        "priority": 1
    })
}

#[tokio::test]
async fn test_list_tasks_empty() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.get("/task/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!([]));

    // The prefix without the trailing slash reaches the same handler
    let response = ctx.get("/task").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_task_for_existing_user() {
    let ctx = TestContext::new().await.unwrap();
    seed_user(&ctx).await;

    let response = ctx
        .send_json("POST", "/task/create?user_id=1", write_report())
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response).await;
    assert_eq!(body["status_code"], 201);
    assert_eq!(body["transaction"], "Successful");

    let tasks = json_body(ctx.get("/task/").await).await;
    let tasks = tasks.as_array().unwrap().clone();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["user_id"], 1);
    assert_eq!(tasks[0]["title"], "Write report");
    assert_eq!(tasks[0]["content"], "Quarterly numbers");
    assert_eq!(tasks[0]["priority"], 1);
}

#[tokio::test]
async fn test_create_task_for_missing_user_returns_404() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .send_json("POST", "/task/create?user_id=999", write_report())
        .await;
    assert_not_found(response, "User was not found").await;

    // No task row was persisted
    let tasks = json_body(ctx.get("/task/").await).await;
    assert_eq!(tasks, json!([]));
}

#[tokio::test]
async fn test_get_task_by_id() {
    let ctx = TestContext::new().await.unwrap();
    seed_user(&ctx).await;
    ctx.send_json("POST", "/task/create?user_id=1", write_report())
        .await;

    let response = ctx.get("/task/1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let task = json_body(response).await;
    assert_eq!(task["id"], 1);
    assert_eq!(task["title"], "Write report");
    assert_eq!(task["user_id"], 1);
}

#[tokio::test]
async fn test_get_missing_task_returns_404() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.get("/task/999").await;
    assert_not_found(response, "Task was not found").await;
}

#[tokio::test]
async fn test_update_task() {
    let ctx = TestContext::new().await.unwrap();
    seed_user(&ctx).await;
    ctx.send_json("POST", "/task/create?user_id=1", write_report())
        .await;

    let response = ctx
        .send_json(
            "PUT",
            "/task/update/1",
            json!({
                "title": "Write final report",
                "content": "Audited numbers",
                "priority": 2
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["status_code"], 200);
    assert_eq!(body["transaction"], "Task update is successful!");

    let task = json_body(ctx.get("/task/1").await).await;
    assert_eq!(task["title"], "Write final report");
    assert_eq!(task["content"], "Audited numbers");
    assert_eq!(task["priority"], 2);
    // The owning user never changes
    assert_eq!(task["user_id"], 1);
}

#[tokio::test]
async fn test_update_missing_task_returns_404() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .send_json(
            "PUT",
            "/task/update/42",
            json!({
                "title": "T",
                "content": "C",
                "priority": 1
            }),
        )
        .await;
    assert_not_found(response, "Task was not found").await;
}

#[tokio::test]
async fn test_delete_task() {
    let ctx = TestContext::new().await.unwrap();
    seed_user(&ctx).await;
    ctx.send_json("POST", "/task/create?user_id=1", write_report())
        .await;

    let response = ctx.delete("/task/delete/1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["status_code"], 200);
    assert_eq!(body["transaction"], "Task deleted successfully!");

    let response = ctx.get("/task/1").await;
    assert_not_found(response, "Task was not found").await;
}

#[tokio::test]
async fn test_delete_missing_task_returns_404() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.delete("/task/delete/999").await;
    assert_not_found(response, "Task was not found").await;
}

#[tokio::test]
async fn test_deleting_user_leaves_tasks_in_place() {
    let ctx = TestContext::new().await.unwrap();
    seed_user(&ctx).await;
    ctx.send_json("POST", "/task/create?user_id=1", write_report())
        .await;

    let response = ctx.delete("/user/delete?user_id=1").await;
    assert_eq!(response.status(), StatusCode::OK);

    // The task survives with a dangling user_id
    let task = json_body(ctx.get("/task/1").await).await;
    assert_eq!(task["user_id"], 1);
}
