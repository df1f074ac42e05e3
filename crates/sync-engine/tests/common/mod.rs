#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sync_db::{BoardRepository, MergeRecordRepository, TeamMemberRepository};
use sync_engine::{DueSprintScheduler, HttpAiClient, HttpBoardClient, SprintMergeExecutor};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sync_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Inserts an upstream board row
pub async fn create_test_board(
    pool: &SqlitePool,
    board_id: &str,
    project_id: i64,
    template_board_id: Option<&str>,
) {
    sqlx::query("INSERT INTO boards (board_id, project_id, template_board_id) VALUES (?, ?, ?)")
        .bind(board_id)
        .bind(project_id)
        .bind(template_board_id)
        .execute(pool)
        .await
        .expect("Failed to create test board");
}

/// Inserts an upstream team-member row
pub async fn create_test_member(
    pool: &SqlitePool,
    project_id: i64,
    board_id: Option<&str>,
    status: &str,
) {
    sqlx::query("INSERT INTO team_members (project_id, board_id, status) VALUES (?, ?, ?)")
        .bind(project_id)
        .bind(board_id)
        .bind(status)
        .execute(pool)
        .await
        .expect("Failed to create test member");
}

/// Executor wired to the mock board and AI servers
pub fn build_executor(
    pool: &SqlitePool,
    board_server: &MockServer,
    ai_server: &MockServer,
) -> SprintMergeExecutor {
    let board_api = HttpBoardClient::new(&board_server.uri(), None, Duration::from_secs(5))
        .expect("Failed to build board client");
    let ai = HttpAiClient::new(&ai_server.uri(), None, "test-model", Duration::from_secs(5))
        .expect("Failed to build ai client");

    SprintMergeExecutor::new(
        BoardRepository::new(pool.clone()),
        MergeRecordRepository::new(pool.clone()),
        Arc::new(board_api),
        Arc::new(ai),
    )
}

/// Scheduler over the same pool and mock servers
pub fn build_scheduler(
    pool: &SqlitePool,
    board_server: &MockServer,
    ai_server: &MockServer,
) -> DueSprintScheduler {
    DueSprintScheduler::new(
        TeamMemberRepository::new(pool.clone()),
        BoardRepository::new(pool.clone()),
        MergeRecordRepository::new(pool.clone()),
        build_executor(pool, board_server, ai_server),
    )
}

/// Task snapshot JSON in the fixed transport shape
pub fn task_json(name: &str, role: &str, due_date: Option<&str>) -> Value {
    json!({
        "name": name,
        "description": "",
        "due_date": due_date,
        "role": role,
        "checklist": [],
        "task_id": null
    })
}

/// Serve a sprint list for one (board, list-name) pair. Names that are
/// never mounted come back 404, which the client reads as "no such list".
pub async fn mount_sprint(
    server: &MockServer,
    board_id: &str,
    list_name: &str,
    list_id: &str,
    tasks: Vec<Value>,
) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/boards/{board_id}/sprint")))
        .and(query_param("name", list_name))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"list_id": list_id, "tasks": tasks})),
        )
        .mount(server)
        .await;
}

/// Accept the list overwrite for one (board, list) pair
pub async fn mount_override_ok(server: &MockServer, board_id: &str, list_id: &str) {
    Mock::given(method("PUT"))
        .and(path(format!("/api/v1/boards/{board_id}/lists/{list_id}/tasks")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(server)
        .await;
}

/// Serve a fixed chat-completion reply
pub async fn mount_ai_reply(server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": content}}]
        })))
        .mount(server)
        .await;
}
