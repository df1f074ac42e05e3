use sync_core::SprintMergeRecord;
use sync_db::MergeRecordRepository;

use sqlx::SqlitePool;

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

/// Seeds a merge record through the repository
pub async fn seed_test_record(pool: &SqlitePool, record: &SprintMergeRecord) {
    MergeRecordRepository::new(pool.clone())
        .seed(record)
        .await
        .expect("Failed to seed merge record");
}
