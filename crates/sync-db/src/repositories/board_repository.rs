use crate::Result as DbErrorResult;

use sync_core::Board;

use sqlx::{Row, SqlitePool};

/// Read-only view of the upstream boards table.
pub struct BoardRepository {
    pool: SqlitePool,
}

impl BoardRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, board_id: &str) -> DbErrorResult<Option<Board>> {
        let row = sqlx::query(
            r#"
                SELECT board_id, project_id, template_board_id
                FROM boards
                WHERE board_id = ?
            "#,
        )
        .bind(board_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| -> DbErrorResult<Board> {
            Ok(Board {
                board_id: r.try_get("board_id")?,
                project_id: r.try_get("project_id")?,
                template_board_id: r.try_get("template_board_id")?,
            })
        })
        .transpose()
    }
}
