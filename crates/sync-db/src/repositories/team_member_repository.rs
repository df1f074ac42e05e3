use crate::Result as DbErrorResult;

use sqlx::{Row, SqlitePool};

/// Lifecycle value that makes a board eligible for scheduled
/// synchronization.
const ACTIVE_ENGAGEMENT_STATUS: &str = "active";

/// Read-only view of the upstream team-members table.
pub struct TeamMemberRepository {
    pool: SqlitePool,
}

impl TeamMemberRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Distinct board identifiers with at least one member in the
    /// active-engagement state. Null and empty board ids are excluded here
    /// rather than by the caller.
    pub async fn boards_with_active_members(&self) -> DbErrorResult<Vec<String>> {
        let rows = sqlx::query(
            r#"
                SELECT DISTINCT board_id
                FROM team_members
                WHERE status = ?
                  AND board_id IS NOT NULL
                  AND board_id != ''
                ORDER BY board_id ASC
            "#,
        )
        .bind(ACTIVE_ENGAGEMENT_STATUS)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|r| Ok(r.try_get::<String, _>("board_id")?))
            .collect()
    }
}
