use crate::{DbError, Result as DbErrorResult};

use sync_core::SprintMergeRecord;

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct MergeRecordRepository {
    pool: SqlitePool,
}

impl MergeRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find(
        &self,
        board_id: &str,
        sprint_number: i64,
    ) -> DbErrorResult<Option<SprintMergeRecord>> {
        let row = sqlx::query(
            r#"
                SELECT board_id, sprint_number, synced_at, list_id, due_date
                FROM sprint_merge_records
                WHERE board_id = ? AND sprint_number = ?
            "#,
        )
        .bind(board_id)
        .bind(sprint_number)
        .fetch_optional(&self.pool)
        .await?;

        row.map(map_record).transpose()
    }

    /// Provisioning pre-seed. Keeps an existing row untouched, so a
    /// re-provisioned board never loses its synchronization state.
    pub async fn seed(&self, record: &SprintMergeRecord) -> DbErrorResult<()> {
        let synced_at = record.synced_at.map(|dt| dt.timestamp());
        let due_date = record.due_date.map(|dt| dt.timestamp());

        sqlx::query(
            r#"
                INSERT INTO sprint_merge_records (board_id, sprint_number, synced_at, list_id, due_date)
                VALUES (?, ?, ?, ?, ?)
                ON CONFLICT(board_id, sprint_number) DO NOTHING
            "#,
        )
        .bind(&record.board_id)
        .bind(record.sprint_number)
        .bind(synced_at)
        .bind(&record.list_id)
        .bind(due_date)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Upsert after a successful board write: the synchronization timestamp
    /// and list id are always refreshed; the due date is only replaced by a
    /// non-null value.
    pub async fn mark_synced(
        &self,
        board_id: &str,
        sprint_number: i64,
        list_id: &str,
        due_date: Option<DateTime<Utc>>,
        synced_at: DateTime<Utc>,
    ) -> DbErrorResult<()> {
        let synced_ts = synced_at.timestamp();
        let due_ts = due_date.map(|dt| dt.timestamp());

        sqlx::query(
            r#"
                INSERT INTO sprint_merge_records (board_id, sprint_number, synced_at, list_id, due_date)
                VALUES (?, ?, ?, ?, ?)
                ON CONFLICT(board_id, sprint_number) DO UPDATE SET
                    synced_at = excluded.synced_at,
                    list_id = excluded.list_id,
                    due_date = COALESCE(excluded.due_date, sprint_merge_records.due_date)
            "#,
        )
        .bind(board_id)
        .bind(sprint_number)
        .bind(synced_ts)
        .bind(list_id)
        .bind(due_ts)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Records eligible for a scheduled merge on one board: past due and
    /// never synchronized, lowest sprint first.
    pub async fn find_due_unsynced(
        &self,
        board_id: &str,
        now: DateTime<Utc>,
    ) -> DbErrorResult<Vec<SprintMergeRecord>> {
        let now_ts = now.timestamp();

        let rows = sqlx::query(
            r#"
                SELECT board_id, sprint_number, synced_at, list_id, due_date
                FROM sprint_merge_records
                WHERE board_id = ?
                  AND synced_at IS NULL
                  AND due_date IS NOT NULL
                  AND due_date <= ?
                ORDER BY sprint_number ASC
            "#,
        )
        .bind(board_id)
        .bind(now_ts)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(map_record).collect()
    }
}

fn map_record(row: SqliteRow) -> DbErrorResult<SprintMergeRecord> {
    let synced_at = row
        .try_get::<Option<i64>, _>("synced_at")?
        .map(|ts| {
            DateTime::from_timestamp(ts, 0).ok_or_else(|| DbError::Initialization {
                message: "Invalid timestamp in sprint_merge_records.synced_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
        })
        .transpose()?;

    let due_date = row
        .try_get::<Option<i64>, _>("due_date")?
        .map(|ts| {
            DateTime::from_timestamp(ts, 0).ok_or_else(|| DbError::Initialization {
                message: "Invalid timestamp in sprint_merge_records.due_date".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
        })
        .transpose()?;

    Ok(SprintMergeRecord {
        board_id: row.try_get("board_id")?,
        sprint_number: row.try_get("sprint_number")?,
        synced_at,
        list_id: row.try_get("list_id")?,
        due_date,
    })
}
