use anyhow::Result;
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::domain::models::progress::ProgressUpdate;
use crate::storage::db::DbConnection;
use crate::storage::parse_timestamp;
use crate::storage::traits::ProgressStorage;

/// Repository for progress update operations
#[derive(Clone)]
pub struct ProgressRepository {
    db: DbConnection,
}

impl ProgressRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn from_row(row: &SqliteRow) -> Result<ProgressUpdate> {
        let week: i64 = row.get("week");
        let created_at: String = row.get("created_at");
        Ok(ProgressUpdate {
            id: row.get("id"),
            project_id: row.get("project_id"),
            week: week as u32,
            body: row.get("body"),
            created_at: parse_timestamp(&created_at)?,
        })
    }
}

#[async_trait]
impl ProgressStorage for ProgressRepository {
    async fn store_update(&self, update: &ProgressUpdate) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO progress_updates (id, project_id, week, body, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&update.id)
        .bind(&update.project_id)
        .bind(update.week as i64)
        .bind(&update.body)
        .bind(update.created_at.to_rfc3339())
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn list_updates(&self, project_id: &str) -> Result<Vec<ProgressUpdate>> {
        let rows = sqlx::query(
            r#"
            SELECT id, project_id, week, body, created_at
            FROM progress_updates
            WHERE project_id = ?
            ORDER BY created_at DESC
            "#,
        )
        .bind(project_id)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::from_row).collect()
    }
}
