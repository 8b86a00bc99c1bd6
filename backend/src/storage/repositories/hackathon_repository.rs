use anyhow::Result;
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::domain::models::hackathon::Hackathon;
use crate::storage::db::DbConnection;
use crate::storage::traits::HackathonStorage;
use crate::storage::{format_date, parse_date, parse_timestamp};

/// Repository for hackathon operations
#[derive(Clone)]
pub struct HackathonRepository {
    db: DbConnection,
}

impl HackathonRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn from_row(row: &SqliteRow) -> Result<Hackathon> {
        let end_date: Option<String> = row.get("end_date");
        let created_at: String = row.get("created_at");
        Ok(Hackathon {
            id: row.get("id"),
            name: row.get("name"),
            end_date: end_date.as_deref().map(parse_date).transpose()?,
            created_at: parse_timestamp(&created_at)?,
        })
    }
}

#[async_trait]
impl HackathonStorage for HackathonRepository {
    async fn store_hackathon(&self, hackathon: &Hackathon) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO hackathons (id, name, end_date, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&hackathon.id)
        .bind(&hackathon.name)
        .bind(hackathon.end_date.map(format_date))
        .bind(hackathon.created_at.to_rfc3339())
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn get_hackathon(&self, hackathon_id: &str) -> Result<Option<Hackathon>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, end_date, created_at
            FROM hackathons
            WHERE id = ?
            "#,
        )
        .bind(hackathon_id)
        .fetch_optional(self.db.pool())
        .await?;

        match row {
            Some(r) => Ok(Some(Self::from_row(&r)?)),
            None => Ok(None),
        }
    }

    async fn list_hackathons(&self) -> Result<Vec<Hackathon>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, end_date, created_at
            FROM hackathons
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::from_row).collect()
    }
}
