use anyhow::{anyhow, Result};
use async_trait::async_trait;
use shared::ProjectStatus;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::domain::models::project::Project;
use crate::storage::db::DbConnection;
use crate::storage::parse_timestamp;
use crate::storage::traits::ProjectStorage;

/// Repository for project operations
#[derive(Clone)]
pub struct ProjectRepository {
    db: DbConnection,
}

impl ProjectRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn from_row(row: &SqliteRow) -> Result<Project> {
        let status: String = row.get("status");
        let created_at: String = row.get("created_at");
        let updated_at: String = row.get("updated_at");
        Ok(Project {
            id: row.get("id"),
            hackathon_id: row.get("hackathon_id"),
            name: row.get("name"),
            team_name: row.get("team_name"),
            status: ProjectStatus::from_str(&status)
                .ok_or_else(|| anyhow!("unknown project status '{}'", status))?,
            roadmap: row.get("roadmap"),
            created_at: parse_timestamp(&created_at)?,
            updated_at: parse_timestamp(&updated_at)?,
        })
    }
}

#[async_trait]
impl ProjectStorage for ProjectRepository {
    async fn store_project(&self, project: &Project) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO projects (id, hackathon_id, name, team_name, status, roadmap, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&project.id)
        .bind(&project.hackathon_id)
        .bind(&project.name)
        .bind(&project.team_name)
        .bind(project.status.as_str())
        .bind(&project.roadmap)
        .bind(project.created_at.to_rfc3339())
        .bind(project.updated_at.to_rfc3339())
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn get_project(&self, project_id: &str) -> Result<Option<Project>> {
        let row = sqlx::query(
            r#"
            SELECT id, hackathon_id, name, team_name, status, roadmap, created_at, updated_at
            FROM projects
            WHERE id = ?
            "#,
        )
        .bind(project_id)
        .fetch_optional(self.db.pool())
        .await?;

        match row {
            Some(r) => Ok(Some(Self::from_row(&r)?)),
            None => Ok(None),
        }
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        let rows = sqlx::query(
            r#"
            SELECT id, hackathon_id, name, team_name, status, roadmap, created_at, updated_at
            FROM projects
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::from_row).collect()
    }

    async fn update_project(&self, project: &Project) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE projects
            SET hackathon_id = ?, name = ?, team_name = ?, status = ?, roadmap = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&project.hackathon_id)
        .bind(&project.name)
        .bind(&project.team_name)
        .bind(project.status.as_str())
        .bind(&project.roadmap)
        .bind(project.updated_at.to_rfc3339())
        .bind(&project.id)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }
}
