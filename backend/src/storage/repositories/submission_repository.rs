use anyhow::Result;
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::domain::models::submission::Submission;
use crate::storage::db::DbConnection;
use crate::storage::parse_timestamp;
use crate::storage::traits::SubmissionStorage;

/// Repository for submission operations. Rows are append-only; resubmission
/// inserts a new row rather than overwriting the previous one.
#[derive(Clone)]
pub struct SubmissionRepository {
    db: DbConnection,
}

impl SubmissionRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn from_row(row: &SqliteRow) -> Result<Submission> {
        let week: i64 = row.get("week");
        let submitted_at: String = row.get("submitted_at");
        Ok(Submission {
            id: row.get("id"),
            project_id: row.get("project_id"),
            week: week as u32,
            repo_url: row.get("repo_url"),
            demo_url: row.get("demo_url"),
            notes: row.get("notes"),
            submitted_at: parse_timestamp(&submitted_at)?,
        })
    }
}

#[async_trait]
impl SubmissionStorage for SubmissionRepository {
    async fn store_submission(&self, submission: &Submission) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO submissions (id, project_id, week, repo_url, demo_url, notes, submitted_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&submission.id)
        .bind(&submission.project_id)
        .bind(submission.week as i64)
        .bind(&submission.repo_url)
        .bind(&submission.demo_url)
        .bind(&submission.notes)
        .bind(submission.submitted_at.to_rfc3339())
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn get_latest_submission(&self, project_id: &str) -> Result<Option<Submission>> {
        let row = sqlx::query(
            r#"
            SELECT id, project_id, week, repo_url, demo_url, notes, submitted_at
            FROM submissions
            WHERE project_id = ?
            ORDER BY submitted_at DESC
            LIMIT 1
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

    async fn list_submissions(&self, project_id: &str) -> Result<Vec<Submission>> {
        let rows = sqlx::query(
            r#"
            SELECT id, project_id, week, repo_url, demo_url, notes, submitted_at
            FROM submissions
            WHERE project_id = ?
            ORDER BY submitted_at DESC
            "#,
        )
        .bind(project_id)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::from_row).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn submission(project_id: &str, repo_url: &str, minutes_ago: i64) -> Submission {
        Submission {
            id: Submission::generate_id(),
            project_id: project_id.to_string(),
            week: 5,
            repo_url: repo_url.to_string(),
            demo_url: None,
            notes: None,
            submitted_at: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    #[tokio::test]
    async fn test_latest_submission_is_the_newest_row() {
        let db = DbConnection::init_test().await.expect("init test db");
        let repo = SubmissionRepository::new(db);
        let project_id = "project::test";

        repo.store_submission(&submission(project_id, "https://github.com/team/v1", 60))
            .await
            .expect("store v1");
        repo.store_submission(&submission(project_id, "https://github.com/team/v2", 0))
            .await
            .expect("store v2");

        let latest = repo
            .get_latest_submission(project_id)
            .await
            .expect("get latest")
            .expect("found");
        assert_eq!(latest.repo_url, "https://github.com/team/v2");

        // Both rows survive: history is append-only.
        let all = repo.list_submissions(project_id).await.expect("list");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].repo_url, "https://github.com/team/v2");
        assert_eq!(all[1].repo_url, "https://github.com/team/v1");

        assert!(repo
            .get_latest_submission("project::other")
            .await
            .expect("get latest")
            .is_none());
    }
}
