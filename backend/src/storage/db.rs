use anyhow::Result;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::sync::Arc;

// The database URL for the production database
const DATABASE_URL: &str = "sqlite:stadium.db";
const DATABASE_URL_ENV: &str = "STADIUM_DATABASE_URL";

/// DbConnection manages database operations
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection
    pub async fn new(url: &str) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            Sqlite::create_database(url).await?
        }

        // Connect to the database
        let pool = SqlitePool::connect(url).await?;

        // Setup database schema
        Self::setup_schema(&pool).await?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Initialize the standard database, honoring the env override
    pub async fn init() -> Result<Self> {
        let url =
            std::env::var(DATABASE_URL_ENV).unwrap_or_else(|_| DATABASE_URL.to_string());
        Self::new(&url).await
    }

    /// Initialize a test database with a unique name
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        // Generate a unique database name for tests
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::new(&db_url).await
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS hackathons (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                end_date TEXT,
                created_at TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS projects (
                id TEXT PRIMARY KEY,
                hackathon_id TEXT,
                name TEXT NOT NULL,
                team_name TEXT NOT NULL,
                status TEXT NOT NULL,
                roadmap TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS progress_updates (
                id TEXT PRIMARY KEY,
                project_id TEXT NOT NULL,
                week INTEGER NOT NULL,
                body TEXT NOT NULL,
                created_at TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS submissions (
                id TEXT PRIMARY KEY,
                project_id TEXT NOT NULL,
                week INTEGER NOT NULL,
                repo_url TEXT NOT NULL,
                demo_url TEXT,
                notes TEXT,
                submitted_at TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS payouts (
                id TEXT PRIMARY KEY,
                project_id TEXT NOT NULL,
                milestone TEXT NOT NULL,
                amount REAL NOT NULL,
                multisig_address TEXT NOT NULL,
                tx_hash TEXT,
                recorded_at TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Indexes for the per-project listing queries
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_progress_updates_project
            ON progress_updates(project_id, created_at DESC);
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_submissions_project
            ON submissions(project_id, submitted_at DESC);
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_payouts_project
            ON payouts(project_id, recorded_at DESC);
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Get the underlying SQLite pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_creates_schema() {
        let db = DbConnection::init_test()
            .await
            .expect("Failed to init test DB");

        // All five tables must exist and accept queries
        for table in [
            "hackathons",
            "projects",
            "progress_updates",
            "submissions",
            "payouts",
        ] {
            let count: (i64,) =
                sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
                    .fetch_one(db.pool())
                    .await
                    .expect("table should exist");
            assert_eq!(count.0, 0);
        }
    }

    #[tokio::test]
    async fn test_schema_setup_is_idempotent() {
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);

        let first = DbConnection::new(&db_url).await.expect("first init");
        let _second = DbConnection::new(&db_url).await.expect("second init");

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
            .fetch_one(first.pool())
            .await
            .expect("query");
        assert_eq!(count.0, 0);
    }
}
