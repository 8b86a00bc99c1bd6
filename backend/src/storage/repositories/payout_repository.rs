use anyhow::{anyhow, Result};
use async_trait::async_trait;
use shared::Milestone;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::domain::models::payout::Payout;
use crate::storage::db::DbConnection;
use crate::storage::parse_timestamp;
use crate::storage::traits::PayoutStorage;

/// Repository for payout record operations
#[derive(Clone)]
pub struct PayoutRepository {
    db: DbConnection,
}

impl PayoutRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn from_row(row: &SqliteRow) -> Result<Payout> {
        let milestone: String = row.get("milestone");
        let recorded_at: String = row.get("recorded_at");
        Ok(Payout {
            id: row.get("id"),
            project_id: row.get("project_id"),
            milestone: Milestone::from_str(&milestone)
                .ok_or_else(|| anyhow!("unknown milestone '{}'", milestone))?,
            amount: row.get("amount"),
            multisig_address: row.get("multisig_address"),
            tx_hash: row.get("tx_hash"),
            recorded_at: parse_timestamp(&recorded_at)?,
        })
    }
}

#[async_trait]
impl PayoutStorage for PayoutRepository {
    async fn store_payout(&self, payout: &Payout) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO payouts (id, project_id, milestone, amount, multisig_address, tx_hash, recorded_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&payout.id)
        .bind(&payout.project_id)
        .bind(payout.milestone.as_str())
        .bind(payout.amount)
        .bind(&payout.multisig_address)
        .bind(&payout.tx_hash)
        .bind(payout.recorded_at.to_rfc3339())
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn list_payouts(&self, project_id: &str) -> Result<Vec<Payout>> {
        let rows = sqlx::query(
            r#"
            SELECT id, project_id, milestone, amount, multisig_address, tx_hash, recorded_at
            FROM payouts
            WHERE project_id = ?
            ORDER BY recorded_at DESC
            "#,
        )
        .bind(project_id)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::from_row).collect()
    }
}
