//! Payout service domain logic.
//!
//! Pure bookkeeping for milestone payouts. The transfers themselves happen
//! from the curator multisig outside this system; these records only track
//! which project was paid what, under which milestone, and from where.

use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::domain::commands::payout::{
    PayoutListResult, RecordPayoutCommand, RecordPayoutResult,
};
use crate::domain::models::payout::Payout;
use crate::domain::project_service::ProjectService;
use crate::storage::repositories::PayoutRepository;
use crate::storage::{DbConnection, PayoutStorage};

/// Service for recording milestone payouts
#[derive(Clone)]
pub struct PayoutService {
    payout_repository: PayoutRepository,
    project_service: ProjectService,
}

impl PayoutService {
    /// Create a new PayoutService
    pub fn new(db: Arc<DbConnection>, project_service: ProjectService) -> Self {
        Self {
            payout_repository: PayoutRepository::new((*db).clone()),
            project_service,
        }
    }

    /// Record a milestone payout for a project
    pub async fn record_payout(&self, command: RecordPayoutCommand) -> Result<RecordPayoutResult> {
        info!(
            "Recording {} payout for project {}",
            command.milestone.as_str(),
            command.project_id
        );

        Payout::validate(command.amount, &command.multisig_address)?;
        let project = self.project_service.get_project(&command.project_id).await?;

        let payout = Payout {
            id: Payout::generate_id(),
            project_id: project.id,
            milestone: command.milestone,
            amount: command.amount,
            multisig_address: command.multisig_address.trim().to_string(),
            tx_hash: command.tx_hash,
            recorded_at: Utc::now(),
        };
        self.payout_repository.store_payout(&payout).await?;

        Ok(RecordPayoutResult {
            payout,
            success_message: "Payout recorded successfully".to_string(),
        })
    }

    /// List a project's payout records with their total
    pub async fn list_payouts(&self, project_id: &str) -> Result<PayoutListResult> {
        let project = self.project_service.get_project(project_id).await?;
        let payouts = self.payout_repository.list_payouts(&project.id).await?;
        let total_amount = payouts.iter().map(|p| p.amount).sum();
        Ok(PayoutListResult {
            payouts,
            total_amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::project::CreateProjectCommand;
    use crate::domain::timeline::TimelineService;
    use shared::Milestone;

    async fn create_test_services() -> (ProjectService, PayoutService) {
        let db = Arc::new(DbConnection::init_test().await.expect("init test db"));
        let project_service = ProjectService::new(db.clone(), TimelineService::new());
        let payout_service = PayoutService::new(db, project_service.clone());
        (project_service, payout_service)
    }

    async fn seed_project(projects: &ProjectService) -> String {
        let result = projects
            .create_project(CreateProjectCommand {
                name: "Bridge Monitor".to_string(),
                team_name: "Team Rocket".to_string(),
                hackathon_id: None,
            })
            .await
            .expect("seed project");
        result.project.id
    }

    #[tokio::test]
    async fn test_record_and_total_payouts() {
        let (projects, payouts) = create_test_services().await;
        let project_id = seed_project(&projects).await;

        payouts
            .record_payout(RecordPayoutCommand {
                project_id: project_id.clone(),
                milestone: Milestone::M1,
                amount: 1000.0,
                multisig_address: "14GcE3YvC3YEF1bYxFHDoYntoeWSXWogLWyxcWLFB6QnjGUZ".to_string(),
                tx_hash: None,
            })
            .await
            .expect("record m1");
        payouts
            .record_payout(RecordPayoutCommand {
                project_id: project_id.clone(),
                milestone: Milestone::M2,
                amount: 4000.0,
                multisig_address: "14GcE3YvC3YEF1bYxFHDoYntoeWSXWogLWyxcWLFB6QnjGUZ".to_string(),
                tx_hash: Some("0xabc123".to_string()),
            })
            .await
            .expect("record m2");

        let listed = payouts.list_payouts(&project_id).await.expect("list");
        assert_eq!(listed.payouts.len(), 2);
        assert_eq!(listed.total_amount, 5000.0);
        assert_eq!(listed.payouts[0].milestone, Milestone::M2);
    }

    #[tokio::test]
    async fn test_record_payout_validates_input() {
        let (projects, payouts) = create_test_services().await;
        let project_id = seed_project(&projects).await;

        let err = payouts
            .record_payout(RecordPayoutCommand {
                project_id: project_id.clone(),
                milestone: Milestone::M1,
                amount: 0.0,
                multisig_address: "14GcE3YvC3YEF1bYxFHDoYntoeWSXWogLWyxcWLFB6QnjGUZ".to_string(),
                tx_hash: None,
            })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("must be positive"));

        let err = payouts
            .record_payout(RecordPayoutCommand {
                project_id,
                milestone: Milestone::M1,
                amount: 1000.0,
                multisig_address: "".to_string(),
                tx_hash: None,
            })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[tokio::test]
    async fn test_record_payout_requires_existing_project() {
        let (_, payouts) = create_test_services().await;

        let err = payouts
            .record_payout(RecordPayoutCommand {
                project_id: "project::missing".to_string(),
                milestone: Milestone::M2,
                amount: 1000.0,
                multisig_address: "14GcE3YvC3YEF1bYxFHDoYntoeWSXWogLWyxcWLFB6QnjGUZ".to_string(),
                tx_hash: None,
            })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Project not found"));
    }
}
