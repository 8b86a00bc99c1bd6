//! Hackathon service domain logic.
//!
//! Hackathons are the anchor records of the program: every project timeline
//! is derived from its hackathon's end date. The end date may be absent
//! while an event is still being scheduled, in which case linked projects
//! get the "program not started" timeline.

use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::domain::commands::hackathon::{
    CreateHackathonCommand, CreateHackathonResult, HackathonListResult,
};
use crate::domain::models::hackathon::Hackathon;
use crate::domain::timeline::TimelineService;
use crate::storage::repositories::HackathonRepository;
use crate::storage::{DbConnection, HackathonStorage};

/// Service for managing hackathon records
#[derive(Clone)]
pub struct HackathonService {
    hackathon_repository: HackathonRepository,
    timeline_service: TimelineService,
}

impl HackathonService {
    /// Create a new HackathonService
    pub fn new(db: Arc<DbConnection>, timeline_service: TimelineService) -> Self {
        Self {
            hackathon_repository: HackathonRepository::new((*db).clone()),
            timeline_service,
        }
    }

    /// Register a new hackathon
    pub async fn create_hackathon(
        &self,
        command: CreateHackathonCommand,
    ) -> Result<CreateHackathonResult> {
        info!("Creating hackathon: {:?}", command);

        Hackathon::validate_name(&command.name)?;

        // Parse eagerly so a malformed date is rejected here instead of
        // surfacing on every later timeline read.
        let end_date = match command.end_date.as_deref() {
            Some(raw) => Some(self.timeline_service.parse_end_date(raw)?),
            None => None,
        };

        let hackathon = Hackathon {
            id: Hackathon::generate_id(),
            name: command.name.trim().to_string(),
            end_date,
            created_at: Utc::now(),
        };

        self.hackathon_repository.store_hackathon(&hackathon).await?;

        info!("Successfully created hackathon: {}", hackathon.id);

        Ok(CreateHackathonResult {
            hackathon,
            success_message: "Hackathon created successfully".to_string(),
        })
    }

    /// List all hackathons, newest first
    pub async fn list_hackathons(&self) -> Result<HackathonListResult> {
        let hackathons = self.hackathon_repository.list_hackathons().await?;
        Ok(HackathonListResult { hackathons })
    }

    /// Get a hackathon by ID
    pub async fn get_hackathon(&self, hackathon_id: &str) -> Result<Hackathon> {
        self.hackathon_repository
            .get_hackathon(hackathon_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Hackathon not found: {}", hackathon_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    async fn create_test_service() -> HackathonService {
        let db = Arc::new(DbConnection::init_test().await.expect("init test db"));
        HackathonService::new(db, TimelineService::new())
    }

    #[tokio::test]
    async fn test_create_hackathon_with_end_date() {
        let service = create_test_service().await;

        let result = service
            .create_hackathon(CreateHackathonCommand {
                name: "Polkadot Winter Hackathon".to_string(),
                end_date: Some("2025-11-19".to_string()),
            })
            .await
            .expect("create");

        assert!(result.hackathon.id.starts_with("hackathon::"));
        assert_eq!(
            result.hackathon.end_date,
            NaiveDate::from_ymd_opt(2025, 11, 19)
        );

        let loaded = service
            .get_hackathon(&result.hackathon.id)
            .await
            .expect("get");
        assert_eq!(loaded, result.hackathon);
    }

    #[tokio::test]
    async fn test_create_hackathon_without_end_date() {
        let service = create_test_service().await;

        let result = service
            .create_hackathon(CreateHackathonCommand {
                name: "Spring Hackathon".to_string(),
                end_date: None,
            })
            .await
            .expect("create");

        assert_eq!(result.hackathon.end_date, None);
    }

    #[tokio::test]
    async fn test_create_hackathon_rejects_bad_input() {
        let service = create_test_service().await;

        let err = service
            .create_hackathon(CreateHackathonCommand {
                name: "  ".to_string(),
                end_date: None,
            })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));

        let err = service
            .create_hackathon(CreateHackathonCommand {
                name: "Winter Hackathon".to_string(),
                end_date: Some("next thursday".to_string()),
            })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Unrecognized end date"));
    }

    #[tokio::test]
    async fn test_get_hackathon_not_found() {
        let service = create_test_service().await;

        let err = service.get_hackathon("hackathon::missing").await.unwrap_err();
        assert!(err.to_string().contains("Hackathon not found"));
    }

    #[tokio::test]
    async fn test_list_hackathons_returns_stored_records() {
        let service = create_test_service().await;

        for name in ["First", "Second"] {
            service
                .create_hackathon(CreateHackathonCommand {
                    name: name.to_string(),
                    end_date: None,
                })
                .await
                .expect("create");
        }

        let result = service.list_hackathons().await.expect("list");
        assert_eq!(result.hackathons.len(), 2);
    }
}
