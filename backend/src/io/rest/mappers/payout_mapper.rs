use crate::domain::commands::payout::{PayoutListResult, RecordPayoutResult};
use crate::domain::models::payout::Payout;

pub struct PayoutMapper;

impl PayoutMapper {
    /// Convert a domain Payout to the shared DTO
    pub fn to_dto(payout: Payout) -> shared::Payout {
        shared::Payout {
            id: payout.id,
            project_id: payout.project_id,
            milestone: payout.milestone,
            amount: payout.amount,
            multisig_address: payout.multisig_address,
            tx_hash: payout.tx_hash,
            recorded_at: payout.recorded_at.to_rfc3339(),
        }
    }

    /// Convert a record result to the shared response
    pub fn to_record_response(result: RecordPayoutResult) -> shared::PayoutResponse {
        shared::PayoutResponse {
            payout: Self::to_dto(result.payout),
            success_message: result.success_message,
        }
    }

    /// Convert a list result to the shared response
    pub fn to_list_response(result: PayoutListResult) -> shared::PayoutListResponse {
        shared::PayoutListResponse {
            payouts: result.payouts.into_iter().map(Self::to_dto).collect(),
            total_amount: result.total_amount,
        }
    }
}
