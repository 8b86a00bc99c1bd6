use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::Milestone;
use uuid::Uuid;

pub const MAX_ADDRESS_LEN: usize = 64;

/// Domain model for a milestone payout record. This is bookkeeping only:
/// the transfer is made from the curator multisig outside this system, and
/// the record stores where the funds went and under which milestone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub id: String,
    pub project_id: String,
    pub milestone: Milestone,
    pub amount: f64,
    pub multisig_address: String,
    pub tx_hash: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

impl Payout {
    /// Generate a unique ID for a payout record
    pub fn generate_id() -> String {
        format!("payout::{}", Uuid::new_v4())
    }

    pub fn validate(amount: f64, multisig_address: &str) -> Result<(), PayoutValidationError> {
        if amount <= 0.0 {
            return Err(PayoutValidationError::NonPositiveAmount);
        }
        if multisig_address.trim().is_empty() {
            return Err(PayoutValidationError::EmptyMultisigAddress);
        }
        if multisig_address.len() > MAX_ADDRESS_LEN {
            return Err(PayoutValidationError::MultisigAddressTooLong);
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PayoutValidationError {
    #[error("Payout amount must be positive")]
    NonPositiveAmount,
    #[error("Multisig address cannot be empty")]
    EmptyMultisigAddress,
    #[error("Multisig address cannot exceed {MAX_ADDRESS_LEN} characters")]
    MultisigAddressTooLong,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_payout() {
        assert_eq!(
            Payout::validate(0.0, "15oF4..."),
            Err(PayoutValidationError::NonPositiveAmount)
        );
        assert_eq!(
            Payout::validate(100.0, ""),
            Err(PayoutValidationError::EmptyMultisigAddress)
        );
        assert_eq!(
            Payout::validate(100.0, &"x".repeat(65)),
            Err(PayoutValidationError::MultisigAddressTooLong)
        );
        assert!(Payout::validate(500.0, "14GcE3YvC3YEF1bYxFHDoYntoeWSXWogLWyxcWLFB6QnjGUZ").is_ok());
    }
}
