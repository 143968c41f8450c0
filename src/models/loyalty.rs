//! Loyalty account model.

use serde::{Deserialize, Serialize};

use crate::error::RedemptionError;
use crate::scheduling::{RedemptionRules, ValidAmount};

/// A client's loyalty-bonus account.
///
/// The balance is owned by the rewards collaborator; the engine only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoyaltyAccount {
    /// The client this account belongs to.
    pub client_id: String,
    /// Current bonus balance in points.
    pub balance: u64,
}

impl LoyaltyAccount {
    /// Validates a redemption of `requested` points against this account.
    pub fn validate_redemption(
        &self,
        requested: u64,
        rules: &RedemptionRules,
    ) -> Result<ValidAmount, RedemptionError> {
        rules.validate(requested, self.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_delegates_to_rules() {
        let account = LoyaltyAccount {
            client_id: "client_001".to_string(),
            balance: 1000,
        };
        let rules = RedemptionRules::default();

        assert_eq!(account.validate_redemption(500, &rules).unwrap().points, 500);
        assert!(matches!(
            account.validate_redemption(1500, &rules),
            Err(RedemptionError::ExceedsBalance { .. })
        ));
    }
}
