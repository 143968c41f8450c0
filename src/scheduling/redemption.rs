//! Loyalty-bonus redemption validation.
//!
//! Clients can spend bonus points as a discount on a booking. A request is
//! accepted when it is at least the minimum redeemable amount and no more
//! than the current balance. Preset shortcut amounts go through the same
//! check and are simply unselectable when it fails.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::RedemptionError;

/// Smallest number of points that can be redeemed at once.
pub const MINIMUM_REDEMPTION_POINTS: u64 = 100;

/// Discount granted per redeemed point, in currency units.
pub const CURRENCY_PER_POINT: Decimal = Decimal::ONE;

/// Shortcut amounts offered by the redemption dialog.
pub const PRESET_AMOUNTS: [u64; 3] = [100, 500, 1000];

/// An accepted redemption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidAmount {
    /// Points to deduct from the balance.
    pub points: u64,
    /// Discount in currency units.
    pub discount: Decimal,
}

/// A preset amount and whether the client can pick it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetOption {
    /// The preset number of points.
    pub amount: u64,
    /// False when redeeming `amount` would be rejected.
    pub selectable: bool,
}

/// Business rules for redeeming loyalty points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedemptionRules {
    /// Smallest number of points that can be redeemed at once.
    pub minimum_redemption: u64,
    /// Discount granted per point.
    pub currency_per_point: Decimal,
    /// Shortcut amounts offered to the client.
    pub presets: Vec<u64>,
}

impl Default for RedemptionRules {
    fn default() -> Self {
        Self {
            minimum_redemption: MINIMUM_REDEMPTION_POINTS,
            currency_per_point: CURRENCY_PER_POINT,
            presets: PRESET_AMOUNTS.to_vec(),
        }
    }
}

impl RedemptionRules {
    /// Validates a request to redeem `requested` points from `balance`.
    ///
    /// A balance below the minimum rejects every request with
    /// [`RedemptionError::InsufficientBalance`]. Otherwise the request must
    /// be at least the minimum and at most the balance. A discount too large
    /// for [`Decimal`] yields [`RedemptionError::DiscountOverflow`].
    pub fn validate(&self, requested: u64, balance: u64) -> Result<ValidAmount, RedemptionError> {
        let minimum = self.minimum_redemption;

        if balance < minimum {
            return Err(RedemptionError::InsufficientBalance { balance, minimum });
        }
        if requested < minimum {
            return Err(RedemptionError::BelowMinimum { requested, minimum });
        }
        if requested > balance {
            return Err(RedemptionError::ExceedsBalance { requested, balance });
        }

        let discount = Decimal::from(requested)
            .checked_mul(self.currency_per_point)
            .ok_or(RedemptionError::DiscountOverflow { requested })?;

        Ok(ValidAmount {
            points: requested,
            discount,
        })
    }

    /// Lists the preset amounts, marking those that fail validation.
    ///
    /// Presets are never clamped to the balance.
    pub fn preset_options(&self, balance: u64) -> Vec<PresetOption> {
        self.presets
            .iter()
            .map(|&amount| PresetOption {
                amount,
                selectable: self.validate(amount, balance).is_ok(),
            })
            .collect()
    }
}

/// Validates a redemption with the default rules.
///
/// # Examples
///
/// ```
/// use salon_scheduler::error::RedemptionError;
/// use salon_scheduler::scheduling::validate_redemption;
/// use rust_decimal::Decimal;
///
/// let accepted = validate_redemption(500, 1000).unwrap();
/// assert_eq!(accepted.points, 500);
/// assert_eq!(accepted.discount, Decimal::from(500));
///
/// assert!(matches!(
///     validate_redemption(50, 1000),
///     Err(RedemptionError::BelowMinimum { .. })
/// ));
/// ```
pub fn validate_redemption(requested: u64, balance: u64) -> Result<ValidAmount, RedemptionError> {
    RedemptionRules::default().validate(requested, balance)
}
