//! Error types for the salon scheduling engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! [`EngineError`] covers configuration and input parsing failures, while
//! [`RedemptionError`] carries the business-rule rejections of a loyalty
//! redemption so callers can turn them into user-facing messages.

use thiserror::Error;

/// The main error type for the scheduling engine.
///
/// # Example
///
/// ```
/// use salon_scheduler::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/salon.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/salon.yaml");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A date or time field did not match its expected format.
    #[error("Invalid {field} '{value}': expected {expected}")]
    ParseError {
        /// The name of the malformed field (e.g. "time", "date").
        field: String,
        /// The raw value that failed to parse.
        value: String,
        /// The expected format.
        expected: String,
    },

    /// No branch with the given identifier is configured.
    #[error("Branch not found: {id}")]
    BranchNotFound {
        /// The branch identifier that was not found.
        id: String,
    },

    /// The branch exists but is not active, so it cannot be selected.
    #[error("Branch '{id}' is not active")]
    BranchInactive {
        /// The identifier of the inactive branch.
        id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

/// Reasons a loyalty-bonus redemption request is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RedemptionError {
    /// The requested amount is below the minimum redeemable amount.
    #[error("Requested {requested} points is below the minimum of {minimum}")]
    BelowMinimum {
        /// The requested number of points.
        requested: u64,
        /// The minimum redeemable number of points.
        minimum: u64,
    },

    /// The requested amount is larger than the account balance.
    #[error("Requested {requested} points exceeds the balance of {balance}")]
    ExceedsBalance {
        /// The requested number of points.
        requested: u64,
        /// The current account balance.
        balance: u64,
    },

    /// The balance is too low for any redemption at all.
    #[error("Balance of {balance} points is below the minimum redemption of {minimum}")]
    InsufficientBalance {
        /// The current account balance.
        balance: u64,
        /// The minimum redeemable number of points.
        minimum: u64,
    },

    /// The discount for the requested amount does not fit the currency type.
    #[error("Discount for {requested} points is out of range")]
    DiscountOverflow {
        /// The requested number of points.
        requested: u64,
    },
}

impl RedemptionError {
    /// Returns a stable machine-readable code for this rejection.
    pub fn code(&self) -> &'static str {
        match self {
            RedemptionError::BelowMinimum { .. } => "BELOW_MINIMUM",
            RedemptionError::ExceedsBalance { .. } => "EXCEEDS_BALANCE",
            RedemptionError::InsufficientBalance { .. } => "INSUFFICIENT_BALANCE",
            RedemptionError::DiscountOverflow { .. } => "DISCOUNT_OVERFLOW",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_parse_error_displays_field_value_and_format() {
        let error = EngineError::ParseError {
            field: "time".to_string(),
            value: "9am".to_string(),
            expected: "HH:mm".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid time '9am': expected HH:mm");
    }

    #[test]
    fn test_branch_errors_display_id() {
        let not_found = EngineError::BranchNotFound {
            id: "north".to_string(),
        };
        assert_eq!(not_found.to_string(), "Branch not found: north");

        let inactive = EngineError::BranchInactive {
            id: "old_town".to_string(),
        };
        assert_eq!(inactive.to_string(), "Branch 'old_town' is not active");
    }

    #[test]
    fn test_redemption_errors_display_amounts() {
        let below = RedemptionError::BelowMinimum {
            requested: 50,
            minimum: 100,
        };
        assert_eq!(
            below.to_string(),
            "Requested 50 points is below the minimum of 100"
        );

        let exceeds = RedemptionError::ExceedsBalance {
            requested: 1500,
            balance: 1000,
        };
        assert_eq!(
            exceeds.to_string(),
            "Requested 1500 points exceeds the balance of 1000"
        );

        let insufficient = RedemptionError::InsufficientBalance {
            balance: 80,
            minimum: 100,
        };
        assert_eq!(
            insufficient.to_string(),
            "Balance of 80 points is below the minimum redemption of 100"
        );
    }

    #[test]
    fn test_redemption_error_codes() {
        assert_eq!(
            RedemptionError::BelowMinimum {
                requested: 1,
                minimum: 100
            }
            .code(),
            "BELOW_MINIMUM"
        );
        assert_eq!(
            RedemptionError::ExceedsBalance {
                requested: 2,
                balance: 1
            }
            .code(),
            "EXCEEDS_BALANCE"
        );
        assert_eq!(
            RedemptionError::InsufficientBalance {
                balance: 0,
                minimum: 100
            }
            .code(),
            "INSUFFICIENT_BALANCE"
        );
        assert_eq!(
            RedemptionError::DiscountOverflow { requested: 5 }.code(),
            "DISCOUNT_OVERFLOW"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
        assert_error::<RedemptionError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_parse_error() -> EngineResult<()> {
            Err(EngineError::ParseError {
                field: "date".to_string(),
                value: "tomorrow".to_string(),
                expected: "yyyy-MM-dd".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_parse_error()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
