//! Validation errors raised before any bill arithmetic runs

use thiserror::Error;

/// Reason a bill could not be calculated.
///
/// Every variant is detected up front; a failed calculation never leaves
/// partial results behind. The caller re-collects input and tries again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no participants")]
    NoParticipants,

    #[error("invalid number of people")]
    InvalidPeopleCount,

    #[error("missing name")]
    MissingName { index: usize },

    #[error("invalid tip")]
    InvalidTip,

    #[error("invalid total")]
    InvalidTotal,

    #[error("invalid amount")]
    InvalidAmount { index: usize },

    /// Custom split where every amount is zero; the tip ratio is undefined.
    #[error("total bill is zero")]
    ZeroTotal,

    /// Amounts are finite but their sum (or sum plus tip) is not.
    #[error("total bill is too large")]
    TotalTooLarge,
}

impl ValidationError {
    /// Zero-based index of the offending participant, if any
    pub fn participant_index(&self) -> Option<usize> {
        match self {
            ValidationError::MissingName { index } | ValidationError::InvalidAmount { index } => {
                Some(*index)
            }
            _ => None,
        }
    }

    /// Message shown to the user in an error dialog or on stderr
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::NoParticipants | ValidationError::InvalidPeopleCount => {
                "Please enter a valid number of people.".to_string()
            }
            ValidationError::MissingName { .. } => "Please fill in all names.".to_string(),
            ValidationError::InvalidTip => "Invalid value for Tip %.".to_string(),
            ValidationError::InvalidTotal => "Invalid value for Total Bill.".to_string(),
            ValidationError::InvalidAmount { index } => {
                format!("Invalid value for Amount (person {}).", index + 1)
            }
            ValidationError::ZeroTotal => {
                "Total bill is zero. Enter at least one amount above zero.".to_string()
            }
            ValidationError::TotalTooLarge => "Total bill is too large.".to_string(),
        }
    }
}
