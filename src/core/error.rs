//! Crate error types.

use thiserror::Error;

/// Errors raised by card construction, marking and the timing model.
///
/// Classification never returns these: a malformed card simply never wins.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MyngoError {
    /// Player count outside the accepted domain
    #[error("Invalid player count: {0} (must be at least 1)")]
    InvalidPlayerCount(u32),

    /// Calls needed must be positive to pace a meeting
    #[error("Invalid calls needed: {0} (must be at least 1)")]
    InvalidCallsNeeded(u32),

    /// Meeting length must be positive
    #[error("Invalid meeting length: {0} minutes")]
    InvalidMeetingLength(u32),

    /// Timing configuration is inconsistent
    #[error("Invalid timing config: {0}")]
    InvalidConfig(String),

    /// Card shape is wrong (column count or column length)
    #[error("Malformed card: {0}")]
    MalformedCard(String),

    /// Number is not a MYNGO ball (1-75)
    #[error("Number out of range: {0} (must be 1-75)")]
    NumberOutOfRange(u8),

    /// Number sits in a column whose range does not contain it
    #[error("Number {number} does not belong in column {column}")]
    WrongColumn { number: u8, column: char },

    /// Number appears more than once on a card
    #[error("Duplicate number on card: {0}")]
    DuplicateNumber(u8),

    /// Number is not printed on this card
    #[error("Number {0} is not on this card")]
    NotOnCard(u8),

    /// Number has not been called yet
    #[error("Number {0} has not been called")]
    NotCalled(u8),
}

/// Result type for crate operations
pub type Result<T> = std::result::Result<T, MyngoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            MyngoError::InvalidPlayerCount(0).to_string(),
            "Invalid player count: 0 (must be at least 1)"
        );
        assert_eq!(
            MyngoError::WrongColumn { number: 20, column: 'M' }.to_string(),
            "Number 20 does not belong in column M"
        );
        assert_eq!(MyngoError::NotCalled(7).to_string(), "Number 7 has not been called");
    }
}
