#[derive(Debug, thiserror::Error)]
pub enum ExpiryError {
    #[error("expiry.unknown_item")]
    UnknownItem,
    #[error("expiry.invalid_threshold")]
    InvalidThreshold,
}

#[derive(Debug, thiserror::Error)]
pub enum UrgencyError {
    #[error("urgency.invalid_remaining_days")]
    InvalidRemainingDays,
}
