//! Error taxonomy for ticket purchase validation.

use thiserror::Error;

/// Result type alias for purchase operations.
pub type Result<T> = std::result::Result<T, PurchaseError>;

/// All ways a ticket purchase can be rejected.
///
/// The message text of each variant is part of the observable contract:
/// callers assert on it, so it must stay byte-for-byte stable.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseError {
    /// The account identifier was absent or not a positive integer.
    #[error("Invalid account id")]
    InvalidAccountId,

    /// The request sequence held no ticket request at all.
    #[error("At least one ticket must be requested")]
    NoTicketsRequested,

    /// The summed ticket quantity exceeded the per-purchase ceiling.
    #[error("Cannot purchase more than 25 tickets at once")]
    TooManyTickets,

    /// Child or Infant tickets were requested without any Adult ticket.
    #[error("Child or Infant tickets require at least one Adult ticket")]
    AdultRequired,

    /// A ticket request was constructed with a quantity of zero.
    #[error("Number of tickets must be greater than zero")]
    ZeroTicketQuantity,
}
