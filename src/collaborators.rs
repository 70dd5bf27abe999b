//! External collaborator interfaces.
//!
//! The box office never charges cards or allocates seats itself; it delegates
//! to a payment processor and a seat reservation system through the two traits
//! here. Both are narrow, side-effect-only capabilities: they accept the call
//! and have no error path visible to this crate.
//!
//! The `Accepting*` implementations are for development and wiring tests.
//! Production embedders supply their own gateway integrations.

use std::sync::Arc;

/// Payment processor capability.
///
/// Charges `total_amount` (whole currency units) against `account_id`.
/// Assumed correct; never fails observably to this crate.
pub trait TicketPaymentService: Send + Sync {
    /// Charges the given amount against the account.
    fn make_payment(&self, account_id: i64, total_amount: u32);
}

/// Seat reservation capability.
///
/// Reserves `total_seats` seats for `account_id`.
pub trait SeatReservationService: Send + Sync {
    /// Reserves the given number of seats for the account.
    fn reserve_seat(&self, account_id: i64, total_seats: u32);
}

/// Payment service that accepts every charge (for development).
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptingPaymentService;

impl AcceptingPaymentService {
    /// Creates a new accepting payment service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Creates an Arc-wrapped instance for sharing.
    #[must_use]
    pub fn shared() -> Arc<dyn TicketPaymentService> {
        Arc::new(Self::new())
    }
}

impl TicketPaymentService for AcceptingPaymentService {
    fn make_payment(&self, account_id: i64, total_amount: u32) {
        tracing::info!(account_id, total_amount, "payment accepted");
    }
}

/// Reservation service that accepts every reservation (for development).
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptingReservationService;

impl AcceptingReservationService {
    /// Creates a new accepting reservation service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Creates an Arc-wrapped instance for sharing.
    #[must_use]
    pub fn shared() -> Arc<dyn SeatReservationService> {
        Arc::new(Self::new())
    }
}

impl SeatReservationService for AcceptingReservationService {
    fn reserve_seat(&self, account_id: i64, total_seats: u32) {
        tracing::info!(account_id, total_seats, "seats reserved");
    }
}
