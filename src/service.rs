//! The purchase validator and orchestrator.
//!
//! [`TicketService::purchase_tickets`] is the single entry point: it runs the
//! validation rules in a fixed order (first failure wins), aggregates price
//! and seat totals, and only then touches the two collaborators, payment
//! first. No collaborator is called on any failure path.

use crate::collaborators::{SeatReservationService, TicketPaymentService};
use crate::error::{PurchaseError, Result};
use crate::types::{TicketType, TicketTypeRequest, MAX_TICKETS_PER_PURCHASE};
use std::sync::Arc;

/// Validates ticket purchase requests and orchestrates the external calls.
///
/// Holds no mutable state; concurrent purchases need no coordination.
#[derive(Clone)]
pub struct TicketService {
    payments: Arc<dyn TicketPaymentService>,
    seating: Arc<dyn SeatReservationService>,
}

impl TicketService {
    /// Creates a service wired to the given collaborators.
    #[must_use]
    pub fn new(
        payments: Arc<dyn TicketPaymentService>,
        seating: Arc<dyn SeatReservationService>,
    ) -> Self {
        Self { payments, seating }
    }

    /// Validates a purchase and, if admissible, charges the payment and
    /// reserves the seats.
    ///
    /// `account_id` is `None` when the caller could not supply one; absent
    /// slots in `requests` model request lines that never materialised and
    /// are skipped. Validation order is fixed so the first failing rule
    /// determines the reported error:
    ///
    /// 1. the account id must be present and positive,
    /// 2. at least one request line must be present,
    /// 3. at most [`MAX_TICKETS_PER_PURCHASE`] tickets in total,
    /// 4. Child or Infant tickets require at least one Adult ticket.
    ///
    /// On success the payment collaborator is called before the reservation
    /// collaborator, each exactly once: money is authorized before seats are
    /// committed. Completed purchases are logged at info level, rejections
    /// at debug level.
    ///
    /// # Errors
    ///
    /// Returns the [`PurchaseError`] of the first rule that fails. No
    /// collaborator is invoked in that case.
    pub fn purchase_tickets(
        &self,
        account_id: Option<i64>,
        requests: &[Option<TicketTypeRequest>],
    ) -> Result<()> {
        let (account_id, totals) = Self::admit(account_id, requests).inspect_err(|error| {
            tracing::debug!(%error, "purchase rejected");
        })?;

        self.payments.make_payment(account_id, totals.total_amount);
        self.seating.reserve_seat(account_id, totals.total_seats);

        tracing::info!(
            account_id,
            adults = totals.adults,
            children = totals.children,
            infants = totals.infants,
            total_amount = totals.total_amount,
            total_seats = totals.total_seats,
            "purchase completed"
        );
        Ok(())
    }

    /// Runs the validation rules in order and aggregates the totals.
    ///
    /// Pure: touches no collaborator, so callers may log and bail on the
    /// first failing rule before any side effect happens.
    fn admit(
        account_id: Option<i64>,
        requests: &[Option<TicketTypeRequest>],
    ) -> Result<(i64, PurchaseTotals)> {
        let account_id = match account_id {
            Some(id) if id > 0 => id,
            _ => return Err(PurchaseError::InvalidAccountId),
        };

        let present: Vec<TicketTypeRequest> = requests.iter().copied().flatten().collect();
        if present.is_empty() {
            return Err(PurchaseError::NoTicketsRequested);
        }

        // Summed in u64 so pathological u32 quantities cannot wrap the check.
        let total_tickets: u64 = present.iter().map(|r| u64::from(r.quantity())).sum();
        if total_tickets > u64::from(MAX_TICKETS_PER_PURCHASE) {
            return Err(PurchaseError::TooManyTickets);
        }

        let adults = quantity_of(&present, TicketType::Adult);
        let children = quantity_of(&present, TicketType::Child);
        let infants = quantity_of(&present, TicketType::Infant);
        if (children > 0 || infants > 0) && adults == 0 {
            return Err(PurchaseError::AdultRequired);
        }

        let total_amount: u32 = present
            .iter()
            .map(|r| r.quantity() * r.ticket_type().price())
            .sum();
        let total_seats: u32 = present
            .iter()
            .filter(|r| r.ticket_type().occupies_seat())
            .map(TicketTypeRequest::quantity)
            .sum();

        Ok((
            account_id,
            PurchaseTotals {
                adults,
                children,
                infants,
                total_amount,
                total_seats,
            },
        ))
    }
}

/// Aggregates computed for an admissible purchase.
#[derive(Clone, Copy, Debug)]
struct PurchaseTotals {
    adults: u32,
    children: u32,
    infants: u32,
    total_amount: u32,
    total_seats: u32,
}

impl std::fmt::Debug for TicketService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TicketService").finish_non_exhaustive()
    }
}

/// Total quantity requested for one ticket type across all request lines.
fn quantity_of(requests: &[TicketTypeRequest], ticket_type: TicketType) -> u32 {
    requests
        .iter()
        .filter(|r| r.ticket_type() == ticket_type)
        .map(TicketTypeRequest::quantity)
        .sum()
}
