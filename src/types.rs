//! Domain types for ticket purchasing.
//!
//! Value objects only: the ticket type with its fixed price table, the
//! immutable per-line ticket request, and the purchase ceiling. Nothing here
//! carries identity or mutates after construction.

use crate::error::{PurchaseError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Constants
// ============================================================================

/// Maximum number of tickets (of any type combined) in a single purchase.
///
/// Exactly this many is allowed; one more is rejected.
pub const MAX_TICKETS_PER_PURCHASE: u32 = 25;

// ============================================================================
// Ticket Type
// ============================================================================

/// The three ticket categories sold by the box office.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketType {
    /// Full-price ticket; occupies a seat.
    Adult,
    /// Reduced-price ticket; occupies a seat.
    Child,
    /// Free ticket; sits on an adult's lap, no seat.
    Infant,
}

impl TicketType {
    /// Price of one ticket of this type, in whole currency units.
    ///
    /// Fixed for the life of the process: Adult 25, Child 15, Infant 0.
    #[must_use]
    pub const fn price(self) -> u32 {
        match self {
            Self::Adult => 25,
            Self::Child => 15,
            Self::Infant => 0,
        }
    }

    /// Whether a ticket of this type occupies a seat.
    ///
    /// Infants travel on an adult's lap and are excluded from seat counts.
    #[must_use]
    pub const fn occupies_seat(self) -> bool {
        !matches!(self, Self::Infant)
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adult => write!(f, "Adult"),
            Self::Child => write!(f, "Child"),
            Self::Infant => write!(f, "Infant"),
        }
    }
}

// ============================================================================
// Ticket Type Request
// ============================================================================

/// An immutable request line: how many tickets of one type.
///
/// Can only be built through [`TicketTypeRequest::new`], which rejects a zero
/// quantity, so every constructed value holds `quantity >= 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    quantity: u32,
}

impl TicketTypeRequest {
    /// Creates a request for `quantity` tickets of `ticket_type`.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::ZeroTicketQuantity`] if `quantity` is zero.
    pub const fn new(ticket_type: TicketType, quantity: u32) -> Result<Self> {
        if quantity == 0 {
            return Err(PurchaseError::ZeroTicketQuantity);
        }
        Ok(Self {
            ticket_type,
            quantity,
        })
    }

    /// The ticket type this line requests.
    #[must_use]
    pub const fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    /// How many tickets this line requests (always at least one).
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }
}

impl fmt::Display for TicketTypeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.ticket_type, self.quantity)
    }
}
