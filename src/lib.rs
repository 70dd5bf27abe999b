//! # Box Office
//!
//! Ticket purchase validation and orchestration for a venue booking platform.
//!
//! The crate has exactly one moving part, [`TicketService`]: it decides
//! whether a purchase request is admissible, computes its monetary and
//! seating consequences, and — only if every rule passes — delegates to two
//! external collaborators, payment first, then seat reservation.
//!
//! ```text
//! account id + ticket requests
//!            │
//!            ▼
//!   ┌─────────────────┐   all rules pass   ┌──────────────────┐
//!   │  TicketService  │──────────────────▶│ TicketPayment    │
//!   │  (validate +    │                    │ Service          │
//!   │   aggregate)    │──────────────────▶│ SeatReservation  │
//!   └─────────────────┘   then, once each  │ Service          │
//!            │                             └──────────────────┘
//!            ▼ any rule fails
//!      PurchaseError (no collaborator touched)
//! ```
//!
//! ## Rules
//!
//! - The account id must be present and positive.
//! - At least one ticket must be requested.
//! - At most 25 tickets per purchase (25 itself is fine).
//! - Child or Infant tickets require at least one Adult ticket.
//!
//! Prices are fixed for the life of the process (Adult 25, Child 15,
//! Infant 0) and infants do not occupy a seat.
//!
//! ## Example
//!
//! ```
//! use box_office::{
//!     AcceptingPaymentService, AcceptingReservationService, TicketService, TicketType,
//!     TicketTypeRequest,
//! };
//!
//! # fn main() -> box_office::Result<()> {
//! let service = TicketService::new(
//!     AcceptingPaymentService::shared(),
//!     AcceptingReservationService::shared(),
//! );
//!
//! let adults = TicketTypeRequest::new(TicketType::Adult, 2)?;
//! let infant = TicketTypeRequest::new(TicketType::Infant, 1)?;
//! service.purchase_tickets(Some(1), &[Some(adults), Some(infant)])?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod collaborators;
pub mod error;
pub mod service;
pub mod types;

pub use collaborators::{
    AcceptingPaymentService, AcceptingReservationService, SeatReservationService,
    TicketPaymentService,
};
pub use error::{PurchaseError, Result};
pub use service::TicketService;
pub use types::{TicketType, TicketTypeRequest, MAX_TICKETS_PER_PURCHASE};
