//! Ticket module
//!
//! One ticket per eligible comment; a commenter's weight is their ticket count.

mod builder;
mod pool;

pub use builder::{RejectedComment, TicketBuilder, ValidationReport};
pub use pool::{Ticket, TicketPool};
