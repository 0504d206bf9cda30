//! Draw module
//!
//! Uniform selection over tickets and the per-user chance table.
//!
//! # Example
//!
//! ```
//! use gw_core::draw::Drawer;
//! use gw_core::ticket::TicketPool;
//!
//! let pool = TicketPool::from_usernames(["alice", "bob", "alice"]);
//! let outcome = Drawer::seeded(42).draw(&pool).unwrap();
//! assert_eq!(outcome.chances.get("alice").unwrap().tickets, 2);
//! ```

mod chances;
mod drawer;

pub use chances::{ChanceTable, UserChance};
pub use drawer::{DrawOutcome, Drawer, MAX_SEED};
