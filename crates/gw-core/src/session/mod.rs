//! Draw session module
//!
//! A session is the explicit context passed between pipeline steps:
//! - The comments loaded from one source
//! - A summary of that source (rows read, rows skipped)
//! - The latest validation report, once validation has run
//!
//! # Example
//!
//! ```
//! use gw_core::comment::Comment;
//! use gw_core::draw::Drawer;
//! use gw_core::session::DrawSession;
//! use gw_core::ticket::TicketBuilder;
//!
//! let mut session = DrawSession::from_comments(
//!     "inline",
//!     vec![Comment::new("alice", "@a @b @c"), Comment::new("bob", "@a")],
//! );
//! session.validate(&TicketBuilder::default());
//! let outcome = session.draw(&mut Drawer::seeded(1)).unwrap();
//! assert_eq!(outcome.winner, "alice");
//! ```

mod model;

pub use model::{DrawSession, SourceSummary};
