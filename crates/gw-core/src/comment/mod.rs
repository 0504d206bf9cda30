//! Comment module
//!
//! Comment records, mention extraction and the eligibility rule.

pub mod mention;
pub mod model;
pub mod validator;

pub use mention::{extract_mentions, fold_mention};
pub use model::Comment;
pub use validator::{CommentValidator, Rejection, Verdict};
