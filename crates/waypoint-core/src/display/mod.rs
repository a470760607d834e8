//! Markdown formatting for models and operation results.
//!
//! - [`models`]: `Display` for each domain model
//! - [`results`]: confirmations and list wrappers
//! - [`datetime`]: timestamps in the system timezone

pub mod datetime;
pub mod models;
pub mod results;

pub use datetime::LocalDateTime;
pub use results::{Created, Deleted, Listing, Updated};
