//! Error types for Scribe
//!
//! [`ScribeError`] is the crate-wide error. Tool calls report through
//! [`crate::tools::ToolError`], and the runtime collaborators carry their own
//! error enums that convert into [`ScribeError`].

mod types;


pub use types::{ScribeError, ScribeResult};
