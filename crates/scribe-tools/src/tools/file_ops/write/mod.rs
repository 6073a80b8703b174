//! `write_file` tool
//!
//! Writes a text file under the agent's sandbox root and mirrors it into the
//! execution container, so later shell commands on either side see it.

mod schema;
mod tool;
mod types;
mod validation;
mod writer;


// Re-export public items
pub use types::FileWriteTool;
pub use validation::{ValidationError, WriteRequest};
pub use writer::WriteOutcome;
