//! File operation tools

pub mod write;

pub use write::{FileWriteTool, ValidationError, WriteOutcome, WriteRequest};
