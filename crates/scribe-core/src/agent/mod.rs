//! Per-agent context shared by tools
//!
//! An [`AgentContext`] is owned by one agent and passed by `&mut` into every
//! tool call, so calls for that agent never overlap. It carries the
//! configuration, the execution log, the conversation history and the lazily
//! created [`ToolState`].

mod context;
mod history;
mod state;

#[cfg(test)]
mod tests;

pub use context::AgentContext;
pub use history::{Message, MessageRole};
pub use state::ToolState;
