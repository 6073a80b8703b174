//! Tool state shared by tools of one agent

use crate::runtime::{ContainerManager, InteractiveSession};
use std::fmt;
use std::sync::Arc;

/// Shell session and optional container shared by an agent's tools
///
/// Created on first use and replaced only when a reset is requested.
pub struct ToolState {
    pub shell: Option<Box<dyn InteractiveSession>>,
    pub container: Option<Arc<dyn ContainerManager>>,
}

impl ToolState {
    /// Name this state is reported under in logs
    pub const KEY: &'static str = "cot_state";

    pub fn new(
        shell: Option<Box<dyn InteractiveSession>>,
        container: Option<Arc<dyn ContainerManager>>,
    ) -> Self {
        Self { shell, container }
    }

    pub fn container(&self) -> Option<&Arc<dyn ContainerManager>> {
        self.container.as_ref()
    }

    pub fn shell_mut(&mut self) -> Option<&mut (dyn InteractiveSession + 'static)> {
        self.shell.as_deref_mut()
    }
}

impl fmt::Debug for ToolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolState")
            .field("shell", &self.shell.is_some())
            .field("container", &self.container.is_some())
            .finish()
    }
}
