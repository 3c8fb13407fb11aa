//! Result of routing a pointer event

use serde::{Deserialize, Serialize};

use crate::types::InstanceId;

/// What the host should do after handing the engine a pointer event
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputResult {
    /// The desktop consumed the event; re-render
    Handled,
    /// Nothing on the desktop cared about the event
    Unhandled,
    /// The press landed in a window's content area; the window was focused
    /// and the event belongs to the app inside it
    Forward {
        instance_id: InstanceId,
        local_x: f32,
        local_y: f32,
    },
}
