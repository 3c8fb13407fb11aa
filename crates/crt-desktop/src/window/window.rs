//! Window instance

use serde::{Deserialize, Serialize};

use crate::math::{Rect, Size, Vec2};
use crate::types::{AppId, InstanceId};

/// One opened occurrence of an application
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowInstance {
    pub instance_id: InstanceId,
    pub app_id: AppId,
    /// Top-left corner in workspace pixels
    pub position: Vec2,
    pub size: Size,
    /// Stacking order, higher paints on top
    pub z: u64,
    pub minimized: bool,
    /// Geometry to return to when un-maximizing; `Some` while maximized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_maximize: Option<Rect>,
}

impl WindowInstance {
    /// Get the bounding rectangle
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    pub fn is_maximized(&self) -> bool {
        self.pre_maximize.is_some()
    }

    pub(crate) fn set_rect(&mut self, rect: Rect) {
        self.position = rect.position();
        self.size = rect.size();
    }
}
