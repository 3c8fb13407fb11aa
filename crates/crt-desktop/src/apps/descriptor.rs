//! Application descriptor

use std::fmt;
use std::sync::Arc;

use super::AppContent;
use crate::math::{Size, Vec2};
use crate::types::AppId;

/// Static description of an application that can be opened in a window
#[derive(Clone)]
pub struct AppDescriptor {
    pub id: AppId,
    pub title: String,
    /// Glyph shown on the desktop icon, title bar and taskbar
    pub icon: String,
    /// Requested window size; the config default applies when `None`
    pub initial_size: Option<Size>,
    /// Requested window position; the config default applies when `None`
    pub initial_pos: Option<Vec2>,
    pub content: Arc<dyn AppContent>,
}

impl AppDescriptor {
    pub fn new(
        id: impl Into<AppId>,
        title: impl Into<String>,
        icon: impl Into<String>,
        content: Arc<dyn AppContent>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: icon.into(),
            initial_size: None,
            initial_pos: None,
            content,
        }
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.initial_size = Some(Size::new(width, height));
        self
    }

    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.initial_pos = Some(Vec2::new(x, y));
        self
    }
}

impl fmt::Debug for AppDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppDescriptor")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("icon", &self.icon)
            .field("initial_size", &self.initial_size)
            .field("initial_pos", &self.initial_pos)
            .finish_non_exhaustive()
    }
}
