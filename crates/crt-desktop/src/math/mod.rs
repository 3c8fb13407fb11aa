//! Core geometry types for the desktop
//!
//! All coordinates are workspace-local pixels with the origin at the
//! top-left corner of the workspace.

mod rect;
mod size;
mod style;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use style::{FrameStyle, FRAME_STYLE};
pub use vec2::Vec2;
