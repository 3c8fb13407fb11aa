//! Workspace size tracking and containment
//!
//! The host observes the workspace element and reports its size through
//! [`ContainerBoundsTracker::observe`]. Geometry operations read the cached
//! value; drags take a snapshot when they start and keep using it.

use tracing::debug;

use crate::math::{Size, Vec2};

/// Cached workspace size plus the clamping rules built on it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerBoundsTracker {
    size: Size,
}

impl ContainerBoundsTracker {
    pub fn new(initial: Size) -> Self {
        Self { size: initial }
    }

    /// Record a new workspace size (resize observer callback)
    ///
    /// Returns true when the size actually changed.
    pub fn observe(&mut self, width: f32, height: f32) -> bool {
        let next = Size::new(width.max(0.0), height.max(0.0));
        if next == self.size {
            return false;
        }
        debug!(
            width = next.width,
            height = next.height,
            "workspace resized"
        );
        self.size = next;
        true
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Copy of the current bounds, taken at drag start
    pub fn snapshot(&self) -> Size {
        self.size
    }

    /// Size of a newly opened window: the declared size, shrunk to leave
    /// `margin` free inside the workspace
    ///
    /// A workspace too small for that (collapsed, or not laid out yet)
    /// still allows windows up to `min`.
    pub fn fit_window_size(&self, declared: Size, margin: f32, min: Size) -> Size {
        let room = self.size.inset(margin);
        let ceiling = Size::new(room.width.max(min.width), room.height.max(min.height));
        declared.min(ceiling)
    }

    /// Keep a window of `size` fully inside the workspace
    pub fn clamp_window_position(&self, pos: Vec2, size: Size) -> Vec2 {
        clamp_into(self.size, pos, size)
    }

    /// Limit a window's size so its right and bottom edges stay inside the
    /// workspace, never going below `min`
    pub fn clamp_window_size(&self, pos: Vec2, size: Size, min: Size) -> Size {
        let max_w = (self.size.width - pos.x.max(0.0)).max(min.width);
        let max_h = (self.size.height - pos.y.max(0.0)).max(min.height);
        Size::new(
            size.width.max(min.width).min(max_w),
            size.height.max(min.height).min(max_h),
        )
    }
}

/// Clamp `pos` into `[0, bounds - size]`, pinning to 0 when the window is
/// larger than the bounds
pub(crate) fn clamp_into(bounds: Size, pos: Vec2, size: Size) -> Vec2 {
    let max = Vec2::new(
        (bounds.width - size.width).max(0.0),
        (bounds.height - size.height).max(0.0),
    );
    pos.clamp(Vec2::ZERO, max)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// A clamped window never has an edge outside the workspace
        #[test]
        fn clamped_window_stays_inside(
            x in -2000.0f32..2000.0,
            y in -2000.0f32..2000.0,
            w in 1.0f32..800.0,
            h in 1.0f32..600.0,
        ) {
            let bounds = ContainerBoundsTracker::new(Size::new(800.0, 600.0));
            let pos = bounds.clamp_window_position(Vec2::new(x, y), Size::new(w, h));
            prop_assert!(pos.x >= 0.0 && pos.y >= 0.0);
            prop_assert!(pos.x + w <= 800.0 + 0.001, "right edge {} past 800", pos.x + w);
            prop_assert!(pos.y + h <= 600.0 + 0.001, "bottom edge {} past 600", pos.y + h);
        }
    }
}
